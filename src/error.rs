use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort the render pipeline. No step retries; the first
/// failure propagates out of `main` and the process exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read log file {path}: {source}")]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("no usable font found (searched: {searched})")]
    FontLoad { searched: String },

    #[error("unknown lexer {0:?} (expected one of: shell, sh, bash, plain, text, none)")]
    Config(String),

    #[error("cannot write image {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}
