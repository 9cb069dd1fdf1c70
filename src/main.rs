//! `log2img` - renders a plain-text shell log as a terminal-window styled image.
//!
//! Invoked as a one-shot conversion step by a capture utility:
//! `log2img <log> <out.png> [--drop-shadow]`. The whole program is a linear
//! pipeline: read, highlight, pad, render, optional drop shadow, write.

mod error;
mod font;
mod highlight;
mod layout;
mod render;
mod shadow;
mod theme;

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::error::Error;
use crate::font::TextFont;
use crate::highlight::{Lexer, Span};
use crate::layout::{Alignment, Padding};
use crate::render::FrameStyle;
use crate::theme::Theme;

const TITLE_FONT_SIZE: f32 = 14.0;

/// Command-line arguments for `log2img`.
#[derive(Parser, Debug)]
#[command(
    name = "log2img",
    version,
    about = "Render a captured shell log as a terminal-window styled image"
)]
struct Cli {
    /// Input log file.
    #[arg(value_name = "LOG_FILE")]
    log: PathBuf,

    /// Output image file; format inferred from the extension.
    #[arg(value_name = "OUTPUT_FILE")]
    out: PathBuf,

    /// Literal `--drop-shadow` (case-insensitive) enables the drop shadow;
    /// anything else in this slot is ignored.
    #[arg(value_name = "FLAG", allow_hyphen_values = true)]
    post_flag: Option<String>,

    /// Color theme for background and tokens.
    #[arg(long, value_enum, default_value_t = Theme::Monokai)]
    theme: Theme,

    /// Horizontal padding policy.
    #[arg(long, value_enum, default_value_t = Alignment::Centered)]
    align: Alignment,

    /// Syntax-highlighting lexer (shell, sh, bash, zsh, plain, text, none).
    #[arg(long, default_value = "shell")]
    lexer: String,

    /// Content font size in pixels.
    #[arg(long, default_value_t = 16.0)]
    font_size: f32,

    /// Render without the window border, title bar and buttons.
    #[arg(long)]
    plain_frame: bool,

    /// Title-bar label.
    #[arg(long, default_value = "Terminal")]
    title: String,

    /// Monospace font file tried before the default candidates.
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Gaussian blur radius for the drop shadow.
    #[arg(long, default_value_t = 10.0)]
    blur_radius: f32,

    /// Write debug logs to file.
    #[arg(long, value_name = "FILE")]
    debug_log: Option<String>,
}

impl Cli {
    fn drop_shadow_requested(&self) -> bool {
        self.post_flag
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("--drop-shadow"))
    }
}

/// Logs a message to the specified debug file if provided.
fn log_debug(path: Option<&str>, msg: &str) {
    if let Some(p) = path {
        use std::io::Write;
        if let Ok(mut file) = fs::OpenOptions::new().append(true).create(true).open(p) {
            let _ = writeln!(file, "[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), msg);
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let debug_path = cli.debug_log.as_deref();
    log_debug(debug_path, "Starting log2img execution.");

    let text = fs::read_to_string(&cli.log).map_err(|source| Error::FileAccess {
        path: cli.log.clone(),
        source,
    })?;
    log_debug(
        debug_path,
        &format!("Read {} bytes from {:?}.", text.len(), cli.log),
    );

    let lexer = Lexer::from_name(&cli.lexer)?;

    let mut candidates = font::default_font_candidates();
    if let Some(extra) = &cli.font {
        candidates.insert(0, extra.clone());
    }
    let content_font = TextFont::load(&candidates, cli.font_size)?;
    // The title font is decorative; fall back to the content font rather
    // than failing the whole render over a missing system font.
    let title_font = TextFont::load(&font::title_font_candidates(), TITLE_FONT_SIZE)
        .or_else(|_| TextFont::load(&candidates, TITLE_FONT_SIZE))?;

    let pad = Padding::default();
    let padded = layout::pad_lines(&text, cli.align, &pad);
    let content_size = layout::canvas_size(&content_font, &padded, &pad);
    log_debug(
        debug_path,
        &format!("Layout: {} lines, content {content_size:?}.", padded.len()),
    );

    let lines: Vec<Vec<Span>> = padded.iter().map(|l| lexer.tokenize_line(l)).collect();

    let style = FrameStyle {
        theme: cli.theme,
        chrome: !cli.plain_frame,
        title: cli.title.clone(),
    };
    let frame = render::render_frame(
        &lines,
        &content_font,
        &title_font,
        &style,
        &pad,
        content_size,
    );

    let img = if cli.drop_shadow_requested() {
        log_debug(debug_path, "Applying drop shadow.");
        shadow::drop_shadow(&frame, cli.blur_radius)
    } else {
        frame
    };

    img.save(&cli.out).map_err(|source| Error::Write {
        path: cli.out.clone(),
        source,
    })?;
    log_debug(debug_path, &format!("Image saved to {:?}.", cli.out));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
