//! Lexical highlighting for captured shell output.
//!
//! A deliberately small line classifier: tokens never span lines, every
//! byte of a line lands in exactly one span, and unknown constructs fall
//! back to plain text. Nothing here parses shell grammar for real; it only
//! has to pick colors.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// Token classes a theme can color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Prompt,
    Comment,
    String,
    Flag,
    Number,
    Text,
}

/// A colored run of characters within a single line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Span {
    pub text: String,
    pub kind: TokenKind,
}

impl Span {
    fn new(text: &str, kind: TokenKind) -> Self {
        Span {
            text: text.to_string(),
            kind,
        }
    }
}

/// Available lexers. `Plain` emits every line as a single text span.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lexer {
    Shell,
    Plain,
}

static PROMPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[$%]\s+").unwrap());

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        (?P<string>"(?:[^"\\]|\\.)*"|'[^']*')
        | (?P<comment>\#.*)
        | (?P<flag>--?[A-Za-z][A-Za-z0-9_-]*)
        | (?P<number>[0-9]+(?:\.[0-9]+)?)
        "#,
    )
    .unwrap()
});

impl Lexer {
    /// Resolves a lexer identifier given on the command line. Unknown names
    /// surface as a configuration error rather than silently rendering plain.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name.to_lowercase().as_str() {
            "shell" | "sh" | "bash" | "zsh" => Ok(Lexer::Shell),
            "plain" | "text" | "none" => Ok(Lexer::Plain),
            other => Err(Error::Config(other.to_string())),
        }
    }

    /// Splits one line into colored spans. The concatenation of the returned
    /// span texts always equals the input line.
    pub fn tokenize_line(&self, line: &str) -> Vec<Span> {
        match self {
            Lexer::Plain => vec![Span::new(line, TokenKind::Text)],
            Lexer::Shell => tokenize_shell(line),
        }
    }
}

fn tokenize_shell(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;

    if let Some(m) = PROMPT_RE.find(line) {
        spans.push(Span::new(m.as_str(), TokenKind::Prompt));
        rest = &line[m.end()..];
    }

    let mut cursor = 0;
    for caps in TOKEN_RE.captures_iter(rest) {
        let (m, kind) = if let Some(m) = caps.name("string") {
            (m, TokenKind::String)
        } else if let Some(m) = caps.name("comment") {
            (m, TokenKind::Comment)
        } else if let Some(m) = caps.name("flag") {
            (m, TokenKind::Flag)
        } else {
            (caps.name("number").unwrap(), TokenKind::Number)
        };

        // Flags, comments and numbers only count at word boundaries;
        // "file1.txt" stays text, "-la" inside "foo-la" stays text.
        if kind != TokenKind::String && !word_boundary(rest, m.start(), m.end(), kind) {
            continue;
        }
        if m.start() < cursor {
            continue;
        }

        if m.start() > cursor {
            spans.push(Span::new(&rest[cursor..m.start()], TokenKind::Text));
        }
        spans.push(Span::new(m.as_str(), kind));
        cursor = m.end();
    }
    if cursor < rest.len() {
        spans.push(Span::new(&rest[cursor..], TokenKind::Text));
    }
    if spans.is_empty() {
        spans.push(Span::new("", TokenKind::Text));
    }
    spans
}

fn word_boundary(text: &str, start: usize, end: usize, kind: TokenKind) -> bool {
    let before_ok = start == 0
        || text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || "([{=,;".contains(c));
    if kind == TokenKind::Comment {
        return before_ok;
    }
    let after_ok = end == text.len()
        || text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '.' && c != '-');
    before_ok && after_ok
}
