pub mod cli;
mod scan;
mod span;

pub use scan::{Scanner, Token, TokenKind};
pub use span::Span;

use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

/// Write one line per token of `source`, `Eof` included, and return the
/// error tokens met along the way.
///
/// ```text
///    1 var          'var'
///    | <identifier> 'x'
///    2 <EOF>        ''
/// ```
pub fn dump_tokens<'a, W: Write>(source: &'a str, out: &mut W) -> io::Result<Vec<Token<'a>>> {
    let mut errors = vec![];
    let mut line = None;

    for token in Scanner::new(source) {
        if line == Some(token.line()) {
            write!(out, "   | ")?;
        } else {
            write!(out, "{:4} ", token.line())?;
            line = Some(token.line());
        }
        writeln!(out, "{:<13}'{}'", token.kind, token.lexeme)?;

        if token.is_error() {
            errors.push(token);
        }
    }

    Ok(errors)
}

/// Dump the tokens of `source` to stdout and report lexical errors on
/// stderr. Returns whether any error was found.
pub fn run(path: &Path, source: &str) -> io::Result<bool> {
    log::debug!("scanning {}", path.display());

    let errors = dump_tokens(source, &mut io::stdout().lock())?;
    for error in &errors {
        report(path, source, error)?;
    }

    log::debug!("{} lexical error(s)", errors.len());
    Ok(!errors.is_empty())
}

/// Render an error token as a diagnostic on stderr.
pub fn report(path: &Path, source: &str, error: &Token<'_>) -> io::Result<()> {
    let path = path.to_string_lossy();
    let path: &str = path.as_ref();
    let range = char_range(source, &error.span);

    Report::build(ReportKind::Error, (path, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(format!("[line {}] Error: {}", error.line(), error.lexeme))
        .with_label(
            Label::new((path, range))
                .with_message(error.lexeme)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((path, Source::from(source)))
}

/// Widen `span` to the characters it touches. A stray byte of a multi-byte
/// character is scanned on its own, but diagnostics can only point at whole
/// characters.
fn char_range(source: &str, span: &Span) -> Range<usize> {
    let mut start = span.start().min(source.len());
    let mut end = span.end().min(source.len());
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    while !source.is_char_boundary(end) {
        end += 1;
    }
    start..end
}
