use std::fmt::Display;

use owo_colors::OwoColorize;

use crate::errors::errors::{Error, ErrorTip};

/// How serious a diagnostic is. Only errors stop the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Short machine-readable name, e.g. `UnexpectedToken`.
    pub name: Option<String>,
    pub message: String,
    /// Byte offset the caret points at.
    pub offset: Option<usize>,
    pub tip: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            name: None,
            message: message.into(),
            offset: None,
            tip: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Renders the diagnostic against `source`.
    ///
    /// Info diagnostics print their message only. Everything else prints a
    /// header, the source line with a caret, then the message:
    ///
    /// ```text
    /// [error] example.wi:3:9 (UnexpectedToken)
    ///   3 | let a = #;
    ///     |         ^
    ///
    /// unrecognised token: "#"
    /// ```
    pub fn render(&self, source: &str, file: &str, colour: bool) -> String {
        let severity = self.paint_severity(colour);

        let Some(offset) = self.offset.filter(|_| self.severity != Severity::Info) else {
            return match self.severity {
                Severity::Info => self.message.clone(),
                _ => format!("[{}] {}: {}", severity, file, self.message),
            };
        };

        let (line, column, line_text) = line_and_column(source, offset);
        let line_number = line.to_string();
        let gutter = " ".repeat(line_number.len());
        let caret = if colour {
            "^".red().bold().to_string()
        } else {
            String::from("^")
        };

        let mut rendered = format!("[{}] {}:{}:{}", severity, file, line, column + 1);
        if let Some(name) = &self.name {
            rendered.push_str(&format!(" ({})", name));
        }
        rendered.push_str(&format!("\n  {} | {}", line_number, line_text));
        rendered.push_str(&format!(
            "\n  {} | {}{}",
            gutter,
            caret_padding(line_text, column),
            caret
        ));
        rendered.push_str(&format!("\n\n{}", self.message));
        if let Some(tip) = &self.tip {
            rendered.push_str(&format!("\nhelp: {}", tip));
        }

        rendered
    }

    fn paint_severity(&self, colour: bool) -> String {
        if !colour {
            return self.severity.to_string();
        }

        match self.severity {
            Severity::Info => self.severity.green().to_string(),
            Severity::Warning => self.severity.bright_yellow().to_string(),
            Severity::Error => self.severity.bright_red().bold().to_string(),
        }
    }
}

impl From<&Error> for Diagnostic {
    fn from(error: &Error) -> Self {
        let diagnostic = Diagnostic::new(Severity::Error, error.to_string())
            .with_name(error.get_error_name())
            .with_offset(error.get_position().0 as usize);

        match error.get_tip() {
            ErrorTip::None => diagnostic,
            ErrorTip::Suggestion(tip) => diagnostic.with_tip(tip),
        }
    }
}

/// Finds the line holding byte `offset` in `source`.
///
/// Returns the 1-based line number, the 0-based column in characters and
/// the line's text without its terminator. Offsets past the end land on the
/// end of the last line.
pub fn line_and_column(source: &str, offset: usize) -> (usize, usize, &str) {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();
        let text = line.trim_end_matches(['\n', '\r']);

        if (start..end).contains(&offset) {
            return (line_number, char_column(text, offset - start), text);
        }

        if end >= source.len() && !line.ends_with('\n') {
            return (line_number, text.chars().count(), text);
        }

        start = end;
        line_number += 1;
    }

    // Empty source, or an offset after a trailing newline
    (line_number, 0, "")
}

/// Number of characters of `text` that start before byte `offset`.
fn char_column(text: &str, offset: usize) -> usize {
    text.char_indices()
        .take_while(|(index, _)| *index < offset)
        .count()
}

/// Whitespace that lines the caret up under `column`, keeping tabs.
fn caret_padding(line_text: &str, column: usize) -> String {
    line_text
        .chars()
        .take(column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}
