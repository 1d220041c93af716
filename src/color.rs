//! ANSI color painting for log lines.
//!
//! Each severity maps to a fixed `mode;background;foreground` SGR triple.
//! Painting is pure string formatting, kept separate from the logger so
//! output can be disabled when stdout is not a terminal or redirected to a
//! non-terminal sink.

use std::io::IsTerminal;

/// How color is applied to emitted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when writing to a terminal. Redirected sinks count as
    /// non-terminals.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Resolve the mode against the actual output target.
    pub(crate) fn enabled(self, to_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => to_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Whether process stdout is attached to a terminal.
pub(crate) fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// An SGR style triple: display mode, background slot, foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub mode: u8,
    pub background: u8,
    pub foreground: u8,
}

impl Style {
    /// Wrap `text` in this style's escape/reset pair.
    ///
    /// Layout: a leading space, the SGR sequence, the text (any trailing
    /// newline included, so the reset lands after the line break), then
    /// the reset.
    pub(crate) fn paint(self, text: &str) -> String {
        format!(
            " \x1b[{};{};{}m{}\x1b[0m",
            self.mode, self.background, self.foreground, text
        )
    }
}

/// Style used by the frame-print operations: bold cyan.
pub(crate) const COMMON: Style = Style {
    mode: 1,
    background: 48,
    foreground: 36,
};

/// Message severities. Each carries a fixed style; severity is not data
/// that flows anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Warn,
    Info,
    Important,
}

impl Severity {
    /// The fixed style triple for this severity: bold yellow, green, or
    /// red on the same background slot.
    pub(crate) fn style(self) -> Style {
        let foreground = match self {
            Severity::Warn => 33,
            Severity::Info => 32,
            Severity::Important => 31,
        };
        Style {
            mode: 1,
            background: 48,
            foreground,
        }
    }
}
