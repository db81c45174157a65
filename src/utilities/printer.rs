//! Console printer utility with color support.

use serde::{Deserialize, Serialize};

/// Available colors for printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterColor {
    Red,
    Green,
    Yellow,
    Cyan,
    BoldRed,
    BoldGreen,
    BoldYellow,
    BoldCyan,
    BoldWhite,
}

impl PrinterColor {
    /// ANSI escape code for this color.
    fn ansi_code(&self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Cyan => "\x1b[36m",
            Self::BoldRed => "\x1b[1;31m",
            Self::BoldGreen => "\x1b[1;32m",
            Self::BoldYellow => "\x1b[1;33m",
            Self::BoldCyan => "\x1b[1;36m",
            Self::BoldWhite => "\x1b[1;37m",
        }
    }
}

/// ANSI reset code.
const RESET: &str = "\x1b[0m";

/// A line of report output with an optional color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub color: Option<PrinterColor>,
}

impl ReportLine {
    /// Uncolored line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Colored line.
    pub fn colored(text: impl Into<String>, color: PrinterColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Printer for console output with color support.
#[derive(Debug, Clone, Default)]
pub struct Printer;

impl Printer {
    /// Create a new `Printer`.
    pub fn new() -> Self {
        Self
    }

    /// Print a message with the specified color.
    pub fn print(&self, content: &str, color: PrinterColor) {
        println!("{}", paint(content, color));
    }

    /// Print a sequence of report lines, coloring those that ask for it.
    pub fn print_lines(&self, lines: &[ReportLine]) {
        for line in lines {
            match line.color {
                Some(color) => self.print(&line.text, color),
                None => println!("{}", line.text),
            }
        }
    }
}

/// Wrap `content` in the ANSI codes for `color`.
pub fn paint(content: &str, color: PrinterColor) -> String {
    format!("{}{}{}", color.ansi_code(), content, RESET)
}

/// Join report lines into plain text without color codes.
pub fn plain_text(lines: &[ReportLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_with_reset() {
        let painted = paint("ok", PrinterColor::Green);
        assert_eq!(painted, "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn test_plain_text_strips_colors() {
        let lines = vec![
            ReportLine::plain("first"),
            ReportLine::colored("second", PrinterColor::BoldRed),
        ];
        assert_eq!(plain_text(&lines), "first\nsecond");
    }
}
