//! Verbose progress logger for crew assembly.

use chrono::Local;

use crate::utilities::printer::{Printer, PrinterColor};

/// Logger with optional verbose output and timestamps.
///
/// Messages always go to the `log` facade; when `verbose` is set they are
/// also printed to the console with a timestamp.
#[derive(Debug, Clone)]
pub struct Logger {
    /// Enables console output with timestamps.
    pub verbose: bool,
    /// Default color for console messages.
    pub default_color: PrinterColor,
    printer: Printer,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Logger {
    /// Create a new `Logger`.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            default_color: PrinterColor::BoldYellow,
            printer: Printer::default(),
        }
    }

    /// Log a message at `level`.
    ///
    /// # Arguments
    /// * `level` - The log level (e.g., "info", "warning", "error").
    /// * `message` - The message to log.
    /// * `color` - Optional color override for the console line.
    pub fn log(&self, level: &str, message: &str, color: Option<PrinterColor>) {
        match level.to_lowercase().as_str() {
            "error" => log::error!("{}", message),
            "warning" | "warn" => log::warn!("{}", message),
            "debug" => log::debug!("{}", message),
            _ => log::info!("{}", message),
        }

        if self.verbose {
            let color = color.unwrap_or(self.default_color);
            self.printer.print(&format_entry(level, message), color);
        }
    }
}

/// Format a console log entry: `[timestamp][LEVEL]: message`.
fn format_entry(level: &str, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}][{}]: {}", timestamp, level.to_uppercase(), message)
}
