use colored::*;

use super::NotificationSink;

/// Prints one colored line per notification to stderr.
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    color: bool,
}

impl TerminalNotifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn render(&self, prefix: &str, message: &str, success: bool) -> String {
        if !self.color {
            return format!("{} {}", prefix, message);
        }
        if success {
            format!("{} {}", prefix.green().bold(), message)
        } else {
            format!("{} {}", prefix.red().bold(), message)
        }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NotificationSink for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        eprintln!("{}", self.render("✔", message, true));
    }

    fn notify_failure(&self, message: &str) {
        eprintln!("{}", self.render("✘", message, false));
    }
}
