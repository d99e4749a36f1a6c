//! Terminal notifier, the CLI stand-in for the host spreadsheet toast.

use colored::Colorize;

use crate::application::Notify;

/// Prints toasts to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermNotifier;

impl Notify for TermNotifier {
    fn toast(&self, message: &str, title: &str) {
        println!("{} {message}", format!("[{title}]").cyan().bold());
    }
}
