//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::OptimizeReport;
use crate::domain::size::ByteSize;
use crate::domain::upload::UploadFormat;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Handle for updating the spinner from another thread
    pub fn spinner_handle(&self) -> Option<ProgressBar> {
        self.spinner.clone()
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print the before/after summary of an optimization run
    pub fn compression_summary(&self, report: &OptimizeReport) {
        eprintln!(
            "  {} {} ({}, {} Hz, {} ch)",
            "in: ".dimmed(),
            report.input_name,
            report.input_size,
            report.original.sample_rate,
            report.original.channels
        );
        eprintln!(
            "  {} {} ({}, {} Hz, mono)",
            "out:".dimmed(),
            report.output_name,
            report.output_size,
            report.output.sample_rate
        );
        eprintln!(
            "  {} {}",
            "saved".dimmed(),
            format_ratio(report.compression_ratio()).green()
        );
    }

    /// Print one accepted upload format
    pub fn format_entry(&self, format: UploadFormat) {
        println!("{:<6} {}", format.extension().cyan(), format.mime_type());
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a size reduction percentage
pub fn format_ratio(percent: f64) -> String {
    if percent < 0.0 {
        format!("{:.1}% larger", -percent)
    } else {
        format!("{:.1}%", percent)
    }
}

/// Format "actual / limit" for size checks
pub fn format_size_against(actual: ByteSize, limit: ByteSize) -> String {
    format!("{} / {}", actual, limit)
}
