//! Labelled example lines, section headers and error lines.

use std::fmt::{Debug, Display};

use owo_colors::{OwoColorize, Style};

/// `text` in `style`, or plain when colors are off.
fn paint(text: impl Display, style: Style) -> String {
    if super::no_color() {
        text.to_string()
    } else {
        text.style(style).to_string()
    }
}

/// Prints `label: value` lines with the label padded to a fixed column.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    label_width: usize,
    label_style: Style,
}

impl Printer {
    pub fn new(label_width: usize) -> Self {
        Self {
            label_width,
            label_style: Style::new().dimmed(),
        }
    }

    /// The padded label column, without styling.
    fn label_column(&self, label: &str) -> String {
        format!("{:<width$}", format!("{label}:"), width = self.label_width)
    }

    pub fn labeled(&self, label: &str, value: impl Display) {
        // Pad before styling so escape codes do not count toward the width.
        println!("{} {value}", paint(self.label_column(label), self.label_style));
    }

    /// `Debug` form, for collections.
    pub fn labeled_debug(&self, label: &str, value: impl Debug) {
        self.labeled(label, format!("{value:?}"));
    }
}

pub fn print_header(title: &str) {
    println!();
    println!(
        "{}",
        paint(format!("===== {title} ====="), Style::new().cyan().bold())
    );
}

pub fn print_error(msg: &str) {
    eprintln!("{} {msg}", paint("✗", Style::new().red().bold()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_column_pads_to_width() {
        let printer = Printer::new(10);
        assert_eq!(printer.label_column("Sum"), "Sum:      ");
        assert_eq!(printer.label_column("Sum").len(), 10);
    }

    #[test]
    fn long_labels_are_not_truncated() {
        let printer = Printer::new(4);
        assert_eq!(printer.label_column("Pipeline Result"), "Pipeline Result:");
    }
}
