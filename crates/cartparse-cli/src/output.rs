//! Output formatting and writing utilities
//!
//! Results are written either for people (`human`) or as serialized
//! documents (`json`, `json-pretty`, `yaml`). Status messages only appear in
//! human mode so machine output stays parseable.

use crate::cli::OutputFormat;
use crate::error::Result;
use cartparse_core::{ConsistencyReport, ParsedCart};
use cartparse_schemas::ValidationError;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the errors found in a cart document
    fn format_validation_errors(&self, errors: &[ValidationError]) -> Result<String>;

    /// Format a parsed cart
    fn format_cart(&self, cart: &ParsedCart) -> Result<String>;

    /// Format a consistency report
    fn format_consistency_report(&self, report: &ConsistencyReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // No dedicated human rendering; pretty JSON reads well enough
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_validation_errors(&self, errors: &[ValidationError]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_errors_human(errors)),
            _ => self.format(&errors),
        }
    }

    fn format_cart(&self, cart: &ParsedCart) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_cart_human(cart)),
            _ => self.format(cart),
        }
    }

    fn format_consistency_report(&self, report: &ConsistencyReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_consistency_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Get verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// True for the human format
    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if self.format == OutputFormat::Yaml {
            // serde_yaml already ends with a newline
            self.write(&formatted)
        } else {
            self.writeln(&formatted)
        }
    }

    /// Write validation errors with specialized formatting
    pub fn validation_errors(&mut self, errors: &[ValidationError]) -> Result<()> {
        let formatted = self.format.format_validation_errors(errors)?;
        self.emit(&formatted)
    }

    /// Write a parsed cart
    pub fn cart(&mut self, cart: &ParsedCart) -> Result<()> {
        let formatted = self.format.format_cart(cart)?;
        self.emit(&formatted)
    }

    /// Write a consistency report
    pub fn consistency_report(&mut self, report: &ConsistencyReport) -> Result<()> {
        let formatted = self.format.format_consistency_report(report)?;
        self.emit(&formatted)
    }

    /// Write a table (human format only)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        let mut lines = render_table(headers, &rows).into_iter();
        if let Some(header) = lines.next() {
            if self.use_color {
                self.writeln(&header.bold().to_string())?;
            } else {
                self.writeln(&header)?;
            }
        }
        for line in lines {
            self.writeln(&line)?;
        }

        Ok(())
    }

    fn emit(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

/// Render rows under a header as aligned lines: header, separator, rows
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths = headers
        .iter()
        .map(|h| h.chars().count())
        .collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_row = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(&width) => format!("{:width$}", cell, width = width),
                None => cell.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers.to_vec()));
    lines.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    for row in rows {
        lines.push(render_row(row.iter().map(String::as_str).collect()));
    }
    lines
}

/// Format validation errors for human reading
fn format_validation_errors_human(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "✅ No validation errors\n".to_string();
    }

    let mut output = format!("❌ Validation Failed - {} Error(s)\n\n", errors.len());
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, error));
    }
    output
}

/// Format a parsed cart for human reading
fn format_cart_human(cart: &ParsedCart) -> String {
    let mut output = format!("🛒 Cart - {} Item(s)\n\n", cart.items.len());

    if !cart.items.is_empty() {
        let rows = cart
            .items
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    format!("{:.2}", item.price),
                    item.quantity.to_string(),
                    format!("{:.2}", item.line_total()),
                    item.id.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        for line in render_table(&["Name", "Price", "Quantity", "Line total", "Id"], &rows) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str(&format!("💰 Total: {:.2}\n", cart.total));
    output
}

/// Format a consistency report for human reading
fn format_consistency_report_human(report: &ConsistencyReport) -> String {
    if report.is_consistent() {
        return "✅ Cart document is consistent\n".to_string();
    }

    let mut output = format!("🔍 Consistency Report - {} Issue(s)\n\n", report.len());
    for (i, issue) in report.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, issue));
    }
    output
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
