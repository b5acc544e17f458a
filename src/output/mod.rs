//
//  roblox-cloud
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `rbx` binary, in two formats:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable JSON output for scripting and automation
//!
//! ## Architecture
//!
//! - [`table`]: Table formatting utilities using `comfy_table`
//! - [`json`]: JSON serialization utilities using `serde_json`
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: Enum representing the available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for types that can be rendered as rows or detail views
//!
//! ## Example
//!
//! ```rust,ignore
//! use roblox_cloud::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&roles)?;
//! writer.write_success("Join request accepted");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats.
///
/// The default is [`OutputFormat::Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables and detail views.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting and automation.
    Json,
}

impl OutputFormat {
    /// Picks the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// A unified output writer that handles both output formats.
///
/// # Example
///
/// ```rust,ignore
/// use roblox_cloud::output::OutputWriter;
///
/// let writer = OutputWriter::table();
/// writer.write(&group_detail)?;
/// writer.write_warning("Some members could not be resolved");
/// ```
///
/// # Notes
///
/// Color output is automatically detected based on terminal capabilities.
/// Colors are disabled when output is piped or redirected.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a new output writer with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    /// Writes a single value as a detail view or a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                value.print_detail(self.color);
                Ok(())
            }
        }
    }

    /// Writes a list as one table or a JSON array.
    ///
    /// An empty list prints an empty JSON array, or nothing at all in table
    /// mode; callers report emptiness themselves.
    pub fn write_list<T: Serialize + TableOutput>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values),
            OutputFormat::Table => {
                if !values.is_empty() {
                    TableBuilder::new()
                        .color(self.color)
                        .headers(T::headers().iter().copied())
                        .rows(values.iter().map(|v| v.row(self.color)))
                        .print();
                }
                Ok(())
            }
        }
    }

    /// Writes an error message to stderr.
    ///
    /// Error messages are always written to stderr, regardless of output format.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning message to stderr.
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes an informational message to stdout, suppressed in JSON mode.
    pub fn write_info(&self, msg: &str) {
        if self.format == OutputFormat::Table {
            println!("{}", msg);
        }
    }

    /// Writes a success message to stdout.
    ///
    /// In JSON mode the message is emitted as `{"message": ...}` so stdout
    /// stays parseable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "message": msg })),
            OutputFormat::Table if self.color => {
                println!("{} {}", style("✓").green().bold(), msg)
            }
            OutputFormat::Table => println!("✓ {}", msg),
        }
    }
}

/// A trait for types that can be rendered in table mode.
///
/// Lists are rendered as one table with [`headers`](TableOutput::headers)
/// and one [`row`](TableOutput::row) per item. Single values use
/// [`print_detail`](TableOutput::print_detail), which defaults to a one-row
/// table.
///
/// # Example
///
/// ```rust,ignore
/// use roblox_cloud::output::TableOutput;
///
/// struct RoleItem { id: String, name: String, rank: u32 }
///
/// impl TableOutput for RoleItem {
///     fn headers() -> &'static [&'static str] {
///         &["ID", "NAME", "RANK"]
///     }
///
///     fn row(&self, _color: bool) -> Vec<String> {
///         vec![self.id.clone(), self.name.clone(), self.rank.to_string()]
///     }
/// }
/// ```
pub trait TableOutput: Sized {
    /// Column headers for list output.
    fn headers() -> &'static [&'static str];

    /// The cells of this item's row, in header order.
    fn row(&self, color: bool) -> Vec<String>;

    /// Renders this item on its own.
    fn print_detail(&self, color: bool) {
        TableBuilder::new()
            .color(color)
            .headers(Self::headers().iter().copied())
            .row(self.row(color))
            .print();
    }
}

/// Prints a styled header with an underline.
///
/// The underline uses ASCII dashes for maximum terminal compatibility.
pub fn print_header(text: &str, color: bool) {
    use console::style;
    if color {
        println!("{}", style(text).bold());
    } else {
        println!("{}", text);
    }
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a key-value pair, dimming the key when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
