use crate::error::Result;
use colored::*;
use comfy_table::Table;
use serde::Serialize;

/// How list results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Plain,
}

/// Unified output formatter for all commands
pub struct OutputFormatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color_enabled: true,
        }
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Render rows in the configured format
    pub fn items<T>(&self, items: &[T]) -> Result<()>
    where
        T: TableFormat + PlainFormat + Serialize,
    {
        match self.format {
            OutputFormat::Table => self.table(items),
            OutputFormat::Json => self.json(items),
            OutputFormat::Plain => self.plain(items),
        }
    }

    /// Render a list of strings as a one-column table
    pub fn column(&self, header: &str, values: &[String]) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_header(vec![header]);
                table.load_preset(comfy_table::presets::NOTHING);
                for value in values {
                    table.add_row(vec![value]);
                }
                println!("{}", table);
                Ok(())
            }
            OutputFormat::Json => self.json(values),
            OutputFormat::Plain => self.plain(values),
        }
    }

    /// Format items as a table
    pub fn table<T: TableFormat>(&self, items: &[T]) -> Result<()> {
        let mut table = Table::new();
        table.set_header(T::headers());
        table.load_preset(comfy_table::presets::NOTHING);

        for item in items {
            table.add_row(item.row());
        }

        println!("{}", table);
        Ok(())
    }

    /// Format a value as JSON
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let json = if self.color_enabled {
            colored_json::to_colored_json_auto(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        println!("{}", json);
        Ok(())
    }

    /// Format items as plain text
    pub fn plain<T: PlainFormat>(&self, items: &[T]) -> Result<()> {
        for item in items {
            println!("{}", item.plain());
        }
        Ok(())
    }

    /// Print command output verbatim
    pub fn text(&self, text: &str) {
        print!("{}", text);
        if !text.is_empty() && !text.ends_with('\n') {
            println!();
        }
    }

    /// Print a success message
    pub fn success(&self, msg: &str) {
        if self.color_enabled {
            println!("{}", msg.bright_green());
        } else {
            println!("{}", msg);
        }
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        let msg = msg.trim_end();
        if self.color_enabled {
            eprintln!("{}", msg.bright_red());
        } else {
            eprintln!("ERROR: {}", msg);
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

/// Trait for types that can be formatted as a table
pub trait TableFormat {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// Trait for types that can be formatted as plain text
pub trait PlainFormat {
    fn plain(&self) -> String;
}

impl PlainFormat for String {
    fn plain(&self) -> String {
        self.clone()
    }
}

mod device;
