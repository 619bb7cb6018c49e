use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::views::ViewContext;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    ctx: ViewContext,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, ctx: ViewContext) -> Self {
        Self { format, ctx }
    }

    /// The text form, badge and tips included, as written to stdout.
    pub fn render_text<T>(&self, result: &CommandResultViewModel<T>) -> String
    where
        T: Serialize + CreateView,
    {
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            out.push_str(&format!("{} {}\n\n", badge.icon(), self.ctx.bold(&badge.label)));
        }

        out.push_str(&result.content.create_view(&self.ctx).to_string());

        if !result.suggestions.is_empty() {
            let title = if self.ctx.color {
                "💡 Tips:".yellow().bold().to_string()
            } else {
                "💡 Tips:".to_string()
            };
            out.push_str(&format!("\n{}\n", title));
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    if self.ctx.color {
                        out.push_str(&format!(": {}", cmd.cyan()));
                    } else {
                        out.push_str(&format!(": {}", cmd));
                    }
                }
                out.push('\n');
            }
        }

        out
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Csv => {
                let Some(table) = result.content.to_csv() else {
                    bail!("csv output is not available for this command; use --format plain or json");
                };
                let mut writer = csv::Writer::from_writer(std::io::stdout());
                writer.write_record(&table.headers)?;
                for row in &table.rows {
                    writer.write_record(row)?;
                }
                writer.flush()?;
            }
            OutputFormat::Plain => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(self.render_text(&result).as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
