use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat, ViewMode};

pub struct ConsoleRenderer {
    format: OutputFormat,
    view_mode: ViewMode,
    /// One JSON document per line (for `watch`)
    streaming: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, view_mode: ViewMode) -> Self {
        Self {
            format,
            view_mode,
            streaming: false,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn streaming(mut self) -> Self {
        self.streaming = true;
        self
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let mut out = std::io::stdout().lock();

        if self.format == OutputFormat::Json {
            let json = if self.streaming {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            writeln!(out, "{}", json)?;
            out.flush()?;
            return Ok(());
        }

        let show_chrome = self.view_mode != ViewMode::Minimal;

        if show_chrome && let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.view_mode))?;

        if show_chrome && !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}
