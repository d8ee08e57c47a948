use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DateStyle};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
    pub dates: DateStyle,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs, dates: DateStyle) -> Self {
        Self {
            format,
            view_mode: view_mode.resolve(),
            dates,
        }
    }

    /// For commands without --quiet/--compact/--verbose
    pub fn standard(format: OutputFormat, dates: DateStyle) -> Self {
        Self {
            format,
            view_mode: ViewMode::default(),
            dates,
        }
    }

    pub fn dates(&self) -> DateStyle {
        self.dates.clone()
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.view_mode);
        renderer.render(view_model)
    }

    /// Like `render`, but JSON goes out as one document per line.
    pub fn render_streaming<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.view_mode).streaming();
        renderer.render(view_model)
    }
}
