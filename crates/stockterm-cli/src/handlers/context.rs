use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use stockterm_runtime::Workspace;

use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer, ViewContext};
use crate::types::OutputFormat;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view: ViewContext,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, workspace: &Workspace) -> Self {
        let tty = std::io::stdout().is_terminal();
        let width = if tty {
            terminal_size::terminal_size().map(|(w, _)| usize::from(w.0))
        } else {
            None
        };
        let color = tty && std::env::var_os("NO_COLOR").is_none();

        Self {
            format,
            view: ViewContext::new(workspace.config().display.clone(), color, width),
        }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format, self.view.clone());
        renderer.render(view_model)
    }
}
