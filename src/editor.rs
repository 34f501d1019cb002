//! Tool session over a borrowed canvas.
//!
//! An [`Editor`] is what a host UI keeps around between events: a non-owning
//! handle to the canvas it was created with, the tool set and the currently
//! selected tool. Mouse events become [`Gesture`]s routed to the active tool.

use crate::canvas::PixelBuffer;
use crate::command::Command;
use crate::error::Result;
use crate::raster::RecursionMode;
use crate::tool::{Gesture, ShapeKind, Tool, ToolKind, Toolbox};

/// Routes gestures from the UI to the selected tool.
pub struct Editor<'a, B: PixelBuffer> {
    canvas: &'a mut B,
    toolbox: Toolbox,
    active: ToolKind,
}

impl<'a, B: PixelBuffer> Editor<'a, B> {
    /// Create an editor over `canvas` with the line tool selected.
    pub fn new(canvas: &'a mut B) -> Self {
        Self::with_tools(canvas, ToolKind::default(), RecursionMode::default())
    }

    /// Create an editor with an initial tool and recursion mode.
    pub fn with_tools(canvas: &'a mut B, active: ToolKind, mode: RecursionMode) -> Self {
        Self { canvas, toolbox: Toolbox::new(mode), active }
    }

    /// Switch the active tool.
    pub fn select(&mut self, kind: ToolKind) {
        if kind != self.active {
            crate::debug!("editor", "select {kind}");
        }
        self.active = kind;
    }

    /// The selected tool's kind.
    pub fn active_kind(&self) -> ToolKind {
        self.active
    }

    /// The selected tool.
    pub fn tool(&self) -> &dyn Tool {
        self.toolbox.get(self.active)
    }

    /// Preview shape of the selected tool.
    pub fn shape(&self) -> ShapeKind {
        self.tool().shape()
    }

    /// Whether the selected tool accepts drags.
    pub fn is_draggable(&self) -> bool {
        self.tool().is_draggable()
    }

    /// Status line of the selected tool.
    pub fn status_text(&self) -> &'static str {
        self.tool().status_text()
    }

    /// Read access to the canvas.
    pub fn canvas(&self) -> &B {
        &*self.canvas
    }

    /// Feed a gesture to the selected tool.
    pub fn apply(&mut self, gesture: Gesture) -> Result<()> {
        let tool = self.toolbox.get(self.active);
        tool.draw(&mut *self.canvas, gesture).map_err(|e| {
            crate::warn!("editor", "{} refused {gesture}: {e}", tool.name());
            e
        })
    }

    /// Click at `(x, y)` with the selected tool.
    pub fn click(&mut self, x: i32, y: i32) -> Result<()> {
        self.apply(Gesture::Click { x, y })
    }

    /// Drag from `(x0, y0)` to `(x1, y1)` with the selected tool.
    pub fn drag(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        self.apply(Gesture::Drag { x0, y0, x1, y1 })
    }

    /// Run a command, selecting whichever tools it needs. The last tool used
    /// stays selected.
    pub fn run(&mut self, command: &Command) -> Result<()> {
        crate::time_scope!("editor", command.to_string());
        for (kind, gesture) in command.gestures() {
            self.select(kind);
            self.apply(gesture)?;
        }
        Ok(())
    }
}
