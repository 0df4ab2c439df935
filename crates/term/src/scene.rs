//! TerminalScene: the [`Renderer`] used by the game binary.

use anyhow::Result;

use crate::engine::Renderer;
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::scene_view::{SceneView, Viewport};
use crate::types::{Coordinate, Telemetry};

/// Fallback when the terminal size cannot be queried.
const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

pub struct TerminalScene {
    view: SceneView,
    fb: FrameBuffer,
    out: TerminalRenderer,
}

impl TerminalScene {
    pub fn new(view: SceneView, out: TerminalRenderer) -> Self {
        Self {
            view,
            fb: FrameBuffer::new(FALLBACK_VIEWPORT.0, FALLBACK_VIEWPORT.1),
            out,
        }
    }
}

impl Renderer for TerminalScene {
    fn present_terrain(&mut self, points: &[Coordinate]) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_VIEWPORT);
        self.view.begin(&mut self.fb, Viewport::new(w, h));
        self.view.draw_terrain(&mut self.fb, points);
        Ok(())
    }

    fn present_craft(&mut self, position: Coordinate, width: i32, height: i32) -> Result<()> {
        self.view.draw_craft(&mut self.fb, position, width, height);
        Ok(())
    }

    fn present_telemetry(&mut self, telemetry: &Telemetry) -> Result<()> {
        self.view.draw_status(&mut self.fb, telemetry);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.out.draw_swap(&mut self.fb)
    }
}
