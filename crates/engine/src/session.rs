//! A running game: terrain, lander and the renderer they are drawn with.

use std::sync::Arc;

use anyhow::Result;

use crate::core::{Lander, Terrain};
use crate::game_loop::RenderPass;
use crate::render::Renderer;
use crate::types::LanderStatus;

pub struct Session<R> {
    terrain: Arc<Terrain>,
    lander: Lander,
    renderer: R,
    frame: u64,
    status: Option<LanderStatus>,
}

impl<R: Renderer> Session<R> {
    /// Attach `lander` to `terrain` and pair them with a renderer.
    pub fn new(terrain: Arc<Terrain>, mut lander: Lander, renderer: R) -> Self {
        lander.attach(Arc::clone(&terrain));
        Self {
            terrain,
            lander,
            renderer,
            frame: 0,
            status: None,
        }
    }

    pub fn lander(&self) -> &Lander {
        &self.lander
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of completed render passes.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Status reported by the most recent tick.
    pub fn status(&self) -> Option<LanderStatus> {
        self.status
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Advance the lander one tick, then present the frame.
    pub fn render_pass(&mut self) -> Result<LanderStatus> {
        let status = self.lander.update();
        if self.status != Some(status) {
            let pos = self.lander.position();
            log::info!(
                "lander {} at ({}, {}) on frame {}",
                status.as_str().to_lowercase(),
                pos.x,
                pos.y,
                self.frame
            );
        }
        self.status = Some(status);

        self.renderer.present_terrain(self.terrain.points())?;
        self.renderer.present_craft(
            self.lander.position(),
            self.lander.width(),
            self.lander.height(),
        )?;
        self.renderer
            .present_telemetry(&self.lander.telemetry(status, self.frame))?;
        self.renderer.end_frame()?;

        self.frame += 1;
        Ok(status)
    }
}

impl<R: Renderer> RenderPass for Session<R> {
    fn render_pass(&mut self) -> Result<()> {
        Session::render_pass(self).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinate, Telemetry};

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        craft: Vec<Coordinate>,
        terrain_len: usize,
        telemetry: Vec<Telemetry>,
    }

    impl Renderer for Recorder {
        fn present_terrain(&mut self, points: &[Coordinate]) -> Result<()> {
            self.calls.push("terrain");
            self.terrain_len = points.len();
            Ok(())
        }

        fn present_craft(&mut self, position: Coordinate, _w: i32, _h: i32) -> Result<()> {
            self.calls.push("craft");
            self.craft.push(position);
            Ok(())
        }

        fn present_telemetry(&mut self, telemetry: &Telemetry) -> Result<()> {
            self.calls.push("telemetry");
            self.telemetry.push(*telemetry);
            Ok(())
        }

        fn end_frame(&mut self) -> Result<()> {
            self.calls.push("end");
            Ok(())
        }
    }

    fn terrain() -> Arc<Terrain> {
        Arc::new(
            Terrain::from_points(vec![
                Coordinate::new(0, 400),
                Coordinate::new(320, 400),
                Coordinate::new(640, 400),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn new_attaches_lander() {
        let session = Session::new(
            terrain(),
            Lander::new(Coordinate::new(320, 20)),
            Recorder::default(),
        );
        assert!(session.lander().is_attached());
        assert_eq!(session.lander().altitude(), Ok(360));
    }

    #[test]
    fn render_pass_updates_before_presenting() {
        let mut session = Session::new(
            terrain(),
            Lander::new(Coordinate::new(320, 20)),
            Recorder::default(),
        );

        assert_eq!(session.render_pass().unwrap(), LanderStatus::Descending);
        let rec = session.renderer();
        assert_eq!(rec.calls, vec!["terrain", "craft", "telemetry", "end"]);
        assert_eq!(rec.craft, vec![Coordinate::new(320, 21)]);
        assert_eq!(rec.terrain_len, 3);
        assert_eq!(rec.telemetry[0].altitude, Some(359));
        assert_eq!(session.frame(), 1);
    }

    #[test]
    fn grounded_session_keeps_presenting() {
        let mut session = Session::new(
            terrain(),
            Lander::new(Coordinate::new(320, 379)),
            Recorder::default(),
        );

        assert_eq!(session.render_pass().unwrap(), LanderStatus::Descending);
        assert_eq!(session.render_pass().unwrap(), LanderStatus::Grounded);
        assert_eq!(session.render_pass().unwrap(), LanderStatus::Grounded);

        let rec = session.into_renderer();
        assert_eq!(
            rec.craft,
            vec![
                Coordinate::new(320, 380),
                Coordinate::new(320, 380),
                Coordinate::new(320, 380)
            ]
        );
    }

    #[test]
    fn renderer_failure_propagates() {
        struct Broken;
        impl Renderer for Broken {
            fn present_terrain(&mut self, _points: &[Coordinate]) -> Result<()> {
                anyhow::bail!("no terminal")
            }
            fn present_craft(&mut self, _p: Coordinate, _w: i32, _h: i32) -> Result<()> {
                Ok(())
            }
        }

        let mut session = Session::new(terrain(), Lander::new(Coordinate::new(320, 20)), Broken);
        assert!(session.render_pass().is_err());
        assert_eq!(session.frame(), 0);
    }
}
