//! SceneView: maps world geometry (terrain, craft, telemetry) onto a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The top row is a status line; the rest of the viewport shows the world,
//! scaled so that `x = 0..=world_width` spans every column and
//! `y = 0..=world_height` spans every play row. Anything above `y = 0` or
//! right of the world is clipped.

use crate::engine::CraftShape;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coordinate, Telemetry, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Rows reserved above the play area.
pub const STATUS_ROWS: u16 = 1;

const OVAL_SAMPLES: usize = 24;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    world_width: i32,
    world_height: i32,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

const SURFACE: CellStyle = CellStyle::fg(Rgb::new(128, 128, 128));
const GROUND: CellStyle = CellStyle::fg(Rgb::new(60, 60, 60));
const CRAFT: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
const STATUS: CellStyle = CellStyle::fg(Rgb::new(255, 176, 0));

impl SceneView {
    pub fn new(world_width: i32, world_height: i32) -> Self {
        Self {
            world_width: world_width.max(1),
            world_height: world_height.max(1),
        }
    }

    /// Size and blank the framebuffer for a new frame.
    pub fn begin(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
    }

    /// World point to (column, row). Rows include the status offset.
    pub fn to_cell(&self, fb: &FrameBuffer, p: Coordinate) -> (i32, i32) {
        let cols = i64::from(fb.width().max(1)) - 1;
        let rows = i64::from(fb.height().saturating_sub(STATUS_ROWS).max(1)) - 1;
        let col = (i64::from(p.x) * cols).div_euclid(i64::from(self.world_width));
        let row = (i64::from(p.y) * rows).div_euclid(i64::from(self.world_height));
        (
            col.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            (row + i64::from(STATUS_ROWS)).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        )
    }

    fn plot(&self, fb: &mut FrameBuffer, col: i32, row: i32, ch: char, style: CellStyle) {
        if row >= i32::from(STATUS_ROWS) {
            fb.plot(col, row, ch, style);
        }
    }

    /// Draw the terrain as a polyline and shade the ground beneath it.
    pub fn draw_terrain(&self, fb: &mut FrameBuffer, points: &[Coordinate]) {
        let width = usize::from(fb.width());
        let mut surface = vec![i32::MAX; width];

        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let ch = match b.y.cmp(&a.y) {
                std::cmp::Ordering::Less => '/',
                std::cmp::Ordering::Greater => '\\',
                std::cmp::Ordering::Equal => '_',
            };
            line(self.to_cell(fb, a), self.to_cell(fb, b), |col, row| {
                self.plot(fb, col, row, ch, SURFACE);
                if let Some(top) = usize::try_from(col).ok().and_then(|c| surface.get_mut(c)) {
                    *top = (*top).min(row);
                }
            });
        }

        let height = i32::from(fb.height());
        for (col, &top) in surface.iter().enumerate() {
            if top == i32::MAX {
                continue;
            }
            let start = (top + 1).max(i32::from(STATUS_ROWS));
            for row in start..height {
                let blank = fb
                    .get(col as u16, row as u16)
                    .map_or(false, |c| c.ch == ' ');
                if blank {
                    fb.plot(col as i32, row, '░', GROUND);
                }
            }
        }
    }

    /// Oval body with two splayed legs, anchored at the bottom-centre of the body.
    pub fn draw_craft(&self, fb: &mut FrameBuffer, position: Coordinate, width: i32, height: i32) {
        let shape = CraftShape::new(position, width, height);

        let rx = f64::from(shape.body_width) / 2.0;
        let ry = f64::from(shape.body_height) / 2.0;
        let cx = f64::from(shape.body_origin.x) + rx;
        let cy = f64::from(shape.body_origin.y) + ry;
        for i in 0..OVAL_SAMPLES {
            let theta = std::f64::consts::TAU * i as f64 / OVAL_SAMPLES as f64;
            let p = Coordinate::from_f64(cx + rx * theta.cos(), cy + ry * theta.sin());
            let (col, row) = self.to_cell(fb, p);
            self.plot(fb, col, row, 'o', CRAFT);
        }

        for ((from, to), ch) in [(shape.left_leg, '/'), (shape.right_leg, '\\')] {
            line(self.to_cell(fb, from), self.to_cell(fb, to), |col, row| {
                self.plot(fb, col, row, ch, CRAFT);
            });
        }
    }

    pub fn draw_status(&self, fb: &mut FrameBuffer, telemetry: &Telemetry) {
        let altitude = telemetry
            .altitude
            .map_or_else(|| "----".to_string(), |a| format!("{:>4}", a));
        let text = format!(
            " ALT {}  FUEL {:>3}  {}  [q] quit",
            altitude,
            telemetry.fuel,
            telemetry.status.as_str()
        );
        fb.put_str(0, 0, &text, STATUS);
    }
}

/// Bresenham line between two cells, inclusive of both ends.
fn line((x0, y0): (i32, i32), (x1, y1): (i32, i32), mut plot: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;

    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanderStatus;

    fn frame() -> FrameBuffer {
        let mut fb = FrameBuffer::new(1, 1);
        SceneView::default().begin(&mut fb, Viewport::new(81, 25));
        fb
    }

    #[test]
    fn line_covers_both_ends() {
        let mut cells = Vec::new();
        line((0, 0), (3, 1), |x, y| cells.push((x, y)));
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(3, 1)));
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn world_corners_map_to_viewport_corners() {
        let view = SceneView::default();
        let fb = frame();
        assert_eq!(view.to_cell(&fb, Coordinate::new(0, 0)), (0, 1));
        assert_eq!(view.to_cell(&fb, Coordinate::new(640, 480)), (80, 24));
        assert_eq!(view.to_cell(&fb, Coordinate::new(-8, -10)), (-1, 0));
    }

    #[test]
    fn flat_terrain_draws_surface_and_ground() {
        let view = SceneView::default();
        let mut fb = frame();
        view.draw_terrain(
            &mut fb,
            &[Coordinate::new(0, 430), Coordinate::new(640, 430)],
        );

        // 430 * 23 / 480 = 20, plus the status row.
        assert_eq!(fb.row_text(21), "_".repeat(81));
        assert_eq!(fb.get(0, 22).unwrap().ch, '░');
        assert_eq!(fb.get(80, 24).unwrap().ch, '░');
        assert_eq!(fb.row_text(20), " ".repeat(81));
    }

    #[test]
    fn slopes_use_direction_glyphs() {
        let view = SceneView::default();
        let mut fb = frame();
        view.draw_terrain(
            &mut fb,
            &[
                Coordinate::new(0, 400),
                Coordinate::new(320, 100),
                Coordinate::new(640, 400),
            ],
        );
        assert_eq!(fb.get(0, 20).unwrap().ch, '/');
        assert_eq!(fb.get(80, 20).unwrap().ch, '\\');
    }

    #[test]
    fn terrain_above_the_world_is_clipped() {
        let view = SceneView::default();
        let mut fb = frame();
        view.draw_terrain(
            &mut fb,
            &[Coordinate::new(0, -200), Coordinate::new(640, -200)],
        );
        assert!(fb.row_text(0).trim().is_empty());
    }

    #[test]
    fn craft_draws_body_and_legs() {
        let view = SceneView::default();
        let mut fb = frame();
        view.draw_craft(&mut fb, Coordinate::new(320, 100), 20, 20);

        assert_eq!(fb.get(38, 6).unwrap().ch, '/');
        assert_eq!(fb.get(41, 6).unwrap().ch, '\\');
        assert!(fb.row_text(4).contains('o'));
    }

    #[test]
    fn status_line_shows_telemetry() {
        let view = SceneView::default();
        let mut fb = frame();
        view.draw_status(
            &mut fb,
            &Telemetry {
                altitude: Some(360),
                fuel: 100,
                status: LanderStatus::Descending,
                frame: 0,
            },
        );
        let row = fb.row_text(0);
        assert!(row.contains("ALT  360"), "{}", row);
        assert!(row.contains("FUEL 100"), "{}", row);
        assert!(row.contains("DESCENDING"), "{}", row);
    }

    #[test]
    fn status_line_without_altitude() {
        let view = SceneView::default();
        let mut fb = frame();
        view.draw_status(
            &mut fb,
            &Telemetry {
                altitude: None,
                fuel: 0,
                status: LanderStatus::Grounded,
                frame: 3,
            },
        );
        assert!(fb.row_text(0).contains("ALT ----"));
    }
}
