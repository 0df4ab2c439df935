//! The presentation seam between the simulation and whatever draws it.

use anyhow::Result;

use crate::types::{Coordinate, Telemetry};

/// Receives the geometry of one frame.
///
/// A frame is presented in order: terrain, craft, telemetry, then
/// [`Renderer::end_frame`]. Implementations may buffer everything and only
/// touch the output device in `end_frame`.
pub trait Renderer {
    /// The x-sorted terrain profile, drawn as a connected polyline.
    fn present_terrain(&mut self, points: &[Coordinate]) -> Result<()>;

    /// The craft: an oval body above `position` plus two angled legs.
    fn present_craft(&mut self, position: Coordinate, width: i32, height: i32) -> Result<()>;

    fn present_telemetry(&mut self, _telemetry: &Telemetry) -> Result<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn present_terrain(&mut self, points: &[Coordinate]) -> Result<()> {
        (**self).present_terrain(points)
    }

    fn present_craft(&mut self, position: Coordinate, width: i32, height: i32) -> Result<()> {
        (**self).present_craft(position, width, height)
    }

    fn present_telemetry(&mut self, telemetry: &Telemetry) -> Result<()> {
        (**self).present_telemetry(telemetry)
    }

    fn end_frame(&mut self) -> Result<()> {
        (**self).end_frame()
    }
}

/// Line segments making up the craft outline, in world coordinates.
///
/// The body is the bounding box `[x - w/2, x + w/2] x [y - h, y]` of an oval;
/// each leg runs from a quarter-width off centre down and out to the body edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraftShape {
    /// Top-left corner of the oval's bounding box.
    pub body_origin: Coordinate,
    pub body_width: i32,
    pub body_height: i32,
    pub left_leg: (Coordinate, Coordinate),
    pub right_leg: (Coordinate, Coordinate),
}

impl CraftShape {
    pub fn new(position: Coordinate, width: i32, height: i32) -> Self {
        Self {
            body_origin: position.offset(-width / 2, -height),
            body_width: width,
            body_height: height,
            left_leg: (
                position.offset(-width / 4, 0),
                position.offset(-width / 2, height / 2),
            ),
            right_leg: (
                position.offset(width / 4, 0),
                position.offset(width / 2, height / 2),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn craft_shape_matches_outline() {
        let shape = CraftShape::new(Coordinate::new(320, 100), 20, 20);
        assert_eq!(shape.body_origin, Coordinate::new(310, 80));
        assert_eq!(
            shape.left_leg,
            (Coordinate::new(315, 100), Coordinate::new(310, 110))
        );
        assert_eq!(
            shape.right_leg,
            (Coordinate::new(325, 100), Coordinate::new(330, 110))
        );
    }
}
