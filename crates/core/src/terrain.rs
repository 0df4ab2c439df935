//! Terrain query surface.
//!
//! A [`Terrain`] is built once from an x-sorted profile and is read-only from
//! then on, so it can be shared between threads behind an `Arc` without locks.

use crate::error::TerrainError;
use crate::types::{AltitudeMode, Coordinate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    points: Vec<Coordinate>,
    mode: AltitudeMode,
}

impl Terrain {
    /// Publish a profile for querying.
    ///
    /// The points must be non-empty and sorted by non-decreasing `x`.
    pub fn from_points(points: Vec<Coordinate>) -> Result<Self, TerrainError> {
        if points.is_empty() {
            return Err(TerrainError::Empty);
        }
        if let Some(index) = points.windows(2).position(|w| w[1].x < w[0].x) {
            return Err(TerrainError::Unsorted { index: index + 1 });
        }
        Ok(Self {
            points,
            mode: AltitudeMode::Nearest,
        })
    }

    pub fn with_altitude_mode(mut self, mode: AltitudeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn altitude_mode(&self) -> AltitudeMode {
        self.mode
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Horizontal extent as `(first.x, last.x)`.
    pub fn span(&self) -> (i32, i32) {
        // from_points guarantees at least one point
        let first = self.points[0].x;
        let last = self.points[self.points.len() - 1].x;
        (first, last)
    }

    /// Largest `y` of the profile, i.e. the lowest point on screen.
    pub fn lowest_y(&self) -> i32 {
        self.points.iter().map(|p| p.y).max().unwrap_or(0)
    }

    /// Surface height (`y`) under horizontal position `x`.
    pub fn surface_y(&self, x: i32) -> Result<i32, TerrainError> {
        let idx = self.points.partition_point(|p| p.x < x);
        let Some(&hit) = self.points.get(idx) else {
            return Err(TerrainError::OutOfBounds {
                x,
                max_x: self.span().1,
            });
        };

        match self.mode {
            AltitudeMode::Nearest => Ok(hit.y),
            AltitudeMode::Linear => {
                if idx == 0 || hit.x == x {
                    return Ok(hit.y);
                }
                let prev = self.points[idx - 1];
                // prev.x < x < hit.x, so the span is non-zero
                let dx = f64::from(hit.x) - f64::from(prev.x);
                let t = (f64::from(x) - f64::from(prev.x)) / dx;
                let dy = f64::from(hit.y) - f64::from(prev.y);
                Ok((f64::from(prev.y) + dy * t) as i32)
            }
        }
    }

    /// Vertical distance from `position` down to the surface.
    ///
    /// Positive values mean the position is above the terrain.
    pub fn altitude_at(&self, position: Coordinate) -> Result<i32, TerrainError> {
        self.surface_y(position.x)?
            .checked_sub(position.y)
            .ok_or(TerrainError::AltitudeOverflow {
                x: position.x,
                y: position.y,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Terrain {
        Terrain::from_points(vec![
            Coordinate::new(0, 400),
            Coordinate::new(10, 300),
            Coordinate::new(20, 350),
            Coordinate::new(40, 350),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_empty_profile() {
        assert_eq!(Terrain::from_points(Vec::new()), Err(TerrainError::Empty));
    }

    #[test]
    fn rejects_unsorted_profile() {
        let err = Terrain::from_points(vec![
            Coordinate::new(0, 1),
            Coordinate::new(5, 1),
            Coordinate::new(3, 1),
        ])
        .unwrap_err();
        assert_eq!(err, TerrainError::Unsorted { index: 2 });
    }

    #[test]
    fn accepts_duplicate_x() {
        let t = Terrain::from_points(vec![Coordinate::new(0, 1), Coordinate::new(0, 2)]);
        assert!(t.is_ok());
    }

    #[test]
    fn nearest_uses_first_point_at_or_right_of_query() {
        let t = sample();
        assert_eq!(t.altitude_at(Coordinate::new(0, 100)), Ok(300));
        assert_eq!(t.altitude_at(Coordinate::new(1, 100)), Ok(200));
        assert_eq!(t.altitude_at(Coordinate::new(10, 100)), Ok(200));
        assert_eq!(t.altitude_at(Coordinate::new(11, 0)), Ok(350));
    }

    #[test]
    fn query_left_of_first_point_uses_first_point() {
        let t = sample();
        assert_eq!(t.altitude_at(Coordinate::new(-25, 0)), Ok(400));
    }

    #[test]
    fn query_right_of_last_point_is_out_of_bounds() {
        let t = sample();
        assert_eq!(t.altitude_at(Coordinate::new(40, 0)), Ok(350));
        assert_eq!(
            t.altitude_at(Coordinate::new(41, 0)),
            Err(TerrainError::OutOfBounds { x: 41, max_x: 40 })
        );
    }

    #[test]
    fn linear_mode_interpolates_between_brackets() {
        let t = sample().with_altitude_mode(AltitudeMode::Linear);
        assert_eq!(t.surface_y(5), Ok(350));
        assert_eq!(t.surface_y(15), Ok(325));
        assert_eq!(t.surface_y(10), Ok(300));
        assert_eq!(t.surface_y(0), Ok(400));
        assert_eq!(t.surface_y(-3), Ok(400));
        assert!(t.surface_y(41).is_err());
    }

    #[test]
    fn extreme_positions_report_overflow() {
        let t = sample();
        assert_eq!(
            t.altitude_at(Coordinate::new(20, i32::MIN + 5)),
            Err(TerrainError::AltitudeOverflow {
                x: 20,
                y: i32::MIN + 5
            })
        );
        assert_eq!(t.altitude_at(Coordinate::new(20, i32::MAX)), Ok(350 - i32::MAX));
    }

    #[test]
    fn linear_mode_handles_extreme_points() {
        let t = Terrain::from_points(vec![
            Coordinate::new(i32::MIN, i32::MIN),
            Coordinate::new(i32::MAX, i32::MAX),
        ])
        .unwrap()
        .with_altitude_mode(AltitudeMode::Linear);
        assert!(t.surface_y(0).is_ok());
    }

    #[test]
    fn span_and_lowest() {
        let t = sample();
        assert_eq!(t.span(), (0, 40));
        assert_eq!(t.lowest_y(), 400);
        assert_eq!(t.len(), 4);
    }
}
