//! # Game Module
//!
//! Simulation state: the tile grid, the player pose and its integrator, frame
//! pacing, and the `GameState` context that runs one frame of the pipeline.

pub mod player;
pub mod state;
pub mod timing;
pub mod world;

pub use player::*;
pub use state::*;
pub use timing::*;
pub use world::*;

use crate::utils::distance_between_points;
use serde::{Deserialize, Serialize};

/// A point in world units.
///
/// # Examples
///
/// ```
/// use tilecaster::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance_to(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        distance_between_points(self.x, self.y, other.x, other.y)
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Translation intent for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WalkIntent {
    Backward,
    #[default]
    None,
    Forward,
}

impl WalkIntent {
    /// Signed multiplier applied to the walk speed.
    pub fn sign(self) -> f64 {
        match self {
            WalkIntent::Backward => -1.0,
            WalkIntent::None => 0.0,
            WalkIntent::Forward => 1.0,
        }
    }
}

/// Rotation intent for one frame. `Right` increases the angle, which turns
/// clockwise on screen because world y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnIntent {
    Left,
    #[default]
    None,
    Right,
}

impl TurnIntent {
    /// Signed multiplier applied to the turn speed.
    pub fn sign(self) -> f64 {
        match self {
            TurnIntent::Left => -1.0,
            TurnIntent::None => 0.0,
            TurnIntent::Right => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(1.5, 2.0) + Point::new(0.5, -1.0);
        assert_eq!(p, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_intent_signs() {
        assert_eq!(WalkIntent::Forward.sign(), 1.0);
        assert_eq!(WalkIntent::Backward.sign(), -1.0);
        assert_eq!(WalkIntent::default().sign(), 0.0);
        assert_eq!(TurnIntent::Left.sign(), -1.0);
        assert_eq!(TurnIntent::Right.sign(), 1.0);
        assert_eq!(TurnIntent::default(), TurnIntent::None);
    }
}
