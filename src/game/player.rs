//! # Player Module
//!
//! The player pose and the movement integrator that advances it each frame.

use crate::game::{Grid, Point, TurnIntent, WalkIntent};
use crate::input::InputState;
use crate::utils::normalize_angle;
use serde::{Deserialize, Serialize};

/// Position, heading and movement intents of the player.
///
/// The pose is owned by the simulation loop and mutated once per frame by
/// [`Player::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Position in world units
    pub position: Point,
    /// Heading in radians, always in `[0, 2π)`
    pub angle: f64,
    /// Linear speed in world units per second
    pub walk_speed: f64,
    /// Angular speed in radians per second
    pub turn_speed: f64,
    /// Current translation intent
    pub walk: WalkIntent,
    /// Current rotation intent
    pub turn: TurnIntent,
    /// Marker radius on the minimap, in world units
    pub radius: f64,
}

impl Player {
    /// Creates a stationary player at the given pose.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecaster::{Player, Point};
    /// use std::f64::consts::PI;
    ///
    /// let player = Player::new(Point::new(96.0, 96.0), -PI / 2.0, 150.0, PI / 2.0);
    /// assert!((player.angle - 1.5 * PI).abs() < 1e-9);
    /// ```
    pub fn new(position: Point, angle: f64, walk_speed: f64, turn_speed: f64) -> Self {
        Self {
            position,
            angle: normalize_angle(angle),
            walk_speed,
            turn_speed,
            walk: WalkIntent::None,
            turn: TurnIntent::None,
            radius: 3.0,
        }
    }

    /// Copies the frame's intents onto the pose.
    pub fn apply_input(&mut self, input: &InputState) {
        self.walk = input.walk;
        self.turn = input.turn;
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> Point {
        let (sin, cos) = self.angle.sin_cos();
        Point::new(cos, sin)
    }

    /// Returns the pose after `elapsed_seconds` of movement.
    ///
    /// Rotation always applies. The translation is all-or-nothing: if the
    /// destination point is inside a wall (or outside the grid) the player
    /// stays where it is. Only the destination is tested, so a very large
    /// `elapsed_seconds` can carry the player across a wall one tile thick.
    pub fn advanced(&self, grid: &Grid, elapsed_seconds: f64) -> Player {
        let mut next = *self;
        next.angle =
            normalize_angle(self.angle + self.turn.sign() * self.turn_speed * elapsed_seconds);

        let step = self.walk.sign() * self.walk_speed * elapsed_seconds;
        let (sin, cos) = next.angle.sin_cos();
        let candidate = self.position + Point::new(cos * step, sin * step);

        if !grid.has_wall_at(candidate.x, candidate.y) {
            next.position = candidate;
        }

        next
    }

    /// In-place form of [`Player::advanced`].
    pub fn advance(&mut self, grid: &Grid, elapsed_seconds: f64) {
        *self = self.advanced(grid, elapsed_seconds);
    }
}
