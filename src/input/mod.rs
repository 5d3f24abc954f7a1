//! # Input Module
//!
//! Keyboard handling. Raw key state is reduced to the three values the core
//! consumes each frame: a walk intent, a turn intent and an exit signal.

use crate::game::{TurnIntent, WalkIntent};
use macroquad::prelude::*;

/// Everything the simulation needs to know about input for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    /// Translation intent
    pub walk: WalkIntent,
    /// Rotation intent
    pub turn: TurnIntent,
    /// Exit requested
    pub quit: bool,
    /// Minimap visibility toggle pressed this frame
    pub toggle_minimap: bool,
}

/// Snapshot of the keys that drive the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub quit: bool,
    pub toggle_minimap: bool,
}

impl InputState {
    /// Reduces a key snapshot to intents.
    ///
    /// Opposing keys held together cancel out.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecaster::{InputState, KeySnapshot, TurnIntent, WalkIntent};
    ///
    /// let input = InputState::from_keys(KeySnapshot {
    ///     forward: true,
    ///     right: true,
    ///     ..KeySnapshot::default()
    /// });
    /// assert_eq!(input.walk, WalkIntent::Forward);
    /// assert_eq!(input.turn, TurnIntent::Right);
    /// ```
    pub fn from_keys(keys: KeySnapshot) -> Self {
        let walk = match (keys.forward, keys.backward) {
            (true, false) => WalkIntent::Forward,
            (false, true) => WalkIntent::Backward,
            _ => WalkIntent::None,
        };
        let turn = match (keys.left, keys.right) {
            (true, false) => TurnIntent::Left,
            (false, true) => TurnIntent::Right,
            _ => TurnIntent::None,
        };
        Self {
            walk,
            turn,
            quit: keys.quit,
            toggle_minimap: keys.toggle_minimap,
        }
    }
}

/// Input handler for the frame loop.
///
/// Arrow keys always move the player; WASD can be switched off.
pub struct InputHandler {
    /// Whether WASD mirrors the arrow keys
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecaster::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// assert!(input_handler.wasd_enabled);
    /// ```
    pub fn new() -> Self {
        Self::with_wasd(true)
    }

    /// Creates a handler with WASD mirroring switched on or off.
    pub fn with_wasd(wasd_enabled: bool) -> Self {
        Self { wasd_enabled }
    }

    /// Reads the current keyboard state from macroquad.
    pub fn get_input(&self) -> InputState {
        InputState::from_keys(self.snapshot())
    }

    fn snapshot(&self) -> KeySnapshot {
        let held = |arrow: KeyCode, letter: KeyCode| {
            is_key_down(arrow) || (self.wasd_enabled && is_key_down(letter))
        };

        KeySnapshot {
            forward: held(KeyCode::Up, KeyCode::W),
            backward: held(KeyCode::Down, KeyCode::S),
            left: held(KeyCode::Left, KeyCode::A),
            right: held(KeyCode::Right, KeyCode::D),
            quit: is_key_pressed(KeyCode::Escape),
            toggle_minimap: is_key_pressed(KeyCode::M),
        }
    }
}
