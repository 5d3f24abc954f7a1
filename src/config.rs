//! # Configuration
//!
//! Static, load-once configuration: the map, the camera, the player's
//! starting pose and the look of the rendered frame.
//!
//! Everything here is validated before the first frame. A configuration that
//! passes [`RaycasterConfig::validate`] can never make the per-frame path
//! fail.

use crate::game::{Grid, Player, Point};
use crate::{TilecasterError, TilecasterResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Compile-time defaults.
pub mod defaults {
    /// Tile edge length in world units
    pub const TILE_SIZE: f64 = 64.0;

    /// Default map rows
    pub const MAP_ROWS: usize = 13;

    /// Default map columns
    pub const MAP_COLS: usize = 20;

    /// Horizontal field of view in degrees
    pub const FOV_DEGREES: f64 = 60.0;

    /// Width in pixels of the strip drawn for each ray
    pub const WALL_STRIP_WIDTH: u32 = 1;

    /// Frames per second target for the frame loop
    pub const TARGET_FPS: u32 = 30;

    /// Minimap size relative to world units
    pub const MINIMAP_SCALE: f64 = 0.2;

    /// Edge length of every baked texture, in texels
    pub const TEXTURE_SIZE: u32 = 64;

    /// Seed for the baked texture grain
    pub const TEXTURE_SEED: u64 = 12345;

    /// Player walk speed in world units per second
    pub const WALK_SPEED: f64 = 150.0;

    /// Player turn speed in degrees per second
    pub const TURN_SPEED_DEGREES: f64 = 100.0;

    /// Ceiling fill color (ARGB)
    pub const CEILING_COLOR: u32 = 0xFF33_3333;

    /// Floor fill color (ARGB)
    pub const FLOOR_COLOR: u32 = 0xFF77_7777;
}

/// Starting pose and speeds of the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start x in world units
    pub x: f64,
    /// Start y in world units
    pub y: f64,
    /// Start heading in degrees (0 = +x, 90 = +y, i.e. down the screen)
    pub angle_degrees: f64,
    /// Walk speed in world units per second
    pub walk_speed: f64,
    /// Turn speed in degrees per second
    pub turn_speed_degrees: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: defaults::MAP_COLS as f64 * defaults::TILE_SIZE / 2.0,
            y: defaults::MAP_ROWS as f64 * defaults::TILE_SIZE / 2.0,
            angle_degrees: 90.0,
            walk_speed: defaults::WALK_SPEED,
            turn_speed_degrees: defaults::TURN_SPEED_DEGREES,
        }
    }
}

/// Complete static configuration of the renderer.
///
/// # Examples
///
/// ```
/// use tilecaster::RaycasterConfig;
///
/// let config = RaycasterConfig::default();
/// config.validate().unwrap();
/// assert_eq!(config.num_rays(), 1280);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycasterConfig {
    /// Tile edge length in world units
    pub tile_size: f64,
    /// Rendered frame width in pixels
    pub screen_width: u32,
    /// Rendered frame height in pixels
    pub screen_height: u32,
    /// Horizontal field of view in degrees
    pub fov_degrees: f64,
    /// Pixel width of the strip drawn per ray
    pub wall_strip_width: u32,
    /// Frame loop target
    pub target_fps: u32,
    /// Whether the minimap starts visible
    pub show_minimap: bool,
    /// Whether WASD mirrors the arrow keys
    pub wasd_enabled: bool,
    /// Whether the controls hint is drawn over the frame
    pub show_controls: bool,
    /// Minimap size relative to world units
    pub minimap_scale: f64,
    /// Darken walls hit on horizontal grid lines
    pub shade_horizontal_hits: bool,
    /// Edge length of the baked textures
    pub texture_size: u32,
    /// Seed for the baked texture grain
    pub texture_seed: u64,
    /// Ceiling fill color (ARGB)
    pub ceiling_color: u32,
    /// Floor fill color (ARGB)
    pub floor_color: u32,
    /// Player start
    pub player: PlayerConfig,
    /// Tile ids, row-major; the border must be walls
    pub map: Vec<Vec<u8>>,
}

impl RaycasterConfig {
    /// Creates the default configuration with the built-in map.
    pub fn new() -> Self {
        let tile = defaults::TILE_SIZE;
        Self {
            tile_size: tile,
            screen_width: (defaults::MAP_COLS as f64 * tile) as u32,
            screen_height: (defaults::MAP_ROWS as f64 * tile) as u32,
            fov_degrees: defaults::FOV_DEGREES,
            wall_strip_width: defaults::WALL_STRIP_WIDTH,
            target_fps: defaults::TARGET_FPS,
            show_minimap: true,
            wasd_enabled: true,
            show_controls: true,
            minimap_scale: defaults::MINIMAP_SCALE,
            shade_horizontal_hits: true,
            texture_size: defaults::TEXTURE_SIZE,
            texture_seed: defaults::TEXTURE_SEED,
            ceiling_color: defaults::CEILING_COLOR,
            floor_color: defaults::FLOOR_COLOR,
            player: PlayerConfig::default(),
            map: default_map(),
        }
    }

    /// A small, cheap configuration for tests: an open bordered room rendered
    /// at low resolution.
    pub fn for_testing() -> Self {
        let rows = 8;
        let cols = 10;
        let tile = defaults::TILE_SIZE;
        let map = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
                            1
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            screen_width: 160,
            screen_height: 100,
            texture_size: 16,
            player: PlayerConfig {
                x: cols as f64 * tile / 2.0,
                y: rows as f64 * tile / 2.0,
                angle_degrees: 0.0,
                ..PlayerConfig::default()
            },
            map,
            ..Self::new()
        }
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TilecasterResult<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TilecasterResult<()> {
        let text = self.to_json()?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Pretty-printed JSON form of the configuration.
    pub fn to_json(&self) -> TilecasterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Field of view in radians.
    pub fn fov_radians(&self) -> f64 {
        self.fov_degrees.to_radians()
    }

    /// Number of rays cast per frame: one per wall strip.
    pub fn num_rays(&self) -> usize {
        (self.screen_width / self.wall_strip_width.max(1)) as usize
    }

    /// Builds the validated grid.
    pub fn build_grid(&self) -> TilecasterResult<Grid> {
        Grid::new(self.map.clone(), self.tile_size)
    }

    /// Builds the player at its configured starting pose.
    pub fn build_player(&self) -> Player {
        Player::new(
            Point::new(self.player.x, self.player.y),
            self.player.angle_degrees.to_radians(),
            self.player.walk_speed,
            self.player.turn_speed_degrees.to_radians(),
        )
    }

    /// Rejects configurations that would break the per-frame path, including
    /// material ids the baked texture table has no texture for.
    pub fn validate(&self) -> TilecasterResult<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(invalid(format!(
                "screen must be non-empty, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.wall_strip_width == 0 || self.wall_strip_width > self.screen_width {
            return Err(invalid(format!(
                "wall strip width must be in 1..={}, got {}",
                self.screen_width, self.wall_strip_width
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(invalid(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov_degrees
            )));
        }
        if self.target_fps == 0 {
            return Err(invalid("target fps must be positive".to_string()));
        }
        if self.texture_size == 0 {
            return Err(invalid("texture size must be positive".to_string()));
        }
        if !(self.minimap_scale.is_finite() && self.minimap_scale > 0.0) {
            return Err(invalid(format!(
                "minimap scale must be positive, got {}",
                self.minimap_scale
            )));
        }
        if !(self.player.walk_speed.is_finite() && self.player.turn_speed_degrees.is_finite()) {
            return Err(invalid("player speeds must be finite".to_string()));
        }

        let grid = self.build_grid()?;

        let max_material = grid.max_material() as usize;
        if max_material > crate::rendering::textures::MATERIAL_COUNT {
            return Err(invalid(format!(
                "material {} has no texture (materials 1..={} are baked)",
                max_material,
                crate::rendering::textures::MATERIAL_COUNT
            )));
        }

        if grid.has_wall_at(self.player.x, self.player.y) {
            return Err(invalid(format!(
                "player start ({}, {}) is inside a wall or outside the map",
                self.player.x, self.player.y
            )));
        }

        debug!(
            "Configuration valid: {}x{} screen, {} rays, {} degree FOV",
            self.screen_width,
            self.screen_height,
            self.num_rays(),
            self.fov_degrees
        );

        Ok(())
    }
}

impl Default for RaycasterConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: String) -> TilecasterError {
    TilecasterError::InvalidConfig(message)
}

/// The built-in 13x20 map.
pub fn default_map() -> Vec<Vec<u8>> {
    vec![
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 2, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 7, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RaycasterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen_width, 1280);
        assert_eq!(config.screen_height, 832);
        assert_eq!(config.map.len(), defaults::MAP_ROWS);
        assert_eq!(config.map[2][15], 8);
    }

    #[test]
    fn test_testing_config_is_valid() {
        let config = RaycasterConfig::for_testing();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_rays(), 160);
    }

    #[test]
    fn test_num_rays_follows_strip_width() {
        let config = RaycasterConfig {
            wall_strip_width: 4,
            ..RaycasterConfig::default()
        };
        assert_eq!(config.num_rays(), 320);
    }

    #[test]
    fn test_rejects_bad_fov() {
        for fov in [0.0, 180.0, -10.0, f64::NAN] {
            let config = RaycasterConfig {
                fov_degrees: fov,
                ..RaycasterConfig::for_testing()
            };
            assert!(matches!(config.validate(), Err(TilecasterError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rejects_player_in_wall() {
        let mut config = RaycasterConfig::for_testing();
        config.player.x = 10.0;
        config.player.y = 10.0;
        assert!(matches!(config.validate(), Err(TilecasterError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_unknown_material() {
        let mut config = RaycasterConfig::for_testing();
        config.map[0][0] = 200;
        assert!(matches!(config.validate(), Err(TilecasterError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_open_map() {
        let mut config = RaycasterConfig::for_testing();
        config.map[3][0] = 0;
        assert!(matches!(config.validate(), Err(TilecasterError::InvalidGrid(_))));
    }

    #[test]
    fn test_rejects_wide_strip() {
        let config = RaycasterConfig {
            wall_strip_width: 1000,
            ..RaycasterConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RaycasterConfig =
            serde_json::from_str(r#"{ "fov_degrees": 75.0, "target_fps": 60 }"#).unwrap();
        assert_eq!(config.fov_degrees, 75.0);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.map, default_map());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_control_options_default_on_and_load_from_json() {
        let config = RaycasterConfig::default();
        assert!(config.wasd_enabled);
        assert!(config.show_controls);

        let config: RaycasterConfig =
            serde_json::from_str(r#"{ "wasd_enabled": false, "show_controls": false }"#).unwrap();
        assert!(!config.wasd_enabled);
        assert!(!config.show_controls);
        assert!(config.show_minimap);
    }
}
