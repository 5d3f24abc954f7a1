//! # Projection
//!
//! Turns ray records into vertical screen strips: ceiling, a texture-mapped
//! wall slice, then floor. Every pixel of every strip is written each frame.

use crate::config::RaycasterConfig;
use crate::rendering::framebuffer::{shade, FrameBuffer};
use crate::rendering::raycaster::RayRecord;
use crate::rendering::textures::TextureTable;

/// Smallest perpendicular distance used for projection.
const MIN_CORRECTED_DISTANCE: f64 = 1e-6;

/// Brightness of walls hit on horizontal grid lines.
pub const HORIZONTAL_HIT_SHADE: f64 = 180.0 / 255.0;

/// Screen-space parameters of the wall projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    screen_width: u32,
    screen_height: u32,
    strip_width: u32,
    tile_size: f64,
    plane_distance: f64,
    ceiling_color: u32,
    floor_color: u32,
    shade_horizontal_hits: bool,
}

impl Projector {
    /// Builds the projector for a validated configuration.
    pub fn new(config: &RaycasterConfig) -> Self {
        let half_fov = config.fov_radians() / 2.0;
        Self {
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            strip_width: config.wall_strip_width.max(1),
            tile_size: config.tile_size,
            plane_distance: (config.screen_width as f64 / 2.0) / half_fov.tan(),
            ceiling_color: config.ceiling_color,
            floor_color: config.floor_color,
            shade_horizontal_hits: config.shade_horizontal_hits,
        }
    }

    /// Distance from the eye to the projection plane, in pixels.
    pub fn plane_distance(&self) -> f64 {
        self.plane_distance
    }

    /// Perpendicular distance to the wall, removing the fisheye effect.
    pub fn corrected_distance(ray: &RayRecord, player_angle: f64) -> f64 {
        (ray.distance * (ray.angle - player_angle).cos()).max(MIN_CORRECTED_DISTANCE)
    }

    /// Projected wall height in pixels, before clamping to the screen.
    pub fn wall_strip_height(&self, ray: &RayRecord, player_angle: f64) -> f64 {
        self.tile_size / Self::corrected_distance(ray, player_angle) * self.plane_distance
    }

    /// First and one-past-last wall rows for a wall of `wall_height` pixels,
    /// clamped to the screen.
    pub fn strip_bounds(&self, wall_height: f64) -> (u32, u32) {
        let screen_height = self.screen_height as f64;
        let half_screen = screen_height / 2.0;
        let top = (half_screen - wall_height / 2.0).clamp(0.0, screen_height) as u32;
        let bottom = (half_screen + wall_height / 2.0).clamp(0.0, screen_height) as u32;
        (top, bottom.max(top))
    }

    /// Draws every ray's strip into `buffer`.
    ///
    /// Ray `i` covers columns `[i * strip_width, (i + 1) * strip_width)`.
    pub fn project(
        &self,
        rays: &[RayRecord],
        player_angle: f64,
        textures: &TextureTable,
        buffer: &mut FrameBuffer,
    ) {
        let texture_size = textures.size();
        let half_screen = self.screen_height as f64 / 2.0;
        let mut column = vec![0u32; self.screen_height as usize];

        for (index, ray) in rays.iter().enumerate() {
            let wall_height = self.wall_strip_height(ray, player_angle);
            let (top, bottom) = self.strip_bounds(wall_height);

            let texel_col = ((ray.wall_offset(self.tile_size) / self.tile_size)
                * texture_size as f64) as usize;
            let texture = textures.texture(ray.material);
            let texel_scale = texture_size as f64 / wall_height;
            let darken = self.shade_horizontal_hits && !ray.hit_vertical;

            column[..top as usize].fill(self.ceiling_color);
            for y in top..bottom {
                let from_top = (y as f64 + wall_height / 2.0 - half_screen).max(0.0);
                let texel_row = (from_top * texel_scale) as usize;
                let color = texture.texel_clamped(texel_row, texel_col);
                column[y as usize] = if darken {
                    shade(color, HORIZONTAL_HIT_SHADE)
                } else {
                    color
                };
            }
            column[bottom as usize..].fill(self.floor_color);

            let first = index as u32 * self.strip_width;
            for x in first..(first + self.strip_width).min(self.screen_width) {
                for (y, &color) in column.iter().enumerate() {
                    buffer.set_pixel(x as i64, y as i64, color);
                }
            }
        }

        // columns past the last strip when the width does not divide evenly
        let covered = (rays.len() as u32).saturating_mul(self.strip_width);
        let horizon = self.screen_height / 2;
        for x in covered..self.screen_width {
            buffer.fill_column(x, 0, horizon, self.ceiling_color);
            buffer.fill_column(x, horizon, self.screen_height, self.floor_color);
        }
    }
}
