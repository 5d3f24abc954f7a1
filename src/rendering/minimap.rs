//! # Minimap
//!
//! A scaled top-down debug overlay drawn into the corner of the frame
//! buffer: the grid, every cast ray, and the player with its facing.

use crate::game::{Grid, Player, EMPTY_TILE};
use crate::rendering::framebuffer::{pack_argb, FrameBuffer, ARGB_WHITE};
use crate::rendering::raycaster::RayRecord;
use crate::rendering::textures::Material;

/// Length of the facing line, in world units.
pub const DIRECTION_LINE_LENGTH: f64 = 30.0;

const RAY_COLOR: u32 = pack_argb(0xFF, 0xFF, 0x40, 0x40);
const PLAYER_COLOR: u32 = pack_argb(0xFF, 0x20, 0x20, 0xFF);
const UNKNOWN_WALL_COLOR: u32 = pack_argb(0xFF, 0x22, 0x22, 0x22);

/// Top-down overlay at a fixed scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimap {
    scale: f64,
}

impl Minimap {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Overlay size in pixels for `grid`.
    pub fn size(&self, grid: &Grid) -> (u32, u32) {
        (
            (grid.world_width() * self.scale).round() as u32,
            (grid.world_height() * self.scale).round() as u32,
        )
    }

    /// Draws the overlay into the top-left corner of `buffer`.
    ///
    /// Only reads the grid, the player and the rays.
    pub fn draw(&self, buffer: &mut FrameBuffer, grid: &Grid, player: &Player, rays: &[RayRecord]) {
        self.draw_tiles(buffer, grid);

        let (px, py) = self.to_screen(player.position.x, player.position.y);
        for ray in rays.iter().filter(|ray| ray.is_hit()) {
            let (hx, hy) = self.to_screen(ray.hit.x, ray.hit.y);
            buffer.draw_line(px, py, hx, hy, RAY_COLOR);
        }

        let marker = ((player.radius * 2.0 * self.scale).round() as i64).max(1);
        buffer.fill_rect(px - marker / 2, py - marker / 2, marker, marker, PLAYER_COLOR);

        let tip = player.position + player.direction() * DIRECTION_LINE_LENGTH;
        let (tx, ty) = self.to_screen(tip.x, tip.y);
        buffer.draw_line(px, py, tx, ty, PLAYER_COLOR);
    }

    fn draw_tiles(&self, buffer: &mut FrameBuffer, grid: &Grid) {
        let tile = grid.tile_size();
        for (row, col, id) in grid.iter_cells() {
            let (x0, y0) = self.to_screen(col as f64 * tile, row as f64 * tile);
            let (x1, y1) = self.to_screen((col + 1) as f64 * tile, (row + 1) as f64 * tile);
            buffer.fill_rect(x0, y0, x1 - x0, y1 - y0, tile_color(id));
        }
    }

    fn to_screen(&self, x: f64, y: f64) -> (i64, i64) {
        ((x * self.scale).round() as i64, (y * self.scale).round() as i64)
    }
}

fn tile_color(id: u8) -> u32 {
    if id == EMPTY_TILE {
        ARGB_WHITE
    } else {
        Material::from_id(id)
            .map(Material::base_color)
            .unwrap_or(UNKNOWN_WALL_COLOR)
    }
}
