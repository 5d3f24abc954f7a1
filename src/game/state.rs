//! # Game State Module
//!
//! The explicit simulation context. `GameState` owns everything a frame
//! needs (grid, player, ray buffer, frame buffer, baked textures) and runs
//! the pipeline stages in order. There is no global mutable state: the
//! frame loop holds the only `GameState` and passes it by reference.

use crate::config::RaycasterConfig;
use crate::game::{Grid, Player};
use crate::input::InputState;
use crate::rendering::{
    cast_all_into, Camera, FrameBuffer, Minimap, Projector, RayRecord, TextureTable,
};
use crate::TilecasterResult;
use log::{debug, info};

/// Central simulation state for one renderer session.
#[derive(Debug, Clone)]
pub struct GameState {
    config: RaycasterConfig,
    grid: Grid,
    player: Player,
    camera: Camera,
    projector: Projector,
    minimap: Minimap,
    textures: TextureTable,
    rays: Vec<RayRecord>,
    frame: FrameBuffer,
    /// Whether the minimap overlay is drawn
    pub show_minimap: bool,
    frame_count: u64,
}

impl GameState {
    /// Validates `config` and builds every per-session resource.
    ///
    /// This is the only fallible step; [`GameState::tick`] never fails.
    pub fn new(config: RaycasterConfig) -> TilecasterResult<Self> {
        config.validate()?;

        let grid = config.build_grid()?;
        let player = config.build_player();
        let camera = Camera::new(config.fov_radians(), config.num_rays());
        let textures = TextureTable::bake(config.texture_size, config.texture_seed);

        info!(
            "Session ready: {}x{} grid, {} rays, {}x{} frame",
            grid.rows(),
            grid.cols(),
            camera.num_rays,
            config.screen_width,
            config.screen_height
        );

        Ok(Self {
            projector: Projector::new(&config),
            minimap: Minimap::new(config.minimap_scale),
            rays: Vec::with_capacity(camera.num_rays),
            frame: FrameBuffer::new(config.screen_width, config.screen_height),
            show_minimap: config.show_minimap,
            frame_count: 0,
            config,
            grid,
            player,
            camera,
            textures,
        })
    }

    /// Runs one frame: integrate, cast, project, overlay.
    ///
    /// `elapsed_seconds` is the time since the previous frame.
    pub fn tick(&mut self, input: &InputState, elapsed_seconds: f64) {
        if input.toggle_minimap {
            self.show_minimap = !self.show_minimap;
            debug!("Minimap {}", if self.show_minimap { "on" } else { "off" });
        }

        self.player.apply_input(input);
        self.player.advance(&self.grid, elapsed_seconds);
        self.render();
        self.frame_count += 1;
    }

    /// Casts and draws the current pose without moving the player.
    pub fn render(&mut self) {
        cast_all_into(&self.grid, &self.player, &self.camera, &mut self.rays);
        self.projector
            .project(&self.rays, self.player.angle, &self.textures, &mut self.frame);
        if self.show_minimap {
            self.minimap
                .draw(&mut self.frame, &self.grid, &self.player, &self.rays);
        }
    }

    pub fn config(&self) -> &RaycasterConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Ray records of the most recent frame.
    pub fn rays(&self) -> &[RayRecord] {
        &self.rays
    }

    /// Pixels of the most recent frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn textures(&self) -> &TextureTable {
        &self.textures
    }

    /// Frames ticked since the session started.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
