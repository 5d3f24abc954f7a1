//! # Rendering Module
//!
//! Everything between a player pose and pixels on screen: ray casting,
//! wall projection into a CPU frame buffer, the minimap overlay, and the
//! macroquad display that presents the result.

pub mod display;
pub mod framebuffer;
pub mod minimap;
pub mod projection;
pub mod raycaster;
pub mod textures;
pub mod ui;

pub use display::*;
pub use framebuffer::*;
pub use minimap::*;
pub use projection::*;
pub use raycaster::*;
pub use textures::*;
pub use ui::*;
