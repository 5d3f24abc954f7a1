//! # Display Management
//!
//! Presents the CPU frame buffer through macroquad: the pixels are copied
//! into a GPU texture once per frame and drawn stretched over the window.

use crate::rendering::framebuffer::FrameBuffer;
use crate::rendering::ui::{draw_hud, FpsCounter};
use crate::{TilecasterError, TilecasterResult};
use log::{debug, warn};
use macroquad::prelude::*;

/// Macroquad display manager.
///
/// Owns the staging image and the texture the frame buffer is uploaded to.
pub struct MacroquadDisplay {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Whether the controls hint is drawn
    pub show_controls: bool,
    image: Image,
    texture: Texture2D,
}

impl MacroquadDisplay {
    /// Creates the display for frames of `width × height` pixels.
    ///
    /// Must be called from inside the macroquad main loop. Fails if the
    /// size does not fit a texture.
    pub fn new(width: u32, height: u32) -> TilecasterResult<Self> {
        let (texture_width, texture_height) = match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(TilecasterError::InvalidConfig(format!(
                    "frame size {}x{} cannot be presented",
                    width, height
                )))
            }
        };

        let image = Image::gen_image_color(texture_width, texture_height, BLACK);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);

        debug!("Display texture created at {}x{}", width, height);

        Ok(Self {
            width,
            height,
            show_controls: true,
            image,
            texture,
        })
    }

    /// Uploads `buffer` and draws it over the whole window, then the HUD.
    ///
    /// Frames of a different size than the display are skipped and the
    /// previous texture is drawn again.
    pub fn present(&mut self, buffer: &FrameBuffer, fps: &FpsCounter) {
        clear_background(BLACK);

        if frame_matches(self.width, self.height, buffer) {
            buffer.write_rgba8(&mut self.image.bytes);
            self.texture.update(&self.image);
        }

        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );

        draw_hud(fps, self.show_controls);
    }
}

/// Whether `buffer` can be uploaded to a `width × height` display texture.
///
/// Logs a warning for a mismatched frame.
pub fn frame_matches(width: u32, height: u32, buffer: &FrameBuffer) -> bool {
    let matches = buffer.width() == width && buffer.height() == height;
    if !matches {
        warn!(
            "Skipping {}x{} frame on a {}x{} display",
            buffer.width(),
            buffer.height(),
            width,
            height
        );
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_matches_display_size() {
        let buffer = FrameBuffer::new(160, 100);
        assert!(frame_matches(160, 100, &buffer));
    }

    #[test]
    fn test_mismatched_frame_is_rejected() {
        let buffer = FrameBuffer::new(160, 100);
        assert!(!frame_matches(100, 160, &buffer));
        assert!(!frame_matches(160, 101, &buffer));
        assert!(!frame_matches(0, 0, &buffer));
    }
}
