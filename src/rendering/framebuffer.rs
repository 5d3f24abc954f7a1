//! # Frame Buffer
//!
//! A CPU-side, row-major pixel buffer of packed `0xAARRGGBB` colors. The
//! projector and the minimap write into it; the display uploads it to the
//! GPU once per frame.

/// Packs four channels into an `0xAARRGGBB` color.
///
/// # Examples
///
/// ```
/// use tilecaster::pack_argb;
///
/// assert_eq!(pack_argb(0xFF, 0x12, 0x34, 0x56), 0xFF12_3456);
/// ```
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Splits an `0xAARRGGBB` color into `(a, r, g, b)`.
pub const fn unpack_argb(color: u32) -> (u8, u8, u8, u8) {
    (
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    )
}

/// Scales the color channels by `factor` (clamped to `[0, 1]`), keeping alpha.
pub fn shade(color: u32, factor: f64) -> u32 {
    let factor = factor.clamp(0.0, 1.0);
    let (a, r, g, b) = unpack_argb(color);
    let scale = |channel: u8| (channel as f64 * factor).round() as u8;
    pack_argb(a, scale(r), scale(g), scale(b))
}

/// Opaque black.
pub const ARGB_BLACK: u32 = 0xFF00_0000;

/// Opaque white.
pub const ARGB_WHITE: u32 = 0xFFFF_FFFF;

/// Pixel buffer with bounds-checked access.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Creates a black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![ARGB_BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Fills the whole buffer with one color.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Writes a pixel; coordinates outside the buffer are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, color: u32) {
        if x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64 {
            let index = y as usize * self.width as usize + x as usize;
            self.pixels[index] = color;
        }
    }

    /// Reads a pixel, `None` outside the buffer.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Fills rows `[top, bottom)` of column `x`, clipped to the buffer.
    pub fn fill_column(&mut self, x: u32, top: u32, bottom: u32, color: u32) {
        if x >= self.width {
            return;
        }
        let bottom = bottom.min(self.height);
        let stride = self.width as usize;
        for y in top..bottom {
            self.pixels[y as usize * stride + x as usize] = color;
        }
    }

    /// Fills an axis-aligned rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width).min(self.width as i64);
        let y1 = (y + height).min(self.height as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels[py as usize * self.width as usize + px as usize] = color;
            }
        }
    }

    /// Draws a line with Bresenham's algorithm, clipped per pixel.
    pub fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Writes the buffer as RGBA8 bytes into `out`, resizing it as needed.
    ///
    /// This is the layout macroquad textures expect.
    pub fn write_rgba8(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            let (a, r, g, b) = unpack_argb(pixel);
            out.extend_from_slice(&[r, g, b, a]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let color = pack_argb(0x80, 0x10, 0x20, 0x30);
        assert_eq!(color, 0x8010_2030);
        assert_eq!(unpack_argb(color), (0x80, 0x10, 0x20, 0x30));
    }

    #[test]
    fn test_shade_keeps_alpha() {
        assert_eq!(shade(0xFFC8_6432, 0.5), 0xFF64_3219);
        assert_eq!(shade(ARGB_WHITE, 2.0), ARGB_WHITE);
        assert_eq!(shade(ARGB_WHITE, -1.0), ARGB_BLACK);
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut buffer = FrameBuffer::new(4, 3);
        buffer.set_pixel(-1, 0, ARGB_WHITE);
        buffer.set_pixel(4, 0, ARGB_WHITE);
        buffer.set_pixel(0, 3, ARGB_WHITE);
        assert!(buffer.pixels().iter().all(|&p| p == ARGB_BLACK));

        buffer.set_pixel(3, 2, ARGB_WHITE);
        assert_eq!(buffer.get_pixel(3, 2), Some(ARGB_WHITE));
        assert_eq!(buffer.get_pixel(4, 2), None);
    }

    #[test]
    fn test_fill_column_clamps() {
        let mut buffer = FrameBuffer::new(2, 5);
        buffer.fill_column(1, 2, 100, ARGB_WHITE);
        let column: Vec<u32> = (0..5).map(|y| buffer.get_pixel(1, y).unwrap()).collect();
        assert_eq!(column, vec![ARGB_BLACK, ARGB_BLACK, ARGB_WHITE, ARGB_WHITE, ARGB_WHITE]);
        assert_eq!(buffer.get_pixel(0, 4), Some(ARGB_BLACK));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = FrameBuffer::new(4, 4);
        buffer.fill_rect(-2, -2, 4, 4, ARGB_WHITE);
        assert_eq!(buffer.get_pixel(0, 0), Some(ARGB_WHITE));
        assert_eq!(buffer.get_pixel(1, 1), Some(ARGB_WHITE));
        assert_eq!(buffer.get_pixel(2, 2), Some(ARGB_BLACK));
    }

    #[test]
    fn test_draw_line_endpoints() {
        let mut buffer = FrameBuffer::new(10, 10);
        buffer.draw_line(1, 1, 8, 5, ARGB_WHITE);
        assert_eq!(buffer.get_pixel(1, 1), Some(ARGB_WHITE));
        assert_eq!(buffer.get_pixel(8, 5), Some(ARGB_WHITE));
        let lit = buffer.pixels().iter().filter(|&&p| p == ARGB_WHITE).count();
        assert_eq!(lit, 8);
    }

    #[test]
    fn test_rgba8_layout() {
        let mut buffer = FrameBuffer::new(1, 1);
        buffer.clear(pack_argb(0xFF, 1, 2, 3));
        let mut bytes = Vec::new();
        buffer.write_rgba8(&mut bytes);
        assert_eq!(bytes, vec![1, 2, 3, 0xFF]);
    }
}
