//! # Texture Table
//!
//! Square wall textures baked procedurally at startup, one per material id.
//! The table is immutable once built; sampling is bounds-checked and never
//! fails.

use crate::rendering::framebuffer::{pack_argb, shade, unpack_argb};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of wall materials with a baked texture (ids `1..=MATERIAL_COUNT`).
pub const MATERIAL_COUNT: usize = 8;

/// The look of each material id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    RedBrick,
    PurpleStone,
    MossyStone,
    GrayStone,
    ColorStone,
    BlueStone,
    Wood,
    Eagle,
}

impl Material {
    /// All materials in id order, starting at id 1.
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::RedBrick,
        Material::PurpleStone,
        Material::MossyStone,
        Material::GrayStone,
        Material::ColorStone,
        Material::BlueStone,
        Material::Wood,
        Material::Eagle,
    ];

    /// Material for a tile id; `None` for `0` and unknown ids.
    pub fn from_id(id: u8) -> Option<Material> {
        Self::ALL.get((id as usize).checked_sub(1)?).copied()
    }

    /// Dominant color, also used for the minimap.
    pub fn base_color(self) -> u32 {
        match self {
            Material::RedBrick => pack_argb(0xFF, 0x9C, 0x3B, 0x2E),
            Material::PurpleStone => pack_argb(0xFF, 0x6E, 0x4A, 0x8C),
            Material::MossyStone => pack_argb(0xFF, 0x5A, 0x7A, 0x48),
            Material::GrayStone => pack_argb(0xFF, 0x80, 0x80, 0x80),
            Material::ColorStone => pack_argb(0xFF, 0xA8, 0x8A, 0x50),
            Material::BlueStone => pack_argb(0xFF, 0x3E, 0x5E, 0xA8),
            Material::Wood => pack_argb(0xFF, 0x8B, 0x5A, 0x2B),
            Material::Eagle => pack_argb(0xFF, 0x70, 0x70, 0x90),
        }
    }

    fn mortar_color(self) -> u32 {
        match self {
            Material::RedBrick => pack_argb(0xFF, 0xB4, 0xAA, 0x9A),
            Material::Wood => pack_argb(0xFF, 0x4A, 0x2E, 0x14),
            Material::Eagle => pack_argb(0xFF, 0xD8, 0xB0, 0x30),
            _ => pack_argb(0xFF, 0x30, 0x30, 0x30),
        }
    }
}

/// A square, row-major array of texels.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    size: usize,
    texels: Vec<u32>,
}

impl Texture {
    /// Edge length in texels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Texel at `(row, col)`, `None` outside the texture.
    pub fn texel(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.size && col < self.size {
            Some(self.texels[row * self.size + col])
        } else {
            None
        }
    }

    /// Texel with both coordinates clamped into the texture.
    pub fn texel_clamped(&self, row: usize, col: usize) -> u32 {
        let last = self.size - 1;
        self.texels[row.min(last) * self.size + col.min(last)]
    }

    fn from_fn(size: usize, mut shader: impl FnMut(usize, usize) -> u32) -> Self {
        let mut texels = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                texels.push(shader(row, col));
            }
        }
        Self { size, texels }
    }
}

/// Material id → texture lookup.
#[derive(Debug, Clone)]
pub struct TextureTable {
    size: usize,
    textures: Vec<Texture>,
    fallback: Texture,
}

impl TextureTable {
    /// Bakes every material at `size × size` texels. The same seed always
    /// yields the same table.
    ///
    /// A zero size is treated as one texel.
    pub fn bake(size: u32, seed: u64) -> Self {
        let size = size.max(1) as usize;
        let mut rng = StdRng::seed_from_u64(seed);

        let textures = Material::ALL
            .iter()
            .map(|&material| bake_material(material, size, &mut rng))
            .collect();

        let cell = (size / 8).max(1);
        let fallback = Texture::from_fn(size, |row, col| {
            if (row / cell + col / cell) % 2 == 0 {
                pack_argb(0xFF, 0xFF, 0x00, 0xFF)
            } else {
                pack_argb(0xFF, 0x00, 0x00, 0x00)
            }
        });

        debug!("Baked {} textures at {}x{}", MATERIAL_COUNT, size, size);

        Self {
            size,
            textures,
            fallback,
        }
    }

    /// Edge length shared by every texture.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Texture for a material id. Unknown ids (including `0`) get the
    /// fallback checker.
    pub fn texture(&self, material: u8) -> &Texture {
        (material as usize)
            .checked_sub(1)
            .and_then(|index| self.textures.get(index))
            .unwrap_or(&self.fallback)
    }

    /// Samples `(row, col)` of the material's texture, clamped into range.
    pub fn sample(&self, material: u8, row: usize, col: usize) -> u32 {
        self.texture(material).texel_clamped(row, col)
    }
}

fn bake_material(material: Material, size: usize, rng: &mut StdRng) -> Texture {
    let base = material.base_color();
    let mortar = material.mortar_color();
    let line = (size / 16).max(1);

    Texture::from_fn(size, |row, col| {
        let color = match material {
            Material::RedBrick => {
                let course = (size / 4).max(1);
                let brick = (size / 2).max(1);
                let offset = if (row / course) % 2 == 0 { 0 } else { brick / 2 };
                if row % course < line || (col + offset) % brick < line {
                    mortar
                } else {
                    base
                }
            }
            Material::Wood => {
                let plank = (size / 4).max(1);
                if col % plank < line {
                    mortar
                } else if (row + col * 3) % 11 == 0 {
                    shade(base, 0.85)
                } else {
                    base
                }
            }
            Material::Eagle => {
                let half = size as i64 / 2;
                let dr = (row as i64 - half).abs();
                let dc = (col as i64 - half).abs();
                if dr + dc < half / 2 {
                    mortar
                } else if row < line || col < line || row >= size - line || col >= size - line {
                    shade(base, 0.6)
                } else {
                    base
                }
            }
            _ => {
                let block = (size / 2).max(1);
                let within_row = row % block;
                let within_col = col % block;
                if within_row < line || within_col < line {
                    mortar
                } else if within_row >= block - line || within_col >= block - line {
                    shade(base, 0.7)
                } else {
                    base
                }
            }
        };
        grain(color, rng)
    })
}

fn grain(color: u32, rng: &mut StdRng) -> u32 {
    let (a, r, g, b) = unpack_argb(color);
    let jitter: i16 = rng.gen_range(-10..=10);
    let nudge = |channel: u8| (channel as i16 + jitter).clamp(0, 255) as u8;
    pack_argb(a, nudge(r), nudge(g), nudge(b))
}
