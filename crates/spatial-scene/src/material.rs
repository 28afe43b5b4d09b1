//! Flat-color materials for built primitives.

use spatial_core::Color;

/// Surface appearance of a built primitive. The mapping layer only deals
/// in flat colors; anything richer belongs to the hosting renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

impl Material {
    /// Create a flat material with the given color.
    pub fn flat(color: Color) -> Self {
        Self { color }
    }

    /// The color as a hex string, the form documents carry.
    pub fn color_hex(&self) -> String {
        self.color.to_hex()
    }
}
