//! Colour type shared by the drawing surface and the GPU renderer.

use serde::{Deserialize, Serialize};

/// 8-bit sRGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque colour from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `0.0..=1.0` floats, still sRGB-encoded.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Channels decoded to linear light, for writing into an sRGB target.
    /// Alpha is already linear and passes through.
    pub fn to_linear(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_f32_array();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }

    /// Linear clear colour for a wgpu render pass.
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_linear();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let c = Color::rgb(30, 40, 50);
        assert_eq!(c.a, 255);
        assert_eq!(c.to_f32_array()[3], 1.0);
    }

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::WHITE.to_linear();
        for channel in white {
            assert!((channel - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_linear_darkens_midtones() {
        let [r, ..] = Color::rgb(128, 0, 0).to_linear();
        assert!(r < 0.5 && r > 0.2);
    }
}
