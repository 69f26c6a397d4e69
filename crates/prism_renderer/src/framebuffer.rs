//! Accumulation buffer and display conversion.

use prism_math::Color;

/// Rescale an over-bright color so its largest channel is 1, then clamp
/// every channel to [0, 1].
///
/// Rescaling before clamping keeps the hue of bright highlights instead of
/// clipping channels independently.
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    let scaled = if max > 1.0 { color / max } else { color };
    scaled.clamp(Color::ZERO, Color::ONE)
}

/// Tone map and quantize a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = tone_map(color) * 255.0;
    [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
}

/// Row-major buffer of linear colors, one per output pixel.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Convert to packed 8-bit RGB, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_map_rescales_over_bright() {
        let mapped = tone_map(Color::new(2.0, 1.0, 0.5));
        assert!((mapped - Color::new(1.0, 0.5, 0.25)).length() < 1e-6);
    }

    #[test]
    fn test_tone_map_leaves_displayable_alone() {
        let c = Color::new(0.5, 0.5, 0.5);
        assert_eq!(tone_map(c), c);
    }

    #[test]
    fn test_tone_map_clamps_negative() {
        let mapped = tone_map(Color::new(-0.5, 0.3, 2.0));
        assert_eq!(mapped.x, 0.0);
        assert!((mapped.y - 0.15).abs() < 1e-6);
        assert_eq!(mapped.z, 1.0);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::splat(0.2)), [51, 51, 51]);
        assert_eq!(color_to_rgb(Color::new(2.0, 1.0, 0.0)), [255, 128, 0]);
        assert_eq!(color_to_rgb(Color::splat(-1.0)), [0, 0, 0]);
    }

    #[test]
    fn test_framebuffer_new() {
        let fb = Framebuffer::new(3, 2);
        assert_eq!(fb.pixels.len(), 6);
        assert!(fb.pixels.iter().all(|&c| c == Color::ZERO));
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut fb = Framebuffer::new(2, 1);
        fb.pixels[1] = Color::new(1.0, 0.0, 0.0);

        assert_eq!(fb.to_rgb8(), vec![0, 0, 0, 255, 0, 0]);
    }
}
