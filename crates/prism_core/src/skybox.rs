//! Equirectangular panorama used as the environment.
//!
//! Rays that miss all geometry (or run out of bounces) take their color
//! from the skybox, looked up by direction with nearest-neighbor sampling.

use std::f32::consts::{PI, TAU};
use std::path::Path;

use prism_math::{Color, Vec3};
use thiserror::Error;

/// Errors that can occur while building a skybox.
#[derive(Error, Debug)]
pub enum SkyboxError {
    #[error("Failed to load skybox {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Skybox dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Skybox needs at least 3 channels, got {0}")]
    UnsupportedChannels(u8),

    #[error("Skybox pixel buffer has {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type SkyboxResult<T> = Result<T, SkyboxError>;

/// A decoded panoramic image.
///
/// Pixels are 8-bit, row-major, `channels` bytes per pixel. Only the first
/// three channels are read.
#[derive(Clone, Debug)]
pub struct Skybox {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

impl Skybox {
    /// Wrap an already decoded pixel buffer.
    pub fn from_raw(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        channels: u8,
    ) -> SkyboxResult<Self> {
        if width == 0 || height == 0 {
            return Err(SkyboxError::InvalidDimensions { width, height });
        }
        if channels < 3 {
            return Err(SkyboxError::UnsupportedChannels(channels));
        }

        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(SkyboxError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// A 1x1 skybox returning the same color in every direction.
    pub fn uniform(color: Color) -> Self {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            width: 1,
            height: 1,
            channels: 3,
            pixels: vec![to_byte(color.x), to_byte(color.y), to_byte(color.z)],
        }
    }

    /// Decode a panorama from an image file.
    ///
    /// Images with alpha keep four channels, everything else is expanded to
    /// RGB.
    pub fn load(path: impl AsRef<Path>) -> SkyboxResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| SkyboxError::Load {
            path: path.display().to_string(),
            source,
        })?;

        let (pixels, width, height, channels) = if img.color().has_alpha() {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            (rgba.into_raw(), w, h, 4)
        } else {
            let rgb = img.to_rgb8();
            let (w, h) = rgb.dimensions();
            (rgb.into_raw(), w, h, 3)
        };

        let skybox = Self::from_raw(pixels, width, height, channels)?;

        log::info!(
            "Skybox {} loaded ({}x{}, {} channels)",
            path.display(),
            width,
            height,
            channels
        );

        Ok(skybox)
    }

    /// Color seen along a unit `direction`.
    ///
    /// The polar angle is measured from +Y and the azimuth from -Z toward +X,
    /// mapped linearly onto image rows and columns.
    pub fn sample(&self, direction: Vec3) -> Color {
        let theta = direction.y.clamp(-1.0, 1.0).acos();
        let mut phi = direction.x.atan2(-direction.z);
        if phi < 0.0 {
            phi += TAU;
        }

        let x = ((phi / TAU) * self.width as f32) as u32;
        let y = ((theta / PI) * self.height as f32) as u32;

        self.pixel(x.min(self.width - 1), y.min(self.height - 1))
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        let rgb = &self.pixels[idx..idx + 3];
        Color::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0
    }
}
