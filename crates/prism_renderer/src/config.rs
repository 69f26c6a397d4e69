//! Render configuration.

use crate::{RenderError, RenderResult};

/// Everything that controls a render, passed down by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Sub-samples per pixel along each axis (S x S samples per pixel)
    pub subdivision: u32,
    /// Maximum reflection/refraction depth
    pub max_bounces: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Worker threads; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            subdivision: 1,
            max_bounces: 4,
            fov: 1.0,
            threads: None,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set supersampling subdivision.
    pub fn with_subdivision(mut self, subdivision: u32) -> Self {
        self.subdivision = subdivision;
        self
    }

    /// Set bounce cap.
    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    /// Set field of view (radians).
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set worker thread count.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Total samples per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        self.subdivision * self.subdivision
    }

    /// Weight of a single sub-sample.
    pub fn sample_weight(&self) -> f32 {
        1.0 / self.samples_per_pixel() as f32
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check the configuration before rendering.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.subdivision == 0 {
            return Err(RenderError::InvalidConfig(
                "subdivision must be at least 1".to_string(),
            ));
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(RenderError::InvalidConfig(format!(
                "field of view must be in (0, pi) radians, got {}",
                self.fov
            )));
        }
        if self.threads == Some(0) {
            return Err(RenderError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.max_bounces, 4);
        assert_eq!(config.samples_per_pixel(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_weight() {
        let config = RenderConfig::default().with_subdivision(3);
        assert_eq!(config.samples_per_pixel(), 9);
        assert!((config.sample_weight() * 9.0 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = RenderConfig::default();

        assert!(base.clone().with_resolution(0, 10).validate().is_err());
        assert!(base.clone().with_subdivision(0).validate().is_err());
        assert!(base.clone().with_fov(0.0).validate().is_err());
        assert!(base.clone().with_fov(4.0).validate().is_err());
        assert!(base.clone().with_fov(f32::NAN).validate().is_err());
        assert!(base.with_threads(Some(0)).validate().is_err());
    }
}
