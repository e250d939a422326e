use std::time::Duration;

use crate::core::{
    data::{
        complex::Complex,
        complex_rect::ComplexRect,
        pixel_rect::PixelRect,
    },
    fractals::mandelbrot::{algorithm::MandelbrotAlgorithm, errors::ConfigError},
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const DEFAULT_WINDOW_SIZE: f64 = 720.0;
pub const DEFAULT_FRAMES_PER_SECOND: u32 = 120;
pub const MAX_FRAMES_PER_SECOND: u32 = 240;

pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0))
        .expect("default fractal region is valid")
}

/// Startup settings, fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    max_iterations: u32,
    window_size: u32,
    frames_per_second: u32,
    generation_rate: Option<f64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            window_size: DEFAULT_WINDOW_SIZE as u32,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            generation_rate: None,
        }
    }
}

impl ViewerConfig {
    /// `window_size` is truncated to whole pixels. A `generation_rate` of
    /// `None` leaves the generator uncapped.
    pub fn new(
        max_iterations: u32,
        window_size: f64,
        frames_per_second: u32,
        generation_rate: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if !window_size.is_finite() || window_size < 2.0 || window_size > f64::from(i32::MAX) {
            return Err(ConfigError::InvalidWindowSize(window_size));
        }

        if frames_per_second == 0 || frames_per_second > MAX_FRAMES_PER_SECOND {
            return Err(ConfigError::InvalidFrameRate(frames_per_second));
        }

        if let Some(rate) = generation_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::InvalidGenerationRate(rate));
            }
        }

        Ok(Self {
            max_iterations,
            window_size: window_size as u32,
            frames_per_second,
            generation_rate,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    #[must_use]
    pub fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }

    /// Minimum spacing between generator passes, if capped.
    #[must_use]
    pub fn generation_interval(&self) -> Option<Duration> {
        self.generation_rate
            .map(|rate| Duration::try_from_secs_f64(1.0 / rate).unwrap_or(Duration::MAX))
    }

    #[must_use]
    pub fn initial_viewport(&self) -> ComplexRect {
        default_region()
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::from_size(self.window_size, self.window_size)
            .expect("window size was validated at construction")
    }

    /// Algorithm for one generator pass over `viewport`.
    #[must_use]
    pub fn build_algorithm(&self, viewport: ComplexRect) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(self.pixel_rect(), viewport, self.max_iterations)
            .expect("max iterations was validated at construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let config = ViewerConfig::default();

        assert_eq!(config.max_iterations(), 200);
        assert_eq!(config.window_size(), 720);
        assert_eq!(config.frames_per_second(), 120);
        assert_eq!(config.generation_interval(), None);
        assert_eq!(
            config.initial_viewport(),
            ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap()
        );
    }

    #[test]
    fn window_size_is_truncated_to_whole_pixels() {
        let config = ViewerConfig::new(50, 1080.7, 60, None).unwrap();

        assert_eq!(config.window_size(), 1080);
        assert_eq!(config.pixel_rect().width(), 1080);
        assert_eq!(config.pixel_rect().height(), 1080);
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(
            ViewerConfig::new(0, 720.0, 120, None),
            Err(ConfigError::ZeroMaxIterations)
        );
    }

    #[test]
    fn rejects_bad_window_sizes() {
        for size in [1.5, -720.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ViewerConfig::new(200, size, 120, None),
                Err(ConfigError::InvalidWindowSize(_))
            ));
        }
    }

    #[test]
    fn rejects_out_of_range_frame_rates() {
        assert_eq!(
            ViewerConfig::new(200, 720.0, 0, None),
            Err(ConfigError::InvalidFrameRate(0))
        );
        assert_eq!(
            ViewerConfig::new(200, 720.0, 241, None),
            Err(ConfigError::InvalidFrameRate(241))
        );
        assert!(ViewerConfig::new(200, 720.0, 30, None).is_ok());
    }

    #[test]
    fn generation_rate_becomes_interval() {
        let config = ViewerConfig::new(200, 720.0, 120, Some(4.0)).unwrap();

        assert_eq!(config.generation_interval(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn tiny_generation_rate_saturates_interval() {
        let config = ViewerConfig::new(200, 720.0, 120, Some(1e-300)).unwrap();

        assert_eq!(config.generation_interval(), Some(Duration::MAX));
    }

    #[test]
    fn rejects_non_positive_generation_rate() {
        assert_eq!(
            ViewerConfig::new(200, 720.0, 120, Some(0.0)),
            Err(ConfigError::InvalidGenerationRate(0.0))
        );
    }

    #[test]
    fn build_algorithm_carries_budget_and_viewport() {
        let config = ViewerConfig::new(77, 64.0, 30, None).unwrap();
        let viewport = config.initial_viewport().zoomed(0.5).unwrap();

        let algorithm = config.build_algorithm(viewport);

        assert_eq!(algorithm.max_iterations(), 77);
        assert_eq!(algorithm.complex_rect(), viewport);
    }
}
