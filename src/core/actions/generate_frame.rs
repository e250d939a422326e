use std::error::Error;
use std::fmt;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::fractals::mandelbrot::colour_map::EscapeBandColourMap;
use crate::core::fractals::mandelbrot::mandelbrot_config::ViewerConfig;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug)]
pub enum GenerateFrameError {
    Cancelled(Cancelled),
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
}

impl GenerateFrameError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl fmt::Display for GenerateFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GenerateFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for GenerateFrameError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Algorithm(e),
        }
    }
}

impl From<GeneratePixelBufferError> for GenerateFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Renders one complete frame of `viewport` at the configured resolution.
pub fn generate_frame(
    config: &ViewerConfig,
    viewport: ComplexRect,
) -> Result<PixelBuffer, GenerateFrameError> {
    generate_frame_cancelable(config, viewport, &NeverCancel)
}

/// [`generate_frame`] that gives up as soon as `cancel` fires.
pub fn generate_frame_cancelable<C: CancelToken>(
    config: &ViewerConfig,
    viewport: ComplexRect,
    cancel: &C,
) -> Result<PixelBuffer, GenerateFrameError> {
    let algorithm = config.build_algorithm(viewport);
    let escape_times = generate_fractal_parallel_rayon_cancelable(&algorithm, cancel)?;

    Ok(generate_pixel_buffer(
        escape_times,
        &EscapeBandColourMap,
        algorithm.pixel_rect(),
        cancel,
    )?)
}
