use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// `|z| > 16`, compared squared to stay off `sqrt`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 256.0;

/// Outcome of iterating `z <- z² + c` from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeTime {
    /// `|z|` crossed the escape radius on the zero-based iteration `n`.
    Escaped(u32),
    /// The iteration budget ran out first.
    Bounded,
}

impl EscapeTime {
    #[must_use]
    pub fn escaped(&self) -> bool {
        matches!(self, Self::Escaped(_))
    }
}

#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeTime {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return EscapeTime::Escaped(iteration);
        }
    }

    EscapeTime::Bounded
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations,
        })
    }

    #[must_use]
    pub fn complex_rect(&self) -> ComplexRect {
        self.complex_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeTime;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(escape_time(c, self.max_iterations))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}
