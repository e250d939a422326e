use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned rectangle in the complex plane; the viewport of the explorer.
///
/// `min` holds the smallest real and imaginary bounds, `max` the largest.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// Builds a rect of the given size centred on `center`.
    pub fn from_center(center: Complex, size: Complex) -> Result<Self, ComplexRectError> {
        let half = size.scaled(0.5);
        Self::new(center - half, center + half)
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    /// Width and height packed as `real` and `imag`.
    #[must_use]
    pub fn size(&self) -> Complex {
        Complex::new(self.width(), self.height())
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            self.min.real + self.width() / 2.0,
            self.min.imag + self.height() / 2.0,
        )
    }

    /// Scales the rect about its centre. Factors below one zoom in.
    pub fn zoomed(&self, factor: f64) -> Result<Self, ComplexRectError> {
        Self::from_center(self.center(), self.size().scaled(factor))
    }

    /// Shifts both corners by `delta`. Fails if the shifted bounds overflow.
    pub fn translated(&self, delta: Complex) -> Result<Self, ComplexRectError> {
        Self::new(self.min + delta, self.max + delta)
    }
}
