use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel onto the viewport.
///
/// The mapping is half-open: the top-left pixel lands exactly on
/// `(min.real, max.imag)`, and each further pixel advances by
/// `width / pixel_width` (resp. `height / pixel_height`). The bottom-right
/// pixel therefore stops one step short of `(max.real, min.imag)`.
/// Pixel rows grow downwards while the imaginary axis points up.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_pixel_y = f64::from(pixel_position.y - pixel_rect.top_left().y);
    let real = complex_rect.min().real
        + (relative_pixel_x / f64::from(pixel_rect.width())) * complex_rect.width();
    let imag = complex_rect.max().imag
        - (relative_pixel_y / f64::from(pixel_rect.height())) * complex_rect.height();

    Ok(Complex { real, imag })
}
