use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation run by the frame generators.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    /// The pixel grid this algorithm was configured for.
    fn pixel_rect(&self) -> PixelRect;
}
