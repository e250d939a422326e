use std::time::Duration;

use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;

/// A completed generator pass, as published to the display loop.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub viewport: ComplexRect,
    pub render_duration: Duration,
}
