pub mod frame_clock;
pub mod pixel_to_complex_coords;
