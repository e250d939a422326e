pub mod frame_data;
pub mod shared_frame;
pub mod shared_viewport;
