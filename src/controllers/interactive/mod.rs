//! Interactive controller for real-time Mandelbrot viewing.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: a [`SharedViewport`] the display loop writes and the generator
//!   snapshots once per pass
//! - **Output**: the [`InteractiveControllerPresenterPort`] trait, which
//!   receives each finished frame ([`SharedFrame`] is the standard sink)
//! - **Core**: uses `core::actions::generate_frame` for the actual computation

mod controller;
pub mod data;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::shared_frame::SharedFrame;
pub use data::shared_viewport::SharedViewport;
pub use ports::presenter::InteractiveControllerPresenterPort;
