pub mod core;
mod controllers;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, SharedFrame,
    SharedViewport,
};
pub use crate::core::actions::generate_frame::{GenerateFrameError, generate_frame};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::fractals::mandelbrot::algorithm::{EscapeTime, escape_time};
pub use crate::core::fractals::mandelbrot::colour_map::evaluate;
pub use crate::core::fractals::mandelbrot::errors::ConfigError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::ViewerConfig;
pub use crate::core::util::frame_clock::FrameClock;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
