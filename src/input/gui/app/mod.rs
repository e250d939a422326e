pub mod gui_app;
pub mod hud;
pub mod navigation_input;
pub mod ports;
