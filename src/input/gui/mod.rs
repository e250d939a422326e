//! GUI input adapter for interactive Mandelbrot viewing.
//!
//! This module provides a windowed interface using winit for window management
//! and keyboard input, pixels for framebuffer rendering, and egui for the HUD.

pub mod app;
pub mod commands;
pub mod errors;
