//! Input adapters for the viewer.
//!
//! This module contains adapters that receive input from the windowing system
//! and translate it into viewport changes.

pub mod gui;
