//! Port definitions for the interactive controller.
//!
//! Contains the trait the generator publishes through; the display side
//! supplies the implementation.

pub mod presenter;
