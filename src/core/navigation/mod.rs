pub mod controls;
pub mod motion;

pub use controls::NavigationControlsSnapshot;
pub use motion::{NavigationStepReport, pan_step, step_navigation};
