use log::warn;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::navigation::controls::NavigationControlsSnapshot;

/// Size multiplier per tick while zooming in.
pub const ZOOM_IN_FACTOR: f64 = 0.997;
/// Size multiplier per tick while zooming out.
pub const ZOOM_OUT_FACTOR: f64 = 1.003;
/// Fraction of the current viewport size panned per tick.
pub const PAN_FRACTION: f64 = 0.004;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationStepReport {
    pub view_changed: bool,
    pub reset: bool,
    /// A zoom step was refused because the viewport would have degenerated.
    pub zoom_rejected: bool,
    /// A pan step was refused because the bounds would have overflowed.
    pub pan_rejected: bool,
}

/// Complex-plane distance covered by one pan tick on each axis.
///
/// Proportional to the current viewport size, so the on-screen pan speed is
/// the same at every magnification.
#[must_use]
pub fn pan_step(viewport: &ComplexRect) -> Complex {
    viewport.size().scaled(PAN_FRACTION)
}

/// Applies one display tick of input to `viewport`.
///
/// The pan step is taken from the viewport as it was at the start of the
/// tick, before any zoom. Opposite keys cancel out.
pub fn step_navigation(
    viewport: &mut ComplexRect,
    controls: NavigationControlsSnapshot,
    initial_viewport: ComplexRect,
) -> NavigationStepReport {
    let mut report = NavigationStepReport::default();

    if controls.reset_view_edge {
        report.view_changed = *viewport != initial_viewport;
        report.reset = true;
        *viewport = initial_viewport;
        return report;
    }

    let step = pan_step(viewport);
    let before = *viewport;

    for (held, factor) in [
        (controls.zoom_in, ZOOM_IN_FACTOR),
        (controls.zoom_out, ZOOM_OUT_FACTOR),
    ] {
        if !held {
            continue;
        }

        match viewport.zoomed(factor) {
            Ok(zoomed) => *viewport = zoomed,
            Err(err) => {
                warn!("zoom step ignored: {err}");
                report.zoom_rejected = true;
            }
        }
    }

    let x = axis_from_pair(controls.right, controls.left);
    let y = axis_from_pair(controls.up, controls.down);

    if x != 0.0 || y != 0.0 {
        match viewport.translated(Complex::new(x * step.real, y * step.imag)) {
            Ok(moved) => *viewport = moved,
            Err(err) => {
                warn!("pan step ignored: {err}");
                report.pan_rejected = true;
            }
        }
    }

    report.view_changed = *viewport != before;
    report
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
