use std::sync::{PoisonError, RwLock};

use crate::core::data::complex_rect::ComplexRect;

/// The viewport shared between the input loop (writer) and the generator
/// (reader). Both sides copy a whole rectangle in or out, so a generator pass
/// always works from one consistent viewport.
#[derive(Debug)]
pub struct SharedViewport {
    current: RwLock<ComplexRect>,
}

impl SharedViewport {
    #[must_use]
    pub fn new(viewport: ComplexRect) -> Self {
        Self {
            current: RwLock::new(viewport),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ComplexRect {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, viewport: ComplexRect) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::mandelbrot_config::default_region;

    #[test]
    fn snapshot_returns_latest_set() {
        let shared = SharedViewport::new(default_region());
        let zoomed = default_region().zoomed(0.5).unwrap();

        assert_eq!(shared.snapshot(), default_region());

        shared.set(zoomed);
        assert_eq!(shared.snapshot(), zoomed);
    }
}
