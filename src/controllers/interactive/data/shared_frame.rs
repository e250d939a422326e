use std::sync::{Arc, PoisonError, RwLock};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;

/// Handle to the most recently completed frame.
///
/// Writers swap the `Arc` under the write lock; readers clone it under the
/// read lock. Neither side holds the lock while rendering or drawing, and the
/// last write wins.
#[derive(Debug, Default)]
pub struct SharedFrame {
    latest: RwLock<Option<Arc<FrameData>>>,
}

impl SharedFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, frame: Arc<FrameData>) {
        let previous = {
            let mut guard = self.latest.write().unwrap_or_else(PoisonError::into_inner);
            guard.replace(frame)
        };

        // Dropped outside the lock: this may free the last reference to a
        // full-size buffer.
        drop(previous);
    }

    #[must_use]
    pub fn latest(&self) -> Option<Arc<FrameData>> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl InteractiveControllerPresenterPort for SharedFrame {
    fn present(&self, frame: Arc<FrameData>) {
        self.publish(frame);
    }
}
