use std::sync::Arc;

use crate::controllers::interactive::data::frame_data::FrameData;

/// Where the generator hands each finished frame.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, frame: Arc<FrameData>);
}
