use egui::Context as EguiContext;

use crate::controllers::interactive::FrameData;
use crate::input::gui::errors::GuiError;

/// Draws frames to the window, with the egui overlay on top.
pub trait GuiPresenterPort {
    /// Presents `frame` if newer than the last one shown, otherwise redraws
    /// what is already on screen. `None` means no frame has been produced yet.
    fn render(
        &mut self,
        frame: Option<&FrameData>,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    fn last_presented_generation(&self) -> u64;
}
