use crate::controllers::interactive::FrameData;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::mandelbrot::mandelbrot_config::ViewerConfig;

/// What the HUD shows for one display tick.
#[derive(Debug, Clone, Copy)]
pub struct HudSnapshot<'a> {
    pub config: &'a ViewerConfig,
    pub viewport: ComplexRect,
    pub frame: Option<&'a FrameData>,
    pub display_rate: Option<f64>,
}

#[derive(Debug, Default)]
pub struct HudState {
    visible: bool,
}

impl HudState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    #[must_use]
    pub fn lines(snapshot: &HudSnapshot<'_>) -> Vec<String> {
        let min = snapshot.viewport.min();
        let max = snapshot.viewport.max();

        let mut lines = vec![
            format!("Real: [{:.6}, {:.6}]", min.real, max.real),
            format!("Imag: [{:.6}, {:.6}]", min.imag, max.imag),
            format!("Max iterations: {}", snapshot.config.max_iterations()),
        ];

        match snapshot.frame {
            Some(frame) => {
                lines.push(format!("Frame: {}", frame.generation));
                lines.push(format!(
                    "Last render: {:.1} ms",
                    frame.render_duration.as_secs_f64() * 1000.0
                ));
            }
            None => lines.push("Frame: waiting for first render".to_string()),
        }

        lines.push(match snapshot.display_rate {
            Some(rate) => format!("Display: {:.0} fps", rate),
            None => "Display: -".to_string(),
        });

        lines
    }

    pub fn show(&self, ctx: &egui::Context, snapshot: &HudSnapshot<'_>) {
        if !self.visible {
            return;
        }

        egui::Window::new("Mandelbrot")
            .default_pos([10.0, 10.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                for line in Self::lines(snapshot) {
                    ui.label(line);
                }
                ui.separator();
                ui.label("WASD pan, R/F zoom, Home reset, Tab hide, Esc quit");
            });
    }
}
