use std::sync::Arc;
use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, info};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use crate::controllers::interactive::{InteractiveController, SharedFrame, SharedViewport};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::mandelbrot::mandelbrot_config::ViewerConfig;
use crate::core::navigation::step_navigation;
use crate::core::util::frame_clock::{FrameClock, RateMeter};
use crate::input::gui::app::hud::{HudSnapshot, HudState};
use crate::input::gui::app::navigation_input::NavigationInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

/// State owned by the display/input loop.
///
/// The authoritative viewport lives here; every change is pushed to the
/// [`SharedViewport`] the generator reads from.
pub struct GuiApp<T: GuiPresenterPort> {
    config: ViewerConfig,
    initial_viewport: ComplexRect,
    viewport: ComplexRect,
    shared_viewport: Arc<SharedViewport>,
    shared_frame: Arc<SharedFrame>,
    presenter: T,
    controller: InteractiveController,
    input: NavigationInputState,
    frame_clock: FrameClock,
    display_rate: RateMeter,
    hud: HudState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: ViewerConfig,
        presenter: T,
        shared_viewport: Arc<SharedViewport>,
        shared_frame: Arc<SharedFrame>,
        controller: InteractiveController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let viewport = shared_viewport.snapshot();

        Self {
            config,
            initial_viewport: config.initial_viewport(),
            viewport,
            shared_viewport,
            shared_frame,
            presenter,
            controller,
            input: NavigationInputState::default(),
            frame_clock: FrameClock::new(Instant::now(), config.frames_per_second()),
            display_rate: RateMeter::default(),
            hud: HudState::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Deadline of the tick after `now`.
    #[must_use]
    pub fn next_tick_after(&self, now: Instant) -> Instant {
        self.frame_clock.next_tick_after(now)
    }

    /// Applies one tick of held-key input to the viewport.
    pub fn tick(&mut self) {
        if self.input.take_hud_toggle() {
            let visible = self.hud.toggle();
            debug!("HUD {}", if visible { "shown" } else { "hidden" });
        }

        let report = step_navigation(&mut self.viewport, self.input.snapshot(), self.initial_viewport);

        if report.reset {
            debug!("view reset to {:?}", self.initial_viewport);
        }

        if report.view_changed {
            self.shared_viewport.set(self.viewport);
        }
    }

    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        self.input.handle_key_event(key_code, state);
    }

    pub fn take_quit_request(&mut self) -> bool {
        self.input.take_quit_request()
    }

    /// Releases every held key, e.g. when the window loses focus.
    pub fn release_keys(&mut self) {
        self.input.reset();
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let frame = self.shared_frame.latest();
        let snapshot = HudSnapshot {
            config: &self.config,
            viewport: self.viewport,
            frame: frame.as_deref(),
            display_rate: self.display_rate.per_second(),
        };
        let hud = &self.hud;

        self.egui_ctx.run(raw_input, |ctx| hud.show(ctx, &snapshot))
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        self.display_rate.record(Instant::now());

        let frame = self.shared_frame.latest();
        self.presenter.render(frame.as_deref(), egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.presenter.resize(width, height)
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    /// Stops the generator. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.controller.is_running() {
            info!(
                "shutting down after presenting frame {}",
                self.presenter.last_presented_generation()
            );
            self.controller.shutdown();
        }
    }
}
