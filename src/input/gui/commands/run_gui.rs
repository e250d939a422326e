use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use log::{error, info};
use winit::dpi::PhysicalSize;
use winit::event::{Event, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, SharedFrame, SharedViewport,
};
use crate::core::fractals::mandelbrot::mandelbrot_config::ViewerConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

const WINDOW_TITLE: &str = "Mandelbrot";

/// Opens the viewer window and runs the display/input loop until the user
/// quits.
///
/// The loop wakes on a fixed [`FrameClock`](crate::FrameClock) cadence. Each
/// tick applies held keys to the viewport and requests a redraw; the redraw
/// presents whatever frame the background generator published last.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Returns once the window has closed. Errors before the first frame
    /// mean no window was shown.
    pub fn execute(&self, config: &ViewerConfig) -> Result<(), GuiError> {
        let event_loop = EventLoop::new().map_err(GuiError::EventLoop)?;

        let size = config.window_size();
        // pixels needs a 'static surface target; the window lives until exit
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(size, size))
                .with_resizable(false)
                .build(&event_loop)
                .map_err(GuiError::Window)?,
        ));

        let presenter = self.presenter_factory.build(window, config)?;

        let shared_viewport = Arc::new(SharedViewport::new(config.initial_viewport()));
        let shared_frame = Arc::new(SharedFrame::new());
        let controller = InteractiveController::new(
            *config,
            Arc::clone(&shared_viewport),
            Arc::clone(&shared_frame) as Arc<dyn InteractiveControllerPresenterPort>,
        );

        let mut app = GuiApp::new(
            window,
            &event_loop,
            *config,
            presenter,
            shared_viewport,
            shared_frame,
            controller,
        );
        let mut loop_error: Option<GuiError> = None;

        info!("window open at {size}x{size}, {} fps", config.frames_per_second());

        let run_result = event_loop.run(|event, elwt| match event {
            Event::NewEvents(StartCause::Init) => {
                elwt.set_control_flow(ControlFlow::WaitUntil(app.next_tick_after(Instant::now())));
                window.request_redraw();
            }
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                app.tick();
                window.request_redraw();
                elwt.set_control_flow(ControlFlow::WaitUntil(app.next_tick_after(Instant::now())));
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                app.handle_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => {
                        app.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key_code),
                                state,
                                ..
                            },
                        ..
                    } => {
                        app.handle_key_event(*key_code, *state);

                        if app.take_quit_request() {
                            app.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Focused(false) => {
                        app.release_keys();
                    }
                    WindowEvent::RedrawRequested => {
                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if let Err(err) = app.render(egui_output) {
                            error!("render failed: {err}");
                            loop_error = Some(err);
                            app.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!("{err}");
                            loop_error = Some(err);
                            app.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!("{err}");
                            loop_error = Some(err);
                            app.shutdown();
                            elwt.exit();
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        });

        app.shutdown();
        run_result.map_err(GuiError::EventLoopRun)?;

        match loop_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
