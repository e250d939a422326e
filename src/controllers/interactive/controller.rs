use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::shared_viewport::SharedViewport;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::generate_frame::generate_frame_cancelable;
use crate::core::fractals::mandelbrot::mandelbrot_config::ViewerConfig;
use log::{debug, error, info, trace};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

struct SharedState {
    config: ViewerConfig,
    viewport: Arc<SharedViewport>,
    last_published_generation: AtomicU64,
    shutdown: AtomicBool,
    pacing: Mutex<()>,
    wake: Condvar,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Owns the background generator thread.
///
/// The thread renders the current viewport back-to-back and publishes every
/// finished frame through the presenter port. Without a generation rate in
/// the config it never sleeps.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        config: ViewerConfig,
        viewport: Arc<SharedViewport>,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            config,
            viewport,
            last_published_generation: AtomicU64::new(0),
            shutdown: AtomicBool::new(false),
            pacing: Mutex::new(()),
            wake: Condvar::new(),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("mandelbrot-generator".into())
            .spawn(move || Self::worker_loop(&worker_shared))
            .map_err(|err| error!("failed to spawn generator thread: {err}"))
            .ok();

        Self { shared, worker }
    }

    /// Stops the generator and waits for it. A pass in flight is abandoned.
    pub fn shutdown(&mut self) {
        {
            // the flag must flip under the pacing lock or a worker about to
            // park can miss the wakeup
            let _guard = self
                .shared
                .pacing
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
            self.shared.wake.notify_all();
        }

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("generator thread panicked");
            }
            info!(
                "generator stopped after {} frames",
                self.last_published_generation()
            );
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Generation number of the newest published frame; 0 before the first.
    #[must_use]
    pub fn last_published_generation(&self) -> u64 {
        self.shared
            .last_published_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        let cancel_token = || shared.shutdown.load(Ordering::Relaxed);

        while !shared.shutdown.load(Ordering::Acquire) {
            let start = Instant::now();
            let viewport = shared.viewport.snapshot();

            match generate_frame_cancelable(&shared.config, viewport, &cancel_token) {
                Ok(pixel_buffer) => {
                    let render_duration = start.elapsed();
                    let generation = shared
                        .last_published_generation
                        .load(Ordering::Relaxed)
                        + 1;

                    shared.presenter_port.present(Arc::new(FrameData {
                        generation,
                        pixel_buffer,
                        viewport,
                        render_duration,
                    }));

                    shared
                        .last_published_generation
                        .store(generation, Ordering::Release);

                    if generation == 1 {
                        debug!("first frame published in {render_duration:?}");
                    } else {
                        trace!("frame {generation} published in {render_duration:?}");
                    }
                }
                Err(err) if err.is_cancelled() => return,
                Err(err) => {
                    error!("frame generation failed: {err}");
                }
            }

            if let Some(interval) = shared.config.generation_interval() {
                Self::pace(shared, start, interval);
            }
        }
    }

    /// Sleeps out the rest of `interval`, waking early on shutdown.
    fn pace(shared: &SharedState, pass_started: Instant, interval: Duration) {
        let remaining = interval.saturating_sub(pass_started.elapsed());
        if remaining.is_zero() {
            return;
        }

        let guard = shared.pacing.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = shared
            .wake
            .wait_timeout_while(guard, remaining, |_| {
                !shared.shutdown.load(Ordering::Acquire)
            })
            .unwrap_or_else(PoisonError::into_inner);
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
