use std::time::{Duration, Instant};

/// Fixed-cadence ticker for the display loop.
///
/// Ticks fall on `origin + k * period`. A late caller is handed the next
/// boundary after `now`; missed ticks are dropped rather than queued.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    origin: Instant,
    period: Duration,
}

impl FrameClock {
    /// # Panics
    /// Panics if `frames_per_second` is zero.
    #[must_use]
    pub fn new(origin: Instant, frames_per_second: u32) -> Self {
        assert!(frames_per_second > 0, "frame rate must be non-zero");

        Self {
            origin,
            period: Duration::from_secs(1) / frames_per_second,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// First tick boundary strictly after `now`.
    #[must_use]
    pub fn next_tick_after(&self, now: Instant) -> Instant {
        let elapsed = now.saturating_duration_since(self.origin);
        let period_nanos = self.period.as_nanos().max(1);
        let ticks_elapsed = elapsed.as_nanos() / period_nanos;
        let next_offset = (ticks_elapsed + 1) * period_nanos;

        self.origin + Duration::from_nanos(next_offset as u64)
    }
}

/// Rolling display-rate estimate for the HUD.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateMeter {
    last: Option<Instant>,
    smoothed: Option<Duration>,
}

impl RateMeter {
    pub fn record(&mut self, now: Instant) {
        if let Some(last) = self.last {
            let sample = now.saturating_duration_since(last);
            self.smoothed = Some(match self.smoothed {
                Some(previous) => (previous * 7 + sample) / 8,
                None => sample,
            });
        }
        self.last = Some(now);
    }

    #[must_use]
    pub fn per_second(&self) -> Option<f64> {
        self.smoothed
            .filter(|d| !d.is_zero())
            .map(|d| 1.0 / d.as_secs_f64())
    }
}
