use std::error::Error;
use std::fmt;

/// Pixels computed between two polls of a [`CancelToken`].
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

/// A generator pass was abandoned before its frame was complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("frame generation abandoned")
    }
}

impl Error for Cancelled {}

/// Asked by a generator pass whether to give up on the frame in progress.
///
/// Any `Fn() -> bool` closure is a token, typically one reading the
/// controller's shutdown flag.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    /// Polls the token at the first pixel of every block of
    /// [`CANCEL_CHECK_INTERVAL_PIXELS`]; other indices pass without a poll.
    #[inline]
    fn check_pixel(&self, index: usize) -> Result<(), Cancelled> {
        if index % CANCEL_CHECK_INTERVAL_PIXELS == 0 && self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Token for one-shot renders that always run to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
