use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

/// Failures of the windowing and graphics stack.
#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Resize(pixels::TextureError),
    EventLoopRun(EventLoopError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "failed to create event loop: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "graphics surface error: {}", err),
            Self::Resize(err) => write!(f, "failed to resize surface: {}", err),
            Self::EventLoopRun(err) => write!(f, "event loop terminated abnormally: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) | Self::EventLoopRun(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Resize(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failing_stage() {
        let creation = GuiError::EventLoop(EventLoopError::RecreationAttempt);
        let run = GuiError::EventLoopRun(EventLoopError::ExitFailure(3));
        let resize = GuiError::Resize(pixels::TextureError::TextureWidth(0));

        assert!(creation.to_string().starts_with("failed to create event loop: "));
        assert!(run.to_string().starts_with("event loop terminated abnormally: "));
        assert!(resize.to_string().starts_with("failed to resize surface: "));
    }

    #[test]
    fn test_source_exposes_the_underlying_error() {
        let err = GuiError::EventLoop(EventLoopError::RecreationAttempt);

        assert!(err.source().is_some());
    }
}
