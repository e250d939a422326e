use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotError {}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    ZeroMaxIterations,
    InvalidWindowSize(f64),
    InvalidFrameRate(u32),
    InvalidGenerationRate(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "iterations must be greater than zero"),
            Self::InvalidWindowSize(size) => {
                write!(f, "window size must be a finite number of at least 2 pixels, got {size}")
            }
            Self::InvalidFrameRate(fps) => {
                write!(f, "frame rate must be between 1 and 240, got {fps}")
            }
            Self::InvalidGenerationRate(rate) => {
                write!(f, "generation rate must be a positive number, got {rate}")
            }
        }
    }
}

impl Error for ConfigError {}
