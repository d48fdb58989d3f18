use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum KnotFieldError {
    InvalidDimensions { width: u32, height: u32 },
    NoKnots,
    TooManyKnots { count: usize, max: usize },
    InvalidSpin { spokes: u32, frequency: f64, decay: f64 },
    UnknownStyle(String),
    InvalidDiscreteStep(u32),
}

impl fmt::Display for KnotFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "field dimensions must be positive: {}x{}", width, height)
            }
            Self::NoKnots => write!(f, "a knot field needs at least one knot"),
            Self::TooManyKnots { count, max } => {
                write!(f, "{} knots requested, at most {} are supported", count, max)
            }
            Self::InvalidSpin {
                spokes,
                frequency,
                decay,
            } => write!(
                f,
                "spin needs 1 to 7 spokes and positive frequency and decay, got {} spokes, frequency {}, decay {}",
                spokes, frequency, decay
            ),
            Self::UnknownStyle(tag) => write!(f, "unknown field style '{}'", tag),
            Self::InvalidDiscreteStep(step) => {
                write!(f, "discrete step must be 1, 4 or 7, got {}", step)
            }
        }
    }
}

impl Error for KnotFieldError {}

/// Failure reported by the per-pixel algorithm port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    PointOutsideField { x: i32, y: i32, width: u32, height: u32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideField { x, y, width, height } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} field",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for FieldError {}
