use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use crate::core::actions::compose_frame::compose_frame::ComposeFrameError;
use crate::core::actions::generate_index_image::generate_index_image::GenerateIndexImageError;
use crate::core::knots::errors::KnotFieldError;

#[derive(Debug)]
pub enum SceneError {
    NoPalettes,
    NoScene,
    PaletteOutOfRange { index: usize, count: usize },
    Field(KnotFieldError),
    Image(GenerateIndexImageError),
    Frame(ComposeFrameError<Infallible>),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPalettes => write!(f, "no palettes to draw with"),
            Self::NoScene => write!(f, "no scene has been computed"),
            Self::PaletteOutOfRange { index, count } => {
                write!(f, "palette {} requested but only {} loaded", index, count)
            }
            Self::Field(err) => write!(f, "knot field error: {}", err),
            Self::Image(err) => write!(f, "{}", err),
            Self::Frame(err) => write!(f, "{}", err),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoPalettes | Self::NoScene | Self::PaletteOutOfRange { .. } => None,
            Self::Field(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<KnotFieldError> for SceneError {
    fn from(err: KnotFieldError) -> Self {
        Self::Field(err)
    }
}

impl From<GenerateIndexImageError> for SceneError {
    fn from(err: GenerateIndexImageError) -> Self {
        Self::Image(err)
    }
}

impl From<ComposeFrameError<Infallible>> for SceneError {
    fn from(err: ComposeFrameError<Infallible>) -> Self {
        Self::Frame(err)
    }
}
