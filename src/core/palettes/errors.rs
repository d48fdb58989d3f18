use std::{error::Error, fmt, io};

/// Why a palette description could not be read. Line numbers are 1-based.
#[derive(Debug)]
pub enum PaletteParseError {
    MissingHeader { line: usize, found: Option<String> },
    MissingToken { line: usize, expected: &'static str },
    InvalidCount { line: usize, token: String },
    InvalidColour { line: usize, token: String },
    InvalidPalette { line: usize, error: PaletteError },
    TrailingInput { line: usize, token: String },
    Io(io::Error),
}

impl fmt::Display for PaletteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader { line, found: Some(token) } => {
                write!(f, "line {}: expected 'Number_of_palettes', found '{}'", line, token)
            }
            Self::MissingHeader { line, found: None } => {
                write!(f, "line {}: expected 'Number_of_palettes', found end of input", line)
            }
            Self::MissingToken { line, expected } => {
                write!(f, "line {}: expected {}, found end of input", line, expected)
            }
            Self::InvalidCount { line, token } => {
                write!(f, "line {}: '{}' is not a valid count", line, token)
            }
            Self::InvalidColour { line, token } => {
                write!(f, "line {}: '{}' is not a 0xRRGGBB colour", line, token)
            }
            Self::InvalidPalette { line, error } => write!(f, "line {}: {}", line, error),
            Self::TrailingInput { line, token } => {
                write!(f, "line {}: unexpected '{}' after the last palette", line, token)
            }
            Self::Io(err) => write!(f, "could not read palette file: {}", err),
        }
    }
}

impl Error for PaletteParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidPalette { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for PaletteParseError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// A palette that breaks the name or colour-count invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    EmptyName,
    NameTooLong { name: String, max: usize },
    NameHasWhitespace(String),
    NoColours(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "palette name must not be empty"),
            Self::NameTooLong { name, max } => {
                write!(f, "palette name '{}' is longer than {} bytes", name, max)
            }
            Self::NameHasWhitespace(name) => {
                write!(f, "palette name '{}' must be a single word", name)
            }
            Self::NoColours(name) => write!(f, "palette '{}' has no colours", name),
        }
    }
}

impl Error for PaletteError {}

/// Band colours that cannot be laid out as a colour table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourTableError {
    NoBands,
}

impl fmt::Display for ColourTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBands => write!(f, "a colour table needs at least one band colour"),
        }
    }
}

impl Error for ColourTableError {}
