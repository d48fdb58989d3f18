use std::fmt;
use std::str::FromStr;

use crate::core::knots::errors::KnotFieldError;

/// The scalar-field formula used to turn knot geometry into a pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldStyle {
    #[default]
    Flow,
    Wave,
    Spin,
    Leaf,
    Rays,
}

impl FieldStyle {
    pub const ALL: &'static [Self] = &[
        Self::Flow,
        Self::Wave,
        Self::Spin,
        Self::Leaf,
        Self::Rays,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Flow => "Flow",
            Self::Wave => "Wave",
            Self::Spin => "Spin",
            Self::Leaf => "Leaf",
            Self::Rays => "Rays",
        }
    }
}

impl fmt::Display for FieldStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl TryFrom<u8> for FieldStyle {
    type Error = KnotFieldError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| KnotFieldError::UnknownStyle(tag.to_string()))
    }
}

impl FromStr for FieldStyle {
    type Err = KnotFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KnotFieldError::UnknownStyle(s.to_string()))
    }
}
