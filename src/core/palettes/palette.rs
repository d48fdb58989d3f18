use crate::core::data::colour::Colour;
use crate::core::palettes::errors::PaletteError;

/// Longest palette name accepted, in bytes.
pub const MAX_NAME_LENGTH: usize = 19;

/// A named, ordered list of blend anchors. Always holds at least one colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colours: Vec<Colour>) -> Result<Self, PaletteError> {
        let name = name.into();

        if name.is_empty() {
            return Err(PaletteError::EmptyName);
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(PaletteError::NameTooLong {
                name,
                max: MAX_NAME_LENGTH,
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(PaletteError::NameHasWhitespace(name));
        }
        if colours.is_empty() {
            return Err(PaletteError::NoColours(name));
        }

        Ok(Self { name, colours })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always `false`; kept for symmetry with [`Palette::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}
