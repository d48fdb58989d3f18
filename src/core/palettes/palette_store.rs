use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::data::colour::Colour;
use crate::core::palettes::errors::PaletteParseError;
use crate::core::palettes::palette::Palette;

pub const HEADER: &str = "Number_of_palettes";

/// The example palettes shipped with the original palette file format.
pub const BUILTIN_PALETTES: &str = "\
Number_of_palettes 3
Cold        4 0x33ccff 0x0099ff 0x0033cc 0x0033ff
Grayscale   6 0xffffff 0x333333 0xcccccc 0x999999 0x666666 0x000000
Hot         5 0xffff33 0xffcc00 0xff6600 0xbb0033 0xff3300
";

/// Palettes in file order, addressed by position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStore {
    palettes: Vec<Palette>,
}

impl PaletteStore {
    #[must_use]
    pub fn new(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    /// Parses the whitespace-delimited palette format:
    ///
    /// ```text
    /// Number_of_palettes 2
    /// Cold 2 0x33ccff 0x0099ff
    /// Hot  1 0xffff33
    /// ```
    ///
    /// Tokens may be split across lines freely; line numbers are only used
    /// for error reporting.
    pub fn parse(input: &str) -> Result<Self, PaletteParseError> {
        let mut tokens = Tokens::new(input);

        match tokens.next() {
            Some((_, HEADER)) => {}
            Some((line, token)) => {
                return Err(PaletteParseError::MissingHeader {
                    line,
                    found: Some(token.to_string()),
                });
            }
            None => {
                return Err(PaletteParseError::MissingHeader {
                    line: tokens.line(),
                    found: None,
                });
            }
        }

        let palette_count = tokens.count("palette count")?;
        let mut palettes = Vec::with_capacity(palette_count.min(1024));

        for _ in 0..palette_count {
            let (name_line, name) = tokens.expect("palette name")?;
            let colour_count = tokens.count("colour count")?;
            let colours = (0..colour_count)
                .map(|_| tokens.colour())
                .collect::<Result<Vec<_>, _>>()?;

            let palette = Palette::new(name, colours).map_err(|error| {
                PaletteParseError::InvalidPalette {
                    line: name_line,
                    error,
                }
            })?;
            palettes.push(palette);
        }

        if let Some((line, token)) = tokens.next() {
            return Err(PaletteParseError::TrailingInput {
                line,
                token: token.to_string(),
            });
        }

        debug!(palettes = palettes.len(), "palette description parsed");

        Ok(Self { palettes })
    }

    /// Reads and parses a palette file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteParseError> {
        let text = fs::read_to_string(path)?;

        Self::parse(&text)
    }

    /// Cold, Grayscale and Hot.
    #[must_use]
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_PALETTES)
            .unwrap_or_else(|err| unreachable!("builtin palettes are well formed: {}", err))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.palettes.get(index)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|palette| palette.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }
}

/// Whitespace-delimited tokens tagged with their 1-based line number.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            current: None,
            last_line: 1,
        }
    }

    fn line(&self) -> usize {
        self.last_line
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(word) = words.next() {
                    return Some((*line, word));
                }
            }

            let (index, text) = self.lines.next()?;
            self.last_line = index + 1;
            self.current = Some((index + 1, text.split_whitespace()));
        }
    }

    fn expect(&mut self, expected: &'static str) -> Result<(usize, &'a str), PaletteParseError> {
        self.next().ok_or(PaletteParseError::MissingToken {
            line: self.last_line,
            expected,
        })
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, PaletteParseError> {
        let (line, token) = self.expect(expected)?;

        token.parse::<usize>().map_err(|_| PaletteParseError::InvalidCount {
            line,
            token: token.to_string(),
        })
    }

    fn colour(&mut self) -> Result<Colour, PaletteParseError> {
        let (line, token) = self.expect("colour")?;

        parse_hex_colour(token).ok_or_else(|| PaletteParseError::InvalidColour {
            line,
            token: token.to_string(),
        })
    }
}

/// Accepts `0xRRGGBB`, `0XRRGGBB` or bare hex digits, up to `0xFFFFFF`.
fn parse_hex_colour(token: &str) -> Option<Colour> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(digits, 16).ok().map(Colour::from_hex)
}
