use std::convert::Infallible;

use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palettes::colour_table::ColourTable;

/// A colour table viewed through the animation's current rotation and fade.
#[derive(Debug, Clone, Copy)]
pub struct CycledTable<'a> {
    table: &'a ColourTable,
    offset: usize,
    fade: f64,
}

impl<'a> CycledTable<'a> {
    /// `fade` is clamped to `[0, 1]`; NaN is treated as fully faded out.
    #[must_use]
    pub fn new(table: &'a ColourTable, offset: usize, fade: f64) -> Self {
        let fade = if fade.is_nan() { 0.0 } else { fade.clamp(0.0, 1.0) };

        Self {
            table,
            offset,
            fade,
        }
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn fade(&self) -> f64 {
        self.fade
    }

    fn scale(&self, channel: u8) -> u8 {
        (f64::from(channel) * self.fade + 0.5) as u8
    }
}

impl ColourMap for CycledTable<'_> {
    type Failure = Infallible;

    fn map(&self, index: u8) -> Result<Colour, Self::Failure> {
        let colour = self.table.window(self.offset)[usize::from(index)];

        Ok(Colour {
            r: self.scale(colour.r),
            g: self.scale(colour.g),
            b: self.scale(colour.b),
        })
    }
}
