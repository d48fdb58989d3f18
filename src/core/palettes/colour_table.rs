//! Cyclic colour tables built from a palette.
//!
//! The table holds 256 real entries followed by an exact copy, so any 256-entry
//! window starting at `offset` in `0..256` is a valid rotated table. Animating
//! means sliding the window; the index image never changes.

use tracing::debug;

use crate::core::data::colour::Colour;
use crate::core::palettes::blend::blend;
use crate::core::palettes::errors::ColourTableError;
use crate::core::palettes::palette::Palette;
use crate::core::util::random_source::RandomSource;

pub const TABLE_SIZE: usize = 256;
pub const CYCLE_TABLE_SIZE: usize = TABLE_SIZE * 2;
/// Size of [`ColourTable::as_bytes`]: 256 RGB triplets, twice.
pub const CYCLE_TABLE_BYTES: usize = CYCLE_TABLE_SIZE * 3;

/// How the palette is laid out across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandMode {
    /// Pick a random number of bands and random palette colours for them.
    pub randomize: bool,
    /// Alternate every band with black.
    pub stripes: bool,
}

impl BandMode {
    pub const IN_ORDER: Self = Self {
        randomize: false,
        stripes: false,
    };

    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            randomize: rng.coin_flip(),
            stripes: rng.coin_flip(),
        }
    }

    /// Number of colour bands before striping doubles it.
    fn base_band_count<R: RandomSource>(self, palette: &Palette, rng: &mut R) -> usize {
        match (self.randomize, self.stripes) {
            // 3 to 5 colours, 6 to 10 bands once striped
            (true, true) => 3 + rng.below(3) as usize,
            (true, false) => 5 + rng.below(6) as usize,
            (false, _) => palette.len(),
        }
    }
}

/// 512 RGB entries: the 256-entry table and its duplicate.
#[derive(Clone, PartialEq, Eq)]
pub struct ColourTable {
    entries: Box<[Colour; CYCLE_TABLE_SIZE]>,
    band_count: usize,
}

impl std::fmt::Debug for ColourTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColourTable")
            .field("band_count", &self.band_count)
            .field("first", &self.entries[0])
            .finish_non_exhaustive()
    }
}

impl ColourTable {
    /// Builds a table from `palette`. The random source is only drawn from
    /// when `mode.randomize` is set.
    pub fn build<R: RandomSource>(palette: &Palette, mode: BandMode, rng: &mut R) -> Self {
        let band_colours = select_band_colours(palette, mode, rng);
        // palettes are never empty, so there is always at least one band
        let table = Self::blend_bands(&band_colours);

        debug!(
            palette = palette.name(),
            randomize = mode.randomize,
            stripes = mode.stripes,
            bands = table.band_count,
            "colour table built"
        );

        table
    }

    /// Blends smoothly from each band's colour to the next, wrapping from the
    /// last band back to the first.
    pub fn from_band_colours(band_colours: &[Colour]) -> Result<Self, ColourTableError> {
        if band_colours.is_empty() {
            return Err(ColourTableError::NoBands);
        }

        Ok(Self::blend_bands(band_colours))
    }

    fn blend_bands(band_colours: &[Colour]) -> Self {
        let mut entries = Box::new([Colour::BLACK; CYCLE_TABLE_SIZE]);
        let band_count = band_colours.len();

        for (band, &start_colour) in band_colours.iter().enumerate() {
            let end_colour = band_colours[(band + 1) % band_count];
            let start = band * TABLE_SIZE / band_count;
            let end = (band + 1) * TABLE_SIZE / band_count;

            for idx in start..end {
                let t = band_count as f64 / TABLE_SIZE as f64 * (idx - start) as f64;
                let colour = blend(start_colour, end_colour, t);

                entries[idx] = colour;
                entries[idx + TABLE_SIZE] = colour;
            }
        }

        Self {
            entries,
            band_count,
        }
    }

    #[must_use]
    pub fn band_count(&self) -> usize {
        self.band_count
    }

    /// Entry `index` of the doubled table; `None` past 511.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.entries.get(index).copied()
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries[..]
    }

    /// The 256-entry rotated table starting at `offset mod 256`.
    #[must_use]
    pub fn window(&self, offset: usize) -> &[Colour] {
        let start = offset % TABLE_SIZE;

        &self.entries[start..start + TABLE_SIZE]
    }

    /// The 1536-byte RGB layout consumed by renderers.
    #[must_use]
    pub fn as_bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|colour| [colour.r, colour.g, colour.b])
            .collect()
    }
}

fn select_band_colours<R: RandomSource>(
    palette: &Palette,
    mode: BandMode,
    rng: &mut R,
) -> Vec<Colour> {
    let mut band_count = mode.base_band_count(palette, rng);
    if mode.stripes {
        band_count *= 2;
    }

    let mut in_order = palette.colours().iter().copied().cycle();

    (0..band_count)
        .map(|band| {
            if mode.stripes && band % 2 == 1 {
                Colour::BLACK
            } else if mode.randomize {
                palette.colours()[rng.below(palette.len() as u32) as usize]
            } else {
                in_order.next().unwrap_or(Colour::BLACK)
            }
        })
        .collect()
}
