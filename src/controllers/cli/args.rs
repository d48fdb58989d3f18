use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::controllers::scene_config::{
    DEFAULT_HEIGHT, DEFAULT_KNOT_COUNT, DEFAULT_WIDTH, SceneConfig,
};
use crate::core::animation::animator::{DEFAULT_FADE_FRAMES, DEFAULT_NORMAL_FRAMES};
use crate::core::knots::style::FieldStyle;
use crate::core::palettes::palette_store::PaletteStore;

pub const DEFAULT_FRAMES: u32 = 600;

#[derive(Debug, Parser)]
#[command(name = "fluere")]
#[command(about = "Knot-field images animated by colour cycling")]
pub struct Cli {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
    /// Knot count; values outside 1..=50 are clamped.
    #[arg(long, default_value_t = DEFAULT_KNOT_COUNT as i64, allow_negative_numbers = true)]
    pub knots: i64,
    /// flow, wave, spin, leaf or rays. Random per scene when omitted.
    #[arg(long)]
    pub style1: Option<FieldStyle>,
    #[arg(long)]
    pub style2: Option<FieldStyle>,
    #[arg(long)]
    pub randomize: Option<bool>,
    #[arg(long)]
    pub stripes: Option<bool>,
    /// Palette file; the built-in Cold, Grayscale and Hot palettes otherwise.
    #[arg(long = "palette-file")]
    pub palette_file: Option<PathBuf>,
    /// Palette name or position in the palette file.
    #[arg(long)]
    pub palette: Option<String>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Frames to compose before exiting.
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u32,
    #[arg(long = "fade-frames", default_value_t = DEFAULT_FADE_FRAMES)]
    pub fade_frames: u32,
    #[arg(long = "normal-frames", default_value_t = DEFAULT_NORMAL_FRAMES)]
    pub normal_frames: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    UnknownPalette(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPalette(name) => write!(f, "no palette named or numbered '{}'", name),
        }
    }
}

impl Error for ArgsError {}

impl Cli {
    /// Resolves the flags against the loaded palettes. A missing seed is
    /// drawn from the thread generator.
    pub fn scene_config(&self, palettes: &PaletteStore) -> Result<SceneConfig, ArgsError> {
        let palette = self
            .palette
            .as_deref()
            .map(|wanted| resolve_palette(palettes, wanted))
            .transpose()?;

        Ok(SceneConfig {
            width: self.width,
            height: self.height,
            style1: self.style1,
            style2: self.style2,
            randomize_palette: self.randomize,
            stripes: self.stripes,
            palette,
            seed: self.seed.unwrap_or_else(rand::random),
            fade_frames: self.fade_frames,
            normal_frames: self.normal_frames,
            ..SceneConfig::default()
        }
        .with_knot_count(self.knots))
    }
}

fn resolve_palette(palettes: &PaletteStore, wanted: &str) -> Result<usize, ArgsError> {
    if let Some(index) = palettes.iter().position(|palette| palette.name() == wanted) {
        return Ok(index);
    }

    wanted
        .parse::<usize>()
        .ok()
        .filter(|&index| index < palettes.len())
        .ok_or_else(|| ArgsError::UnknownPalette(wanted.to_string()))
}
