use tracing::warn;

use crate::core::animation::animator::{DEFAULT_FADE_FRAMES, DEFAULT_NORMAL_FRAMES};
use crate::core::knots::style::FieldStyle;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_KNOT_COUNT: usize = 4;
pub const MIN_KNOT_COUNT: usize = 1;
pub const MAX_KNOT_COUNT: usize = 50;
const DEFAULT_SEED: u64 = 0x00f1_0e4e;

/// Everything needed to build scenes. `None` choices are drawn from the
/// seeded generator for every new scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub knot_count: usize,
    pub style1: Option<FieldStyle>,
    pub style2: Option<FieldStyle>,
    pub randomize_palette: Option<bool>,
    pub stripes: Option<bool>,
    pub palette: Option<usize>,
    pub seed: u64,
    pub fade_frames: u32,
    pub normal_frames: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            knot_count: DEFAULT_KNOT_COUNT,
            style1: None,
            style2: None,
            randomize_palette: None,
            stripes: None,
            palette: None,
            seed: DEFAULT_SEED,
            fade_frames: DEFAULT_FADE_FRAMES,
            normal_frames: DEFAULT_NORMAL_FRAMES,
        }
    }
}

impl SceneConfig {
    /// Sets the knot count, pulling out-of-range requests back into
    /// `MIN_KNOT_COUNT..=MAX_KNOT_COUNT`.
    #[must_use]
    pub fn with_knot_count(mut self, requested: i64) -> Self {
        self.knot_count = clamp_knot_count(requested);
        self
    }
}

pub fn clamp_knot_count(requested: i64) -> usize {
    let clamped = requested.clamp(MIN_KNOT_COUNT as i64, MAX_KNOT_COUNT as i64) as usize;

    if clamped as i64 != requested {
        warn!(requested, used = clamped, "knot count out of range");
    }

    clamped
}
