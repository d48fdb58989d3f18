use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug_span, info};

use crate::controllers::errors::SceneError;
use crate::controllers::scene_config::SceneConfig;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::compose_frame::compose_frame::compose_frame_cancelable;
use crate::core::actions::compose_frame::cycled_table::CycledTable;
use crate::core::actions::generate_index_image::generate_index_image::generate_index_image_cancelable;
use crate::core::animation::animator::{Animator, FrameState};
use crate::core::data::index_image::IndexImage;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::knots::knot_field::KnotField;
use crate::core::knots::style::FieldStyle;
use crate::core::palettes::colour_table::{BandMode, ColourTable};
use crate::core::palettes::palette_store::PaletteStore;
use crate::core::util::random_source::RandomSource;

/// One computed drawing and the colour table it is cycled through.
#[derive(Debug, Clone)]
pub struct Scene {
    pub field: KnotField,
    pub image: IndexImage,
    pub palette_index: usize,
    pub mode: BandMode,
    pub table: ColourTable,
}

#[derive(Debug)]
pub struct Frame {
    pub state: FrameState,
    pub buffer: PixelBuffer,
}

/// Builds scenes from a [`SceneConfig`] and steps the animation through them.
pub struct SceneController {
    config: SceneConfig,
    palettes: PaletteStore,
    rng: StdRng,
    animator: Animator,
    scene: Option<Scene>,
    scenes_built: u64,
}

impl SceneController {
    pub fn new(config: SceneConfig, palettes: PaletteStore) -> Result<Self, SceneError> {
        if palettes.is_empty() {
            return Err(SceneError::NoPalettes);
        }
        if let Some(index) = config.palette {
            if index >= palettes.len() {
                return Err(SceneError::PaletteOutOfRange {
                    index,
                    count: palettes.len(),
                });
            }
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            animator: Animator::new(config.fade_frames, config.normal_frames),
            config,
            palettes,
            scene: None,
            scenes_built: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn scenes_built(&self) -> u64 {
        self.scenes_built
    }

    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn new_scene(&mut self) -> Result<&Scene, SceneError> {
        self.new_scene_cancelable(&NeverCancel)
    }

    /// Computes a fresh drawing. On cancellation the previous scene is kept.
    pub fn new_scene_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<&Scene, SceneError> {
        let _span = debug_span!("new_scene", seed = self.config.seed, n = self.scenes_built).entered();
        let start = Instant::now();

        // Draws go to a copy so a cancelled attempt leaves the seed stream untouched.
        let mut rng = self.rng.clone();
        let style1 = self.config.style1.unwrap_or_else(|| random_style(&mut rng));
        let style2 = self.config.style2.unwrap_or_else(|| random_style(&mut rng));
        let field = KnotField::generate(
            self.config.width,
            self.config.height,
            self.config.knot_count,
            style1,
            style2,
            &mut rng,
        )?;
        let image = generate_index_image_cancelable(&field, cancel)?;

        let palette_index = match self.config.palette {
            Some(index) => index,
            None => rng.below(self.palettes.len() as u32) as usize,
        };
        let palette = self
            .palettes
            .get(palette_index)
            .ok_or(SceneError::PaletteOutOfRange {
                index: palette_index,
                count: self.palettes.len(),
            })?;
        let mode = BandMode {
            randomize: self
                .config
                .randomize_palette
                .unwrap_or_else(|| rng.coin_flip()),
            stripes: self.config.stripes.unwrap_or_else(|| rng.coin_flip()),
        };
        let table = ColourTable::build(palette, mode, &mut rng);

        info!(
            style1 = %style1,
            style2 = %style2,
            knots = field.knot_count(),
            palette = palette.name(),
            bands = table.band_count(),
            elapsed = ?start.elapsed(),
            "scene ready"
        );

        self.rng = rng;
        self.scenes_built += 1;
        self.animator.scene_ready();

        Ok(self.scene.insert(Scene {
            field,
            image,
            palette_index,
            mode,
            table,
        }))
    }

    pub fn next_frame(&mut self) -> Result<Frame, SceneError> {
        self.next_frame_cancelable(&NeverCancel)
    }

    /// Advances the animation by one tick, computing a new scene first
    /// whenever the previous one has faded out. A cancelled frame does not
    /// consume the tick.
    pub fn next_frame_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<Frame, SceneError> {
        if self.animator.needs_scene() {
            self.new_scene_cancelable(cancel)?;
        }

        let mut animator = self.animator.clone();
        let state = animator.tick();
        let scene = self.scene.as_ref().ok_or(SceneError::NoScene)?;
        let map = CycledTable::new(&scene.table, state.offset, state.fade);
        let buffer = compose_frame_cancelable(&scene.image, &map, cancel)?;
        self.animator = animator;

        Ok(Frame { state, buffer })
    }
}

fn random_style<R: RandomSource>(rng: &mut R) -> FieldStyle {
    FieldStyle::ALL[rng.below(FieldStyle::ALL.len() as u32) as usize]
}
