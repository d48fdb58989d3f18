use tracing::debug;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::knots::errors::KnotFieldError;
use crate::core::knots::knot::Knot;
use crate::core::knots::style::FieldStyle;
use crate::core::util::random_source::RandomSource;

/// Allowed angle quantisation steps for the leaf and rays styles. A step of 1
/// leaves the picture smooth.
pub const DISCRETE_STEPS: [u32; 3] = [1, 4, 7];

/// Flow and wave scale by `100 / knot_count` in integer arithmetic, which
/// stays positive up to this many knots.
pub const MAX_KNOTS: usize = 100;

/// Everything needed to evaluate a scene: the knots, the two checkerboarded
/// styles and the quantisation steps. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotField {
    pixel_rect: PixelRect,
    style1: FieldStyle,
    style2: FieldStyle,
    leaf_discrete: u32,
    rays_discrete: u32,
    knots: Vec<Knot>,
}

impl KnotField {
    /// Samples a new field. Parameters are validated before any draw is taken.
    pub fn generate<R: RandomSource>(
        width: u32,
        height: u32,
        knot_count: usize,
        style1: FieldStyle,
        style2: FieldStyle,
        rng: &mut R,
    ) -> Result<Self, KnotFieldError> {
        let pixel_rect = validate_dimensions(width, height)?;
        validate_knot_count(knot_count)?;

        let leaf_discrete = random_discrete_step(rng);
        let rays_discrete = random_discrete_step(rng);

        let knots: Vec<Knot> = (0..knot_count)
            .map(|_| Knot::random(width, height, &mut *rng))
            .collect();

        debug!(
            width,
            height,
            knots = knot_count,
            %style1,
            %style2,
            leaf_discrete,
            rays_discrete,
            "knot field generated"
        );

        Ok(Self {
            pixel_rect,
            style1,
            style2,
            leaf_discrete,
            rays_discrete,
            knots,
        })
    }

    /// Builds a field from knots the caller already has.
    pub fn from_parts(
        width: u32,
        height: u32,
        knots: Vec<Knot>,
        style1: FieldStyle,
        style2: FieldStyle,
        leaf_discrete: u32,
        rays_discrete: u32,
    ) -> Result<Self, KnotFieldError> {
        let pixel_rect = validate_dimensions(width, height)?;
        validate_knot_count(knots.len())?;
        for step in [leaf_discrete, rays_discrete] {
            if !DISCRETE_STEPS.contains(&step) {
                return Err(KnotFieldError::InvalidDiscreteStep(step));
            }
        }

        Ok(Self {
            pixel_rect,
            style1,
            style2,
            leaf_discrete,
            rays_discrete,
            knots,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    /// The full image area this field was built for.
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn style1(&self) -> FieldStyle {
        self.style1
    }

    #[must_use]
    pub fn style2(&self) -> FieldStyle {
        self.style2
    }

    #[must_use]
    pub fn leaf_discrete(&self) -> u32 {
        self.leaf_discrete
    }

    #[must_use]
    pub fn rays_discrete(&self) -> u32 {
        self.rays_discrete
    }

    #[must_use]
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    #[must_use]
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }
}

fn validate_dimensions(width: u32, height: u32) -> Result<PixelRect, KnotFieldError> {
    PixelRect::with_size(width, height)
        .map_err(|_| KnotFieldError::InvalidDimensions { width, height })
}

fn validate_knot_count(count: usize) -> Result<(), KnotFieldError> {
    match count {
        0 => Err(KnotFieldError::NoKnots),
        count if count > MAX_KNOTS => Err(KnotFieldError::TooManyKnots {
            count,
            max: MAX_KNOTS,
        }),
        _ => Ok(()),
    }
}

fn random_discrete_step<R: RandomSource>(rng: &mut R) -> u32 {
    1 + 3 * rng.below(3)
}
