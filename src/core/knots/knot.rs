use std::f64::consts::PI;

use crate::core::knots::errors::KnotFieldError;
use crate::core::util::random_source::RandomSource;

/// Knots are sampled over an area this much larger than the image, so some
/// land just outside the frame and the edges stay soft.
pub const KNOT_ZOOM: f64 = 1.1;

pub const MIN_SPOKES: u32 = 1;
pub const MAX_SPOKES: u32 = 7;

/// Direction a knot drives the colours: outwards/clockwise or the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        if rng.coin_flip() { Self::Positive } else { Self::Negative }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn factor(self) -> i64 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

/// One independent sign per field style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnotSigns {
    pub flow: Sign,
    pub spin: Sign,
    pub leaf: Sign,
    pub rays: Sign,
    pub wave: Sign,
}

impl KnotSigns {
    pub const POSITIVE: Self = Self {
        flow: Sign::Positive,
        spin: Sign::Positive,
        leaf: Sign::Positive,
        rays: Sign::Positive,
        wave: Sign::Positive,
    };

    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            flow: Sign::random(rng),
            spin: Sign::random(rng),
            leaf: Sign::random(rng),
            rays: Sign::random(rng),
            wave: Sign::random(rng),
        }
    }
}

/// Shape of the spokes around a knot in the spin style, plus the optional twist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinParams {
    spokes: u32,
    sectors: f64,
    amplitude: f64,
    frequency: f64,
    decay: f64,
}

impl SpinParams {
    /// `twisted == false` gives straight spokes (zero amplitude).
    ///
    /// `spokes` must lie in `1..=7`; `frequency` and `decay` must be finite
    /// and positive since the twist divides by both.
    pub fn new(
        spokes: u32,
        frequency: f64,
        twisted: bool,
        decay: f64,
    ) -> Result<Self, KnotFieldError> {
        let valid = (MIN_SPOKES..=MAX_SPOKES).contains(&spokes)
            && frequency.is_finite()
            && frequency > 0.0
            && decay.is_finite()
            && decay > 0.0;
        if !valid {
            return Err(KnotFieldError::InvalidSpin {
                spokes,
                frequency,
                decay,
            });
        }

        Ok(Self::from_valid(spokes, frequency, twisted, decay))
    }

    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        let spokes = MIN_SPOKES + rng.below(MAX_SPOKES);
        let frequency = 6.0 * rng.next_unit() + 3.0;
        let twisted = !rng.coin_flip();
        let decay = 20.0 + rng.next_unit() * 30.0;

        Self::from_valid(spokes, frequency, twisted, decay)
    }

    fn from_valid(spokes: u32, frequency: f64, twisted: bool, decay: f64) -> Self {
        let amplitude = if twisted {
            8.0 * frequency / (spokes * spokes) as f64
        } else {
            0.0
        };

        Self {
            spokes,
            sectors: spokes as f64 / (2.0 * PI),
            amplitude,
            frequency,
            decay,
        }
    }

    #[must_use]
    pub fn spokes(&self) -> u32 {
        self.spokes
    }

    #[must_use]
    pub fn sectors(&self) -> f64 {
        self.sectors
    }

    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[must_use]
    pub fn decay(&self) -> f64 {
        self.decay
    }
}

/// A control point. Its distance and angle to a pixel drive that pixel's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    x: f64,
    y: f64,
    signs: KnotSigns,
    spin: SpinParams,
}

impl Knot {
    #[must_use]
    pub fn new(x: f64, y: f64, signs: KnotSigns, spin: SpinParams) -> Self {
        Self { x, y, signs, spin }
    }

    /// Samples a knot for a `width` x `height` image.
    pub fn random<R: RandomSource>(width: u32, height: u32, rng: &mut R) -> Self {
        let (width, height) = (width as f64, height as f64);
        let origin_x = 0.5 * (KNOT_ZOOM - 1.0) * width;
        let origin_y = 0.5 * (KNOT_ZOOM - 1.0) * height;

        let x = KNOT_ZOOM * width * rng.next_unit() - origin_x;
        let y = KNOT_ZOOM * height * rng.next_unit() - origin_y;
        let signs = KnotSigns::random(rng);
        let spin = SpinParams::random(rng);

        Self { x, y, signs, spin }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn signs(&self) -> KnotSigns {
        self.signs
    }

    #[must_use]
    pub fn spin(&self) -> &SpinParams {
        &self.spin
    }
}
