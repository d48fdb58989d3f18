//! Per-pixel evaluation of a [`KnotField`].
//!
//! Every knot contributes to every pixel, so filling an image costs
//! `width * height * knots` evaluations. Each style formula accumulates over
//! the knots and then wraps the total into a byte.

use crate::core::actions::generate_index_image::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::knots::errors::FieldError;
use crate::core::knots::knot::Knot;
use crate::core::knots::knot_field::KnotField;
use crate::core::knots::style::FieldStyle;

const FLOW_SCALE: usize = 100;
const WAVE_LOG_FREQUENCY: f64 = 1.5;
const LEAF_SCALE: f64 = 75.0;

impl KnotField {
    /// Index value of the pixel at `(x, y)`.
    ///
    /// Pure and total: any coordinate gives a value, including ones outside
    /// the image. Even `x + y` selects `style1`, odd selects `style2`.
    #[must_use]
    pub fn value_at(&self, x: i32, y: i32) -> u8 {
        let style = if (x as i64 + y as i64).rem_euclid(2) == 0 {
            self.style1()
        } else {
            self.style2()
        };

        self.style_value(style, x as f64, y as f64)
    }

    /// Index value of `(x, y)` under a specific style, ignoring the checkerboard.
    #[must_use]
    pub fn style_value(&self, style: FieldStyle, x: f64, y: f64) -> u8 {
        match style {
            FieldStyle::Flow => self.flow_value(x, y),
            FieldStyle::Wave => self.wave_value(x, y),
            FieldStyle::Spin => self.spin_value(x, y),
            FieldStyle::Leaf => {
                quantized_ratio_value(self.knots(), x, y, self.leaf_discrete(), |k| {
                    k.signs().leaf.factor()
                })
            }
            FieldStyle::Rays => {
                quantized_ratio_value(self.knots(), x, y, self.rays_discrete(), |k| {
                    k.signs().rays.factor()
                })
            }
        }
    }

    fn flow_value(&self, x: f64, y: f64) -> u8 {
        let sum: f64 = self
            .knots()
            .iter()
            .map(|knot| {
                log_distance_squared(knot, x, y).map_or(0.0, |ln| knot.signs().flow.value() * ln)
            })
            .sum();

        wrap_to_byte(sum * self.log_scale())
    }

    fn wave_value(&self, x: f64, y: f64) -> u8 {
        let sum: f64 = self
            .knots()
            .iter()
            .map(|knot| {
                log_distance_squared(knot, x, y).map_or(0.0, |ln| {
                    knot.signs().wave.value() * (WAVE_LOG_FREQUENCY * ln).sin()
                })
            })
            .sum();

        wrap_to_byte(sum * self.log_scale())
    }

    fn spin_value(&self, x: f64, y: f64) -> u8 {
        let sum: f64 = self
            .knots()
            .iter()
            .map(|knot| {
                let spin = knot.spin();
                let dx = x - knot.x();
                let dy = y - knot.y();
                let r = (dx * dx + dy * dy).sqrt();

                let mut angle = if dx == 0.0 && dy == 0.0 { 0.0 } else { dy.atan2(dx) };

                // twist, fading out with distance
                angle += spin.amplitude()
                    * spin.sectors()
                    * (r / spin.frequency()).sin()
                    * (-r / spin.decay()).exp();

                let folded = spin.sectors() * angle.rem_euclid(1.0 / spin.sectors());
                knot.signs().spin.value() * folded
            })
            .sum();

        wrap_to_byte(256.0 * sum)
    }

    /// Flow and wave divide 100 by the knot count in integer arithmetic.
    fn log_scale(&self) -> f64 {
        (FLOW_SCALE / self.knot_count()) as f64
    }
}

impl FieldAlgorithm for KnotField {
    type Success = u8;
    type Failure = FieldError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.pixel_rect().contains_point(pixel) {
            return Err(FieldError::PointOutsideField {
                x: pixel.x,
                y: pixel.y,
                width: self.width(),
                height: self.height(),
            });
        }

        Ok(self.value_at(pixel.x, pixel.y))
    }

    fn pixel_rect(&self) -> PixelRect {
        KnotField::pixel_rect(self)
    }
}

/// `ln(dx² + dy²)`, or `None` when the pixel sits exactly on the knot.
#[inline]
fn log_distance_squared(knot: &Knot, x: f64, y: f64) -> Option<f64> {
    let dx = x - knot.x();
    let dy = y - knot.y();
    let d2 = dx * dx + dy * dy;

    if d2 == 0.0 { None } else { Some(d2.ln()) }
}

/// Shared by leaf and rays: `75 * (small/big)²` per knot, truncated and then
/// snapped down to a multiple of `step`.
fn quantized_ratio_value(
    knots: &[Knot],
    x: f64,
    y: f64,
    step: u32,
    sign: impl Fn(&Knot) -> i64,
) -> u8 {
    let step = step.max(1) as i64;

    let sum: i64 = knots
        .iter()
        .map(|knot| {
            let dx = (x - knot.x()).abs();
            let dy = (y - knot.y()).abs();
            let big = dx.max(dy);
            let small = dx.min(dy);

            if big == 0.0 {
                return 0;
            }

            let ratio = small / big;
            let contribution = (sign(knot) as f64 * LEAF_SCALE * ratio * ratio) as i64;
            (contribution / step) * step
        })
        .sum();

    sum.rem_euclid(256) as u8
}

/// Truncates toward zero and wraps into `0..=255`. Non-finite input maps to 0.
#[inline]
pub(crate) fn wrap_to_byte(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }

    (value as i64).rem_euclid(256) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knots::knot::{KnotSigns, Sign, SpinParams};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn straight_spin(spokes: u32) -> SpinParams {
        SpinParams::new(spokes, 3.0, false, 20.0).unwrap()
    }

    fn field_with(knots: Vec<Knot>, style1: FieldStyle, style2: FieldStyle) -> KnotField {
        KnotField::from_parts(8, 8, knots, style1, style2, 1, 1).unwrap()
    }

    #[test]
    fn wrap_to_byte_normalises_negative_values() {
        assert_eq!(wrap_to_byte(0.0), 0);
        assert_eq!(wrap_to_byte(255.9), 255);
        assert_eq!(wrap_to_byte(256.0), 0);
        assert_eq!(wrap_to_byte(-1.0), 255);
        assert_eq!(wrap_to_byte(-0.5), 0);
        assert_eq!(wrap_to_byte(-257.0), 255);
    }

    #[test]
    fn wrap_to_byte_maps_non_finite_to_zero() {
        assert_eq!(wrap_to_byte(f64::NAN), 0);
        assert_eq!(wrap_to_byte(f64::INFINITY), 0);
        assert_eq!(wrap_to_byte(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn flow_matches_closed_form_for_one_knot() {
        let knot = Knot::new(1.5, 2.5, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Flow, FieldStyle::Flow);

        for y in 0..8 {
            for x in 0..8 {
                let dx = x as f64 - 1.5;
                let dy = y as f64 - 2.5;
                let expected = ((dx * dx + dy * dy).ln() * 100.0) as i64;

                assert_eq!(field.value_at(x, y), expected.rem_euclid(256) as u8);
            }
        }
    }

    #[test]
    fn flow_scale_uses_integer_division() {
        let signs = KnotSigns::POSITIVE;
        let knots = vec![
            Knot::new(0.5, 0.5, signs, straight_spin(1)),
            Knot::new(3.5, 0.5, signs, straight_spin(1)),
            Knot::new(0.5, 3.5, signs, straight_spin(1)),
        ];
        let field = field_with(knots.clone(), FieldStyle::Flow, FieldStyle::Flow);

        let sum: f64 = knots
            .iter()
            .map(|k| ((2.0 - k.x()).powi(2) + (2.0 - k.y()).powi(2)).ln())
            .sum();

        assert_eq!(field.value_at(2, 2), ((sum * 33.0) as i64).rem_euclid(256) as u8);
    }

    #[test]
    fn flow_on_the_knot_is_zero() {
        let knot = Knot::new(2.0, 2.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Flow, FieldStyle::Wave);

        assert_eq!(field.value_at(2, 2), 0);
    }

    #[test]
    fn wave_on_the_knot_is_zero() {
        let knot = Knot::new(3.0, 2.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Flow, FieldStyle::Wave);

        assert_eq!(field.value_at(3, 2), 0);
    }

    #[test]
    fn wave_matches_closed_form() {
        let signs = KnotSigns {
            wave: Sign::Negative,
            ..KnotSigns::POSITIVE
        };
        let knot = Knot::new(0.25, 0.75, signs, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Wave, FieldStyle::Wave);

        let d2: f64 = (5.0f64 - 0.25).powi(2) + (3.0f64 - 0.75).powi(2);
        let expected = ((-(1.5 * d2.ln()).sin()) * 100.0) as i64;

        assert_eq!(field.value_at(5, 3), expected.rem_euclid(256) as u8);
    }

    #[test]
    fn spin_with_one_spoke_follows_the_angle() {
        let knot = Knot::new(0.0, 0.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Spin, FieldStyle::Spin);

        // angle 0 on the positive x axis
        assert_eq!(field.value_at(4, 0), 0);
        // angle pi/2 is a quarter turn
        assert_eq!(field.value_at(0, 4), 64);
    }

    #[test]
    fn spin_negative_angles_fold_into_a_full_turn() {
        let knot = Knot::new(4.0, 4.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Spin, FieldStyle::Spin);

        // angle -pi/2 folds to 3pi/2, three quarters of a turn
        assert_eq!(field.value_at(4, 0), 192);
    }

    #[test]
    fn spin_on_the_knot_uses_zero_angle() {
        let knot = Knot::new(2.0, 2.0, KnotSigns::POSITIVE, straight_spin(3));
        let field = field_with(vec![knot], FieldStyle::Spin, FieldStyle::Spin);

        assert_eq!(field.value_at(2, 2), 0);
    }

    #[test]
    fn leaf_uses_squared_ratio_of_offsets() {
        let knot = Knot::new(0.0, 0.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Leaf, FieldStyle::Leaf);

        // on the diagonal the ratio is 1
        assert_eq!(field.value_at(3, 3), 75);
        // on an axis the ratio is 0
        assert_eq!(field.value_at(4, 0), 0);
        // ratio 1/2 gives 18.75, truncated
        assert_eq!(field.value_at(4, 2), 18);
        // on the knot itself
        assert_eq!(field.value_at(0, 0), 0);
    }

    #[test]
    fn leaf_negative_sign_wraps() {
        let signs = KnotSigns {
            leaf: Sign::Negative,
            ..KnotSigns::POSITIVE
        };
        let knot = Knot::new(0.0, 0.0, signs, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Leaf, FieldStyle::Leaf);

        assert_eq!(field.value_at(3, 3), (256 - 75) as u8);
    }

    #[test]
    fn leaf_quantises_by_discrete_step() {
        let knot = Knot::new(0.0, 0.0, KnotSigns::POSITIVE, straight_spin(1));
        let field =
            KnotField::from_parts(8, 8, vec![knot], FieldStyle::Leaf, FieldStyle::Rays, 7, 4)
                .unwrap();

        // leaf on even parity: 18 snaps down to 14
        assert_eq!(field.value_at(4, 2), 14);
        // rays on odd parity at (4, 3): 75 * 9/16 = 42.18 -> 42 -> 40
        assert_eq!(field.value_at(4, 3), 40);
    }

    #[test]
    fn checkerboard_alternates_styles() {
        let knot = Knot::new(0.0, 0.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Leaf, FieldStyle::Flow);

        assert_eq!(field.value_at(2, 2), field.style_value(FieldStyle::Leaf, 2.0, 2.0));
        assert_eq!(field.value_at(2, 3), field.style_value(FieldStyle::Flow, 2.0, 3.0));
        assert_eq!(field.value_at(3, 2), field.style_value(FieldStyle::Flow, 3.0, 2.0));
    }

    #[test]
    fn checkerboard_handles_negative_coordinates() {
        let knot = Knot::new(0.0, 0.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Leaf, FieldStyle::Flow);

        assert_eq!(field.value_at(-1, 0), field.style_value(FieldStyle::Flow, -1.0, 0.0));
        assert_eq!(field.value_at(-1, -1), field.style_value(FieldStyle::Leaf, -1.0, -1.0));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(5);
        let field =
            KnotField::generate(16, 16, 6, FieldStyle::Spin, FieldStyle::Wave, &mut rng).unwrap();

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(field.value_at(x, y), field.value_at(x, y));
            }
        }
    }

    #[test]
    fn compute_rejects_points_outside_the_field() {
        let knot = Knot::new(0.0, 0.0, KnotSigns::POSITIVE, straight_spin(1));
        let field = field_with(vec![knot], FieldStyle::Flow, FieldStyle::Flow);

        assert_eq!(
            field.compute(Point { x: 8, y: 0 }),
            Err(FieldError::PointOutsideField { x: 8, y: 0, width: 8, height: 8 })
        );
        assert_eq!(field.compute(Point { x: 7, y: 7 }), Ok(field.value_at(7, 7)));
    }
}
