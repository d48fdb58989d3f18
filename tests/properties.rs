use fluere::core::data::point::Point;
use fluere::core::knots::knot::{Knot, KnotSigns, Sign, SpinParams};
use fluere::core::palettes::blend::blend;
use fluere::core::palettes::colour_table::TABLE_SIZE;
use fluere::{BandMode, Colour, ColourTable, FieldStyle, KnotField, Palette, generate_index_image};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn colour() -> impl Strategy<Value = Colour> {
    any::<u32>().prop_map(|hex| Colour::from_hex(hex & 0x00ff_ffff))
}

fn style() -> impl Strategy<Value = FieldStyle> {
    prop::sample::select(FieldStyle::ALL.to_vec())
}

fn sign() -> impl Strategy<Value = Sign> {
    any::<bool>().prop_map(|positive| if positive { Sign::Positive } else { Sign::Negative })
}

fn knot() -> impl Strategy<Value = Knot> {
    (
        -20.0..60.0f64,
        -20.0..60.0f64,
        (sign(), sign(), sign(), sign(), sign()),
        1u32..=7,
        3.0..9.0f64,
        any::<bool>(),
        20.0..50.0f64,
    )
        .prop_map(|(x, y, (flow, spin, leaf, rays, wave), spokes, frequency, twisted, decay)| {
            Knot::new(
                x,
                y,
                KnotSigns {
                    flow,
                    spin,
                    leaf,
                    rays,
                    wave,
                },
                SpinParams::new(spokes, frequency, twisted, decay).unwrap(),
            )
        })
}

proptest! {
    #[test]
    fn blend_hits_endpoints(c1 in colour(), c2 in colour()) {
        prop_assert_eq!(blend(c1, c2, 0.0), c1);
        prop_assert_eq!(blend(c1, c2, 1.0), c2);
    }

    #[test]
    fn blend_clamps_extrapolation_before_start(c1 in colour(), c2 in colour(), t in -10.0..0.0f64) {
        let mixed = blend(c1, c2, t);

        for (m, a, b) in [(mixed.r, c1.r, c2.r), (mixed.g, c1.g, c2.g), (mixed.b, c1.b, c2.b)] {
            // moving away from c2 past c1 saturates instead of wrapping
            if b <= a {
                prop_assert!(m >= a);
            } else {
                prop_assert!(m <= a);
            }
        }
    }

    #[test]
    fn blend_clamps_extrapolation_past_end(c1 in colour(), c2 in colour(), t in 1.0..10.0f64) {
        let mixed = blend(c1, c2, t);

        for (m, a, b) in [(mixed.r, c1.r, c2.r), (mixed.g, c1.g, c2.g), (mixed.b, c1.b, c2.b)] {
            // moving away from c1 past c2 saturates instead of wrapping
            if a <= b {
                prop_assert!(m >= b);
            } else {
                prop_assert!(m <= b);
            }
        }
    }

    #[test]
    fn deterministic_tables_have_one_band_per_colour(
        colours in prop::collection::vec(colour(), 1..40),
        stripes in any::<bool>(),
    ) {
        let palette = Palette::new("Prop", colours.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mode = BandMode { randomize: false, stripes };

        let table = ColourTable::build(&palette, mode, &mut rng);

        let expected = if stripes { colours.len() * 2 } else { colours.len() };
        prop_assert_eq!(table.band_count(), expected);
        prop_assert_eq!(table.get(0), Some(colours[0]));
        for i in 0..TABLE_SIZE {
            prop_assert_eq!(table.get(i), table.get(i + TABLE_SIZE));
        }
    }

    #[test]
    fn random_tables_keep_doubling(seed in any::<u64>(), colours in prop::collection::vec(colour(), 1..8)) {
        let palette = Palette::new("Prop", colours).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mode = BandMode::random(&mut rng);

        let table = ColourTable::build(&palette, mode, &mut rng);

        prop_assert_eq!(table.entries().len(), 2 * TABLE_SIZE);
        prop_assert_eq!(table.window(0), &table.entries()[TABLE_SIZE..]);
    }

    #[test]
    fn evaluation_is_deterministic(
        knots in prop::collection::vec(knot(), 1..6),
        style1 in style(),
        style2 in style(),
        x in 0i32..40,
        y in 0i32..40,
    ) {
        let field = KnotField::from_parts(40, 40, knots, style1, style2, 4, 7).unwrap();

        prop_assert_eq!(field.value_at(x, y), field.clone().value_at(x, y));
    }

    #[test]
    fn generated_fields_render_pixel_for_pixel(
        seed in any::<u64>(),
        count in 1usize..=8,
        style1 in style(),
        style2 in style(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = KnotField::generate(12, 9, count, style1, style2, &mut rng).unwrap();

        let image = generate_index_image(&field).unwrap();

        prop_assert_eq!(field.knot_count(), count);
        prop_assert_eq!(image.as_bytes().len(), 12 * 9);
        for y in 0..9 {
            for x in 0..12 {
                prop_assert_eq!(image.get(Point { x, y }), Some(field.value_at(x, y)));
            }
        }
    }
}
