use fluere::core::knots::knot::{Knot, KnotSigns, SpinParams};
use fluere::{
    BandMode, Colour, ColourTable, CycledTable, FieldStyle, KnotField, Palette, PaletteStore,
    compose_frame, generate_index_image,
};

fn single_knot_flow_field() -> KnotField {
    let knot = Knot::new(0.0, 0.0, KnotSigns::POSITIVE, SpinParams::new(3, 3.0, false, 20.0).unwrap());

    KnotField::from_parts(4, 4, vec![knot], FieldStyle::Flow, FieldStyle::Flow, 1, 1).unwrap()
}

#[test]
fn test_single_knot_flow_matches_closed_form() {
    let field = single_knot_flow_field();

    let image = generate_index_image(&field).unwrap();

    for y in 0..4 {
        for x in 0..4 {
            let d2 = f64::from(x * x + y * y);
            let expected = if d2 == 0.0 {
                0
            } else {
                ((d2.ln() * 100.0) as i64).rem_euclid(256) as u8
            };

            assert_eq!(
                image.get(fluere::core::data::point::Point { x, y }),
                Some(expected),
                "pixel ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn test_single_knot_flow_known_pixels() {
    let field = single_knot_flow_field();

    assert_eq!(field.value_at(0, 0), 0);
    assert_eq!(field.value_at(1, 0), 0);
    assert_eq!(field.value_at(1, 1), 69);
    assert_eq!(field.value_at(2, 0), 138);
}

#[test]
fn test_checkerboard_routes_through_both_styles() {
    let knot = Knot::new(1.5, 2.5, KnotSigns::POSITIVE, SpinParams::new(3, 3.0, false, 20.0).unwrap());
    let field =
        KnotField::from_parts(4, 4, vec![knot], FieldStyle::Flow, FieldStyle::Leaf, 1, 1).unwrap();

    assert_eq!(field.value_at(0, 0), field.style_value(FieldStyle::Flow, 0.0, 0.0));
    assert_eq!(field.value_at(1, 0), field.style_value(FieldStyle::Leaf, 1.0, 0.0));
    assert_eq!(field.value_at(2, 1), field.style_value(FieldStyle::Leaf, 2.0, 1.0));
    assert_eq!(field.value_at(3, 3), field.style_value(FieldStyle::Flow, 3.0, 3.0));
}

#[test]
fn test_red_green_palette_table() {
    let store = PaletteStore::parse("Number_of_palettes 1\nTest 2 0xFF0000 0x00FF00\n").unwrap();
    let palette: &Palette = store.find("Test").unwrap();
    let mut rng = rand::rng();

    let table = ColourTable::build(palette, BandMode::IN_ORDER, &mut rng);
    let bytes = table.as_bytes();

    assert_eq!(bytes.len(), 1536);
    assert_eq!(table.get(0), Some(Colour { r: 255, g: 0, b: 0 }));
    let mid = table.get(64).unwrap();
    assert!(mid.g > 100 && mid.r < 160, "{:?}", mid);
    assert_eq!(table.get(128), Some(Colour { r: 0, g: 255, b: 0 }));
    let end = table.get(255).unwrap();
    assert!(end.r > 250 && end.g < 5, "{:?}", end);
}

#[test]
fn test_cycling_rotates_frame_colours() {
    let field = single_knot_flow_field();
    let image = generate_index_image(&field).unwrap();
    let table = ColourTable::from_band_colours(&[
        Colour::from_hex(0xff0000),
        Colour::from_hex(0x0000ff),
    ])
    .unwrap();

    let first = compose_frame(&image, &CycledTable::new(&table, 0, 1.0)).unwrap();
    let rotated = compose_frame(&image, &CycledTable::new(&table, 128, 1.0)).unwrap();
    let wrapped = compose_frame(&image, &CycledTable::new(&table, 256, 1.0)).unwrap();

    assert_ne!(first.buffer(), rotated.buffer());
    assert_eq!(first.buffer(), wrapped.buffer());
}
