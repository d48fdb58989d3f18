use crate::core::data::colour::Colour;

/// Linear mix of two colours. `t = 0` gives `start`, `t = 1` gives `end`;
/// values outside `[0, 1]` extrapolate and are clamped per channel.
#[must_use]
pub fn blend(start: Colour, end: Colour, t: f64) -> Colour {
    Colour {
        r: mix_channel(start.r, end.r, t),
        g: mix_channel(start.g, end.g, t),
        b: mix_channel(start.b, end.b, t),
    }
}

#[inline]
fn mix_channel(start: u8, end: u8, t: f64) -> u8 {
    let value = start as f64 * (1.0 - t) + end as f64 * t + 0.5;

    // NaN survives the clamp and casts to 0
    value.clamp(0.0, 255.0) as u8
}
