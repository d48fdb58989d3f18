pub mod actions;
pub mod animation;
pub mod data;
pub mod knots;
pub mod palettes;
pub mod util;
