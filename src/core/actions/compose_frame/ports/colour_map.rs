use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns an index byte from an [`IndexImage`](crate::core::data::index_image::IndexImage)
/// into the colour shown on screen.
pub trait ColourMap {
    type Failure: Error;

    fn map(&self, index: u8) -> Result<Colour, Self::Failure>;
}
