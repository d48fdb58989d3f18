use std::error::Error;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

pub trait FieldAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn pixel_rect(&self) -> PixelRect;
}
