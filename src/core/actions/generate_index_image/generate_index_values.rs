use crate::core::actions::generate_index_image::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel of the algorithm's rect on the calling thread, row-major.
pub fn generate_index_values_serial<Alg: FieldAlgorithm>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
{
    let pixel_rect = algorithm.pixel_rect();

    pixel_rect
        .rows()
        .flat_map(|y| pixel_rect.columns().map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
