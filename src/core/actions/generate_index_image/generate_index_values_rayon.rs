use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, CANCEL_CHECK_INTERVAL_PIXELS};
use crate::core::actions::generate_index_image::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::point::Point;

/// Error type for cancelable field evaluation.
///
/// Distinguishes between algorithm failures and cancellation, so callers can
/// treat a superseded scene as ordinary control flow.
#[derive(Debug)]
pub enum GenerateValuesError<E> {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The field algorithm reported a failure.
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateValuesError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateValuesError::Cancelled(c) => write!(f, "{}", c),
            GenerateValuesError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateValuesError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateValuesError::Cancelled(c) => Some(c),
            GenerateValuesError::Algorithm(e) => Some(e),
        }
    }
}

/// Evaluates the field in parallel on rayon's pool, one row per work item.
///
/// Rows are the unit of work. The token is polled at the start of each row
/// and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row; once it
/// fires no partial result is returned.
pub fn generate_index_values_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateValuesError<Alg::Failure>>
where
    Alg: FieldAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    let y_range: Vec<i32> = pixel_rect.rows().collect();
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateValuesError<Alg::Failure>> = y_range
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in pixel_rect.columns().enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateValuesError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateValuesError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
