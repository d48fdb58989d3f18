use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::{debug, debug_span};

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_index_image::generate_index_values_rayon::{
    GenerateValuesError, generate_index_values_rayon_cancelable,
};
use crate::core::data::index_image::{IndexImage, IndexImageError};
use crate::core::knots::errors::FieldError;
use crate::core::knots::knot_field::KnotField;

#[derive(Debug)]
pub enum GenerateIndexImageError {
    /// A newer request superseded this one.
    Cancelled(Cancelled),
    Field(FieldError),
    Image(IndexImageError),
}

impl fmt::Display for GenerateIndexImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Field(err) => write!(f, "field error: {}", err),
            Self::Image(err) => write!(f, "index image error: {}", err),
        }
    }
}

impl Error for GenerateIndexImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Field(err) => Some(err),
            Self::Image(err) => Some(err),
        }
    }
}

impl From<GenerateValuesError<FieldError>> for GenerateIndexImageError {
    fn from(err: GenerateValuesError<FieldError>) -> Self {
        match err {
            GenerateValuesError::Cancelled(c) => Self::Cancelled(c),
            GenerateValuesError::Algorithm(e) => Self::Field(e),
        }
    }
}

/// Fills the index image for `field`, rows spread across the rayon pool.
pub fn generate_index_image(field: &KnotField) -> Result<IndexImage, GenerateIndexImageError> {
    generate_index_image_cancelable(field, &NeverCancel)
}

/// Like [`generate_index_image`], but gives up between rows once `cancel` fires.
pub fn generate_index_image_cancelable<C: CancelToken>(
    field: &KnotField,
    cancel: &C,
) -> Result<IndexImage, GenerateIndexImageError> {
    let _span = debug_span!(
        "generate_index_image",
        width = field.width(),
        height = field.height(),
        knots = field.knot_count()
    )
    .entered();

    let start = Instant::now();
    let values = generate_index_values_rayon_cancelable(field, cancel)?;
    debug!(elapsed = ?start.elapsed(), "index image filled");

    IndexImage::from_data(field.pixel_rect(), values).map_err(GenerateIndexImageError::Image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::knots::style::FieldStyle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn field() -> KnotField {
        let mut rng = StdRng::seed_from_u64(17);
        KnotField::generate(40, 30, 4, FieldStyle::Spin, FieldStyle::Leaf, &mut rng).unwrap()
    }

    #[test]
    fn test_image_matches_per_pixel_evaluation() {
        let field = field();

        let image = generate_index_image(&field).unwrap();

        assert_eq!(image.as_bytes().len(), 40 * 30);
        for y in 0..30 {
            for x in 0..40 {
                assert_eq!(image.get(Point { x, y }), Some(field.value_at(x, y)));
            }
        }
    }

    #[test]
    fn test_cancelled_fill_yields_no_image() {
        let field = field();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_index_image_cancelable(&field, &cancel_token);

        assert!(matches!(result, Err(GenerateIndexImageError::Cancelled(_))));
    }

    #[test]
    fn test_error_display() {
        let err = GenerateIndexImageError::Cancelled(Cancelled);

        assert_eq!(err.to_string(), "operation cancelled");
    }
}
