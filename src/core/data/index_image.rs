use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexImageError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for IndexImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match index buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for IndexImageError {}

/// One byte per pixel, row-major, each byte an index into a colour table window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexImage {
    pixel_rect: PixelRect,
    data: Vec<u8>,
}

impl IndexImage {
    pub fn from_data(pixel_rect: PixelRect, data: Vec<u8>) -> Result<Self, IndexImageError> {
        if pixel_rect.size() != data.len() {
            return Err(IndexImageError::BoundsMismatch {
                pixel_rect_size: pixel_rect.size(),
                buffer_size: data.len(),
            });
        }

        Ok(Self { pixel_rect, data })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<u8> {
        self.pixel_rect
            .offset_of(pixel)
            .map(|offset| self.data[offset])
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
