use std::error::Error;
use std::fmt;

use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::index_image::IndexImage;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

#[derive(Debug)]
pub enum ComposeFrameError<E> {
    /// The frame was superseded before it was finished.
    Cancelled(Cancelled),
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for ComposeFrameError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for ComposeFrameError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Looks every index of `image` up in `map`, producing an RGB frame.
pub fn compose_frame<M: ColourMap>(
    image: &IndexImage,
    map: &M,
) -> Result<PixelBuffer, ComposeFrameError<M::Failure>> {
    compose_frame_cancelable(image, map, &NeverCancel)
}

/// Like [`compose_frame`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. A cancelled frame yields no buffer.
pub fn compose_frame_cancelable<M, C>(
    image: &IndexImage,
    map: &M,
    cancel: &C,
) -> Result<PixelBuffer, ComposeFrameError<M::Failure>>
where
    M: ColourMap,
    C: CancelToken,
{
    let pixel_rect = image.pixel_rect();
    let mut buffer: PixelBufferData = Vec::with_capacity(pixel_rect.size() * 3);

    for (i, &index) in image.as_bytes().iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(ComposeFrameError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = map.map(index).map_err(ComposeFrameError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(pixel_rect, buffer).map_err(ComposeFrameError::PixelBuffer)
}
