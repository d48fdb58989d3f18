use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// An inclusive rectangle of pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = (bottom_right.x as i64) - (top_left.x as i64) + 1;
        let height = (bottom_right.y as i64) - (top_left.y as i64) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A rect anchored at the origin covering `width` x `height` pixels.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize {
                width: width as i64,
                height: height as i64,
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x as i64 - self.top_left.x as i64 + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y as i64 - self.top_left.y as i64 + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Row-major offset of `point` relative to the top-left corner.
    #[must_use]
    pub fn offset_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let relative_x = (point.x as i64 - self.top_left.x as i64) as usize;
        let relative_y = (point.y as i64 - self.top_left.y as i64) as usize;

        Some(relative_y * self.width() as usize + relative_x)
    }

    /// Iterates over the y coordinates covered by this rect, top to bottom.
    pub fn rows(&self) -> std::ops::RangeInclusive<i32> {
        self.top_left.y..=self.bottom_right.y
    }

    /// Iterates over the x coordinates covered by this rect, left to right.
    pub fn columns(&self) -> std::ops::RangeInclusive<i32> {
        self.top_left.x..=self.bottom_right.x
    }
}
