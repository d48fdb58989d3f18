pub mod colour;
pub mod index_image;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
