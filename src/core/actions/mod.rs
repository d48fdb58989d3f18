pub mod cancellation;
pub mod compose_frame;
pub mod generate_index_image;
