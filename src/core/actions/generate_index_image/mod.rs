pub mod generate_index_image;
pub mod generate_index_values;
pub mod generate_index_values_rayon;
pub mod ports;
