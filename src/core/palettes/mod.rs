pub mod blend;
pub mod colour_table;
pub mod errors;
pub mod palette;
pub mod palette_store;
