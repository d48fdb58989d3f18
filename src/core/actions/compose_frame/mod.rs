pub mod compose_frame;
pub mod cycled_table;
pub mod ports;
