pub mod cli;
pub mod errors;
pub mod scene;
pub mod scene_config;
