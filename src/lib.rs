pub mod controllers;
pub mod core;

pub use controllers::cli::args::Cli;
pub use controllers::cli::run::{RunSummary, frame_checksum, run};
pub use controllers::errors::SceneError;
pub use controllers::scene::{Frame, Scene, SceneController};
pub use controllers::scene_config::SceneConfig;
pub use crate::core::actions::compose_frame::compose_frame::compose_frame;
pub use crate::core::actions::compose_frame::cycled_table::CycledTable;
pub use crate::core::actions::generate_index_image::generate_index_image::generate_index_image;
pub use crate::core::animation::animator::{Animator, FrameState};
pub use crate::core::animation::view_state::ViewState;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::index_image::IndexImage;
pub use crate::core::knots::knot_field::KnotField;
pub use crate::core::knots::style::FieldStyle;
pub use crate::core::palettes::colour_table::{BandMode, ColourTable};
pub use crate::core::palettes::palette::Palette;
pub use crate::core::palettes::palette_store::PaletteStore;
