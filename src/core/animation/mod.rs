pub mod animator;
pub mod view_state;
