pub mod errors;
pub mod evaluator;
pub mod knot;
pub mod knot_field;
pub mod style;
