pub mod scale;
pub mod style;
