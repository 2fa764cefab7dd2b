pub mod color;
pub mod fields;
pub mod figure;
pub mod formatters;
