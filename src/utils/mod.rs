pub mod color;
pub mod date;
pub mod path;
