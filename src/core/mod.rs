pub mod backup;
pub mod grid;
pub mod settings;
pub mod weeks;
