pub mod granularity;
pub mod grid_cell;
pub mod milestone;
pub mod settings;

pub use granularity::Granularity;
pub use grid_cell::GridCell;
pub use milestone::{Milestone, MilestoneCategory};
pub use settings::{LifeSettings, Theme};
