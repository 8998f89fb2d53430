pub mod grid;
pub mod outcome;

pub use grid::ModuleGrid;
pub use outcome::{Position, ScanOutcome};
