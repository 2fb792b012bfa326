// Framesim Page Replacement Simulator

pub mod common;
pub mod replacement;
pub mod report;
pub mod sequence;

// Re-export key items for convenient access
pub use replacement::result::{FrameSlot, SimulationError, SimulationResult, StepRecord};
pub use replacement::{simulate, simulate_all, Policy};
pub use sequence::parser::{parse_sequence, ParseError};
