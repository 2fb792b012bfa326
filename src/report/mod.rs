// Report Module
//
// Text renderings of simulation results: one-line summaries, per-step
// trace tables and a fault chart. Rendering is pure string building;
// writing the text anywhere is the caller's job.

pub mod chart;
pub mod table;

// Export key functions
pub use chart::fault_chart;
pub use table::step_table;
pub use table::summary;
