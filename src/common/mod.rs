// Common Types Module
//
// Shared type aliases used across the simulator.

pub mod types;
