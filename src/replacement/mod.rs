// Page Replacement Policies
//
// The four simulators share one contract: a reference string and a frame
// count in, a full per-step trace out. Each keeps its own state shape
// and none of them share anything, which is what lets simulate_all fan
// the runs out across threads.

use std::fmt;
use std::str::FromStr;

use serde;

pub mod result;

mod clock;
mod fifo;
mod lru;
mod optimal;

// Export key types
pub use clock::simulate_clock;
pub use fifo::simulate_fifo;
pub use lru::simulate_lru;
pub use optimal::simulate_optimal;
pub use result::{FrameSlot, SimResult, SimulationError, SimulationResult, StepRecord};

use crate::common::types::PageId;

/// Replacement policies the simulator knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Policy {
    Fifo,
    Lru,
    Clock,
    Optimal,
}

impl Policy {
    /// Every policy, in canonical reporting order
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Lru, Policy::Clock, Policy::Optimal];

    /// Stable display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Clock => "CLOCK",
            Policy::Optimal => "OPT",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "clock" | "second-chance" => Ok(Policy::Clock),
            "opt" | "optimal" => Ok(Policy::Optimal),
            _ => Err(SimulationError::UnknownPolicy(s.trim().to_string())),
        }
    }
}

/// Run one policy over the reference string.
pub fn simulate(policy: Policy, refs: &[PageId], frames: usize) -> SimResult<SimulationResult> {
    match policy {
        Policy::Fifo => simulate_fifo(refs, frames),
        Policy::Lru => simulate_lru(refs, frames),
        Policy::Clock => simulate_clock(refs, frames),
        Policy::Optimal => simulate_optimal(refs, frames),
    }
}

/// Run every policy over the same reference string.
///
/// The simulators are pure and share nothing, so each runs on its own
/// scoped thread. Results come back in `Policy::ALL` order no matter
/// which thread finishes first.
pub fn simulate_all(refs: &[PageId], frames: usize) -> SimResult<Vec<SimulationResult>> {
    crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = Policy::ALL
            .iter()
            .map(|&policy| scope.spawn(move |_| simulate(policy, refs, frames)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    })
    .unwrap()
}

/// Parse a user-supplied frame count.
///
/// Counts arrive as text from the CLI and the shell. Anything that is
/// not a non-negative integer is rejected here by name instead of being
/// clamped somewhere deeper in.
pub fn parse_frame_count(input: &str) -> SimResult<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| SimulationError::InvalidFrameCount(trimmed.to_string()))
}
