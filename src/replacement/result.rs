// Simulation Result Types
//
// This module defines the trace records a policy simulation produces:
// per-frame slot contents, per-reference step records and the aggregate
// result for one policy run.

use std::fmt;

use serde;
use thiserror::Error;

use crate::common::types::PageId;
use crate::replacement::Policy;

/// Content of one physical frame after a reference has been processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FrameSlot {
    /// No page loaded
    Empty,
    /// Frame holds the given page
    Occupied(PageId),
}

impl FrameSlot {
    /// Resident page, if any
    pub fn page(&self) -> Option<PageId> {
        match self {
            FrameSlot::Occupied(page) => Some(*page),
            FrameSlot::Empty => None,
        }
    }
}

impl fmt::Display for FrameSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSlot::Occupied(page) => write!(f, "{}", page),
            FrameSlot::Empty => write!(f, "-"),
        }
    }
}

/// One simulation step: the reference processed, the frame contents
/// after processing it, and whether it faulted
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StepRecord {
    reference: PageId,
    snapshot: Vec<FrameSlot>,
    fault: bool,
}

impl StepRecord {
    pub fn new(reference: PageId, snapshot: Vec<FrameSlot>, fault: bool) -> Self {
        StepRecord {
            reference,
            snapshot,
            fault,
        }
    }

    /// Page referenced at this step
    pub fn reference(&self) -> PageId {
        self.reference
    }

    /// Frame contents after the step, in the policy's slot order
    pub fn snapshot(&self) -> &[FrameSlot] {
        &self.snapshot
    }

    /// Whether this reference missed and had to be loaded
    pub fn fault(&self) -> bool {
        self.fault
    }
}

/// Full trace of one policy over one reference string
#[derive(Debug, Clone, serde::Serialize)]
pub struct SimulationResult {
    policy: Policy,
    total_faults: usize,
    steps: Vec<StepRecord>,
}

impl SimulationResult {
    /// Build a result from recorded steps. The fault total is derived
    /// from the steps themselves, so the two can never disagree.
    pub fn new(policy: Policy, steps: Vec<StepRecord>) -> Self {
        let total_faults = steps.iter().filter(|step| step.fault).count();
        SimulationResult {
            policy,
            total_faults,
            steps,
        }
    }

    /// Policy that produced this trace
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of faulting steps
    pub fn total_faults(&self) -> usize {
        self.total_faults
    }

    /// All steps, one per reference, in reference order
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Number of steps in the trace
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Simulation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Frame count text that is not a non-negative integer
    #[error("invalid frame count '{0}': expected a non-negative integer")]
    InvalidFrameCount(String),
    /// Policy name that matches none of the known policies
    #[error("unknown policy '{0}': expected one of fifo, lru, clock, opt")]
    UnknownPolicy(String),
}

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimulationError>;
