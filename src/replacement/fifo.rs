// FIFO Replacement
//
// Evicts the page that has been resident longest, regardless of how
// recently it was used.

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::common::types::PageId;
use crate::replacement::Policy;
use crate::replacement::result::{FrameSlot, SimResult, SimulationResult, StepRecord};

/// Simulate FIFO replacement of `refs` over `frames` physical frames.
pub fn simulate_fifo(refs: &[PageId], frames: usize) -> SimResult<SimulationResult> {
    let mut queue: VecDeque<PageId> = VecDeque::with_capacity(frames);
    let mut resident: HashSet<PageId> = HashSet::with_capacity(frames);
    let mut steps = Vec::with_capacity(refs.len());

    for &page in refs {
        let fault = !resident.contains(&page);
        if fault && frames > 0 {
            if queue.len() == frames {
                if let Some(victim) = queue.pop_front() {
                    resident.remove(&victim);
                    debug!("fifo: evict page {} for page {}", victim, page);
                }
            }
            queue.push_back(page);
            resident.insert(page);
            debug!("fifo: load page {}", page);
        }
        steps.push(StepRecord::new(page, snapshot_of(&queue, frames), fault));
    }

    Ok(SimulationResult::new(Policy::Fifo, steps))
}

// Queue order is load order, oldest resident first.
fn snapshot_of(queue: &VecDeque<PageId>, frames: usize) -> Vec<FrameSlot> {
    let mut snapshot: Vec<FrameSlot> = queue.iter().map(|&p| FrameSlot::Occupied(p)).collect();
    snapshot.resize(frames, FrameSlot::Empty);
    snapshot
}
