// LRU Replacement
//
// Evicts the least recently used page. Recency is tracked with an
// access-ordered map: every touch moves the page to the back, so the
// front is always the coldest resident page.

use linked_hash_map::LinkedHashMap;
use log::debug;

use crate::common::types::PageId;
use crate::replacement::Policy;
use crate::replacement::result::{FrameSlot, SimResult, SimulationResult, StepRecord};

/// Simulate LRU replacement of `refs` over `frames` physical frames.
pub fn simulate_lru(refs: &[PageId], frames: usize) -> SimResult<SimulationResult> {
    let mut recency: LinkedHashMap<PageId, ()> = LinkedHashMap::with_capacity(frames);
    let mut steps = Vec::with_capacity(refs.len());

    for &page in refs {
        // get_refresh moves a resident page to the back of the map
        let fault = recency.get_refresh(&page).is_none();
        if fault && frames > 0 {
            if recency.len() == frames {
                if let Some((victim, ())) = recency.pop_front() {
                    debug!("lru: evict page {} for page {}", victim, page);
                }
            }
            recency.insert(page, ());
            debug!("lru: load page {}", page);
        }
        steps.push(StepRecord::new(page, snapshot_of(&recency, frames), fault));
    }

    Ok(SimulationResult::new(Policy::Lru, steps))
}

// Map order is oldest access first, so the snapshot reads LRU to MRU.
fn snapshot_of(recency: &LinkedHashMap<PageId, ()>, frames: usize) -> Vec<FrameSlot> {
    let mut snapshot: Vec<FrameSlot> = recency.keys().map(|&p| FrameSlot::Occupied(p)).collect();
    snapshot.resize(frames, FrameSlot::Empty);
    snapshot
}
