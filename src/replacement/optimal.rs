// Optimal Replacement
//
// Belady's offline policy: on a fault, evict the resident page whose
// next use lies farthest in the future. It needs the whole reference
// string up front, which is exactly what makes it the yardstick the
// online policies are measured against.

use log::debug;

use crate::common::types::{FrameIndex, PageId};
use crate::replacement::Policy;
use crate::replacement::result::{FrameSlot, SimResult, SimulationResult, StepRecord};

/// Simulate Optimal (Belady) replacement of `refs` over `frames`
/// physical frames.
pub fn simulate_optimal(refs: &[PageId], frames: usize) -> SimResult<SimulationResult> {
    let mut slots: Vec<FrameSlot> = Vec::with_capacity(frames);
    let mut steps = Vec::with_capacity(refs.len());

    for (position, &page) in refs.iter().enumerate() {
        let fault = !slots.iter().any(|slot| slot.page() == Some(page));
        if fault && frames > 0 {
            if slots.len() < frames {
                slots.push(FrameSlot::Occupied(page));
                debug!("opt: load page {} at slot {}", page, slots.len() - 1);
            } else {
                let victim = victim_slot(&slots, refs, position + 1);
                if let FrameSlot::Occupied(old) = slots[victim] {
                    debug!("opt: evict page {} at slot {} for page {}", old, victim, page);
                }
                // Replace in place so the other slots keep their positions
                slots[victim] = FrameSlot::Occupied(page);
                debug!("opt: load page {} at slot {}", page, victim);
            }
        }
        let mut snapshot = slots.clone();
        snapshot.resize(frames, FrameSlot::Empty);
        steps.push(StepRecord::new(page, snapshot, fault));
    }

    Ok(SimulationResult::new(Policy::Optimal, steps))
}

/// Pick the slot whose page is next used farthest ahead of `from`. A
/// page with no future use at all wins outright, lowest slot first.
/// Distance ties keep the earlier slot (strict greater-than comparison).
fn victim_slot(slots: &[FrameSlot], refs: &[PageId], from: usize) -> FrameIndex {
    let mut victim: FrameIndex = 0;
    let mut farthest: Option<usize> = None;

    for (slot, frame) in slots.iter().enumerate() {
        let Some(page) = frame.page() else {
            continue;
        };
        match refs[from..].iter().position(|&r| r == page) {
            // Never referenced again: no later slot can beat this.
            None => return slot,
            Some(distance) => {
                if farthest.is_none_or(|f| distance > f) {
                    farthest = Some(distance);
                    victim = slot;
                }
            }
        }
    }

    victim
}
