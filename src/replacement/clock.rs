// Clock Replacement
//
// Second-chance replacement over a fixed ring of frames. Every slot
// carries a use bit; on a fault the hand sweeps forward, clearing set
// bits, and replaces the first slot it finds with a clear bit.

use log::debug;

use crate::common::types::{FrameIndex, PageId};
use crate::replacement::Policy;
use crate::replacement::result::{FrameSlot, SimResult, SimulationResult, StepRecord};

/// Ring of physical frames with per-slot use bits and a rotating hand.
struct ClockFrames {
    slots: Vec<FrameSlot>,
    used: Vec<bool>,
    hand: FrameIndex,
}

impl ClockFrames {
    fn new(frames: usize) -> Self {
        ClockFrames {
            slots: vec![FrameSlot::Empty; frames],
            used: vec![false; frames],
            hand: 0,
        }
    }

    /// Slot currently holding `page`, if it is resident.
    fn find(&self, page: PageId) -> Option<FrameIndex> {
        self.slots.iter().position(|slot| slot.page() == Some(page))
    }

    /// Grant `slot` a second chance. The hand does not move on hits.
    fn touch(&mut self, slot: FrameIndex) {
        self.used[slot] = true;
    }

    /// Place `page` in the next slot with a clear use bit, set its bit
    /// and advance the hand one past it. The sweep clears set bits as it
    /// goes; when every bit is set it wraps exactly once and stops back
    /// where it started, so it never probes more than `frames + 1` slots.
    fn admit(&mut self, page: PageId) {
        while self.used[self.hand] {
            self.used[self.hand] = false;
            self.hand = (self.hand + 1) % self.slots.len();
        }
        if let FrameSlot::Occupied(victim) = self.slots[self.hand] {
            debug!(
                "clock: evict page {} at slot {} for page {}",
                victim, self.hand, page
            );
        }
        self.slots[self.hand] = FrameSlot::Occupied(page);
        self.used[self.hand] = true;
        debug!("clock: load page {} at slot {}", page, self.hand);
        self.hand = (self.hand + 1) % self.slots.len();
    }

    /// Frame contents in physical slot order. Pages never move between
    /// slots once placed.
    fn snapshot(&self) -> Vec<FrameSlot> {
        self.slots.clone()
    }
}

/// Simulate Clock (second chance) replacement of `refs` over `frames`
/// physical frames.
pub fn simulate_clock(refs: &[PageId], frames: usize) -> SimResult<SimulationResult> {
    let mut steps = Vec::with_capacity(refs.len());

    if frames == 0 {
        // Nothing can ever become resident; every reference faults.
        for &page in refs {
            steps.push(StepRecord::new(page, Vec::new(), true));
        }
        return Ok(SimulationResult::new(Policy::Clock, steps));
    }

    let mut ring = ClockFrames::new(frames);
    for &page in refs {
        match ring.find(page) {
            Some(slot) => {
                ring.touch(slot);
                steps.push(StepRecord::new(page, ring.snapshot(), false));
            }
            None => {
                ring.admit(page);
                steps.push(StepRecord::new(page, ring.snapshot(), true));
            }
        }
    }

    Ok(SimulationResult::new(Policy::Clock, steps))
}
