//! Droplet sweep pattern.
//!
//! A single colour band runs down the spiral and back, lit on all three
//! arms at once at a fixed brightness. The band's channels are cleared again
//! after each panel write, so every push shows exactly one colour.

use fastrand::Rng;

use super::{Pattern, STEP_PAUSE, Step};
use crate::Frame;
use crate::topology::{Arm, Colour, channel_for};

/// Fixed drive strength of the sweeping band.
pub const DROPLET_LEVEL: u8 = 0x80;

// Colour positions visited over one cycle, outward then back.
const SWEEP: [Colour; 10] = [
    Colour::Red,
    Colour::Orange,
    Colour::Yellow,
    Colour::Green,
    Colour::Blue,
    Colour::White,
    Colour::Blue,
    Colour::Green,
    Colour::Yellow,
    Colour::Orange,
];

#[derive(Debug, Clone, Default)]
pub struct DropletPattern {
    /// Position within `SWEEP`.
    phase: u8,
    /// Colour whose channels are still lit in the frame.
    lit: Option<Colour>,
}

impl DropletPattern {
    pub const fn new() -> Self {
        Self {
            phase: 0,
            lit: None,
        }
    }
}

impl Pattern for DropletPattern {
    fn step(&mut self, _rng: &mut Rng, frame: &mut Frame) -> Step {
        let colour = SWEEP[self.phase as usize];
        for arm in Arm::ALL {
            frame[channel_for(arm, colour)] = DROPLET_LEVEL;
        }
        self.lit = Some(colour);

        let cycle_complete = self.phase as usize == SWEEP.len() - 1;
        self.phase = if cycle_complete { 0 } else { self.phase + 1 };

        Step {
            pause: STEP_PAUSE,
            cycle_complete,
        }
    }

    fn settle(&mut self, frame: &mut Frame) {
        if let Some(colour) = self.lit.take() {
            for arm in Arm::ALL {
                frame[channel_for(arm, colour)] = 0;
            }
        }
    }
}
