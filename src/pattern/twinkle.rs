//! Idle twinkle pattern.
//!
//! Every lit LED decays one ladder step per tick; every tenth tick one
//! random channel re-ignites at a random ladder level, possibly re-igniting
//! an LED that was still decaying.

use fastrand::Rng;

use super::{Pattern, STEP_PAUSE, Step};
use crate::Frame;
use crate::levels::{LEVEL_COUNT, LEVELS, step_down};
use crate::topology::LED_COUNT;

/// Ticks between random re-ignitions.
const IGNITE_INTERVAL: u8 = 10;

#[derive(Debug, Clone, Default)]
pub struct TwinklePattern {
    /// Ticks since pattern entry, wrapping at `IGNITE_INTERVAL`.
    counter: u8,
}

impl TwinklePattern {
    pub const fn new() -> Self {
        Self { counter: 0 }
    }
}

impl Pattern for TwinklePattern {
    fn step(&mut self, rng: &mut Rng, frame: &mut Frame) -> Step {
        for led in frame.iter_mut() {
            *led = step_down(*led);
        }

        if self.counter == 0 {
            frame[rng.usize(0..LED_COUNT)] = LEVELS[rng.usize(0..LEVEL_COUNT)];
        }
        self.counter = (self.counter + 1) % IGNITE_INTERVAL;

        Step {
            pause: STEP_PAUSE,
            cycle_complete: true,
        }
    }
}
