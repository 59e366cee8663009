//! Snake sweep pattern.
//!
//! Arms light in turn, each colour one ladder step brighter towards the
//! tip. Two pushes per arm: first the five inner colours, then the run back
//! from the white tip over the same channels. The whole arm goes dark once
//! its second frame has reached the panel.

use fastrand::Rng;

use super::{Pattern, STEP_PAUSE, Step};
use crate::Frame;
use crate::levels::level_at;
use crate::topology::{Arm, Colour, channel_for};

#[derive(Debug, Clone, Default)]
pub struct SnakePattern {
    /// Two phases per arm: outward half, then the return half.
    phase: u8,
    /// Arm to black out after the next panel write.
    finished_arm: Option<Arm>,
}

impl SnakePattern {
    pub const fn new() -> Self {
        Self {
            phase: 0,
            finished_arm: None,
        }
    }
}

impl Pattern for SnakePattern {
    fn step(&mut self, _rng: &mut Rng, frame: &mut Frame) -> Step {
        let arm = Arm::ALL[(self.phase / 2) as usize];
        if self.phase % 2 == 0 {
            // Outward: colours 0..=4 at ladder indices 1..=5.
            for index in 0..5 {
                frame[channel_for(arm, Colour::ALL[index])] = level_at(index + 1);
            }
        } else {
            // Back from the tip: colours 5..=1, same indexing scheme.
            for index in (1..6).rev() {
                frame[channel_for(arm, Colour::ALL[index])] = level_at(index + 1);
            }
            self.finished_arm = Some(arm);
        }

        let cycle_complete = self.phase == 5;
        self.phase = if cycle_complete { 0 } else { self.phase + 1 };

        Step {
            pause: STEP_PAUSE,
            cycle_complete,
        }
    }

    fn settle(&mut self, frame: &mut Frame) {
        if let Some(arm) = self.finished_arm.take() {
            for colour in Colour::ALL {
                frame[channel_for(arm, colour)] = 0;
            }
        }
    }
}
