//! Steady glow pattern.

use embassy_time::Duration;
use fastrand::Rng;

use super::{Pattern, Step};
use crate::Frame;
use crate::levels::level_at;

/// Ladder index of the glow brightness (value 8).
const GLOW_LEVEL_INDEX: usize = 4;

/// Every LED held at a fixed mid brightness.
///
/// The frame is re-asserted on every step with no pause of its own; pacing
/// is left entirely to the outer loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlowPattern;

impl Pattern for GlowPattern {
    fn step(&mut self, _rng: &mut Rng, frame: &mut Frame) -> Step {
        frame.fill(level_at(GLOW_LEVEL_INDEX));
        Step {
            pause: Duration::from_millis(0),
            cycle_complete: true,
        }
    }
}
