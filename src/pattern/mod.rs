//! Pattern system with compile-time known pattern variants.
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the [`Pattern`] trait and advances as a step
//! generator: one call produces one frame to push plus the pause to hold it,
//! and flags when a full animation cycle has run to completion.

mod droplet;
mod glow;
mod snake;
mod swell;
mod twinkle;

use embassy_time::Duration;
use fastrand::Rng;

pub use droplet::{DROPLET_LEVEL, DropletPattern};
pub use glow::GlowPattern;
pub use snake::SnakePattern;
pub use swell::SwellPattern;
pub use twinkle::TwinklePattern;

use crate::Frame;

/// Hold time between animation steps (10 Hz).
pub(crate) const STEP_PAUSE: Duration = Duration::from_millis(100);

/// Outcome of a single animation step.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// How long the caller should hold the pushed frame.
    pub pause: Duration,
    /// Whether this step finished a full pattern cycle.
    ///
    /// Motion polling, cool-down fallback and shutdown are only evaluated
    /// once a cycle is complete; a running cycle is never preempted.
    pub cycle_complete: bool,
}

pub trait Pattern {
    /// Advance the animation by one step, writing the frame to push.
    fn step(&mut self, rng: &mut Rng, frame: &mut Frame) -> Step;

    /// Runs once the stepped frame has reached the panel.
    ///
    /// Patterns that sweep a moving band clear their own channels here, so
    /// the cleared state never appears on the panel itself.
    fn settle(&mut self, _frame: &mut Frame) {}
}

/// Known pattern ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternId {
    /// Idle pattern: random LEDs igniting and decaying.
    Twinkle,
    /// Every LED held at a steady mid brightness.
    Glow,
    /// Whole-panel breathing ramp.
    Swell,
    /// One colour band sweeping out and back along all three arms.
    Droplet,
    /// Each arm lit in turn, brighter towards the tip.
    Snake,
}

impl PatternId {
    /// The four patterns a motion event can select.
    pub const MOTION_PATTERNS: [Self; 4] = [Self::Glow, Self::Swell, Self::Droplet, Self::Snake];

    /// Draw a motion pattern uniformly at random.
    pub fn random_motion(rng: &mut Rng) -> Self {
        Self::MOTION_PATTERNS[rng.usize(0..Self::MOTION_PATTERNS.len())]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twinkle => "twinkle",
            Self::Glow => "glow",
            Self::Swell => "swell",
            Self::Droplet => "droplet",
            Self::Snake => "snake",
        }
    }

    /// Build a fresh slot for this pattern, phase counters at zero.
    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Twinkle => PatternSlot::Twinkle(TwinklePattern::new()),
            Self::Glow => PatternSlot::Glow(GlowPattern),
            Self::Swell => PatternSlot::Swell(SwellPattern::new()),
            Self::Droplet => PatternSlot::Droplet(DropletPattern::new()),
            Self::Snake => PatternSlot::Snake(SnakePattern::new()),
        }
    }
}

/// Pattern slot - enum containing all possible patterns.
#[derive(Debug, Clone)]
pub enum PatternSlot {
    Twinkle(TwinklePattern),
    Glow(GlowPattern),
    Swell(SwellPattern),
    Droplet(DropletPattern),
    Snake(SnakePattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        PatternId::Twinkle.to_slot()
    }
}

impl PatternSlot {
    /// Advance the active pattern by one step.
    pub fn step(&mut self, rng: &mut Rng, frame: &mut Frame) -> Step {
        match self {
            Self::Twinkle(pattern) => pattern.step(rng, frame),
            Self::Glow(pattern) => pattern.step(rng, frame),
            Self::Swell(pattern) => pattern.step(rng, frame),
            Self::Droplet(pattern) => pattern.step(rng, frame),
            Self::Snake(pattern) => pattern.step(rng, frame),
        }
    }

    /// Run the active pattern's post-push hook.
    pub fn settle(&mut self, frame: &mut Frame) {
        match self {
            Self::Twinkle(pattern) => Pattern::settle(pattern, frame),
            Self::Glow(pattern) => Pattern::settle(pattern, frame),
            Self::Swell(pattern) => Pattern::settle(pattern, frame),
            Self::Droplet(pattern) => Pattern::settle(pattern, frame),
            Self::Snake(pattern) => Pattern::settle(pattern, frame),
        }
    }

    /// Get the pattern ID for external observation.
    pub fn id(&self) -> PatternId {
        match self {
            Self::Twinkle(_) => PatternId::Twinkle,
            Self::Glow(_) => PatternId::Glow,
            Self::Swell(_) => PatternId::Swell,
            Self::Droplet(_) => PatternId::Droplet,
            Self::Snake(_) => PatternId::Snake,
        }
    }
}
