//! Pattern engine - the state machine at the heart of the daemon.
//!
//! Owns the 18-channel frame, the active pattern slot, the RNG, and the
//! last-motion timestamp. Exactly one pattern is active at any instant.
//! Motion events and the cool-down fallback are only acted on between full
//! pattern cycles; a running cycle is never preempted.

use embassy_time::{Duration, Instant};
use fastrand::Rng;
use log::debug;

use crate::Frame;
use crate::motion::MotionReceiver;
use crate::pattern::{PatternId, PatternSlot, Step};
use crate::topology::LED_COUNT;

/// How long a motion pattern keeps running after the last motion event.
pub const COOLDOWN: Duration = Duration::from_secs(5);

/// Pattern engine - the main orchestrator.
pub struct PatternEngine<'a, const MOTION_QUEUE: usize> {
    // External dependencies
    motion: MotionReceiver<'a, MOTION_QUEUE>,
    rng: Rng,

    // Internal state
    frame: Frame,
    slot: PatternSlot,
    last_motion: Instant,
    mid_cycle: bool,
}

impl<'a, const MOTION_QUEUE: usize> PatternEngine<'a, MOTION_QUEUE> {
    /// Create an engine idling in the twinkle pattern.
    pub fn new(motion: MotionReceiver<'a, MOTION_QUEUE>, rng: Rng, now: Instant) -> Self {
        Self {
            motion,
            rng,
            frame: [0; LED_COUNT],
            slot: PatternId::Twinkle.to_slot(),
            last_motion: now,
            mid_cycle: false,
        }
    }

    /// Advance the animation by one step.
    ///
    /// At a cycle boundary this first drains pending motion events, then
    /// applies the cool-down fallback: a fresh event keeps the running
    /// motion pattern alive, a stale timestamp drops the panel back to a
    /// phase-reset twinkle. Mid-cycle, the active pattern just steps.
    pub fn advance(&mut self, now: Instant) -> Step {
        if !self.mid_cycle {
            self.poll_motion();
            self.check_fallback(now);
        }

        let step = self.slot.step(&mut self.rng, &mut self.frame);
        self.mid_cycle = !step.cycle_complete;
        step
    }

    /// The frame produced by the last [`advance`](Self::advance), ready to
    /// push to the panel.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Hook to run once the frame has been written to the panel.
    pub fn settle(&mut self) {
        self.slot.settle(&mut self.frame);
    }

    /// Identify the active pattern.
    pub fn active_pattern(&self) -> PatternId {
        self.slot.id()
    }

    /// Timestamp of the most recent motion event the engine has seen.
    pub fn last_motion(&self) -> Instant {
        self.last_motion
    }

    /// Force every channel dark. The caller pushes the blanked frame.
    pub fn blank(&mut self) {
        self.frame = [0; LED_COUNT];
    }

    /// Drain pending motion events.
    ///
    /// The first event seen while idling selects a random motion pattern;
    /// events during a motion pattern only refresh the timestamp.
    fn poll_motion(&mut self) {
        while let Some(at) = self.motion.try_receive() {
            if self.slot.id() == PatternId::Twinkle {
                let id = PatternId::random_motion(&mut self.rng);
                debug!("motion detected, switching to {}", id.as_str());
                self.slot = id.to_slot();
            }
            self.last_motion = at;
        }
    }

    /// Drop back to the idle pattern once the cool-down window has lapsed.
    ///
    /// Only a real transition resets the twinkle phase counter; an engine
    /// already idling is left untouched so the re-ignite cadence holds.
    fn check_fallback(&mut self, now: Instant) {
        if self.slot.id() == PatternId::Twinkle {
            return;
        }
        let idle = now
            .checked_duration_since(self.last_motion)
            .unwrap_or(Duration::from_ticks(0));
        if idle >= COOLDOWN {
            debug!("cool-down elapsed, falling back to twinkle");
            self.slot = PatternId::Twinkle.to_slot();
        }
    }
}
