//! Panel scheduling and timing.
//!
//! Portable pacing without async/await or platform-specific timers: each
//! tick renders one step, writes it to the panel, and reports how long the
//! caller should sleep before ticking again. The caller owns the sleep.

use embassy_time::{Duration, Instant};

use crate::PanelDriver;
use crate::engine::PatternEngine;

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// How long to wait before the next tick (may be zero).
    pub pause: Duration,
    /// Whether the tick completed a full pattern cycle.
    ///
    /// Shutdown must only be honoured when this is true; a running cycle
    /// is not preemptible.
    pub cycle_complete: bool,
}

/// Drives one [`PatternEngine`] against one panel driver.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = PanelScheduler::new(engine, panel);
///
/// loop {
///     let tick = scheduler.tick(Instant::now())?;
///     sleep(tick.pause);
///     if tick.cycle_complete && stop_requested() {
///         break;
///     }
/// }
/// scheduler.shutdown()?;
/// ```
pub struct PanelScheduler<'a, D: PanelDriver, const MOTION_QUEUE: usize> {
    driver: D,
    engine: PatternEngine<'a, MOTION_QUEUE>,
}

impl<'a, D: PanelDriver, const MOTION_QUEUE: usize> PanelScheduler<'a, D, MOTION_QUEUE> {
    pub fn new(engine: PatternEngine<'a, MOTION_QUEUE>, driver: D) -> Self {
        Self { driver, engine }
    }

    /// Render one step and push it to the panel.
    ///
    /// Bus errors propagate unchanged; there is no retry.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, D::Error> {
        let step = self.engine.advance(now);
        self.driver.set_all(self.engine.frame())?;
        self.engine.settle();

        Ok(TickResult {
            pause: step.pause,
            cycle_complete: step.cycle_complete,
        })
    }

    /// Blank every channel and push the final dark frame.
    pub fn shutdown(&mut self) -> Result<(), D::Error> {
        self.engine.blank();
        self.driver.set_all(self.engine.frame())
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &PatternEngine<'a, MOTION_QUEUE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut PatternEngine<'a, MOTION_QUEUE> {
        &mut self.engine
    }
}
