#![no_std]

pub mod engine;
pub mod levels;
pub mod motion;
pub mod pattern;
pub mod scheduler;
pub mod sn3218;
pub mod topology;

pub use engine::{COOLDOWN, PatternEngine};
pub use motion::{MotionChannel, MotionReceiver, MotionSender};
pub use pattern::{Pattern, PatternId, PatternSlot, Step};
pub use scheduler::{PanelScheduler, TickResult};
pub use sn3218::Sn3218;
pub use topology::{Arm, Colour, LED_COUNT, channel_for};

pub use embassy_time::{Duration, Instant};

/// One intensity value per physical LED channel.
pub type Frame = [u8; topology::LED_COUNT];

/// Abstract LED panel trait
///
/// Implement this trait to support different panel hardware.
/// The scheduler is generic over this trait; a failed bus write propagates
/// unchanged to the caller.
pub trait PanelDriver {
    type Error;

    /// Write all 18 channel intensities in one batch.
    fn set_all(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
