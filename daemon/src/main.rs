//! nitelited - motion-reactive PiGlow daemon
//!
//! Runs the nitelite pattern engine against the real panel: the SN3218 on
//! I2C bus 1 and a PIR sensor on GPIO 24 (physical pin 18). Started at boot,
//! stopped with SIGINT/SIGTERM; the panel is blanked on the way out.
//!
//! The render loop is single-threaded and owns all pattern state. The PIR
//! edge callback runs on rppal's interrupt thread and only records a
//! timestamp; the loop picks it up at the next cycle boundary.

use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration as StdDuration;

use embassy_time::Instant;
use log::{debug, info};
use nitelite::{MotionChannel, PanelScheduler, PatternEngine, Sn3218};
use rppal::gpio::{Gpio, Trigger};
use rppal::i2c::I2c;

/// BCM number of the PIR input (physical pin 18).
const MOTION_PIN: u8 = 24;

/// I2C bus carrying the SN3218.
const I2C_BUS: u8 = 1;

/// Motion events buffered between cycle boundaries.
const MOTION_QUEUE: usize = 8;

static MOTION: MotionChannel<MOTION_QUEUE> = MotionChannel::new();

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let i2c = I2c::with_bus(I2C_BUS)?;
    let mut panel = Sn3218::new(i2c);
    panel.enable()?;

    let gpio = Gpio::new()?;
    let mut pir = gpio.get(MOTION_PIN)?.into_input_pulldown();
    let sender = MOTION.sender();
    pir.set_async_interrupt(Trigger::RisingEdge, None, move |_| {
        sender.notify(Instant::now());
    })?;

    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))?;

    let rng = fastrand::Rng::with_seed(Instant::now().as_ticks());
    let engine = PatternEngine::new(MOTION.receiver(), rng, Instant::now());
    let mut scheduler = PanelScheduler::new(engine, panel);

    info!("panel enabled, watching GPIO {MOTION_PIN} for motion");

    loop {
        let tick = scheduler.tick(Instant::now())?;
        let pause_ms = tick.pause.as_millis();
        if pause_ms > 0 {
            thread::sleep(StdDuration::from_millis(pause_ms));
        }
        // Shutdown is only honoured between full pattern cycles.
        if tick.cycle_complete && stop.load(Ordering::Relaxed) {
            break;
        }
    }

    debug!("stop requested, blanking panel");
    scheduler.shutdown()?;
    info!("panel blanked, exiting");
    Ok(())
}
