//! Interrupt-safe motion event queue.
//!
//! The PIR edge callback runs outside the render loop and must stay bounded
//! and non-blocking, so it only records a timestamp here. The render loop
//! drains the queue between pattern cycles. Built on `critical-section` and
//! `heapless::Deque`; safe to signal from interrupt or thread context.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;
use heapless::Deque;

/// A bounded queue of motion-event timestamps.
///
/// Backed by a fixed-size `heapless::Deque` behind a critical section.
/// When the queue is full, the oldest entry is discarded: the most recent
/// timestamp is the one the cool-down check needs.
pub struct MotionChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Instant, SIZE>>>,
}

impl<const SIZE: usize> MotionChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the interrupt side.
    pub const fn sender(&self) -> MotionSender<'_, SIZE> {
        MotionSender { channel: self }
    }

    /// Get a receiver handle for the render loop side.
    pub const fn receiver(&self) -> MotionReceiver<'_, SIZE> {
        MotionReceiver { channel: self }
    }

    fn push(&self, at: Instant) {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.is_full() {
                queue.pop_front();
            }
            // Cannot fail: a slot was just freed if the queue was full.
            let _ = queue.push_back(at);
        });
    }

    fn pop(&self) -> Option<Instant> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for MotionChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle used by the motion-edge callback.
///
/// A lightweight reference that can be copied into the interrupt context.
#[derive(Clone, Copy)]
pub struct MotionSender<'a, const SIZE: usize> {
    channel: &'a MotionChannel<SIZE>,
}

impl<const SIZE: usize> MotionSender<'_, SIZE> {
    /// Record a motion event. Bounded and non-blocking.
    pub fn notify(&self, at: Instant) {
        self.channel.push(at);
    }
}

/// Handle used by the render loop to drain pending events.
#[derive(Clone, Copy)]
pub struct MotionReceiver<'a, const SIZE: usize> {
    channel: &'a MotionChannel<SIZE>,
}

impl<const SIZE: usize> MotionReceiver<'_, SIZE> {
    /// Take the oldest pending event, if any.
    pub fn try_receive(&self) -> Option<Instant> {
        self.channel.pop()
    }
}
