//! Queue-backed frame source
//!
//! Frames fire only when pumped. Drives the native headless runner and tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::{FrameCallback, FrameSource};

pub struct ManualFrames {
    queue: RefCell<VecDeque<FrameCallback>>,
    /// Timestamp handed to the next frame (ms)
    clock: Cell<f64>,
    /// Simulated time between frames (ms)
    interval: f64,
}

impl ManualFrames {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            clock: Cell::new(0.0),
            interval: interval_ms,
        }
    }

    /// Number of callbacks waiting for a frame
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fire the oldest pending callback. Returns false if none was waiting.
    pub fn pump(&self) -> bool {
        // Release the queue before the callback re-arms itself
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some(callback) => {
                let now = self.clock.get() + self.interval;
                self.clock.set(now);
                callback(now);
                true
            }
            None => false,
        }
    }

    /// Pump up to `n` frames, returning how many actually fired
    pub fn pump_n(&self, n: usize) -> usize {
        (0..n).take_while(|_| self.pump()).count()
    }
}

impl FrameSource for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}
