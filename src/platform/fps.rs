//! Frame rate tracking

/// Frames averaged per measurement
const WINDOW: usize = 60;

/// Rolling FPS over the last 60 frame timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; WINDOW],
    frame_index: usize,
    recorded: u64,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; WINDOW],
            frame_index: 0,
            recorded: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp in milliseconds.
    ///
    /// Returns the refreshed FPS once every full window.
    pub fn record(&mut self, time_ms: f64) -> Option<u32> {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % WINDOW;
        self.recorded += 1;

        if self.recorded < WINDOW as u64 {
            return None;
        }

        // Slot we just advanced to holds the oldest sample
        let oldest = self.frame_times[self.frame_index];
        let newest = time_ms;
        let elapsed = newest - oldest;
        if elapsed > 0.0 {
            self.fps = ((WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
        }

        if self.frame_index == 0 {
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_sixty() {
        let mut fps = FpsCounter::new();
        let mut reported = None;
        for i in 0..WINDOW {
            reported = fps.record(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(reported, Some(60));
        assert_eq!(fps.fps(), 60);
    }

    #[test]
    fn test_no_reading_before_full_window() {
        let mut fps = FpsCounter::new();
        for i in 0..WINDOW - 1 {
            assert_eq!(fps.record(i as f64 * 10.0), None);
        }
        assert_eq!(fps.fps(), 0);
    }
}
