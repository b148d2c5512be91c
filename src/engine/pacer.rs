//=========================================================================
// Frame Pacer
//=========================================================================
//
// Caps the frame loop at a fixed rate by sleeping out the remainder of
// each frame. A slow frame is not made up for: the next frame simply
// starts late.
//
//=========================================================================

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps so consecutive `tick()` calls are at least one frame apart.
#[derive(Debug)]
pub struct FramePacer {
    frame_duration: Duration,
    last_tick: Option<Instant>,
}

impl FramePacer {
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn new(fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / fps),
            last_tick: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left in the current frame after `elapsed` has passed.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_duration.saturating_sub(elapsed)
    }

    /// Ends a frame. Returns the time since the previous tick; the first
    /// tick returns zero and never sleeps.
    pub fn tick(&mut self) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        let remaining = self.remaining(last.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now - last
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_frame_duration() {
        let pacer = FramePacer::new(60.0);
        let expected = Duration::from_secs_f64(1.0 / 60.0);
        assert_eq!(pacer.frame_duration(), expected);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn zero_fps_panics() {
        FramePacer::new(0.0);
    }

    #[test]
    fn remaining_saturates_on_slow_frames() {
        let pacer = FramePacer::new(100.0);
        assert_eq!(pacer.remaining(Duration::from_millis(4)), Duration::from_millis(6));
        assert_eq!(pacer.remaining(Duration::from_millis(25)), Duration::ZERO);
    }

    #[test]
    fn first_tick_does_not_sleep() {
        let mut pacer = FramePacer::new(1.0);
        assert_eq!(pacer.tick(), Duration::ZERO);
    }

    #[test]
    fn ticks_are_at_least_one_frame_apart() {
        let mut pacer = FramePacer::new(200.0);
        pacer.tick();
        let elapsed = pacer.tick();
        assert!(elapsed >= pacer.frame_duration(), "elapsed {:?}", elapsed);
    }
}
