use std::time::{Duration, Instant};

use crate::foundation::error::{SpinError, SpinResult};

/// Source of frame timing for the animation loop.
///
/// `now_ms` reads a monotonic timeline in milliseconds; `wait_for_next_frame` is the loop's
/// only suspension point.
pub trait FrameClock {
    fn now_ms(&mut self) -> f64;
    fn wait_for_next_frame(&mut self);
}

impl<C: FrameClock + ?Sized> FrameClock for &mut C {
    fn now_ms(&mut self) -> f64 {
        (**self).now_ms()
    }

    fn wait_for_next_frame(&mut self) {
        (**self).wait_for_next_frame()
    }
}

impl<C: FrameClock + ?Sized> FrameClock for Box<C> {
    fn now_ms(&mut self) -> f64 {
        (**self).now_ms()
    }

    fn wait_for_next_frame(&mut self) {
        (**self).wait_for_next_frame()
    }
}

/// Deterministic clock: time only moves when a frame is awaited or when told to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
}

impl ManualClock {
    pub fn new(step_ms: f64) -> Self {
        Self::starting_at(0.0, step_ms)
    }

    /// Clock stepping at `fps` frames per second.
    pub fn with_fps(fps: f64) -> SpinResult<Self> {
        Ok(Self::new(frame_interval_ms(fps)?))
    }

    pub fn starting_at(now_ms: f64, step_ms: f64) -> Self {
        Self {
            now_ms,
            step_ms: step_ms.max(0.0),
        }
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms.max(0.0);
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now_ms
    }

    fn wait_for_next_frame(&mut self) {
        self.now_ms += self.step_ms;
    }
}

/// Wall clock pacing frames at a fixed rate by sleeping.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
    interval: Duration,
    last_frame: Instant,
}

impl SystemClock {
    pub fn new(fps: f64) -> SpinResult<Self> {
        let interval = Duration::from_secs_f64(frame_interval_ms(fps)? / 1000.0);
        let now = Instant::now();
        Ok(Self {
            origin: now,
            interval,
            last_frame: now,
        })
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_for_next_frame(&mut self) {
        let next = self.last_frame + self.interval;
        let now = Instant::now();
        if next > now {
            std::thread::sleep(next - now);
            self.last_frame = next;
        } else {
            // Running behind; don't try to catch up with a burst of frames.
            self.last_frame = now;
        }
    }
}

fn frame_interval_ms(fps: f64) -> SpinResult<f64> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(SpinError::invalid_configuration(format!(
            "frame rate must be > 0 (got {fps})"
        )));
    }
    Ok(1000.0 / fps)
}

#[cfg(test)]
#[path = "../../tests/unit/spin/clock.rs"]
mod tests;
