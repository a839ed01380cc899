/// Source of frame timestamps in milliseconds. `None` ends the loop.
pub trait FrameClock {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Deterministic clock producing evenly spaced timestamps.
#[derive(Clone, Debug)]
pub struct SteppedClock {
    now: f64,
    step_ms: f64,
    remaining: u64,
}

impl SteppedClock {
    pub fn new(start_ms: f64, step_ms: f64, frames: u64) -> Self {
        Self {
            now: start_ms,
            step_ms,
            remaining: frames,
        }
    }

    pub fn at_hz(hz: f64, frames: u64) -> Self {
        Self::new(0.0, 1_000.0 / hz, frames)
    }
}

impl FrameClock for SteppedClock {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let time = self.now;
        self.now += self.step_ms;
        Some(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_requested_frames_then_stops() {
        let mut clock = SteppedClock::new(100.0, 50.0, 3);
        assert_eq!(clock.next_frame(), Some(100.0));
        assert_eq!(clock.next_frame(), Some(150.0));
        assert_eq!(clock.next_frame(), Some(200.0));
        assert_eq!(clock.next_frame(), None);
        assert_eq!(clock.next_frame(), None);
    }

    #[test]
    fn sixty_hz_step() {
        let mut clock = SteppedClock::at_hz(60.0, 2);
        clock.next_frame();
        let second = clock.next_frame().unwrap();
        assert!((second - 16.666_666).abs() < 1e-3);
    }
}
