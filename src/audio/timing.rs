use std::time::Instant;

/// Wall-clock stopwatch used to report how long offline renders take
#[derive(Debug)]
pub struct Timer {
    start_time: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Milliseconds since the timer was started.
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Stop the timer, returning the elapsed milliseconds.
    pub fn stop(self) -> u128 {
        self.elapsed_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_immediately_is_near_zero() {
        let timer = Timer::start();
        assert!(timer.stop() < 100);
    }

    #[test]
    fn test_elapsed_grows_with_time() {
        let timer = Timer::start();
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(timer.stop() >= 20);
    }
}
