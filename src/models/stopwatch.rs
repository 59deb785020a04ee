use std::time::{Duration, Instant};

/// A pausable wall-clock timer.
///
/// [`Stopwatch::reset`] discards anything measured so far, so one-time
/// setup done before it is not counted.
#[derive(Debug, Default, Clone)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    /// A stopped stopwatch showing zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes the elapsed time and starts timing from now.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = Some(Instant::now());
    }

    /// Resumes timing. Does nothing if already running.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stops timing, keeping what was measured.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Everything measured so far, including the current
    /// running lap if any.
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.started.map_or(Duration::ZERO, |s| s.elapsed())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_is_zero() {
        let sw = Stopwatch::new();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_reset_discards() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(20));
        sw.stop();
        assert!(sw.elapsed() >= Duration::from_millis(20));

        sw.reset();
        sw.stop();
        assert!(sw.elapsed() < Duration::from_millis(20));
    }

    #[test]
    fn test_stopped_does_not_move() {
        let mut sw = Stopwatch::new();
        sw.reset();
        sw.stop();
        let e = sw.elapsed();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(sw.elapsed(), e);
        // Stopping twice is harmless.
        sw.stop();
        assert_eq!(sw.elapsed(), e);
    }

    #[test]
    fn test_start_accumulates() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(5));
        sw.stop();
        sw.start();
        assert!(sw.is_running());
        thread::sleep(Duration::from_millis(5));
        sw.stop();
        assert!(sw.elapsed() >= Duration::from_millis(10));
    }
}
