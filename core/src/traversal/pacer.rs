use std::thread;
use std::time::{Duration, Instant};

/// Keeps a fixed minimum gap between consecutive upstream requests.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Blocks until the next request may go out and returns how long it slept.
    /// The first call never sleeps.
    pub fn wait(&mut self) -> Duration {
        let remaining = match self.last_request {
            Some(last) => self.min_interval.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        };

        if !remaining.is_zero() {
            thread::sleep(remaining);
        }

        self.last_request = Some(Instant::now());
        remaining
    }
}
