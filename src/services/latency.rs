use std::time::Duration;
use tokio::time::sleep;

/// Which simulated round-trip an operation pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Read,
    Write,
}

/// Artificial network delay applied before every store operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    read: Duration,
    write: Duration,
}

impl Latency {
    pub fn new(read: Duration, write: Duration) -> Self {
        Self { read, write }
    }

    pub fn of(&self, op: Op) -> Duration {
        match op {
            Op::Read => self.read,
            Op::Write => self.write,
        }
    }

    pub async fn wait(&self, op: Op) {
        let delay = self.of(op);
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_for_the_configured_delay() {
        let latency = Latency::new(Duration::from_millis(300), Duration::from_millis(500));
        let start = Instant::now();
        latency.wait(Op::Write).await;
        assert!(start.elapsed() >= Duration::from_millis(500));

        let start = Instant::now();
        latency.wait(Op::Read).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_default_is_zero() {
        let latency = Latency::default();
        assert!(latency.of(Op::Read).is_zero());
        assert!(latency.of(Op::Write).is_zero());
        latency.wait(Op::Write).await;
    }
}
