use std::fmt;
use std::time::{Duration, Instant};

/// Step counter and stopwatch for a single algorithm run.
///
/// Owned by the caller and passed by `&mut` into each algorithm, which
/// calls [`start`](Self::start) on entry and [`stop`](Self::stop) on exit.
/// Give each concurrent run its own counter.
#[derive(Debug, Clone, Default)]
pub struct OperationCounter {
    steps: u64,
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl OperationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the step count and elapsed time.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.elapsed = Duration::ZERO;
    }

    /// Reset, then record the start instant.
    pub fn start(&mut self) {
        self.reset();
        self.started_at = Some(Instant::now());
    }

    /// Count one unit of work. The caller picks the granularity.
    pub fn increment(&mut self) {
        self.steps += 1;
    }

    /// Record elapsed time since [`start`](Self::start). A counter that was
    /// never started reports zero.
    pub fn stop(&mut self) {
        self.elapsed = self
            .started_at
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Snapshot for a run-complete report.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics {
            steps: self.steps,
            elapsed: self.elapsed,
        }
    }
}

/// Final step count and wall time of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunMetrics {
    pub steps: u64,
    pub elapsed: Duration,
}

impl RunMetrics {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// The four instrumented algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
        })
    }
}

/// Human-readable metrics line, e.g. `Dijkstra Steps: 12\nTime: 0.0001s`.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub metrics: RunMetrics,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Steps: {}\nTime: {:.4}s",
            self.algorithm,
            self.metrics.steps,
            self.metrics.elapsed_secs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_counts_steps() {
        let mut c = OperationCounter::new();
        c.start();
        for _ in 0..5 {
            c.increment();
        }
        c.stop();
        assert_eq!(c.steps(), 5);
        assert_eq!(c.metrics().steps, 5);
    }

    #[test]
    fn test_start_resets_previous_run() {
        let mut c = OperationCounter::new();
        c.start();
        c.increment();
        c.increment();
        c.stop();
        c.start();
        assert_eq!(c.steps(), 0);
        assert_eq!(c.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_reset_zeroes() {
        let mut c = OperationCounter::new();
        c.start();
        c.increment();
        std::thread::sleep(Duration::from_millis(2));
        c.stop();
        assert!(c.elapsed() > Duration::ZERO);
        c.reset();
        assert_eq!(c.steps(), 0);
        assert_eq!(c.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stop_without_start() {
        let mut c = OperationCounter::new();
        c.stop();
        assert_eq!(c.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_report_format() {
        let report = RunReport {
            algorithm: Algorithm::BellmanFord,
            metrics: RunMetrics {
                steps: 42,
                elapsed: Duration::from_millis(1500),
            },
        };
        assert_eq!(report.to_string(), "Bellman-Ford Steps: 42\nTime: 1.5000s");
    }
}
