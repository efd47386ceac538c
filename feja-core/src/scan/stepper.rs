use std::time::Duration;

/// Tick interval the stepper advances on
pub const TICK: Duration = Duration::from_millis(40);
/// Pause between two phases
pub const PHASE_SETTLE: Duration = Duration::from_millis(200);
/// Hold at 100% before completion is signalled
pub const COMPLETE_HOLD: Duration = Duration::from_millis(1000);

/// One labeled segment of the simulated scan
#[derive(Debug, Clone, Copy)]
pub struct ScanPhase {
    pub label: &'static str,
    pub duration: Duration,
}

/// The four phases of a quick-clean scan
pub const SCAN_PHASES: [ScanPhase; 4] = [
    ScanPhase {
        label: "Finding junk...",
        duration: Duration::from_millis(2000),
    },
    ScanPhase {
        label: "Analyzing cached data...",
        duration: Duration::from_millis(2000),
    },
    ScanPhase {
        label: "Detecting duplicate media...",
        duration: Duration::from_millis(2000),
    },
    ScanPhase {
        label: "Almost done...",
        duration: Duration::from_millis(2000),
    },
];

/// Phase index whose completion triggers the one-shot media query
pub const MEDIA_QUERY_PHASE: usize = 2;

/// Discrete events emitted while the stepper advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Percentage moved during a phase
    Progress { phase: usize, percent: u8 },
    /// A phase reached its target percentage
    PhaseFinished(usize),
    /// 100% held long enough; the scan is over. Emitted exactly once.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Advancing through phase `i`, one tick at a time
    Running(usize),
    /// Settle delay before phase `next` (or before the final hold)
    Settling { next: usize },
    /// Holding at 100% before signalling completion
    Holding,
    Done,
}

/// Drives a percentage from 0 to 100 across the fixed phases.
///
/// The stepper owns no clock: the caller feeds it elapsed wall time (or a
/// virtual clock in tests) through [`ScanStepper::advance`] and consumes the
/// events it emits. Percent is monotonically non-decreasing for the lifetime
/// of one stepper; a remounted scanning screen constructs a fresh one.
#[derive(Debug)]
pub struct ScanStepper {
    mode: Mode,
    percent: f64,
    /// Elapsed time not yet consumed (running mode only advances in ticks)
    budget: Duration,
    /// Remaining settle/hold time
    wait: Duration,
}

impl ScanStepper {
    pub fn new() -> Self {
        Self {
            mode: Mode::Running(0),
            percent: 0.0,
            budget: Duration::ZERO,
            wait: Duration::ZERO,
        }
    }

    /// Target percentage at the end of phase `i` (zero-based)
    pub fn phase_end_percent(i: usize) -> u8 {
        (((i + 1) as f64 / SCAN_PHASES.len() as f64) * 100.0).round() as u8
    }

    fn phase_start_percent(i: usize) -> u8 {
        if i == 0 { 0 } else { Self::phase_end_percent(i - 1) }
    }

    /// Current percentage, rounded for display
    pub fn percent(&self) -> u8 {
        self.percent.round() as u8
    }

    /// Index of the phase whose label should be shown
    pub fn phase_index(&self) -> usize {
        let idx = match self.mode {
            Mode::Running(i) => i,
            Mode::Settling { next } => next,
            Mode::Holding | Mode::Done => SCAN_PHASES.len(),
        };
        idx.min(SCAN_PHASES.len() - 1)
    }

    pub fn label(&self) -> &'static str {
        SCAN_PHASES[self.phase_index()].label
    }

    pub fn is_done(&self) -> bool {
        self.mode == Mode::Done
    }

    /// Feed elapsed time into the stepper and collect the events it produces.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<StepEvent> {
        let mut events = Vec::new();
        self.budget += elapsed;

        loop {
            match self.mode {
                Mode::Running(i) => {
                    if self.budget < TICK {
                        break;
                    }
                    self.budget -= TICK;
                    self.step_phase(i, &mut events);
                }
                Mode::Settling { next } => {
                    if !self.consume_wait() {
                        break;
                    }
                    if next < SCAN_PHASES.len() {
                        self.mode = Mode::Running(next);
                    } else {
                        self.percent = 100.0;
                        self.mode = Mode::Holding;
                        self.wait = COMPLETE_HOLD;
                    }
                }
                Mode::Holding => {
                    if !self.consume_wait() {
                        break;
                    }
                    events.push(StepEvent::Completed);
                    self.mode = Mode::Done;
                }
                Mode::Done => {
                    self.budget = Duration::ZERO;
                    break;
                }
            }
        }

        events
    }

    /// One 40ms tick inside phase `i`
    fn step_phase(&mut self, i: usize, events: &mut Vec<StepEvent>) {
        let start = Self::phase_start_percent(i) as f64;
        let end = Self::phase_end_percent(i) as f64;
        let ticks = SCAN_PHASES[i].duration.as_millis() as f64 / TICK.as_millis() as f64;
        let incr = (end - start) / ticks;

        self.percent = (self.percent + incr).min(end);
        events.push(StepEvent::Progress {
            phase: i,
            percent: self.percent(),
        });

        if self.percent >= end {
            events.push(StepEvent::PhaseFinished(i));
            self.mode = Mode::Settling { next: i + 1 };
            self.wait = PHASE_SETTLE;
        }
    }

    /// Burn budget against the current wait. Returns true once the wait is over.
    fn consume_wait(&mut self) -> bool {
        let spend = self.budget.min(self.wait);
        self.budget -= spend;
        self.wait -= spend;
        self.wait.is_zero()
    }
}

impl Default for ScanStepper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full run length: four phases, a settle after each, then the hold
    fn total_run() -> Duration {
        let phases: Duration = SCAN_PHASES.iter().map(|p| p.duration).sum();
        phases + PHASE_SETTLE * SCAN_PHASES.len() as u32 + COMPLETE_HOLD
    }

    fn drive(chunk: Duration) -> Vec<StepEvent> {
        let mut stepper = ScanStepper::new();
        let mut events = Vec::new();
        let mut elapsed = Duration::ZERO;
        // Overshoot the run a little to prove completion stays single
        while elapsed < total_run() + Duration::from_secs(1) {
            events.extend(stepper.advance(chunk));
            elapsed += chunk;
        }
        events
    }

    #[test]
    fn test_starts_at_zero() {
        let stepper = ScanStepper::new();
        assert_eq!(stepper.percent(), 0);
        assert_eq!(stepper.phase_index(), 0);
        assert!(!stepper.is_done());
    }

    #[test]
    fn test_phase_end_percentages() {
        assert_eq!(ScanStepper::phase_end_percent(0), 25);
        assert_eq!(ScanStepper::phase_end_percent(1), 50);
        assert_eq!(ScanStepper::phase_end_percent(2), 75);
        assert_eq!(ScanStepper::phase_end_percent(3), 100);
    }

    #[test]
    fn test_percent_monotonic_any_chunking() {
        for chunk_ms in [1u64, 7, 40, 173, 999] {
            let events = drive(Duration::from_millis(chunk_ms));
            let mut last = 0u8;
            for event in &events {
                if let StepEvent::Progress { percent, .. } = event {
                    assert!(
                        *percent >= last,
                        "percent went backwards with {}ms chunks",
                        chunk_ms
                    );
                    last = *percent;
                }
            }
            assert_eq!(last, 100);
        }
    }

    #[test]
    fn test_phase_boundaries_hit_exact_percent() {
        let mut stepper = ScanStepper::new();
        let mut boundaries = Vec::new();
        for _ in 0..1000 {
            for event in stepper.advance(TICK) {
                if let StepEvent::PhaseFinished(i) = event {
                    boundaries.push((i, stepper.percent()));
                }
            }
            if stepper.is_done() {
                break;
            }
        }
        assert_eq!(boundaries, vec![(0, 25), (1, 50), (2, 75), (3, 100)]);
    }

    #[test]
    fn test_exactly_one_completion() {
        for chunk_ms in [40u64, 250, 10_000] {
            let events = drive(Duration::from_millis(chunk_ms));
            let completions = events
                .iter()
                .filter(|e| matches!(e, StepEvent::Completed))
                .count();
            assert_eq!(completions, 1, "chunk {}ms", chunk_ms);
        }
    }

    #[test]
    fn test_completion_timing() {
        let mut stepper = ScanStepper::new();
        let almost = total_run() - Duration::from_millis(1);
        let events = stepper.advance(almost);
        assert!(!events.contains(&StepEvent::Completed));
        assert!(!stepper.is_done());

        let events = stepper.advance(Duration::from_millis(1));
        assert!(events.contains(&StepEvent::Completed));
        assert!(stepper.is_done());
    }

    #[test]
    fn test_media_query_phase_observable() {
        let events = drive(TICK);
        let pos_query = events
            .iter()
            .position(|e| *e == StepEvent::PhaseFinished(MEDIA_QUERY_PHASE))
            .expect("phase 2 must finish");
        let pos_done = events
            .iter()
            .position(|e| *e == StepEvent::Completed)
            .unwrap();
        assert!(pos_query < pos_done);
    }

    #[test]
    fn test_label_follows_phases() {
        let mut stepper = ScanStepper::new();
        assert_eq!(stepper.label(), "Finding junk...");
        stepper.advance(Duration::from_millis(2200));
        assert_eq!(stepper.label(), "Analyzing cached data...");
        stepper.advance(Duration::from_millis(60_000));
        assert_eq!(stepper.label(), "Almost done...");
        assert_eq!(stepper.percent(), 100);
    }

    #[test]
    fn test_fresh_stepper_resets() {
        let mut first = ScanStepper::new();
        first.advance(Duration::from_secs(60));
        assert!(first.is_done());

        // Remounting the scanning screen constructs a new stepper at 0
        let second = ScanStepper::new();
        assert_eq!(second.percent(), 0);
        assert!(!second.is_done());
    }
}
