/// StepTimer. Frame clock with variable or fixed timestep.
///
/// The timer measures wall time between ticks and turns it into zero or
/// more simulation updates. In variable mode every tick produces exactly
/// one update of the measured length. In fixed mode the measured time is
/// accumulated and drained in `target_elapsed` sized steps.

use std::time::{Duration, Instant};

/// Read-only timing data consumed by per-frame updates.
pub trait Clock {
    /// Seconds covered by the current update
    fn elapsed_seconds(&self) -> f64;
    /// Seconds covered by all updates so far
    fn total_seconds(&self) -> f64;
    /// Number of updates run so far
    fn frame_count(&self) -> u64;
    /// Ticks that ran at least one update, counted over the last full second
    fn frames_per_second(&self) -> u32;
}

/// Longest delta accepted from a single tick (debugger pauses, stalls)
const MAX_DELTA: Duration = Duration::from_millis(100);

/// Fixed-step deltas this close to the target count as exactly one step
const FIXED_STEP_TOLERANCE: Duration = Duration::from_micros(250);

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct StepTimer {
    last_instant: Option<Instant>,

    elapsed: Duration,
    total: Duration,
    left_over: Duration,

    frame_count: u64,
    frames_per_second: u32,
    frames_this_second: u32,
    second_counter: Duration,

    fixed_time_step: bool,
    target_elapsed: Duration,
}

impl Default for StepTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepTimer {
    /// Create a variable-timestep timer (60 Hz target for fixed mode)
    pub fn new() -> Self {
        Self {
            last_instant: None,
            elapsed: Duration::ZERO,
            total: Duration::ZERO,
            left_over: Duration::ZERO,
            frame_count: 0,
            frames_per_second: 0,
            frames_this_second: 0,
            second_counter: Duration::ZERO,
            fixed_time_step: false,
            target_elapsed: Duration::from_secs_f64(1.0 / 60.0),
        }
    }

    /// Create a timer running fixed steps of `step`
    pub fn fixed(step: Duration) -> Self {
        let mut timer = Self::new();
        timer.set_fixed_time_step(true);
        timer.set_target_elapsed(step);
        timer
    }

    pub fn set_fixed_time_step(&mut self, fixed: bool) {
        self.fixed_time_step = fixed;
    }

    pub fn is_fixed_time_step(&self) -> bool {
        self.fixed_time_step
    }

    /// Step length used in fixed mode (zero is replaced by 1 ms)
    pub fn set_target_elapsed(&mut self, step: Duration) {
        self.target_elapsed = step.max(Duration::from_millis(1));
    }

    pub fn target_elapsed(&self) -> Duration {
        self.target_elapsed
    }

    /// Forget the time elapsed since the last tick.
    ///
    /// Called after a long intentional pause (window restored from
    /// minimize) so the next update does not try to catch up.
    pub fn reset_elapsed_time(&mut self) {
        self.last_instant = None;
        self.left_over = Duration::ZERO;
        self.frames_per_second = 0;
        self.frames_this_second = 0;
        self.second_counter = Duration::ZERO;
    }

    /// Measure the wall time since the previous call and advance.
    ///
    /// Returns the number of updates the caller must run.
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let delta = match self.last_instant {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_instant = Some(now);
        self.advance(delta)
    }

    /// Advance by an explicit delta.
    ///
    /// Returns the number of updates the caller must run; `elapsed_seconds`
    /// describes each of them.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        let delta = delta.min(MAX_DELTA);

        self.second_counter += delta;

        let updates = if self.fixed_time_step {
            let drift = if delta > self.target_elapsed {
                delta - self.target_elapsed
            } else {
                self.target_elapsed - delta
            };
            let delta = if drift < FIXED_STEP_TOLERANCE {
                self.target_elapsed
            } else {
                delta
            };

            self.left_over += delta;

            let mut updates = 0;
            while self.left_over >= self.target_elapsed {
                self.elapsed = self.target_elapsed;
                self.total += self.target_elapsed;
                self.left_over -= self.target_elapsed;
                self.frame_count += 1;
                updates += 1;
            }
            updates
        } else {
            self.elapsed = delta;
            self.total += delta;
            self.left_over = Duration::ZERO;
            self.frame_count += 1;
            1
        };

        // A tick counts as one frame when it ran at least one update
        if updates > 0 {
            self.frames_this_second += 1;
        }
        if self.second_counter >= ONE_SECOND {
            self.frames_per_second = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_counter = Duration::from_nanos(
                (self.second_counter.as_nanos() % ONE_SECOND.as_nanos()) as u64,
            );
        }

        updates
    }
}

impl Clock for StepTimer {
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    fn total_seconds(&self) -> f64 {
        self.total.as_secs_f64()
    }

    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }
}

#[cfg(test)]
#[path = "step_timer_tests.rs"]
mod tests;
