//! Work/Break focus timer.
//!
//! Pure state machine: the caller drives `tick` once per elapsed second
//! while the timer runs. Reaching zero flips the mode and always stops the
//! timer; the next phase must be started by hand.

use std::fmt;

use thiserror::Error;

/// Canonical focus block: 25 minutes.
pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
/// Canonical break: 5 minutes.
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimerError {
    #[error("timer durations must be > 0 seconds")]
    ZeroDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Work => "Work",
            TimerMode::Break => "Break",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            TimerMode::Work => TimerMode::Break,
            TimerMode::Break => TimerMode::Work,
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDurations {
    work_secs: u32,
    break_secs: u32,
}

impl TimerDurations {
    /// # Errors
    ///
    /// Returns `TimerError::ZeroDuration` if either phase is zero seconds.
    pub fn new(work_secs: u32, break_secs: u32) -> Result<Self, TimerError> {
        if work_secs == 0 || break_secs == 0 {
            return Err(TimerError::ZeroDuration);
        }
        Ok(Self {
            work_secs,
            break_secs,
        })
    }

    #[must_use]
    pub fn for_mode(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}

impl Default for TimerDurations {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

/// What a single `tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed.
    Idle,
    /// One second elapsed, phase continues.
    Counted,
    /// Phase ran out; timer now sits stopped in `next`.
    Expired { next: TimerMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTimer {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
    durations: TimerDurations,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    /// Work phase, full duration, stopped.
    #[must_use]
    pub fn new() -> Self {
        Self::with_durations(TimerDurations::default())
    }

    #[must_use]
    pub fn with_durations(durations: TimerDurations) -> Self {
        Self {
            mode: TimerMode::Work,
            remaining_secs: durations.for_mode(TimerMode::Work),
            running: false,
            durations,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn durations(&self) -> TimerDurations {
        self.durations
    }

    /// No-op when already running or nothing remains.
    pub fn start(&mut self) {
        if self.running || self.remaining_secs == 0 {
            return;
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start when stopped, pause when running (the single Start/Pause button).
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and refill the current phase. The mode is kept.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.durations.for_mode(self.mode);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return TickOutcome::Counted;
        }
        self.expire()
    }

    fn expire(&mut self) -> TickOutcome {
        let next = self.mode.next();
        self.mode = next;
        self.remaining_secs = self.durations.for_mode(next);
        self.running = false;
        TickOutcome::Expired { next }
    }
}

/// `m:ss`, minutes unpadded.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
