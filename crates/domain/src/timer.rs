//! Rest timer.
//!
//! The timer is advanced by a host scheduler once per second. Starting a run
//! asks the [`Scheduler`] for a periodic [`Task`] that delivers [`TickToken`]s;
//! stopping cancels that task. Every run gets a fresh token, so ticks that were
//! already queued when the run ended are rejected.

use log::{debug, trace, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TimerMode {
    #[default]
    Countdown,
    Stopwatch,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub mode: TimerMode,
    pub status: TimerStatus,
    pub remaining_seconds: u32,
    pub elapsed_seconds: u32,
    pub overtime_seconds: u32,
    pub configured_countdown_seconds: u32,
    pub overtime: bool,
    pub alert_fired: bool,
}

impl TimerState {
    #[must_use]
    pub fn new(countdown_seconds: u32) -> Self {
        let countdown_seconds = countdown_seconds.max(1);
        Self {
            mode: TimerMode::Countdown,
            status: TimerStatus::Idle,
            remaining_seconds: countdown_seconds,
            elapsed_seconds: 0,
            overtime_seconds: 0,
            configured_countdown_seconds: countdown_seconds,
            overtime: false,
            alert_fired: false,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// `MM:SS` of the active counter, prefixed by `+` in overtime.
    #[must_use]
    pub fn display(&self) -> String {
        if self.overtime {
            format!("+{}", format_time(self.overtime_seconds))
        } else {
            match self.mode {
                TimerMode::Countdown => format_time(self.remaining_seconds),
                TimerMode::Stopwatch => format_time(self.elapsed_seconds),
            }
        }
    }
}

/// Identifies the run a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

/// Host side of the one-second tick.
pub trait Scheduler {
    type Task: Task;

    /// Begin delivering `token` once per second until the task is cancelled.
    fn every_second(&mut self, token: TickToken) -> Self::Task;
}

pub trait Task {
    fn cancel(&mut self);
}

#[derive(thiserror::Error, Debug)]
pub enum AlertError {
    #[error("alert unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Expiry signal, e.g. a tone sequence or a vibration pattern.
pub trait Alert {
    fn alert(&mut self) -> Result<(), AlertError>;
}

/// Tries `primary` and falls back to `fallback` if it could not be delivered.
#[derive(Debug, Clone, Default)]
pub struct Fallback<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> Fallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Alert, F: Alert> Alert for Fallback<P, F> {
    fn alert(&mut self) -> Result<(), AlertError> {
        self.primary.alert().or_else(|err| {
            debug!("failed to deliver alert, using fallback: {err}");
            self.fallback.alert()
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Alert for Silent {
    fn alert(&mut self) -> Result<(), AlertError> {
        Ok(())
    }
}

pub struct IntervalTimer<S: Scheduler, A> {
    state: TimerState,
    run: u64,
    task: Option<S::Task>,
    scheduler: S,
    alert: A,
}

impl<S: Scheduler, A: Alert> IntervalTimer<S, A> {
    pub fn new(countdown_seconds: u32, scheduler: S, alert: A) -> Self {
        Self {
            state: TimerState::new(countdown_seconds),
            run: 0,
            task: None,
            scheduler,
            alert,
        }
    }

    #[must_use]
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }

    pub fn configure(&mut self, mode: TimerMode, countdown_seconds: u32) {
        self.stop();
        self.state.mode = mode;
        if mode == TimerMode::Countdown {
            if countdown_seconds == 0 {
                warn!("countdown of 0 s raised to 1 s");
            }
            self.state.configured_countdown_seconds = countdown_seconds.max(1);
        }
        self.reset();
    }

    /// Starts a new run from scratch. Paused counters are not resumed.
    pub fn start(&mut self) -> Option<TickToken> {
        if self.state.is_running() {
            return None;
        }

        self.state.status = TimerStatus::Running;
        self.state.alert_fired = false;
        self.state.overtime = false;
        self.state.overtime_seconds = 0;
        self.state.elapsed_seconds = 0;
        if self.state.mode == TimerMode::Countdown {
            self.state.remaining_seconds = self.state.configured_countdown_seconds;
        }

        self.run += 1;
        let token = TickToken(self.run);
        self.task = Some(self.scheduler.every_second(token));
        debug!("started {} timer", self.state.mode);

        Some(token)
    }

    pub fn stop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
        if self.state.is_running() {
            self.state.status = TimerStatus::Stopped;
            debug!("stopped {} timer at {}", self.state.mode, self.state.display());
        }
    }

    pub fn reset(&mut self) {
        self.stop();
        match self.state.mode {
            TimerMode::Countdown => {
                self.state.remaining_seconds = self.state.configured_countdown_seconds;
            }
            TimerMode::Stopwatch => self.state.elapsed_seconds = 0,
        }
        self.state.alert_fired = false;
        self.state.overtime = false;
        self.state.overtime_seconds = 0;
        self.state.status = TimerStatus::Idle;
    }

    pub fn toggle(&mut self) -> Option<TickToken> {
        if self.state.is_running() {
            self.stop();
            None
        } else {
            self.start()
        }
    }

    /// Advances the timer by one second. Returns `false` if the tick was
    /// ignored because it does not belong to the current run.
    pub fn tick(&mut self, token: TickToken) -> bool {
        if !self.state.is_running() || token.0 != self.run {
            trace!("ignored stale tick {token:?}");
            return false;
        }

        match self.state.mode {
            TimerMode::Countdown if self.state.overtime => {
                self.state.overtime_seconds = self.state.overtime_seconds.saturating_add(1);
            }
            TimerMode::Countdown => {
                self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
                if self.state.remaining_seconds == 0 {
                    self.state.overtime = true;
                    self.state.overtime_seconds = 0;
                    if !self.state.alert_fired {
                        self.state.alert_fired = true;
                        self.fire_alert();
                    }
                }
            }
            TimerMode::Stopwatch => {
                self.state.elapsed_seconds = self.state.elapsed_seconds.saturating_add(1);
            }
        }

        true
    }

    fn fire_alert(&mut self) {
        if let Err(err) = self.alert.alert() {
            debug!("failed to deliver alert: {err}");
        }
    }
}

impl<S: Scheduler, A> Drop for IntervalTimer<S, A> {
    fn drop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
    }
}

#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
