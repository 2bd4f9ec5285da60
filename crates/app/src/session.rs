use chrono::{DateTime, Local};
use liftlog_domain::{
    ActiveWorkout, Alert, Catalog, IntervalTimer, Scheduler, SetToggle, TickToken, TimerMode,
    Weight, WorkoutEntry, WorkoutError, WorkoutLogService,
};
use log::{debug, info};

/// Owns the active workout and the rest timer.
pub struct WorkoutSession<S: Scheduler, A> {
    workout: Option<ActiveWorkout>,
    timer: IntervalTimer<S, A>,
}

impl<S: Scheduler, A: Alert> WorkoutSession<S, A> {
    pub fn new(timer: IntervalTimer<S, A>) -> Self {
        Self {
            workout: None,
            timer,
        }
    }

    #[must_use]
    pub fn workout(&self) -> Option<&ActiveWorkout> {
        self.workout.as_ref()
    }

    #[must_use]
    pub fn timer(&self) -> &IntervalTimer<S, A> {
        &self.timer
    }

    /// Starts `program`, or the first program of the catalog. A workout that
    /// is already running is replaced.
    pub fn start_workout(
        &mut self,
        catalog: &Catalog,
        program: Option<&str>,
        now: DateTime<Local>,
    ) -> Result<&ActiveWorkout, WorkoutError> {
        let workout = match program {
            Some(program) => ActiveWorkout::start(catalog, program, now)?,
            None => ActiveWorkout::start_default(catalog, now)?,
        };
        info!("started {}", workout.program_name);
        Ok(self.workout.insert(workout))
    }

    /// Completing a set restarts the rest timer.
    pub fn toggle_set(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
        now: DateTime<Local>,
    ) -> SetToggle {
        let Some(workout) = self.workout.as_mut() else {
            return SetToggle::Ignored;
        };
        let toggle = workout.toggle_set(exercise_idx, set_idx, now);
        if toggle == SetToggle::Completed {
            self.timer.reset();
            self.timer.start();
        }
        toggle
    }

    pub fn adjust_weight(&mut self, exercise_idx: usize, delta: f64) -> Option<Weight> {
        self.workout.as_mut()?.adjust_weight(exercise_idx, delta)
    }

    pub fn cancel(&mut self) {
        if let Some(workout) = self.workout.take() {
            debug!("cancelled {}", workout.program_name);
        }
        self.timer.stop();
    }

    /// Logs the workout and syncs changed weights. Returns `None` if no
    /// workout is active. On failure the workout stays active and the timer
    /// keeps running, so finishing can be retried.
    pub async fn finish(
        &mut self,
        service: &impl WorkoutLogService,
        catalog: &mut Catalog,
        now: DateTime<Local>,
        notes: String,
    ) -> Result<Option<WorkoutEntry>, WorkoutError> {
        let Some(workout) = self.workout.as_ref() else {
            return Ok(None);
        };
        let entry = service
            .finish_workout(workout.clone(), catalog, now, notes)
            .await?;
        self.workout = None;
        self.timer.stop();
        Ok(Some(entry))
    }

    pub fn toggle_timer(&mut self) -> Option<TickToken> {
        self.timer.toggle()
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn configure_timer(&mut self, mode: TimerMode, countdown_seconds: u32) {
        self.timer.configure(mode, countdown_seconds);
    }

    pub fn tick(&mut self, token: TickToken) -> bool {
        self.timer.tick(token)
    }
}
