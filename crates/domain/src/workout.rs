use chrono::{DateTime, Local, NaiveDate};

use crate::{Catalog, CreateError, Name, ReadError, Weight};

#[allow(async_fn_in_trait)]
pub trait WorkoutLogRepository {
    /// Appends to the history. The store keeps the newest entry first.
    async fn append_workout(&self, entry: WorkoutEntry) -> Result<WorkoutEntry, CreateError>;
    async fn read_history(&self) -> Result<Vec<WorkoutEntry>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutLogService {
    async fn log_workout(&self, entry: WorkoutEntry) -> Result<WorkoutEntry, CreateError>;
    async fn get_history(&self) -> Result<Vec<WorkoutEntry>, ReadError>;
    /// Logs the workout and writes weights changed during the workout back
    /// to the exercise store.
    async fn finish_workout(
        &self,
        workout: ActiveWorkout,
        catalog: &mut Catalog,
        now: DateTime<Local>,
        notes: String,
    ) -> Result<WorkoutEntry, WorkoutError>;
}

#[derive(thiserror::Error, Debug)]
pub enum WorkoutError {
    #[error("unknown program: {0}")]
    UnknownProgram(String),
    #[error("no program available")]
    NoProgram,
    #[error(transparent)]
    Create(#[from] CreateError),
}

/// Completion record of a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub date: NaiveDate,
    pub program: String,
    pub duration_seconds: u64,
    pub exercises: Vec<LoggedExercise>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub name: Name,
    pub weight: Weight,
    /// Sets completed, not sets planned.
    pub sets: u32,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWorkout {
    pub program: String,
    pub program_name: String,
    pub exercises: Vec<WorkoutExercise>,
    pub start_time: DateTime<Local>,
    pub current_exercise: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub name: Name,
    pub weight: Weight,
    pub sets: u32,
    pub reps: u32,
    pub completed: Vec<CompletedSet>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.completed.len() >= self.sets as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedSet {
    pub reps: u32,
    pub time: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetToggle {
    /// A set was completed, the rest timer should restart.
    Completed,
    /// The set and all sets after it were marked as not done.
    Uncompleted,
    Ignored,
}

impl ActiveWorkout {
    pub fn start(
        catalog: &Catalog,
        program: &str,
        now: DateTime<Local>,
    ) -> Result<Self, WorkoutError> {
        let Some(p) = catalog.program(program) else {
            return Err(WorkoutError::UnknownProgram(program.to_string()));
        };

        Ok(Self {
            program: program.to_string(),
            program_name: p.name.clone(),
            exercises: p
                .exercises
                .iter()
                .filter_map(|name| catalog.exercises.get(name))
                .map(|e| WorkoutExercise {
                    name: e.name.clone(),
                    weight: e.current_weight,
                    sets: e.default_sets,
                    reps: e.default_reps,
                    completed: vec![],
                })
                .collect(),
            start_time: now,
            current_exercise: 0,
        })
    }

    /// Starts the first program of the catalog.
    pub fn start_default(catalog: &Catalog, now: DateTime<Local>) -> Result<Self, WorkoutError> {
        let (key, _) = catalog.first_program().ok_or(WorkoutError::NoProgram)?;
        Self::start(catalog, key, now)
    }

    #[must_use]
    pub fn elapsed_seconds(&self, now: DateTime<Local>) -> u64 {
        u64::try_from(now.signed_duration_since(self.start_time).num_seconds()).unwrap_or(0)
    }

    /// Changes the weight of this workout only; the store is updated on finish.
    pub fn adjust_weight(&mut self, exercise_idx: usize, delta: f64) -> Option<Weight> {
        let exercise = self.exercises.get_mut(exercise_idx)?;
        exercise.weight = exercise.weight.offset(delta);
        Some(exercise.weight)
    }

    pub fn toggle_set(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
        now: DateTime<Local>,
    ) -> SetToggle {
        let Some(exercise) = self.exercises.get_mut(exercise_idx) else {
            return SetToggle::Ignored;
        };

        if set_idx < exercise.completed.len() {
            exercise.completed.truncate(set_idx);
            return SetToggle::Uncompleted;
        }

        if set_idx != exercise.completed.len() || set_idx >= exercise.sets as usize {
            return SetToggle::Ignored;
        }

        exercise.completed.push(CompletedSet {
            reps: exercise.reps,
            time: now,
        });

        if exercise.is_done() {
            if let Some(next) = self
                .exercises
                .iter()
                .enumerate()
                .skip(exercise_idx + 1)
                .find(|(_, e)| !e.is_done())
                .map(|(i, _)| i)
            {
                self.current_exercise = next;
            }
        }

        SetToggle::Completed
    }

    /// Index of the set that would be completed next for the current exercise.
    #[must_use]
    pub fn next_set(&self) -> Option<(usize, usize)> {
        let exercise = self.exercises.get(self.current_exercise)?;
        if exercise.is_done() {
            return None;
        }
        Some((self.current_exercise, exercise.completed.len()))
    }

    /// Exercises whose weight differs from the catalog.
    #[must_use]
    pub fn weight_changes(&self, catalog: &Catalog) -> Vec<(Name, Weight)> {
        self.exercises
            .iter()
            .filter(|e| {
                catalog
                    .current_weight(&e.name)
                    .is_some_and(|weight| weight != e.weight)
            })
            .map(|e| (e.name.clone(), e.weight))
            .collect()
    }

    #[must_use]
    pub fn finish(&self, now: DateTime<Local>, notes: String) -> WorkoutEntry {
        WorkoutEntry {
            date: now.date_naive(),
            program: self.program_name.clone(),
            duration_seconds: self.elapsed_seconds(now),
            exercises: self
                .exercises
                .iter()
                .map(|e| LoggedExercise {
                    name: e.name.clone(),
                    weight: e.weight,
                    sets: u32::try_from(e.completed.len()).unwrap_or(u32::MAX),
                    reps: e.reps,
                })
                .collect(),
            notes,
        }
    }
}
