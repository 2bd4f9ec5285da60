use chrono::{DateTime, Local};
use log::{debug, error, info, warn};

use crate::{
    ActiveWorkout, Catalog, CreateError, DeleteError, Direction, Exercise, ExerciseRepository,
    ExerciseService, Name, ReadError, UpdateError, Weight, WorkoutEntry, WorkoutError,
    WorkoutLogRepository, WorkoutLogService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_catalog(&self) -> Result<Catalog, ReadError> {
        log_on_error!(self.repository.read_catalog(), ReadError, "get", "catalog")
    }

    async fn adjust_weight(
        &self,
        catalog: &mut Catalog,
        name: &Name,
        direction: Direction,
    ) -> Result<Weight, UpdateError> {
        let weight = match direction {
            Direction::Increment => {
                log_on_error!(
                    self.repository.increment_weight(name),
                    UpdateError,
                    "increment",
                    "weight"
                )
            }
            Direction::Decrement => {
                log_on_error!(
                    self.repository.decrement_weight(name),
                    UpdateError,
                    "decrement",
                    "weight"
                )
            }
        }?;
        reconcile(catalog, name, weight);
        Ok(weight)
    }

    async fn set_weight(
        &self,
        catalog: &mut Catalog,
        name: &Name,
        weight: Weight,
    ) -> Result<Weight, UpdateError> {
        let weight = log_on_error!(
            self.repository.set_weight(name, weight),
            UpdateError,
            "set",
            "weight"
        )?;
        reconcile(catalog, name, weight);
        Ok(weight)
    }

    async fn create_exercise(
        &self,
        exercise: Exercise,
        program: Option<&str>,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository.create_exercise(exercise, program),
            CreateError,
            "create",
            "exercise"
        )
    }

    async fn delete_exercise(&self, name: &Name) -> Result<Name, DeleteError> {
        log_on_error!(
            self.repository.delete_exercise(name),
            DeleteError,
            "delete",
            "exercise"
        )
    }
}

impl<R: ExerciseRepository + WorkoutLogRepository> WorkoutLogService for Service<R> {
    async fn log_workout(&self, entry: WorkoutEntry) -> Result<WorkoutEntry, CreateError> {
        log_on_error!(
            self.repository.append_workout(entry),
            CreateError,
            "log",
            "workout"
        )
    }

    async fn get_history(&self) -> Result<Vec<WorkoutEntry>, ReadError> {
        log_on_error!(self.repository.read_history(), ReadError, "get", "history")
    }

    async fn finish_workout(
        &self,
        workout: ActiveWorkout,
        catalog: &mut Catalog,
        now: DateTime<Local>,
        notes: String,
    ) -> Result<WorkoutEntry, WorkoutError> {
        let entry = self.log_workout(workout.finish(now, notes)).await?;

        // The entry is stored at this point, a failed write-back only keeps
        // the old weight in the catalog.
        for (name, weight) in workout.weight_changes(catalog) {
            if ExerciseService::set_weight(self, catalog, &name, weight)
                .await
                .is_err()
            {
                warn!("kept previous weight of {name}");
            }
        }

        info!(
            "finished {} after {} s",
            entry.program, entry.duration_seconds
        );

        Ok(entry)
    }
}

/// The store's answer wins over whatever the caller assumed.
fn reconcile(catalog: &mut Catalog, name: &Name, weight: Weight) {
    if let Some(exercise) = catalog.exercises.get_mut(name) {
        exercise.current_weight = weight;
    }
}
