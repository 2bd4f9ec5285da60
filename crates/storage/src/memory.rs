use std::sync::{Mutex, MutexGuard};

use liftlog_domain::{
    self as domain, Catalog, CreateError, DeleteError, Exercise, Name, ReadError, StorageError,
    UpdateError, Weight, WorkoutEntry,
};
use log::debug;

/// Exercise store and workout log kept in memory for the lifetime of the
/// process.
#[derive(Default)]
pub struct InMemory {
    catalog: Mutex<Catalog>,
    history: Mutex<Vec<WorkoutEntry>>,
}

impl InMemory {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
            history: Mutex::new(vec![]),
        }
    }

    fn catalog(&self) -> Result<MutexGuard<'_, Catalog>, StorageError> {
        self.catalog.lock().map_err(|err| poisoned(&err))
    }

    fn history(&self) -> Result<MutexGuard<'_, Vec<WorkoutEntry>>, StorageError> {
        self.history.lock().map_err(|err| poisoned(&err))
    }

    fn modify_weight(
        &self,
        name: &Name,
        f: impl FnOnce(Weight, f64) -> Weight,
    ) -> Result<Weight, UpdateError> {
        let mut catalog = self.catalog()?;
        let increment = catalog.weight_increment;
        let Some(exercise) = catalog.exercises.get_mut(name) else {
            return Err(UpdateError::NotFound(name.clone()));
        };
        exercise.current_weight = f(exercise.current_weight, increment);
        debug!("{name}: {}", exercise.current_weight);
        Ok(exercise.current_weight)
    }
}

fn poisoned(err: &impl std::fmt::Display) -> StorageError {
    StorageError::Other(err.to_string().into())
}

impl domain::ExerciseRepository for InMemory {
    async fn read_catalog(&self) -> Result<Catalog, ReadError> {
        Ok(self.catalog()?.clone())
    }

    async fn increment_weight(&self, name: &Name) -> Result<Weight, UpdateError> {
        self.modify_weight(name, |weight, increment| weight.offset(increment))
    }

    async fn decrement_weight(&self, name: &Name) -> Result<Weight, UpdateError> {
        self.modify_weight(name, |weight, increment| weight.offset(-increment))
    }

    async fn set_weight(&self, name: &Name, weight: Weight) -> Result<Weight, UpdateError> {
        self.modify_weight(name, |_, _| weight)
    }

    async fn create_exercise(
        &self,
        exercise: Exercise,
        program: Option<&str>,
    ) -> Result<Exercise, CreateError> {
        let mut catalog = self.catalog()?;
        if catalog.exercises.contains_key(&exercise.name) {
            return Err(CreateError::Conflict);
        }
        if let Some(program) = program.and_then(|key| catalog.programs.get_mut(key)) {
            program.exercises.push(exercise.name.clone());
        }
        catalog
            .exercises
            .insert(exercise.name.clone(), exercise.clone());
        Ok(exercise)
    }

    async fn delete_exercise(&self, name: &Name) -> Result<Name, DeleteError> {
        let mut catalog = self.catalog()?;
        if catalog.exercises.remove(name).is_none() {
            return Err(DeleteError::NotFound(name.clone()));
        }
        for program in catalog.programs.values_mut() {
            program.exercises.retain(|n| n != name);
        }
        Ok(name.clone())
    }
}

impl domain::WorkoutLogRepository for InMemory {
    async fn append_workout(&self, entry: WorkoutEntry) -> Result<WorkoutEntry, CreateError> {
        self.history()?.insert(0, entry.clone());
        Ok(entry)
    }

    async fn read_history(&self) -> Result<Vec<WorkoutEntry>, ReadError> {
        Ok(self.history()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use liftlog_domain::{ExerciseRepository, LoggedExercise, WorkoutLogRepository};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn name(name: &str) -> Name {
        Name::new(name).unwrap()
    }

    fn weight(weight: f64) -> Weight {
        Weight::new(weight).unwrap()
    }

    fn entry(day: u32) -> WorkoutEntry {
        WorkoutEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            program: String::from("Full Workout"),
            duration_seconds: 3600,
            exercises: vec![LoggedExercise {
                name: name("Deadlift"),
                weight: weight(205.0),
                sets: 2,
                reps: 5,
            }],
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_increment_weight() {
        let store = InMemory::default();
        assert_eq!(
            store.increment_weight(&name("Deadlift")).await.unwrap(),
            weight(210.0)
        );
        assert_eq!(
            store
                .read_catalog()
                .await
                .unwrap()
                .current_weight(&name("Deadlift")),
            Some(weight(210.0))
        );
    }

    #[rstest]
    #[case(100.0, 95.0)]
    #[case(5.0, 0.0)]
    #[case(2.5, 0.0)]
    #[case(0.0, 0.0)]
    #[tokio::test]
    async fn test_decrement_weight_floors_at_zero(#[case] current: f64, #[case] expected: f64) {
        let store = InMemory::default();
        store
            .set_weight(&name("Overhead Press"), weight(current))
            .await
            .unwrap();
        assert_eq!(
            store.decrement_weight(&name("Overhead Press")).await.unwrap(),
            weight(expected)
        );
    }

    #[tokio::test]
    async fn test_unknown_exercise() {
        let store = InMemory::default();
        assert!(matches!(
            store.increment_weight(&name("Curl")).await,
            Err(UpdateError::NotFound(n)) if n == name("Curl")
        ));
        assert!(matches!(
            store.set_weight(&name("Curl"), weight(20.0)).await,
            Err(UpdateError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_exercise(&name("Curl")).await,
            Err(DeleteError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_exercise() {
        let store = InMemory::default();
        let curl = Exercise::new(name("Curl"), weight(45.0), 3, 5);

        assert_eq!(
            store.create_exercise(curl.clone(), Some("main")).await.unwrap(),
            curl
        );
        assert!(matches!(
            store.create_exercise(curl.clone(), None).await,
            Err(CreateError::Conflict)
        ));

        let catalog = store.read_catalog().await.unwrap();
        assert_eq!(catalog.exercises[&name("Curl")], curl);
        assert_eq!(catalog.programs["main"].exercises.last(), Some(&name("Curl")));
    }

    #[tokio::test]
    async fn test_create_exercise_unknown_program() {
        let store = InMemory::default();
        let curl = Exercise::new(name("Curl"), weight(45.0), 3, 5);
        store.create_exercise(curl, Some("arms")).await.unwrap();

        let catalog = store.read_catalog().await.unwrap();
        assert!(catalog.exercises.contains_key("Curl"));
        assert_eq!(catalog.programs["main"].exercises.len(), 5);
    }

    #[tokio::test]
    async fn test_delete_exercise_removes_from_programs() {
        let store = InMemory::default();
        assert_eq!(
            store.delete_exercise(&name("Deadlift")).await.unwrap(),
            name("Deadlift")
        );

        let catalog = store.read_catalog().await.unwrap();
        assert!(!catalog.exercises.contains_key("Deadlift"));
        assert!(!catalog.programs["main"].exercises.contains(&name("Deadlift")));
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let store = InMemory::default();
        assert!(store.read_history().await.unwrap().is_empty());

        store.append_workout(entry(1)).await.unwrap();
        store.append_workout(entry(3)).await.unwrap();

        assert_eq!(store.read_history().await.unwrap(), vec![entry(3), entry(1)]);
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_a_storage_error() {
        let store = InMemory::default();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _catalog = store.catalog.lock().unwrap();
            panic!("writer crashed");
        }));

        assert!(matches!(
            store.read_catalog().await,
            Err(ReadError::Storage(StorageError::Other(_)))
        ));
        assert!(matches!(
            store.increment_weight(&name("Deadlift")).await,
            Err(UpdateError::Storage(StorageError::Other(_)))
        ));
    }
}
