#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod name;
pub mod plate;
pub mod service;
pub mod timer;
pub mod weight;
pub mod workout;

pub use catalog::{Catalog, Program};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{
    Direction, Exercise, ExerciseRepository, ExerciseService, WarmupScheme, WarmupSet,
};
pub use name::{Name, NameError};
pub use plate::{BarConfig, PlateCalculator, PlateInventory, PlateLoadout};
pub use service::Service;
pub use timer::{
    Alert, AlertError, Fallback, IntervalTimer, Scheduler, Silent, Task, TickToken, TimerMode,
    TimerState, TimerStatus,
};
pub use weight::{Weight, WeightError};
pub use workout::{
    ActiveWorkout, CompletedSet, LoggedExercise, SetToggle, WorkoutEntry, WorkoutError,
    WorkoutExercise, WorkoutLogRepository, WorkoutLogService,
};
