#![warn(clippy::pedantic)]

pub mod log;
pub mod session;
pub mod settings;

pub use session::WorkoutSession;
pub use settings::{Settings, SettingsError};
