use std::fmt::Write;

use chrono::{DateTime, Local};
use liftlog_domain::{
    ActiveWorkout, Catalog, Exercise, PlateCalculator, TimerMode, TimerState, TimerStatus,
    WorkoutEntry,
};

/// Plates for one side followed by the bar diagram, or the bar alone.
#[must_use]
pub fn barbell(calculator: &PlateCalculator, total_weight: f64, unit: &str) -> String {
    let loadout = calculator.solve(total_weight);
    let bar_weight = calculator.bar_weight();
    if loadout.is_empty() {
        return format!("Bar only ({bar_weight} {unit})");
    }

    let left = loadout
        .mirrored()
        .map(|plate| format!("[{plate}]"))
        .collect::<String>();
    let right = loadout
        .iter()
        .map(|plate| format!("[{plate}]"))
        .collect::<String>();

    let mut out = format!("Each side: {loadout}\n{left}=={bar_weight}=={right}");
    let loaded = loadout.total(bar_weight);
    if (loaded - total_weight).abs() >= liftlog_domain::plate::EPSILON {
        let _ = write!(out, "\nLoaded: {loaded} {unit}");
    }
    out
}

#[must_use]
pub fn exercise(
    exercise: &Exercise,
    catalog: &Catalog,
    calculator: &PlateCalculator,
    unit: &str,
) -> String {
    let mut out = format!(
        "{}: {} {unit}, {}x{}",
        exercise.name, exercise.current_weight, exercise.default_sets, exercise.default_reps
    );
    for warmup in catalog.warmup.warmups(exercise.current_weight) {
        let _ = write!(
            out,
            "\n  warm-up {}%: {} {unit} x {}",
            warmup.percentage, warmup.weight, warmup.reps
        );
    }
    for line in barbell(calculator, exercise.current_weight.value(), unit).lines() {
        let _ = write!(out, "\n  {line}");
    }
    out
}

#[must_use]
pub fn dashboard(catalog: &Catalog, calculator: &PlateCalculator, unit: &str) -> String {
    catalog
        .dashboard()
        .into_iter()
        .map(|e| exercise(e, catalog, calculator, unit))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[must_use]
pub fn timer(state: &TimerState) -> String {
    let label = match (state.mode, state.overtime) {
        (TimerMode::Countdown, false) => "Rest",
        (TimerMode::Countdown, true) => "Over",
        (TimerMode::Stopwatch, _) => "Time",
    };
    let status = match state.status {
        TimerStatus::Idle => " (idle)",
        TimerStatus::Running => "",
        TimerStatus::Stopped => " (paused)",
    };
    format!("{label} {}{status}", state.display())
}

#[must_use]
pub fn workout(workout: &ActiveWorkout, now: DateTime<Local>, unit: &str) -> String {
    let mut out = format!(
        "{} ({})",
        workout.program_name,
        liftlog_domain::timer::format_time(
            u32::try_from(workout.elapsed_seconds(now)).unwrap_or(u32::MAX)
        )
    );
    for (idx, exercise) in workout.exercises.iter().enumerate() {
        let marker = if idx == workout.current_exercise {
            '>'
        } else {
            ' '
        };
        let sets = (0..exercise.sets as usize)
            .map(|set| {
                if set < exercise.completed.len() {
                    'x'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        let _ = write!(
            out,
            "\n{marker} {}. {} {} {unit} x {} [{sets}]",
            idx + 1,
            exercise.name,
            exercise.weight,
            exercise.reps
        );
    }
    out
}

#[must_use]
pub fn entry(entry: &WorkoutEntry, unit: &str) -> String {
    let mut out = format!(
        "{}: {} in {} min",
        entry.date.format("%a, %b %-d, %Y"),
        entry.program,
        entry.duration_seconds / 60
    );
    for exercise in &entry.exercises {
        let _ = write!(
            out,
            "\n  {} {} {unit} {}x{}",
            exercise.name, exercise.weight, exercise.sets, exercise.reps
        );
    }
    if !entry.notes.is_empty() {
        let _ = write!(out, "\n  {}", entry.notes);
    }
    out
}
