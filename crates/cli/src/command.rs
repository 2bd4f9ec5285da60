use std::io::{self, Write};

use chrono::Local;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use liftlog_app::{Settings, WorkoutSession};
use liftlog_domain::{
    ActiveWorkout, Alert, Direction, ExerciseService, IntervalTimer, Name, Scheduler, Service,
    TimerMode, TimerState, Weight, WorkoutLogService,
};
use liftlog_storage::InMemory;

use crate::{
    alert,
    input::{self, Input},
    render, ticker,
};

pub fn plates(settings: &Settings, weights: &[f64]) {
    let calculator = settings.plate_calculator();
    for &weight in weights {
        println!("{weight} {}", settings.unit);
        for line in render::barbell(&calculator, weight, &settings.unit).lines() {
            println!("  {line}");
        }
    }
}

pub async fn dashboard(settings: &Settings) -> anyhow::Result<()> {
    let service = Service::new(InMemory::default());
    let catalog = service.get_catalog().await?;
    println!(
        "{}",
        render::dashboard(&catalog, &settings.plate_calculator(), &settings.unit)
    );
    Ok(())
}

/// `change` is `up`, `down` or a weight.
pub async fn weight(settings: &Settings, exercise: &str, change: &str) -> anyhow::Result<()> {
    let service = Service::new(InMemory::default());
    let mut catalog = service.get_catalog().await?;
    let name = Name::new(exercise)?;

    match change {
        "up" => service
            .adjust_weight(&mut catalog, &name, Direction::Increment)
            .await?,
        "down" => service
            .adjust_weight(&mut catalog, &name, Direction::Decrement)
            .await?,
        value => {
            service
                .set_weight(&mut catalog, &name, Weight::try_from(value)?)
                .await?
        }
    };

    if let Some(exercise) = catalog.exercises.get(&name) {
        println!(
            "{}",
            render::exercise(
                exercise,
                &catalog,
                &settings.plate_calculator(),
                &settings.unit
            )
        );
    }
    Ok(())
}

pub async fn timer(
    settings: &Settings,
    stopwatch: bool,
    seconds: Option<u32>,
) -> anyhow::Result<()> {
    let (scheduler, mut ticks) = ticker::channel();
    let mut timer = IntervalTimer::new(
        settings.rest_seconds,
        scheduler,
        alert::terminal(settings.beeps),
    );
    let mode = if stopwatch {
        TimerMode::Stopwatch
    } else {
        TimerMode::Countdown
    };
    timer.configure(mode, seconds.unwrap_or(settings.rest_seconds));
    timer.start();
    print_presets(settings);
    status(timer.state())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(token) = ticks.recv() => {
                if timer.tick(token) {
                    status(timer.state())?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match input::parse(&line) {
                    Input::Next | Input::Timer => {
                        timer.toggle();
                    }
                    Input::Reset => timer.reset(),
                    Input::Rest(seconds) => timer.configure(TimerMode::Countdown, seconds),
                    Input::Stopwatch => timer.configure(TimerMode::Stopwatch, 0),
                    Input::Quit => break,
                    Input::Help => println!("{}", input::HELP),
                    other => warn!("unsupported input: {other:?}"),
                }
                status(timer.state())?;
            }
        }
    }

    timer.stop();
    Ok(())
}

pub async fn workout(settings: &Settings, program: Option<&str>) -> anyhow::Result<()> {
    let service = Service::new(InMemory::default());
    let mut catalog = service.get_catalog().await?;
    let calculator = settings.plate_calculator();
    let (scheduler, mut ticks) = ticker::channel();
    let mut session = WorkoutSession::new(IntervalTimer::new(
        settings.rest_seconds,
        scheduler,
        alert::terminal(settings.beeps),
    ));

    session.start_workout(&catalog, program, Local::now())?;
    show(&session, &settings.unit);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(token) = ticks.recv() => {
                if session.tick(token) {
                    status(session.timer().state())?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    session.cancel();
                    break;
                };
                let now = Local::now();
                match input::parse(&line) {
                    Input::Next => {
                        if let Some((exercise, set)) =
                            session.workout().and_then(ActiveWorkout::next_set)
                        {
                            session.toggle_set(exercise, set, now);
                        }
                    }
                    Input::Set { exercise, set } => {
                        session.toggle_set(exercise, set, now);
                    }
                    Input::Heavier(idx) => {
                        if let Some(weight) = session.adjust_weight(idx, catalog.weight_increment) {
                            println!("{}", render::barbell(&calculator, weight.value(), &settings.unit));
                        }
                    }
                    Input::Lighter(idx) => {
                        if let Some(weight) = session.adjust_weight(idx, -catalog.weight_increment) {
                            println!("{}", render::barbell(&calculator, weight.value(), &settings.unit));
                        }
                    }
                    Input::Timer => {
                        session.toggle_timer();
                    }
                    Input::Reset => session.reset_timer(),
                    Input::Rest(seconds) => session.configure_timer(TimerMode::Countdown, seconds),
                    Input::Stopwatch => session.configure_timer(TimerMode::Stopwatch, 0),
                    Input::Finish(notes) => {
                        match session.finish(&service, &mut catalog, now, notes).await {
                            Ok(entry) => {
                                if let Some(entry) = entry {
                                    info!("logged {} exercises", entry.exercises.len());
                                }
                                for entry in service.get_history().await? {
                                    println!("{}", render::entry(&entry, &settings.unit));
                                }
                                break;
                            }
                            Err(err) => warn!("failed to finish workout, try again: {err}"),
                        }
                    }
                    Input::Quit => {
                        session.cancel();
                        break;
                    }
                    Input::Help => println!("{}", input::HELP),
                    Input::Unknown(text) => warn!("unknown command: {text}"),
                }
                show(&session, &settings.unit);
            }
        }
    }

    Ok(())
}

fn print_presets(settings: &Settings) {
    let presets = settings
        .rest_presets
        .iter()
        .map(|seconds| format!("rest {seconds}"))
        .collect::<Vec<_>>();
    println!("presets: {}", presets.join(", "));
}

fn show<S: Scheduler, A: Alert>(
    session: &WorkoutSession<S, A>,
    unit: &str,
) {
    if let Some(workout) = session.workout() {
        println!("{}", render::workout(workout, Local::now(), unit));
    }
    println!("{}", render::timer(session.timer().state()));
}

/// Rewrites the current terminal line.
fn status(state: &TimerState) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\r{:<24}", render::timer(state))?;
    stdout.flush()
}
