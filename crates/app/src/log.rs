use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Writes entries to stderr.
pub struct Stderr;

impl Repository for Stderr {
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error> {
        writeln!(
            std::io::stderr().lock(),
            "{} {:<5} {}: {}",
            entry.time,
            entry.level,
            entry.target,
            entry.message
        )
        .map_err(|err| Error::Unknown(err.to_string()))
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<Mutex<dyn Repository>>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(log) = LOG.lock() else {
            return;
        };
        if let Some(ref repository) = *log {
            if let Ok(mut repository) = repository.lock() {
                let _ = repository.write_entry(entry(record));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn entry(record: &Record) -> Entry {
    Entry {
        time: Local::now().format("%b %d %H:%M:%S").to_string(),
        level: record.level(),
        target: record.target().to_string(),
        message: record.args().to_string(),
    }
}
