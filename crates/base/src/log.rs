use {crate::format_timestamp, std::sync::Mutex};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
            Level::Fatal => write!(f, "FATAL"),
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, file: &str, line: usize, message: &str);
}

pub static LOGGER: Mutex<Option<Box<dyn Logger>>> = Mutex::new(None);

pub fn format_line(level: Level, file: &str, line: usize, message: &str) -> String {
    let timestamp = format_timestamp();
    let thread_id = std::thread::current().id();
    format!(
        "[{:?}:{}:{} - {}:{}] {}",
        thread_id, level, timestamp, file, line, message
    )
}

pub struct StdoutLogger {
    max_level: Level,
}

impl StdoutLogger {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }

    pub fn max_level(&self) -> Level {
        self.max_level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.max_level
    }
}

impl Logger for StdoutLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        if self.enabled(level) {
            println!("{}", format_line(level, file, line, message));
        }
    }
}

/// Install a `StdoutLogger` as the process logger.
///
/// Debug builds log everything, release builds suppress `Debug`.
pub fn init_stdout_logger() {
    let max_level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(Box::new(StdoutLogger::new(max_level)));
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = base::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log(base::log::Level::Debug, file!(), line!() as usize, &message); } }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = base::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log(base::log::Level::Info, file!(), line!() as usize, &message); } }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = base::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log(base::log::Level::Warn, file!(), line!() as usize, &message); } }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = base::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log(base::log::Level::Error, file!(), line!() as usize, &message); } }};
}

