use log::{debug, error, info, LevelFilter};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call installs the loggers
pub fn init_logger(level: LevelFilter) {
    INIT.call_once(|| {
        let logger_installed = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Warn) // Dependencies stay quiet
            .filter_module("zoo_lib", level)
            .filter_module("tokio", LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init()
            .is_ok();

        // Infrastructure logs through `tracing`; it gets its own subscriber
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing_level(level))
            .with_target(false)
            .finish();
        let subscriber_installed = tracing::subscriber::set_global_default(subscriber).is_ok();

        if logger_installed {
            info!(
                "Logging system initialized (level {}, tracing subscriber {})",
                level,
                if subscriber_installed { "installed" } else { "already present" }
            );
        }
    });
}

fn tracing_level(level: LevelFilter) -> tracing::level_filters::LevelFilter {
    use tracing::level_filters::LevelFilter as Tracing;
    match level {
        LevelFilter::Off => Tracing::OFF,
        LevelFilter::Error => Tracing::ERROR,
        LevelFilter::Warn => Tracing::WARN,
        LevelFilter::Info => Tracing::INFO,
        LevelFilter::Debug => Tracing::DEBUG,
        LevelFilter::Trace => Tracing::TRACE,
    }
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log one step of a multi-step operation
    pub fn step(operation: &str, step: &str) {
        debug!("{}: {}", operation, step);
    }

    /// Log a finished transfer
    pub fn transfer(animal: &str, from: &str, to: &str) {
        info!("Transfer: '{}' moved from {} to {}", animal, from, to);
    }

    /// Log feeding sweep progress
    pub fn feeding_progress(fed: usize, total: usize) {
        info!("Feeding: fed {} of {} schedules", fed, total);
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, None);
        duration
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
