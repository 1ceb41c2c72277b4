//! Logging Infrastructure
//!
//! Structured logging setup for development and production.

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with an explicit level (falls back to `LOG_LEVEL`, then "info")
pub fn init_logger_with_level(log_level: Option<&str>) {
    let level = log_level
        .map(str::to_string)
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .unwrap_or_else(|| "info".to_string());

    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
