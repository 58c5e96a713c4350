use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level.
///
/// Logs go to stderr so stdout carries nothing but the session itself.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("student_results=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("student_results=error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log the start of an interactive session
pub fn log_session_start(capacity: usize) {
    tracing::info!(capacity = capacity, "Session started");
}

/// Log a record that made it into the registry
pub fn log_record_added(roll: i32, status: &str, stored: usize) {
    tracing::info!(
        roll = roll,
        status = status,
        stored = stored,
        "Student record added"
    );
}

/// Log a lookup by roll number
pub fn log_lookup(roll: i32, found: bool) {
    tracing::debug!(roll = roll, found = found, "Student lookup");
}

/// Log an operation that was aborted and reported back to the user
pub fn log_rejection(operation: &str, reason: &str) {
    tracing::info!(operation = operation, reason = reason, "Operation rejected");
}

/// Log the end of the session
pub fn log_session_end(stored: usize, reason: &str) {
    tracing::info!(stored = stored, reason = reason, "Session ended");
}
