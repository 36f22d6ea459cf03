//! Logging configuration for stderr diagnostics.
//!
//! Every non-fatal failure in a search run (unopenable directories and
//! files, skipped entries, truncated lines) is reported through this
//! module instead of aborting the traversal.

use anyhow::Result;
use log::Level;
use std::sync::Once;

static INIT: Once = Once::new();

/// Log message with context
pub struct LogMessage {
    /// The message to log
    pub message: String,

    /// The module where the log originated
    pub module: &'static str,

    /// Optional key-value pairs of additional context
    pub context: Option<Vec<(&'static str, String)>>,
}

/// Initialize env_logger-based logging with stderr output.
///
/// The filter defaults to `warn` so diagnostics are visible without any
/// configuration; set `RUST_LOG` to override it.
pub fn init() -> Result<()> {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_timestamp(None)
            .format_target(true)
            .format_module_path(false)
            .init();
    });

    Ok(())
}

/// Log a message with the given level and context.
pub fn log_with_context(level: Level, msg: LogMessage) {
    log::log!(target: msg.module, level, "{}", format_context(&msg));
}

/// Format a log message with its context for display
fn format_context(msg: &LogMessage) -> String {
    match &msg.context {
        Some(context) => {
            let pairs = context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} [{}]", msg.message, pairs)
        }
        None => msg.message.clone(),
    }
}
