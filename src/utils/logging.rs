use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

// installs the process-wide subscriber used by the demo binaries
pub fn setup_tracing(config: &Configuration) {
    let level = Level::from_str(config.log_level.as_str()).unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time();
    if config.json_logs {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
