//! Tilerace server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `tilerace-config.yaml` (or `TILERACE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Load the saved game, or start a fresh one
//! 4. Serve the HTTP API until `Ctrl-C`

use tilerace_server::startup::{self, StartupError};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config_file = startup::config_path();
    startup::run(&config_file).await
}
