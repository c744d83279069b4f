//! Process startup: logging, configuration, and the live session.
//!
//! The binary is a thin wrapper around [`run`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tilerace_core::config::{ConfigError, DEFAULT_CONFIG_FILE, TileraceConfig};
use tilerace_core::dice::ThreadDie;
use tilerace_core::{GameSession, GameStore};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, reload};

use crate::server::{ServerError, start_server};
use crate::state::AppState;

/// Errors that can stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The server failed to bind or crashed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}

/// Path of the configuration file: `TILERACE_CONFIG` if set, else
/// [`DEFAULT_CONFIG_FILE`] in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os("TILERACE_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
}

/// Level used before the config file is read, when neither `RUST_LOG`
/// nor `TILERACE_LOG_LEVEL` is set.
const BOOT_LOG_LEVEL: &str = "info";

/// Handle on the installed log filter.
///
/// Logging starts before configuration is loaded so that config warnings
/// are visible. Once the config is known, [`apply_level`](Self::apply_level)
/// swaps in `logging.level`, unless `RUST_LOG` pinned the filter.
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned_by_env: bool,
}

impl LogControl {
    /// Replace the active filter with `level`, unless `RUST_LOG` is set.
    pub fn apply_level(&self, level: &str) {
        if self.pinned_by_env {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(level)) {
            warn!(level, error = %e, "Could not apply configured log level");
        }
    }
}

/// Filter directive used at boot: `TILERACE_LOG_LEVEL` if set, else `info`.
pub fn boot_level(env_level: Option<String>) -> String {
    env_level
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| BOOT_LOG_LEVEL.to_owned())
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the boot level from
/// [`boot_level`] is used until [`LogControl::apply_level`] runs.
pub fn init_tracing() -> LogControl {
    let (filter, pinned_by_env) = EnvFilter::try_from_default_env().map_or_else(
        |_| {
            let level = boot_level(std::env::var("TILERACE_LOG_LEVEL").ok());
            (EnvFilter::new(level), false)
        },
        |filter| (filter, true),
    );
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    LogControl {
        handle,
        pinned_by_env,
    }
}

/// Open the live session described by `config` with a fair die.
pub fn build_state(config: &TileraceConfig) -> AppState {
    let rules = config.rules;
    let store = GameStore::new(config.storage.game_file.clone(), rules.last_tile);
    let session = GameSession::open(rules, store, Box::new(ThreadDie::new(rules.die_faces)));
    AppState::new(session)
}

/// Initialize logging, load configuration, load the game, and serve.
///
/// # Errors
///
/// Returns [`StartupError`] if the configuration is invalid or the server
/// cannot run.
pub async fn run(config_file: &Path) -> Result<(), StartupError> {
    let logging = init_tracing();
    let config = TileraceConfig::load(config_file)?;
    logging.apply_level(&config.logging.level);

    info!(
        config_file = %config_file.display(),
        last_tile = config.rules.last_tile,
        die_faces = config.rules.die_faces,
        game_file = %config.storage.game_file.display(),
        "Configuration loaded"
    );

    let state = Arc::new(build_state(&config));
    start_server(&config.server, state).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use super::*;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn boot_level_prefers_env_then_info() {
        assert_eq!(boot_level(Some("debug".to_owned())), "debug");
        assert_eq!(boot_level(Some("  ".to_owned())), "info");
        assert_eq!(boot_level(None), "info");
    }

    #[test]
    fn config_warnings_reach_an_installed_subscriber() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_env_filter(EnvFilter::new(BOOT_LOG_LEVEL))
            .finish();

        let dir = tempfile::tempdir().unwrap();
        tracing::subscriber::with_default(subscriber, || {
            let mut config = TileraceConfig::load(&dir.path().join("absent.yaml")).unwrap();
            config.apply_overrides(|key| (key == "TILERACE_PORT").then(|| "seventy".to_owned()));
        });

        let text = captured.text();
        assert!(text.contains("Config file not found, using defaults"), "{text}");
        assert!(text.contains("Ignoring invalid TILERACE_PORT"), "{text}");
    }
}
