//! Tracing subscriber setup.
//!
//! The console front end owns stdout and the full-screen UI owns the whole
//! terminal, so diagnostics go either to stderr or to a file, never to stdout.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Frontend;

/// Where the full-screen UI logs when asked to log without naming a file
pub const DEFAULT_LOG_FILE: &str = "connect-four.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Resolved logging destination and the filter used when `RUST_LOG` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub target: LogTarget,
    pub default_filter: &'static str,
}

impl LogSettings {
    /// Pick a destination for this run.
    ///
    /// An explicit `log_file` always wins. Otherwise the console logs to
    /// stderr, and the full-screen UI moves to [`DEFAULT_LOG_FILE`] as soon as
    /// anything beyond warnings could be emitted, since stderr shares its
    /// screen.
    pub fn resolve(
        frontend: Frontend,
        verbose: bool,
        env_filter_set: bool,
        log_file: Option<&Path>,
    ) -> Self {
        let default_filter = if verbose { "debug" } else { "warn" };
        let target = match (log_file, frontend) {
            (Some(path), _) => LogTarget::File(path.to_path_buf()),
            (None, Frontend::Tui) if verbose || env_filter_set => {
                LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE))
            }
            (None, _) => LogTarget::Stderr,
        };
        LogSettings {
            target,
            default_filter,
        }
    }

    /// Same as [`LogSettings::resolve`], reading `RUST_LOG` from the environment
    pub fn from_env(frontend: Frontend, verbose: bool, log_file: Option<&Path>) -> Self {
        let env_filter_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
        Self::resolve(frontend, verbose, env_filter_set, log_file)
    }
}

/// Install the global subscriber. Fails only if the log file cannot be created.
pub fn init_tracing(settings: &LogSettings) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_filter));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    match &settings.target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.with_writer(io::stderr))
            .init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer.with_ansi(false).with_writer(Mutex::new(file)))
                .init()
        }
    }
    Ok(())
}
