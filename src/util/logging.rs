// Blueprint - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, plus an append-mode file when [logging] file is set.

use super::error::{DirectoryError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Resolve the filter directive.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn filter_directive(
    env_value: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(env) = env_value.filter(|v| !v.trim().is_empty()) {
        env.to_string()
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Open (or create) the log file in append mode.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| DirectoryError::Io {
            path: path.to_path_buf(),
            operation: "open log file",
            source: e,
        })
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `log_file` is the optional log file path from config.toml.
pub fn init(debug_flag: bool, config_level: Option<&str>, log_file: Option<&str>) {
    let env_value = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env_value.as_deref(), debug_flag, config_level);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL));

    let file = log_file.and_then(|path| match open_log_file(Path::new(path)) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("Warning: {e}; logging to stderr only");
            None
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    match file {
        Some(f) => builder
            .with_ansi(false)
            .with_writer(std::io::stderr.and(Mutex::new(f)))
            .init(),
        None => builder.init(),
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        directive = %directive,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_beats_everything() {
        assert_eq!(filter_directive(Some("trace"), true, Some("warn")), "trace");
    }

    #[test]
    fn test_debug_flag_beats_config() {
        assert_eq!(filter_directive(None, true, Some("warn")), "debug");
        assert_eq!(filter_directive(Some("  "), true, None), "debug");
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::{Read, Write};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blueprint.log");
        open_log_file(&path).unwrap().write_all(b"one\n").unwrap();
        open_log_file(&path).unwrap().write_all(b"two\n").unwrap();

        let mut content = String::new();
        File::open(&path).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_open_log_file_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("blueprint.log");
        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::Io {
                operation: "open log file",
                ..
            }
        ));
        assert!(err.to_string().contains("no_such_dir"), "{err}");
    }

    #[test]
    fn test_config_then_default() {
        assert_eq!(filter_directive(None, false, Some("warn")), "warn");
        assert_eq!(filter_directive(None, false, None), "info");
    }
}
