//! File logging setup
//!
//! Logs go to `{data_dir}/labsim.log`. When the file grows past the size
//! cap it is renamed to `labsim.log.old` and a fresh file starts, keeping
//! one generation of history. The filter defaults to the given level for
//! this crate (core stays at warn) and can be overridden with `RUST_LOG`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (2 MB)
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;

/// Rotate the log aside if it has outgrown the cap.
fn rotate_if_oversized(log_path: &Path) -> std::io::Result<()> {
    match fs::metadata(log_path) {
        Ok(metadata) if metadata.len() > MAX_LOG_SIZE => {
            fs::rename(log_path, log_path.with_extension("log.old"))
        }
        _ => Ok(()),
    }
}

/// Initialize logging to a file in the data directory.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join("labsim.log");

    if let Err(e) = rotate_if_oversized(&log_path) {
        eprintln!("Warning: failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("labsim={level},labsim_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("LabSim logging initialized (log_path={})", log_path.display());
    Ok(())
}
