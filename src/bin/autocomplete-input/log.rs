use std::{fs, io, path::PathBuf, sync::Mutex};

use tracing::Level;
use tracing_subscriber::{FmtSubscriber, filter::EnvFilter};

const LOG_ENV: &str = "AUTOCOMPLETE_INPUT_LOG";
const LOG_FILE: &str = "/tmp/autocomplete-input/ai.log";

/// Log to a file, the terminal belongs to the picker.
pub fn init_logging(log_file: PathBuf) -> Result<(), io::Error> {
    if let Some(parent) = log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let log_file = fs::File::create(log_file)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_writer(Mutex::new(log_file))
        .with_thread_ids(true)
        .with_ansi(false)
        .with_line_number(true);

    let result = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(env_filter) => {
            tracing::subscriber::set_global_default(subscriber.with_env_filter(env_filter).finish())
        }
        Err(_) => tracing::subscriber::set_global_default(
            subscriber.with_env_filter(EnvFilter::new("warn")).finish(),
        ),
    };
    result.map_err(io::Error::other)
}

pub fn init() -> Result<(), io::Error> {
    init_logging(LOG_FILE.into())
}
