use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".mon";
const HOME_ENV: &str = "MON_HOME";
const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "store.json";

const DEFAULT_LOG_DIRECTIVES: &str = "warn,mon_forecast=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Logs go to stderr so report output on stdout stays machine readable.
/// `RUST_LOG`, when set, replaces the default filter entirely.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = default_env_filter(env::var(EnvFilter::DEFAULT_ENV).ok());

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    });
}

fn default_env_filter(directives: Option<String>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    match directives.filter(|value| !value.trim().is_empty()) {
        Some(value) => EnvFilter::builder().parse_lossy(value),
        None => EnvFilter::new(DEFAULT_LOG_DIRECTIVES),
    }
}

/// Returns the application data directory, defaulting to `~/.mon`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

pub fn store_file() -> PathBuf {
    app_data_dir().join(STORE_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path)
}
