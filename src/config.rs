use std::path::{Path, PathBuf};

/// Default log filter when neither `RUST_LOG` nor `--log` is given
pub const DEFAULT_LOG_FILTER: &str = "csvtool=warn";

/// Runtime configuration for a csvtool session
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that relative CSV paths are resolved against
    pub data_dir: PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Stop a batch of commands at the first failure
    pub stop_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            stop_on_error: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    /// Resolve a user-supplied CSV path
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}
