//! Command line arguments of the csvtool binary
use std::path::PathBuf;

use csvtool::config::{Config, DEFAULT_LOG_FILTER};

#[derive(clap::Parser, Debug)]
#[command(
    name = "csvtool",
    version,
    about = "Load and query tables of numerical data from CSV files"
)]
pub(crate) struct CliApp {
    /// CSV file to load before running any command
    pub(crate) file: Option<String>,
    /// Commands to run after loading, e.g. `printtable` or `innerjoin-other.csv-ID`.
    /// Without commands an interactive session starts.
    pub(crate) commands: Vec<String>,
    /// Directory that relative CSV paths are resolved against
    #[arg(long, env = "CSVTOOL_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
    /// Log filter used when RUST_LOG is unset
    #[arg(long = "log", env = "CSVTOOL_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
    /// Keep running a batch of commands after one fails
    #[arg(long)]
    keep_going: bool,
}

impl CliApp {
    pub(crate) fn config(&self) -> Config {
        Config::new()
            .with_data_dir(self.data_dir.clone())
            .with_log_filter(self.log_filter.clone())
            .with_stop_on_error(!self.keep_going)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_file_and_commands() {
        let app = CliApp::try_parse_from([
            "csvtool",
            "data1.csv",
            "innerjoin-data2.csv-ID",
            "printtable",
        ])
        .unwrap();
        assert_eq!(app.file.as_deref(), Some("data1.csv"));
        assert_eq!(app.commands, vec!["innerjoin-data2.csv-ID", "printtable"]);
        assert!(app.config().stop_on_error);
    }

    #[test]
    fn test_flags() {
        let app = CliApp::try_parse_from(["csvtool", "--keep-going", "--data-dir", "/tmp"]).unwrap();
        assert!(app.file.is_none());
        let config = app.config();
        assert!(!config.stop_on_error);
        assert_eq!(config.data_dir, PathBuf::from("/tmp"));
    }
}
