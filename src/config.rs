use std::path::PathBuf;

use anyhow::{Result, bail};

/// File read when no path is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "data.csv";

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// Settings resolved once at startup and handed to the app.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file loaded before the window opens.
    pub data_path: PathBuf,
    /// Marker radius in screen points (≈ a 40 pt² marker area).
    pub marker_radius: f32,
    /// Initial window size.
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            marker_radius: 3.2,
            window_size: [1000.0, 700.0],
            min_window_size: [480.0, 320.0],
        }
    }
}

impl Config {
    /// Build from command-line arguments (program name already stripped).
    ///
    /// Usage: `cluster-scatter [PATH]`
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        if let Some(path) = args.next() {
            if path.is_empty() {
                bail!("empty data path");
            }
            config.data_path = PathBuf::from(path);
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{extra}'\nusage: cluster-scatter [PATH]");
        }

        Ok(config)
    }
}
