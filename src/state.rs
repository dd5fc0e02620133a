use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::ClusterPalette;
use crate::config::Config;
use crate::data::cluster::{LABEL_SCAN_LIMIT, partition, unrendered_labels};
use crate::data::loader::{LoadError, load_records};
use crate::data::model::Record;
use crate::series::{ScatterSeries, build_series};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Label → colour table, fixed for the lifetime of the app.
    pub palette: ClusterPalette,

    /// File the current series came from.
    pub source: Option<PathBuf>,

    /// Rows read from `source`.
    pub record_count: usize,

    /// One entry per rendered cluster, in label order.
    pub series: Vec<ScatterSeries>,

    /// Labels present in the file that were not rendered.
    pub skipped_labels: Vec<i64>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config, palette: ClusterPalette) -> Self {
        Self {
            config,
            palette,
            source: None,
            record_count: 0,
            series: Vec::new(),
            skipped_labels: Vec::new(),
            status_message: None,
        }
    }

    /// Load `path` and replace the current series.
    ///
    /// On error the previous series are left untouched.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let records =
            load_records(path).with_context(|| format!("loading {}", path.display()))?;
        self.set_records(path.to_path_buf(), &records);
        Ok(())
    }

    /// Partition freshly loaded records and rebuild the series.
    pub fn set_records(&mut self, source: PathBuf, records: &[Record]) {
        let clusters = partition(records, LABEL_SCAN_LIMIT);
        self.skipped_labels = unrendered_labels(records, &clusters);
        self.series = build_series(&clusters, &self.palette);
        self.record_count = records.len();

        log::info!(
            "Loaded {} records from {}: {} clusters rendered",
            records.len(),
            source.display(),
            self.series.len()
        );
        if !self.skipped_labels.is_empty() {
            log::warn!(
                "Labels {:?} present but not rendered (scan stops at the first missing label below {})",
                self.skipped_labels,
                LABEL_SCAN_LIMIT
            );
        }

        self.source = Some(source);
        self.status_message = None;
    }

    /// Re-run the pipeline for `path`, reporting failure in the UI instead of
    /// propagating it.
    pub fn reload_from(&mut self, path: &Path) {
        if let Err(e) = self.load(path) {
            log::error!("Failed to load file: {e:#}");
            let malformed = e
                .downcast_ref::<LoadError>()
                .is_some_and(LoadError::is_value_parse);
            let prefix = if malformed { "Invalid data" } else { "Error" };
            self.status_message = Some(format!("{prefix}: {e:#}"));
        }
    }

    /// Reload the current source file, if any.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.reload_from(&path);
        }
    }

    /// Total number of plotted points.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
