use eframe::egui::Color32;

use crate::color::ClusterPalette;
use crate::data::model::Cluster;

/// Colour used if a label has no palette entry. Unreachable with the default
/// palette and scan limit.
const FALLBACK_COLOR: Color32 = Color32::GRAY;

// ---------------------------------------------------------------------------
// Scatter series: what the plot draws
// ---------------------------------------------------------------------------

/// One legend entry and its points.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Colour each cluster by its label and name it `cluster <label + 1>`.
pub fn build_series(clusters: &[Cluster], palette: &ClusterPalette) -> Vec<ScatterSeries> {
    clusters
        .iter()
        .map(|cluster| {
            let color = palette.color_for(cluster.label).unwrap_or_else(|| {
                log::warn!("no palette entry for label {}, using fallback", cluster.label);
                FALLBACK_COLOR
            });
            let name = cluster.display_name();
            log::debug!("{name}: {} points", cluster.points.len());

            ScatterSeries {
                name,
                color,
                points: cluster.points.clone(),
            }
        })
        .collect()
}
