use eframe::egui::Ui;
use egui_plot::{Corner, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render one filled point series per cluster, with a legend.
///
/// The plot takes the whole central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let radius = state.config.marker_radius;

    Plot::new("cluster_scatter")
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.series {
                let points: PlotPoints = series.points.iter().copied().collect();

                let markers = Points::new(points)
                    .name(&series.name)
                    .color(series.color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius);

                plot_ui.points(markers);
            }
        });
}
