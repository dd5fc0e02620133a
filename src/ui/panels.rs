use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – cluster list
// ---------------------------------------------------------------------------

/// Render the cluster list: colour swatch, name and size of each series.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Clusters");
    ui.separator();

    if state.source.is_none() {
        ui.label("No data loaded.");
        return;
    }
    if state.series.is_empty() {
        ui.label("No clusters to show.");
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for series in &state.series {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("●").color(series.color));
                    ui.label(&series.name);
                    ui.weak(format!("({})", series.points.len()));
                });
            }

            if !state.skipped_labels.is_empty() {
                ui.separator();
                ui.strong("Not shown");
                let labels: Vec<String> = state
                    .skipped_labels
                    .iter()
                    .map(|l| l.to_string())
                    .collect();
                ui.label(format!("labels {}", labels.join(", ")));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.source {
            ui.label(format!(
                "{}: {} rows, {} points in {} clusters",
                path.display(),
                state.record_count,
                state.point_count(),
                state.series.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open clustered points")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.reload_from(&path);
    }
}
