use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::data::filter::CategoryFilter;
use crate::data::model::EngagementMetric;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – selectors
// ---------------------------------------------------------------------------

/// Render the left selector panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let categories = dataset.categories.clone();

    // ---- Date range ----
    ui.strong("Date range");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("From");
        ui.add(DatePickerButton::new(&mut state.start_date).id_salt("start_date"));
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label("To");
        ui.add(DatePickerButton::new(&mut state.end_date).id_salt("end_date"));
    });
    if let Some(err) = &state.range_error {
        ui.label(RichText::new(err).color(Color32::RED));
    }
    ui.separator();

    // ---- Category ----
    ui.strong("Category");
    egui::ComboBox::from_id_salt("category")
        .selected_text(state.category.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(
                &mut state.category,
                CategoryFilter::All,
                CategoryFilter::All.to_string(),
            );
            for cat in &categories {
                ui.selectable_value(
                    &mut state.category,
                    CategoryFilter::Only(cat.clone()),
                    cat,
                );
            }
        });
    ui.separator();

    // ---- Scatter axes ----
    ui.strong("Engagement axes");
    metric_selector(ui, "Horizontal", "x_metric", &mut state.x_metric);
    metric_selector(ui, "Vertical", "y_metric", &mut state.y_metric);

    // Recompute the visible rows after any selector change.
    state.refilter();
}

fn metric_selector(ui: &mut Ui, label: &str, id: &str, metric: &mut EngagementMetric) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(metric.label())
            .show_ui(ui, |ui: &mut Ui| {
                for m in EngagementMetric::ALL {
                    ui.selectable_value(metric, m, m.label());
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar: file dialog, page switch, row counts.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.page, Page::Dashboard, "Dashboard");
        ui.selectable_value(&mut state.page, Page::Dataset, "Dataset");

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} videos loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
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
        .set_title("Open trending data")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
