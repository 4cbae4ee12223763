use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Column headers use the plural display names; the on-disk schema stays
/// singular (`view`, `like`, ...).
const HEADERS: [&str; 8] = [
    "Date", "Title", "Channel", "Category", "Views", "Likes", "Dislikes", "Comments",
];

// ---------------------------------------------------------------------------
// Dataset page (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered rows as a table.
pub fn dataset_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a trending dataset to start  (File → Open…)");
            });
            return;
        }
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto()) // date
        .column(Column::remainder()) // title
        .column(Column::auto()) // channel
        .column(Column::auto()) // category
        .columns(Column::auto(), 4) // counters
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(rec.trending_date.to_string());
                });
                row.col(|ui| {
                    ui.label(&rec.title);
                });
                row.col(|ui| {
                    ui.label(&rec.channel_name);
                });
                row.col(|ui| {
                    ui.label(&rec.category);
                });
                row.col(|ui| {
                    ui.label(rec.view.to_string());
                });
                row.col(|ui| {
                    ui.label(rec.like.to_string());
                });
                row.col(|ui| {
                    ui.label(rec.dislike.to_string());
                });
                row.col(|ui| {
                    ui.label(rec.comment.to_string());
                });
            });
        });
}
