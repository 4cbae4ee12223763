use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot, Points};

use crate::color;
use crate::data::aggregate::{self, TOP_CHANNEL_LIMIT};
use crate::data::model::TrendingDataset;
use crate::state::AppState;

const SCATTER_COLOR: Color32 = Color32::from_rgb(229, 72, 54);
const MIN_POINT_RADIUS: f32 = 2.0;
const MAX_POINT_RADIUS: f32 = 14.0;

// ---------------------------------------------------------------------------
// Dashboard page (central panel)
// ---------------------------------------------------------------------------

/// Render the dashboard page: the top-channel bars and the engagement scatter.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a trending dataset to start  (File → Open…)");
            });
            return;
        }
    };

    let plot_height = ((ui.available_height() - 120.0) / 2.0).max(180.0);

    ui.heading("Channel");
    ui.label(format!("Most trending channels ({})", state.category));
    top_channels_chart(ui, dataset, &state.visible_indices, plot_height);

    ui.separator();

    ui.heading("Engagement");
    ui.label(format!(
        "{} vs {}, point size by views",
        state.y_metric.label(),
        state.x_metric.label()
    ));
    engagement_chart(ui, state, dataset, plot_height);
}

// ---------------------------------------------------------------------------
// Top-channel bar chart
// ---------------------------------------------------------------------------

fn top_channels_chart(ui: &mut Ui, dataset: &TrendingDataset, indices: &[usize], height: f32) {
    let ranking = aggregate::top_channels(dataset, indices, TOP_CHANNEL_LIMIT);

    // Ascending order, so the largest count is last.
    let max_count = ranking.last().map(|c| c.count).unwrap_or(0).max(1);

    let bars: Vec<Bar> = ranking
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let t = entry.count as f32 / max_count as f32;
            Bar::new(i as f64, entry.count as f64)
                .name(&entry.channel_name)
                .width(0.6)
                .fill(color::heat_color(t))
        })
        .collect();

    let names: Vec<String> = ranking.iter().map(|c| c.channel_name.clone()).collect();

    Plot::new("top_channels")
        .height(height)
        .x_axis_label("Trending appearances")
        .y_axis_formatter(move |mark, _range| {
            // Only whole bar positions get a channel label.
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                return String::new();
            }
            names.get(rounded as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Engagement scatter plot
// ---------------------------------------------------------------------------

fn engagement_chart(ui: &mut Ui, state: &AppState, dataset: &TrendingDataset, height: f32) {
    let points = aggregate::engagement_projection(
        dataset,
        &state.visible_indices,
        state.x_metric,
        state.y_metric,
    );
    let max_view = points.iter().map(|p| p.view).max().unwrap_or(0).max(1);

    Plot::new("engagement")
        .height(height)
        .x_axis_label(state.x_metric.label())
        .y_axis_label(state.y_metric.label())
        .show(ui, |plot_ui| {
            for p in &points {
                // Square-root scaling keeps point area proportional to views.
                let t = ((p.view as f64 / max_view as f64).sqrt()) as f32;
                let radius = MIN_POINT_RADIUS + (MAX_POINT_RADIUS - MIN_POINT_RADIUS) * t;
                plot_ui.points(
                    Points::new(vec![[p.x as f64, p.y as f64]])
                        .radius(radius)
                        .color(SCATTER_COLOR)
                        .name(format!("{}\n{}", p.channel_name, p.title)),
                );
            }
        });
}
