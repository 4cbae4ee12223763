use std::path::Path;

use chrono::NaiveDate;

use crate::data::filter::{CategoryFilter, DateRange, filtered_indices};
use crate::data::loader;
use crate::data::model::{EngagementMetric, TrendingDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central-panel page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Dataset,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<TrendingDataset>,

    /// Date-range selector bounds (inclusive).
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Category selector.
    pub category: CategoryFilter,

    /// Scatter axis selectors.
    pub x_metric: EngagementMetric,
    pub y_metric: EngagementMetric,

    /// Current page.
    pub page: Page,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Validation message for an inverted date range.
    pub range_error: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            start_date: NaiveDate::default(),
            end_date: NaiveDate::default(),
            category: CategoryFilter::All,
            x_metric: EngagementMetric::Like,
            y_metric: EngagementMetric::Dislike,
            page: Page::default(),
            visible_indices: Vec::new(),
            range_error: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the selectors to its span.
    pub fn set_dataset(&mut self, dataset: TrendingDataset) {
        if let Some(range) = DateRange::from_dataset(&dataset) {
            self.start_date = range.start();
            self.end_date = range.end();
        }
        self.category = CategoryFilter::All;
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.range_error = None;
        self.status_message = None;
    }

    /// Load a dataset file and ingest it, reporting failures as a status
    /// message without touching the current dataset.
    pub fn load_from_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} trending rows ({} categories) from {}",
                    dataset.len(),
                    dataset.categories.len(),
                    path.display()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Recompute `visible_indices` after a selector change.
    ///
    /// An inverted range is a validation error: the message is surfaced and
    /// the previous view is left untouched for this render.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        match DateRange::new(self.start_date, self.end_date) {
            Ok(range) => {
                self.range_error = None;
                self.visible_indices = filtered_indices(ds, &range, &self.category);
            }
            Err(e) => {
                self.range_error = Some(e.to_string());
            }
        }
    }
}
