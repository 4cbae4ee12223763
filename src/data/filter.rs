use chrono::NaiveDate;
use thiserror::Error;

use super::model::{TrendingDataset, VideoRecord};

// ---------------------------------------------------------------------------
// DateRange – inclusive window over trending_date
// ---------------------------------------------------------------------------

/// Inclusive date window; `start <= end` holds for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Rejected selector input.  Surfaced as a validation message in the UI;
/// filtering is skipped for that render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// The dataset's full observed span, or `None` if it has no rows.
    pub fn from_dataset(dataset: &TrendingDataset) -> Option<Self> {
        dataset
            .date_span
            .map(|(start, end)| DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter – identity filter or exact category match
// ---------------------------------------------------------------------------

/// Category selector state.  A name not present in the dataset is not an
/// error; it simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, record: &VideoRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => record.category == *name,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All Categories"),
            CategoryFilter::Only(name) => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of rows that pass both active filters.
///
/// The predicates are independent: a row is kept iff its trending date falls
/// inside `range` and `category` matches.  An empty result is valid.
pub fn filtered_indices(
    dataset: &TrendingDataset,
    range: &DateRange,
    category: &CategoryFilter,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.trending_date) && category.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::VideoRecord;

    fn record(date: &str, channel: &str, category: &str) -> VideoRecord {
        VideoRecord {
            trending_date: date.parse().unwrap(),
            title: format!("video by {channel}"),
            channel_name: channel.to_string(),
            category: category.to_string(),
            view: 1000,
            like: 100,
            dislike: 10,
            comment: 5,
            tags: None,
            description: None,
        }
    }

    fn music_dataset() -> TrendingDataset {
        TrendingDataset::from_records(vec![
            record("2021-01-01", "A", "Music"),
            record("2021-01-02", "B", "Music"),
            record("2021-01-03", "A", "Music"),
        ])
    }

    #[test]
    fn inverted_range_is_rejected_before_filtering() {
        let err = DateRange::new(
            "2021-02-01".parse().unwrap(),
            "2021-01-01".parse().unwrap(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RangeError::Inverted {
                start: "2021-02-01".parse().unwrap(),
                end: "2021-01-01".parse().unwrap(),
            }
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::new(
            "2021-01-01".parse().unwrap(),
            "2021-01-03".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(range.start(), "2021-01-01".parse().unwrap());
        assert_eq!(range.end(), "2021-01-03".parse().unwrap());
        assert!(range.contains("2021-01-01".parse().unwrap()));
        assert!(range.contains("2021-01-03".parse().unwrap()));
        assert!(!range.contains("2021-01-04".parse().unwrap()));
        assert!(!range.contains("2020-12-31".parse().unwrap()));
    }

    #[test]
    fn all_rows_pass_with_full_span_and_all_categories() {
        let dataset = music_dataset();
        let range = DateRange::from_dataset(&dataset).unwrap();
        let kept = filtered_indices(&dataset, &range, &CategoryFilter::All);
        assert_eq!(kept, vec![0, 1, 2]);
    }

    #[test]
    fn unknown_category_yields_empty_view_without_error() {
        let dataset = music_dataset();
        let range = DateRange::from_dataset(&dataset).unwrap();
        let kept = filtered_indices(
            &dataset,
            &range,
            &CategoryFilter::Only("Gaming".to_string()),
        );
        assert!(kept.is_empty());
    }

    #[test]
    fn range_excluding_every_row_yields_empty_view() {
        let dataset = music_dataset();
        let range = DateRange::new(
            "2022-01-01".parse().unwrap(),
            "2022-12-31".parse().unwrap(),
        )
        .unwrap();
        let kept = filtered_indices(&dataset, &range, &CategoryFilter::All);
        assert!(kept.is_empty());
    }

    #[test]
    fn category_and_range_predicates_conjoin() {
        let dataset = TrendingDataset::from_records(vec![
            record("2021-01-01", "A", "Music"),
            record("2021-01-05", "B", "Gaming"),
            record("2021-01-05", "C", "Music"),
            record("2021-02-01", "D", "Music"),
        ]);
        let range = DateRange::new(
            "2021-01-02".parse().unwrap(),
            "2021-01-31".parse().unwrap(),
        )
        .unwrap();
        let kept = filtered_indices(
            &dataset,
            &range,
            &CategoryFilter::Only("Music".to_string()),
        );
        assert_eq!(kept, vec![2]);
    }

    #[test]
    fn filtering_is_idempotent_under_the_same_predicates() {
        let dataset = TrendingDataset::from_records(vec![
            record("2021-01-01", "A", "Music"),
            record("2021-01-05", "B", "Gaming"),
            record("2021-01-09", "C", "Music"),
        ]);
        let range = DateRange::new(
            "2021-01-01".parse().unwrap(),
            "2021-01-06".parse().unwrap(),
        )
        .unwrap();
        let category = CategoryFilter::Only("Music".to_string());

        let kept = filtered_indices(&dataset, &range, &category);

        // Re-filter the already-filtered rows with the same predicates: every
        // row survives, so the view is unchanged.
        let refiltered = TrendingDataset::from_records(
            kept.iter()
                .map(|&i| dataset.records[i].clone())
                .collect(),
        );
        let kept_again = filtered_indices(&refiltered, &range, &category);
        assert_eq!(kept_again.len(), kept.len());
        for (j, &i) in kept.iter().enumerate() {
            assert_eq!(refiltered.records[kept_again[j]], dataset.records[i]);
        }
    }
}
