use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// VideoRecord – one row of the trending table
// ---------------------------------------------------------------------------

/// A single trending-list appearance of a video (one row of the source table).
/// The same video may recur across many trending dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    /// Date the video appeared in the trending list.
    pub trending_date: NaiveDate,
    pub title: String,
    pub channel_name: String,
    /// Content genre, e.g. "Music" or "Gaming".
    pub category: String,
    pub view: u64,
    pub like: u64,
    pub dislike: u64,
    pub comment: u64,
    pub tags: Option<String>,
    pub description: Option<String>,
}

impl VideoRecord {
    /// Read the engagement metric selected for a scatter axis.
    pub fn metric(&self, metric: EngagementMetric) -> u64 {
        match metric {
            EngagementMetric::Like => self.like,
            EngagementMetric::Dislike => self.dislike,
            EngagementMetric::Comment => self.comment,
        }
    }
}

// ---------------------------------------------------------------------------
// EngagementMetric – selectable scatter-plot axes
// ---------------------------------------------------------------------------

/// The per-video counters a user can place on a scatter axis.  `view` is not
/// listed here: it is always the size encoding, never an axis.
///
/// Column names are singular (`like`, `dislike`, `comment`) to match the
/// on-disk schema; [`EngagementMetric::label`] carries the plural form shown
/// in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementMetric {
    Like,
    Dislike,
    Comment,
}

impl EngagementMetric {
    pub const ALL: [EngagementMetric; 3] = [
        EngagementMetric::Like,
        EngagementMetric::Dislike,
        EngagementMetric::Comment,
    ];

    /// Human-readable axis / selector label.
    pub fn label(self) -> &'static str {
        match self {
            EngagementMetric::Like => "Likes",
            EngagementMetric::Dislike => "Dislikes",
            EngagementMetric::Comment => "Comments",
        }
    }
}

impl fmt::Display for EngagementMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TrendingDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with indexes computed once at load time.
/// Immutable after construction; every derived view borrows from it.
#[derive(Debug, Clone)]
pub struct TrendingDataset {
    /// All trending rows, in file order.
    pub records: Vec<VideoRecord>,
    /// Sorted unique categories observed in the data.
    pub categories: Vec<String>,
    /// Observed (min, max) trending date; `None` for an empty dataset.
    pub date_span: Option<(NaiveDate, NaiveDate)>,
}

impl TrendingDataset {
    /// Build the category and date indexes from the loaded rows.
    pub fn from_records(records: Vec<VideoRecord>) -> Self {
        let categories: Vec<String> = records
            .iter()
            .map(|r| r.category.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let date_span = records
            .iter()
            .map(|r| r.trending_date)
            .fold(None, |span, d| match span {
                None => Some((d, d)),
                Some((min, max)) => Some((min.min(d), max.max(d))),
            });

        TrendingDataset {
            records,
            categories,
            date_span,
        }
    }

    /// Number of trending rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
