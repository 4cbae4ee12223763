use std::collections::BTreeMap;

use super::model::{EngagementMetric, TrendingDataset};

/// How many channels the bar chart ranks.
pub const TOP_CHANNEL_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Top-channel ranking (bar-chart input)
// ---------------------------------------------------------------------------

/// One bar: a channel and how often it appears in the filtered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCount {
    pub channel_name: String,
    pub count: usize,
}

/// Group the filtered rows by channel, keep the `n` largest counts and return
/// them ascending by count, ready for a horizontal bar chart (largest bar on
/// top).  Ties are broken by channel name, so repeated calls on the same
/// input produce the same order.
pub fn top_channels(dataset: &TrendingDataset, indices: &[usize], n: usize) -> Vec<ChannelCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in indices {
        *counts
            .entry(dataset.records[i].channel_name.as_str())
            .or_default() += 1;
    }

    let mut ranked: Vec<ChannelCount> = counts
        .into_iter()
        .map(|(channel_name, count)| ChannelCount {
            channel_name: channel_name.to_string(),
            count,
        })
        .collect();

    // BTreeMap iteration is name-ascending; the stable sort keeps that order
    // within equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked.reverse();
    ranked
}

// ---------------------------------------------------------------------------
// Engagement projection (scatter-plot input)
// ---------------------------------------------------------------------------

/// One scatter point: coordinates from the two selected metrics, `view` as
/// the size encoding, channel and title for the hover label.  Values are
/// carried over from the source row unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementPoint<'a> {
    pub x: u64,
    pub y: u64,
    pub view: u64,
    pub channel_name: &'a str,
    pub title: &'a str,
}

/// Project the filtered rows onto the two selected engagement metrics.
/// `x == y` is allowed and degenerates to a y=x scatter; zero counts are kept
/// (a zero `view` simply renders as a minimal point).
pub fn engagement_projection<'a>(
    dataset: &'a TrendingDataset,
    indices: &[usize],
    x: EngagementMetric,
    y: EngagementMetric,
) -> Vec<EngagementPoint<'a>> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            EngagementPoint {
                x: rec.metric(x),
                y: rec.metric(y),
                view: rec.view,
                channel_name: &rec.channel_name,
                title: &rec.title,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::VideoRecord;

    fn record(channel: &str, view: u64, like: u64, dislike: u64, comment: u64) -> VideoRecord {
        VideoRecord {
            trending_date: "2021-01-01".parse().unwrap(),
            title: format!("video by {channel}"),
            channel_name: channel.to_string(),
            category: "Music".to_string(),
            view,
            like,
            dislike,
            comment,
            tags: None,
            description: None,
        }
    }

    fn dataset_with_channel_counts(counts: &[(&str, usize)]) -> TrendingDataset {
        let mut records = Vec::new();
        for &(channel, n) in counts {
            for _ in 0..n {
                records.push(record(channel, 1000, 100, 10, 5));
            }
        }
        TrendingDataset::from_records(records)
    }

    fn all_indices(dataset: &TrendingDataset) -> Vec<usize> {
        (0..dataset.len()).collect()
    }

    #[test]
    fn ranking_is_ascending_and_bounded() {
        let names = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
        ];
        let counts: Vec<(&str, usize)> = names
            .iter()
            .enumerate()
            .map(|(i, &name)| (name, i + 1))
            .collect();
        let dataset = dataset_with_channel_counts(&counts);
        let ranked = top_channels(&dataset, &all_indices(&dataset), TOP_CHANNEL_LIMIT);

        assert_eq!(ranked.len(), TOP_CHANNEL_LIMIT);
        for pair in ranked.windows(2) {
            assert!(pair[0].count <= pair[1].count);
        }
        // The 10 largest of 1..=15 are 6..=15; nothing dropped may beat the
        // smallest kept entry.
        assert_eq!(ranked.first().unwrap().count, 6);
        assert_eq!(ranked.last().unwrap().count, 15);
    }

    #[test]
    fn ranking_shrinks_with_fewer_distinct_channels() {
        let dataset = dataset_with_channel_counts(&[("A", 2), ("B", 1)]);
        let ranked = top_channels(&dataset, &all_indices(&dataset), TOP_CHANNEL_LIMIT);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].channel_name, "B");
        assert_eq!(ranked[1].channel_name, "A");
    }

    #[test]
    fn empty_view_ranks_nothing() {
        let dataset = dataset_with_channel_counts(&[("A", 3)]);
        let ranked = top_channels(&dataset, &[], TOP_CHANNEL_LIMIT);
        assert!(ranked.is_empty());
    }

    #[test]
    fn tied_channels_both_appear_in_a_stable_order() {
        let dataset = dataset_with_channel_counts(&[("Beta", 4), ("Alpha", 4), ("Gamma", 1)]);
        let first = top_channels(&dataset, &all_indices(&dataset), TOP_CHANNEL_LIMIT);
        let second = top_channels(&dataset, &all_indices(&dataset), TOP_CHANNEL_LIMIT);

        assert_eq!(first, second);
        let names: Vec<&str> = first.iter().map(|c| c.channel_name.as_str()).collect();
        assert!(names.contains(&"Alpha") && names.contains(&"Beta"));
        assert_eq!(first.last().unwrap().count, 4);
    }

    #[test]
    fn ranking_respects_the_filtered_subset() {
        let dataset = dataset_with_channel_counts(&[("A", 3), ("B", 2)]);
        // Only the two B rows and one A row are visible.
        let ranked = top_channels(&dataset, &[2, 3, 4], TOP_CHANNEL_LIMIT);
        assert_eq!(
            ranked,
            vec![
                ChannelCount {
                    channel_name: "A".to_string(),
                    count: 1
                },
                ChannelCount {
                    channel_name: "B".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn projection_preserves_row_values_unchanged() {
        let dataset = TrendingDataset::from_records(vec![
            record("A", 500, 40, 3, 9),
            record("B", 0, 0, 0, 0),
        ]);
        let points = engagement_projection(
            &dataset,
            &all_indices(&dataset),
            EngagementMetric::Like,
            EngagementMetric::Comment,
        );

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 40);
        assert_eq!(points[0].y, 9);
        assert_eq!(points[0].view, 500);
        assert_eq!(points[0].channel_name, "A");
        assert_eq!(points[0].title, "video by A");
        // Zero counts are projected, not dropped.
        assert_eq!(points[1].x, 0);
        assert_eq!(points[1].view, 0);
    }

    #[test]
    fn identical_axes_degenerate_to_y_equals_x() {
        let dataset = TrendingDataset::from_records(vec![record("A", 500, 40, 3, 9)]);
        let points = engagement_projection(
            &dataset,
            &all_indices(&dataset),
            EngagementMetric::Dislike,
            EngagementMetric::Dislike,
        );
        assert_eq!(points[0].x, points[0].y);
    }

    #[test]
    fn empty_view_projects_nothing() {
        let dataset = dataset_with_channel_counts(&[("A", 2)]);
        let points = engagement_projection(
            &dataset,
            &[],
            EngagementMetric::Like,
            EngagementMetric::Dislike,
        );
        assert!(points.is_empty());
    }
}
