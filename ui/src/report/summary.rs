//! View model for the lightweight per-session summary report.

use api::SessionReport;

use crate::core::{
    format::{format_count, format_metric},
    series::{RenderMode, TrendSeries},
};

/// Formatted summary statistics plus the two per-reading series.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryViewModel {
    pub stats: Vec<(&'static str, String)>,
    pub heart_rate: TrendSeries,
    pub oxygen: TrendSeries,
}

impl SummaryViewModel {
    pub fn from_raw(report: &SessionReport) -> Self {
        let stats = vec![
            (
                "Average Heart Rate",
                format_metric(report.average_heart_rate.value(), 2, " bpm"),
            ),
            (
                "Max Heart Rate",
                format_metric(report.max_heart_rate.value(), 0, " bpm"),
            ),
            (
                "Min Heart Rate",
                format_metric(report.min_heart_rate.value(), 0, " bpm"),
            ),
            (
                "Average Oxygen",
                format_metric(report.average_oxygen.value(), 2, " %"),
            ),
            (
                "Max Oxygen",
                format_metric(report.max_oxygen.value(), 0, " %"),
            ),
            (
                "Min Oxygen",
                format_metric(report.min_oxygen.value(), 0, " %"),
            ),
            (
                "Desaturation Events",
                format_count(report.desaturation_events.value()),
            ),
            (
                "ODI (Oxygen Desaturation Index)",
                format_metric(report.odi.value(), 2, " /h"),
            ),
            (
                "Total Duration",
                format_metric(report.recording_duration_seconds.value(), 0, " s"),
            ),
        ];

        let heart_rate = TrendSeries::build(
            &report.readings,
            "Heart Rate (BPM)",
            RenderMode::Continuous,
            |r| r.heartrate.value(),
        );
        let oxygen = TrendSeries::build(
            &report.readings,
            "Oxygen Saturation (%)",
            RenderMode::Continuous,
            |r| r.oxygen_level.value(),
        );

        Self {
            stats,
            heart_rate,
            oxygen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn readings_feed_both_series_in_order() {
        let report: SessionReport = serde_json::from_value(json!({
            "average_heart_rate": 61.5,
            "readings": [
                { "heartrate": 60, "oxygen_level": 97 },
                { "heartrate": 63, "oxygen_level": 96 },
            ],
        }))
        .unwrap();

        let vm = SummaryViewModel::from_raw(&report);
        assert_eq!(vm.stats[0].1, "61.50 bpm");
        assert_eq!(vm.heart_rate.len(), 2);
        assert_eq!(vm.heart_rate.points[1].index, 2);
        assert_eq!(vm.heart_rate.points[1].value, Some(63.0));
        assert_eq!(vm.oxygen.points[0].value, Some(97.0));
    }

    #[test]
    fn missing_stats_render_unavailable() {
        let vm = SummaryViewModel::from_raw(&SessionReport::default());
        assert!(vm.stats.iter().all(|(_, value)| value == "N/A"));
        assert!(vm.heart_rate.is_empty());
        assert!(vm.oxygen.is_empty());
    }
}
