//! Pure mapping from the raw full-report payload to presentation values.
//!
//! The section schema is fixed: every known field is formatted through
//! [`format_metric`]/[`format_count`] with its prescribed decimals and unit,
//! and a missing section only blanks its own cells. The one data-driven part
//! is the per-position duration table, which mirrors whatever subset of
//! positions the backend actually reported. Identical input always produces
//! identical output.

use api::{FullReport, Metric};

use crate::core::{
    format::{format_count, format_metric, UNAVAILABLE},
    position,
    series::{RenderMode, TrendSeries},
};

/// One formatted table row: a label plus one cell per section column.
/// A single-cell row in a multi-column section spans the full width.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub label: String,
    pub cells: Vec<String>,
}

/// A titled, column-headed block of formatted values.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub title: &'static str,
    /// Value-column headers; empty for plain label/value sections.
    pub columns: &'static [&'static str],
    pub rows: Vec<RowView>,
}

impl SectionView {
    /// First cell of the row with the given label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .and_then(|r| r.cells.first())
            .map(String::as_str)
    }
}

/// Everything a report page renders: formatted sections plus trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportViewModel {
    pub sections: Vec<SectionView>,
    pub series: Vec<TrendSeries>,
}

impl ReportViewModel {
    pub fn from_raw(report: &FullReport) -> Self {
        Self {
            sections: vec![
                overview_section(report),
                respiratory_section(report),
                snoring_section(report),
                oxygen_section(report),
                position_section(report),
                pulse_section(report),
                signal_section(report),
            ],
            series: trend_series(report),
        }
    }

    pub fn section(&self, title: &str) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Uniform optional access: a field of a possibly-absent section.
fn field<S>(section: Option<&S>, pick: impl Fn(&S) -> Metric) -> Option<f64> {
    section.map(pick).and_then(Metric::value)
}

fn row(label: impl Into<String>, cells: Vec<String>) -> RowView {
    RowView {
        label: label.into(),
        cells,
    }
}

fn overview_section(report: &FullReport) -> SectionView {
    let s = report.overview.as_ref();
    SectionView {
        title: "Overview",
        columns: &[],
        rows: vec![
            row(
                "Apnea-Hypopnea Index (AHI)",
                vec![format_metric(field(s, |o| o.ahi), 2, " /h")],
            ),
            row(
                "Oxygen Desaturation Index (ODI)",
                vec![format_metric(field(s, |o| o.odi), 2, " /h")],
            ),
            row(
                "Snore Percentage",
                vec![format_metric(field(s, |o| o.snore_percentage), 2, " %")],
            ),
        ],
    }
}

fn respiratory_section(report: &FullReport) -> SectionView {
    let s = report.respiratory_indices.as_ref();
    SectionView {
        title: "Respiratory Indices",
        columns: &["Total", "Supine", "Non-Supine", "Count"],
        rows: vec![
            row(
                "Apneas + Hypopneas (AHI)",
                vec![
                    format_metric(field(s, |r| r.ahi_total), 2, " /h"),
                    format_metric(field(s, |r| r.ahi_supine), 2, " /h"),
                    format_metric(field(s, |r| r.ahi_non_supine), 2, " /h"),
                    format_count(field(s, |r| r.ahi_count)),
                ],
            ),
            row(
                "Apneas",
                vec![
                    format_metric(field(s, |r| r.apneas_total), 2, " /h"),
                    format_metric(field(s, |r| r.apneas_supine), 2, " /h"),
                    format_metric(field(s, |r| r.apneas_non_supine), 2, " /h"),
                    format_count(field(s, |r| r.apneas_count)),
                ],
            ),
            row(
                "Obstructive Apneas (OA)",
                vec![format_count(field(s, |r| r.obstructive_apneas_count))],
            ),
            row(
                "Hypopneas",
                vec![
                    format_metric(field(s, |r| r.hypopneas_total), 2, " /h"),
                    format_metric(field(s, |r| r.hypopneas_supine), 2, " /h"),
                    format_metric(field(s, |r| r.hypopneas_non_supine), 2, " /h"),
                    format_count(field(s, |r| r.hypopneas_count)),
                ],
            ),
            row(
                "Obstructive Hypopneas (OH)",
                vec![format_count(field(s, |r| r.obstructive_hypopneas_count))],
            ),
        ],
    }
}

fn snoring_section(report: &FullReport) -> SectionView {
    let s = report.snoring_events.as_ref();
    SectionView {
        title: "Snoring & Breathing Events",
        columns: &["Percentage of Sleep", "Duration"],
        rows: vec![row(
            "Snoring",
            vec![
                format_metric(field(s, |e| e.percentage), 2, " %"),
                format_metric(field(s, |e| e.duration), 1, " min"),
            ],
        )],
    }
}

fn oxygen_section(report: &FullReport) -> SectionView {
    let s = report.oxygen_saturation.as_ref();
    SectionView {
        title: "Oxygen Saturation (SpO₂)",
        columns: &["Total", "Supine", "Non-Supine"],
        rows: vec![
            row(
                "Oxygen Desaturation Index (ODI)",
                vec![
                    format_metric(field(s, |o| o.odi_total), 2, " /h"),
                    format_metric(field(s, |o| o.odi_supine), 2, " /h"),
                    format_metric(field(s, |o| o.odi_non_supine), 2, " /h"),
                ],
            ),
            row(
                "Average SpO₂",
                vec![
                    format_metric(field(s, |o| o.average_spo2), 1, " %"),
                    format_metric(field(s, |o| o.average_spo2_supine), 1, " %"),
                    format_metric(field(s, |o| o.average_spo2_non_supine), 1, " %"),
                ],
            ),
            row(
                "Minimum SpO₂",
                vec![
                    format_metric(field(s, |o| o.minimum_spo2), 0, " %"),
                    format_metric(field(s, |o| o.minimum_spo2_supine), 0, " %"),
                    format_metric(field(s, |o| o.minimum_spo2_non_supine), 0, " %"),
                ],
            ),
            row(
                "SpO₂ Duration < 90%",
                vec![
                    format_metric(field(s, |o| o.duration_below_90), 1, " min"),
                    UNAVAILABLE.to_string(),
                    UNAVAILABLE.to_string(),
                ],
            ),
            row(
                "SpO₂ Duration < 88%",
                vec![
                    format_metric(field(s, |o| o.duration_below_88), 1, " min"),
                    UNAVAILABLE.to_string(),
                    UNAVAILABLE.to_string(),
                ],
            ),
            row(
                "SpO₂ Duration < 85%",
                vec![
                    format_metric(field(s, |o| o.duration_below_85), 1, " min"),
                    UNAVAILABLE.to_string(),
                    UNAVAILABLE.to_string(),
                ],
            ),
            row(
                "Average Desaturation Drop",
                vec![
                    format_metric(field(s, |o| o.average_desaturation_drop), 1, " %"),
                    UNAVAILABLE.to_string(),
                    UNAVAILABLE.to_string(),
                ],
            ),
        ],
    }
}

fn position_section(report: &FullReport) -> SectionView {
    let s = report.position_analysis.as_ref();
    let mut rows = Vec::new();

    // Data-driven part: one row per position the backend actually reported,
    // in backend order.
    if let Some(durations) = s.and_then(|p| p.position_durations_minutes.as_ref()) {
        for (label, value) in durations {
            let duration = api::types::coerce_f64(value);
            let percentage = s
                .and_then(|p| p.position_percentages.as_ref())
                .and_then(|m| m.get(label))
                .and_then(api::types::coerce_f64);
            rows.push(row(
                label.clone(),
                vec![
                    format_metric(duration, 1, ""),
                    format_metric(percentage, 1, " %"),
                ],
            ));
        }
    }

    let tst = |value: Option<f64>| vec![format_metric(value, 1, ""), UNAVAILABLE.to_string()];
    rows.push(row("Supine (TST)", tst(field(s, |p| p.supine_tst))));
    rows.push(row("Non-Supine (TST)", tst(field(s, |p| p.non_supine_tst))));
    rows.push(row("Left (TST)", tst(field(s, |p| p.left_tst))));
    rows.push(row("Prone (TST)", tst(field(s, |p| p.prone_tst))));
    rows.push(row("Right (TST)", tst(field(s, |p| p.right_tst))));
    rows.push(row("Upright (TRT)", tst(field(s, |p| p.upright_trt))));

    SectionView {
        title: "Position & Time Analysis",
        columns: &["Duration (min)", "Percentage"],
        rows,
    }
}

fn pulse_section(report: &FullReport) -> SectionView {
    let s = report.pulse.as_ref();
    SectionView {
        title: "Pulse & Heart Rate",
        columns: &[],
        rows: vec![
            row(
                "Average Pulse",
                vec![format_metric(field(s, |p| p.average_heart_rate), 1, " bpm")],
            ),
            row(
                "Maximum Pulse",
                vec![format_metric(field(s, |p| p.maximum_heart_rate), 0, " bpm")],
            ),
            row(
                "Minimum Pulse",
                vec![format_metric(field(s, |p| p.minimum_heart_rate), 0, " bpm")],
            ),
            row(
                "Duration < 40 bpm",
                vec![format_metric(
                    field(s, |p| p.duration_below_40_minutes),
                    1,
                    " min",
                )],
            ),
            row(
                "Duration > 100 bpm",
                vec![format_metric(
                    field(s, |p| p.duration_above_100_minutes),
                    1,
                    " min",
                )],
            ),
        ],
    }
}

fn signal_section(report: &FullReport) -> SectionView {
    let s = report.signal_quality.as_ref();
    SectionView {
        title: "Signal Quality",
        columns: &[],
        rows: vec![
            row(
                "Oximeter",
                vec![format_metric(
                    field(s, |q| q.average_oximeter_quality),
                    1,
                    " %",
                )],
            ),
            row(
                "RIP Belts",
                vec![format_metric(field(s, |q| q.average_rip_quality), 0, " %")],
            ),
        ],
    }
}

/// The trend section always exposes the same nine slots in the same order.
/// Slots without a backing data source yet are emitted as explicit empty
/// placeholders instead of being omitted.
fn trend_series(report: &FullReport) -> Vec<TrendSeries> {
    let trends = report.trend_overview.as_ref();

    let positions = trends
        .and_then(|t| t.positions.as_deref())
        .unwrap_or_default();
    let oxygen = trends
        .and_then(|t| t.oxygen_levels.as_deref())
        .unwrap_or_default();
    let heart_rates = trends
        .and_then(|t| t.heart_rates.as_deref())
        .unwrap_or_default();

    vec![
        TrendSeries::unavailable("Movement"),
        TrendSeries::build(
            positions,
            "Sleeping Position",
            RenderMode::Stepped,
            |label| {
                label
                    .as_deref()
                    .and_then(position::encode)
                    .map(f64::from)
            },
        ),
        TrendSeries::unavailable("Apnea Events"),
        TrendSeries::unavailable("Hypopnea Events"),
        TrendSeries::unavailable("Desaturation Events"),
        TrendSeries::build(
            oxygen,
            "Oxygen Saturation (%)",
            RenderMode::Continuous,
            |m| m.value(),
        ),
        TrendSeries::build(heart_rates, "Heart Rate (BPM)", RenderMode::Continuous, |m| {
            m.value()
        }),
        TrendSeries::unavailable("Snoring Train"),
        TrendSeries::unavailable("Limitation Trends"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(value: serde_json::Value) -> FullReport {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_payload_formats_every_cell_as_unavailable() {
        let vm = ReportViewModel::from_raw(&FullReport::default());
        for section in &vm.sections {
            for row in &section.rows {
                for cell in &row.cells {
                    assert_eq!(cell, UNAVAILABLE, "{} / {}", section.title, row.label);
                }
            }
        }
    }

    #[test]
    fn missing_section_does_not_blank_siblings() {
        let vm = ReportViewModel::from_raw(&report(json!({
            "overview": { "AHI": 12.345 },
        })));
        let overview = vm.section("Overview").unwrap();
        assert_eq!(overview.value("Apnea-Hypopnea Index (AHI)"), Some("12.35 /h"));
        assert_eq!(overview.value("Snore Percentage"), Some(UNAVAILABLE));

        let respiratory = vm.section("Respiratory Indices").unwrap();
        assert!(respiratory
            .rows
            .iter()
            .all(|r| r.cells.iter().all(|c| c == UNAVAILABLE)));
    }

    #[test]
    fn zero_counts_are_displayed_not_blanked() {
        let vm = ReportViewModel::from_raw(&report(json!({
            "respiratory_indices": { "Apneas_Count": 0 },
        })));
        let section = vm.section("Respiratory Indices").unwrap();
        let apneas = section.rows.iter().find(|r| r.label == "Apneas").unwrap();
        assert_eq!(apneas.cells[3], "0");
    }

    #[test]
    fn dynamic_position_rows_follow_backend_order() {
        let vm = ReportViewModel::from_raw(&report(json!({
            "position_analysis": {
                "position_durations_minutes": {
                    "Lying on Left Side": 120.4,
                    "Sitting / Upright": 30,
                },
                "position_percentages": {
                    "Lying on Left Side": 80.2,
                },
            },
        })));
        let section = vm.section("Position & Time Analysis").unwrap();
        assert_eq!(section.rows[0].label, "Lying on Left Side");
        assert_eq!(section.rows[0].cells, ["120.4", "80.2 %"]);
        assert_eq!(section.rows[1].label, "Sitting / Upright");
        assert_eq!(section.rows[1].cells, ["30.0", UNAVAILABLE]);
    }

    #[test]
    fn trend_slots_are_stable_and_ordered() {
        let vm = ReportViewModel::from_raw(&FullReport::default());
        let labels: Vec<&str> = vm.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Movement",
                "Sleeping Position",
                "Apnea Events",
                "Hypopnea Events",
                "Desaturation Events",
                "Oxygen Saturation (%)",
                "Heart Rate (BPM)",
                "Snoring Train",
                "Limitation Trends",
            ]
        );
        assert!(vm.series.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn position_series_is_stepped_with_encoded_values() {
        let vm = ReportViewModel::from_raw(&report(json!({
            "trend_overview": {
                "positions": [
                    "Lying on Back (Supine)",
                    "Unknown Position",
                    "Sitting / Upright",
                ],
            },
        })));
        let series = &vm.series[1];
        assert_eq!(series.mode, RenderMode::Stepped);
        let values: Vec<Option<f64>> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, [Some(3.0), None, Some(4.0)]);
        let indices: Vec<usize> = series.points.iter().map(|p| p.index).collect();
        assert_eq!(indices, [1, 2, 3]);
    }

    #[test]
    fn view_model_is_deterministic() {
        let raw = report(json!({
            "overview": { "AHI": 5.4, "ODI": 3.2 },
            "trend_overview": { "heart_rates": [62, 64, 63] },
        }));
        assert_eq!(
            ReportViewModel::from_raw(&raw),
            ReportViewModel::from_raw(&raw)
        );
    }
}
