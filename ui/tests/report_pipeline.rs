//! End-to-end checks for the raw-payload → view-model pipeline.

use serde_json::json;
use ui::core::series::RenderMode;
use ui::report::ReportViewModel;

fn report(value: serde_json::Value) -> api::FullReport {
    serde_json::from_value(value).expect("payload should always deserialize")
}

#[test]
fn partial_report_formats_what_exists_and_degrades_the_rest() {
    let vm = ReportViewModel::from_raw(&report(json!({
        "overview": { "AHI": 12.345 },
        "trend_overview": {
            "positions": [
                "Lying on Back (Supine)",
                "Unknown Position",
                "Sitting / Upright",
            ],
        },
    })));

    let overview = vm.section("Overview").unwrap();
    assert_eq!(
        overview.value("Apnea-Hypopnea Index (AHI)"),
        Some("12.35 /h")
    );

    // respiratory_indices is absent entirely; every cell degrades.
    let respiratory = vm.section("Respiratory Indices").unwrap();
    for row in &respiratory.rows {
        for cell in &row.cells {
            assert_eq!(cell, "N/A", "row {}", row.label);
        }
    }

    let positions = vm
        .series
        .iter()
        .find(|s| s.label == "Sleeping Position")
        .unwrap();
    assert_eq!(positions.mode, RenderMode::Stepped);
    let points: Vec<(usize, Option<f64>)> =
        positions.points.iter().map(|p| (p.index, p.value)).collect();
    assert_eq!(points, [(1, Some(3.0)), (2, None), (3, Some(4.0))]);
}

#[test]
fn dynamic_position_rows_are_exactly_the_reported_keys_in_order() {
    let vm = ReportViewModel::from_raw(&report(json!({
        "position_analysis": {
            "position_durations_minutes": {
                "Lying on Left Side": 120.4,
                "Sitting / Upright": 30,
            },
        },
    })));

    let section = vm.section("Position & Time Analysis").unwrap();
    let dynamic: Vec<&ui::report::RowView> = section
        .rows
        .iter()
        .take_while(|row| !row.label.ends_with("(TST)") && !row.label.ends_with("(TRT)"))
        .collect();

    assert_eq!(dynamic.len(), 2);
    assert_eq!(dynamic[0].label, "Lying on Left Side");
    assert_eq!(dynamic[0].cells[0], "120.4");
    assert_eq!(dynamic[1].label, "Sitting / Upright");
    assert_eq!(dynamic[1].cells[0], "30.0");
}

#[test]
fn building_twice_from_the_same_payload_is_identical() {
    let raw = report(json!({
        "overview": { "AHI": 3.2, "ODI": 0, "Snore_Percentage": 17.5 },
        "pulse": { "Average_Heart_Rate": 58.4 },
        "trend_overview": {
            "oxygen_levels": [97, 96.5, null, 95],
            "heart_rates": [60, 61, 62],
        },
    }));

    let first = ReportViewModel::from_raw(&raw);
    let second = ReportViewModel::from_raw(&raw);
    assert_eq!(first, second);

    // Zero ODI is a reading, not absence.
    assert_eq!(
        first
            .section("Overview")
            .unwrap()
            .value("Oxygen Desaturation Index (ODI)"),
        Some("0.00 /h")
    );

    let oxygen = first
        .series
        .iter()
        .find(|s| s.label == "Oxygen Saturation (%)")
        .unwrap();
    assert_eq!(oxygen.len(), 4);
    assert_eq!(oxygen.points[2].value, None);
}
