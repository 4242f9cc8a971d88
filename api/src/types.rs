//! Raw report payloads as served by the sleep backend.
//!
//! Recordings are frequently partial: a session cut short may be missing
//! whole sections, and older backend builds encode some numbers as strings.
//! Every section and field here is therefore optional, and numeric fields go
//! through [`Metric`] so a malformed value degrades to "absent" instead of
//! failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A numeric report field that tolerates absent, null, string-encoded, or
/// otherwise malformed values. Present-vs-absent is explicit; `0` is a value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metric(Option<f64>);

impl Metric {
    pub fn new(value: Option<f64>) -> Self {
        Self(value)
    }

    pub fn value(self) -> Option<f64> {
        self.0
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Self(Some(value))
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(Self(raw.as_ref().and_then(coerce_f64)))
    }
}

/// Coerce a loosely typed JSON value into a number where possible.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Detailed report served by `GET /session/{id}/full_report`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FullReport {
    pub overview: Option<Overview>,
    pub respiratory_indices: Option<RespiratoryIndices>,
    pub snoring_events: Option<SnoringEvents>,
    pub oxygen_saturation: Option<OxygenSaturation>,
    pub position_analysis: Option<PositionAnalysis>,
    pub pulse: Option<Pulse>,
    pub signal_quality: Option<SignalQuality>,
    pub trend_overview: Option<TrendOverview>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Overview {
    #[serde(rename = "AHI")]
    pub ahi: Metric,
    #[serde(rename = "ODI")]
    pub odi: Metric,
    #[serde(rename = "Snore_Percentage")]
    pub snore_percentage: Metric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RespiratoryIndices {
    #[serde(rename = "AHI_Total")]
    pub ahi_total: Metric,
    #[serde(rename = "AHI_Supine")]
    pub ahi_supine: Metric,
    #[serde(rename = "AHI_NonSupine")]
    pub ahi_non_supine: Metric,
    #[serde(rename = "AHI_Count")]
    pub ahi_count: Metric,
    #[serde(rename = "Apneas_Total")]
    pub apneas_total: Metric,
    #[serde(rename = "Apneas_Supine")]
    pub apneas_supine: Metric,
    #[serde(rename = "Apneas_NonSupine")]
    pub apneas_non_supine: Metric,
    #[serde(rename = "Apneas_Count")]
    pub apneas_count: Metric,
    #[serde(rename = "Obstructive_Apneas_Count")]
    pub obstructive_apneas_count: Metric,
    #[serde(rename = "Hypopneas_Total")]
    pub hypopneas_total: Metric,
    #[serde(rename = "Hypopneas_Supine")]
    pub hypopneas_supine: Metric,
    #[serde(rename = "Hypopneas_NonSupine")]
    pub hypopneas_non_supine: Metric,
    #[serde(rename = "Hypopneas_Count")]
    pub hypopneas_count: Metric,
    #[serde(rename = "Obstructive_Hypopneas_Count")]
    pub obstructive_hypopneas_count: Metric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SnoringEvents {
    #[serde(rename = "Percentage")]
    pub percentage: Metric,
    #[serde(rename = "Duration")]
    pub duration: Metric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OxygenSaturation {
    #[serde(rename = "ODI_Total")]
    pub odi_total: Metric,
    #[serde(rename = "ODI_Supine")]
    pub odi_supine: Metric,
    #[serde(rename = "ODI_NonSupine")]
    pub odi_non_supine: Metric,
    #[serde(rename = "Average_SpO2")]
    pub average_spo2: Metric,
    #[serde(rename = "Average_SpO2_Supine")]
    pub average_spo2_supine: Metric,
    #[serde(rename = "Average_SpO2_NonSupine")]
    pub average_spo2_non_supine: Metric,
    #[serde(rename = "Minimum_SpO2")]
    pub minimum_spo2: Metric,
    #[serde(rename = "Minimum_SpO2_Supine")]
    pub minimum_spo2_supine: Metric,
    #[serde(rename = "Minimum_SpO2_NonSupine")]
    pub minimum_spo2_non_supine: Metric,
    #[serde(rename = "Duration_below_90")]
    pub duration_below_90: Metric,
    #[serde(rename = "Duration_below_88")]
    pub duration_below_88: Metric,
    #[serde(rename = "Duration_below_85")]
    pub duration_below_85: Metric,
    #[serde(rename = "Average_Desaturation_Drop")]
    pub average_desaturation_drop: Metric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PositionAnalysis {
    /// Minutes spent per position label. Data-driven: the backend reports
    /// whichever positions actually occurred, in its own order.
    pub position_durations_minutes: Option<Map<String, Value>>,
    /// Share of sleep per position label, keyed like the durations map.
    pub position_percentages: Option<Map<String, Value>>,
    #[serde(rename = "Supine_TST")]
    pub supine_tst: Metric,
    #[serde(rename = "NonSupine_TST")]
    pub non_supine_tst: Metric,
    #[serde(rename = "Left_TST")]
    pub left_tst: Metric,
    #[serde(rename = "Prone_TST")]
    pub prone_tst: Metric,
    #[serde(rename = "Right_TST")]
    pub right_tst: Metric,
    #[serde(rename = "Upright")]
    pub upright_trt: Metric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pulse {
    #[serde(rename = "Average_Heart_Rate")]
    pub average_heart_rate: Metric,
    #[serde(rename = "Maximum_Heart_Rate")]
    pub maximum_heart_rate: Metric,
    #[serde(rename = "Minimum_Heart_Rate")]
    pub minimum_heart_rate: Metric,
    #[serde(rename = "Duration_below_40_minutes")]
    pub duration_below_40_minutes: Metric,
    #[serde(rename = "Duration_above_100_minutes")]
    pub duration_above_100_minutes: Metric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignalQuality {
    #[serde(rename = "Average_Oximeter_Quality")]
    pub average_oximeter_quality: Metric,
    #[serde(rename = "Average_RIP_Quality")]
    pub average_rip_quality: Metric,
}

/// Sampled trend arrays for the graphical section of the full report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrendOverview {
    pub positions: Option<Vec<Option<String>>>,
    pub oxygen_levels: Option<Vec<Metric>>,
    pub heart_rates: Option<Vec<Metric>>,
}

/// Summary report served by `GET /session/{id}/report`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionReport {
    pub average_heart_rate: Metric,
    pub max_heart_rate: Metric,
    pub min_heart_rate: Metric,
    pub average_oxygen: Metric,
    pub max_oxygen: Metric,
    pub min_oxygen: Metric,
    pub desaturation_events: Metric,
    #[serde(rename = "ODI")]
    pub odi: Metric,
    pub recording_duration_seconds: Metric,
    pub readings: Vec<Reading>,
}

/// One raw sensor sample inside a summary report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Reading {
    pub heartrate: Metric,
    pub oxygen_level: Metric,
    pub confidence: Metric,
}

/// Body of `GET /sessions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionSummary>,
}

/// One row of the navigation session list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionSummary {
    pub id: u64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metric_coerces_loose_values() {
        let report: Overview = serde_json::from_value(json!({
            "AHI": 12.3,
            "ODI": "4.5",
            "Snore_Percentage": null,
        }))
        .unwrap();
        assert_eq!(report.ahi.value(), Some(12.3));
        assert_eq!(report.odi.value(), Some(4.5));
        assert_eq!(report.snore_percentage.value(), None);
    }

    #[test]
    fn metric_keeps_zero() {
        let metric: Metric = serde_json::from_value(json!(0)).unwrap();
        assert_eq!(metric.value(), Some(0.0));
    }

    #[test]
    fn metric_rejects_garbage_without_failing() {
        let metric: Metric = serde_json::from_value(json!({"nested": true})).unwrap();
        assert_eq!(metric.value(), None);
    }

    #[test]
    fn full_report_tolerates_missing_sections() {
        let report: FullReport = serde_json::from_value(json!({
            "overview": { "AHI": 5.0 },
        }))
        .unwrap();
        assert!(report.respiratory_indices.is_none());
        assert_eq!(
            report.overview.as_ref().unwrap().ahi.value(),
            Some(5.0)
        );
    }

    #[test]
    fn position_durations_preserve_backend_order() {
        let report: PositionAnalysis = serde_json::from_value(json!({
            "position_durations_minutes": {
                "Lying on Left Side": 120.4,
                "Sitting / Upright": 30,
            }
        }))
        .unwrap();
        let keys: Vec<&String> = report
            .position_durations_minutes
            .as_ref()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, ["Lying on Left Side", "Sitting / Upright"]);
    }

    #[test]
    fn session_list_deserializes() {
        let body: SessionsResponse = serde_json::from_value(json!({
            "sessions": [
                { "id": 7, "start_time": "2025-03-01 22:41:09" },
                { "id": 8 },
            ]
        }))
        .unwrap();
        assert_eq!(body.sessions.len(), 2);
        assert_eq!(body.sessions[0].id, 7);
        assert!(body.sessions[1].start_time.is_none());
    }
}
