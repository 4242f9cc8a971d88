//! Inline SVG rendering for trend series.
//!
//! Axis behavior is configured per chart through [`ChartOptions`]; nothing is
//! registered globally. Missing values split the polyline instead of being
//! interpolated over, and stepped series hold each value until the next
//! sample.

use dioxus::prelude::*;

use crate::core::{
    position,
    series::{RenderMode, TrendSeries},
};

const PAD_LEFT: f64 = 36.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;

/// Axis and sizing options for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    /// Fixed value range; `None` derives the range from the data.
    pub y_range: Option<(f64, f64)>,
    /// Tick values and labels on the value axis; empty derives min/max ticks.
    pub y_ticks: Vec<(f64, String)>,
    pub x_title: &'static str,
}

impl ChartOptions {
    pub fn auto() -> Self {
        Self {
            width: 640.0,
            height: 220.0,
            y_range: None,
            y_ticks: Vec::new(),
            x_title: "Reading #",
        }
    }

    /// The fixed discrete position axis: the full ordinal scale with one
    /// tick per step, regardless of which ordinals occur in the data.
    pub fn position_axis() -> Self {
        let y_ticks = (position::AXIS_MIN..=position::AXIS_MAX)
            .step_by(position::AXIS_STEP as usize)
            .map(|ordinal| (f64::from(ordinal), position::decode(ordinal).to_string()))
            .collect();
        Self {
            y_range: Some((f64::from(position::AXIS_MIN), f64::from(position::AXIS_MAX))),
            y_ticks,
            ..Self::auto()
        }
    }
}

#[component]
pub fn TrendChart(series: TrendSeries, options: ChartOptions) -> Element {
    if !series.has_values() {
        return rsx! {
            p { class: "chart__placeholder", "No data available for this chart yet." }
        };
    }

    let layout = ChartLayout::compute(&series, &options);
    let width = options.width;
    let height = options.height;
    let right = width - PAD_RIGHT;
    let axis_y = height - PAD_BOTTOM;
    let tick_x = PAD_LEFT - 6.0;
    let x_title_x = (PAD_LEFT + right) / 2.0;
    let x_title_y = height - 6.0;

    rsx! {
        svg {
            class: "chart",
            role: "img",
            view_box: "0 0 {width} {height}",
            line {
                class: "chart__axis",
                x1: "{PAD_LEFT}",
                y1: "{PAD_TOP}",
                x2: "{PAD_LEFT}",
                y2: "{axis_y}",
            }
            line {
                class: "chart__axis",
                x1: "{PAD_LEFT}",
                y1: "{axis_y}",
                x2: "{right}",
                y2: "{axis_y}",
            }
            for tick in layout.ticks.iter() {
                line {
                    class: "chart__gridline",
                    x1: "{PAD_LEFT}",
                    y1: "{tick.pixel_y}",
                    x2: "{right}",
                    y2: "{tick.pixel_y}",
                }
                text {
                    class: "chart__tick",
                    x: "{tick_x}",
                    y: "{tick.pixel_y}",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }
            for segment in layout.segments.iter() {
                polyline {
                    class: "chart__line",
                    fill: "none",
                    points: "{segment}",
                }
            }
            text {
                class: "chart__x-title",
                x: "{x_title_x}",
                y: "{x_title_y}",
                text_anchor: "middle",
                "{options.x_title}"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TickView {
    pixel_y: f64,
    label: String,
}

#[derive(Debug, Clone, PartialEq)]
struct ChartLayout {
    /// One `polyline` points string per contiguous run of values.
    segments: Vec<String>,
    ticks: Vec<TickView>,
}

impl ChartLayout {
    fn compute(series: &TrendSeries, options: &ChartOptions) -> Self {
        let (min, max) = value_range(series, options);
        let plot_width = options.width - PAD_LEFT - PAD_RIGHT;
        let plot_height = options.height - PAD_TOP - PAD_BOTTOM;
        let last_index = series.points.last().map(|p| p.index).unwrap_or(1);

        let x_of = |index: usize| {
            if last_index <= 1 {
                PAD_LEFT + plot_width / 2.0
            } else {
                PAD_LEFT + (index - 1) as f64 / (last_index - 1) as f64 * plot_width
            }
        };
        let y_of = |value: f64| {
            if max > min {
                PAD_TOP + (1.0 - (value - min) / (max - min)) * plot_height
            } else {
                PAD_TOP + plot_height / 2.0
            }
        };

        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for point in &series.points {
            match point.value {
                Some(value) => {
                    let x = x_of(point.index);
                    let y = y_of(value);
                    if series.mode == RenderMode::Stepped {
                        if let Some(&(_, prev_y)) = current.last() {
                            current.push((x, prev_y));
                        }
                    }
                    current.push((x, y));
                }
                None => flush_segment(&mut segments, &mut current),
            }
        }
        flush_segment(&mut segments, &mut current);

        let ticks = if options.y_ticks.is_empty() {
            vec![(min, format!("{min:.0}")), (max, format!("{max:.0}"))]
        } else {
            options.y_ticks.clone()
        }
        .into_iter()
        .map(|(value, label)| TickView {
            pixel_y: y_of(value),
            label,
        })
        .collect();

        Self { segments, ticks }
    }
}

fn flush_segment(segments: &mut Vec<String>, current: &mut Vec<(f64, f64)>) {
    if current.is_empty() {
        return;
    }
    let points = current
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    segments.push(points);
    current.clear();
}

fn value_range(series: &TrendSeries, options: &ChartOptions) -> (f64, f64) {
    if let Some(range) = options.y_range {
        return range;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in series.points.iter().filter_map(|p| p.value) {
        min = min.min(value);
        max = max.max(value);
    }
    if !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::TrendPoint;

    fn series(mode: RenderMode, values: &[Option<f64>]) -> TrendSeries {
        TrendSeries {
            label: "test".into(),
            mode,
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| TrendPoint {
                    index: i + 1,
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn missing_values_split_the_line() {
        let layout = ChartLayout::compute(
            &series(
                RenderMode::Continuous,
                &[Some(1.0), Some(2.0), None, Some(3.0)],
            ),
            &ChartOptions::auto(),
        );
        assert_eq!(layout.segments.len(), 2);
    }

    #[test]
    fn stepped_lines_insert_held_corners() {
        let layout = ChartLayout::compute(
            &series(RenderMode::Stepped, &[Some(0.0), Some(2.0), Some(2.0)]),
            &ChartOptions::position_axis(),
        );
        // 3 samples plus 2 inserted corner points, all one segment.
        assert_eq!(layout.segments.len(), 1);
        assert_eq!(layout.segments[0].split(' ').count(), 5);
    }

    #[test]
    fn position_axis_always_shows_the_full_scale() {
        let layout = ChartLayout::compute(
            &series(RenderMode::Stepped, &[Some(2.0)]),
            &ChartOptions::position_axis(),
        );
        let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["P", "R", "L", "S", "Up"]);
    }

    #[test]
    fn flat_series_still_lays_out() {
        let layout = ChartLayout::compute(
            &series(RenderMode::Continuous, &[Some(5.0), Some(5.0)]),
            &ChartOptions::auto(),
        );
        assert_eq!(layout.segments.len(), 1);
    }
}
