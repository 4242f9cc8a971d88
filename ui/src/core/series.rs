//! Chart-ready trend series assembled from raw report arrays.

/// How the rendering surface should connect consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Linear interpolation between samples (physiological scalars).
    Continuous,
    /// Hold each value until the next sample (discrete/categorical data).
    Stepped,
}

/// One chart point. The index is the 1-based sample number; if the backend
/// ever supplies real timestamps they replace the index without touching the
/// rest of this contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub index: usize,
    pub value: Option<f64>,
}

/// An immutable, labelled sequence of chart points.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub label: String,
    pub mode: RenderMode,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Build a series by running `transform` over each raw sample. An empty
    /// input yields an empty series, never an error.
    pub fn build<V>(
        values: &[V],
        label: &str,
        mode: RenderMode,
        transform: impl Fn(&V) -> Option<f64>,
    ) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| TrendPoint {
                index: i + 1,
                value: transform(v),
            })
            .collect();
        Self {
            label: label.to_string(),
            mode,
            points,
        }
    }

    /// Explicit placeholder for a schema slot with no backing data source.
    /// Keeps the trend section layout stable for the rendering surface.
    pub fn unavailable(label: &str) -> Self {
        Self {
            label: label.to_string(),
            mode: RenderMode::Continuous,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether at least one point carries a value worth drawing.
    pub fn has_values(&self) -> bool {
        self.points.iter().any(|p| p.value.is_some())
    }
}
