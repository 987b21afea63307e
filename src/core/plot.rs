use serde::{Deserialize, Serialize};

use super::trellis::TrellisEntries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlotId(u32);

impl PlotId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Rendering kind of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotType {
    Box,
    Scatter,
    /// Error/shift scatter.
    Error,
    Range,
    JoinedRange,
    Heatmap,
    Waterfall,
    SimpleLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxOutlier {
    #[serde(default)]
    pub outlier_value: Option<f64>,
}

/// One box-and-whisker glyph. Any statistic may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxEntry {
    pub x: Option<f64>,
    pub lower_quartile: Option<f64>,
    pub lower_whisker: Option<f64>,
    pub median: Option<f64>,
    pub upper_quartile: Option<f64>,
    pub upper_whisker: Option<f64>,
    pub outliers: Vec<BoxOutlier>,
}

impl BoxEntry {
    #[must_use]
    pub fn at(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_whiskers(mut self, lower: f64, upper: f64) -> Self {
        self.lower_whisker = Some(lower);
        self.upper_whisker = Some(upper);
        self
    }

    #[must_use]
    pub fn with_quartiles(mut self, lower: f64, median: f64, upper: f64) -> Self {
        self.lower_quartile = Some(lower);
        self.median = Some(median);
        self.upper_quartile = Some(upper);
        self
    }

    #[must_use]
    pub fn with_outlier(mut self, value: f64) -> Self {
        self.outliers.push(BoxOutlier {
            outlier_value: Some(value),
        });
        self
    }

    /// Present statistics plus outlier values.
    pub fn statistic_values(&self) -> impl Iterator<Item = f64> + '_ {
        [
            self.lower_quartile,
            self.lower_whisker,
            self.median,
            self.upper_quartile,
            self.upper_whisker,
        ]
        .into_iter()
        .chain(self.outliers.iter().map(|outlier| outlier.outlier_value))
        .flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxData {
    #[serde(default)]
    pub entries: Vec<BoxEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScatterData {
    #[serde(default)]
    pub points: Vec<ScatterPoint>,
}

/// Error/shift payload; same point shape as scatter, different fold rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorData {
    #[serde(default)]
    pub points: Vec<ScatterPoint>,
}

/// A point with an optional band around `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RangePoint {
    pub x: f64,
    pub y: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y: Some(y),
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn with_band(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeSeries {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: Vec<RangePoint>,
}

/// Shared payload of range and joined-range panels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeData {
    #[serde(default)]
    pub series: Vec<RangeSeries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub x: usize,
    pub y: usize,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapData {
    pub x_categories: Vec<String>,
    pub y_categories: Vec<String>,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterfallPoint {
    pub label: String,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterfallData {
    #[serde(default)]
    pub points: Vec<WaterfallPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinePoint {
    pub x: f64,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSeries {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleLineData {
    #[serde(default)]
    pub series: Vec<LineSeries>,
}

/// Panel payload tagged by plot type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plot_type", rename_all = "snake_case")]
pub enum PlotData {
    Box(BoxData),
    Scatter(ScatterData),
    Error(ErrorData),
    Range(RangeData),
    JoinedRange(RangeData),
    Heatmap(HeatmapData),
    Waterfall(WaterfallData),
    SimpleLine(SimpleLineData),
}

impl PlotData {
    #[must_use]
    pub fn plot_type(&self) -> PlotType {
        match self {
            Self::Box(_) => PlotType::Box,
            Self::Scatter(_) => PlotType::Scatter,
            Self::Error(_) => PlotType::Error,
            Self::Range(_) => PlotType::Range,
            Self::JoinedRange(_) => PlotType::JoinedRange,
            Self::Heatmap(_) => PlotType::Heatmap,
            Self::Waterfall(_) => PlotType::Waterfall,
            Self::SimpleLine(_) => PlotType::SimpleLine,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Box(data) => data.entries.is_empty(),
            Self::Scatter(data) => data.points.is_empty(),
            Self::Error(data) => data.points.is_empty(),
            Self::Range(data) | Self::JoinedRange(data) => {
                data.series.iter().all(|series| series.points.is_empty())
            }
            Self::Heatmap(data) => data.x_categories.is_empty() && data.y_categories.is_empty(),
            Self::Waterfall(data) => data.points.is_empty(),
            Self::SimpleLine(data) => data.series.iter().all(|series| series.points.is_empty()),
        }
    }
}

/// One trellis panel as produced by the upstream data layer.
///
/// `data` is `None` until the panel's payload has been loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub id: PlotId,
    #[serde(default)]
    pub trellis: TrellisEntries,
    #[serde(default)]
    pub data: Option<PlotData>,
}

impl Plot {
    #[must_use]
    pub fn new(id: PlotId, trellis: TrellisEntries, data: PlotData) -> Self {
        Self {
            id,
            trellis,
            data: Some(data),
        }
    }

    /// A panel whose payload has not arrived yet.
    #[must_use]
    pub fn pending(id: PlotId, trellis: TrellisEntries) -> Self {
        Self {
            id,
            trellis,
            data: None,
        }
    }

    #[must_use]
    pub fn plot_type(&self) -> Option<PlotType> {
        self.data.as_ref().map(PlotData::plot_type)
    }

    #[must_use]
    pub fn has_trellis(&self) -> bool {
        !self.trellis.is_empty()
    }

    #[must_use]
    pub fn measurement(&self) -> Option<&str> {
        self.trellis.measurement()
    }
}
