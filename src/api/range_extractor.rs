use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use crate::core::{
    Axis, AxisRange, BoxData, ErrorData, HeatmapData, PlotData, RangeAccumulator, RangeData,
    ScatterData, ScatterPoint, SimpleLineData, WaterfallData,
};

use super::AxisRangeConfig;

/// Value-based X range of one panel, `None` when it has nothing to offer.
#[must_use]
pub fn extract_x(data: &PlotData) -> Option<AxisRange> {
    match data {
        PlotData::Box(data) => box_x_range(data),
        PlotData::Scatter(data) => scatter_range(data, Axis::X),
        PlotData::Error(data) => error_range(data, Axis::X),
        PlotData::Heatmap(data) => heatmap_x_range(data),
        PlotData::Range(_)
        | PlotData::JoinedRange(_)
        | PlotData::Waterfall(_)
        | PlotData::SimpleLine(_) => None,
    }
}

/// Value-based Y range of one panel.
///
/// Range and joined-range panels return their raw extent; the percentage
/// padding is applied once over the whole cohort fold.
#[must_use]
pub fn extract_y(data: &PlotData, config: &AxisRangeConfig) -> Option<AxisRange> {
    match data {
        PlotData::Box(data) => box_y_range(data, config.box_padding_ratio),
        PlotData::Scatter(data) => scatter_range(data, Axis::Y),
        PlotData::Error(data) => error_range(data, Axis::Y),
        PlotData::Range(data) | PlotData::JoinedRange(data) => range_y_extent(data),
        PlotData::Waterfall(data) => {
            waterfall_y_range(data, config.waterfall_floor, config.waterfall_ceiling)
        }
        PlotData::Heatmap(data) => heatmap_y_range(data),
        PlotData::SimpleLine(_) => None,
    }
}

/// Index-based X range `{0, count - 1}` over distinct categories.
#[must_use]
pub fn extract_category_count(data: &PlotData) -> Option<AxisRange> {
    let count = match data {
        PlotData::Box(data) => data.entries.len(),
        PlotData::Range(data) | PlotData::JoinedRange(data) => distinct_count(
            data.series
                .iter()
                .flat_map(|series| series.points.iter().map(|point| point.x)),
        ),
        PlotData::SimpleLine(data) => simple_line_category_count(data),
        PlotData::Scatter(_)
        | PlotData::Error(_)
        | PlotData::Heatmap(_)
        | PlotData::Waterfall(_) => return None,
    };
    index_range(count)
}

#[must_use]
pub fn box_x_range(data: &BoxData) -> Option<AxisRange> {
    data.entries
        .iter()
        .filter_map(|entry| entry.x)
        .collect::<RangeAccumulator>()
        .finish()
}

/// Folds every entry's statistics, each padded by `ratio` of its own span.
#[must_use]
pub fn box_y_range(data: &BoxData, ratio: f64) -> Option<AxisRange> {
    let mut acc = RangeAccumulator::new();
    for entry in &data.entries {
        let Some(entry_range) = entry
            .statistic_values()
            .collect::<RangeAccumulator>()
            .finish()
        else {
            continue;
        };
        acc.push_range(entry_range.padded_by_ratio(ratio));
    }
    acc.finish()
}

#[must_use]
pub fn scatter_range(data: &ScatterData, axis: Axis) -> Option<AxisRange> {
    data.points
        .iter()
        .filter_map(|point| coordinate(point, axis))
        .collect::<RangeAccumulator>()
        .finish()
}

/// Error/shift fold seeded at `{+inf, -inf}`; points without a coordinate
/// never take part in the comparison.
#[must_use]
pub fn error_range(data: &ErrorData, axis: Axis) -> Option<AxisRange> {
    let (min, max) = data
        .points
        .iter()
        .filter_map(|point| coordinate(point, axis))
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    (min <= max).then(|| AxisRange::new(min, max))
}

/// Unpadded Y extent across all series, using `min`/`max` bands when present.
#[must_use]
pub fn range_y_extent(data: &RangeData) -> Option<AxisRange> {
    let mut acc = RangeAccumulator::new();
    for point in data.series.iter().flat_map(|series| series.points.iter()) {
        let Some(y) = point.y else {
            continue;
        };
        acc.push_value(point.min.unwrap_or(y));
        acc.push_value(point.max.unwrap_or(y));
    }
    acc.finish()
}

#[must_use]
pub fn waterfall_y_range(data: &WaterfallData, floor: f64, ceiling: f64) -> Option<AxisRange> {
    let highest = data
        .points
        .iter()
        .filter_map(|point| point.y)
        .filter(|value| value.is_finite())
        .max_by_key(|value| OrderedFloat(*value))?;
    Some(AxisRange::new(floor, ceiling.max(highest)))
}

/// `{0, max(1, count - 1)}`; a single category still spans one unit.
#[must_use]
pub fn heatmap_x_range(data: &HeatmapData) -> Option<AxisRange> {
    let count = data.x_categories.len();
    if count == 0 {
        return None;
    }
    Some(AxisRange::new(0.0, (count - 1).max(1) as f64))
}

#[must_use]
pub fn heatmap_y_range(data: &HeatmapData) -> Option<AxisRange> {
    index_range(data.y_categories.len())
}

fn simple_line_category_count(data: &SimpleLineData) -> usize {
    distinct_count(
        data.series
            .iter()
            .flat_map(|series| series.points.iter().map(|point| point.x)),
    )
}

fn distinct_count(values: impl Iterator<Item = f64>) -> usize {
    values
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .collect::<BTreeSet<_>>()
        .len()
}

fn index_range(count: usize) -> Option<AxisRange> {
    if count == 0 {
        return None;
    }
    Some(AxisRange::new(0.0, (count - 1) as f64))
}

fn coordinate(point: &ScatterPoint, axis: Axis) -> Option<f64> {
    match axis {
        Axis::X => point.x,
        Axis::Y => point.y,
    }
}
