use crate::core::{AxisRange, PlotType, RangeAccumulator};

use super::AxisRangeConfig;

/// Folds per-panel candidates; `None` candidates are skipped.
///
/// An all-empty fold yields [`AxisRange::UNDEFINED`].
#[must_use]
pub fn merge_ranges<I>(candidates: I) -> AxisRange
where
    I: IntoIterator<Item = Option<AxisRange>>,
{
    candidates
        .into_iter()
        .flatten()
        .collect::<RangeAccumulator>()
        .into_range()
}

/// X-axis merge: fold, then widen a zero-width result.
#[must_use]
pub fn merge_x_ranges<I>(candidates: I, config: &AxisRangeConfig) -> AxisRange
where
    I: IntoIterator<Item = Option<AxisRange>>,
{
    merge_ranges(candidates).widened_if_zero_width(config.zero_width_snap)
}

/// Y-axis merge: fold, then apply the cohort-wide padding of `target_type`.
///
/// Zero-width Y ranges stay as they are.
#[must_use]
pub fn merge_y_ranges<I>(
    candidates: I,
    target_type: PlotType,
    config: &AxisRangeConfig,
) -> AxisRange
where
    I: IntoIterator<Item = Option<AxisRange>>,
{
    let merged = merge_ranges(candidates);
    match target_type {
        PlotType::Range | PlotType::JoinedRange => {
            merged.padded_by_ratio(config.range_padding_ratio)
        }
        PlotType::Box
        | PlotType::Scatter
        | PlotType::Error
        | PlotType::Heatmap
        | PlotType::Waterfall
        | PlotType::SimpleLine => merged,
    }
}

/// Scatter X clamp for diagnostic tabs. Undefined ranges pass through.
#[must_use]
pub fn apply_diagnostic_clamp(range: AxisRange, config: &AxisRangeConfig) -> AxisRange {
    match range.bounds() {
        Some((_, max)) => AxisRange::new(
            config.diagnostic_min,
            max.max(config.diagnostic_max_floor),
        ),
        None => range,
    }
}
