use tracing::{debug, trace};

use crate::core::{
    Axis, AxisRange, GridCell, GridSpec, Plot, PlotData, PlotType, TrellisDesign, cell_to_plot,
};
use crate::error::TrellisResult;

use super::{
    AxisRangeConfig, apply_diagnostic_clamp, extract_category_count, extract_x, extract_y,
    merge_x_ranges, merge_y_ranges, select_cohort,
};

/// A single "what is the axis range of this cell?" request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRangeQuery<'a> {
    pub cell: GridCell,
    pub grid: GridSpec,
    pub tab_id: &'a str,
    pub design: TrellisDesign,
}

impl<'a> AxisRangeQuery<'a> {
    #[must_use]
    pub fn new(cell: GridCell, grid: GridSpec) -> Self {
        Self {
            cell,
            grid,
            tab_id: "",
            design: TrellisDesign::default(),
        }
    }

    #[must_use]
    pub fn with_tab(mut self, tab_id: &'a str) -> Self {
        self.tab_id = tab_id;
        self
    }

    #[must_use]
    pub fn with_design(mut self, design: TrellisDesign) -> Self {
        self.design = design;
        self
    }
}

/// Resolves synchronized axis ranges for trellis grid cells.
///
/// Every query is a pure function of its inputs. `None` means the range is
/// not computable yet (no columns, no panel, no trellis metadata or no
/// payload); `Some(AxisRange::UNDEFINED)` means the cohort had no usable
/// data. Both must be rendered as autoscale.
#[derive(Debug, Clone, Default)]
pub struct AxisRangeResolver {
    config: AxisRangeConfig,
}

impl AxisRangeResolver {
    pub fn new(config: AxisRangeConfig) -> TrellisResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AxisRangeConfig {
        &self.config
    }

    #[must_use]
    pub fn get_x_range(
        &self,
        row: usize,
        col: usize,
        columns: Option<usize>,
        limit: Option<usize>,
        plots: &[Plot],
        tab_id: &str,
        design: TrellisDesign,
    ) -> Option<AxisRange> {
        let (target, data) = resolve_target(GridCell::new(row, col), columns, plots, Axis::X)?;

        if design.is_index_based() {
            let range = extract_category_count(data).unwrap_or(AxisRange::UNDEFINED);
            trace!(plot = target.id.raw(), ?design, ?range, "category x range");
            return Some(range);
        }

        let cohort = select_cohort(target, plots, limit);
        let mut range = merge_x_ranges(
            cohort
                .iter()
                .map(|plot| plot.data.as_ref().and_then(extract_x)),
            &self.config,
        );
        if data.plot_type() == PlotType::Scatter && self.config.is_diagnostic_tab(tab_id) {
            range = apply_diagnostic_clamp(range, &self.config);
        }

        trace!(
            plot = target.id.raw(),
            cohort = cohort.len(),
            tab_id,
            ?range,
            "x range"
        );
        Some(range)
    }

    #[must_use]
    pub fn get_y_range(
        &self,
        row: usize,
        col: usize,
        columns: Option<usize>,
        limit: Option<usize>,
        plots: &[Plot],
        tab_id: &str,
    ) -> Option<AxisRange> {
        let (target, data) = resolve_target(GridCell::new(row, col), columns, plots, Axis::Y)?;

        let cohort = select_cohort(target, plots, limit);
        let range = merge_y_ranges(
            cohort.iter().map(|plot| {
                plot.data
                    .as_ref()
                    .and_then(|data| extract_y(data, &self.config))
            }),
            data.plot_type(),
            &self.config,
        );

        trace!(
            plot = target.id.raw(),
            cohort = cohort.len(),
            tab_id,
            ?range,
            "y range"
        );
        Some(range)
    }

    #[must_use]
    pub fn x_range(&self, query: &AxisRangeQuery<'_>, plots: &[Plot]) -> Option<AxisRange> {
        self.get_x_range(
            query.cell.row,
            query.cell.col,
            query.grid.columns,
            query.grid.visible_limit,
            plots,
            query.tab_id,
            query.design,
        )
    }

    #[must_use]
    pub fn y_range(&self, query: &AxisRangeQuery<'_>, plots: &[Plot]) -> Option<AxisRange> {
        self.get_y_range(
            query.cell.row,
            query.cell.col,
            query.grid.columns,
            query.grid.visible_limit,
            plots,
            query.tab_id,
        )
    }
}

fn resolve_target(
    cell: GridCell,
    columns: Option<usize>,
    plots: &[Plot],
    axis: Axis,
) -> Option<(&Plot, &PlotData)> {
    if columns.is_none_or(|columns| columns == 0) {
        debug!(?axis, ?cell, reason = "no column limit", "axis range unresolved");
        return None;
    }
    let Some(target) = cell_to_plot(cell, columns, plots) else {
        debug!(?axis, ?cell, reason = "no plot at cell", "axis range unresolved");
        return None;
    };
    if !target.has_trellis() {
        debug!(
            ?axis,
            plot = target.id.raw(),
            reason = "no trellis metadata",
            "axis range unresolved"
        );
        return None;
    }
    let Some(data) = target.data.as_ref() else {
        debug!(
            ?axis,
            plot = target.id.raw(),
            reason = "no data",
            "axis range unresolved"
        );
        return None;
    };
    Some((target, data))
}
