use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, GridCell, GridLayout, GridSpec, Plot, PlotId, TrellisDesign};
use crate::error::{TrellisError, TrellisResult};

use super::AxisRangeResolver;

/// Resolved X and Y ranges of one visible cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRanges {
    pub plot_id: PlotId,
    pub cell: GridCell,
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

/// Layout plus per-cell ranges for a whole grid, keyed by flat index.
///
/// Plot ids need not be unique upstream, so each entry carries its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRangeSnapshot {
    pub layout: GridLayout,
    pub cells: IndexMap<usize, CellRanges>,
}

impl GridRangeSnapshot {
    #[must_use]
    pub fn cell(&self, cell: GridCell) -> Option<&CellRanges> {
        self.cells.values().find(|ranges| ranges.cell == cell)
    }

    pub fn to_json_pretty(&self) -> TrellisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TrellisError::InvalidData(format!("failed to serialize grid range snapshot: {e}"))
        })
    }
}

impl AxisRangeResolver {
    /// Resolves every visible cell of `grid` in one pass.
    ///
    /// Cells beyond `visible_limit` or past the end of `plots` are omitted.
    /// With the `parallel` feature the cells are resolved on the rayon pool.
    #[must_use]
    pub fn resolve_grid(
        &self,
        plots: &[Plot],
        grid: GridSpec,
        tab_id: &str,
        design: TrellisDesign,
    ) -> GridRangeSnapshot {
        let layout = grid.layout();
        let Some(columns) = grid.column_limit() else {
            return GridRangeSnapshot {
                layout,
                cells: IndexMap::new(),
            };
        };
        let visible = grid
            .visible_limit
            .map_or(plots.len(), |limit| limit.min(plots.len()));

        let resolve = |index: usize| -> Option<(usize, CellRanges)> {
            let cell = GridCell::from_flat_index(index, columns)?;
            let plot = plots.get(index)?;
            let x = self.get_x_range(
                cell.row,
                cell.col,
                grid.columns,
                grid.visible_limit,
                plots,
                tab_id,
                design,
            );
            let y = self.get_y_range(
                cell.row,
                cell.col,
                grid.columns,
                grid.visible_limit,
                plots,
                tab_id,
            );
            Some((
                index,
                CellRanges {
                    plot_id: plot.id,
                    cell,
                    x,
                    y,
                },
            ))
        };

        #[cfg(feature = "parallel")]
        let resolved: Vec<(usize, CellRanges)> = {
            use rayon::prelude::*;
            (0..visible).into_par_iter().filter_map(resolve).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let resolved: Vec<(usize, CellRanges)> = (0..visible).filter_map(resolve).collect();

        GridRangeSnapshot {
            layout,
            cells: resolved.into_iter().collect(),
        }
    }
}
