use serde::{Deserialize, Serialize};

use super::plot::Plot;

/// Grid parameters supplied by the layout controller on every input change.
///
/// Zero counts are treated like absent values, matching a host that passes
/// "unset" as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSpec {
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub visible_limit: Option<usize>,
    #[serde(default)]
    pub actual_limit: Option<usize>,
    #[serde(default)]
    pub total_height: Option<f64>,
}

impl GridSpec {
    #[must_use]
    pub fn new(columns: usize, visible_limit: usize) -> Self {
        Self {
            columns: Some(columns),
            visible_limit: Some(visible_limit),
            actual_limit: None,
            total_height: None,
        }
    }

    #[must_use]
    pub fn with_actual_limit(mut self, actual_limit: usize) -> Self {
        self.actual_limit = Some(actual_limit);
        self
    }

    #[must_use]
    pub fn with_total_height(mut self, total_height: f64) -> Self {
        self.total_height = Some(total_height);
        self
    }

    /// Column count, or `None` when unset or zero.
    #[must_use]
    pub fn column_limit(&self) -> Option<usize> {
        self.columns.filter(|columns| *columns > 0)
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.visible_limit.filter(|limit| *limit > 0)
    }

    /// Row indices `0..floor(actual_limit / columns)`.
    #[must_use]
    pub fn row_indices(&self) -> Vec<usize> {
        match (self.limit(), self.column_limit(), self.actual_limit) {
            (Some(_), Some(columns), Some(actual)) => (0..actual / columns).collect(),
            _ => Vec::new(),
        }
    }

    /// Column indices `0..columns`.
    #[must_use]
    pub fn column_indices(&self) -> Vec<usize> {
        self.column_limit()
            .map(|columns| (0..columns).collect())
            .unwrap_or_default()
    }

    /// Height of one grid cell: `total_height / ceil(actual_limit / columns)`.
    ///
    /// Returns `0.0` when any input is missing or the grid has no rows.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        let (Some(_), Some(columns), Some(actual), Some(total_height)) = (
            self.limit(),
            self.column_limit(),
            self.actual_limit,
            self.total_height,
        ) else {
            return 0.0;
        };
        let rows = actual.div_ceil(columns);
        if rows == 0 || !total_height.is_finite() {
            return 0.0;
        }
        total_height / rows as f64
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout {
            rows: self.row_indices(),
            columns: self.column_indices(),
            plot_height: self.plot_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flat index, `None` on overflow.
    #[must_use]
    pub fn flat_index(self, columns: usize) -> Option<usize> {
        self.row.checked_mul(columns)?.checked_add(self.col)
    }

    #[must_use]
    pub fn from_flat_index(index: usize, columns: usize) -> Option<Self> {
        if columns == 0 {
            return None;
        }
        Some(Self::new(index / columns, index % columns))
    }
}

/// Row/column lists and cell height consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
    pub plot_height: f64,
}

/// Panel rendered at `cell`, or `None` when `columns` is unset/zero or the
/// flat index falls outside `plots`.
#[must_use]
pub fn cell_to_plot(cell: GridCell, columns: Option<usize>, plots: &[Plot]) -> Option<&Plot> {
    let columns = columns.filter(|columns| *columns > 0)?;
    plots.get(cell.flat_index(columns)?)
}
