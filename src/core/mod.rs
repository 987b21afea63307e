pub mod grid;
pub mod plot;
pub mod range;
pub mod trellis;

pub use grid::{GridCell, GridLayout, GridSpec, cell_to_plot};
pub use plot::{
    BoxData, BoxEntry, BoxOutlier, ErrorData, HeatmapCell, HeatmapData, LinePoint, LineSeries,
    Plot, PlotData, PlotId, PlotType, RangeData, RangePoint, RangeSeries, ScatterData,
    ScatterPoint, SimpleLineData, WaterfallData, WaterfallPoint,
};
pub use range::{Axis, AxisRange, RangeAccumulator};
pub use trellis::{TrellisCategory, TrellisDesign, TrellisEntries, TrellisEntry};
