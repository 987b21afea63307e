mod axis_range_resolver;
mod cohort_selector;
mod grid_snapshot;
mod json_contract;
mod range_extractor;
mod range_merger;
mod resolver_config;

pub use axis_range_resolver::{AxisRangeQuery, AxisRangeResolver};
pub use cohort_selector::{Cohort, group_by_measurement, select_cohort};
pub use grid_snapshot::{CellRanges, GridRangeSnapshot};
pub use json_contract::{
    PLOT_SET_JSON_SCHEMA_V1, PlotSetJsonContractV1, plots_from_json_compat_str,
    plots_to_json_contract_v1_pretty,
};
pub use range_extractor::{
    box_x_range, box_y_range, error_range, extract_category_count, extract_x, extract_y,
    heatmap_x_range, heatmap_y_range, range_y_extent, scatter_range, waterfall_y_range,
};
pub use range_merger::{apply_diagnostic_clamp, merge_ranges, merge_x_ranges, merge_y_ranges};
pub use resolver_config::AxisRangeConfig;
