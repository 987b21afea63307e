//! trellis-grid: axis-range synchronization and layout for trellis chart grids.
//!
//! Given a flat list of panels laid out row-major in a grid, this crate
//! computes the shared X/Y domain each panel should render with (panels that
//! share a measurement get one synchronized scale) and the grid geometry
//! itself. Every query is a pure, synchronous function of the caller's
//! snapshot.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisRangeConfig, AxisRangeQuery, AxisRangeResolver};
pub use error::{TrellisError, TrellisResult};
