//! Telemetry helpers for applications embedding `trellis-grid`.
//!
//! Range resolution emits `tracing` events at `debug`/`trace` level under the
//! `trellis_grid` target. Hosts can call one of the helpers below or install
//! their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Same as [`init_default_tracing`] but with an explicit directive string,
/// e.g. `"trellis_grid=trace"`. `RUST_LOG` is ignored.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return install(tracing_subscriber::EnvFilter::new(directives));
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_helpers_are_noops_without_feature() {
        assert!(!super::init_default_tracing());
        assert!(!super::init_tracing_with_filter("trellis_grid=trace"));
    }
}
