use serde::{Deserialize, Serialize};

use crate::error::{TrellisError, TrellisResult};

/// Padding and override constants used by [`super::AxisRangeResolver`].
///
/// Serializable so hosts can ship tuning alongside their grid setup; every
/// field falls back to its default when absent from the JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRangeConfig {
    /// Per-entry box Y padding as a fraction of the entry span.
    #[serde(default = "default_box_padding_ratio")]
    pub box_padding_ratio: f64,
    /// Range/joined-range Y padding as a fraction of the folded span.
    #[serde(default = "default_range_padding_ratio")]
    pub range_padding_ratio: f64,
    /// Units added on each side of a zero-width X range.
    #[serde(default = "default_zero_width_snap")]
    pub zero_width_snap: f64,
    #[serde(default = "default_waterfall_floor")]
    pub waterfall_floor: f64,
    /// Lowest allowed waterfall ceiling.
    #[serde(default = "default_waterfall_ceiling")]
    pub waterfall_ceiling: f64,
    /// Tabs on which scatter X ranges are clamped.
    ///
    /// The defaults are placeholders; hosts must configure their real tab
    /// identifiers or the clamp never fires.
    #[serde(default = "default_diagnostic_tabs")]
    pub diagnostic_tabs: Vec<String>,
    #[serde(default = "default_diagnostic_min")]
    pub diagnostic_min: f64,
    #[serde(default = "default_diagnostic_max_floor")]
    pub diagnostic_max_floor: f64,
}

impl Default for AxisRangeConfig {
    fn default() -> Self {
        Self {
            box_padding_ratio: default_box_padding_ratio(),
            range_padding_ratio: default_range_padding_ratio(),
            zero_width_snap: default_zero_width_snap(),
            waterfall_floor: default_waterfall_floor(),
            waterfall_ceiling: default_waterfall_ceiling(),
            diagnostic_tabs: default_diagnostic_tabs(),
            diagnostic_min: default_diagnostic_min(),
            diagnostic_max_floor: default_diagnostic_max_floor(),
        }
    }
}

impl AxisRangeConfig {
    #[must_use]
    pub fn with_box_padding_ratio(mut self, ratio: f64) -> Self {
        self.box_padding_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_range_padding_ratio(mut self, ratio: f64) -> Self {
        self.range_padding_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_zero_width_snap(mut self, snap: f64) -> Self {
        self.zero_width_snap = snap;
        self
    }

    #[must_use]
    pub fn with_waterfall_bounds(mut self, floor: f64, ceiling: f64) -> Self {
        self.waterfall_floor = floor;
        self.waterfall_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_diagnostic_tabs<I, S>(mut self, tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diagnostic_tabs = tabs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn is_diagnostic_tab(&self, tab_id: &str) -> bool {
        self.diagnostic_tabs.iter().any(|tab| tab == tab_id)
    }

    pub fn validate(self) -> TrellisResult<Self> {
        for (name, ratio) in [
            ("box padding ratio", self.box_padding_ratio),
            ("range padding ratio", self.range_padding_ratio),
            ("zero-width snap", self.zero_width_snap),
        ] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(TrellisError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        if !self.waterfall_floor.is_finite() || !self.waterfall_ceiling.is_finite() {
            return Err(TrellisError::InvalidConfig(
                "waterfall bounds must be finite".to_owned(),
            ));
        }
        if self.waterfall_floor > self.waterfall_ceiling {
            return Err(TrellisError::InvalidConfig(
                "waterfall floor must not exceed ceiling".to_owned(),
            ));
        }

        if !self.diagnostic_min.is_finite() || !self.diagnostic_max_floor.is_finite() {
            return Err(TrellisError::InvalidConfig(
                "diagnostic clamp values must be finite".to_owned(),
            ));
        }
        if self.diagnostic_min > self.diagnostic_max_floor {
            return Err(TrellisError::InvalidConfig(
                "diagnostic min must not exceed diagnostic max floor".to_owned(),
            ));
        }

        Ok(self)
    }

    pub fn from_json_str(input: &str) -> TrellisResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TrellisError::InvalidConfig(format!("failed to parse axis range config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> TrellisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TrellisError::InvalidData(format!("failed to serialize axis range config: {e}"))
        })
    }
}

fn default_box_padding_ratio() -> f64 {
    0.05
}

fn default_range_padding_ratio() -> f64 {
    0.05
}

fn default_zero_width_snap() -> f64 {
    1.0
}

fn default_waterfall_floor() -> f64 {
    -100.0
}

fn default_waterfall_ceiling() -> f64 {
    100.0
}

fn default_diagnostic_tabs() -> Vec<String> {
    vec!["diagnostics".to_owned(), "diagnostics-detail".to_owned()]
}

fn default_diagnostic_min() -> f64 {
    0.0
}

fn default_diagnostic_max_floor() -> f64 {
    4.0
}

#[cfg(test)]
mod tests {
    use super::AxisRangeConfig;
    use crate::error::TrellisError;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = AxisRangeConfig::from_json_str(r#"{"zero_width_snap": 2.5}"#)
            .expect("partial config");
        assert_eq!(config.zero_width_snap, 2.5);
        assert_eq!(config.box_padding_ratio, 0.05);
        assert_eq!(config.waterfall_floor, -100.0);
        assert!(config.is_diagnostic_tab("diagnostics"));
    }

    #[test]
    fn negative_padding_is_rejected() {
        let err = AxisRangeConfig::default()
            .with_range_padding_ratio(-0.1)
            .validate()
            .expect_err("negative ratio must fail");
        assert!(matches!(err, TrellisError::InvalidConfig(_)));
        assert!(format!("{err}").contains("range padding ratio"));
    }

    #[test]
    fn inverted_waterfall_bounds_are_rejected() {
        assert!(
            AxisRangeConfig::default()
                .with_waterfall_bounds(10.0, -10.0)
                .validate()
                .is_err()
        );
    }
}
