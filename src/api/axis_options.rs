use serde::{Deserialize, Serialize};

use crate::core::AxisScale;

/// Major ticks per axis when the caller leaves the count unset.
pub const DEFAULT_MAJOR_TICKS: usize = 5;
/// Minor ticks between two majors when the caller leaves the count unset.
pub const DEFAULT_MINOR_TICKS_PER_MAJOR: usize = 1;

/// Sparse range/scale/tick options of one axis.
///
/// Every `None` means "derive from the data". See
/// [`crate::api::resolve_axis`] for the defaulting rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Distance between major ticks; wins over `major_ticks`.
    pub major_interval: Option<f64>,
    /// Distance between minor ticks; wins over `minor_ticks_per_major`.
    pub minor_interval: Option<f64>,
    /// Number of major ticks spanning the bounds (N).
    pub major_ticks: Option<usize>,
    /// Minor ticks between two consecutive majors (M).
    pub minor_ticks_per_major: Option<usize>,
    pub scale: AxisScale,
    /// Decimals shown in major tick labels.
    pub precision: Option<u8>,
    /// Explicit, possibly non-uniform major tick positions.
    pub ticks: Option<Vec<f64>>,
    /// Labels paired with `ticks`.
    pub tick_labels: Option<Vec<String>>,
}

impl AxisOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_major_interval(mut self, interval: f64) -> Self {
        self.major_interval = Some(interval);
        self
    }

    #[must_use]
    pub fn with_minor_interval(mut self, interval: f64) -> Self {
        self.minor_interval = Some(interval);
        self
    }

    #[must_use]
    pub fn with_major_ticks(mut self, count: usize) -> Self {
        self.major_ticks = Some(count);
        self
    }

    #[must_use]
    pub fn with_minor_ticks_per_major(mut self, count: usize) -> Self {
        self.minor_ticks_per_major = Some(count);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, decimals: u8) -> Self {
        self.precision = Some(decimals);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, positions: Vec<f64>) -> Self {
        self.ticks = Some(positions);
        self
    }

    #[must_use]
    pub fn with_tick_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tick_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}
