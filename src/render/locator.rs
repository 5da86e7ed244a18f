use serde::{Deserialize, Serialize};

use crate::core::{
    LOG_SUBDECADE_MULTIPLIERS, log_decade_ticks, log_subdecade_ticks, multiple_ticks,
};

/// Rule placing major ticks along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorLocator {
    /// Let the surface pick positions.
    Auto,
    /// Every integer multiple of `interval`.
    Multiple { interval: f64 },
    /// Every power of ten.
    LogBase10,
    /// Exactly these positions, in order.
    Fixed { positions: Vec<f64> },
}

impl MajorLocator {
    #[must_use]
    pub fn interval(&self) -> Option<f64> {
        match self {
            Self::Multiple { interval } => Some(*interval),
            _ => None,
        }
    }

    /// Concrete positions inside `bounds`, or `None` for [`MajorLocator::Auto`].
    #[must_use]
    pub fn positions(&self, bounds: (f64, f64)) -> Option<Vec<f64>> {
        let range = ordered(bounds);
        match self {
            Self::Auto => None,
            Self::Multiple { interval } => Some(multiple_ticks(range, *interval)),
            Self::LogBase10 => Some(log_decade_ticks(range)),
            Self::Fixed { positions } => Some(positions.clone()),
        }
    }
}

/// Rule placing minor ticks along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinorLocator {
    /// No minor ticks.
    None,
    Auto,
    Multiple { interval: f64 },
    /// `m * 10^k` for each multiplier.
    LogSubdecades { multipliers: Vec<f64> },
}

impl MinorLocator {
    #[must_use]
    pub fn log_subdecades() -> Self {
        Self::LogSubdecades {
            multipliers: LOG_SUBDECADE_MULTIPLIERS.to_vec(),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Option<f64> {
        match self {
            Self::Multiple { interval } => Some(*interval),
            _ => None,
        }
    }

    #[must_use]
    pub fn positions(&self, bounds: (f64, f64)) -> Option<Vec<f64>> {
        let range = ordered(bounds);
        match self {
            Self::None => Some(Vec::new()),
            Self::Auto => None,
            Self::Multiple { interval } => Some(multiple_ticks(range, *interval)),
            Self::LogSubdecades { multipliers } => Some(log_subdecade_ticks(range, multipliers)),
        }
    }
}

/// Formatting rule for major tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TickFormatter {
    /// Shortest representation that round-trips (`0.0` prints as `0`).
    #[default]
    Plain,
    /// Fixed number of decimals.
    FixedPrecision { decimals: u8 },
    /// `0` at the origin, fixed decimals elsewhere.
    OriginAware { decimals: u8 },
}

impl TickFormatter {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Plain => format_plain(value),
            Self::FixedPrecision { decimals } => format_decimal(value, usize::from(decimals)),
            Self::OriginAware { decimals } => {
                if value == 0.0 {
                    "0".to_owned()
                } else {
                    format_decimal(value, usize::from(decimals))
                }
            }
        }
    }
}

/// Shortest decimal text for a tick position.
#[must_use]
pub fn format_plain(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    // Normalize negative zero.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

fn format_decimal(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    format!("{value:.precision$}")
}

fn ordered(bounds: (f64, f64)) -> (f64, f64) {
    (bounds.0.min(bounds.1), bounds.0.max(bounds.1))
}
