use serde::{Deserialize, Serialize};

/// Which axis of a 2D plot a setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

impl AxisKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Value-to-position mapping of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    /// Uniform spacing in raw units.
    #[default]
    Linear,
    /// Uniform spacing in base-10 decades (values must be > 0).
    Log,
}

impl AxisScale {
    #[must_use]
    pub const fn is_log(self) -> bool {
        matches!(self, Self::Log)
    }
}

/// Combined scale configuration of a 2D plot.
///
/// The four cases are mutually exclusive and cover every pairing of
/// per-axis [`AxisScale`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    Linear,
    LogLog,
    LogX,
    LogY,
}

impl ScaleMode {
    #[must_use]
    pub const fn from_scales(x: AxisScale, y: AxisScale) -> Self {
        match (x, y) {
            (AxisScale::Linear, AxisScale::Linear) => Self::Linear,
            (AxisScale::Log, AxisScale::Log) => Self::LogLog,
            (AxisScale::Log, AxisScale::Linear) => Self::LogX,
            (AxisScale::Linear, AxisScale::Log) => Self::LogY,
        }
    }

    #[must_use]
    pub const fn scale_of(self, axis: AxisKind) -> AxisScale {
        let log = match axis {
            AxisKind::X => matches!(self, Self::LogLog | Self::LogX),
            AxisKind::Y => matches!(self, Self::LogLog | Self::LogY),
        };
        if log {
            AxisScale::Log
        } else {
            AxisScale::Linear
        }
    }
}
