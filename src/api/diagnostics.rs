use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::AxisKind;
use crate::render::TickSet;

use super::ResolvedAxis;

/// Why tick labels were generated from positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSynthesisReason {
    /// Positions were given without labels.
    Missing,
    /// Labels were given but their count differs from the positions.
    CountMismatch { positions: usize, labels: usize },
}

/// Non-fatal anomaly found while resolving a style.
///
/// Each advisory names the fallback that was applied; the figure is still
/// configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StyleAdvisory {
    /// All values are equal and at least one bound was left to auto-ranging.
    /// The auto bound(s) were widened so tick intervals stay non-zero.
    DegenerateSeries { axis: AxisKind, value: f64 },
    /// Explicit bounds have zero width; interval locators fell back to auto.
    ZeroWidthBounds { axis: AxisKind, min: f64, max: f64 },
    /// Explicit bound was NaN or infinite and was replaced by the data extent.
    NonFiniteBound { axis: AxisKind, requested: f64 },
    /// Bounds are too wide for a finite tick interval; locators fell back to auto.
    UnrepresentableTickInterval { axis: AxisKind, min: f64, max: f64 },
    /// Fewer than two major ticks were requested.
    InvalidMajorTickCount {
        axis: AxisKind,
        requested: usize,
        fallback: usize,
    },
    /// Explicit interval was not finite and positive; the computed one was used.
    InvalidTickInterval {
        axis: AxisKind,
        which: TickSet,
        requested: f64,
    },
    /// Log axes require a strictly positive minimum; this is not validated.
    LogScaleRequiresPositiveMinimum { axis: AxisKind, minimum: f64 },
    /// NaN or infinite explicit tick positions were dropped.
    NonFiniteTickPositions { axis: AxisKind, dropped: usize },
    /// Tick labels were synthesized from the explicit positions.
    SynthesizedTickLabels {
        axis: AxisKind,
        reason: LabelSynthesisReason,
    },
    /// Field color range was given inverted and has been swapped.
    InvertedValueRange { value_min: f64, value_max: f64 },
    /// Colorbar needs at least two ticks.
    InvalidColorbarTickCount { requested: usize, fallback: usize },
    /// A style field was out of range and replaced by its default.
    InvalidStyleValue {
        field: String,
        requested: String,
        fallback: String,
    },
}

impl StyleAdvisory {
    #[must_use]
    pub fn axis(&self) -> Option<AxisKind> {
        match self {
            Self::DegenerateSeries { axis, .. }
            | Self::ZeroWidthBounds { axis, .. }
            | Self::NonFiniteBound { axis, .. }
            | Self::UnrepresentableTickInterval { axis, .. }
            | Self::NonFiniteTickPositions { axis, .. }
            | Self::InvalidMajorTickCount { axis, .. }
            | Self::InvalidTickInterval { axis, .. }
            | Self::LogScaleRequiresPositiveMinimum { axis, .. }
            | Self::SynthesizedTickLabels { axis, .. } => Some(*axis),
            Self::InvertedValueRange { .. }
            | Self::InvalidColorbarTickCount { .. }
            | Self::InvalidStyleValue { .. } => None,
        }
    }

    /// Emits the advisory as a `tracing` warning.
    pub fn log(&self) {
        warn!(axis = ?self.axis(), advisory = %self, "style advisory");
    }
}

impl fmt::Display for StyleAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSeries { axis, value } => write!(
                f,
                "{} values are all equal to {value}; widened the auto range",
                axis.name()
            ),
            Self::ZeroWidthBounds { axis, min, max } => write!(
                f,
                "{} bounds [{min}, {max}] have zero width; using automatic ticks",
                axis.name()
            ),
            Self::NonFiniteBound { axis, requested } => write!(
                f,
                "{} bound {requested} is not finite; using the data extent",
                axis.name()
            ),
            Self::UnrepresentableTickInterval { axis, min, max } => write!(
                f,
                "{} bounds [{min}, {max}] overflow the tick interval; using automatic ticks",
                axis.name()
            ),
            Self::NonFiniteTickPositions { axis, dropped } => write!(
                f,
                "{} dropped {dropped} non-finite tick position(s)",
                axis.name()
            ),
            Self::InvalidMajorTickCount {
                axis,
                requested,
                fallback,
            } => write!(
                f,
                "{} needs at least 2 major ticks (got {requested}); using {fallback}",
                axis.name()
            ),
            Self::InvalidTickInterval {
                axis,
                which,
                requested,
            } => write!(
                f,
                "{} {} tick interval {requested} must be finite and > 0; using the computed one",
                axis.name(),
                match which {
                    TickSet::Major => "major",
                    TickSet::Minor => "minor",
                }
            ),
            Self::LogScaleRequiresPositiveMinimum { axis, minimum } => write!(
                f,
                "{} uses a log scale; its minimum ({minimum}) must be > 0",
                axis.name()
            ),
            Self::SynthesizedTickLabels { axis, reason } => match reason {
                LabelSynthesisReason::Missing => write!(
                    f,
                    "{} ticks have no labels; labels generated from positions",
                    axis.name()
                ),
                LabelSynthesisReason::CountMismatch { positions, labels } => write!(
                    f,
                    "{} has {positions} ticks but {labels} labels; labels generated from positions",
                    axis.name()
                ),
            },
            Self::InvertedValueRange {
                value_min,
                value_max,
            } => write!(
                f,
                "color range [{value_min}, {value_max}] is inverted; swapped"
            ),
            Self::InvalidColorbarTickCount {
                requested,
                fallback,
            } => write!(
                f,
                "colorbar needs at least 2 ticks (got {requested}); using {fallback}"
            ),
            Self::InvalidStyleValue {
                field,
                requested,
                fallback,
            } => write!(f, "`{field}` = {requested} is invalid; using {fallback}"),
        }
    }
}

/// Outcome of one styling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleReport {
    pub x_axis: ResolvedAxis,
    pub y_axis: ResolvedAxis,
    pub advisories: Vec<StyleAdvisory>,
}

impl StyleReport {
    #[must_use]
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }

    #[must_use]
    pub fn axis(&self, axis: AxisKind) -> &ResolvedAxis {
        match axis {
            AxisKind::X => &self.x_axis,
            AxisKind::Y => &self.y_axis,
        }
    }

    /// Advisories attached to `axis`.
    pub fn advisories_for(&self, axis: AxisKind) -> impl Iterator<Item = &StyleAdvisory> {
        self.advisories
            .iter()
            .filter(move |advisory| advisory.axis() == Some(axis))
    }
}
