use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{AxisKind, AxisScale, DataSeries, Extent, ScaleMode};
use crate::render::{MajorLocator, MinorLocator, TickFormatter, TickSet, format_plain};

use super::{
    AxisOptions, DEFAULT_MAJOR_TICKS, DEFAULT_MINOR_TICKS_PER_MAJOR, LabelSynthesisReason,
    StyleAdvisory,
};

/// Advisories raised for one axis; rarely more than two.
pub type AxisAdvisories = SmallVec<[StyleAdvisory; 2]>;

/// Derived tick scalars of one axis, valid for a single styling call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickParameters {
    /// `None` when the major locator is not interval based.
    pub major_interval: Option<f64>,
    pub minor_interval: Option<f64>,
    pub precision: Option<u8>,
}

/// Fully specified configuration of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAxis {
    pub axis: AxisKind,
    /// Limits in caller orientation (`min > max` inverts the axis).
    pub bounds: Extent,
    pub scale: AxisScale,
    pub major: MajorLocator,
    pub minor: MinorLocator,
    /// Labels paired with a fixed major locator.
    pub tick_labels: Option<Vec<String>>,
    pub minor_labels_visible: bool,
    pub formatter: TickFormatter,
}

impl ResolvedAxis {
    #[must_use]
    pub fn major_interval(&self) -> Option<f64> {
        self.major.interval()
    }

    #[must_use]
    pub fn minor_interval(&self) -> Option<f64> {
        self.minor.interval()
    }

    #[must_use]
    pub fn tick_parameters(&self) -> TickParameters {
        let precision = match self.formatter {
            TickFormatter::Plain => None,
            TickFormatter::FixedPrecision { decimals }
            | TickFormatter::OriginAware { decimals } => Some(decimals),
        };
        TickParameters {
            major_interval: self.major_interval(),
            minor_interval: self.minor_interval(),
            precision,
        }
    }

    /// Major tick positions inside the bounds; `None` when the surface decides.
    #[must_use]
    pub fn major_positions(&self) -> Option<Vec<f64>> {
        self.major.positions((self.bounds.min, self.bounds.max))
    }

    #[must_use]
    pub fn minor_positions(&self) -> Option<Vec<f64>> {
        self.minor.positions((self.bounds.min, self.bounds.max))
    }

    /// Text shown at each major position.
    #[must_use]
    pub fn major_labels(&self) -> Option<Vec<String>> {
        if let Some(labels) = &self.tick_labels {
            return Some(labels.clone());
        }
        let positions = self.major_positions()?;
        Some(
            positions
                .into_iter()
                .map(|value| self.formatter.format(value))
                .collect(),
        )
    }
}

/// Both axes of a plot plus the combined scale mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisResolution {
    pub x: ResolvedAxis,
    pub y: ResolvedAxis,
    pub scale_mode: ScaleMode,
    pub advisories: Vec<StyleAdvisory>,
}

impl AxisResolution {
    /// Resolves both axes from observed data extents.
    #[must_use]
    pub fn from_extents(
        x_extent: Extent,
        y_extent: Extent,
        x_options: &AxisOptions,
        y_options: &AxisOptions,
    ) -> Self {
        let (x, x_advisories) = resolve_axis(AxisKind::X, x_extent, x_options);
        let (y, y_advisories) = resolve_axis(AxisKind::Y, y_extent, y_options);
        let scale_mode = ScaleMode::from_scales(x.scale, y.scale);

        let mut advisories = Vec::with_capacity(x_advisories.len() + y_advisories.len());
        advisories.extend(x_advisories);
        advisories.extend(y_advisories);

        Self {
            x,
            y,
            scale_mode,
            advisories,
        }
    }
}

/// Resolves both axes of an XY series.
#[must_use]
pub fn resolve_axes(
    series: &DataSeries,
    x_options: &AxisOptions,
    y_options: &AxisOptions,
) -> AxisResolution {
    AxisResolution::from_extents(series.x_extent(), series.y_extent(), x_options, y_options)
}

/// Fills every unset option of one axis from the observed data extent.
///
/// Rules:
/// - unset bounds take the observed min/max
/// - unset major interval is `(max - min) / (N - 1)`, N defaulting to 5
/// - unset minor interval is `major / (M + 1)`, M defaulting to 1
/// - log scale uses decade/sub-decade locators and never computes intervals
/// - explicit positions replace the interval locators entirely
///
/// Anomalies never abort resolution; they are returned as advisories next to
/// the best-effort result.
#[must_use]
pub fn resolve_axis(
    axis: AxisKind,
    observed: Extent,
    options: &AxisOptions,
) -> (ResolvedAxis, AxisAdvisories) {
    let mut advisories = AxisAdvisories::new();

    let bounds = resolve_bounds(axis, observed, options, &mut advisories);
    let scale = options.scale;

    let explicit = options
        .ticks
        .as_deref()
        .and_then(|positions| resolve_explicit_ticks(axis, positions, options, &mut advisories));

    let (major, minor, tick_labels) = if let Some((positions, labels)) = explicit {
        (
            MajorLocator::Fixed { positions },
            MinorLocator::None,
            Some(labels),
        )
    } else if scale.is_log() {
        (MajorLocator::LogBase10, MinorLocator::log_subdecades(), None)
    } else {
        let (major, minor) = resolve_linear_locators(axis, bounds, options, &mut advisories);
        (major, minor, None)
    };

    if scale.is_log() {
        advisories.push(StyleAdvisory::LogScaleRequiresPositiveMinimum {
            axis,
            minimum: bounds.min.min(bounds.max),
        });
    }

    let formatter = match options.precision {
        Some(decimals) => TickFormatter::FixedPrecision { decimals },
        None => TickFormatter::Plain,
    };

    let resolved = ResolvedAxis {
        axis,
        bounds,
        scale,
        major,
        minor,
        tick_labels,
        minor_labels_visible: !scale.is_log(),
        formatter,
    };
    debug!(
        axis = axis.name(),
        min = resolved.bounds.min,
        max = resolved.bounds.max,
        major_interval = ?resolved.major_interval(),
        minor_interval = ?resolved.minor_interval(),
        advisories = advisories.len(),
        "resolved axis"
    );
    (resolved, advisories)
}

fn resolve_bounds(
    axis: AxisKind,
    observed: Extent,
    options: &AxisOptions,
    advisories: &mut AxisAdvisories,
) -> Extent {
    let mut explicit = |requested: Option<f64>| match requested {
        Some(value) if value.is_finite() => Some(value),
        Some(value) => {
            advisories.push(StyleAdvisory::NonFiniteBound {
                axis,
                requested: value,
            });
            None
        }
        None => None,
    };
    let explicit_min = explicit(options.min);
    let explicit_max = explicit(options.max);

    let mut min = explicit_min.unwrap_or(observed.min);
    let mut max = explicit_max.unwrap_or(observed.max);

    let auto_ranged = explicit_min.is_none() || explicit_max.is_none();
    if auto_ranged && observed.is_degenerate() {
        advisories.push(StyleAdvisory::DegenerateSeries {
            axis,
            value: observed.min,
        });
        if Extent::new(min, max).is_degenerate() {
            let (low, high) = widen_constant(observed.min, options.scale);
            if explicit_min.is_none() {
                min = low;
            }
            if explicit_max.is_none() {
                max = high;
            }
        }
    }

    Extent::new(min, max)
}

// Range used around a constant value so interval division stays defined.
fn widen_constant(value: f64, scale: AxisScale) -> (f64, f64) {
    if scale.is_log() && value > 0.0 {
        return (value / 10.0, value * 10.0);
    }
    let pad = (value.abs() * 0.1).max(0.5);
    ((value - pad).max(f64::MIN), (value + pad).min(f64::MAX))
}

fn resolve_linear_locators(
    axis: AxisKind,
    bounds: Extent,
    options: &AxisOptions,
    advisories: &mut AxisAdvisories,
) -> (MajorLocator, MinorLocator) {
    let explicit_major = valid_interval(axis, TickSet::Major, options.major_interval, advisories);
    let explicit_minor = valid_interval(axis, TickSet::Minor, options.minor_interval, advisories);

    let computed_major = if bounds.is_degenerate() {
        advisories.push(StyleAdvisory::ZeroWidthBounds {
            axis,
            min: bounds.min,
            max: bounds.max,
        });
        None
    } else if explicit_major.is_some() {
        None
    } else {
        let major_ticks = match options.major_ticks {
            Some(count) if count >= 2 => count,
            Some(count) => {
                advisories.push(StyleAdvisory::InvalidMajorTickCount {
                    axis,
                    requested: count,
                    fallback: DEFAULT_MAJOR_TICKS,
                });
                DEFAULT_MAJOR_TICKS
            }
            None => DEFAULT_MAJOR_TICKS,
        };
        let interval = step_over(bounds, major_ticks - 1);
        if interval.is_finite() {
            Some(interval)
        } else {
            advisories.push(StyleAdvisory::UnrepresentableTickInterval {
                axis,
                min: bounds.min,
                max: bounds.max,
            });
            None
        }
    };

    let Some(major_interval) = explicit_major.or(computed_major) else {
        let minor = explicit_minor.map_or(MinorLocator::Auto, |interval| MinorLocator::Multiple {
            interval,
        });
        return (MajorLocator::Auto, minor);
    };

    let minor_interval = explicit_minor.unwrap_or_else(|| {
        let per_major = options
            .minor_ticks_per_major
            .unwrap_or(DEFAULT_MINOR_TICKS_PER_MAJOR);
        major_interval / (per_major as f64 + 1.0)
    });

    (
        MajorLocator::Multiple {
            interval: major_interval,
        },
        MinorLocator::Multiple {
            interval: minor_interval,
        },
    )
}

// Halves before subtracting so bounds near `f64::MAX` still give a finite span.
fn step_over(bounds: Extent, steps: usize) -> f64 {
    let half_span = (bounds.max / 2.0 - bounds.min / 2.0).abs();
    half_span / steps as f64 * 2.0
}

fn valid_interval(
    axis: AxisKind,
    which: TickSet,
    requested: Option<f64>,
    advisories: &mut AxisAdvisories,
) -> Option<f64> {
    let requested = requested?;
    if requested.is_finite() && requested > 0.0 {
        return Some(requested);
    }
    advisories.push(StyleAdvisory::InvalidTickInterval {
        axis,
        which,
        requested,
    });
    None
}

// Keeps the finite positions, plus their labels when the counts match.
// `None` when no finite position remains.
fn resolve_explicit_ticks(
    axis: AxisKind,
    positions: &[f64],
    options: &AxisOptions,
    advisories: &mut AxisAdvisories,
) -> Option<(Vec<f64>, Vec<String>)> {
    let paired = options
        .tick_labels
        .as_deref()
        .filter(|labels| labels.len() == positions.len());

    let mut kept = Vec::with_capacity(positions.len());
    let mut kept_labels = paired.map(|_| Vec::with_capacity(positions.len()));
    for (index, &value) in positions.iter().enumerate() {
        if !value.is_finite() {
            continue;
        }
        kept.push(value);
        if let (Some(out), Some(labels)) = (kept_labels.as_mut(), paired) {
            out.push(labels[index].clone());
        }
    }

    let dropped = positions.len() - kept.len();
    if dropped > 0 {
        advisories.push(StyleAdvisory::NonFiniteTickPositions { axis, dropped });
    }
    if kept.is_empty() {
        return None;
    }

    if let Some(labels) = kept_labels {
        return Some((kept, labels));
    }
    let reason = match &options.tick_labels {
        Some(labels) => LabelSynthesisReason::CountMismatch {
            positions: positions.len(),
            labels: labels.len(),
        },
        None => LabelSynthesisReason::Missing,
    };
    advisories.push(StyleAdvisory::SynthesizedTickLabels { axis, reason });
    let labels = kept.iter().map(|value| format_plain(*value)).collect();
    Some((kept, labels))
}

#[cfg(test)]
mod tests {
    use super::{step_over, widen_constant};
    use crate::core::{AxisScale, Extent};

    #[test]
    fn constant_values_widen_to_a_usable_span() {
        assert_eq!(widen_constant(2.0, AxisScale::Linear), (1.5, 2.5));
        assert_eq!(widen_constant(100.0, AxisScale::Linear), (90.0, 110.0));
        assert_eq!(widen_constant(0.0, AxisScale::Linear), (-0.5, 0.5));
    }

    #[test]
    fn constants_near_the_float_limit_stay_finite() {
        let (low, high) = widen_constant(f64::MAX, AxisScale::Linear);
        assert!(low.is_finite());
        assert_eq!(high, f64::MAX);
    }

    #[test]
    fn step_over_matches_plain_division_and_survives_wide_bounds() {
        assert_eq!(step_over(Extent::new(0.0, 4.0), 4), 1.0);
        assert_eq!(step_over(Extent::new(4.0, 0.0), 4), 1.0);
        assert_eq!(step_over(Extent::new(-1.0e308, 1.0e308), 4), 5.0e307);
        assert!(step_over(Extent::new(-f64::MAX, f64::MAX), 1).is_infinite());
    }

    #[test]
    fn positive_constants_widen_by_a_decade_on_log_axes() {
        assert_eq!(widen_constant(5.0, AxisScale::Log), (0.5, 50.0));
        assert_eq!(widen_constant(-5.0, AxisScale::Log), (-5.5, -4.5));
    }
}
