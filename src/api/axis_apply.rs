use tracing::trace;

use crate::error::StyleResult;
use crate::render::PlotSurface;

use super::ResolvedAxis;

/// Issues the configuration calls for one resolved axis.
///
/// Order: limits, scale, major locator, minor locator, fixed labels,
/// minor-label visibility, formatter.
pub fn apply_axis<S: PlotSurface>(surface: &mut S, resolved: &ResolvedAxis) -> StyleResult<()> {
    let axis = resolved.axis;
    trace!(axis = axis.name(), "apply resolved axis");

    surface.set_limits(axis, resolved.bounds.min, resolved.bounds.max)?;
    surface.set_scale(axis, resolved.scale)?;
    surface.set_major_locator(axis, &resolved.major)?;
    surface.set_minor_locator(axis, &resolved.minor)?;
    if let Some(labels) = &resolved.tick_labels {
        surface.set_tick_labels(axis, labels)?;
    }
    surface.set_minor_labels_visible(axis, resolved.minor_labels_visible)?;
    surface.set_major_formatter(axis, resolved.formatter)
}
