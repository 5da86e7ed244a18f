mod commands;
mod draw;
mod export;
mod locator;
mod primitives;
mod recording_surface;
mod theme;

pub use commands::SurfaceCommand;
pub use draw::{
    AxisLabelSpec, ColorbarSpec, ContourLevels, ContourStroke, FieldMode, FieldPaint, GridSpec,
    LegendSpec, LineStroke, TextSpec, TickSet, TitleSpec,
};
pub use export::{ExportOptions, ImageFormat};
pub use locator::{MajorLocator, MinorLocator, TickFormatter, format_plain};
pub use primitives::{
    Color, FontWeight, LegendLocation, LineDash, Marker, Orientation, Shading, TextHAlign,
    TextVAlign, TickDirection,
};
pub use recording_surface::RecordingSurface;
pub use theme::Theme;

use std::path::Path;

use crate::core::{AxisKind, AxisScale, DataSeries, FieldGrid};
use crate::error::StyleResult;

/// Contract implemented by any plotting backend.
///
/// A surface owns one figure with a single set of axes. Every method
/// configures or draws into that figure; calls are expected to be idempotent
/// so re-applying a style to a fresh surface reproduces the same figure.
/// Errors are reserved for backend failures (for example I/O while saving).
pub trait PlotSurface {
    fn apply_theme(&mut self, theme: &Theme) -> StyleResult<()>;

    fn draw_line(&mut self, series: &DataSeries, stroke: &LineStroke) -> StyleResult<()>;

    fn draw_field(&mut self, grid: &FieldGrid, paint: &FieldPaint) -> StyleResult<()>;

    fn draw_contour_lines(&mut self, grid: &FieldGrid, stroke: &ContourStroke) -> StyleResult<()>;

    fn draw_colorbar(&mut self, colorbar: &ColorbarSpec) -> StyleResult<()>;

    fn draw_text(&mut self, text: &TextSpec) -> StyleResult<()>;

    fn set_axis_label(&mut self, axis: AxisKind, label: &AxisLabelSpec) -> StyleResult<()>;

    fn set_title(&mut self, title: &TitleSpec) -> StyleResult<()>;

    fn set_limits(&mut self, axis: AxisKind, min: f64, max: f64) -> StyleResult<()>;

    fn set_scale(&mut self, axis: AxisKind, scale: AxisScale) -> StyleResult<()>;

    /// Applies to major and minor ticks of both axes.
    fn set_tick_direction(&mut self, direction: TickDirection) -> StyleResult<()>;

    fn set_major_locator(&mut self, axis: AxisKind, locator: &MajorLocator) -> StyleResult<()>;

    fn set_minor_locator(&mut self, axis: AxisKind, locator: &MinorLocator) -> StyleResult<()>;

    /// Replaces major tick labels; `labels` pairs with the fixed positions.
    fn set_tick_labels(&mut self, axis: AxisKind, labels: &[String]) -> StyleResult<()>;

    fn set_minor_labels_visible(&mut self, axis: AxisKind, visible: bool) -> StyleResult<()>;

    fn set_major_formatter(&mut self, axis: AxisKind, formatter: TickFormatter)
    -> StyleResult<()>;

    fn set_equal_aspect(&mut self) -> StyleResult<()>;

    fn set_legend(&mut self, legend: &LegendSpec) -> StyleResult<()>;

    fn set_grid(&mut self, which: TickSet, grid: &GridSpec) -> StyleResult<()>;

    fn set_figure_size(&mut self, width_in: f64, height_in: f64) -> StyleResult<()>;

    fn save_figure(&mut self, path: &Path, options: &ExportOptions) -> StyleResult<()>;
}
