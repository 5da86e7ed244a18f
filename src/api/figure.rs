use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AxisKind, AxisScale, DataSeries, Extent, FieldGrid, linspace};
use crate::error::StyleResult;
use crate::render::{
    AxisLabelSpec, Color, ColorbarSpec, ContourLevels, ContourStroke, ExportOptions, FieldMode,
    FieldPaint, GridSpec, LegendSpec, LineStroke, PlotSurface, TextSpec, Theme, TickDirection,
    TickFormatter, TickSet, TitleSpec,
};

use super::style_checks::StyleChecks;
use super::{
    AxisOptions, AxisResolution, AxisTitle, ContourLineStyle, ContourStyle, GridOptions, LineStyle,
    StyleAdvisory, StyleReport, TextStyle, apply_axis, resolve_axes,
};

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub path: PathBuf,
    pub advisories: Vec<StyleAdvisory>,
}

/// One figure bound to an explicit plotting surface.
///
/// Every styling call resolves its options first and then issues the
/// corresponding surface calls; nothing is shared between figures.
pub struct Figure<S: PlotSurface> {
    surface: S,
    theme: Theme,
    legend_entries: IndexMap<String, Color>,
}

impl<S: PlotSurface> Figure<S> {
    /// Creates a figure with the default theme.
    pub fn new(surface: S) -> StyleResult<Self> {
        Self::with_theme(surface, Theme::default())
    }

    pub fn with_theme(mut surface: S, theme: Theme) -> StyleResult<Self> {
        surface.apply_theme(&theme)?;
        Ok(Self {
            surface,
            theme,
            legend_entries: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Legend labels drawn so far, in drawing order.
    #[must_use]
    pub fn legend_entries(&self) -> &IndexMap<String, Color> {
        &self.legend_entries
    }

    /// Draws a curve and configures labels, limits, ticks, legend and grid.
    pub fn plot_line(
        &mut self,
        series: &DataSeries,
        style: &LineStyle,
    ) -> StyleResult<StyleReport> {
        let mut checks = StyleChecks::new();
        let stroke = LineStroke {
            color: checks.color("color", style.color, Color::BLACK),
            width: checks.positive("line_width", style.line_width, self.theme.line_width),
            dash: style.dash,
            marker: style.marker,
            marker_size: checks.positive("marker_size", style.marker_size, 8.0),
            marker_face_color: style
                .marker_face_color
                .map(|face| checks.color("marker_face_color", face, Color::WHITE)),
            mark_every: checks.count("mark_every", style.mark_every, 1, 1),
            legend_label: style.legend_label.clone(),
            z_order: style.z_order,
            clip: style.clip,
        };
        let title_font_size =
            checks.positive("title_font_size", style.title_font_size, self.theme.font_size);
        let legend = LegendSpec {
            location: style.legend.location,
            font_size: checks.positive(
                "legend.font_size",
                style.legend.font_size,
                self.theme.font_size,
            ),
            columns: checks.count("legend.columns", style.legend.columns, 1, 1),
            frame: style.legend.frame,
        };
        let grid = grid_spec(&mut checks, &style.grid);

        let resolution = resolve_axes(series, &style.x_axis, &style.y_axis);
        debug!(
            points = series.len(),
            scale_mode = ?resolution.scale_mode,
            "plot line"
        );

        self.surface.draw_line(series, &stroke)?;
        self.apply_labels(&style.x_label, &style.y_label, &style.title, Some(title_font_size))?;
        self.apply_resolution(&resolution)?;
        if style.equal_aspect {
            self.surface.set_equal_aspect()?;
        }

        if let Some(label) = &stroke.legend_label {
            self.legend_entries.insert(label.clone(), stroke.color);
        }
        if style.legend.show {
            self.surface.set_legend(&legend)?;
        }
        if let Some(grid) = grid {
            self.apply_grid(&grid)?;
        }

        Ok(finish_report(resolution, checks))
    }

    /// Paints a scalar field and configures labels, limits, ticks, colorbar and grid.
    ///
    /// Field axes are always linear; a log scale in the axis options is
    /// replaced with an advisory.
    pub fn plot_field(
        &mut self,
        field: &FieldGrid,
        style: &ContourStyle,
    ) -> StyleResult<StyleReport> {
        let mut checks = StyleChecks::new();
        let (value_min, value_max) = resolve_value_range(&mut checks, field.value_extent(), style);
        let mode = match style.mode {
            FieldMode::FilledContour { levels } => FieldMode::FilledContour {
                levels: checks.count(
                    "levels",
                    levels,
                    1,
                    ContourStyle::DEFAULT_FILLED_LEVELS,
                ),
            },
            mesh @ FieldMode::Mesh { .. } => mesh,
        };
        let paint = FieldPaint {
            mode,
            colormap: style.colormap.clone(),
            alpha: checks.fraction("alpha", style.alpha, 1.0),
            value_min,
            value_max,
            antialiased: style.antialiased,
            edge_width: checks.non_negative("edge_width", style.edge_width, 1.0),
        };
        let colorbar = style
            .colorbar
            .show
            .then(|| colorbar_spec(&mut checks, style, value_min, value_max));
        let grid = grid_spec(&mut checks, &style.grid);

        let x_axis = linear_axis(&mut checks, "x_axis.scale", &style.x_axis);
        let y_axis = linear_axis(&mut checks, "y_axis.scale", &style.y_axis);

        let resolution =
            AxisResolution::from_extents(field.x_extent(), field.y_extent(), &x_axis, &y_axis);
        debug!(
            rows = field.rows(),
            cols = field.cols(),
            value_min,
            value_max,
            "plot field"
        );

        self.surface.draw_field(field, &paint)?;
        self.apply_labels(&style.x_label, &style.y_label, &style.title, None)?;
        self.apply_resolution(&resolution)?;
        if style.equal_aspect {
            self.surface.set_equal_aspect()?;
        }
        if let Some(colorbar) = colorbar {
            self.surface.draw_colorbar(&colorbar)?;
        }
        if let Some(grid) = grid {
            self.apply_grid(&grid)?;
        }

        Ok(finish_report(resolution, checks))
    }

    /// Draws iso-lines of `field` without touching axes or labels.
    pub fn plot_contour_lines(
        &mut self,
        field: &FieldGrid,
        style: &ContourLineStyle,
    ) -> StyleResult<Vec<StyleAdvisory>> {
        let mut checks = StyleChecks::new();
        let levels = match &style.levels {
            ContourLevels::Count(count) => {
                ContourLevels::Count(checks.count("levels", *count, 1, 1))
            }
            ContourLevels::Values(values) => {
                let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
                if finite.len() != values.len() {
                    checks.push(StyleAdvisory::InvalidStyleValue {
                        field: "levels".to_owned(),
                        requested: format!("{values:?}"),
                        fallback: format!("{finite:?}"),
                    });
                }
                ContourLevels::Values(finite)
            }
        };
        let mut colors: Vec<Color> = style
            .colors
            .iter()
            .map(|color| checks.color("colors", *color, Color::BLACK))
            .collect();
        if colors.is_empty() {
            colors.push(Color::BLACK);
        }
        let stroke = ContourStroke {
            levels,
            colors,
            width: checks.positive("width", style.width, 1.0),
            dash: style.dash,
        };

        self.surface.draw_contour_lines(field, &stroke)?;
        Ok(checks.into_advisories())
    }

    /// Places a boxed text annotation at data coordinates `(x, y)`.
    pub fn annotate(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        style: &TextStyle,
    ) -> StyleResult<Vec<StyleAdvisory>> {
        let mut checks = StyleChecks::new();
        let spec = TextSpec {
            text: text.into(),
            x: checks.finite("x", x, 0.0),
            y: checks.finite("y", y, 0.0),
            font_size: checks.positive("font_size", style.font_size, self.theme.font_size),
            weight: style.weight,
            color: checks.color("color", style.color, Color::BLACK),
            rotation_deg: checks.finite("rotation_deg", style.rotation_deg, 0.0),
            h_align: style.h_align,
            v_align: style.v_align,
            box_face: checks.color("box_face", style.box_face, Color::WHITE),
            box_edge: checks.color("box_edge", style.box_edge, Color::WHITE),
        };

        self.surface.draw_text(&spec)?;
        Ok(checks.into_advisories())
    }

    /// Prints `0` at the x origin and one decimal elsewhere.
    pub fn format_origin(&mut self) -> StyleResult<()> {
        self.surface
            .set_major_formatter(AxisKind::X, TickFormatter::OriginAware { decimals: 1 })
    }

    /// Saves the figure as `<base_name>.<extension>`.
    pub fn save(&mut self, base_name: &str, options: &ExportOptions) -> StyleResult<ExportReport> {
        let mut checks = StyleChecks::new();
        let defaults = ExportOptions::default();
        let mut options = *options;
        if options.dpi == 0 {
            checks.push(StyleAdvisory::InvalidStyleValue {
                field: "dpi".to_owned(),
                requested: "0".to_owned(),
                fallback: defaults.dpi.to_string(),
            });
            options.dpi = defaults.dpi;
        }
        options.pad_inches =
            checks.non_negative("pad_inches", options.pad_inches, defaults.pad_inches);
        if let Some([width, height]) = options.size_inches {
            if width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0 {
                self.surface.set_figure_size(width, height)?;
            } else {
                checks.push(StyleAdvisory::InvalidStyleValue {
                    field: "size_inches".to_owned(),
                    requested: format!("[{width}, {height}]"),
                    fallback: "current size".to_owned(),
                });
                options.size_inches = None;
            }
        }

        let path = options.file_path(base_name);
        debug!(path = %path.display(), dpi = options.dpi, format = ?options.format, "save figure");
        self.surface.save_figure(&path, &options)?;
        Ok(ExportReport {
            path,
            advisories: checks.into_advisories(),
        })
    }

    fn apply_labels(
        &mut self,
        x_label: &AxisTitle,
        y_label: &AxisTitle,
        title: &str,
        title_font_size: Option<f64>,
    ) -> StyleResult<()> {
        self.surface.set_axis_label(AxisKind::X, &axis_label_spec(x_label))?;
        self.surface.set_axis_label(AxisKind::Y, &axis_label_spec(y_label))?;
        self.surface.set_title(&TitleSpec {
            text: title.to_owned(),
            font_size: title_font_size,
        })
    }

    fn apply_resolution(&mut self, resolution: &AxisResolution) -> StyleResult<()> {
        self.surface.set_tick_direction(TickDirection::In)?;
        apply_axis(&mut self.surface, &resolution.x)?;
        apply_axis(&mut self.surface, &resolution.y)
    }

    fn apply_grid(&mut self, grid: &GridSpec) -> StyleResult<()> {
        self.surface.set_grid(TickSet::Major, grid)?;
        self.surface.set_grid(TickSet::Minor, grid)
    }
}

fn axis_label_spec(title: &AxisTitle) -> AxisLabelSpec {
    AxisLabelSpec {
        text: title.text.clone(),
        pad: if title.pad.is_finite() { title.pad } else { 0.0 },
        rotation_deg: if title.rotation_deg.is_finite() {
            title.rotation_deg
        } else {
            0.0
        },
    }
}

fn linear_axis(checks: &mut StyleChecks, field: &str, options: &AxisOptions) -> AxisOptions {
    let mut options = options.clone();
    if options.scale.is_log() {
        checks.push(StyleAdvisory::InvalidStyleValue {
            field: field.to_owned(),
            requested: "log".to_owned(),
            fallback: "linear".to_owned(),
        });
        options.scale = AxisScale::Linear;
    }
    options
}

fn grid_spec(checks: &mut StyleChecks, grid: &GridOptions) -> Option<GridSpec> {
    if !grid.show {
        return None;
    }
    Some(GridSpec {
        color: grid
            .color
            .map(|color| checks.color("grid.color", color, Color::BLACK)),
        width: checks.non_negative("grid.width", grid.width, 1.0),
        dash: grid.dash,
    })
}

fn resolve_value_range(
    checks: &mut StyleChecks,
    observed: Extent,
    style: &ContourStyle,
) -> (f64, f64) {
    let value_min = style
        .value_min
        .map_or(observed.min, |value| checks.finite("value_min", value, observed.min));
    let value_max = style
        .value_max
        .map_or(observed.max, |value| checks.finite("value_max", value, observed.max));
    if value_min > value_max {
        checks.push(StyleAdvisory::InvertedValueRange {
            value_min,
            value_max,
        });
        return (value_max, value_min);
    }
    (value_min, value_max)
}

fn colorbar_spec(
    checks: &mut StyleChecks,
    style: &ContourStyle,
    value_min: f64,
    value_max: f64,
) -> ColorbarSpec {
    let options = &style.colorbar;
    let tick_count = if options.tick_count >= 2 {
        options.tick_count
    } else {
        checks.push(StyleAdvisory::InvalidColorbarTickCount {
            requested: options.tick_count,
            fallback: 2,
        });
        2
    };
    ColorbarSpec {
        label: options.label.clone(),
        orientation: options.orientation,
        shrink: checks.positive("colorbar.shrink", options.shrink, 1.0),
        tick_length: checks.non_negative("colorbar.tick_length", options.tick_length, 0.02),
        position: options.position,
        label_pad: options.label_pad,
        ticks: linspace((value_min, value_max), tick_count),
        value_min,
        value_max,
    }
}

fn finish_report(resolution: AxisResolution, mut checks: StyleChecks) -> StyleReport {
    let AxisResolution {
        x, y, advisories, ..
    } = resolution;
    checks.extend(advisories);
    let advisories = checks.into_advisories();
    if !advisories.is_empty() {
        warn!(count = advisories.len(), "style applied with advisories");
    }
    StyleReport {
        x_axis: x,
        y_axis: y,
        advisories,
    }
}
