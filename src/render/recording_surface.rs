use std::path::{Path, PathBuf};

use tracing::trace;

use crate::core::{AxisKind, AxisScale, DataSeries, FieldGrid};
use crate::error::{StyleError, StyleResult};
use crate::render::{
    AxisLabelSpec, ColorbarSpec, ContourStroke, ExportOptions, FieldPaint, GridSpec, LegendSpec,
    LineStroke, MajorLocator, MinorLocator, PlotSurface, SurfaceCommand, TextSpec, Theme,
    TickDirection, TickFormatter, TickSet, TitleSpec,
};

/// Headless surface that records every call instead of drawing.
///
/// It still validates numeric input so tests catch non-finite limits or
/// invalid colors before a real backend is involved. Saving records the
/// request and the target path without touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    saved_files: Vec<PathBuf>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Commands targeting `axis`, in call order.
    pub fn commands_for(&self, axis: AxisKind) -> impl Iterator<Item = &SurfaceCommand> {
        self.commands
            .iter()
            .filter(move |command| command.axis() == Some(axis))
    }

    #[must_use]
    pub fn saved_files(&self) -> &[PathBuf] {
        &self.saved_files
    }

    /// Forgets everything recorded so far, like closing and reopening a figure.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.saved_files.clear();
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<SurfaceCommand> {
        self.commands
    }

    pub fn to_json_pretty(&self) -> StyleResult<String> {
        serde_json::to_string_pretty(&self.commands).map_err(|e| {
            StyleError::Surface(format!("failed to serialize command log: {e}"))
        })
    }

    fn record(&mut self, command: SurfaceCommand) -> StyleResult<()> {
        trace!(?command, "record surface command");
        self.commands.push(command);
        Ok(())
    }
}

impl PlotSurface for RecordingSurface {
    fn apply_theme(&mut self, theme: &Theme) -> StyleResult<()> {
        for color in &theme.color_cycle {
            color.validate()?;
        }
        self.record(SurfaceCommand::ApplyTheme {
            theme: theme.clone(),
        })
    }

    fn draw_line(&mut self, series: &DataSeries, stroke: &LineStroke) -> StyleResult<()> {
        stroke.color.validate()?;
        if let Some(face) = stroke.marker_face_color {
            face.validate()?;
        }
        ensure_positive("line width", stroke.width)?;
        self.record(SurfaceCommand::DrawLine {
            points: series.len(),
            stroke: stroke.clone(),
        })
    }

    fn draw_field(&mut self, grid: &FieldGrid, paint: &FieldPaint) -> StyleResult<()> {
        ensure_finite("field value min", paint.value_min)?;
        ensure_finite("field value max", paint.value_max)?;
        self.record(SurfaceCommand::DrawField {
            rows: grid.rows(),
            cols: grid.cols(),
            paint: paint.clone(),
        })
    }

    fn draw_contour_lines(&mut self, grid: &FieldGrid, stroke: &ContourStroke) -> StyleResult<()> {
        for color in &stroke.colors {
            color.validate()?;
        }
        self.record(SurfaceCommand::DrawContourLines {
            rows: grid.rows(),
            cols: grid.cols(),
            stroke: stroke.clone(),
        })
    }

    fn draw_colorbar(&mut self, colorbar: &ColorbarSpec) -> StyleResult<()> {
        for tick in &colorbar.ticks {
            ensure_finite("colorbar tick", *tick)?;
        }
        self.record(SurfaceCommand::DrawColorbar {
            colorbar: colorbar.clone(),
        })
    }

    fn draw_text(&mut self, text: &TextSpec) -> StyleResult<()> {
        ensure_finite("text x", text.x)?;
        ensure_finite("text y", text.y)?;
        text.color.validate()?;
        self.record(SurfaceCommand::DrawText { text: text.clone() })
    }

    fn set_axis_label(&mut self, axis: AxisKind, label: &AxisLabelSpec) -> StyleResult<()> {
        self.record(SurfaceCommand::SetAxisLabel {
            axis,
            label: label.clone(),
        })
    }

    fn set_title(&mut self, title: &TitleSpec) -> StyleResult<()> {
        self.record(SurfaceCommand::SetTitle {
            title: title.clone(),
        })
    }

    fn set_limits(&mut self, axis: AxisKind, min: f64, max: f64) -> StyleResult<()> {
        ensure_finite("axis min", min)?;
        ensure_finite("axis max", max)?;
        self.record(SurfaceCommand::SetLimits { axis, min, max })
    }

    fn set_scale(&mut self, axis: AxisKind, scale: AxisScale) -> StyleResult<()> {
        self.record(SurfaceCommand::SetScale { axis, scale })
    }

    fn set_tick_direction(&mut self, direction: TickDirection) -> StyleResult<()> {
        self.record(SurfaceCommand::SetTickDirection { direction })
    }

    fn set_major_locator(&mut self, axis: AxisKind, locator: &MajorLocator) -> StyleResult<()> {
        if let Some(interval) = locator.interval() {
            ensure_positive("major tick interval", interval)?;
        }
        self.record(SurfaceCommand::SetMajorLocator {
            axis,
            locator: locator.clone(),
        })
    }

    fn set_minor_locator(&mut self, axis: AxisKind, locator: &MinorLocator) -> StyleResult<()> {
        if let Some(interval) = locator.interval() {
            ensure_positive("minor tick interval", interval)?;
        }
        self.record(SurfaceCommand::SetMinorLocator {
            axis,
            locator: locator.clone(),
        })
    }

    fn set_tick_labels(&mut self, axis: AxisKind, labels: &[String]) -> StyleResult<()> {
        self.record(SurfaceCommand::SetTickLabels {
            axis,
            labels: labels.to_vec(),
        })
    }

    fn set_minor_labels_visible(&mut self, axis: AxisKind, visible: bool) -> StyleResult<()> {
        self.record(SurfaceCommand::SetMinorLabelsVisible { axis, visible })
    }

    fn set_major_formatter(
        &mut self,
        axis: AxisKind,
        formatter: TickFormatter,
    ) -> StyleResult<()> {
        self.record(SurfaceCommand::SetMajorFormatter { axis, formatter })
    }

    fn set_equal_aspect(&mut self) -> StyleResult<()> {
        self.record(SurfaceCommand::SetEqualAspect)
    }

    fn set_legend(&mut self, legend: &LegendSpec) -> StyleResult<()> {
        self.record(SurfaceCommand::SetLegend { legend: *legend })
    }

    fn set_grid(&mut self, which: TickSet, grid: &GridSpec) -> StyleResult<()> {
        if let Some(color) = grid.color {
            color.validate()?;
        }
        self.record(SurfaceCommand::SetGrid { which, grid: *grid })
    }

    fn set_figure_size(&mut self, width_in: f64, height_in: f64) -> StyleResult<()> {
        ensure_positive("figure width", width_in)?;
        ensure_positive("figure height", height_in)?;
        self.record(SurfaceCommand::SetFigureSize {
            width_in,
            height_in,
        })
    }

    fn save_figure(&mut self, path: &Path, options: &ExportOptions) -> StyleResult<()> {
        self.saved_files.push(path.to_path_buf());
        self.record(SurfaceCommand::SaveFigure {
            path: path.to_path_buf(),
            options: *options,
        })
    }
}

fn ensure_finite(what: &str, value: f64) -> StyleResult<()> {
    if !value.is_finite() {
        return Err(StyleError::InvalidData(format!("{what} must be finite")));
    }
    Ok(())
}

fn ensure_positive(what: &str, value: f64) -> StyleResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(StyleError::InvalidData(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(())
}
