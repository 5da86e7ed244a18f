use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, AxisScale};
use crate::render::{
    AxisLabelSpec, ColorbarSpec, ContourStroke, ExportOptions, FieldPaint, GridSpec, LegendSpec,
    LineStroke, MajorLocator, MinorLocator, TextSpec, Theme, TickDirection, TickFormatter,
    TickSet, TitleSpec,
};

/// One configuration call received by a surface, in owned form.
///
/// Draw calls keep the styling and the data shape rather than the data itself
/// so command logs stay small and comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "command")]
pub enum SurfaceCommand {
    ApplyTheme {
        theme: Theme,
    },
    DrawLine {
        points: usize,
        stroke: LineStroke,
    },
    DrawField {
        rows: usize,
        cols: usize,
        paint: FieldPaint,
    },
    DrawContourLines {
        rows: usize,
        cols: usize,
        stroke: ContourStroke,
    },
    DrawColorbar {
        colorbar: ColorbarSpec,
    },
    DrawText {
        text: TextSpec,
    },
    SetAxisLabel {
        axis: AxisKind,
        label: AxisLabelSpec,
    },
    SetTitle {
        title: TitleSpec,
    },
    SetLimits {
        axis: AxisKind,
        min: f64,
        max: f64,
    },
    SetScale {
        axis: AxisKind,
        scale: AxisScale,
    },
    SetTickDirection {
        direction: TickDirection,
    },
    SetMajorLocator {
        axis: AxisKind,
        locator: MajorLocator,
    },
    SetMinorLocator {
        axis: AxisKind,
        locator: MinorLocator,
    },
    SetTickLabels {
        axis: AxisKind,
        labels: Vec<String>,
    },
    SetMinorLabelsVisible {
        axis: AxisKind,
        visible: bool,
    },
    SetMajorFormatter {
        axis: AxisKind,
        formatter: TickFormatter,
    },
    SetEqualAspect,
    SetLegend {
        legend: LegendSpec,
    },
    SetGrid {
        which: TickSet,
        grid: GridSpec,
    },
    SetFigureSize {
        width_in: f64,
        height_in: f64,
    },
    SaveFigure {
        path: PathBuf,
        options: ExportOptions,
    },
}

impl SurfaceCommand {
    /// Axis targeted by the command, if any.
    #[must_use]
    pub fn axis(&self) -> Option<AxisKind> {
        match self {
            Self::SetAxisLabel { axis, .. }
            | Self::SetLimits { axis, .. }
            | Self::SetScale { axis, .. }
            | Self::SetMajorLocator { axis, .. }
            | Self::SetMinorLocator { axis, .. }
            | Self::SetTickLabels { axis, .. }
            | Self::SetMinorLabelsVisible { axis, .. }
            | Self::SetMajorFormatter { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}
