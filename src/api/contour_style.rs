use serde::{Deserialize, Serialize};

use crate::render::{Color, ContourLevels, FieldMode, LineDash, Orientation, Shading};

use super::{AxisOptions, AxisTitle, GridOptions};

/// Colorbar attached to a painted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorbarOptions {
    pub show: bool,
    /// Evenly spaced ticks from the value min to the value max.
    pub tick_count: usize,
    pub label: Option<String>,
    pub tick_length: f64,
    pub orientation: Orientation,
    pub shrink: f64,
    /// `[left, bottom, width, height]` in figure fractions.
    pub position: [f64; 4],
    pub label_pad: [f64; 2],
}

impl Default for ColorbarOptions {
    fn default() -> Self {
        Self {
            show: false,
            tick_count: 4,
            label: None,
            tick_length: 0.02,
            orientation: Orientation::Vertical,
            shrink: 1.0,
            position: [0.85, 0.15, 0.05, 0.7],
            label_pad: [0.0, 0.0],
        }
    }
}

/// Styling options of a painted scalar field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourStyle {
    pub mode: FieldMode,
    pub alpha: f64,
    pub colormap: String,
    pub x_label: AxisTitle,
    pub y_label: AxisTitle,
    pub title: String,
    /// Value mapped to the low end of the colormap; defaults to the field min.
    pub value_min: Option<f64>,
    /// Value mapped to the high end of the colormap; defaults to the field max.
    pub value_max: Option<f64>,
    pub colorbar: ColorbarOptions,
    pub antialiased: bool,
    /// Mesh edge width.
    pub edge_width: f64,
    pub grid: GridOptions,
    pub equal_aspect: bool,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
}

impl Default for ContourStyle {
    fn default() -> Self {
        Self {
            mode: FieldMode::Mesh {
                shading: Shading::Gouraud,
            },
            alpha: 1.0,
            colormap: "jet".to_owned(),
            x_label: AxisTitle::new("var 1", 0.0, 0.0),
            y_label: AxisTitle::new("var 2", 0.0, 90.0),
            title: "my title".to_owned(),
            value_min: None,
            value_max: None,
            colorbar: ColorbarOptions::default(),
            antialiased: true,
            edge_width: 1.0,
            grid: GridOptions {
                show: false,
                color: Some(Color::BLACK),
                width: 1.0,
                dash: Some(LineDash::Solid),
            },
            equal_aspect: false,
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
        }
    }
}

impl ContourStyle {
    pub const DEFAULT_FILLED_LEVELS: usize = 20;

    /// Filled contour bands instead of a mesh.
    #[must_use]
    pub fn filled() -> Self {
        Self {
            mode: FieldMode::FilledContour {
                levels: Self::DEFAULT_FILLED_LEVELS,
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value_range(mut self, value_min: f64, value_max: f64) -> Self {
        self.value_min = Some(value_min);
        self.value_max = Some(value_max);
        self
    }

    #[must_use]
    pub fn with_colorbar(mut self, colorbar: ColorbarOptions) -> Self {
        self.colorbar = colorbar;
        self
    }

    #[must_use]
    pub fn with_colormap(mut self, colormap: impl Into<String>) -> Self {
        self.colormap = colormap.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Styling options of iso-lines over a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourLineStyle {
    pub levels: ContourLevels,
    pub colors: Vec<Color>,
    pub width: f64,
    pub dash: LineDash,
}

impl Default for ContourLineStyle {
    fn default() -> Self {
        Self {
            levels: ContourLevels::Values(vec![0.0]),
            colors: vec![Color::BLACK],
            width: 1.0,
            dash: LineDash::Solid,
        }
    }
}

impl ContourLineStyle {
    #[must_use]
    pub fn with_levels(mut self, levels: Vec<f64>) -> Self {
        self.levels = ContourLevels::Values(levels);
        self
    }
}
