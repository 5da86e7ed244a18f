use serde::{Deserialize, Serialize};

use crate::render::{
    Color, FontWeight, LegendLocation, LineDash, Marker, Orientation, Shading, TextHAlign,
    TextVAlign,
};

/// Stroke and marker attributes of one drawn curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStroke {
    pub color: Color,
    pub width: f64,
    pub dash: LineDash,
    pub marker: Marker,
    pub marker_size: f64,
    /// `None` draws hollow markers.
    pub marker_face_color: Option<Color>,
    pub mark_every: usize,
    pub legend_label: Option<String>,
    pub z_order: i32,
    pub clip: bool,
}

/// How a scalar field is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMode {
    /// Quadrilateral mesh with per-vertex or per-cell colors.
    Mesh { shading: Shading },
    /// Filled contour bands.
    FilledContour { levels: usize },
}

impl Default for FieldMode {
    fn default() -> Self {
        Self::Mesh {
            shading: Shading::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPaint {
    pub mode: FieldMode,
    pub colormap: String,
    pub alpha: f64,
    pub value_min: f64,
    pub value_max: f64,
    pub antialiased: bool,
    pub edge_width: f64,
}

/// Iso-values for contour lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContourLevels {
    /// Let the surface choose this many levels.
    Count(usize),
    /// Draw exactly these iso-values.
    Values(Vec<f64>),
}

impl Default for ContourLevels {
    fn default() -> Self {
        Self::Values(vec![0.0])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourStroke {
    pub levels: ContourLevels,
    pub colors: Vec<Color>,
    pub width: f64,
    pub dash: LineDash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorbarSpec {
    pub label: Option<String>,
    pub orientation: Orientation,
    pub shrink: f64,
    pub tick_length: f64,
    /// `[left, bottom, width, height]` in figure fractions.
    pub position: [f64; 4],
    pub label_pad: [f64; 2],
    pub ticks: Vec<f64>,
    pub value_min: f64,
    pub value_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub rotation_deg: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub box_face: Color,
    pub box_edge: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelSpec {
    pub text: String,
    pub pad: f64,
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub text: String,
    /// `None` keeps the theme font size.
    pub font_size: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub location: LegendLocation,
    pub font_size: f64,
    pub columns: usize,
    pub frame: bool,
}

/// Which tick family a grid attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickSet {
    Major,
    Minor,
}

/// Grid lines; `None` fields keep the surface default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub color: Option<Color>,
    pub width: f64,
    pub dash: Option<LineDash>,
}
