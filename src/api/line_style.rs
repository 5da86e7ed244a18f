use serde::{Deserialize, Serialize};

use crate::render::{Color, LegendLocation, LineDash, Marker};

use super::AxisOptions;

/// Text, padding and rotation of an axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTitle {
    pub text: String,
    pub pad: f64,
    pub rotation_deg: f64,
}

impl AxisTitle {
    #[must_use]
    pub fn new(text: impl Into<String>, pad: f64, rotation_deg: f64) -> Self {
        Self {
            text: text.into(),
            pad,
            rotation_deg,
        }
    }
}

impl Default for AxisTitle {
    fn default() -> Self {
        Self::new("", 0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub show: bool,
    pub location: LegendLocation,
    pub font_size: f64,
    pub columns: usize,
    pub frame: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show: true,
            location: LegendLocation::Best,
            font_size: 22.0,
            columns: 1,
            frame: false,
        }
    }
}

/// Grid drawn on both major and minor ticks when shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub show: bool,
    pub color: Option<Color>,
    pub width: f64,
    pub dash: Option<LineDash>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            show: false,
            color: None,
            width: 1.0,
            dash: None,
        }
    }
}

/// Styling options of one curve and the axes it is drawn on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: Color,
    pub line_width: f64,
    pub dash: LineDash,
    pub marker: Marker,
    pub marker_size: f64,
    /// `None` draws hollow markers.
    pub marker_face_color: Option<Color>,
    /// Draw a marker on every n-th point.
    pub mark_every: usize,
    pub x_label: AxisTitle,
    pub y_label: AxisTitle,
    /// Entry shown in the legend.
    pub legend_label: Option<String>,
    pub title: String,
    pub title_font_size: f64,
    pub legend: LegendOptions,
    pub grid: GridOptions,
    pub equal_aspect: bool,
    pub z_order: i32,
    pub clip: bool,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::black()
    }
}

impl LineStyle {
    pub const RED: Color = Color::rgb8(0xD2, 0x00, 0x00);
    pub const BLUE: Color = Color::rgb8(0x2d, 0x2d, 0xff);
    pub const GREEN: Color = Color::rgb8(0x00, 0xD2, 0x00);

    /// Black solid line with a rotated y label.
    #[must_use]
    pub fn black() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 2.0,
            dash: LineDash::Solid,
            marker: Marker::None,
            marker_size: 8.0,
            marker_face_color: None,
            mark_every: 1,
            x_label: AxisTitle::new("$x$", 0.0, 0.0),
            y_label: AxisTitle::new("$y$", 0.0, 90.0),
            legend_label: Some("line 1".to_owned()),
            title: "my title".to_owned(),
            title_font_size: 22.0,
            legend: LegendOptions::default(),
            grid: GridOptions::default(),
            equal_aspect: false,
            z_order: 3,
            clip: true,
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
        }
    }

    #[must_use]
    pub fn red() -> Self {
        Self::black().with_upright_y_label().with_color(Self::RED)
    }

    #[must_use]
    pub fn blue() -> Self {
        Self::black().with_upright_y_label().with_color(Self::BLUE)
    }

    #[must_use]
    pub fn green() -> Self {
        Self::black().with_upright_y_label().with_color(Self::GREEN)
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_legend_label(mut self, label: impl Into<String>) -> Self {
        self.legend_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label.text = x.into();
        self.y_label.text = y.into();
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, options: AxisOptions) -> Self {
        self.x_axis = options;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, options: AxisOptions) -> Self {
        self.y_axis = options;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.legend.show = false;
        self
    }

    // Horizontal y label pushed away from the tick labels.
    fn with_upright_y_label(mut self) -> Self {
        self.y_label.pad = 16.0;
        self.y_label.rotation_deg = 0.0;
        self
    }
}
