use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Figure-wide defaults applied once when a figure is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub line_width: f64,
    pub axes_line_width: f64,
    pub font_size: f64,
    pub font_family: String,
    pub serif_font: String,
    pub math_font: String,
    /// Colors assigned to successive curves without an explicit color.
    pub color_cycle: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            axes_line_width: 1.5,
            font_size: 22.0,
            font_family: "serif".to_owned(),
            serif_font: "Times New Roman".to_owned(),
            math_font: "stix".to_owned(),
            color_cycle: vec![
                Color::rgb8(0xD2, 0x00, 0x00),
                Color::rgb8(0x2d, 0x2d, 0xff),
                Color::rgb8(0x00, 0xD2, 0x00),
                Color::BLACK,
                Color::rgb8(0xFF, 0x00, 0xFF),
            ],
        }
    }
}
