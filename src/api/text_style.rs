use serde::{Deserialize, Serialize};

use crate::render::{Color, FontWeight, TextHAlign, TextVAlign};

/// Font and box options of a free-standing annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub rotation_deg: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub box_face: Color,
    pub box_edge: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 22.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            rotation_deg: 0.0,
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Bottom,
            box_face: Color::WHITE,
            box_edge: Color::WHITE,
        }
    }
}
