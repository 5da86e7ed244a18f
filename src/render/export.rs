use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output encoding requested from the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    Eps,
    Jpg,
}

impl ImageFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Eps => "eps",
            Self::Jpg => "jpg",
        }
    }

    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Svg | Self::Pdf | Self::Eps)
    }
}

/// Save-time options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// `[width, height]` in inches; `None` keeps the current figure size.
    pub size_inches: Option<[f64; 2]>,
    pub dpi: u32,
    pub format: ImageFormat,
    /// Crop to the drawn content.
    pub tight_bbox: bool,
    pub pad_inches: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            size_inches: None,
            dpi: 300,
            format: ImageFormat::Png,
            tight_bbox: true,
            pad_inches: 0.1,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_size_inches(mut self, width: f64, height: f64) -> Self {
        self.size_inches = Some([width, height]);
        self
    }

    /// `base_name` followed by `.` and the format extension.
    #[must_use]
    pub fn file_path(&self, base_name: &str) -> PathBuf {
        PathBuf::from(format!("{base_name}.{}", self.format.extension()))
    }
}
