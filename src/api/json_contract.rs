use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StyleError, StyleResult};
use crate::render::{ExportOptions, Theme};

use super::{AxisOptions, ContourLineStyle, ContourStyle, LineStyle, StyleReport, TextStyle};

pub const STYLE_REPORT_JSON_SCHEMA_V1: u32 = 1;

/// JSON persistence for settings structs.
///
/// Missing keys fall back to the type's defaults (every settings struct is
/// `#[serde(default)]`), so partial documents are valid.
pub trait JsonConfig: Serialize + DeserializeOwned {
    const CONFIG_NAME: &'static str;

    fn from_json_str(input: &str) -> StyleResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            StyleError::InvalidConfig(format!("failed to parse {} json: {e}", Self::CONFIG_NAME))
        })
    }

    fn to_json_pretty(&self) -> StyleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StyleError::InvalidConfig(format!(
                "failed to serialize {} json: {e}",
                Self::CONFIG_NAME
            ))
        })
    }
}

impl JsonConfig for AxisOptions {
    const CONFIG_NAME: &'static str = "axis options";
}

impl JsonConfig for LineStyle {
    const CONFIG_NAME: &'static str = "line style";
}

impl JsonConfig for ContourStyle {
    const CONFIG_NAME: &'static str = "contour style";
}

impl JsonConfig for ContourLineStyle {
    const CONFIG_NAME: &'static str = "contour line style";
}

impl JsonConfig for TextStyle {
    const CONFIG_NAME: &'static str = "text style";
}

impl JsonConfig for Theme {
    const CONFIG_NAME: &'static str = "theme";
}

impl JsonConfig for ExportOptions {
    const CONFIG_NAME: &'static str = "export options";
}

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct StyleReportJsonContractV1 {
    pub schema_version: u32,
    pub report: StyleReport,
}

impl StyleReport {
    pub fn to_json_contract_v1_pretty(&self) -> StyleResult<String> {
        let payload = StyleReportJsonContractV1 {
            schema_version: STYLE_REPORT_JSON_SCHEMA_V1,
            report: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            StyleError::InvalidData(format!("failed to serialize style report contract v1: {e}"))
        })
    }

    pub fn from_json_contract_v1_str(input: &str) -> StyleResult<Self> {
        let payload: StyleReportJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            StyleError::InvalidData(format!("failed to parse style report json payload: {e}"))
        })?;
        if payload.schema_version != STYLE_REPORT_JSON_SCHEMA_V1 {
            return Err(StyleError::InvalidData(format!(
                "unsupported style report schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.report)
    }
}
