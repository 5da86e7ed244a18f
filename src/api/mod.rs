mod axis_apply;
mod axis_options;
mod axis_resolver;
mod contour_style;
mod diagnostics;
mod figure;
mod json_contract;
mod line_style;
mod style_checks;
mod text_style;

pub use axis_apply::apply_axis;
pub use axis_options::{AxisOptions, DEFAULT_MAJOR_TICKS, DEFAULT_MINOR_TICKS_PER_MAJOR};
pub use axis_resolver::{
    AxisAdvisories, AxisResolution, ResolvedAxis, TickParameters, resolve_axes, resolve_axis,
};
pub use contour_style::{ColorbarOptions, ContourLineStyle, ContourStyle};
pub use diagnostics::{LabelSynthesisReason, StyleAdvisory, StyleReport};
pub use figure::{ExportReport, Figure};
pub use json_contract::{JsonConfig, STYLE_REPORT_JSON_SCHEMA_V1, StyleReportJsonContractV1};
pub use line_style::{AxisTitle, GridOptions, LegendOptions, LineStyle};
pub use text_style::TextStyle;
