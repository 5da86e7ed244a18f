//! gplot-style: publication styling for 2D line and field plots.
//!
//! Styling options are plain typed structs. A pure resolver fills every unset
//! option from the plotted data, and a separate apply step issues the
//! resulting configuration against an explicit [`render::PlotSurface`].
//! Anomalies in styling input become structured [`api::StyleAdvisory`]
//! values instead of failures.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    AxisOptions, ContourLineStyle, ContourStyle, ExportReport, Figure, LineStyle, StyleAdvisory,
    StyleReport, TextStyle, resolve_axes, resolve_axis,
};
pub use error::{StyleError, StyleResult};
