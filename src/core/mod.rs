pub mod scale;
pub mod ticks;
pub mod types;

pub use scale::{AxisKind, AxisScale, ScaleMode};
pub use ticks::{
    LOG_SUBDECADE_MULTIPLIERS, linspace, log_decade_ticks, log_subdecade_ticks, multiple_ticks,
};
pub use types::{DataSeries, Extent, FieldGrid};
