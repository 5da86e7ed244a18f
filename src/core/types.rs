use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};

/// Closed interval observed in (or requested for) one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scans `values` for their minimum and maximum.
    ///
    /// Returns `None` for an empty slice. Callers are expected to pass finite
    /// values (both `DataSeries` and `FieldGrid` validate this).
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().map(OrderedFloat).min()?;
        let max = values.iter().copied().map(OrderedFloat).max()?;
        Some(Self::new(min.0, max.0))
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// True when the extent collapses to a single value.
    ///
    /// Uses an absolute floor of `1e-12` and the same amount relative to the
    /// larger magnitude so large constant values are detected too.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let scale = self.min.abs().max(self.max.abs());
        self.span().abs() <= DEGENERATE_TOLERANCE * scale.max(1.0)
    }
}

const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// XY line data with equal-length, non-empty, finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl DataSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> StyleResult<Self> {
        if x.is_empty() {
            return Err(StyleError::InvalidData(
                "data series must not be empty".to_owned(),
            ));
        }
        if x.len() != y.len() {
            return Err(StyleError::InvalidData(format!(
                "data series length mismatch: x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        validate_finite(&x, "x")?;
        validate_finite(&y, "y")?;

        Ok(Self { x, y })
    }

    /// Builds a series from `(x, y)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> StyleResult<Self> {
        let (x, y) = points.into_iter().unzip();
        Self::new(x, y)
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn x_extent(&self) -> Extent {
        extent_of_non_empty(&self.x)
    }

    #[must_use]
    pub fn y_extent(&self) -> Extent {
        extent_of_non_empty(&self.y)
    }
}

/// Scalar field sampled on a structured `rows x cols` grid.
///
/// Coordinates and values are stored row-major, matching the layout of
/// meshgrid-style inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    rows: usize,
    cols: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    values: Vec<f64>,
}

impl FieldGrid {
    pub fn new(
        rows: usize,
        cols: usize,
        x: Vec<f64>,
        y: Vec<f64>,
        values: Vec<f64>,
    ) -> StyleResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(StyleError::InvalidData(format!(
                "field grid must have at least one cell: rows={rows}, cols={cols}"
            )));
        }
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            StyleError::InvalidData("field grid dimensions overflow".to_owned())
        })?;
        for (name, data) in [("x", &x), ("y", &y), ("values", &values)] {
            if data.len() != expected {
                return Err(StyleError::InvalidData(format!(
                    "field grid `{name}` has {} entries, expected {expected}",
                    data.len()
                )));
            }
            validate_finite(data, name)?;
        }

        Ok(Self {
            rows,
            cols,
            x,
            y,
            values,
        })
    }

    /// Builds the grid spanned by 1-D axes, like a meshgrid with `xy` indexing.
    pub fn from_axes(x_axis: &[f64], y_axis: &[f64], values: Vec<f64>) -> StyleResult<Self> {
        let rows = y_axis.len();
        let cols = x_axis.len();
        let mut x = Vec::with_capacity(rows * cols);
        let mut y = Vec::with_capacity(rows * cols);
        for &row_y in y_axis {
            for &col_x in x_axis {
                x.push(col_x);
                y.push(row_y);
            }
        }
        Self::new(rows, cols, x, y, values)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    #[must_use]
    pub fn x_extent(&self) -> Extent {
        extent_of_non_empty(&self.x)
    }

    #[must_use]
    pub fn y_extent(&self) -> Extent {
        extent_of_non_empty(&self.y)
    }

    #[must_use]
    pub fn value_extent(&self) -> Extent {
        extent_of_non_empty(&self.values)
    }
}

fn validate_finite(values: &[f64], name: &str) -> StyleResult<()> {
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(StyleError::InvalidData(format!(
            "`{name}` must be finite (index {index})"
        )));
    }
    Ok(())
}

// Containers reject empty input at construction.
fn extent_of_non_empty(values: &[f64]) -> Extent {
    Extent::of(values).unwrap_or(Extent::new(0.0, 0.0))
}
