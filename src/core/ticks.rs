/// Sub-decade multipliers used for minor ticks on logarithmic axes.
pub const LOG_SUBDECADE_MULTIPLIERS: [f64; 8] = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

// Upper bound on generated positions so a tiny interval over a wide range
// cannot allocate without limit.
const MAX_GENERATED_TICKS: usize = 10_000;

/// `tick_count` evenly spaced values from `range.0` to `range.1` inclusive.
#[must_use]
pub fn linspace(range: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![range.0];
    }

    let span = range.1 - range.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            if index + 1 == tick_count {
                return range.1;
            }
            let ratio = (index as f64) / denominator;
            range.0 + span * ratio
        })
        .collect()
}

/// Integer multiples of `step` that fall inside `range` (inclusive).
///
/// Returns an empty list for a non-positive or non-finite step, or an
/// inverted range.
#[must_use]
pub fn multiple_ticks(range: (f64, f64), step: f64) -> Vec<f64> {
    let (start, end) = range;
    if !step.is_finite() || step <= 0.0 || !start.is_finite() || !end.is_finite() || end < start {
        return Vec::new();
    }

    // Tolerate rounding at the range edges.
    let slack = step * 1e-9;
    let first = ((start - slack) / step).ceil() as i64;
    let last = ((end + slack) / step).floor() as i64;
    if last < first {
        return Vec::new();
    }

    (first..=last)
        .take(MAX_GENERATED_TICKS)
        .map(|multiple| snap_to_zero(multiple as f64 * step))
        .collect()
}

/// Decades `10^k` inside `range`; empty unless both ends are positive.
#[must_use]
pub fn log_decade_ticks(range: (f64, f64)) -> Vec<f64> {
    let Some((first, last)) = decade_exponents(range) else {
        return Vec::new();
    };
    (first..=last)
        .map(|exponent| 10f64.powi(exponent))
        .filter(|value| in_range(*value, range))
        .take(MAX_GENERATED_TICKS)
        .collect()
}

/// `m * 10^k` for every multiplier in `multipliers` that falls inside `range`.
#[must_use]
pub fn log_subdecade_ticks(range: (f64, f64), multipliers: &[f64]) -> Vec<f64> {
    let Some((first, last)) = decade_exponents(range) else {
        return Vec::new();
    };
    let mut ticks = Vec::new();
    for exponent in (first - 1)..=last {
        let decade = 10f64.powi(exponent);
        for multiplier in multipliers {
            let value = multiplier * decade;
            if in_range(value, range) {
                ticks.push(value);
            }
        }
        if ticks.len() >= MAX_GENERATED_TICKS {
            break;
        }
    }
    ticks
}

fn decade_exponents(range: (f64, f64)) -> Option<(i32, i32)> {
    let (start, end) = range;
    if !start.is_finite() || !end.is_finite() || start <= 0.0 || end < start {
        return None;
    }
    let first = start.log10().floor() as i32;
    let last = end.log10().ceil() as i32;
    Some((first, last))
}

fn in_range(value: f64, range: (f64, f64)) -> bool {
    let slack = (range.1 - range.0).abs() * 1e-12;
    value >= range.0 - slack && value <= range.1 + slack
}

fn snap_to_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
