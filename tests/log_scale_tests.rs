use gplot_style::api::{AxisOptions, StyleAdvisory, resolve_axes, resolve_axis};
use gplot_style::core::{AxisKind, AxisScale, DataSeries, Extent, ScaleMode};
use gplot_style::render::{MajorLocator, MinorLocator};

#[test]
fn log_axis_uses_decade_locators_without_intervals() {
    let options = AxisOptions::new()
        .with_scale(AxisScale::Log)
        .with_major_interval(5.0)
        .with_major_ticks(7);
    let (resolved, _) = resolve_axis(AxisKind::X, Extent::new(1.0, 1000.0), &options);

    assert_eq!(resolved.major, MajorLocator::LogBase10);
    assert_eq!(resolved.minor, MinorLocator::log_subdecades());
    assert_eq!(resolved.major_interval(), None);
    assert_eq!(resolved.minor_interval(), None);
    assert!(!resolved.minor_labels_visible);
    assert_eq!(
        resolved.major_positions(),
        Some(vec![1.0, 10.0, 100.0, 1000.0])
    );
}

#[test]
fn log_minor_positions_are_subdecades() {
    let options = AxisOptions::new().with_scale(AxisScale::Log);
    let (resolved, _) = resolve_axis(AxisKind::Y, Extent::new(1.0, 10.0), &options);

    assert_eq!(
        resolved.minor_positions(),
        Some(vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
    );
}

#[test]
fn log_axis_always_carries_the_positive_minimum_advisory() {
    let options = AxisOptions::new().with_scale(AxisScale::Log);
    let (_, positive) = resolve_axis(AxisKind::X, Extent::new(0.5, 20.0), &options);
    let (_, negative) = resolve_axis(AxisKind::X, Extent::new(-1.0, 20.0), &options);

    for advisories in [&positive, &negative] {
        assert!(advisories.iter().any(|advisory| matches!(
            advisory,
            StyleAdvisory::LogScaleRequiresPositiveMinimum {
                axis: AxisKind::X,
                ..
            }
        )));
    }
    assert!(negative.iter().any(|advisory| matches!(
        advisory,
        StyleAdvisory::LogScaleRequiresPositiveMinimum { minimum, .. } if *minimum < 0.0
    )));
}

#[test]
fn explicit_ticks_take_precedence_over_log_locators() {
    let options = AxisOptions::new()
        .with_scale(AxisScale::Log)
        .with_ticks(vec![1.0, 100.0])
        .with_tick_labels(["one", "hundred"]);
    let (resolved, _) = resolve_axis(AxisKind::X, Extent::new(1.0, 100.0), &options);

    assert_eq!(
        resolved.major,
        MajorLocator::Fixed {
            positions: vec![1.0, 100.0]
        }
    );
    assert_eq!(resolved.minor, MinorLocator::None);
    assert_eq!(resolved.scale, AxisScale::Log);
}

#[test]
fn scale_mode_combines_both_axes() {
    let data = DataSeries::new(vec![1.0, 10.0, 100.0], vec![2.0, 20.0, 200.0])
        .expect("valid series");
    let linear = AxisOptions::default();
    let log = AxisOptions::new().with_scale(AxisScale::Log);

    assert_eq!(resolve_axes(&data, &linear, &linear).scale_mode, ScaleMode::Linear);
    assert_eq!(resolve_axes(&data, &log, &log).scale_mode, ScaleMode::LogLog);
    assert_eq!(resolve_axes(&data, &log, &linear).scale_mode, ScaleMode::LogX);
    assert_eq!(resolve_axes(&data, &linear, &log).scale_mode, ScaleMode::LogY);
}

#[test]
fn constant_positive_series_widens_by_a_decade_on_log_axes() {
    let options = AxisOptions::new().with_scale(AxisScale::Log);
    let (resolved, advisories) = resolve_axis(AxisKind::Y, Extent::new(5.0, 5.0), &options);

    assert_eq!(resolved.bounds, Extent::new(0.5, 50.0));
    assert_eq!(resolved.major_positions(), Some(vec![1.0, 10.0]));
    assert!(advisories.iter().any(|advisory| matches!(
        advisory,
        StyleAdvisory::DegenerateSeries { .. }
    )));
}
