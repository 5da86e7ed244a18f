use gplot_style::api::{AxisOptions, StyleAdvisory, resolve_axis};
use gplot_style::core::{AxisKind, AxisScale, DataSeries, Extent};
use gplot_style::render::format_plain;
use proptest::prelude::*;

proptest! {
    #[test]
    fn auto_bounds_equal_data_extent(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 2..64)
    ) {
        let extent = Extent::of(&values).expect("non-empty");
        prop_assume!(!extent.is_degenerate());

        let series = DataSeries::new(values.clone(), values).expect("valid series");
        let (resolved, advisories) =
            resolve_axis(AxisKind::X, series.x_extent(), &AxisOptions::default());

        prop_assert_eq!(resolved.bounds, extent);
        prop_assert!(advisories.is_empty());
    }

    #[test]
    fn major_interval_divides_span_into_n_minus_one_steps(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        major_ticks in 2usize..20,
        minor_ticks in 0usize..10
    ) {
        let options = AxisOptions::new()
            .with_major_ticks(major_ticks)
            .with_minor_ticks_per_major(minor_ticks);
        let (resolved, _) =
            resolve_axis(AxisKind::Y, Extent::new(min, min + span), &options);

        let major = resolved.major_interval().expect("major interval");
        let minor = resolved.minor_interval().expect("minor interval");
        let expected_major = resolved.bounds.span() / (major_ticks - 1) as f64;
        prop_assert!((major - expected_major).abs() <= expected_major * 1e-12);
        prop_assert!((minor - major / (minor_ticks as f64 + 1.0)).abs() <= major * 1e-12);
    }

    #[test]
    fn log_mode_never_yields_linear_intervals(
        low in 0.001f64..10.0,
        factor in 1.5f64..1_000_000.0,
        major_ticks in prop::option::of(0usize..12),
        major_interval in prop::option::of(-5.0f64..5.0)
    ) {
        let mut options = AxisOptions::new().with_scale(AxisScale::Log);
        options.major_ticks = major_ticks;
        options.major_interval = major_interval;
        let (resolved, advisories) =
            resolve_axis(AxisKind::X, Extent::new(low, low * factor), &options);

        prop_assert_eq!(resolved.major_interval(), None);
        prop_assert_eq!(resolved.minor_interval(), None);
        let no_tick_advisories = advisories.iter().all(|advisory| !matches!(
            advisory,
            StyleAdvisory::InvalidMajorTickCount { .. } | StyleAdvisory::InvalidTickInterval { .. }
        ));
        prop_assert!(no_tick_advisories);
    }

    #[test]
    fn synthesized_labels_match_position_text(
        positions in prop::collection::vec(-100.0f64..100.0, 1..12),
        label_count in 0usize..12
    ) {
        let mut options = AxisOptions::new().with_ticks(positions.clone());
        if label_count != positions.len() && label_count > 0 {
            options = options.with_tick_labels((0..label_count).map(|i| format!("l{i}")));
        }
        let (resolved, advisories) =
            resolve_axis(AxisKind::X, Extent::new(-100.0, 100.0), &options);

        let expected: Vec<String> = positions.iter().map(|value| format_plain(*value)).collect();
        prop_assert_eq!(resolved.tick_labels, Some(expected));
        prop_assert_eq!(advisories.len(), 1);
    }

    #[test]
    fn constant_series_never_yields_zero_interval(value in -1.0e6f64..1.0e6) {
        let (resolved, advisories) =
            resolve_axis(AxisKind::X, Extent::new(value, value), &AxisOptions::default());

        let major = resolved.major_interval().expect("major interval");
        prop_assert!(major.is_finite() && major > 0.0);
        let is_degenerate_advisory = matches!(
            advisories.first(),
            Some(StyleAdvisory::DegenerateSeries { .. })
        );
        prop_assert!(is_degenerate_advisory);
    }
}
