use std::path::PathBuf;

use approx::assert_relative_eq;
use gplot_style::api::{
    AxisOptions, ColorbarOptions, ContourLineStyle, ContourStyle, Figure, GridOptions, LineStyle,
    StyleAdvisory, TextStyle,
};
use gplot_style::core::{AxisKind, AxisScale, DataSeries, FieldGrid};
use gplot_style::render::{
    Color, ExportOptions, FieldMode, ImageFormat, MajorLocator, RecordingSurface, SurfaceCommand,
    Theme, TickDirection, TickFormatter, TickSet,
};

fn ramp() -> DataSeries {
    DataSeries::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 2.0, 4.0, 6.0, 8.0])
        .expect("valid series")
}

fn field() -> FieldGrid {
    FieldGrid::from_axes(
        &[0.0, 1.0, 2.0],
        &[0.0, 1.0],
        vec![-1.0, 0.0, 1.0, 2.0, 3.0, 5.0],
    )
    .expect("valid grid")
}

fn figure() -> Figure<RecordingSurface> {
    Figure::new(RecordingSurface::new()).expect("theme applies")
}

#[test]
fn new_figure_applies_the_theme_first() {
    let figure = figure();
    assert_eq!(
        figure.surface().commands(),
        &[SurfaceCommand::ApplyTheme {
            theme: Theme::default()
        }]
    );
}

#[test]
fn plot_line_draws_then_configures_both_axes() {
    let mut figure = figure();
    let report = figure
        .plot_line(&ramp(), &LineStyle::black())
        .expect("plot line");

    assert!(!report.has_advisories());
    assert_eq!(report.x_axis.major_interval(), Some(1.0));
    assert_eq!(report.y_axis.major_interval(), Some(2.0));

    let commands = figure.surface().commands();
    assert!(matches!(
        &commands[1],
        SurfaceCommand::DrawLine { points: 5, stroke } if stroke.color == Color::BLACK
    ));
    assert!(commands.contains(&SurfaceCommand::SetTickDirection {
        direction: TickDirection::In
    }));
    assert!(commands.contains(&SurfaceCommand::SetLimits {
        axis: AxisKind::Y,
        min: 0.0,
        max: 8.0
    }));
    assert!(
        commands
            .iter()
            .any(|command| matches!(command, SurfaceCommand::SetLegend { .. }))
    );
    assert!(
        !commands
            .iter()
            .any(|command| matches!(command, SurfaceCommand::SetGrid { .. }))
    );
}

#[test]
fn colored_presets_use_upright_padded_y_label() {
    let mut figure = figure();
    figure
        .plot_line(&ramp(), &LineStyle::red())
        .expect("plot line");

    let y_label = figure
        .surface()
        .commands_for(AxisKind::Y)
        .find_map(|command| match command {
            SurfaceCommand::SetAxisLabel { label, .. } => Some(label.clone()),
            _ => None,
        })
        .expect("y label set");
    assert_eq!(y_label.pad, 16.0);
    assert_eq!(y_label.rotation_deg, 0.0);
    assert_eq!(LineStyle::red().color.to_hex(), "#d20000");
}

#[test]
fn legend_entries_keep_drawing_order() {
    let mut figure = figure();
    figure
        .plot_line(&ramp(), &LineStyle::blue().with_legend_label("beta"))
        .expect("first line");
    figure
        .plot_line(&ramp(), &LineStyle::green().with_legend_label("alpha"))
        .expect("second line");

    let labels: Vec<&str> = figure
        .legend_entries()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(labels, vec!["beta", "alpha"]);
    assert_eq!(figure.legend_entries()["alpha"], LineStyle::GREEN);
}

#[test]
fn grid_applies_to_major_and_minor_ticks() {
    let style = LineStyle::black().with_grid(GridOptions {
        show: true,
        ..GridOptions::default()
    });
    let mut figure = figure();
    figure.plot_line(&ramp(), &style).expect("plot line");

    let grids: Vec<TickSet> = figure
        .surface()
        .commands()
        .iter()
        .filter_map(|command| match command {
            SurfaceCommand::SetGrid { which, .. } => Some(*which),
            _ => None,
        })
        .collect();
    assert_eq!(grids, vec![TickSet::Major, TickSet::Minor]);
}

#[test]
fn invalid_stroke_values_fall_back_with_advisories() {
    let mut style = LineStyle::black().with_color(Color::rgb(1.5, 0.0, 0.0));
    style.line_width = -3.0;
    let mut figure = figure();
    let report = figure.plot_line(&ramp(), &style).expect("plot line");

    let fields: Vec<&str> = report
        .advisories
        .iter()
        .filter_map(|advisory| match advisory {
            StyleAdvisory::InvalidStyleValue { field, .. } => Some(field.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(fields, vec!["color", "line_width"]);
    assert!(figure.surface().commands().iter().any(|command| matches!(
        command,
        SurfaceCommand::DrawLine { stroke, .. } if stroke.width == 2.0
    )));
}

#[test]
fn constant_series_still_renders() {
    let series = DataSeries::new(vec![2.0, 2.0, 2.0], vec![1.0, 2.0, 3.0]).expect("valid series");
    let mut figure = figure();
    let report = figure
        .plot_line(&series, &LineStyle::black())
        .expect("plot line");

    assert_eq!(report.advisories_for(AxisKind::X).count(), 1);
    assert_eq!(report.advisories_for(AxisKind::Y).count(), 0);
}

#[test]
fn field_colorbar_ticks_span_the_value_range() {
    let style = ContourStyle::default().with_colorbar(ColorbarOptions {
        show: true,
        ..ColorbarOptions::default()
    });
    let mut figure = figure();
    figure.plot_field(&field(), &style).expect("plot field");

    let colorbar = figure
        .surface()
        .commands()
        .iter()
        .find_map(|command| match command {
            SurfaceCommand::DrawColorbar { colorbar } => Some(colorbar.clone()),
            _ => None,
        })
        .expect("colorbar drawn");
    assert_eq!(colorbar.ticks.len(), 4);
    assert_relative_eq!(colorbar.ticks[0], -1.0);
    assert_relative_eq!(colorbar.ticks[1], 1.0);
    assert_relative_eq!(colorbar.ticks[2], 3.0);
    assert_relative_eq!(colorbar.ticks[3], 5.0);
}

#[test]
fn field_without_colorbar_draws_none() {
    let mut figure = figure();
    let report = figure
        .plot_field(&field(), &ContourStyle::default())
        .expect("plot field");

    assert_eq!(report.x_axis.bounds.max, 2.0);
    assert_eq!(report.y_axis.bounds.max, 1.0);
    assert!(
        !figure
            .surface()
            .commands()
            .iter()
            .any(|command| matches!(command, SurfaceCommand::DrawColorbar { .. }))
    );
}

#[test]
fn inverted_value_range_is_swapped_and_reported() {
    let style = ContourStyle::filled().with_value_range(4.0, -4.0);
    let mut figure = figure();
    let report = figure.plot_field(&field(), &style).expect("plot field");

    assert!(report.advisories.iter().any(|advisory| matches!(
        advisory,
        StyleAdvisory::InvertedValueRange { .. }
    )));
    let paint = figure
        .surface()
        .commands()
        .iter()
        .find_map(|command| match command {
            SurfaceCommand::DrawField { paint, .. } => Some(paint.clone()),
            _ => None,
        })
        .expect("field drawn");
    assert_eq!((paint.value_min, paint.value_max), (-4.0, 4.0));
    assert_eq!(paint.mode, FieldMode::FilledContour { levels: 20 });
}

#[test]
fn colorbar_with_too_few_ticks_falls_back_to_two() {
    let style = ContourStyle::default().with_colorbar(ColorbarOptions {
        show: true,
        tick_count: 1,
        ..ColorbarOptions::default()
    });
    let mut figure = figure();
    let report = figure.plot_field(&field(), &style).expect("plot field");

    assert!(report.advisories.iter().any(|advisory| matches!(
        advisory,
        StyleAdvisory::InvalidColorbarTickCount {
            requested: 1,
            fallback: 2
        }
    )));
}

#[test]
fn contour_lines_default_to_the_zero_isoline() {
    let mut figure = figure();
    let advisories = figure
        .plot_contour_lines(&field(), &ContourLineStyle::default())
        .expect("contour lines");

    assert!(advisories.is_empty());
    assert!(figure.surface().commands().iter().any(|command| matches!(
        command,
        SurfaceCommand::DrawContourLines { rows: 2, cols: 3, stroke }
            if stroke.levels == gplot_style::render::ContourLevels::Values(vec![0.0])
    )));
}

#[test]
fn non_finite_contour_levels_are_dropped() {
    let style = ContourLineStyle::default().with_levels(vec![0.0, f64::NAN, 1.0]);
    let mut figure = figure();
    let advisories = figure
        .plot_contour_lines(&field(), &style)
        .expect("contour lines");

    assert_eq!(advisories.len(), 1);
}

#[test]
fn annotation_uses_the_boxed_text_defaults() {
    let mut figure = figure();
    let advisories = figure
        .annotate("peak", 1.0, 2.0, &TextStyle::default())
        .expect("annotate");

    assert!(advisories.is_empty());
    let text = figure
        .surface()
        .commands()
        .iter()
        .find_map(|command| match command {
            SurfaceCommand::DrawText { text } => Some(text.clone()),
            _ => None,
        })
        .expect("text drawn");
    assert_eq!(text.text, "peak");
    assert_eq!(text.font_size, 22.0);
    assert_eq!(text.box_face, Color::WHITE);
}

#[test]
fn format_origin_targets_the_x_axis() {
    let mut figure = figure();
    figure.format_origin().expect("format origin");

    assert_eq!(
        figure.surface().commands().last(),
        Some(&SurfaceCommand::SetMajorFormatter {
            axis: AxisKind::X,
            formatter: TickFormatter::OriginAware { decimals: 1 },
        })
    );
}

#[test]
fn save_appends_the_format_extension() {
    let mut figure = figure();
    let options = ExportOptions::default()
        .with_format(ImageFormat::Pdf)
        .with_size_inches(8.0, 6.0);
    let report = figure.save("figures/ramp", &options).expect("save");

    assert_eq!(report.path, PathBuf::from("figures/ramp.pdf"));
    assert!(report.advisories.is_empty());

    let surface = figure.into_surface();
    assert_eq!(surface.saved_files(), &[PathBuf::from("figures/ramp.pdf")]);
    assert!(surface.commands().contains(&SurfaceCommand::SetFigureSize {
        width_in: 8.0,
        height_in: 6.0
    }));
}

#[test]
fn save_with_zero_dpi_falls_back_to_default() {
    let mut figure = figure();
    let report = figure
        .save("out", &ExportOptions::default().with_dpi(0))
        .expect("save");

    assert_eq!(report.path, PathBuf::from("out.png"));
    assert_eq!(report.advisories.len(), 1);
    assert!(figure.surface().commands().iter().any(|command| matches!(
        command,
        SurfaceCommand::SaveFigure { options, .. } if options.dpi == 300
    )));
}

#[test]
fn replaying_a_style_on_a_reset_surface_is_idempotent() {
    let mut figure = figure();
    let style = LineStyle::blue();
    figure.plot_line(&ramp(), &style).expect("first plot");
    let first = figure.surface().commands()[1..].to_vec();

    figure.surface_mut().reset();
    figure.plot_line(&ramp(), &style).expect("second plot");
    assert_eq!(figure.surface().commands(), first.as_slice());
}

#[test]
fn wide_span_series_still_renders() {
    let series =
        DataSeries::new(vec![-1.0e308, 1.0e308], vec![0.0, 1.0]).expect("valid series");
    let mut figure = figure();
    let report = figure
        .plot_line(&series, &LineStyle::black())
        .expect("wide data must not fail");
    assert!(report.x_axis.major_interval().is_some_and(f64::is_finite));

    let extreme = DataSeries::new(vec![-f64::MAX, f64::MAX], vec![0.0, 1.0]).expect("valid series");
    let style = LineStyle::black().with_x_axis(AxisOptions::new().with_major_ticks(2));
    let report = figure
        .plot_line(&extreme, &style)
        .expect("extreme data must not fail");
    assert_eq!(report.x_axis.major, MajorLocator::Auto);
    assert_eq!(report.advisories_for(AxisKind::X).count(), 1);
}

#[test]
fn field_axes_are_forced_linear() {
    let mut style = ContourStyle::default();
    style.x_axis = AxisOptions::new().with_scale(AxisScale::Log);
    let mut figure = figure();
    let report = figure.plot_field(&field(), &style).expect("plot field");

    assert_eq!(report.x_axis.scale, AxisScale::Linear);
    assert!(report.advisories.iter().any(|advisory| matches!(
        advisory,
        StyleAdvisory::InvalidStyleValue { field, .. } if field == "x_axis.scale"
    )));
    assert!(figure.surface().commands().contains(&SurfaceCommand::SetScale {
        axis: AxisKind::X,
        scale: AxisScale::Linear
    }));
}
