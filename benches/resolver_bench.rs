use criterion::{Criterion, criterion_group, criterion_main};
use gplot_style::api::{AxisOptions, Figure, LineStyle, resolve_axes};
use gplot_style::core::{AxisScale, DataSeries};
use gplot_style::render::RecordingSurface;
use std::hint::black_box;

fn sine_series(len: usize) -> DataSeries {
    let x: Vec<f64> = (0..len).map(|i| i as f64 * 0.01).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    DataSeries::new(x, y).expect("valid generated series")
}

fn bench_resolve_axes_100k(c: &mut Criterion) {
    let series = sine_series(100_000);
    let options = AxisOptions::default();

    c.bench_function("resolve_axes_100k", |b| {
        b.iter(|| {
            let _ = resolve_axes(black_box(&series), black_box(&options), black_box(&options));
        })
    });
}

fn bench_log_positions(c: &mut Criterion) {
    let x: Vec<f64> = (1..=10_000).map(f64::from).collect();
    let series = DataSeries::new(x.clone(), x).expect("valid generated series");
    let options = AxisOptions::default().with_scale(AxisScale::Log);
    let resolution = resolve_axes(&series, &options, &options);

    c.bench_function("log_tick_positions", |b| {
        b.iter(|| {
            let _ = black_box(&resolution.x).major_positions();
            let _ = black_box(&resolution.x).minor_positions();
        })
    });
}

fn bench_plot_line_recording(c: &mut Criterion) {
    let series = sine_series(10_000);
    let style = LineStyle::blue();

    c.bench_function("plot_line_recording_10k", |b| {
        b.iter(|| {
            let mut figure = Figure::new(RecordingSurface::new()).expect("theme applies");
            let _ = figure
                .plot_line(black_box(&series), black_box(&style))
                .expect("plot should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_axes_100k,
    bench_log_positions,
    bench_plot_line_recording
);
criterion_main!(benches);
