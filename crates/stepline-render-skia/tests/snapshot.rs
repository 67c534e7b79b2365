// File: crates/stepline-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots for each curve family with bless flow.
// Behavior:
// - Renders a deterministic small chart per curve to PNG bytes (text off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use stepline_core::merge::{GridPatch, GridsPatch};
use stepline_core::{Chart, ChartOptions, Merge, Series, SeriesType, StepType, Update};
use stepline_render_skia::{RasterOptions, SkiaHost};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(series: Series) -> Vec<u8> {
    let mut options = ChartOptions::default().with_series(series);
    options.merge(Update::Grid(GridsPatch {
        x: Some(GridPatch { show: Some(true), step: Some(1.0) }),
        y: Some(GridPatch { show: Some(true), step: None }),
    }));
    options.point.show = true;
    let host = SkiaHost::new(RasterOptions { draw_text: false, scale: 1.0 }).with_target("chart", 320.0, 200.0);
    let chart = Chart::new(options, host).expect("chart");
    chart.host().png("chart").expect("png")
}

fn zigzag() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)]
}

#[test]
fn golden_line() {
    write_or_compare("line.png", &render(Series::new(zigzag())));
}

#[test]
fn golden_spline() {
    write_or_compare("spline.png", &render(Series::new(zigzag()).with_type(SeriesType::Spline)));
}

#[test]
fn golden_steps() {
    for (name, step) in [
        ("step.png", StepType::Step),
        ("step_before.png", StepType::StepBefore),
        ("step_after.png", StepType::StepAfter),
    ] {
        write_or_compare(name, &render(Series::new(zigzag()).with_step(step)));
    }
}

#[test]
fn curves_render_differently() {
    let line = render(Series::new(zigzag()));
    let step = render(Series::new(zigzag()).with_step(StepType::Step));
    let a = image::load_from_memory(&line).expect("decode").to_rgba8();
    let b = image::load_from_memory(&step).expect("decode").to_rgba8();
    assert_ne!(a.as_raw(), b.as_raw());
}
