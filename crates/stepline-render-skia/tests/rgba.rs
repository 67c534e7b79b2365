// File: crates/stepline-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, background pixels and PNG headers from the Skia host.

use stepline_core::{Chart, ChartOptions, PixelPoint, Series, Theme};
use stepline_render_skia::{RasterOptions, SkiaHost};

fn chart() -> Chart<SkiaHost> {
    let mut options = ChartOptions::default()
        .with_series(Series::new(vec![(0.0, 0.0), (2.0, 3.0), (4.0, 1.0)]));
    options.tooltip.show = true;
    options.point.show = true;
    let host = SkiaHost::new(RasterOptions { draw_text: false, scale: 1.0 }).with_target("chart", 320.0, 200.0);
    Chart::new(options, host).expect("chart")
}

#[test]
fn render_rgba8_buffer() {
    let chart = chart();
    let img = chart.host().rgba("chart").expect("rgba");
    assert_eq!((img.width(), img.height()), (320, 200));
    assert_eq!(img.as_raw().len(), 320 * 200 * 4);

    // Top-left corner is padding: plain background.
    let bg = Theme::light().background;
    let px = img.get_pixel(0, 0).0;
    assert_eq!(px[3], 255);
    assert_eq!(px[0], (bg.r * 255.0).round() as u8);
}

#[test]
fn png_bytes_have_header() {
    let chart = chart();
    let bytes = chart.host().png("chart").expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn hover_overlay_changes_pixels_and_clears() {
    let mut chart = chart();
    let before = chart.host().rgba("chart").expect("rgba");
    assert!(chart.host_mut().take_dirty("chart"));

    let (x, y) = {
        let pair = chart.scales().expect("scales").pair(Default::default(), Default::default()).expect("pair");
        (pair.x.map(2.0), pair.y.map(3.0))
    };
    assert!(chart.pointer_move(PixelPoint::new(x, y)).expect("pointer").is_some());
    assert!(chart.host_mut().take_dirty("chart"));
    let hovered = chart.host().rgba("chart").expect("rgba");
    assert_ne!(before.as_raw(), hovered.as_raw());

    chart.pointer_out().expect("out");
    let after = chart.host().rgba("chart").expect("rgba");
    assert_eq!(before.as_raw(), after.as_raw());
}

#[test]
fn unknown_target_is_an_error() {
    let chart = chart();
    assert!(chart.host().rgba("nope").is_err());
}
