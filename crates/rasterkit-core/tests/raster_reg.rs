//! Raster container and pixel packing regression test
//!
//! Checks the 0xRRGGBBAA word layout, row-major addressing, checked and
//! unchecked access, borrowed views, and the construction error paths.

use rasterkit_core::{Error, Raster, RasterRead, RasterView, pixel};
use rasterkit_test::{RegParams, fixtures};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    // --- Test 1: pixel packing vectors ---
    rp.compare_pixels(0xAC9D90FF, pixel::compose_rgba(0xAC, 0x9D, 0x90, 0xFF));
    rp.compare_pixels(0x123456FF, pixel::compose_rgb(0x12, 0x34, 0x56));
    rp.compare_pixels(0x00000000, pixel::compose_rgba(0, 0, 0, 0));
    rp.compare_values(0x12 as f64, pixel::red(0x12345678) as f64, 0.0);
    rp.compare_values(0x34 as f64, pixel::green(0x12345678) as f64, 0.0);
    rp.compare_values(0x56 as f64, pixel::blue(0x12345678) as f64, 0.0);
    rp.compare_values(0x78 as f64, pixel::alpha(0x12345678) as f64, 0.0);
    eprintln!("  packing vectors done");

    // --- Test 2: extract and re-compose round-trips the fixture ---
    let src = fixtures::rgb_3x3();
    let mut rebuilt = src.create_template();
    for row in 0..src.height() {
        for col in 0..src.width() {
            let (r, g, b, a) = pixel::extract_rgba(src.get_pixel_unchecked(row, col));
            rebuilt.set_pixel_unchecked(row, col, pixel::compose_rgba(r, g, b, a));
        }
    }
    rp.compare_rasters(&src, &rebuilt);
    eprintln!("  extract/compose round-trip done");

    // --- Test 3: construction, fill, and checked access ---
    let mut img = Raster::new(5, 4).unwrap();
    rp.compare_values(5.0, img.width() as f64, 0.0);
    rp.compare_values(4.0, img.height() as f64, 0.0);
    rp.compare_pixels(0x00000000, img.get_pixel(0, 0).unwrap());

    img.fill(0x7F7F7FFF);
    rp.compare_pixels(0x7F7F7FFF, img.get_pixel(3, 4).unwrap());

    img.set_pixel(2, 1, 0xDEADBEEF).unwrap();
    rp.compare_pixels(0xDEADBEEF, img.get_pixel_unchecked(2, 1));
    rp.compare_values(1.0, if img.get_pixel(4, 0).is_none() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: row-major addressing ---
    let seq = Raster::from_pixels(3, 2, vec![10, 11, 12, 13, 14, 15]).unwrap();
    rp.compare_values(5.0, seq.index(1, 2) as f64, 0.0);
    rp.compare_pixels(15, seq.get_pixel_unchecked(1, 2));
    rp.compare_values(1.0, if seq.row(0) == [10, 11, 12] { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if seq.row(1) == [13, 14, 15] { 1.0 } else { 0.0 }, 0.0);
    eprintln!("  row-major addressing done");

    // --- Test 5: channel average with truncation ---
    rp.compare_pixels(0x7F7F7FFF, pixel::average(&[0x000000FF, 0xFFFFFFFF]));
    rp.compare_pixels(0x15151520, pixel::average(&fixtures::ROW_1X3));
    rp.compare_pixels(0xDEADBEEF, pixel::average(&[0xDEADBEEF]));

    // --- Test 6: borrowed views read the same data ---
    let view = src.as_view();
    rp.compare_rasters(&src, &view);

    let static_view = RasterView::new(3, 3, &fixtures::RGB_3X3).unwrap();
    rp.compare_rasters(&src, &static_view);
    rp.compare_rasters(&static_view.to_raster(), &src);
    eprintln!("  view access done");

    // --- Test 7: construction and access error paths ---
    let zero_dim = matches!(
        Raster::new(0, 5),
        Err(Error::InvalidDimension { width: 0, height: 5 })
    );
    rp.compare_values(1.0, if zero_dim { 1.0 } else { 0.0 }, 0.0);

    let short_buf = matches!(
        Raster::from_pixels(2, 2, vec![1, 2, 3]),
        Err(Error::InvalidPixelCount {
            expected: 4,
            actual: 3
        })
    );
    rp.compare_values(1.0, if short_buf { 1.0 } else { 0.0 }, 0.0);

    let mut small = Raster::new(2, 2).unwrap();
    let oob = matches!(
        small.set_pixel(2, 0, 1),
        Err(Error::PixelOutOfBounds { row: 2, col: 0, .. })
    );
    rp.compare_values(1.0, if oob { 1.0 } else { 0.0 }, 0.0);
    eprintln!("  error paths done");

    assert!(rp.cleanup(), "raster regression test failed");
}
