//! Smooth rounded rectangle SVG demo.
//!
//! Renders the same rectangle at several smoothness values, overlaying
//! the plain quarter-circle rounding for comparison, and writes the
//! result to `smooth_rects.svg`.
//!
//! Run with: `cargo run --example smooth_rect_svg`

use glam::Vec2;
use squircle::svg::{SvgDocument, SvgStyle};
use squircle::{max_smooth_radius, round_rect, smooth_round_rect};

fn main() {
    let size = Vec2::new(180.0, 120.0);
    let mut doc = SvgDocument::new(620.0, 200.0);

    for (i, &smoothness) in [0.25, 0.6, 1.0].iter().enumerate() {
        let min = Vec2::new(20.0 + i as f32 * 200.0, 40.0);
        let max = min + size;
        let radius = max_smooth_radius(size, smoothness).min(32.0);

        let smooth = smooth_round_rect(min, max, smoothness, radius);

        doc.add_rect(min, size, SvgStyle::stroke("#cccccc", 0.5));
        doc.add_path(&smooth, SvgStyle::fill_stroke("#e8f0fe", "#1a73e8", 2.0));
        doc.add_path(&round_rect(min, max, radius), SvgStyle::stroke("#d93025", 1.0));

        let (lo, hi) = smooth.bounds().expect("non-empty path");
        println!(
            "smoothness {:.2}: radius {:.1}, {} commands, bounds ({:.1}, {:.1}) to ({:.1}, {:.1})",
            smoothness,
            radius,
            smooth.len(),
            lo.x,
            lo.y,
            hi.x,
            hi.y
        );
    }

    match doc.save("smooth_rects.svg") {
        Ok(()) => println!("wrote smooth_rects.svg"),
        Err(e) => eprintln!("failed to write SVG: {}", e),
    }
}
