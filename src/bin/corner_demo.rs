//! End-to-end demo: detect corners in an image, fit the dominant line and
//! render an overlay.
//!
//! ```text
//! corner_demo <input-image> [output-dir]
//! ```
//!
//! Writes `overlay.png` (keypoint markers plus the fitted segment, if any)
//! and `report.json` into the output directory (default `out/`).

use std::path::{Path, PathBuf};

use serde::Serialize;

use corner_detector::geometry::{clip_line_to_rect, inside, traverse_segment};
use corner_detector::image::io::{load_luminance, save_rgb_png, write_json_file, RgbCanvas};
use corner_detector::prelude::*;

const TRACKED_FRAMES: usize = 10;
/// Models with this many inliers or fewer are discarded.
const MIN_INLIERS: usize = 9;

#[derive(Serialize)]
struct DemoReport {
    keypoints: Vec<Keypoint>,
    raw_count: usize,
    latency_ms: f64,
    line: Option<Line>,
    num_inliers: usize,
}

fn run(input: &Path, outdir: &Path) -> Result<(), String> {
    let image = load_luminance(input)?;
    let detector = CornerDetector::new(DetectorParams::default());
    let report = detector.process(&image);

    let mut tracker = PointTracker::new(TRACKED_FRAMES);
    tracker.push(&report.keypoints);
    let tracked = tracker.extract(detector.params().tau);

    let points: Vec<[f32; 2]> = tracked.iter().map(|kp| kp.position()).collect();
    let fit = fit_line(&points, &RansacOptions::default())
        .filter(|fit| fit.num_inliers > MIN_INLIERS);

    let mut canvas = RgbCanvas::from_luminance(&image);
    for kp in &tracked {
        draw_marker(&mut canvas, kp);
    }
    if let Some(fit) = &fit {
        let max = [(image.w as f64) - 1.0, (image.h as f64) - 1.0];
        if let Some((p, q)) = clip_line_to_rect(&fit.line, [0.0, 0.0], max) {
            let (w, h) = (image.w as i32, image.h as i32);
            traverse_segment(
                [p[0].round() as i32, p[1].round() as i32],
                [q[0].round() as i32, q[1].round() as i32],
                |x, y| {
                    if inside(w, h, x, y) {
                        canvas.plot(x, y, [255, 64, 64]);
                    }
                },
            );
        }
    }
    save_rgb_png(&canvas, &outdir.join("overlay.png"))?;

    let demo = DemoReport {
        keypoints: tracked.clone(),
        raw_count: report.raw_count,
        latency_ms: report.latency_ms,
        line: fit.as_ref().map(|f| f.line),
        num_inliers: fit.as_ref().map_or(0, |f| f.num_inliers),
    };
    write_json_file(&outdir.join("report.json"), &demo)?;

    println!(
        "keypoints={} line={} latency_ms={:.3}",
        tracked.len(),
        if demo.line.is_some() { "yes" } else { "no" },
        report.latency_ms
    );
    Ok(())
}

/// Cross marker whose arm length follows the keypoint scale.
fn draw_marker(canvas: &mut RgbCanvas, kp: &Keypoint) {
    let x = kp.x.round() as i32;
    let y = kp.y.round() as i32;
    let arm = (kp.scale.round() as i32).max(2);
    for d in -arm..=arm {
        canvas.plot(x + d, y, [64, 255, 64]);
        canvas.plot(x, y + d, [64, 255, 64]);
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("usage: corner_demo <input-image> [output-dir]");
            std::process::exit(2);
        }
    };
    let outdir = args.next().map_or_else(|| PathBuf::from("out"), PathBuf::from);

    if let Err(e) = run(&input, &outdir) {
        eprintln!("corner_demo: {e}");
        std::process::exit(1);
    }
}
