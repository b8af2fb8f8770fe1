use corner_detector::image::GrayU8;
use corner_detector::{CornerDetector, DetectorParams};

fn main() {
    // Demo stub: creates a fake 8-bit image buffer and runs the detector
    let w = 640usize;
    let h = 480usize;
    let stride = w; // tightly packed
    let mut gray = vec![200u8; w * h];
    // one dark 3x3 blob to detect
    for y in 239..242 {
        for x in 319..322 {
            gray[y * stride + x] = 10;
        }
    }
    let img = GrayU8 {
        w,
        h,
        stride,
        data: &gray,
    };

    let det = CornerDetector::new(DetectorParams::default());
    let report = det.process(&img.to_luminance());
    println!(
        "keypoints={} raw={} latency_ms={:.3}",
        report.keypoints.len(),
        report.raw_count,
        report.latency_ms
    );
}
