mod common;

use common::synthetic_image::dark_squares_f32;
use corner_detector::image::GrayF32;
use corner_detector::ransac::point_to_line_distance;
use corner_detector::{fit_line, CornerDetector, DetectorParams, PointTracker, RansacOptions};

#[test]
fn single_square_yields_one_keypoint_near_its_center() {
    let (w, h) = (64usize, 64usize);
    let buffer = dark_squares_f32(w, h, &[(32, 32)], 200.0, 10.0);
    let image = GrayF32::from_vec(w, h, buffer);

    let detector = CornerDetector::new(DetectorParams::default());
    let report = detector.process(&image);

    assert_eq!(
        report.keypoints.len(),
        1,
        "expected exactly one keypoint, got {:?}",
        report.keypoints
    );
    let kp = &report.keypoints[0];
    let tolerance = kp.scale.max(2.0);
    assert!(
        (kp.x - 32.0).abs() <= tolerance && (kp.y - 32.0).abs() <= tolerance,
        "keypoint too far from the square center: ({}, {})",
        kp.x,
        kp.y
    );
    assert!(kp.score > 0.0);
    assert_eq!(kp.scale.log2().fract(), 0.0, "scale must be a power of two");
}

#[test]
fn collinear_squares_recover_their_line() {
    // 15 dark squares along y = 32, eight pixels apart
    let (w, h) = (128usize, 64usize);
    let centers: Vec<(usize, usize)> = (1..16).map(|i| (8 * i, 32)).collect();
    let buffer = dark_squares_f32(w, h, &centers, 200.0, 10.0);
    let image = GrayF32::from_vec(w, h, buffer);

    let detector = CornerDetector::new(DetectorParams::default());
    let report = detector.process(&image);
    assert!(
        report.keypoints.len() >= centers.len() / 2,
        "too few detections: {}",
        report.keypoints.len()
    );

    let points: Vec<[f32; 2]> = report.keypoints.iter().map(|kp| kp.position()).collect();
    let options = RansacOptions {
        trials: 2000,
        inlier_threshold: 1.5,
        seed: 0,
    };
    let fit = fit_line(&points, &options).expect("line fit should succeed");
    assert!(
        fit.num_inliers > 9,
        "not enough support for the line: {}",
        fit.num_inliers
    );
    // the fitted line passes close to every square center
    for &(cx, _) in &centers {
        let d = point_to_line_distance(&fit.line, [cx as f32, 32.0]);
        assert!(d < 3.0, "line misses square at x={cx}: distance {d}");
    }
}

#[test]
fn tracker_hands_the_latest_detection_to_the_fitter() {
    let (w, h) = (64usize, 64usize);
    let first = GrayF32::from_vec(w, h, dark_squares_f32(w, h, &[(16, 16)], 200.0, 10.0));
    let second = GrayF32::from_vec(w, h, dark_squares_f32(w, h, &[(48, 48)], 200.0, 10.0));

    let detector = CornerDetector::new(DetectorParams::default());
    let mut tracker = PointTracker::new(4);
    tracker.push(&detector.process(&first).keypoints);
    tracker.push(&detector.process(&second).keypoints);

    let tracked = tracker.extract(detector.params().tau);
    assert!(!tracked.is_empty());
    for kp in &tracked {
        assert!(
            kp.x > 32.0 && kp.y > 32.0,
            "stale keypoint from the first frame: ({}, {})",
            kp.x,
            kp.y
        );
        assert!(kp.score > detector.params().tau);
    }
}
