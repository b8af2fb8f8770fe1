/// Generates a flat luminance buffer with dark 3×3 squares at the given
/// centers.
pub fn dark_squares_f32(
    width: usize,
    height: usize,
    centers: &[(usize, usize)],
    background: f32,
    foreground: f32,
) -> Vec<f32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![background; width * height];
    for &(cx, cy) in centers {
        assert!(
            cx >= 1 && cy >= 1 && cx + 1 < width && cy + 1 < height,
            "square center too close to the border"
        );
        for y in cy - 1..=cy + 1 {
            for x in cx - 1..=cx + 1 {
                img[y * width + x] = foreground;
            }
        }
    }
    img
}
