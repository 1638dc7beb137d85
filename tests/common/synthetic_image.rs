/// Generates a grayscale test image with a hollow rectangle outline drawn
/// with the given stroke thickness.
pub fn rectangle_outline_u8(
    width: usize,
    height: usize,
    margin: usize,
    thickness: usize,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(thickness > 0, "stroke thickness must be positive");
    assert!(
        2 * (margin + thickness) < width && 2 * (margin + thickness) < height,
        "outline must fit inside the image"
    );

    let mut img = vec![0u8; width * height];
    let outer_r = (margin, height - margin - 1);
    let outer_c = (margin, width - margin - 1);
    for r in outer_r.0..=outer_r.1 {
        for c in outer_c.0..=outer_c.1 {
            let d_edge = (r - outer_r.0)
                .min(outer_r.1 - r)
                .min(c - outer_c.0)
                .min(outer_c.1 - c);
            if d_edge < thickness {
                img[r * width + c] = 255;
            }
        }
    }
    img
}

/// Generates a grayscale test image with a thick diagonal stroke from the
/// top-left toward the bottom-right corner.
pub fn diagonal_stroke_u8(width: usize, height: usize, thickness: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(thickness > 0, "stroke thickness must be positive");

    let n = width.min(height);
    let mut img = vec![0u8; width * height];
    for i in 0..n {
        for t in 0..thickness {
            let c = i + t;
            if c < width {
                img[i * width + c] = 200;
            }
        }
    }
    img
}
