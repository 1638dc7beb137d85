//! Binary mask helpers: binarization and Zhang–Suen thinning.
//!
//! Masks are row-major `u8` buffers, 0 for background and 1 for foreground.
//! `thin_in_place` iterates the two Zhang–Suen subpasses until a full
//! iteration deletes nothing, so the result is a fixed point: reapplying it
//! to an already-thinned mask leaves the mask unchanged. Out-of-grid
//! neighbors count as background.
//!
//! Thinning is topology-preserving along strokes but, like every
//! neighborhood-based scheme, it decides ties locally; the linker downstream
//! treats the output as best-effort binary data rather than a certified
//! skeleton.

use crate::image::{ImageU8, ImageView};

/// Flatten an input view into a 0/1 mask (nonzero byte = foreground).
pub fn binarize(img: &ImageU8) -> Vec<u8> {
    let mut mask = Vec::with_capacity(img.w * img.h);
    for row in img.rows() {
        for &px in row {
            mask.push(u8::from(px != 0));
        }
    }
    mask
}

/// Neighbors P2..P9 of (x, y): clockwise from north, out-of-grid as 0.
#[inline]
fn neighborhood(mask: &[u8], w: usize, h: usize, x: usize, y: usize) -> [u8; 8] {
    let at = |dx: isize, dy: isize| -> u8 {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
            return 0;
        }
        mask[ny as usize * w + nx as usize]
    };
    [
        at(0, -1),  // P2 north
        at(1, -1),  // P3 north-east
        at(1, 0),   // P4 east
        at(1, 1),   // P5 south-east
        at(0, 1),   // P6 south
        at(-1, 1),  // P7 south-west
        at(-1, 0),  // P8 west
        at(-1, -1), // P9 north-west
    ]
}

/// Number of 0→1 transitions in the circular sequence P2, P3, ..., P9, P2.
#[inline]
fn transitions(n: &[u8; 8]) -> u32 {
    let mut count = 0;
    for i in 0..8 {
        if n[i] == 0 && n[(i + 1) % 8] != 0 {
            count += 1;
        }
    }
    count
}

/// Thin a binary mask to a one-pixel-wide skeleton, in place.
///
/// Classic Zhang–Suen: each iteration runs two subpasses, each marking
/// deletable boundary pixels against the unmodified snapshot and erasing
/// them together, until an iteration erases nothing.
pub fn thin_in_place(mask: &mut [u8], w: usize, h: usize) {
    assert_eq!(mask.len(), w * h, "mask length must equal w*h");
    if w == 0 || h == 0 {
        return;
    }

    let mut deletions: Vec<usize> = Vec::new();
    loop {
        let mut erased = 0usize;
        for subpass in 0..2 {
            deletions.clear();
            for y in 0..h {
                for x in 0..w {
                    if mask[y * w + x] == 0 {
                        continue;
                    }
                    let n = neighborhood(mask, w, h, x, y);
                    let b: u32 = n.iter().map(|&v| u32::from(v)).sum();
                    if !(2..=6).contains(&b) || transitions(&n) != 1 {
                        continue;
                    }
                    let [p2, _, p4, _, p6, _, p8, _] = n;
                    let deletable = if subpass == 0 {
                        p2 * p4 * p6 == 0 && p4 * p6 * p8 == 0
                    } else {
                        p2 * p4 * p8 == 0 && p2 * p6 * p8 == 0
                    };
                    if deletable {
                        deletions.push(y * w + x);
                    }
                }
            }
            for &idx in &deletions {
                mask[idx] = 0;
            }
            erased += deletions.len();
        }
        if erased == 0 {
            break;
        }
    }
}
