use image::{GrayImage, Luma};
use imageproc::morphology::{grayscale_open, Mask};

/// Offsets of a `k`-wide window around its anchor: `[-before, after]`.
///
/// The anchor sits at `k / 2`, so even kernels extend one pixel further
/// to the left/top than to the right/bottom.
fn window(k: u32) -> (i64, i64) {
    let before = (k / 2) as i64;
    let after = k as i64 - 1 - before;
    (before, after)
}

/// Mirror an out-of-range index back into `0..n` without repeating the edge.
fn reflect_101(mut i: i64, n: i64) -> i64 {
    if n == 1 {
        return 0;
    }
    while i < 0 || i >= n {
        if i < 0 {
            i = -i;
        }
        if i >= n {
            i = 2 * (n - 1) - i;
        }
    }
    i
}

/// Normalized box filter with a `k x k` kernel and reflected borders.
pub fn box_blur(img: &GrayImage, k: u32) -> GrayImage {
    let (width, height) = img.dimensions();
    if k <= 1 || width == 0 || height == 0 {
        return img.clone();
    }
    let (before, after) = window(k);
    let (w, h) = (width as i64, height as i64);

    // Horizontal pass: per-pixel window sums.
    let mut rows = vec![0u32; width as usize * height as usize];
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0u32;
            for dx in -before..=after {
                let sx = reflect_101(x + dx, w);
                sum += img.get_pixel(sx as u32, y as u32)[0] as u32;
            }
            rows[(y * w + x) as usize] = sum;
        }
    }

    let area = k * k;
    let mut out = GrayImage::new(width, height);
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0u32;
            for dy in -before..=after {
                let sy = reflect_101(y + dy, h);
                sum += rows[(sy * w + x) as usize];
            }
            out.put_pixel(x as u32, y as u32, Luma([round_half_even(sum, area) as u8]));
        }
    }
    out
}

/// `sum / area` rounded to nearest, ties to even.
fn round_half_even(sum: u32, area: u32) -> u32 {
    let (q, r) = (sum / area, sum % area);
    if 2 * r > area || (2 * r == area && q % 2 == 1) {
        q + 1
    } else {
        q
    }
}

/// Square `k x k` structuring element anchored at `(k / 2, k / 2)`.
pub fn square_element(k: u32) -> Mask {
    let square = GrayImage::from_pixel(k, k, Luma([255]));
    Mask::from_image(&square, (k / 2) as u8, (k / 2) as u8)
}

/// White top-hat: the image minus its opening by a `k x k` square.
pub fn top_hat(img: &GrayImage, k: u32) -> GrayImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }
    let opened = grayscale_open(img, &square_element(k));
    let mut out = img.clone();
    for (dst, bg) in out.pixels_mut().zip(opened.pixels()) {
        dst[0] = dst[0].saturating_sub(bg[0]);
    }
    out
}

/// Binary threshold: strictly above `threshold` becomes 255, the rest 0.
pub fn threshold(img: &GrayImage, threshold: u8) -> GrayImage {
    let mut mask = img.clone();
    for pixel in mask.pixels_mut() {
        pixel[0] = if pixel[0] > threshold { 255 } else { 0 };
    }
    mask
}
