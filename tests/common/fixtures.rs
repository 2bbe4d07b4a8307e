use image::{DynamicImage, GrayImage, Luma};
use npdetect::Parameters;
use tempfile::NamedTempFile;

/// An all-black image.
pub fn black_image(width: u32, height: u32) -> GrayImage {
    GrayImage::new(width, height)
}

/// Paint a filled `side x side` square with its top-left corner at `(x, y)`.
pub fn paint_square(img: &mut GrayImage, x: u32, y: u32, side: u32, value: u8) {
    for yy in y..y + side {
        for xx in x..x + side {
            img.put_pixel(xx, yy, Luma([value]));
        }
    }
}

/// A 100x100 dark image with one bright 5x5 square at (40, 40).
pub fn single_square_image() -> GrayImage {
    let mut img = black_image(100, 100);
    paint_square(&mut img, 40, 40, 5, 255);
    img
}

/// Three well separated 4x4 squares of brightness 60, 120 and 200.
pub fn graded_squares_image() -> GrayImage {
    let mut img = black_image(80, 40);
    paint_square(&mut img, 10, 10, 4, 60);
    paint_square(&mut img, 35, 10, 4, 120);
    paint_square(&mut img, 60, 10, 4, 200);
    img
}

/// Parameters that leave the source untouched before thresholding.
pub fn sharp_params() -> Parameters {
    Parameters::new(1, 9, 40).expect("valid parameters")
}

/// Save `img` as a temporary PNG. The file is removed when dropped.
pub fn write_png(img: &GrayImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// The annotated image expected when nothing is detected.
pub fn as_rgb(img: &GrayImage) -> image::RgbImage {
    DynamicImage::ImageLuma8(img.clone()).into_rgb8()
}
