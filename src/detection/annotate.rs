use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use crate::detection::labeling::LabelImage;

/// Colour painted over every particle pixel.
pub const MARKER: Rgb<u8> = Rgb([0, 255, 0]);

/// Convert the source to RGB and paint all labelled pixels with [`MARKER`].
pub fn annotate(source: &GrayImage, labels: &LabelImage) -> RgbImage {
    let mut out = DynamicImage::ImageLuma8(source.clone()).into_rgb8();
    for (pixel, label) in out.pixels_mut().zip(labels.pixels()) {
        if label[0] != 0 {
            *pixel = MARKER;
        }
    }
    out
}
