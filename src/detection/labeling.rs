use image::{GrayImage, ImageBuffer, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};
use std::collections::BTreeMap;
use crate::models::Particle;

/// Per-pixel component labels; 0 is background.
pub type LabelImage = ImageBuffer<Luma<u32>, Vec<u32>>;

/// Label the foreground of a binary mask with 8-connectivity.
pub fn label_mask(mask: &GrayImage) -> LabelImage {
    connected_components(mask, Connectivity::Eight, Luma([0u8]))
}

/// Collect one particle per non-background label, ordered by label.
pub fn extract_particles(labels: &LabelImage) -> Vec<Particle> {
    let mut regions: BTreeMap<u32, Particle> = BTreeMap::new();

    for (x, y, label) in labels.enumerate_pixels() {
        let label = label[0];
        if label == 0 {
            continue;
        }

        regions
            .entry(label)
            .and_modify(|p| {
                p.min_x = p.min_x.min(x);
                p.min_y = p.min_y.min(y);
                p.max_x = p.max_x.max(x);
                p.max_y = p.max_y.max(y);
                p.pixel_count += 1;
            })
            .or_insert(Particle {
                label,
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
                pixel_count: 1,
            });
    }

    regions.into_values().collect()
}

/// Label the mask and return both the label image and its particles.
pub fn find_particles(mask: &GrayImage) -> (LabelImage, Vec<Particle>) {
    let labels = label_mask(mask);
    let particles = extract_particles(&labels);
    (labels, particles)
}
