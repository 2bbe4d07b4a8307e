use crate::detection::preprocessing;
use crate::error::Result;
use crate::pipeline::PipelineStep;
use image::GrayImage;

/// Denoise with a square box blur
pub struct BoxBlurStep {
    pub kernel: u32,
}

impl PipelineStep for BoxBlurStep {
    fn process(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(preprocessing::box_blur(image, self.kernel))
    }

    fn name(&self) -> &str {
        "Box Blur"
    }
}

/// Suppress the background with a white top-hat
pub struct TopHatStep {
    pub kernel: u32,
}

impl PipelineStep for TopHatStep {
    fn process(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(preprocessing::top_hat(image, self.kernel))
    }

    fn name(&self) -> &str {
        "Top Hat"
    }
}

/// Binarize into a {0, 255} mask
pub struct ThresholdStep {
    pub threshold: u8,
}

impl PipelineStep for ThresholdStep {
    fn process(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(preprocessing::threshold(image, self.threshold))
    }

    fn name(&self) -> &str {
        "Threshold"
    }
}
