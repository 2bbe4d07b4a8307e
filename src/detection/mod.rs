pub mod annotate;
pub mod labeling;
pub mod preprocessing;
pub mod steps;

use std::path::PathBuf;
use std::sync::Arc;

use image::GrayImage;

use crate::error::Result;
use crate::models::{Detection, Particle, SizeSummary};
use crate::params::Parameters;
use crate::pipeline::Pipeline;

/// Blur, top-hat and threshold `source` into a binary particle mask.
pub fn mask(source: &GrayImage, params: Parameters) -> GrayImage {
    let blurred = preprocessing::box_blur(source, params.blur());
    let background_free = preprocessing::top_hat(&blurred, params.tophat());
    preprocessing::threshold(&background_free, params.threshold())
}

/// Run the full detection on `source`.
///
/// Pure: the same inputs always give the same [`Detection`].
pub fn detect(source: &GrayImage, params: Parameters) -> Detection {
    finish(source, &mask(source, params))
}

/// Label a finished mask, paint the particles and summarize their sizes.
fn finish(source: &GrayImage, mask: &GrayImage) -> Detection {
    let (labels, particles) = labeling::find_particles(mask);
    let annotated = annotate::annotate(source, &labels);
    let summary = SizeSummary::from_areas(particles.iter().map(Particle::area));

    log::info!("{}", summary.status_message());

    Detection {
        annotated,
        particles,
        summary,
    }
}

/// Build the preprocessing chain for `params` as composable steps.
pub fn build_pipeline(params: Parameters) -> Pipeline {
    use crate::detection::steps::*;

    Pipeline::new()
        .add_step(Arc::new(BoxBlurStep {
            kernel: params.blur(),
        }))
        .add_step(Arc::new(TopHatStep {
            kernel: params.tophat(),
        }))
        .add_step(Arc::new(ThresholdStep {
            threshold: params.threshold(),
        }))
}

/// Detection orchestrator with optional dumping of intermediate buffers.
#[derive(Debug, Clone, Default)]
pub struct DetectionPipeline {
    pub params: Parameters,
    pub debug_dir: Option<PathBuf>,
}

impl DetectionPipeline {
    pub fn new(params: Parameters) -> Self {
        Self {
            params,
            debug_dir: None,
        }
    }

    /// Write each intermediate buffer into `dir` (must be empty or absent).
    pub fn with_debug(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    fn pipeline(&self) -> Result<Pipeline> {
        let pipeline = build_pipeline(self.params);
        match &self.debug_dir {
            Some(dir) => pipeline.with_debug(dir),
            None => Ok(pipeline),
        }
    }

    /// Run the full detection on an image
    pub fn detect(&self, source: &GrayImage) -> Result<Detection> {
        log::debug!(
            "detecting on {}x{} image with {:?}",
            source.width(),
            source.height(),
            self.params
        );
        let mask = self.pipeline()?.run(source)?;
        Ok(finish(source, &mask))
    }

    /// Get the binary mask (for debugging)
    pub fn mask(&self, source: &GrayImage) -> Result<GrayImage> {
        self.pipeline()?.run(source)
    }

    /// Get the detected particles without annotating (for debugging)
    pub fn particles(&self, source: &GrayImage) -> Result<Vec<Particle>> {
        let mask = self.mask(source)?;
        Ok(labeling::find_particles(&mask).1)
    }
}
