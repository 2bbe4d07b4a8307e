use std::path::Path;

use image::{GrayImage, ImageReader};

use crate::detection;
use crate::error::Result;
use crate::export;
use crate::models::Detection;
use crate::params::Parameters;

/// State owned by an interactive shell: the loaded image, the current
/// parameters and the output computed from them.
///
/// Every change of image or parameter recomputes the whole detection and
/// replaces the previous output in one go.
#[derive(Debug, Clone, Default)]
pub struct Session {
    source: Option<GrayImage>,
    params: Parameters,
    detection: Option<Detection>,
}

impl Session {
    pub fn new(params: Parameters) -> Self {
        Self {
            source: None,
            params,
            detection: None,
        }
    }

    /// Decode `path` as grayscale and recompute.
    ///
    /// A file that cannot be read leaves the session unset and returns `false`.
    pub fn open(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match read_grayscale(path) {
            Ok(image) => {
                log::info!(
                    "loaded {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                self.load(image);
                true
            }
            Err(e) => {
                log::warn!("could not open {}: {}", path.display(), e);
                self.source = None;
                self.detection = None;
                false
            }
        }
    }

    /// Install an already decoded image and recompute.
    pub fn load(&mut self, image: GrayImage) -> &Detection {
        let detection = detection::detect(&image, self.params);
        self.source = Some(image);
        self.detection.insert(detection)
    }

    pub fn source(&self) -> Option<&GrayImage> {
        self.source.as_ref()
    }

    pub fn params(&self) -> Parameters {
        self.params
    }

    pub fn detection(&self) -> Option<&Detection> {
        self.detection.as_ref()
    }

    /// Parameter controls only make sense once an image is loaded.
    pub fn controls_enabled(&self) -> bool {
        self.source.is_some()
    }

    pub fn set_params(&mut self, params: Parameters) {
        self.params = params;
        self.refresh();
    }

    pub fn set_blur(&mut self, blur: u32) -> Result<()> {
        let params = self.params.with_blur(blur)?;
        self.set_params(params);
        Ok(())
    }

    pub fn set_tophat(&mut self, tophat: u32) -> Result<()> {
        let params = self.params.with_tophat(tophat)?;
        self.set_params(params);
        Ok(())
    }

    pub fn set_threshold(&mut self, threshold: u32) -> Result<()> {
        let params = self.params.with_threshold(threshold)?;
        self.set_params(params);
        Ok(())
    }

    fn refresh(&mut self) {
        if let Some(source) = &self.source {
            self.detection = Some(detection::detect(source, self.params));
        }
    }

    /// Save the annotated image. No target or no output yet is a no-op.
    pub fn save_image(&self, target: Option<&Path>) -> Result<bool> {
        match (target, &self.detection) {
            (Some(path), Some(detection)) => {
                export::save_annotated(detection, path)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Save the histogram CSV. No target or no output yet is a no-op.
    pub fn save_histogram(&self, target: Option<&Path>) -> Result<bool> {
        match (target, &self.detection) {
            (Some(path), Some(detection)) => {
                export::save_histogram(&detection.summary, path)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Decode an image file and convert it to 8-bit grayscale.
pub fn read_grayscale(path: impl AsRef<Path>) -> Result<GrayImage> {
    let img = ImageReader::open(path.as_ref())?.decode()?;
    Ok(img.to_luma8())
}
