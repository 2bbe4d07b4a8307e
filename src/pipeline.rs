use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::GrayImage;

use crate::error::{Error, Result};

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// Save one intermediate buffer as `<index>_<step name>.png`.
    fn save(&self, index: usize, step_name: &str, image: &GrayImage) -> Result<PathBuf> {
        let filename = format!(
            "{:02}_{}.png",
            index,
            step_name.to_lowercase().replace(' ', "_")
        );
        let path = self.output_dir.join(filename);
        image.save(&path)?;
        Ok(path)
    }
}

/// A single grayscale-to-grayscale stage of the preprocessing chain.
pub trait PipelineStep: Send + Sync {
    fn process(&self, image: &GrayImage) -> Result<GrayImage>;

    /// Human-readable name for this step (used in logs and debug filenames)
    fn name(&self) -> &str;
}

/// Composable chain of steps, run strictly in insertion order.
#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    debug: Option<DebugConfig>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable debug mode with output directory.
    /// The directory must be empty or non-existent.
    pub fn with_debug(mut self, output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        if output_dir.exists() {
            if std::fs::read_dir(&output_dir)?.next().is_some() {
                return Err(Error::DebugDirNotEmpty(output_dir));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, input: &GrayImage) -> Result<GrayImage> {
        if let Some(debug) = &self.debug {
            let path = debug.save(0, "input", input)?;
            log::debug!("saved {}", path.display());
        }

        let mut current = input.clone();
        for (idx, step) in self.steps.iter().enumerate() {
            log::debug!("running step {}: {}", idx + 1, step.name());
            current = step.process(&current)?;

            if let Some(debug) = &self.debug {
                let path = debug.save(idx + 1, step.name(), &current)?;
                log::debug!("saved {}", path.display());
            }
        }

        Ok(current)
    }

    /// Run only the first `num_steps` steps (useful for inspecting intermediates).
    pub fn run_partial(&self, input: &GrayImage, num_steps: usize) -> Result<GrayImage> {
        let mut current = input.clone();
        for step in self.steps.iter().take(num_steps) {
            current = step.process(&current)?;
        }
        Ok(current)
    }
}
