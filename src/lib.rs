pub mod detection;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod pipeline;
pub mod session;

pub use detection::{detect, DetectionPipeline};
pub use error::{Error, Result};
pub use models::{Detection, Particle, SizeSummary};
pub use params::Parameters;
pub use pipeline::{DebugConfig, Pipeline, PipelineStep};
pub use session::Session;

#[cfg(feature = "gui")]
pub mod gui;
