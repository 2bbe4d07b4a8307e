mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from npdetect for tests
pub use npdetect::{detect, Detection, Parameters, Particle, Session, SizeSummary};
