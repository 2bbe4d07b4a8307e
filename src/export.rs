use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Detection, SizeSummary};
use crate::params::Parameters;

/// Save the annotated image; the format follows the file extension.
pub fn save_annotated(detection: &Detection, path: impl AsRef<Path>) -> Result<()> {
    detection.annotated.save(path.as_ref())?;
    log::info!("saved annotated image to {}", path.as_ref().display());
    Ok(())
}

/// Save the size histogram as CSV.
pub fn save_histogram(summary: &SizeSummary, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    summary.write_csv(BufWriter::new(file))?;
    log::info!("saved histogram to {}", path.as_ref().display());
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct HistogramRow {
    pub size_px: u32,
    pub count: u32,
}

/// Machine readable summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub parameters: Parameters,
    pub width: u32,
    pub height: u32,
    pub particles: u32,
    pub average_size_px: Option<f64>,
    pub histogram: Vec<HistogramRow>,
}

impl Report {
    pub fn new(detection: &Detection, parameters: Parameters) -> Self {
        let summary = &detection.summary;
        Self {
            parameters,
            width: detection.annotated.width(),
            height: detection.annotated.height(),
            particles: summary.count(),
            average_size_px: summary.average(),
            histogram: summary
                .rows()
                .map(|(size_px, count)| HistogramRow { size_px, count })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
