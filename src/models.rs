use std::collections::BTreeMap;
use std::io::Write;

use image::RgbImage;

/// One connected foreground region of the binarized mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Particle {
    pub label: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_count: u32,
}

impl Particle {
    /// Area in pixels.
    pub fn area(&self) -> u32 {
        self.pixel_count
    }

    /// Get center coordinates
    pub fn center(&self) -> (u32, u32) {
        ((self.min_x + self.max_x) / 2, (self.min_y + self.max_y) / 2)
    }
}

/// Histogram of particle areas: area in pixels → number of particles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSummary {
    histogram: BTreeMap<u32, u32>,
}

impl SizeSummary {
    pub fn from_areas(areas: impl IntoIterator<Item = u32>) -> Self {
        let mut histogram = BTreeMap::new();
        for area in areas {
            *histogram.entry(area).or_insert(0) += 1;
        }
        Self { histogram }
    }

    /// Rows ordered by ascending area.
    pub fn rows(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.histogram.iter().map(|(&area, &count)| (area, count))
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    /// Total number of particles.
    pub fn count(&self) -> u32 {
        self.histogram.values().sum()
    }

    pub fn total_area(&self) -> u64 {
        self.rows()
            .map(|(area, count)| area as u64 * count as u64)
            .sum()
    }

    /// Mean particle area, or `None` when nothing was detected.
    pub fn average(&self) -> Option<f64> {
        match self.count() {
            0 => None,
            n => Some(self.total_area() as f64 / n as f64),
        }
    }

    /// Human readable one-liner, e.g. `"3 particles detected. Average size: 25.0px."`
    pub fn status_message(&self) -> String {
        match self.average() {
            Some(avg) => format!(
                "{} particles detected. Average size: {:.1}px.",
                self.count(),
                avg
            ),
            None => format!("{} particles detected.", self.count()),
        }
    }

    /// Write the histogram as two-column CSV with a header row.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "Particle Size (px),Amount Detected\r\n")?;
        for (area, count) in self.rows() {
            write!(writer, "{},{}\r\n", area, count)?;
        }
        writer.flush()
    }
}

/// Output of one pipeline run. Always produced and replaced as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub annotated: RgbImage,
    pub particles: Vec<Particle>,
    pub summary: SizeSummary,
}

impl Detection {
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}
