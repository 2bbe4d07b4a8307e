use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{Error, Result};

/// Accepted side lengths for the blur and top-hat kernels.
pub const KERNEL_RANGE: RangeInclusive<u32> = 1..=100;

/// Accepted binarization thresholds.
pub const THRESHOLD_RANGE: RangeInclusive<u32> = 0..=255;

pub const DEFAULT_BLUR: u32 = 3;
pub const DEFAULT_TOPHAT: u32 = 9;
pub const DEFAULT_THRESHOLD: u32 = 40;

/// The three knobs of the detection pipeline.
///
/// Values are validated on construction, so a `Parameters` in hand is
/// always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameters {
    blur: u32,
    tophat: u32,
    threshold: u8,
}

impl Parameters {
    /// Build validated parameters, rejecting anything out of range.
    pub fn new(blur: u32, tophat: u32, threshold: u32) -> Result<Self> {
        check("blur", blur, &KERNEL_RANGE)?;
        check("tophat", tophat, &KERNEL_RANGE)?;
        check("threshold", threshold, &THRESHOLD_RANGE)?;
        Ok(Self {
            blur,
            tophat,
            threshold: threshold as u8,
        })
    }

    /// Build parameters, clamping each value into its range.
    pub fn clamped(blur: u32, tophat: u32, threshold: u32) -> Self {
        Self {
            blur: clamp(blur, &KERNEL_RANGE),
            tophat: clamp(tophat, &KERNEL_RANGE),
            threshold: clamp(threshold, &THRESHOLD_RANGE) as u8,
        }
    }

    pub fn blur(&self) -> u32 {
        self.blur
    }

    pub fn tophat(&self) -> u32 {
        self.tophat
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn with_blur(self, blur: u32) -> Result<Self> {
        check("blur", blur, &KERNEL_RANGE)?;
        Ok(Self { blur, ..self })
    }

    pub fn with_tophat(self, tophat: u32) -> Result<Self> {
        check("tophat", tophat, &KERNEL_RANGE)?;
        Ok(Self { tophat, ..self })
    }

    pub fn with_threshold(self, threshold: u32) -> Result<Self> {
        check("threshold", threshold, &THRESHOLD_RANGE)?;
        Ok(Self {
            threshold: threshold as u8,
            ..self
        })
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            blur: DEFAULT_BLUR,
            tophat: DEFAULT_TOPHAT,
            threshold: DEFAULT_THRESHOLD as u8,
        }
    }
}

fn check(name: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::ParameterOutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
