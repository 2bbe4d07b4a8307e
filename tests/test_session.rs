//! Integration tests for the interactive session state.
//!
//! Tests cover:
//! - Controls stay disabled until an image is loaded
//! - Every accepted parameter change recomputes the output
//! - Rejected parameters leave the state untouched
//! - Failed loads reset to the unset state
//! - Saving is a no-op without a target or an output

mod common;

use image::{Rgb, RgbImage};
use npdetect::Error;
use npdetect::session::read_grayscale;

use common::*;

#[test]
fn test_new_session_is_unset() {
    let session = Session::default();
    assert!(!session.controls_enabled());
    assert!(session.source().is_none());
    assert!(session.detection().is_none());
    assert_eq!(session.params(), Parameters::default());
}

#[test]
fn test_parameter_change_without_image_does_not_compute() -> anyhow::Result<()> {
    let mut session = Session::default();
    session.set_blur(1)?;
    assert_eq!(session.params().blur(), 1);
    assert!(session.detection().is_none());
    Ok(())
}

#[test]
fn test_load_computes_detection() {
    let mut session = Session::new(sharp_params());
    let source = single_square_image();

    let count = session.load(source.clone()).particle_count();
    assert_eq!(count, 1);
    assert!(session.controls_enabled());
    assert_eq!(session.detection(), Some(&detect(&source, sharp_params())));
}

#[test]
fn test_parameter_change_recomputes() -> anyhow::Result<()> {
    let mut session = Session::new(sharp_params());
    session.load(graded_squares_image());
    assert_eq!(session.detection().unwrap().summary.count(), 3);

    session.set_threshold(150)?;
    assert_eq!(session.detection().unwrap().summary.count(), 1);

    session.set_threshold(220)?;
    assert_eq!(session.detection().unwrap().summary.count(), 0);

    session.set_tophat(3)?;
    session.set_threshold(40)?;
    let expected = detect(&graded_squares_image(), session.params());
    assert_eq!(session.detection(), Some(&expected));
    Ok(())
}

#[test]
fn test_rejected_parameter_keeps_state() {
    let mut session = Session::new(sharp_params());
    session.load(single_square_image());
    let before = session.detection().cloned();

    assert!(matches!(session.set_blur(0), Err(Error::ParameterOutOfRange { .. })));
    assert!(matches!(session.set_tophat(101), Err(Error::ParameterOutOfRange { .. })));
    assert!(matches!(session.set_threshold(256), Err(Error::ParameterOutOfRange { .. })));

    assert_eq!(session.params(), sharp_params());
    assert_eq!(session.detection().cloned(), before);
}

#[test]
fn test_open_reads_grayscale_file() {
    let source = single_square_image();
    let file = write_png(&source);

    let mut session = Session::new(sharp_params());
    assert!(session.open(file.path()));
    assert_eq!(session.source(), Some(&source));
    assert_eq!(session.detection().unwrap().particle_count(), 1);
}

#[test]
fn test_open_failure_resets_to_unset() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let mut session = Session::new(sharp_params());
    session.load(single_square_image());

    assert!(!session.open(dir.path().join("missing.png")));
    assert!(!session.controls_enabled());
    assert!(session.detection().is_none());

    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"not an image")?;
    assert!(!session.open(&garbage));
    assert!(session.source().is_none());
    Ok(())
}

#[test]
fn test_save_without_target_or_output_is_noop() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let target = dir.path().join("out.png");

    let mut session = Session::new(sharp_params());
    assert!(!session.save_image(Some(&target))?);
    assert!(!session.save_histogram(Some(&target))?);
    assert!(!target.exists());

    session.load(single_square_image());
    assert!(!session.save_image(None)?);
    assert!(!session.save_histogram(None)?);
    Ok(())
}

#[test]
fn test_save_writes_image_and_histogram() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let image_path = dir.path().join("output.png");
    let csv_path = dir.path().join("histogram.csv");

    let mut session = Session::new(sharp_params());
    session.load(single_square_image());
    assert!(session.save_image(Some(&image_path))?);
    assert!(session.save_histogram(Some(&csv_path))?);

    let saved = image::open(&image_path)?.to_rgb8();
    assert_eq!(&saved, &session.detection().unwrap().annotated);

    let csv = std::fs::read_to_string(&csv_path)?;
    assert_eq!(csv, "Particle Size (px),Amount Detected\r\n25,1\r\n");
    Ok(())
}

#[test]
fn test_color_file_is_read_as_luma() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("color.png");
    RgbImage::from_pixel(6, 4, Rgb([200, 200, 200])).save(&path)?;

    let gray = read_grayscale(&path)?;
    assert_eq!(gray.dimensions(), (6, 4));
    assert!(gray.pixels().all(|p| p[0] == 200));
    Ok(())
}
