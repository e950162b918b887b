//! Sketch classification boundary
//!
//! The AI classifier is an external collaborator; this module owns its
//! contract: one still raster in, one weapon label out, with typed errors.
//! A blank canvas is rejected locally before any classifier call is made.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::WeaponKind;

/// Pixels at or above this luma count as untouched background
const INK_THRESHOLD: u8 = 250;

/// A grayscale raster of the drawing surface (white background, dark ink)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchImage {
    pub width: u32,
    pub height: u32,
    /// Row-major luma values, `width * height` bytes
    pub pixels: Vec<u8>,
}

impl SketchImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An untouched white canvas
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF; (width * height) as usize],
        }
    }

    /// True when no pixel is darker than the ink threshold
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p >= INK_THRESHOLD)
    }
}

/// Failures at the classification boundary, per the error taxonomy:
/// empty input is caught locally, remote failures become typed results.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Rejected locally; the classifier is never invoked
    #[error("the canvas is empty - draw a weapon first")]
    EmptyCanvas,
    /// The classifier call itself failed (network, model, etc.)
    #[error("classification failed: {0}")]
    Backend(String),
    /// The classifier answered with something outside the known label set.
    /// Callers may still start a game via [`WeaponKind::from_label_lossy`],
    /// but the boundary never defaults silently.
    #[error("unrecognized weapon label: {0:?}")]
    UnknownLabel(String),
}

/// External classifier contract: a single image in, one of the closed
/// label set out. Implementations must return an error rather than
/// defaulting to a label.
pub trait Classifier {
    fn classify(&mut self, image: &SketchImage) -> Result<WeaponKind, ClassifyError>;
}

/// Classify a sketch, rejecting blank canvases before any remote call.
pub fn classify_sketch<C: Classifier>(
    classifier: &mut C,
    image: &SketchImage,
) -> Result<WeaponKind, ClassifyError> {
    if image.is_blank() {
        return Err(ClassifyError::EmptyCanvas);
    }
    match classifier.classify(image) {
        Ok(kind) => {
            log::info!("sketch classified as {}", kind.label());
            Ok(kind)
        }
        Err(err) => {
            log::warn!("classification failed: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts calls so tests can prove the remote boundary was skipped.
    struct FakeClassifier {
        label: &'static str,
        calls: u32,
        fail: bool,
    }

    impl FakeClassifier {
        fn answering(label: &'static str) -> Self {
            Self {
                label,
                calls: 0,
                fail: false,
            }
        }
    }

    impl Classifier for FakeClassifier {
        fn classify(&mut self, _image: &SketchImage) -> Result<WeaponKind, ClassifyError> {
            self.calls += 1;
            if self.fail {
                return Err(ClassifyError::Backend("model unavailable".into()));
            }
            WeaponKind::from_label(self.label)
                .ok_or_else(|| ClassifyError::UnknownLabel(self.label.to_string()))
        }
    }

    fn inked_sketch() -> SketchImage {
        let mut image = SketchImage::blank(8, 8);
        image.pixels[12] = 0;
        image
    }

    #[test]
    fn test_blank_canvas_rejected_without_remote_call() {
        let mut classifier = FakeClassifier::answering("sword");
        let result = classify_sketch(&mut classifier, &SketchImage::blank(8, 8));
        assert!(matches!(result, Err(ClassifyError::EmptyCanvas)));
        assert_eq!(classifier.calls, 0);
    }

    #[test]
    fn test_faint_marks_still_count_as_blank() {
        let mut image = SketchImage::blank(4, 4);
        image.pixels[0] = INK_THRESHOLD; // exactly at the threshold
        assert!(image.is_blank());

        image.pixels[0] = INK_THRESHOLD - 1;
        assert!(!image.is_blank());
    }

    #[test]
    fn test_inked_sketch_is_classified() {
        let mut classifier = FakeClassifier::answering("shield");
        let result = classify_sketch(&mut classifier, &inked_sketch());
        assert_eq!(result.unwrap(), WeaponKind::Shield);
        assert_eq!(classifier.calls, 1);
    }

    #[test]
    fn test_backend_failure_surfaces_as_error() {
        let mut classifier = FakeClassifier::answering("gun");
        classifier.fail = true;
        let result = classify_sketch(&mut classifier, &inked_sketch());
        assert!(matches!(result, Err(ClassifyError::Backend(_))));
    }

    #[test]
    fn test_unknown_label_is_an_error_not_a_default() {
        let mut classifier = FakeClassifier::answering("trebuchet");
        let result = classify_sketch(&mut classifier, &inked_sketch());
        match result {
            Err(ClassifyError::UnknownLabel(label)) => assert_eq!(label, "trebuchet"),
            other => panic!("expected UnknownLabel, got {other:?}"),
        }
    }
}
