//! Input seams — the decoded-frame source and the landmark detector.
//!
//! Container decoding and temp-file handling are external responsibilities;
//! the analyzer consumes already-decoded RGB frames through [`FrameSource`]
//! and opaque landmark outputs through [`LandmarkDetector`]. Both are trait
//! objects so the vision backend can be swapped without touching the
//! scoring pipeline.

use crate::errors::AnalyzerError;
use crate::landmarks::FrameLandmarks;

// BT.601 luma coefficients, the standard video grayscale conversion.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// One decoded video frame or still image: packed RGB8, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Wraps a packed RGB8 buffer. Errors when the buffer length does not
    /// match `width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AnalyzerError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(AnalyzerError::InvalidFrame(format!(
                "expected {expected} bytes for {width}x{height} RGB8, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mean grayscale intensity of the frame in [0, 255].
    ///
    /// Returns 0.0 for a zero-sized frame.
    pub fn mean_luma(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let pixel_count = (self.data.len() / 3) as f64;
        let sum: f64 = self
            .data
            .chunks_exact(3)
            .map(|px| LUMA_R * px[0] as f64 + LUMA_G * px[1] as f64 + LUMA_B * px[2] as f64)
            .sum();
        sum / pixel_count
    }
}

/// Sequential access to an already-opened, already-decoded video stream.
///
/// Implementations wrap whatever decoder the embedding application uses. An
/// unopenable source should surface [`AnalyzerError::UnopenableSource`] from
/// the first `next_frame` pull; an opened-but-empty stream returns `Ok(None)`
/// immediately (the analyzer recovers from that with a default result).
pub trait FrameSource {
    /// Frames per second of the stream. Non-positive rates disable duration
    /// computation.
    fn frame_rate(&self) -> f64;

    /// Total frame count reported by the container, when known. Used for
    /// duration and progress percentages only — the analyzer always iterates
    /// until the stream is exhausted.
    fn frame_count_hint(&self) -> Option<u64> {
        None
    }

    /// Pulls the next frame, or `Ok(None)` when the stream is exhausted.
    fn next_frame(&mut self) -> Result<Option<ImageBuffer>, AnalyzerError>;
}

/// A landmark detection backend (face mesh + hand tracking + pose estimation).
///
/// Detectors are stateful (internal tracking between frames) and must not be
/// shared between concurrent analyses — each [`InterviewAnalyzer`]
/// (crate::analysis::session::InterviewAnalyzer) owns its detector
/// exclusively for the duration of a session.
///
/// A frame with no detectable subject yields an empty [`FrameLandmarks`],
/// not an error; `Err` is reserved for real inference failures.
pub trait LandmarkDetector {
    fn detect(&mut self, frame: &ImageBuffer) -> Result<FrameLandmarks, AnalyzerError>;
}
