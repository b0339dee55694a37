use thiserror::Error;

/// Analyzer-level error type.
///
/// A failed analysis surfaces exactly one of these; the pipeline never
/// substitutes a default score for a real input failure. A video that opens
/// but contains zero usable frames is NOT an error — see
/// [`ScoreResult::default_unanalyzed`](crate::analysis::scoring::ScoreResult::default_unanalyzed).
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The video source could not be opened or decoded at all. Fatal for the
    /// call: this signals corrupted input, not poor interview performance.
    #[error("Could not open video source: {0}")]
    UnopenableSource(String),

    /// The landmark detector failed on a frame. Missing landmarks are not an
    /// error (the detector returns empty sets for those); this is reserved
    /// for real inference failures.
    #[error("Landmark detector error: {0}")]
    Detector(String),

    /// A pixel buffer with inconsistent dimensions was supplied.
    #[error("Invalid frame buffer: {0}")]
    InvalidFrame(String),

    #[error("Internal analyzer error: {0}")]
    Internal(#[from] anyhow::Error),
}
