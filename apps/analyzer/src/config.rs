//! Analyzer configuration — every heuristic threshold and score weight as a
//! named, documented field so they can be tuned and tested independently of
//! the scoring pipeline.

use serde::{Deserialize, Serialize};

/// Per-frame signal detection thresholds.
///
/// All position-based thresholds are in normalized image coordinates
/// (landmark coordinates are in [0, 1] on both axes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// Maximum horizontal deviation between the iris midpoint and the nose
    /// tip for a frame to count as eye contact. A centered gaze relative to
    /// the nose approximates looking at the lens.
    pub gaze_deviation_max: f64,
    /// Minimum mouth width/height ratio for a frame to count as smiling.
    pub smile_ratio_min: f64,
    /// Added to the mouth height before the ratio division to avoid a zero
    /// denominator on a fully closed mouth.
    pub mouth_height_epsilon: f64,
    /// Minimum single-frame wrist displacement for a frame to count as
    /// fidgeting.
    pub fidget_displacement_min: f64,
    /// Maximum vertical offset between the two shoulders for posture to
    /// count as aligned.
    pub shoulder_alignment_max: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            gaze_deviation_max: 0.05,
            smile_ratio_min: 3.0,
            mouth_height_epsilon: 0.001,
            fidget_displacement_min: 0.05,
            shoulder_alignment_max: 0.1,
        }
    }
}

/// Weights for the overall score. Fixed design constants that sum to 1.0 —
/// existing consumers depend on these exact scales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub eye_contact: f64,
    pub confidence: f64,
    pub body_language: f64,
    pub expressiveness: f64,
    pub stability: f64,
    pub professional_presence: f64,
    pub engagement: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            eye_contact: 0.20,
            confidence: 0.25,
            body_language: 0.20,
            expressiveness: 0.10,
            stability: 0.10,
            professional_presence: 0.10,
            engagement: 0.05,
        }
    }
}

impl ScoreWeights {
    /// Sum of all seven weights. 1.0 for the default set.
    pub fn total(&self) -> f64 {
        self.eye_contact
            + self.confidence
            + self.body_language
            + self.expressiveness
            + self.stability
            + self.professional_presence
            + self.engagement
    }
}

/// Full analyzer configuration carried by one
/// [`InterviewAnalyzer`](crate::analysis::session::InterviewAnalyzer) instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub thresholds: SignalThresholds,
    pub weights: ScoreWeights,
    /// Emit a progress log line (and progress callback, if any) every N
    /// frames during full-video analysis.
    pub progress_log_interval: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            thresholds: SignalThresholds::default(),
            weights: ScoreWeights::default(),
            progress_log_interval: 10,
        }
    }
}
