//! Composite Scorer — converts an aggregate snapshot into the seven
//! behavioral subscores, the weighted overall score, and the detailed
//! metrics consumers rely on.
//!
//! Pure: `SessionAggregate → ScoreResult` (feedback is attached afterwards
//! by the orchestrator via the feedback generator). Every denominator is
//! guarded; a zero-frame aggregate yields the fixed default result instead
//! of failing.

use serde::{Deserialize, Serialize};

use crate::config::ScoreWeights;

use super::aggregate::SessionAggregate;
use super::feedback::Feedback;

// ────────────────────────────────────────────────────────────────────────────
// Output models (field names are part of the consumer contract)
// ────────────────────────────────────────────────────────────────────────────

/// Derived percentages and movement aggregates, emitted alongside the
/// subscores for transparency and debugging. Float values are rounded to one
/// decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedMetrics {
    pub duration_seconds: f64,
    pub eye_contact_percentage: f64,
    pub smile_percentage: f64,
    pub gesture_usage: f64,
    pub good_posture_percentage: f64,
    pub fidgeting_percentage: f64,
    pub face_visibility: f64,
    pub lighting_quality: f64,
    /// `10 − avg_head_movement × 100`, unclamped — violent movement can push
    /// this negative even though the stability subscore bottoms out at 0.
    pub head_stability: f64,
    pub total_frames_analyzed: u64,
}

/// The analyzer's return value: seven subscores plus the weighted overall
/// score, all on a 0–10 scale.
///
/// A value type with no backing references — safe to serialize and hand to
/// any external caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub eye_contact: f64,
    pub confidence: f64,
    pub body_language: f64,
    pub expressiveness: f64,
    pub stability: f64,
    pub professional_presence: f64,
    pub engagement: f64,
    pub overall_score: f64,
    /// Absent for the zero-frame default and single-frame snapshot results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_metrics: Option<DetailedMetrics>,
    pub feedback: Feedback,
}

impl ScoreResult {
    /// The fixed default returned when a video opened but yielded zero
    /// usable frames. An empty analysis is a legitimate (if uninformative)
    /// outcome, distinct from an unopenable source.
    pub fn default_unanalyzed() -> Self {
        Self {
            eye_contact: 5.0,
            confidence: 5.0,
            body_language: 5.0,
            expressiveness: 5.0,
            stability: 5.0,
            professional_presence: 5.0,
            engagement: 5.0,
            overall_score: 5.0,
            detailed_metrics: None,
            feedback: Feedback {
                strengths: vec![],
                areas_for_improvement: vec!["Could not analyze video properly".to_string()],
                specific_tips: vec!["Ensure good lighting and camera positioning".to_string()],
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Computes subscores, overall score, and detailed metrics from a completed
/// aggregate. Feedback is left empty for the caller to fill via the feedback
/// generator (except the zero-frame default, which carries its own canned
/// feedback).
pub fn compute_scores(
    agg: &SessionAggregate,
    duration_seconds: f64,
    weights: &ScoreWeights,
) -> ScoreResult {
    if agg.total_frames == 0 {
        return ScoreResult::default_unanalyzed();
    }

    let eye_contact_pct = agg.percentage(agg.eye_contact_frames);
    let smile_pct = agg.percentage(agg.smiling_frames);
    let gesture_pct = agg.percentage(agg.hand_gesture_frames);
    let good_posture_pct = agg.percentage(agg.good_posture_frames);
    let fidgeting_pct = agg.percentage(agg.fidgeting_frames);
    let face_visible_pct = agg.percentage(agg.face_visible_frames);

    let avg_head_movement = mean(&agg.head_movements);
    let brightness_std = population_stddev(&agg.brightness_values);
    let lighting_quality = (100.0 - brightness_std).max(0.0);

    let eye_contact = (eye_contact_pct / 10.0).min(10.0);
    let confidence = confidence_score(eye_contact_pct, smile_pct, good_posture_pct, fidgeting_pct);
    let body_language = body_language_score(good_posture_pct, gesture_pct, fidgeting_pct);
    let expressiveness = (smile_pct / 5.0).min(10.0);
    let stability = (10.0 - avg_head_movement * 100.0).max(0.0);
    let professional_presence = presence_score(face_visible_pct, good_posture_pct, lighting_quality);
    let engagement = engagement_score(gesture_pct, smile_pct, eye_contact_pct);

    let overall_score = eye_contact * weights.eye_contact
        + confidence * weights.confidence
        + body_language * weights.body_language
        + expressiveness * weights.expressiveness
        + stability * weights.stability
        + professional_presence * weights.professional_presence
        + engagement * weights.engagement;

    let detailed_metrics = DetailedMetrics {
        duration_seconds,
        eye_contact_percentage: round1(eye_contact_pct),
        smile_percentage: round1(smile_pct),
        gesture_usage: round1(gesture_pct),
        good_posture_percentage: round1(good_posture_pct),
        fidgeting_percentage: round1(fidgeting_pct),
        face_visibility: round1(face_visible_pct),
        lighting_quality: round1(lighting_quality),
        head_stability: round1(10.0 - avg_head_movement * 100.0),
        total_frames_analyzed: agg.total_frames,
    };

    ScoreResult {
        eye_contact,
        confidence,
        body_language,
        expressiveness,
        stability,
        professional_presence,
        engagement,
        overall_score: overall_score.clamp(0.0, 10.0),
        detailed_metrics: Some(detailed_metrics),
        feedback: Feedback::default(),
    }
}

/// High eye contact and good posture read as confident; fidgeting penalizes.
fn confidence_score(eye_contact_pct: f64, smile_pct: f64, posture_pct: f64, fidgeting_pct: f64) -> f64 {
    let base = (eye_contact_pct * 0.4 + posture_pct * 0.4 + smile_pct * 0.2) / 10.0;
    let penalty = fidgeting_pct / 50.0;
    (base - penalty).clamp(0.0, 10.0)
}

/// Good posture plus natural gesturing; excessive fidgeting penalizes harder
/// here than in the confidence score.
fn body_language_score(posture_pct: f64, gesture_pct: f64, fidgeting_pct: f64) -> f64 {
    let base = (posture_pct * 0.6 + gesture_pct * 0.4) / 10.0;
    let penalty = fidgeting_pct / 30.0;
    (base - penalty).clamp(0.0, 10.0)
}

fn presence_score(visibility_pct: f64, posture_pct: f64, lighting_quality: f64) -> f64 {
    (visibility_pct * 0.3 + posture_pct * 0.4 + lighting_quality * 0.3) / 10.0
}

fn engagement_score(gesture_pct: f64, smile_pct: f64, eye_contact_pct: f64) -> f64 {
    (gesture_pct * 0.3 + smile_pct * 0.3 + eye_contact_pct * 0.4) / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Numeric helpers
// ────────────────────────────────────────────────────────────────────────────

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. 0.0 for an empty sample.
fn population_stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
