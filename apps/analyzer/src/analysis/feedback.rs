//! Feedback Generator — threshold rules that turn subscores and detailed
//! metrics into categorized, human-readable coaching text.
//!
//! Each rule is evaluated independently (they are not mutually exclusive),
//! so a sparse analysis produces sparse feedback rather than an error.

use serde::{Deserialize, Serialize};

use super::scoring::{DetailedMetrics, ScoreResult};

// Rule thresholds. Subscore rules fire on the 0–10 scale, metric rules on
// the 0–100 percentage scale.
const SUBSCORE_STRENGTH_MIN: f64 = 7.0;
const SUBSCORE_IMPROVEMENT_MAX: f64 = 5.0;
const SMILE_STRENGTH_PCT: f64 = 30.0;
const SMILE_IMPROVEMENT_PCT: f64 = 10.0;
const FIDGETING_IMPROVEMENT_PCT: f64 = 30.0;
const POSTURE_IMPROVEMENT_PCT: f64 = 40.0;
const LIGHTING_TIP_MAX: f64 = 60.0;

/// Categorized textual feedback for one analyzed session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub specific_tips: Vec<String>,
}

/// Applies the rule table to a scored session.
pub fn generate_feedback(scores: &ScoreResult, metrics: &DetailedMetrics) -> Feedback {
    let mut feedback = Feedback::default();

    if scores.eye_contact >= SUBSCORE_STRENGTH_MIN {
        feedback
            .strengths
            .push("Excellent eye contact - shows confidence and engagement".to_string());
    } else if scores.eye_contact < SUBSCORE_IMPROVEMENT_MAX {
        feedback
            .areas_for_improvement
            .push("Limited eye contact with camera".to_string());
        feedback.specific_tips.push(
            "Practice looking directly at the camera lens, not at your own image on screen"
                .to_string(),
        );
    }

    if scores.confidence >= SUBSCORE_STRENGTH_MIN {
        feedback
            .strengths
            .push("Strong, confident presence throughout the video".to_string());
    } else if scores.confidence < SUBSCORE_IMPROVEMENT_MAX {
        feedback
            .areas_for_improvement
            .push("Confidence could be improved".to_string());
        feedback
            .specific_tips
            .push("Practice power poses before interviews and maintain good posture".to_string());
    }

    if scores.body_language >= SUBSCORE_STRENGTH_MIN {
        feedback
            .strengths
            .push("Professional and appropriate body language".to_string());
    } else if scores.body_language < SUBSCORE_IMPROVEMENT_MAX {
        feedback
            .areas_for_improvement
            .push("Body language needs work".to_string());
        feedback
            .specific_tips
            .push("Sit up straight, use hand gestures naturally, and avoid fidgeting".to_string());
    }

    if metrics.smile_percentage > SMILE_STRENGTH_PCT {
        feedback.strengths.push(
            "Good use of facial expressions - appears friendly and approachable".to_string(),
        );
    } else if metrics.smile_percentage < SMILE_IMPROVEMENT_PCT {
        feedback
            .areas_for_improvement
            .push("Limited facial expressions".to_string());
        feedback
            .specific_tips
            .push("Smile occasionally to appear more engaging and enthusiastic".to_string());
    }

    if metrics.fidgeting_percentage > FIDGETING_IMPROVEMENT_PCT {
        feedback
            .areas_for_improvement
            .push("Noticeable fidgeting and nervous movements".to_string());
        feedback.specific_tips.push(
            "Keep hands visible and still, take deep breaths to reduce nervous energy".to_string(),
        );
    }

    if metrics.good_posture_percentage < POSTURE_IMPROVEMENT_PCT {
        feedback
            .areas_for_improvement
            .push("Posture needs improvement".to_string());
        feedback.specific_tips.push(
            "Sit up straight with shoulders back - good posture projects confidence".to_string(),
        );
    }

    if metrics.lighting_quality < LIGHTING_TIP_MAX {
        feedback.specific_tips.push(
            "Improve lighting setup - face the light source for better visibility".to_string(),
        );
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scores(eye_contact: f64, confidence: f64, body_language: f64) -> ScoreResult {
        ScoreResult {
            eye_contact,
            confidence,
            body_language,
            expressiveness: 5.0,
            stability: 5.0,
            professional_presence: 5.0,
            engagement: 5.0,
            overall_score: 5.0,
            detailed_metrics: None,
            feedback: Feedback::default(),
        }
    }

    fn make_metrics() -> DetailedMetrics {
        DetailedMetrics {
            duration_seconds: 10.0,
            eye_contact_percentage: 50.0,
            smile_percentage: 20.0,
            gesture_usage: 20.0,
            good_posture_percentage: 60.0,
            fidgeting_percentage: 10.0,
            face_visibility: 90.0,
            lighting_quality: 80.0,
            head_stability: 8.0,
            total_frames_analyzed: 300,
        }
    }

    #[test]
    fn test_high_scores_fill_strengths_only() {
        let feedback = generate_feedback(&make_scores(8.0, 7.5, 9.0), &make_metrics());
        assert_eq!(feedback.strengths.len(), 3);
        assert!(feedback.areas_for_improvement.is_empty());
        assert!(feedback.specific_tips.is_empty());
    }

    #[test]
    fn test_low_scores_pair_improvement_with_tip() {
        let feedback = generate_feedback(&make_scores(3.0, 2.0, 4.0), &make_metrics());
        assert_eq!(feedback.areas_for_improvement.len(), 3);
        assert_eq!(feedback.specific_tips.len(), 3);
        assert!(feedback.strengths.is_empty());
    }

    #[test]
    fn test_midrange_scores_produce_nothing() {
        // Between 5 and 7 no subscore rule fires.
        let feedback = generate_feedback(&make_scores(6.0, 5.5, 6.9), &make_metrics());
        assert!(feedback.strengths.is_empty());
        assert!(feedback.areas_for_improvement.is_empty());
        assert!(feedback.specific_tips.is_empty());
    }

    #[test]
    fn test_frequent_smiling_is_a_strength() {
        let mut metrics = make_metrics();
        metrics.smile_percentage = 45.0;
        let feedback = generate_feedback(&make_scores(6.0, 6.0, 6.0), &metrics);
        assert!(feedback.strengths.iter().any(|s| s.contains("friendly")));
    }

    #[test]
    fn test_rare_smiling_gets_a_tip() {
        let mut metrics = make_metrics();
        metrics.smile_percentage = 5.0;
        let feedback = generate_feedback(&make_scores(6.0, 6.0, 6.0), &metrics);
        assert!(feedback
            .areas_for_improvement
            .iter()
            .any(|s| s == "Limited facial expressions"));
        assert!(feedback.specific_tips.iter().any(|s| s.contains("Smile")));
    }

    #[test]
    fn test_heavy_fidgeting_gets_improvement_and_tip() {
        let mut metrics = make_metrics();
        metrics.fidgeting_percentage = 50.0;
        let feedback = generate_feedback(&make_scores(6.0, 6.0, 6.0), &metrics);
        assert!(feedback
            .areas_for_improvement
            .iter()
            .any(|s| s.contains("fidgeting")));
        assert!(feedback
            .specific_tips
            .iter()
            .any(|s| s.contains("deep breaths")));
    }

    #[test]
    fn test_poor_posture_gets_improvement_and_tip() {
        let mut metrics = make_metrics();
        metrics.good_posture_percentage = 25.0;
        let feedback = generate_feedback(&make_scores(6.0, 6.0, 6.0), &metrics);
        assert!(feedback
            .areas_for_improvement
            .iter()
            .any(|s| s == "Posture needs improvement"));
        assert!(feedback
            .specific_tips
            .iter()
            .any(|s| s.contains("shoulders back")));
    }

    #[test]
    fn test_dim_lighting_gets_tip_only() {
        let mut metrics = make_metrics();
        metrics.lighting_quality = 40.0;
        let feedback = generate_feedback(&make_scores(6.0, 6.0, 6.0), &metrics);
        assert!(feedback.areas_for_improvement.is_empty());
        assert!(feedback
            .specific_tips
            .iter()
            .any(|s| s.contains("light source")));
    }

    #[test]
    fn test_rules_are_independent_not_exclusive() {
        // Everything bad at once: all improvement rules fire together.
        let mut metrics = make_metrics();
        metrics.smile_percentage = 0.0;
        metrics.fidgeting_percentage = 60.0;
        metrics.good_posture_percentage = 10.0;
        metrics.lighting_quality = 30.0;
        let feedback = generate_feedback(&make_scores(1.0, 1.0, 1.0), &metrics);
        assert_eq!(feedback.areas_for_improvement.len(), 6);
        assert_eq!(feedback.specific_tips.len(), 7);
    }

    #[test]
    fn test_boundary_seven_counts_as_strength() {
        let feedback = generate_feedback(&make_scores(7.0, 7.0, 7.0), &make_metrics());
        assert_eq!(feedback.strengths.len(), 3);
    }

    #[test]
    fn test_boundary_five_is_neither() {
        let feedback = generate_feedback(&make_scores(5.0, 5.0, 5.0), &make_metrics());
        assert!(feedback.strengths.is_empty());
        assert!(feedback.areas_for_improvement.is_empty());
    }
}
