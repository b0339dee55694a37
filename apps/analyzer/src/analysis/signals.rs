//! Per-Frame Signal Extractor — converts one frame's landmark sets and pixel
//! buffer into a small behavioral signal record.
//!
//! Missing landmark sets never fail the frame: a subject briefly out of view
//! is an expected state, and every predicate degrades to a conservative
//! default instead of raising.

use serde::{Deserialize, Serialize};

use crate::config::SignalThresholds;
use crate::landmarks::{FaceLandmarks, FrameLandmarks, Point, PoseLandmarks};
use crate::source::ImageBuffer;

/// Behavioral signals extracted from a single frame.
///
/// Ephemeral: produced here, folded into the session aggregate once, then
/// discarded. Never shared across frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSignal {
    pub face_visible: bool,
    pub eye_contact: bool,
    pub smiling: bool,
    pub hand_present: bool,
    /// Wrist position of the primary hand, for movement tracking.
    pub hand_position: Option<Point>,
    /// `None` when no pose was detected this frame.
    pub posture_good: Option<bool>,
    /// Mean grayscale intensity of the frame, 0–255.
    pub brightness: f64,
    /// Nose-tip position, used as the head-movement proxy.
    pub head_position: Option<Point>,
}

/// Extracts the full signal record for one frame.
pub fn extract_signal(
    landmarks: &FrameLandmarks,
    frame: &ImageBuffer,
    thresholds: &SignalThresholds,
) -> FrameSignal {
    let face = landmarks.face.as_ref();
    let hand = landmarks.primary_hand();

    FrameSignal {
        face_visible: face.is_some(),
        eye_contact: face.map(|f| is_eye_contact(f, thresholds)).unwrap_or(false),
        smiling: face.map(|f| is_smiling(f, thresholds)).unwrap_or(false),
        hand_present: hand.is_some(),
        hand_position: hand.map(|h| h.wrist),
        posture_good: landmarks.pose.as_ref().map(|p| is_posture_good(p, thresholds)),
        brightness: frame.mean_luma(),
        head_position: face.map(|f| f.nose_tip),
    }
}

/// Eye contact: the horizontal iris midpoint sits close to the nose tip.
///
/// A coarse looking-at-the-lens proxy, not true gaze estimation — a centered
/// gaze relative to the nose is what a camera-facing subject produces.
pub fn is_eye_contact(face: &FaceLandmarks, thresholds: &SignalThresholds) -> bool {
    let iris_mid_x = (face.left_iris.x + face.right_iris.x) / 2.0;
    let deviation = (iris_mid_x - face.nose_tip.x).abs();
    deviation < thresholds.gaze_deviation_max
}

/// Smile: a wide mouth relative to its opening height.
pub fn is_smiling(face: &FaceLandmarks, thresholds: &SignalThresholds) -> bool {
    let width = (face.right_mouth_corner.x - face.left_mouth_corner.x).abs();
    let height = (face.lower_inner_lip.y - face.upper_inner_lip.y).abs();
    let ratio = width / (height + thresholds.mouth_height_epsilon);
    ratio > thresholds.smile_ratio_min
}

/// Good posture: shoulders level with each other, and both above their hips
/// (smaller y is higher on screen).
pub fn is_posture_good(pose: &PoseLandmarks, thresholds: &SignalThresholds) -> bool {
    let shoulder_diff = (pose.left_shoulder.y - pose.right_shoulder.y).abs();
    let back_straight =
        pose.left_shoulder.y < pose.left_hip.y && pose.right_shoulder.y < pose.right_hip.y;
    shoulder_diff < thresholds.shoulder_alignment_max && back_straight
}
