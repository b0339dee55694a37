//! Session Aggregator — folds the ordered per-frame signal stream into
//! running counters and sample sequences.
//!
//! One instance per analysis run, exclusively owned by the orchestrator.
//! Movement deltas depend on original frame order, so signals must be
//! observed exactly once, in sequence.

use serde::{Deserialize, Serialize};

use crate::config::SignalThresholds;
use crate::landmarks::Point;

use super::signals::FrameSignal;

/// Counters and samples accumulated over one analyzed video.
///
/// Counter invariants (maintained by [`observe`](Self::observe)):
/// - every counter ≤ `total_frames`
/// - `eye_contact_frames + looking_away_frames == face_visible_frames`
/// - `smiling_frames + neutral_frames == face_visible_frames`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionAggregate {
    pub total_frames: u64,
    pub face_visible_frames: u64,
    pub eye_contact_frames: u64,
    pub looking_away_frames: u64,
    pub smiling_frames: u64,
    pub neutral_frames: u64,
    pub hand_gesture_frames: u64,
    pub still_frames: u64,
    pub good_posture_frames: u64,
    pub poor_posture_frames: u64,
    pub fidgeting_frames: u64,

    /// Mean grayscale intensity per frame (0–255), one entry per frame.
    pub brightness_values: Vec<f64>,
    /// Inter-frame nose-tip displacement magnitudes, normalized coordinates.
    pub head_movements: Vec<f64>,
    /// Inter-frame wrist displacement magnitudes, normalized coordinates.
    pub hand_movements: Vec<f64>,

    // Carry-state: only used to compute the next displacement, then
    // overwritten. Persists across frames where the subject drops out, so a
    // reappearing head/hand produces one delta spanning the gap.
    pub(crate) prev_head_position: Option<Point>,
    pub(crate) prev_hand_position: Option<Point>,
}

impl SessionAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one frame's signals into the aggregate.
    pub fn observe(&mut self, signal: &FrameSignal, thresholds: &SignalThresholds) {
        self.total_frames += 1;

        if signal.face_visible {
            self.face_visible_frames += 1;
            if signal.eye_contact {
                self.eye_contact_frames += 1;
            } else {
                self.looking_away_frames += 1;
            }
            if signal.smiling {
                self.smiling_frames += 1;
            } else {
                self.neutral_frames += 1;
            }
        }

        if let Some(head) = signal.head_position {
            if let Some(prev) = self.prev_head_position {
                self.head_movements.push(head.distance(&prev));
            }
            self.prev_head_position = Some(head);
        }

        if signal.hand_present {
            self.hand_gesture_frames += 1;
            if let Some(hand) = signal.hand_position {
                if let Some(prev) = self.prev_hand_position {
                    let movement = hand.distance(&prev);
                    self.hand_movements.push(movement);
                    if movement > thresholds.fidget_displacement_min {
                        self.fidgeting_frames += 1;
                    }
                }
                self.prev_hand_position = Some(hand);
            }
        } else {
            self.still_frames += 1;
        }

        match signal.posture_good {
            Some(true) => self.good_posture_frames += 1,
            Some(false) => self.poor_posture_frames += 1,
            None => {}
        }

        self.brightness_values.push(signal.brightness);
    }

    /// Percentage of frames satisfying `count`, clamped to [0, 100].
    /// 0.0 when no frames were observed.
    pub fn percentage(&self, count: u64) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (count as f64 / self.total_frames as f64 * 100.0).clamp(0.0, 100.0)
    }
}
