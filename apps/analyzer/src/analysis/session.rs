//! Session Orchestrator — drives the full pipeline for a recorded video, or
//! a reduced two-branch heuristic for a single still image.
//!
//! # Architecture
//! - `analyze_video` is the synchronous, single-pass core: pull frame →
//!   detect landmarks → extract signals → fold into the aggregate, then
//!   score and generate feedback. Frames are never buffered.
//! - `analyze_video_task` is the async entry point: the CPU-bound core runs
//!   via `tokio::task::spawn_blocking` with owned data, keeping the tokio
//!   scheduler unblocked. Wrap it in a timeout for caller-imposed deadlines.
//! - `analyze_single_frame` skips temporal aggregation entirely and emits
//!   fixed optimistic/pessimistic subscores based on face presence alone.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AnalyzerConfig;
use crate::errors::AnalyzerError;
use crate::source::{FrameSource, ImageBuffer, LandmarkDetector};

use super::aggregate::SessionAggregate;
use super::feedback::{generate_feedback, Feedback};
use super::scoring::{compute_scores, ScoreResult};
use super::signals::extract_signal;

// ────────────────────────────────────────────────────────────────────────────
// Snapshot-mode constants
// ────────────────────────────────────────────────────────────────────────────

// A single image carries no temporal or pose signal, so snapshot mode emits
// fixed estimates: optimistic when a face is visible, pessimistic when not.
// Body language and stability stay 0 in both branches.
const SNAPSHOT_FACE_EYE_CONTACT: f64 = 8.0;
const SNAPSHOT_FACE_EXPRESSIVENESS: f64 = 7.0;
const SNAPSHOT_FACE_CONFIDENCE: f64 = 7.5;
const SNAPSHOT_FACE_PRESENCE: f64 = 8.0;
const SNAPSHOT_FACE_ENGAGEMENT: f64 = 7.5;

const SNAPSHOT_NO_FACE_EYE_CONTACT: f64 = 3.0;
const SNAPSHOT_NO_FACE_CONFIDENCE: f64 = 4.0;
const SNAPSHOT_NO_FACE_ENGAGEMENT: f64 = 4.0;

const SUBSCORE_COUNT: f64 = 7.0;

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

/// One analysis session's orchestrator.
///
/// Owns its landmark detector exclusively — detectors are stateful and must
/// never be shared between concurrent analyses. Construct one analyzer per
/// session, or pool analyzers with exclusive checkout.
pub struct InterviewAnalyzer {
    detector: Box<dyn LandmarkDetector + Send>,
    config: AnalyzerConfig,
}

impl InterviewAnalyzer {
    pub fn new(detector: Box<dyn LandmarkDetector + Send>) -> Self {
        Self::with_config(detector, AnalyzerConfig::default())
    }

    pub fn with_config(detector: Box<dyn LandmarkDetector + Send>, config: AnalyzerConfig) -> Self {
        Self { detector, config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes a full video: one pass over the frame stream, then scoring
    /// and feedback.
    ///
    /// Source and detector errors are fatal and propagate — an unopenable
    /// video signals corrupted input, never a low score. An opened stream
    /// that yields zero frames recovers to the fixed default result.
    pub fn analyze_video(
        &mut self,
        source: &mut dyn FrameSource,
    ) -> Result<ScoreResult, AnalyzerError> {
        self.analyze_video_with_progress(source, |_| {})
    }

    /// Like [`analyze_video`](Self::analyze_video), invoking `on_progress`
    /// with percent-complete every `progress_log_interval` frames (requires
    /// the source to report a frame-count hint).
    pub fn analyze_video_with_progress<F>(
        &mut self,
        source: &mut dyn FrameSource,
        mut on_progress: F,
    ) -> Result<ScoreResult, AnalyzerError>
    where
        F: FnMut(u8),
    {
        let run_id = Uuid::new_v4();
        let frame_rate = source.frame_rate();
        let frame_count_hint = source.frame_count_hint();
        info!(%run_id, frame_rate, ?frame_count_hint, "starting video analysis");

        let mut aggregate = SessionAggregate::new();

        while let Some(frame) = source.next_frame()? {
            let landmarks = self.detector.detect(&frame)?;
            let signal = extract_signal(&landmarks, &frame, &self.config.thresholds);
            aggregate.observe(&signal, &self.config.thresholds);

            let interval = self.config.progress_log_interval;
            if interval > 0 && aggregate.total_frames % interval == 0 {
                match frame_count_hint.filter(|total| *total > 0) {
                    Some(total) => {
                        let percent =
                            ((aggregate.total_frames as f64 / total as f64) * 100.0).min(100.0);
                        on_progress(percent as u8);
                        debug!(%run_id, frame = aggregate.total_frames, percent, "analysis progress");
                    }
                    None => {
                        debug!(%run_id, frame = aggregate.total_frames, "analysis progress");
                    }
                }
            }
        }

        if aggregate.total_frames == 0 {
            warn!(%run_id, "video yielded zero usable frames; returning default result");
            return Ok(ScoreResult::default_unanalyzed());
        }

        let duration_seconds = if frame_rate > 0.0 {
            frame_count_hint.unwrap_or(aggregate.total_frames) as f64 / frame_rate
        } else {
            0.0
        };

        let mut result = compute_scores(&aggregate, duration_seconds, &self.config.weights);
        if let Some(metrics) = result.detailed_metrics.clone() {
            result.feedback = generate_feedback(&result, &metrics);
        }

        info!(
            %run_id,
            frames = aggregate.total_frames,
            overall = result.overall_score,
            "video analysis complete"
        );
        Ok(result)
    }

    /// Analyzes a single decoded image.
    ///
    /// Only face detection informs the result: a visible face yields the
    /// fixed optimistic subscores, an absent face the fixed pessimistic
    /// ones. `overall_score` here is the unweighted arithmetic mean over all
    /// seven subscores (zeros included) — deliberately NOT the weighted
    /// formula used for full videos; the two modes have historically
    /// diverged and consumers depend on both scales as-is.
    pub fn analyze_single_frame(
        &mut self,
        frame: &ImageBuffer,
    ) -> Result<ScoreResult, AnalyzerError> {
        let landmarks = self.detector.detect(frame)?;
        let face_detected = landmarks.face.is_some();
        debug!(face_detected, "single-frame analysis");

        let mut result = ScoreResult {
            eye_contact: 0.0,
            confidence: 0.0,
            body_language: 0.0,
            expressiveness: 0.0,
            stability: 0.0,
            professional_presence: 0.0,
            engagement: 0.0,
            overall_score: 0.0,
            detailed_metrics: None,
            feedback: snapshot_feedback(),
        };

        if face_detected {
            result.eye_contact = SNAPSHOT_FACE_EYE_CONTACT;
            result.expressiveness = SNAPSHOT_FACE_EXPRESSIVENESS;
            result.confidence = SNAPSHOT_FACE_CONFIDENCE;
            result.professional_presence = SNAPSHOT_FACE_PRESENCE;
            result.engagement = SNAPSHOT_FACE_ENGAGEMENT;
        } else {
            result.eye_contact = SNAPSHOT_NO_FACE_EYE_CONTACT;
            result.confidence = SNAPSHOT_NO_FACE_CONFIDENCE;
            result.engagement = SNAPSHOT_NO_FACE_ENGAGEMENT;
        }

        result.overall_score = (result.eye_contact
            + result.confidence
            + result.body_language
            + result.expressiveness
            + result.stability
            + result.professional_presence
            + result.engagement)
            / SUBSCORE_COUNT;

        Ok(result)
    }
}

/// Canned feedback for snapshot mode — a still image cannot support the
/// threshold rules, so callers get a pointer toward recording video instead.
fn snapshot_feedback() -> Feedback {
    Feedback {
        strengths: vec!["Good visibility for facial analysis.".to_string()],
        areas_for_improvement: vec![
            "Provide a short video for more accurate assessment.".to_string()
        ],
        specific_tips: vec![
            "Record a few seconds of movement to help the AI measure posture and engagement."
                .to_string(),
        ],
    }
}

/// Runs a full-video analysis on the blocking thread pool.
///
/// Takes owned data (required for the `'static` closure bound) and consumes
/// the analyzer — the detector inside stays exclusively owned by this one
/// session. Wrap the returned future in `tokio::time::timeout` to impose a
/// deadline.
pub async fn analyze_video_task<S>(
    mut analyzer: InterviewAnalyzer,
    mut source: S,
) -> Result<ScoreResult, AnalyzerError>
where
    S: FrameSource + Send + 'static,
{
    tokio::task::spawn_blocking(move || analyzer.analyze_video(&mut source))
        .await
        .map_err(|e| {
            AnalyzerError::Internal(anyhow::anyhow!(
                "spawn_blocking failed in video analysis: {e}"
            ))
        })?
}
