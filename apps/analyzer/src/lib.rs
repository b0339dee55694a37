//! Video interview behavioral analyzer.
//!
//! Ingests a recorded interview video (or a single still image), extracts
//! facial/hand/pose landmarks frame by frame through an injected
//! [`LandmarkDetector`], converts them into behavioral signals (eye contact,
//! smiling, gesturing, posture, fidgeting, lighting), aggregates the signals
//! over the session, and produces seven 0–10 subscores, a weighted overall
//! score, and rule-based coaching feedback.
//!
//! The pipeline is strictly sequential and single-pass: each frame is pulled
//! once, scored, folded into the session aggregate, and discarded. Transport,
//! persistence, and video decoding are the embedding application's concern —
//! this crate consumes decoded [`ImageBuffer`]s and returns a plain
//! [`ScoreResult`] value.
//!
//! ```no_run
//! use analyzer::{analyze_video_task, InterviewAnalyzer};
//! # use analyzer::{AnalyzerError, FrameSource, LandmarkDetector};
//! # async fn run(detector: Box<dyn LandmarkDetector + Send>,
//! #              source: impl FrameSource + Send + 'static) -> Result<(), AnalyzerError> {
//! let analyzer = InterviewAnalyzer::new(detector);
//! let result = analyze_video_task(analyzer, source).await?;
//! println!("overall: {}", result.overall_score);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod errors;
pub mod landmarks;
pub mod source;

pub use analysis::{
    analyze_video_task, compute_scores, extract_signal, generate_feedback, DetailedMetrics,
    Feedback, FrameSignal, InterviewAnalyzer, ScoreResult, SessionAggregate,
};
pub use config::{AnalyzerConfig, ScoreWeights, SignalThresholds};
pub use errors::AnalyzerError;
pub use landmarks::{FaceLandmarks, FrameLandmarks, HandLandmarks, Point, PoseLandmarks};
pub use source::{FrameSource, ImageBuffer, LandmarkDetector};
