//! The behavioral analysis pipeline: per-frame signal extraction, session
//! aggregation, composite scoring, feedback generation, and the orchestrator
//! that drives them.

pub mod aggregate;
pub mod feedback;
pub mod scoring;
pub mod session;
pub mod signals;

pub use aggregate::SessionAggregate;
pub use feedback::{generate_feedback, Feedback};
pub use scoring::{compute_scores, DetailedMetrics, ScoreResult};
pub use session::{analyze_video_task, InterviewAnalyzer};
pub use signals::{extract_signal, FrameSignal};
