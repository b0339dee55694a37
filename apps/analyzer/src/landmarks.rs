//! Landmark capability types — named-field views over the raw indexed point
//! arrays produced by face-mesh, hand-tracking, and pose-estimation models.
//!
//! Detection models emit flat point arrays addressed by fixed numeric indices
//! (nose tip = 1, iris centers = 468/473, ...). The scoring pipeline never
//! touches those indices: the `from_mesh` adapters below resolve them once,
//! and everything downstream works with named anatomical fields.

use serde::{Deserialize, Serialize};

/// A single 2D landmark in normalized image coordinates.
///
/// Both axes are in [0, 1] with a top-left origin, so smaller `y` means
/// higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in normalized coordinates.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Face-mesh point indices (MediaPipe face mesh with refined iris landmarks).
pub mod face_mesh {
    pub const NOSE_TIP: usize = 1;
    pub const UPPER_INNER_LIP: usize = 13;
    pub const LOWER_INNER_LIP: usize = 14;
    pub const LEFT_MOUTH_CORNER: usize = 61;
    pub const RIGHT_MOUTH_CORNER: usize = 291;
    pub const LEFT_IRIS_CENTER: usize = 468;
    pub const RIGHT_IRIS_CENTER: usize = 473;

    /// Minimum mesh length that covers every index above.
    pub const MIN_POINTS: usize = RIGHT_IRIS_CENTER + 1;
}

/// Hand-tracking point indices.
pub mod hand_mesh {
    pub const WRIST: usize = 0;

    pub const MIN_POINTS: usize = WRIST + 1;
}

/// Body-pose point indices.
pub mod pose_mesh {
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_HIP: usize = 23;
    pub const RIGHT_HIP: usize = 24;

    pub const MIN_POINTS: usize = RIGHT_HIP + 1;
}

/// The facial landmarks the analyzer consumes, by anatomical name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks {
    pub nose_tip: Point,
    pub left_iris: Point,
    pub right_iris: Point,
    pub left_mouth_corner: Point,
    pub right_mouth_corner: Point,
    pub upper_inner_lip: Point,
    pub lower_inner_lip: Point,
}

impl FaceLandmarks {
    /// Resolves the named fields from a raw face-mesh point array.
    ///
    /// Returns `None` when the array is too short to address every required
    /// index (e.g. a mesh produced without refined iris landmarks).
    pub fn from_mesh(points: &[Point]) -> Option<Self> {
        Some(Self {
            nose_tip: points.get(face_mesh::NOSE_TIP).copied()?,
            left_iris: points.get(face_mesh::LEFT_IRIS_CENTER).copied()?,
            right_iris: points.get(face_mesh::RIGHT_IRIS_CENTER).copied()?,
            left_mouth_corner: points.get(face_mesh::LEFT_MOUTH_CORNER).copied()?,
            right_mouth_corner: points.get(face_mesh::RIGHT_MOUTH_CORNER).copied()?,
            upper_inner_lip: points.get(face_mesh::UPPER_INNER_LIP).copied()?,
            lower_inner_lip: points.get(face_mesh::LOWER_INNER_LIP).copied()?,
        })
    }
}

/// The hand landmarks the analyzer consumes. Only the wrist is tracked —
/// it anchors gesture presence and fidgeting displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub wrist: Point,
}

impl HandLandmarks {
    pub fn from_mesh(points: &[Point]) -> Option<Self> {
        Some(Self {
            wrist: points.get(hand_mesh::WRIST).copied()?,
        })
    }
}

/// The body-pose landmarks the analyzer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseLandmarks {
    pub left_shoulder: Point,
    pub right_shoulder: Point,
    pub left_hip: Point,
    pub right_hip: Point,
}

impl PoseLandmarks {
    pub fn from_mesh(points: &[Point]) -> Option<Self> {
        Some(Self {
            left_shoulder: points.get(pose_mesh::LEFT_SHOULDER).copied()?,
            right_shoulder: points.get(pose_mesh::RIGHT_SHOULDER).copied()?,
            left_hip: points.get(pose_mesh::LEFT_HIP).copied()?,
            right_hip: points.get(pose_mesh::RIGHT_HIP).copied()?,
        })
    }
}

/// Everything a landmark detector produced for one frame.
///
/// Any combination may be absent — a subject briefly out of frame is an
/// expected state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameLandmarks {
    pub face: Option<FaceLandmarks>,
    /// Zero or more detected hands; the first one drives movement tracking.
    pub hands: Vec<HandLandmarks>,
    pub pose: Option<PoseLandmarks>,
}

impl FrameLandmarks {
    /// A frame with nothing detected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The hand used for movement/fidgeting tracking, if any.
    pub fn primary_hand(&self) -> Option<&HandLandmarks> {
        self.hands.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_mesh(len: usize) -> Vec<Point> {
        (0..len)
            .map(|i| Point::new(i as f64 / 1000.0, i as f64 / 2000.0))
            .collect()
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.3, 0.4);
        assert!((a.distance(&b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_point_distance_is_symmetric() {
        let a = Point::new(0.1, 0.9);
        let b = Point::new(0.7, 0.2);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_face_from_mesh_resolves_named_indices() {
        let mesh = make_mesh(face_mesh::MIN_POINTS);
        let face = FaceLandmarks::from_mesh(&mesh).expect("full mesh should resolve");
        assert_eq!(face.nose_tip, mesh[face_mesh::NOSE_TIP]);
        assert_eq!(face.left_iris, mesh[face_mesh::LEFT_IRIS_CENTER]);
        assert_eq!(face.right_iris, mesh[face_mesh::RIGHT_IRIS_CENTER]);
        assert_eq!(face.left_mouth_corner, mesh[face_mesh::LEFT_MOUTH_CORNER]);
        assert_eq!(face.right_mouth_corner, mesh[face_mesh::RIGHT_MOUTH_CORNER]);
        assert_eq!(face.upper_inner_lip, mesh[face_mesh::UPPER_INNER_LIP]);
        assert_eq!(face.lower_inner_lip, mesh[face_mesh::LOWER_INNER_LIP]);
    }

    #[test]
    fn test_face_from_short_mesh_is_none() {
        // A mesh without refined iris landmarks stops short of index 468.
        let mesh = make_mesh(468);
        assert!(FaceLandmarks::from_mesh(&mesh).is_none());
    }

    #[test]
    fn test_hand_from_empty_mesh_is_none() {
        assert!(HandLandmarks::from_mesh(&[]).is_none());
    }

    #[test]
    fn test_pose_from_mesh_resolves_shoulders_and_hips() {
        let mesh = make_mesh(pose_mesh::MIN_POINTS);
        let pose = PoseLandmarks::from_mesh(&mesh).expect("full mesh should resolve");
        assert_eq!(pose.left_shoulder, mesh[pose_mesh::LEFT_SHOULDER]);
        assert_eq!(pose.right_hip, mesh[pose_mesh::RIGHT_HIP]);
    }

    #[test]
    fn test_empty_frame_landmarks_have_no_primary_hand() {
        let frame = FrameLandmarks::empty();
        assert!(frame.face.is_none());
        assert!(frame.primary_hand().is_none());
        assert!(frame.pose.is_none());
    }

    #[test]
    fn test_primary_hand_is_first_detected() {
        let frame = FrameLandmarks {
            face: None,
            hands: vec![
                HandLandmarks {
                    wrist: Point::new(0.2, 0.8),
                },
                HandLandmarks {
                    wrist: Point::new(0.7, 0.8),
                },
            ],
            pose: None,
        };
        assert_eq!(frame.primary_hand().unwrap().wrist, Point::new(0.2, 0.8));
    }
}
