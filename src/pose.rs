//! Pose and keypoint data model.
//!
//! A detector reports each body as a flat list of named keypoints. [`Pose`] stores them
//! behind a typed index, so "keypoint not observed" is an explicit lookup miss instead of
//! an implicit scan result.

use std::fmt;

/// A position in the source video's pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// The anatomical role of a keypoint.
///
/// The variants (and their order) match the 17-keypoint vocabulary of the MoveNet detector
/// family; [`KeypointName::ALL`] lists them in the detector's output order, which is handy
/// when zipping a raw output tensor with its names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypointName {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl KeypointName {
    /// Number of distinct keypoint roles.
    pub const COUNT: usize = 17;

    /// Every keypoint role, in detector output order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Parses a detector wire name (`"left_elbow"`, …). The match is exact; no case folding
    /// or trimming is applied.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "nose" => Self::Nose,
            "left_eye" => Self::LeftEye,
            "right_eye" => Self::RightEye,
            "left_ear" => Self::LeftEar,
            "right_ear" => Self::RightEar,
            "left_shoulder" => Self::LeftShoulder,
            "right_shoulder" => Self::RightShoulder,
            "left_elbow" => Self::LeftElbow,
            "right_elbow" => Self::RightElbow,
            "left_wrist" => Self::LeftWrist,
            "right_wrist" => Self::RightWrist,
            "left_hip" => Self::LeftHip,
            "right_hip" => Self::RightHip,
            "left_knee" => Self::LeftKnee,
            "right_knee" => Self::RightKnee,
            "left_ankle" => Self::LeftAnkle,
            "right_ankle" => Self::RightAnkle,
            _ => return None,
        })
    }

    /// Returns the detector wire name of this keypoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

/// The two body sides an arm can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in the default annotation order (left before right).
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    pub fn shoulder(self) -> KeypointName {
        match self {
            Self::Left => KeypointName::LeftShoulder,
            Self::Right => KeypointName::RightShoulder,
        }
    }

    pub fn elbow(self) -> KeypointName {
        match self {
            Self::Left => KeypointName::LeftElbow,
            Self::Right => KeypointName::RightElbow,
        }
    }

    pub fn wrist(self) -> KeypointName {
        match self {
            Self::Left => KeypointName::LeftWrist,
            Self::Right => KeypointName::RightWrist,
        }
    }
}

/// Displays as the overlay label prefix (`Left` / `Right`).
impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// A single named landmark position reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    name: KeypointName,
    pos: Point,
    confidence: f32,
}

impl Keypoint {
    /// Creates a keypoint. `confidence` is the detector score, by convention in range 0.0
    /// to 1.0.
    pub fn new(name: KeypointName, pos: impl Into<Point>, confidence: f32) -> Self {
        Self {
            name,
            pos: pos.into(),
            confidence,
        }
    }

    #[inline]
    pub fn name(&self) -> KeypointName {
        self.name
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// The keypoints of one detected body in one frame.
///
/// Built once per frame from detector output and discarded afterwards; nothing in this
/// crate retains a [`Pose`] across frames.
#[derive(Debug, Clone)]
pub struct Pose {
    keypoints: [Option<Keypoint>; KeypointName::COUNT],
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            keypoints: [None; KeypointName::COUNT],
        }
    }
}

impl Pose {
    /// Builds the keypoint index from detector output.
    ///
    /// Detectors are not supposed to report the same name twice in one body; if one does
    /// anyway, the first occurrence wins.
    pub fn from_keypoints(keypoints: impl IntoIterator<Item = Keypoint>) -> Self {
        let mut pose = Self::default();
        for keypoint in keypoints {
            let slot = &mut pose.keypoints[keypoint.name() as usize];
            if slot.is_none() {
                *slot = Some(keypoint);
            }
        }
        pose
    }

    /// Looks up the keypoint with the given role. Returns [`None`] when the detector did
    /// not observe it in this frame.
    #[inline]
    pub fn get(&self, name: KeypointName) -> Option<Keypoint> {
        self.keypoints[name as usize]
    }

    /// Iterates over all observed keypoints, in [`KeypointName::ALL`] order.
    pub fn keypoints(&self) -> impl Iterator<Item = Keypoint> + '_ {
        self.keypoints.iter().flatten().copied()
    }

    /// Number of observed keypoints.
    pub fn len(&self) -> usize {
        self.keypoints.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.iter().all(|slot| slot.is_none())
    }
}
