//! Turns detector output into drawable overlay instructions.
//!
//! The [`Annotator`] is the per-frame entry point: it receives the poses detected in the
//! current frame and produces the ordered [`Annotation`] list a [`Renderer`] then applies.
//! It holds configuration only; no state survives between calls.

use std::fmt;

use itertools::Itertools;

use crate::angle::FormRange;
use crate::pose::{Point, Pose, Side};

/// An 8-bit RGBA color in non-linear sRGB with non-premultiplied alpha.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Color([u8; 4]);

impl Color {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    /// Overlay color for an arm whose angle is out of range.
    pub const RED: Self = Self([255, 0, 0, 255]);
    /// Overlay color for an arm whose angle is within range.
    pub const LIME: Self = Self([0, 255, 0, 255]);
    pub const BLUE: Self = Self([0, 0, 255, 255]);
    pub const YELLOW: Self = Self([255, 255, 0, 255]);

    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.0[3]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r(),
            self.g(),
            self.b(),
            self.a(),
        )
    }
}

/// A single drawable overlay unit.
///
/// Instructions are meant to be applied in the order produced; later instructions paint
/// over earlier ones at the same pixel.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// A straight skeleton segment.
    Line { from: Point, to: Point, color: Color },
    /// Text anchored at `pos`.
    Label {
        pos: Point,
        text: String,
        color: Color,
    },
}

/// Options recognized by [`Annotator`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Acceptable elbow bend range.
    pub range: FormRange,
    /// Which arms to annotate, in emission order.
    pub sides: Vec<Side>,
    /// Keypoints with a confidence below this value are treated as unobserved. The default
    /// of 0.0 disables the gate.
    pub min_confidence: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: FormRange::default(),
            sides: Side::BOTH.to_vec(),
            min_confidence: 0.0,
        }
    }
}

/// Converts the poses of one frame into an ordered list of [`Annotation`]s.
///
/// Each call is a pure mapping from the supplied poses to instructions; the annotator keeps
/// no memory of previous frames.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: Config,
}

impl Annotator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Annotates every configured arm of every pose, in input order.
    ///
    /// An arm whose shoulder/elbow/wrist triple is not fully observed (or gated out by
    /// `min_confidence`) contributes no instructions; a frame with no usable arms yields an
    /// empty list, never an error.
    pub fn annotate(&self, poses: &[Pose]) -> Vec<Annotation> {
        let mut annotations = Vec::new();
        for (pose, &side) in poses.iter().cartesian_product(&self.config.sides) {
            self.annotate_arm(pose, side, &mut annotations);
        }
        annotations
    }

    fn annotate_arm(&self, pose: &Pose, side: Side, out: &mut Vec<Annotation>) {
        let Some([shoulder, elbow, wrist]) = self.arm_triple(pose, side) else {
            log::trace!("{side} arm not fully observed, skipping");
            return;
        };

        let angle = self.config.range.evaluate(shoulder, elbow, wrist);
        let color = if angle.out_of_range {
            Color::RED
        } else {
            Color::LIME
        };

        out.push(Annotation::Line {
            from: shoulder,
            to: elbow,
            color,
        });
        out.push(Annotation::Line {
            from: elbow,
            to: wrist,
            color,
        });
        out.push(Annotation::Label {
            pos: Point::new(elbow.x + 5.0, elbow.y - 5.0),
            text: format!("{side}: {}°", angle.degrees.round()),
            color,
        });
        if angle.out_of_range {
            out.push(Annotation::Label {
                pos: Point::new(elbow.x, elbow.y + 20.0),
                text: "Check Form!".to_owned(),
                color,
            });
        }
    }

    /// Looks up one side's shoulder/elbow/wrist positions, applying the confidence gate.
    fn arm_triple(&self, pose: &Pose, side: Side) -> Option<[Point; 3]> {
        let usable = |name| {
            pose.get(name)
                .filter(|kp| kp.confidence() >= self.config.min_confidence)
                .map(|kp| kp.pos())
        };

        Some([
            usable(side.shoulder())?,
            usable(side.elbow())?,
            usable(side.wrist())?,
        ])
    }
}

/// Consumes annotation instructions, usually by painting them onto a display surface.
///
/// Implementations must apply instructions in the order given, since later instructions
/// paint over earlier ones.
pub trait Renderer {
    /// Draws a straight line segment.
    fn line(&mut self, from: Point, to: Point, color: Color);

    /// Draws text anchored at `pos`.
    fn label(&mut self, pos: Point, text: &str, color: Color);

    /// Applies all instructions in order.
    fn render(&mut self, annotations: &[Annotation]) {
        for annotation in annotations {
            match annotation {
                Annotation::Line { from, to, color } => self.line(*from, *to, *color),
                Annotation::Label { pos, text, color } => self.label(*pos, text, *color),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::pose::{Keypoint, KeypointName};

    use super::*;

    /// A pose with the left arm bent at ~90° and the right arm fully straight.
    fn two_arm_pose() -> Pose {
        Pose::from_keypoints([
            Keypoint::new(KeypointName::LeftShoulder, (100.0, 100.0), 0.9),
            Keypoint::new(KeypointName::LeftElbow, (100.0, 200.0), 0.9),
            Keypoint::new(KeypointName::LeftWrist, (200.0, 200.0), 0.9),
            Keypoint::new(KeypointName::RightShoulder, (400.0, 100.0), 0.9),
            Keypoint::new(KeypointName::RightElbow, (400.0, 200.0), 0.9),
            Keypoint::new(KeypointName::RightWrist, (400.0, 300.0), 0.9),
        ])
    }

    fn labels(annotations: &[Annotation]) -> Vec<&str> {
        annotations
            .iter()
            .filter_map(|a| match a {
                Annotation::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn color_of(annotation: &Annotation) -> Color {
        match annotation {
            Annotation::Line { color, .. } | Annotation::Label { color, .. } => *color,
        }
    }

    #[test]
    fn annotates_both_arms_left_first() {
        let annotator = Annotator::default();
        let annotations = annotator.annotate(&[two_arm_pose()]);

        // Left arm in range: line, line, label. Right arm straight (180°): line, line,
        // label, warning.
        assert_eq!(annotations.len(), 7);
        assert_eq!(
            annotations[0],
            Annotation::Line {
                from: Point::new(100.0, 100.0),
                to: Point::new(100.0, 200.0),
                color: Color::LIME,
            }
        );
        assert_eq!(
            annotations[1],
            Annotation::Line {
                from: Point::new(100.0, 200.0),
                to: Point::new(200.0, 200.0),
                color: Color::LIME,
            }
        );
        assert_eq!(
            annotations[2],
            Annotation::Label {
                pos: Point::new(105.0, 195.0),
                text: "Left: 90°".to_owned(),
                color: Color::LIME,
            }
        );

        assert_eq!(color_of(&annotations[3]), Color::RED);
        assert_eq!(color_of(&annotations[4]), Color::RED);
        assert_eq!(
            annotations[5],
            Annotation::Label {
                pos: Point::new(405.0, 195.0),
                text: "Right: 180°".to_owned(),
                color: Color::RED,
            }
        );
        assert_eq!(
            annotations[6],
            Annotation::Label {
                pos: Point::new(400.0, 220.0),
                text: "Check Form!".to_owned(),
                color: Color::RED,
            }
        );
    }

    #[test]
    fn missing_wrist_skips_only_that_side() {
        let mut keypoints: Vec<_> = two_arm_pose().keypoints().collect();
        keypoints.retain(|kp| kp.name() != KeypointName::RightWrist);
        let pose = Pose::from_keypoints(keypoints);

        let annotator = Annotator::default();
        let annotations = annotator.annotate(&[pose]);

        assert_eq!(annotations.len(), 3);
        assert_eq!(labels(&annotations), ["Left: 90°"]);
    }

    #[test]
    fn empty_pose_sequence_yields_no_annotations() {
        let annotator = Annotator::default();
        assert!(annotator.annotate(&[]).is_empty());
    }

    #[test]
    fn pose_without_usable_arms_yields_no_annotations() {
        let pose = Pose::from_keypoints([Keypoint::new(KeypointName::Nose, (0.0, 0.0), 1.0)]);
        let annotator = Annotator::default();
        assert!(annotator.annotate(&[pose]).is_empty());
    }

    #[test]
    fn annotate_is_idempotent() {
        let poses = [two_arm_pose(), Pose::default()];
        let annotator = Annotator::default();
        assert_eq!(annotator.annotate(&poses), annotator.annotate(&poses));
    }

    #[test]
    fn poses_keep_input_order() {
        let annotator = Annotator::new(Config {
            sides: vec![Side::Left],
            ..Config::default()
        });
        let near = two_arm_pose();
        let far = Pose::from_keypoints(
            near.keypoints()
                .map(|kp| Keypoint::new(kp.name(), (kp.x() + 1000.0, kp.y()), kp.confidence())),
        );

        let annotations = annotator.annotate(&[near, far]);
        assert_eq!(annotations.len(), 6);
        let Annotation::Line { from, .. } = &annotations[0] else {
            panic!("expected line");
        };
        assert_eq!(from.x, 100.0);
        let Annotation::Line { from, .. } = &annotations[3] else {
            panic!("expected line");
        };
        assert_eq!(from.x, 1100.0);
    }

    #[test]
    fn sides_config_restricts_output() {
        let annotator = Annotator::new(Config {
            sides: vec![Side::Right],
            ..Config::default()
        });
        let annotations = annotator.annotate(&[two_arm_pose()]);
        assert_eq!(labels(&annotations), ["Right: 180°", "Check Form!"]);
    }

    #[test]
    fn low_confidence_keypoint_gates_its_side() {
        let keypoints: Vec<_> = two_arm_pose()
            .keypoints()
            .map(|kp| {
                if kp.name() == KeypointName::LeftElbow {
                    Keypoint::new(kp.name(), kp.pos(), 0.1)
                } else {
                    kp
                }
            })
            .collect();
        let pose = Pose::from_keypoints(keypoints);

        let annotator = Annotator::new(Config {
            min_confidence: 0.3,
            ..Config::default()
        });
        let annotations = annotator.annotate(&[pose]);
        assert_eq!(labels(&annotations), ["Right: 180°", "Check Form!"]);
    }

    #[test]
    fn custom_range_changes_classification() {
        let annotator = Annotator::new(Config {
            range: FormRange::new(0.0, 185.0),
            ..Config::default()
        });
        let annotations = annotator.annotate(&[two_arm_pose()]);

        // Even the straight right arm is within the widened range: no warnings, all lime.
        assert_eq!(annotations.len(), 6);
        assert!(annotations.iter().all(|a| color_of(a) == Color::LIME));
    }
}
