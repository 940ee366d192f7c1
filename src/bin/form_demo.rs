//! Feeds synthetic detector output through the annotator and logs the resulting overlay
//! instructions, standing in for the camera/detector/canvas loop of a real deployment.

use anyhow::Result;
use formcheck::annotate::{Annotator, Color, Renderer};
use formcheck::pose::{Keypoint, KeypointName, Point, Pose, Side};

/// Renders annotation instructions as log lines instead of pixels.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn line(&mut self, from: Point, to: Point, color: Color) {
        log::info!(
            "line   ({:6.1}, {:6.1}) -> ({:6.1}, {:6.1})  {:?}",
            from.x,
            from.y,
            to.x,
            to.y,
            color,
        );
    }

    fn label(&mut self, pos: Point, text: &str, color: Color) {
        log::info!("label  ({:6.1}, {:6.1})  {:?}  {:?}", pos.x, pos.y, color, text);
    }
}

/// Builds a pose with both arm triples at the given positions.
fn pose(left: [(f32, f32); 3], right: [(f32, f32); 3]) -> Pose {
    let names = [
        (Side::Left, left),
        (Side::Right, right),
    ];
    Pose::from_keypoints(names.into_iter().flat_map(|(side, [shoulder, elbow, wrist])| {
        [
            Keypoint::new(side.shoulder(), shoulder, 0.9),
            Keypoint::new(side.elbow(), elbow, 0.9),
            Keypoint::new(side.wrist(), wrist, 0.9),
        ]
    }))
}

fn main() -> Result<()> {
    formcheck::init_logger!();

    // One body with a bent left arm and a fully straightened right arm, one body whose
    // right wrist left the frame.
    let poses = [
        pose(
            [(100.0, 100.0), (100.0, 200.0), (190.0, 240.0)],
            [(400.0, 100.0), (400.0, 200.0), (400.0, 300.0)],
        ),
        Pose::from_keypoints([
            Keypoint::new(KeypointName::LeftShoulder, (500.0, 120.0), 0.8),
            Keypoint::new(KeypointName::LeftElbow, (520.0, 210.0), 0.8),
            Keypoint::new(KeypointName::LeftWrist, (600.0, 230.0), 0.8),
            Keypoint::new(KeypointName::RightShoulder, (450.0, 120.0), 0.8),
            Keypoint::new(KeypointName::RightElbow, (430.0, 210.0), 0.8),
        ]),
    ];

    let annotator = Annotator::default();
    let annotations = annotator.annotate(&poses);
    log::debug!(
        "{} poses -> {} overlay instructions",
        poses.len(),
        annotations.len(),
    );

    LogRenderer.render(&annotations);

    Ok(())
}
