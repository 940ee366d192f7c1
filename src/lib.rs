//! Arm-form checking on top of pose-estimation output.
//!
//! This crate converts the per-frame output of an external human-pose-estimation model
//! (named 2D keypoints with confidence scores) into an ordered list of drawable overlay
//! instructions: a skeleton line along each arm, an elbow-angle label, and a "Check Form!"
//! warning whenever the elbow angle leaves a configured range.
//!
//! It deliberately does *not* capture video, run inference, or paint pixels. A pose source
//! hands [`pose::Pose`]s to an [`annotate::Annotator`] once per frame, and an
//! [`annotate::Renderer`] implementation applies the resulting [`annotate::Annotation`]s to
//! whatever display surface the surrounding application uses.
//!
//! # Coordinates
//!
//! All positions are pixel coordinates in the source video's coordinate space: X points to
//! the right, Y points down, origin in the top-left corner. Keypoint names follow the
//! MoveNet-style detector vocabulary (`"left_shoulder"`, `"right_wrist"`, …).

use log::LevelFilter;

pub mod angle;
pub mod annotate;
pub mod filter;
pub mod pose;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate will log at *debug* level; everything else stays at the
/// `env_logger` default. `RUST_LOG` overrides all of this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
