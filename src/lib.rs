///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod angle_input;
pub mod animator;
pub mod config;
pub mod easing;
pub mod gauge;
pub mod rotation;
pub mod tween;

pub use angle_input::{
    commit_input, correct_edit, parse_angle, sanitize, validate, AngleInputController,
    AngleInputError,
};
pub use animator::AngleAnimator;
pub use config::{AngleRange, AnimationConfig, ArcConfig, GaugeConfig, PointerConfig};
pub use easing::Easing;
pub use gauge::{Gauge, SET_TARGET_ANGLE};
pub use rotation::{pointer_pivot, pointer_rotation, pointer_transform};
pub use tween::Tween;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Constants
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub const MIN_ANGLE: f64 = 0.0;
pub const MAX_ANGLE: f64 = 180.0;
/// Shifts the 0-180 half circle onto a rotation around the pointer pivot.
pub const POINTER_ROTATION_OFFSET: f64 = 90.0;

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// GaugeState
//
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GaugeState {
    /// Displayed angle equals the target, nothing to interpolate.
    Idle,
    /// Displayed angle is travelling towards the target.
    Animating,
}
