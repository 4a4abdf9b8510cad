///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Duration;

use crate::{config::GaugeConfig, rotation::pointer_rotation, tween::Tween, GaugeState};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// AngleAnimator
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Drives the displayed angle of the gauge towards its target.
///
/// Changing the target while a tween is in flight starts a new tween from wherever the displayed
/// angle currently is, so the pointer never jumps.
#[derive(Debug, Clone)]
pub struct AngleAnimator {
    config: GaugeConfig,
    target: f64,
    displayed: f64,
    tween: Option<Tween>,
    elapsed: Duration,
}

impl AngleAnimator {
    pub fn new(config: GaugeConfig) -> Self {
        let start = config.range.clamp(0.0);
        Self {
            config,
            target: start,
            displayed: start,
            tween: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn state(&self) -> GaugeState {
        match self.tween {
            Some(_) => GaugeState::Animating,
            None => GaugeState::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == GaugeState::Animating
    }

    pub fn target_angle(&self) -> f64 {
        self.target
    }

    pub fn displayed_angle(&self) -> f64 {
        self.displayed
    }

    pub fn rotation(&self) -> f64 {
        pointer_rotation(self.displayed)
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Returns true when frames are needed to reach the new target.
    pub fn set_target(&mut self, angle: f64) -> bool {
        let clamped = self.config.range.clamp(angle);
        if clamped != angle {
            log::warn!("Target angle {} clamped to {}", angle, clamped);
        }

        if clamped == self.target {
            return self.is_animating();
        }

        self.target = clamped;

        if self.target == self.displayed {
            self.tween = None;
            self.elapsed = Duration::ZERO;
            return false;
        }

        if self.is_animating() {
            log::debug!("Retargeting pointer from {:.2} to {}", self.displayed, self.target);
        } else {
            log::debug!("Animating pointer from {} to {}", self.displayed, self.target);
        }

        let animation = self.config.animation;
        self.tween = Some(Tween::new(
            self.displayed,
            self.target,
            animation.duration,
            animation.easing,
        ));
        self.elapsed = Duration::ZERO;
        true
    }

    /// Moves time forward by `dt` and returns the new displayed angle.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        if let Some(tween) = self.tween {
            self.elapsed += dt;
            if tween.is_finished(self.elapsed) {
                self.snap_to_target();
            } else {
                self.displayed = tween.value_at(self.elapsed);
            }
        }
        self.displayed
    }

    pub fn snap_to_target(&mut self) {
        self.displayed = self.target;
        self.tween = None;
        self.elapsed = Duration::ZERO;
    }
}

impl Default for AngleAnimator {
    fn default() -> Self {
        Self::new(GaugeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn starts_idle_at_zero() {
        let animator = AngleAnimator::default();
        assert_eq!(animator.state(), GaugeState::Idle);
        assert_eq!(animator.displayed_angle(), 0.0);
        assert_eq!(animator.rotation(), -90.0);
    }

    #[test]
    fn same_target_as_displayed_stays_idle() {
        let mut animator = AngleAnimator::default();
        assert!(!animator.set_target(0.0));
        assert_eq!(animator.state(), GaugeState::Idle);
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut animator = AngleAnimator::default();
        assert!(animator.set_target(180.0));
        assert_eq!(animator.state(), GaugeState::Animating);

        animator.advance(Duration::from_millis(250));
        assert_eq!(animator.state(), GaugeState::Animating);
        assert!(animator.displayed_angle() > 0.0 && animator.displayed_angle() < 180.0);

        animator.advance(Duration::from_millis(250));
        assert_eq!(animator.state(), GaugeState::Idle);
        assert_eq!(animator.displayed_angle(), 180.0);
    }

    #[test]
    fn idle_advance_is_a_no_op() {
        let mut animator = AngleAnimator::default();
        assert_eq!(animator.advance(FRAME), 0.0);
        assert_eq!(animator.state(), GaugeState::Idle);
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let mut animator = AngleAnimator::default();
        animator.set_target(400.0);
        assert_eq!(animator.target_angle(), 180.0);
        animator.set_target(-3.0);
        assert_eq!(animator.target_angle(), 0.0);
    }

    #[test]
    fn repeated_target_does_not_restart() {
        let config = GaugeConfig::default().with_easing(Easing::Linear);
        let mut animator = AngleAnimator::new(config);
        animator.set_target(100.0);
        animator.advance(Duration::from_millis(250));
        let halfway = animator.displayed_angle();

        assert!(animator.set_target(100.0));
        animator.advance(Duration::from_millis(250));
        assert_eq!(animator.displayed_angle(), 100.0);
        assert!((halfway - 50.0).abs() < 1e-9);
    }

    #[test]
    fn retarget_back_to_displayed_value_goes_idle() {
        let config = GaugeConfig::default().with_easing(Easing::Linear);
        let mut animator = AngleAnimator::new(config);
        animator.set_target(100.0);
        animator.advance(Duration::from_millis(250));
        let here = animator.displayed_angle();

        assert!(!animator.set_target(here));
        assert_eq!(animator.state(), GaugeState::Idle);
        assert_eq!(animator.displayed_angle(), here);
    }

    #[test]
    fn zero_duration_snaps_on_first_frame() {
        let config = GaugeConfig::default().with_duration(Duration::ZERO);
        let mut animator = AngleAnimator::new(config);
        animator.set_target(45.0);
        assert_eq!(animator.advance(Duration::ZERO), 45.0);
        assert_eq!(animator.state(), GaugeState::Idle);
    }
}
