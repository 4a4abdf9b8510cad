use std::time::Duration;

use crate::easing::Easing;

/// Interpolation between two values over a fixed duration.
///
/// A tween carries no clock of its own: callers pass in how much time has elapsed since it
/// started, which keeps it a pure function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f64, end: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            easing,
        }
    }

    pub fn fraction(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.end;
        }
        let eased = self.easing.apply(self.fraction(elapsed));
        self.start + (self.end - self.start) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn starts_at_start_and_ends_at_end() {
        let tween = Tween::new(10.0, 170.0, ms(500), Easing::EaseInOutCubic);
        assert_eq!(tween.value_at(ms(0)), 10.0);
        assert_eq!(tween.value_at(ms(500)), 170.0);
        assert_eq!(tween.value_at(ms(900)), 170.0);
    }

    #[test]
    fn linear_midpoint() {
        let tween = Tween::new(0.0, 100.0, ms(500), Easing::Linear);
        assert!((tween.value_at(ms(250)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn runs_backwards_too() {
        let tween = Tween::new(180.0, 0.0, ms(500), Easing::Linear);
        assert!((tween.value_at(ms(100)) - 144.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = Tween::new(0.0, 90.0, Duration::ZERO, Easing::Linear);
        assert!(tween.is_finished(Duration::ZERO));
        assert_eq!(tween.value_at(Duration::ZERO), 90.0);
    }
}
