///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::Data;

// Bisection on a monotonic curve converges well past f64 display precision by then.
const BEZIER_ITERATIONS: usize = 48;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Easing
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Velocity profile of a tween. Every curve maps 0 to 0 and 1 to 1 and never decreases in between.
#[derive(Clone, Copy, PartialEq, Data, Debug)]
pub enum Easing {
    Linear,
    EaseInOutCubic,
    /// Material's standard curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`.
    FastOutSlowIn,
    /// CSS style timing curve. `x1` and `x2` must lie in `[0, 1]`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOutCubic
    }
}

impl Easing {
    pub fn apply(&self, fraction: f64) -> f64 {
        if fraction <= 0.0 || fraction.is_nan() {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => fraction,
            Easing::EaseInOutCubic => {
                if fraction < 0.5 {
                    4.0 * fraction * fraction * fraction
                } else {
                    1.0 - (-2.0 * fraction + 2.0).powi(3) / 2.0
                }
            }
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

// One coordinate of a bezier with end points fixed at 0 and 1.
fn bezier_component(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let mut low = 0.0;
    let mut high = 1.0;
    let mut t = x;

    for _ in 0..BEZIER_ITERATIONS {
        t = (low + high) / 2.0;
        if bezier_component(x1, x2, t) < x {
            low = t;
        } else {
            high = t;
        }
    }

    bezier_component(y1, y2, t)
}
