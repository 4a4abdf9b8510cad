use std::time::Duration;

use druid::Color;
use druid_color_thesaurus::black;

use crate::{easing::Easing, MAX_ANGLE, MIN_ANGLE};

/// Inclusive range of angles the gauge accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub min: f64,
    pub max: f64,
}

impl AngleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }

    /// NaN collapses to `min`.
    pub fn clamp(&self, angle: f64) -> f64 {
        if angle.is_nan() {
            return self.min;
        }
        angle.max(self.min).min(self.max)
    }
}

impl Default for AngleRange {
    fn default() -> Self {
        Self::new(MIN_ANGLE, MAX_ANGLE)
    }
}

/// The static half circle behind the pointer
#[derive(Debug, Clone)]
pub struct ArcConfig {
    pub diameter: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            diameter: 200.0,
            stroke_width: 60.0,
            color: Color::rgb8(0xFF, 0x00, 0x00),
        }
    }
}

/// Pointer needle, measured from its pivot to the tip
#[derive(Debug, Clone)]
pub struct PointerConfig {
    pub length: f64,
    pub width: f64,
    pub color: Color,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            length: 90.0,
            width: 12.0,
            color: black::LICORICE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            easing: Easing::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GaugeConfig {
    pub arc: ArcConfig,
    pub pointer: PointerConfig,
    pub animation: AnimationConfig,
    pub range: AngleRange,
}

impl GaugeConfig {
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.animation.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animation.easing = easing;
        self
    }

    pub fn with_range(mut self, range: AngleRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_arc(mut self, arc: ArcConfig) -> Self {
        self.arc = arc;
        self
    }

    pub fn with_pointer(mut self, pointer: PointerConfig) -> Self {
        self.pointer = pointer;
        self
    }

    /// Height of the area the gauge paints into: the upper half of the arc plus its stroke.
    pub fn paint_height(&self) -> f64 {
        let radius = self.arc.diameter / 2.0;
        let half_stroke = self.arc.stroke_width / 2.0;
        (radius + half_stroke).max(self.pointer.length) + half_stroke
    }

    pub fn paint_width(&self) -> f64 {
        self.arc.diameter + self.arc.stroke_width
    }
}
