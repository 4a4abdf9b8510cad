///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::f64::consts::PI;
use std::time::Duration;

use druid::kurbo::{Arc, BezPath, Circle};
use druid::{
    BoxConstraints, Color, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx,
    Point, RenderContext, Selector, Size, UpdateCtx, Vec2, Widget,
};

use crate::{
    animator::AngleAnimator,
    config::GaugeConfig,
    rotation::{pointer_pivot, pointer_transform},
    GaugeState,
};

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Command Selectors
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
/// Sets the target angle from outside the widget tree's data flow. Values are clamped into range.
pub const SET_TARGET_ANGLE: Selector<f64> = Selector::new("speedometer.set-target-angle");

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Gauge Widget
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
/// Half circle speedometer. The widget data is the target angle; the pointer eases towards it.
pub struct Gauge {
    animator: AngleAnimator,
}

impl Gauge {
    pub fn new() -> Self {
        Self::with_config(GaugeConfig::default())
    }

    pub fn with_config(config: GaugeConfig) -> Self {
        Gauge {
            animator: AngleAnimator::new(config),
        }
    }

    pub fn state(&self) -> GaugeState {
        self.animator.state()
    }

    pub fn displayed_angle(&self) -> f64 {
        self.animator.displayed_angle()
    }

    fn config(&self) -> &GaugeConfig {
        self.animator.config()
    }

    /// Clamps an angle requested through `SET_TARGET_ANGLE` before it is written to the data.
    fn clamp_requested(&self, angle: f64) -> f64 {
        let clamped = self.config().range.clamp(angle);
        if clamped != angle {
            log::warn!("Requested angle {} clamped to {}", angle, clamped);
        }
        clamped
    }

    /// Feeds a changed target to the animator. True when animation frames are needed.
    fn retarget(&mut self, old_target: f64, new_target: f64) -> bool {
        if old_target.same(&new_target) {
            return false;
        }
        self.animator.set_target(new_target)
    }

    fn pointer_path(&self, pivot: Point) -> BezPath {
        let pointer = &self.config().pointer;
        let half_width = pointer.width / 2.0;

        let mut path = BezPath::new();
        path.move_to(pivot - Vec2::new(half_width, 0.0));
        path.line_to(pivot - Vec2::new(0.0, pointer.length));
        path.line_to(pivot + Vec2::new(half_width, 0.0));
        path.close_path();
        path
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget<f64> for Gauge {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut f64, _env: &Env) {
        match event {
            Event::AnimFrame(interval) => {
                if self.animator.is_animating() {
                    self.animator.advance(Duration::from_nanos(*interval));
                    ctx.request_paint();

                    if self.animator.is_animating() {
                        ctx.request_anim_frame();
                    }
                }
            }
            Event::Command(cmd) => {
                if let Some(angle) = cmd.get(SET_TARGET_ANGLE) {
                    *data = self.clamp_requested(*angle);
                    ctx.set_handled();
                }
            }
            _ => {}
        }
    }

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &f64, _env: &Env) {
        // The first value is shown as is, only later changes animate.
        if let LifeCycle::WidgetAdded = event {
            self.animator.set_target(*data);
            self.animator.snap_to_target();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &f64, data: &f64, _env: &Env) {
        if !old_data.same(data) {
            if self.retarget(*old_data, *data) {
                ctx.request_anim_frame();
            }
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &f64,
        _env: &Env,
    ) -> Size {
        let config = self.config();
        let size = bc.constrain(Size::new(config.paint_width(), config.paint_height()));
        if size.width.is_infinite() || size.height.is_infinite() {
            log::warn!("Infinite size passed to Gauge");
        }
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &f64, _env: &Env) {
        let size = ctx.size();
        let pivot = pointer_pivot(size, self.config());
        let arc_config = &self.config().arc;
        let radius = arc_config.diameter / 2.0;

        ctx.fill(size.to_rect(), &Color::WHITE);

        let arc = Arc {
            center: pivot,
            radii: Vec2::new(radius, radius),
            start_angle: PI,
            sweep_angle: PI,
            x_rotation: 0.0,
        };
        ctx.stroke(arc, &arc_config.color, arc_config.stroke_width);

        let pointer_path = self.pointer_path(pivot);
        let pointer_config = &self.config().pointer;
        let transform = pointer_transform(pivot, self.animator.rotation());

        ctx.with_save(|ctx| {
            ctx.transform(transform);
            ctx.fill(&pointer_path, &pointer_config.color);
            ctx.fill(Circle::new(pivot, pointer_config.width), &pointer_config.color);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use druid::kurbo::Shape;

    #[test]
    fn new_gauge_is_idle_at_zero() {
        let gauge = Gauge::new();
        assert_eq!(gauge.state(), GaugeState::Idle);
        assert_eq!(gauge.displayed_angle(), 0.0);
    }

    #[test]
    fn requested_angles_are_clamped_into_range() {
        let gauge = Gauge::new();
        assert_eq!(gauge.clamp_requested(250.0), 180.0);
        assert_eq!(gauge.clamp_requested(-10.0), 0.0);
        assert_eq!(gauge.clamp_requested(72.0), 72.0);
    }

    #[test]
    fn changed_target_needs_frames() {
        let mut gauge = Gauge::new();
        assert!(gauge.retarget(0.0, 120.0));
        assert_eq!(gauge.state(), GaugeState::Animating);

        gauge.animator.advance(Duration::from_millis(500));
        assert_eq!(gauge.state(), GaugeState::Idle);
        assert_eq!(gauge.displayed_angle(), 120.0);
    }

    #[test]
    fn unchanged_target_needs_no_frames() {
        let mut gauge = Gauge::new();
        assert!(!gauge.retarget(0.0, 0.0));
        assert_eq!(gauge.state(), GaugeState::Idle);
    }

    #[test]
    fn retarget_mid_flight_keeps_animating_from_current_angle() {
        let mut gauge = Gauge::new();
        gauge.retarget(0.0, 180.0);
        gauge.animator.advance(Duration::from_millis(250));
        let here = gauge.displayed_angle();

        assert!(gauge.retarget(180.0, 30.0));
        assert_eq!(gauge.displayed_angle(), here);
        assert_eq!(gauge.state(), GaugeState::Animating);
    }

    #[test]
    fn pointer_points_up_before_rotation() {
        let gauge = Gauge::new();
        let pivot = Point::new(130.0, 130.0);
        let bounds = gauge.pointer_path(pivot).bounding_box();

        assert_eq!(bounds.y1, pivot.y);
        assert_eq!(bounds.y0, pivot.y - 90.0);
        assert_eq!(bounds.center().x, pivot.x);
    }
}
