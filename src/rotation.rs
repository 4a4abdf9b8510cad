use druid::{Affine, Point, Size};

use crate::{config::GaugeConfig, POINTER_ROTATION_OFFSET};

/// Rotation in degrees for a displayed angle. 0 points left, 90 up, 180 right.
pub fn pointer_rotation(displayed_angle: f64) -> f64 {
    displayed_angle - POINTER_ROTATION_OFFSET
}

/// Rotates around `pivot`. Positive degrees turn clockwise on screen (y grows downwards).
pub fn pointer_transform(pivot: Point, rotation_degrees: f64) -> Affine {
    let offset = pivot.to_vec2();
    Affine::translate(offset)
        * Affine::rotate(rotation_degrees.to_radians())
        * Affine::translate(-offset)
}

/// Centre of the arc, which is also the bottom centre of the pointer.
pub fn pointer_pivot(size: Size, config: &GaugeConfig) -> Point {
    Point::new(size.width / 2.0, size.height - config.arc.stroke_width / 2.0)
}
