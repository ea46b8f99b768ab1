//! Geometry primitives in world (screen) coordinates.
//!
//! The y axis grows downward, so a positive rotation angle turns clockwise
//! on screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Rotates `p` about `origin` by `angle_deg` degrees.
pub fn rotate_point(p: Point, origin: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - origin.x;
    let dy = p.y - origin.y;
    Point::new(
        dx * cos_a - dy * sin_a + origin.x,
        dx * sin_a + dy * cos_a + origin.y,
    )
}
