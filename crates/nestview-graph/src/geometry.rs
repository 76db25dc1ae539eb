//! Pure geometry helpers: rectangles, boundary intersection, curve control points and
//! arrowheads. Nothing here holds state.

use serde::{Deserialize, Serialize};

/// Blend factor for the quadratic control point. Values away from 0.5 bend the curve
/// asymmetrically, which makes the direction of an edge readable without the arrowhead.
pub const CURVE_BLEND: f32 = 0.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        self.sub(other).length()
    }
}

/// Axis-aligned rectangle, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create a new rectangle from position and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: Vec2::new(pos.x + size.x, pos.y + size.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.width() * 0.5,
            self.min.y + self.height() * 0.5,
        )
    }

    /// Check if the rectangle contains a point (borders included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True when the interiors share area. Rectangles that only touch do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect {
            min: self.min.add(offset),
            max: self.max.add(offset),
        }
    }

    /// Distance from `point` to the closest side of the rectangle's perimeter.
    pub fn perimeter_distance(&self, point: Vec2) -> f32 {
        let clamp_x = point.x.clamp(self.min.x, self.max.x);
        let clamp_y = point.y.clamp(self.min.y, self.max.y);
        if self.contains(point) {
            let dl = point.x - self.min.x;
            let dr = self.max.x - point.x;
            let dt = point.y - self.min.y;
            let db = self.max.y - point.y;
            dl.min(dr).min(dt).min(db)
        } else {
            Vec2::new(clamp_x, clamp_y).distance(point)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

/// Which side of `from` a line from its center toward the center of `toward` crosses.
///
/// Both diagonals of `from` are extended into full lines through its center; the side
/// follows from whether the target center lies above each of them. Returns `None` when the
/// centers coincide or `from` has no area.
pub fn exit_side(from: Rect, toward: Rect) -> Option<Side> {
    let center = from.center();
    let target = toward.center();
    let (width, height) = (from.width(), from.height());

    if !(width > 0.0 && height > 0.0) || (center.x == target.x && center.y == target.y) {
        return None;
    }

    // y grows downward, so "above" means a smaller y than the line at that x.
    let slope = height / width;
    let dx = target.x - center.x;
    let above_pos_diag = center.y + slope * dx > target.y;
    let above_neg_diag = center.y - slope * dx > target.y;

    Some(match (above_pos_diag, above_neg_diag) {
        (true, true) => Side::Top,
        (false, true) => Side::Left,
        (true, false) => Side::Right,
        (false, false) => Side::Bottom,
    })
}

/// Point where the line between the two centers leaves `from`.
///
/// Degenerate input falls back to the midpoint of the top side so callers always get a
/// point on the perimeter.
pub fn exit_point(from: Rect, toward: Rect) -> Vec2 {
    let Some(side) = exit_side(from, toward) else {
        tracing::trace!("Degenerate exit point for {:?} toward {:?}", from, toward);
        return Vec2::new(from.center().x, from.min.y);
    };

    let center = from.center();
    let target = toward.center();
    let dx = target.x - center.x;
    let dy = target.y - center.y;

    match side {
        Side::Top | Side::Bottom => {
            let y = if side == Side::Top { from.min.y } else { from.max.y };
            let inv_slope = dx / dy;
            Vec2::new(center.x + inv_slope * (y - center.y), y)
        }
        Side::Left | Side::Right => {
            let x = if side == Side::Left { from.min.x } else { from.max.x };
            let slope = dy / dx;
            Vec2::new(x, center.y + slope * (x - center.x))
        }
    }
}

/// Control point of the asymmetric quadratic curve from `start` to `end`.
pub fn control_point(start: Vec2, end: Vec2) -> Vec2 {
    Vec2::new(
        (1.0 - CURVE_BLEND) * start.x + CURVE_BLEND * end.x,
        CURVE_BLEND * start.y + (1.0 - CURVE_BLEND) * end.y,
    )
}

/// Triangle with its apex at `tip` and base corners `length` away along
/// `orient_angle ± angle_width`.
pub fn arrowhead(tip: Vec2, length: f32, orient_angle: f32, angle_width: f32) -> [Vec2; 3] {
    let left = orient_angle + angle_width;
    let right = orient_angle - angle_width;
    [
        tip,
        Vec2::new(tip.x + length * left.cos(), tip.y + length * left.sin()),
        Vec2::new(tip.x + length * right.cos(), tip.y + length * right.sin()),
    ]
}

/// Angle of the vector pointing from `to` back toward `from`.
pub fn back_angle(from: Vec2, to: Vec2) -> f32 {
    (from.y - to.y).atan2(from.x - to.x)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadCurve {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl QuadCurve {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            control: control_point(start, end),
            end,
        }
    }

    /// Sample the curve at parameter t [0, 1]
    pub fn sample(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        Vec2::new(
            mt * mt * self.start.x + 2.0 * mt * t * self.control.x + t * t * self.end.x,
            mt * mt * self.start.y + 2.0 * mt * t * self.control.y + t * t * self.end.y,
        )
    }

    /// Direction pointing back along the curve from its end, used to seat the arrowhead.
    pub fn end_back_angle(&self) -> f32 {
        if self.control.distance(self.end) > f32::EPSILON {
            back_angle(self.control, self.end)
        } else {
            back_angle(self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_vertically_stacked_rects_exit_bottom_and_top() {
        let source = rect(0.0, 0.0, 100.0, 50.0);
        let dest = rect(0.0, 100.0, 100.0, 50.0);

        assert_eq!(exit_side(source, dest), Some(Side::Bottom));
        assert_eq!(exit_side(dest, source), Some(Side::Top));
        assert_eq!(exit_point(source, dest), Vec2::new(50.0, 50.0));
        assert_eq!(exit_point(dest, source), Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_side_by_side_rects_exit_left_and_right() {
        let left = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(30.0, 0.0, 10.0, 10.0);

        assert_eq!(exit_side(left, right), Some(Side::Right));
        assert_eq!(exit_side(right, left), Some(Side::Left));
        assert_eq!(exit_point(left, right), Vec2::new(10.0, 5.0));
        assert_eq!(exit_point(right, left), Vec2::new(30.0, 5.0));
    }

    #[test]
    fn test_coincident_centers_fall_back_to_top_midpoint() {
        let a = rect(0.0, 0.0, 10.0, 4.0);
        assert_eq!(exit_side(a, a), None);
        assert_eq!(exit_point(a, a), Vec2::new(5.0, 0.0));

        let flat = rect(0.0, 0.0, 0.0, 4.0);
        let p = exit_point(flat, rect(20.0, 20.0, 1.0, 1.0));
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn test_control_point_blend() {
        let c = control_point(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!((c.x - 8.0).abs() < 1e-5);
        assert!((c.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_arrowhead_corners_are_at_length() {
        let tip = Vec2::new(5.0, 5.0);
        let head = arrowhead(tip, 2.0, std::f32::consts::FRAC_PI_2, 0.3);
        assert_eq!(head[0], tip);
        assert!((head[1].distance(tip) - 2.0).abs() < 1e-5);
        assert!((head[2].distance(tip) - 2.0).abs() < 1e-5);
        // Pointing back up an edge that arrives from below.
        assert!(head[1].y > tip.y && head[2].y > tip.y);
    }

    #[test]
    fn test_quad_curve_endpoints() {
        let curve = QuadCurve::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 8.0));
        assert_eq!(curve.sample(0.0), curve.start);
        assert_eq!(curve.sample(1.0), curve.end);
    }

    #[test]
    fn test_touching_rects_do_not_overlap() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(1.0, 0.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&rect(0.5, 0.5, 1.0, 1.0)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            0.0f32..1000.0,
            0.0f32..1000.0,
            1.0f32..100.0,
            1.0f32..100.0,
        )
            .prop_map(|(x, y, w, h)| rect(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_exit_point_lies_on_perimeter(from in rect_strategy(), toward in rect_strategy()) {
            let p = exit_point(from, toward);
            let tolerance = 1e-3 * (1.0 + from.max.x.abs().max(from.max.y.abs()));
            prop_assert!(
                from.perimeter_distance(p) <= tolerance,
                "{:?} is not on the perimeter of {:?}", p, from
            );
        }

        #[test]
        fn prop_exit_point_moves_toward_target(from in rect_strategy(), toward in rect_strategy()) {
            prop_assume!(from.center().distance(toward.center()) > 1.0);
            let p = exit_point(from, toward);
            let to_target = toward.center().sub(from.center());
            let to_exit = p.sub(from.center());
            prop_assert!(to_target.x * to_exit.x + to_target.y * to_exit.y >= 0.0);
        }
    }
}
