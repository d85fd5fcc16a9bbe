//! Planar geometry on decimal-degree coordinates.
//!
//! Distances are Euclidean in degree space scaled by
//! [`DISTANCE_FACTOR_KM_PER_DEG`]. This is a deliberate flat-earth model; it is
//! not a geodesic and should not be compared against one.

use crate::constants::DISTANCE_FACTOR_KM_PER_DEG;
use crate::units::km_to_deg;

/// Immutable 2D coordinate. `x` is longitude-like, `y` latitude-like.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    #[inline]
    pub fn midpoint(self, other: Point) -> Self {
        self.lerp(other, 0.5)
    }

    /// Scaled distance to `other` in kilometres.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        distance(self, other)
    }
}

/// Scaled Euclidean distance between two points in kilometres.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    DISTANCE_FACTOR_KM_PER_DEG * (dx * dx + dy * dy).sqrt()
}

/// True when `point` lies within `range_km` of `center`, boundary included.
#[inline]
pub fn in_range(point: Point, center: Point, range_km: f64) -> bool {
    distance(point, center) <= range_km
}

/// Orthogonal projection of `p` onto the segment `a`–`b`, clamped to its ends.
///
/// A zero-length segment projects everything onto `a`.
pub fn closest_point_on_segment(a: Point, b: Point, p: Point) -> Point {
    let ab = (b.x - a.x, b.y - a.y);
    let ap = (p.x - a.x, p.y - a.y);
    let length_sq = ab.0 * ab.0 + ab.1 * ab.1;
    if length_sq == 0.0 {
        return a;
    }
    let t = (ap.0 * ab.0 + ap.1 * ab.1) / length_sq;
    if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        Point::new(a.x + ab.0 * t, a.y + ab.1 * t)
    }
}

/// Closed parameter interval `[t0, t1]` along a segment.
pub type Interval = (f64, f64);

/// Parameter gap still treated as contact. Glide circles that touch exactly
/// on a segment yield roots that can miss each other by a few ulps, while
/// [`in_range`] reports the touching point as covered by both.
pub const OVERLAP_TOLERANCE: f64 = 1e-9;

/// True when two closed intervals share at least one parameter, up to
/// [`OVERLAP_TOLERANCE`].
#[inline]
pub fn intervals_overlap(a: Interval, b: Interval) -> bool {
    a.0.max(b.0) <= a.1.min(b.1) + OVERLAP_TOLERANCE
}

/// Directed straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Scaled length in kilometres.
    pub fn length_km(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Point at parameter `t`, with `t` in `[0, 1]` spanning the segment.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.start.lerp(self.end, t)
    }

    /// Closest point on the segment to `p`.
    pub fn closest_point(&self, p: Point) -> Point {
        closest_point_on_segment(self.start, self.end, p)
    }

    /// Distance in kilometres from `p` to the nearest point of the segment.
    pub fn distance_to(&self, p: Point) -> f64 {
        distance(self.closest_point(p), p)
    }

    /// Parameters of the segment points within `range_km` of `center`.
    ///
    /// Returns `None` when no point of the segment is in range.
    pub fn coverage(&self, center: Point, range_km: f64) -> Option<Interval> {
        if range_km < 0.0 || !range_km.is_finite() {
            return None;
        }
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let a = dx * dx + dy * dy;
        if a == 0.0 {
            return in_range(self.start, center, range_km).then_some((0.0, 1.0));
        }

        // |start + t·d - center|² = (range / factor)², solved for t.
        let fx = self.start.x - center.x;
        let fy = self.start.y - center.y;
        let radius = km_to_deg(range_km);
        let b = 2.0 * (fx * dx + fy * dy);
        let c = fx * fx + fy * fy - radius * radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let t0 = ((-b - root) / (2.0 * a)).max(0.0);
        let t1 = ((-b + root) / (2.0 * a)).min(1.0);
        (t0 <= t1).then_some((t0, t1))
    }
}
