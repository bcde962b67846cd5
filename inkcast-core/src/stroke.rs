//! # Strokes
//!
//! One stroke is a single pen-down-to-pen-up sequence of sampled points,
//! rendered as connected segments and colored as a unit.

use crate::{color::Color, util::Rect};

/// An absolute monotonic timestamp, in milliseconds.
///
/// Subtraction rebases into a session-relative clock, addition rebases back.
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct Milliseconds(pub i64);
impl std::ops::Sub for Milliseconds {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl std::ops::Add for Milliseconds {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// A single sampled (or extrapolated) touch point. Immutable once created.
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Point {
    pub pos: [f32; 2],
    /// Normalized contact pressure.
    pub pressure: f32,
    /// Stylus tilt off the surface normal. Zero when the digitizer doesn't report it.
    pub tilt: f32,
    pub time: Milliseconds,
}
impl Point {
    /// Build a sample, clamping pressure into `[0,1]`.
    #[must_use]
    pub fn new(pos: [f32; 2], pressure: f32, tilt: f32, time: Milliseconds) -> Self {
        Self {
            pos,
            pressure: pressure.clamp(0.0, 1.0),
            tilt,
            time,
        }
    }
}

/// An append-only sequence of points plus the color the stroke was started with.
///
/// Points are never reordered or removed. The bounding rect is accumulated
/// on push, standing in for a full path cache.
#[derive(Clone, Debug)]
pub struct Stroke {
    color: Color,
    points: smallvec::SmallVec<[Point; 16]>,
    bounds: Option<Rect>,
}
impl Stroke {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            points: smallvec::SmallVec::new(),
            bounds: None,
        }
    }
    /// Append a point to the end of the stroke.
    pub fn push(&mut self, point: Point) {
        match self.bounds.as_mut() {
            Some(bounds) => bounds.extend(point.pos),
            None => self.bounds = Some(Rect::point(point.pos)),
        }
        self.points.push(point);
    }
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Bounding rect of everything pushed so far. `None` while the stroke is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
    /// Adjacent point pairs, in draw order. Empty for strokes of fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod test {
    use super::{Milliseconds, Point, Stroke};
    use crate::color::Color;

    fn at(x: f32, y: f32) -> Point {
        Point::new([x, y], 0.5, 0.0, Milliseconds(0))
    }

    #[test]
    fn pressure_clamped() {
        assert_eq!(at(0.0, 0.0).pressure, 0.5);
        assert_eq!(Point::new([0.0; 2], 1.7, 0.0, Milliseconds(0)).pressure, 1.0);
        assert_eq!(
            Point::new([0.0; 2], -0.2, 0.0, Milliseconds(0)).pressure,
            0.0
        );
    }
    #[test]
    fn rebase_round_trip() {
        let base = Milliseconds(1_000);
        let absolute = Milliseconds(1_016);
        let relative = absolute - base;
        assert_eq!(relative, Milliseconds(16));
        assert_eq!(relative + base, absolute);
    }
    #[test]
    fn single_point_yields_no_segments() {
        let mut stroke = Stroke::new(Color::BLACK);
        stroke.push(at(3.0, 4.0));
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.segments().count(), 0);
    }
    #[test]
    fn segments_are_adjacent_pairs() {
        let mut stroke = Stroke::new(Color::BLACK);
        stroke.push(at(0.0, 0.0));
        stroke.push(at(1.0, 0.0));
        stroke.push(at(2.0, 1.0));
        let segments: Vec<_> = stroke.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].0.pos, [0.0, 0.0]);
        assert_eq!(segments[0].1.pos, [1.0, 0.0]);
        assert_eq!(segments[1].0.pos, [1.0, 0.0]);
        assert_eq!(segments[1].1.pos, [2.0, 1.0]);
    }
    #[test]
    fn bounds_accumulate() {
        let mut stroke = Stroke::new(Color::BLACK);
        assert!(stroke.bounds().is_none());
        stroke.push(at(5.0, 5.0));
        stroke.push(at(-1.0, 8.0));
        let bounds = stroke.bounds().unwrap();
        assert_eq!(bounds.min, [-1.0, 5.0]);
        assert_eq!(bounds.max, [5.0, 8.0]);
    }
}
