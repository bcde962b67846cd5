//! # Pressure-weighted segment rendering
//!
//! Stateless per frame: rendering is a pure function of the committed
//! collection, the stroke in progress, and the base width. The same state
//! always produces the same primitive sequence, so hosts are free to redraw
//! whenever and however often they like.

use inkcast_core::{color::Color, state::StrokeCollection, stroke::Stroke};

/// Width floor as a fraction of the base width. Keeps segments visible even
/// at zero reported pressure (stylus hover, digitizer edge cases).
pub const MIN_PRESSURE_SCALE: f32 = 0.3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Complete style for one segment. Everything the primitive needs rides
/// along with the call - there is no ambient paint state to mutate and
/// restore.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentStyle {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

/// The one primitive a host drawing surface must provide.
pub trait Surface {
    fn line(&mut self, from: [f32; 2], to: [f32; 2], style: SegmentStyle);
}

/// Effective width of a segment drawn between pressures `a` and `b`.
#[must_use]
pub fn segment_width(base_width: f32, a: f32, b: f32) -> f32 {
    base_width * ((a + b) / 2.0).max(MIN_PRESSURE_SCALE)
}

fn draw_stroke(stroke: &Stroke, base_width: f32, surface: &mut dyn Surface) {
    // Fewer than two points yields nothing - a single tap leaves no mark.
    for (prev, curr) in stroke.segments() {
        surface.line(
            prev.pos,
            curr.pos,
            SegmentStyle {
                color: stroke.color(),
                width: segment_width(base_width, prev.pressure, curr.pressure),
                cap: LineCap::Round,
                join: LineJoin::Round,
            },
        );
    }
}

/// Draw every committed stroke in z-order, then the stroke in progress on top.
pub fn render(
    strokes: &StrokeCollection,
    in_progress: Option<&Stroke>,
    base_width: f32,
    surface: &mut dyn Surface,
) {
    for stroke in strokes.iter() {
        draw_stroke(stroke, base_width, surface);
    }
    if let Some(stroke) = in_progress {
        draw_stroke(stroke, base_width, surface);
    }
}

/// Counts primitives without rasterizing anything. For headless hosts and
/// sanity logging.
#[derive(Default, Debug, Clone, Copy)]
pub struct SegmentCounter {
    pub segments: usize,
}
impl Surface for SegmentCounter {
    fn line(&mut self, _: [f32; 2], _: [f32; 2], _: SegmentStyle) {
        self.segments += 1;
    }
}

#[cfg(test)]
mod test {
    use super::{render, segment_width, SegmentStyle, Surface, MIN_PRESSURE_SCALE};
    use inkcast_core::{
        color::Color,
        state::StrokeCollection,
        stroke::{Milliseconds, Point, Stroke},
    };

    #[derive(Default, PartialEq, Debug, Clone)]
    struct Recording(Vec<([f32; 2], [f32; 2], SegmentStyle)>);
    impl Surface for Recording {
        fn line(&mut self, from: [f32; 2], to: [f32; 2], style: SegmentStyle) {
            self.0.push((from, to, style));
        }
    }

    fn stroke_of(color: Color, points: &[([f32; 2], f32)]) -> Stroke {
        let mut stroke = Stroke::new(color);
        for (i, &(pos, pressure)) in points.iter().enumerate() {
            stroke.push(Point::new(pos, pressure, 0.0, Milliseconds(i as i64 * 8)));
        }
        stroke
    }

    #[test]
    fn width_is_bounded_by_floor_and_base() {
        let base = 10.0;
        for a in 0..=10 {
            for b in 0..=10 {
                let (a, b) = (a as f32 / 10.0, b as f32 / 10.0);
                let width = segment_width(base, a, b);
                assert!(width >= MIN_PRESSURE_SCALE * base, "{a} {b} -> {width}");
                assert!(width <= base, "{a} {b} -> {width}");
            }
        }
    }
    #[test]
    fn zero_pressure_hits_the_floor_exactly() {
        assert_eq!(segment_width(10.0, 0.0, 0.0), 10.0 * MIN_PRESSURE_SCALE);
    }
    #[test]
    fn average_pressure_above_floor_is_linear() {
        assert!((segment_width(10.0, 0.6, 1.0) - 8.0).abs() < 1e-5);
    }
    #[test]
    fn single_point_stroke_renders_zero_segments() {
        let mut collection = StrokeCollection::default();
        collection.push_back(stroke_of(Color::BLACK, &[([5.0, 5.0], 1.0)]));
        let mut recording = Recording::default();
        render(&collection, None, 5.0, &mut recording);
        assert!(recording.0.is_empty());
    }
    #[test]
    fn renders_committed_then_in_progress() {
        let mut collection = StrokeCollection::default();
        collection.push_back(stroke_of(
            Color::BLACK,
            &[([0.0, 0.0], 0.5), ([1.0, 0.0], 0.5)],
        ));
        let live = stroke_of(Color::RED, &[([2.0, 0.0], 0.5), ([3.0, 0.0], 0.5)]);
        let mut recording = Recording::default();
        render(&collection, Some(&live), 5.0, &mut recording);
        assert_eq!(recording.0.len(), 2);
        // Committed first, live stroke on top.
        assert_eq!(recording.0[0].2.color, Color::BLACK);
        assert_eq!(recording.0[1].2.color, Color::RED);
    }
    #[test]
    fn output_is_a_pure_function_of_state() {
        let mut collection = StrokeCollection::default();
        collection.push_back(stroke_of(
            Color::BLUE,
            &[([0.0, 0.0], 0.2), ([4.0, 4.0], 0.9), ([8.0, 2.0], 0.7)],
        ));
        let live = stroke_of(Color::GREEN, &[([1.0, 1.0], 0.4), ([2.0, 2.0], 0.6)]);

        let mut first = Recording::default();
        render(&collection, Some(&live), 7.0, &mut first);
        let mut second = Recording::default();
        render(&collection, Some(&live), 7.0, &mut second);
        assert_eq!(first, second);
        assert!(!first.0.is_empty());
    }
}
