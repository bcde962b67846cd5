//! # Canvas controller
//!
//! The input state machine between host pen events and the stroke model:
//! idle until a pen-down, drawing until the matching pen-up. While drawing,
//! move samples are routed through the predictor and the extrapolated point
//! (when one exists) is appended in place of the raw sample.
//!
//! Single-threaded by design - the controller owns the committed collection,
//! the in-progress stroke, and the predictor session, and is driven entirely
//! from the host's event context.

use crate::{
    predictor::Predictor,
    prefs::Preferences,
    render,
    stylus::{PenEvent, PenPhase},
};
use inkcast_core::{color::Color, state::StrokeCollection, stroke::Stroke};

/// Stroke width presets matching the shell's menu.
pub mod width {
    pub const THIN: f32 = 3.0;
    pub const MEDIUM: f32 = 7.0;
    pub const THICK: f32 = 12.0;
}

/// The built-in pen colors offered by the shell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum PaletteColor {
    Black,
    Red,
    Blue,
    Green,
}
impl PaletteColor {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::Red => Color::RED,
            Self::Blue => Color::BLUE,
            Self::Green => Color::GREEN,
        }
    }
}

pub struct CanvasController {
    strokes: StrokeCollection,
    in_progress: Option<Stroke>,
    predictor: Predictor,
    color: Color,
    base_width: f32,
    dirty: bool,
}
impl CanvasController {
    #[must_use]
    pub fn new(predictor: Predictor, prefs: &Preferences) -> Self {
        Self {
            strokes: StrokeCollection::default(),
            in_progress: None,
            predictor,
            color: Color::BLACK,
            base_width: prefs.base_stroke_width,
            // First frame always draws.
            dirty: true,
        }
    }

    /// Dispatch one host pen event.
    pub fn handle_event(&mut self, event: PenEvent) {
        log::trace!("pen event {event:?}");
        match event.phase {
            PenPhase::Down => self.begin(event),
            PenPhase::Move => self.extend(event),
            PenPhase::Up => self.finish(event),
        }
    }

    fn begin(&mut self, event: PenEvent) {
        if self.in_progress.is_some() {
            // Out-of-order host events; the unfinished stroke is abandoned.
            log::debug!("pen down while drawing, dropping the unfinished stroke");
        }
        if self.predictor.is_enabled() {
            self.predictor.reset_session(event.time);
        }
        let mut stroke = Stroke::new(self.color);
        // The initial sample is always raw - there is no history to predict from.
        stroke.push(event.sample());
        self.in_progress = Some(stroke);
        self.dirty = true;
    }

    fn extend(&mut self, event: PenEvent) {
        // A move with no stroke active is an out-of-order event, not an error.
        let Some(stroke) = self.in_progress.as_mut() else {
            return;
        };
        let raw = event.sample();
        let point = if self.predictor.is_enabled() {
            self.predictor.push(raw);
            // No prediction (or a fault, silently) falls back to the raw sample.
            self.predictor.predict().unwrap_or(raw)
        } else {
            raw
        };
        stroke.push(point);
        self.dirty = true;
    }

    fn finish(&mut self, event: PenEvent) {
        let Some(mut stroke) = self.in_progress.take() else {
            return;
        };
        // The final sample is always raw so the stroke terminates exactly at
        // the physical lift-off point.
        stroke.push(event.sample());
        self.strokes.push_back(stroke);
        self.dirty = true;
    }

    /// Discard every committed stroke and any stroke in progress.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.in_progress = None;
        self.dirty = true;
    }
    /// Remove the most recently committed stroke. No-op on an empty canvas;
    /// never touches a stroke in progress.
    pub fn undo(&mut self) {
        if self.strokes.undo_last().is_some() {
            self.dirty = true;
        }
    }
    /// Pen color for strokes created after this call. A stroke in progress
    /// keeps the color it was started with.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.dirty = true;
    }
    /// Base stroke width. Read live at draw time, so changing it mid-stroke
    /// is visually immediate.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.base_width = width;
        self.dirty = true;
    }
    #[must_use]
    pub fn stroke_width(&self) -> f32 {
        self.base_width
    }
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
    #[must_use]
    pub fn strokes(&self) -> &StrokeCollection {
        &self.strokes
    }
    #[must_use]
    pub fn in_progress(&self) -> Option<&Stroke> {
        self.in_progress.as_ref()
    }
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }
    #[must_use]
    pub fn is_prediction_enabled(&self) -> bool {
        self.predictor.is_enabled()
    }
    /// Consume the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
    /// Draw the whole canvas onto `surface`.
    pub fn render_to(&self, surface: &mut dyn render::Surface) {
        render::render(
            &self.strokes,
            self.in_progress.as_ref(),
            self.base_width,
            surface,
        );
    }
}
