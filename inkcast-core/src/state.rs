//! Committed canvas state: the z-ordered stroke list.

use crate::stroke::Stroke;

/// All committed strokes, insertion order = z-order (later on top).
///
/// Mutated only by commit (append) and undo (remove last). There is no redo:
/// an undone stroke is gone.
#[derive(Clone, Default, Debug)]
pub struct StrokeCollection {
    strokes: Vec<Stroke>,
}
impl StrokeCollection {
    /// Commit a finished stroke on top of everything drawn so far.
    pub fn push_back(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }
    /// Remove and return the most recently committed stroke, if any.
    pub fn undo_last(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }
    /// Discard every committed stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.strokes.iter()
    }
    #[must_use]
    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::StrokeCollection;
    use crate::{color::Color, stroke::Stroke};

    #[test]
    fn undo_on_empty_is_noop() {
        let mut collection = StrokeCollection::default();
        assert!(collection.undo_last().is_none());
        assert!(collection.is_empty());
    }
    #[test]
    fn undo_removes_exactly_the_last() {
        let mut collection = StrokeCollection::default();
        collection.push_back(Stroke::new(Color::BLACK));
        collection.push_back(Stroke::new(Color::RED));
        let removed = collection.undo_last().unwrap();
        assert_eq!(removed.color(), Color::RED);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.last().unwrap().color(), Color::BLACK);
    }
    #[test]
    fn iteration_is_insertion_order() {
        let mut collection = StrokeCollection::default();
        collection.push_back(Stroke::new(Color::BLACK));
        collection.push_back(Stroke::new(Color::BLUE));
        let colors: Vec<_> = collection.iter().map(Stroke::color).collect();
        assert_eq!(colors, [Color::BLACK, Color::BLUE]);
    }
}
