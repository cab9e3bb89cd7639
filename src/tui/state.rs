//! Keyboard cursor over the dashboard's card lists.
//!
//! Each tab keeps its own cursor, so switching tabs and coming back lands on
//! the same card. The cursor is purely a view concern; the dashboard state
//! only learns about it when a key acts on the card underneath.

/// Clamped position in a list of `len` cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
    len: usize,
}

impl CardCursor {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move by `delta` cards, stopping at either end.
    pub fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let last = self.len - 1;
        self.index = self.index.saturating_add_signed(delta).min(last);
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut cursor = CardCursor::new(3);
        cursor.move_by(-1);
        assert_eq!(cursor.index(), 0);
        cursor.move_by(1);
        cursor.move_by(1);
        cursor.move_by(1);
        assert_eq!(cursor.index(), 2);
        cursor.first();
        assert_eq!(cursor.index(), 0);
        cursor.last();
        assert_eq!(cursor.index(), 2);
        cursor.move_by(-10);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_list_never_moves() {
        let mut cursor = CardCursor::default();
        cursor.move_by(1);
        cursor.last();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.is_empty());
    }
}
