//! Anchor/head selection over character indices

use std::ops::Range;

/// A raised selection. `anchor` is where the selection began (the press
/// position, or the cursor before a shift-move); `head` is the live cursor.
///
/// A raised selection may be empty: a mouse press anchors at the click
/// point before any drag happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// `min(anchor, head)..max(anchor, head)`
    pub fn range(&self) -> Range<usize> {
        if self.head < self.anchor {
            self.head..self.anchor
        } else {
            self.anchor..self.head
        }
    }

    pub fn len(&self) -> usize {
        self.anchor.abs_diff(self.head)
    }

    /// Head sits left of the anchor (dragged or shift-moved leftwards)
    pub fn is_backward(&self) -> bool {
        self.head < self.anchor
    }
}
