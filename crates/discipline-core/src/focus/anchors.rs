//! Identity anchor rotation.

use serde::Serialize;

use super::area::FocusArea;

/// The anchor after `current_index`, wrapping to the start.
///
/// Returns `None` for an empty slice.
pub fn next_anchor<'a>(anchors: &[&'a str], current_index: usize) -> Option<&'a str> {
    if anchors.is_empty() {
        return None;
    }
    Some(anchors[(current_index % anchors.len() + 1) % anchors.len()])
}

/// Cursor over a focus area's identity anchors.
///
/// Selecting a different area resets the cursor to the first anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnchorRotation {
    area: FocusArea,
    index: usize,
}

impl AnchorRotation {
    pub fn new(area: FocusArea) -> Self {
        Self { area, index: 0 }
    }

    /// Start at `index`, wrapped into range.
    pub fn at(area: FocusArea, index: usize) -> Self {
        Self {
            area,
            index: index % area.anchors().len(),
        }
    }

    pub fn area(&self) -> FocusArea {
        self.area
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        self.area.anchors()[self.index]
    }

    /// The anchor `advance` would move to.
    pub fn peek_next(&self) -> &'static str {
        let anchors = self.area.anchors();
        anchors[(self.index + 1) % anchors.len()]
    }

    /// Move to the next anchor and return it.
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % self.area.anchors().len();
        self.current()
    }

    /// Switch focus area, restarting from its first anchor.
    pub fn select(&mut self, area: FocusArea) {
        self.area = area;
        self.index = 0;
    }
}

impl Default for AnchorRotation {
    fn default() -> Self {
        Self::new(FocusArea::default())
    }
}
