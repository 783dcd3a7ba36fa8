//! Focus map: focus-area habit cards and identity anchors.

mod anchors;
mod area;

pub use anchors::{next_anchor, AnchorRotation};
pub use area::{FocusArea, FocusCard};
