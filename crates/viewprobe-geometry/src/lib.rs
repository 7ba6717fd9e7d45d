//! Pure math/data for view geometry in Viewprobe
//!
//! This crate contains the geometry primitives shared by every other
//! Viewprobe crate: points, sizes, rectangles, edge insets, and the
//! read-only [`LayoutSnapshot`] bundle a host produces once per layout pass.

mod geometry;
mod snapshot;

pub use geometry::*;
pub use snapshot::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::snapshot::LayoutSnapshot;
}
