//! Layout Snapshot
//!
//! The read-only geometry bundle a host produces for a view on every layout
//! pass. Observers receive one snapshot per pass and must not retain mutable
//! access to it; the host constructs a fresh value each time.

use crate::{EdgeInsets, Point, Rect, Size};

/// Geometry of a single view as measured during one layout pass.
///
/// The snapshot always carries the measured size and safe-area insets.
/// It also exposes the view's position within the root, which hosts fill in
/// when they track placement; consumers that only care about size and insets
/// can ignore it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSnapshot {
    size: Size,
    safe_area_insets: EdgeInsets,
    position_in_root: Point,
}

impl LayoutSnapshot {
    /// Creates a snapshot positioned at the root origin.
    pub fn new(size: Size, safe_area_insets: EdgeInsets) -> Self {
        Self {
            size,
            safe_area_insets,
            position_in_root: Point::ZERO,
        }
    }

    /// Creates a snapshot for a view placed at `position_in_root`.
    pub fn with_position(size: Size, safe_area_insets: EdgeInsets, position_in_root: Point) -> Self {
        Self {
            size,
            safe_area_insets,
            position_in_root,
        }
    }

    /// Measured size of the view for this pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Safe-area insets applying to the view for this pass.
    pub fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area_insets
    }

    /// Position of the view's origin relative to the root.
    pub fn position_in_root(&self) -> Point {
        self.position_in_root
    }

    /// Bounds of the view in root coordinates.
    pub fn bounds_in_root(&self) -> Rect {
        Rect::from_origin_size(self.position_in_root, self.size)
    }
}
