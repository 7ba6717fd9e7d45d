use std::any::Any;

use viewprobe_geometry::LayoutSnapshot;

/// Runtime services exposed to modifier nodes while attached to a tree.
///
/// The context is provided by the host (or by a test harness standing in for
/// one). It intentionally exposes only what geometry observation needs, so
/// hosts can implement it without leaking their own runtime details.
pub trait ModifierNodeContext {
    /// Asks the host's measurement source to begin delivering layout
    /// snapshots for the view this node is attached to.
    ///
    /// The request is scoped to that single view's subtree; it must not
    /// cause snapshots to flow to sibling views.
    fn request_geometry_updates(&mut self) {}
}

/// Lightweight [`ModifierNodeContext`] implementation that records requests.
///
/// Hosts with a real measurement source implement [`ModifierNodeContext`]
/// themselves; this recording variant backs tests and the layout robot,
/// which only need to know that an attached node asked for snapshots.
#[derive(Default, Debug, Clone)]
pub struct BasicModifierNodeContext {
    geometry_requests: usize,
}

impl BasicModifierNodeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of geometry-update requests recorded since construction.
    pub fn geometry_requests(&self) -> usize {
        self.geometry_requests
    }

    /// Returns whether any node asked the measurement source for snapshots.
    pub fn geometry_updates_requested(&self) -> bool {
        self.geometry_requests > 0
    }
}

impl ModifierNodeContext for BasicModifierNodeContext {
    fn request_geometry_updates(&mut self) {
        self.geometry_requests += 1;
    }
}

/// Core trait implemented by modifier nodes.
///
/// Nodes receive lifecycle callbacks when they attach to or detach from a
/// view, and may react to resets triggered by the runtime when a node
/// instance is recycled into a fresh attachment. Specialized behavior is
/// reached through `as_*` accessors rather than downcasting at call sites.
pub trait ModifierNode: Any {
    fn on_attach(&mut self, _context: &mut dyn ModifierNodeContext) {}

    fn on_detach(&mut self) {}

    fn on_reset(&mut self) {}

    /// Returns this node as a geometry observer if it implements the trait.
    fn as_geometry_observer(&self) -> Option<&dyn GeometryObserver> {
        None
    }

    /// Returns this node as a mutable geometry observer if it implements the trait.
    fn as_geometry_observer_mut(&mut self) -> Option<&mut dyn GeometryObserver> {
        None
    }
}

impl dyn ModifierNode {
    pub fn as_any(&self) -> &dyn Any {
        self
    }

    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Nodes that consume per-pass layout snapshots from the measurement source.
pub trait GeometryObserver: ModifierNode {
    /// Called by the host once per layout pass with that pass's snapshot.
    ///
    /// Hosts are expected to deliver every pass, including passes where the
    /// geometry did not change; observers gate on value equality themselves.
    fn on_layout_pass(&mut self, snapshot: &LayoutSnapshot);
}
