//! Concrete modifier nodes for geometry observation.
//!
//! [`GeometryObserverNode`] is the adapter between the host's measurement
//! source and a caller's [`GeometryCallbacks`]: it receives one snapshot per
//! layout pass, fires the appear callback on the first pass, and afterwards
//! forwards per-channel changes gated on value equality. The node itself
//! retains the last observed values, so it behaves correctly even against a
//! host that redundantly re-reports unchanged geometry.

use std::fmt;
use std::hash::{Hash, Hasher};

use viewprobe_foundation::{
    GeometryObserver, ModifierNode, ModifierNodeContext, ModifierNodeElement,
};
use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Size};

use crate::callbacks::GeometryCallbacks;

/// Node that forwards a view's measured geometry to caller callbacks.
pub struct GeometryObserverNode {
    callbacks: GeometryCallbacks,
    last_size: Option<Size>,
    last_insets: Option<EdgeInsets>,
}

impl GeometryObserverNode {
    pub fn new(callbacks: GeometryCallbacks) -> Self {
        Self {
            callbacks,
            last_size: None,
            last_insets: None,
        }
    }

    pub fn callbacks(&self) -> &GeometryCallbacks {
        &self.callbacks
    }

    /// Whether the appear callback has fired for the current attachment.
    pub fn has_appeared(&self) -> bool {
        self.last_size.is_some()
    }

    /// Last size observed during the current attachment, if any.
    pub fn last_size(&self) -> Option<Size> {
        self.last_size
    }

    /// Last safe-area insets observed during the current attachment, if any.
    pub fn last_insets(&self) -> Option<EdgeInsets> {
        self.last_insets
    }

    pub(crate) fn set_callbacks(&mut self, callbacks: GeometryCallbacks) {
        self.callbacks = callbacks;
    }

    fn reset_observation(&mut self) {
        self.last_size = None;
        self.last_insets = None;
    }
}

impl fmt::Debug for GeometryObserverNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryObserverNode")
            .field("callbacks", &self.callbacks)
            .field("last_size", &self.last_size)
            .field("last_insets", &self.last_insets)
            .finish()
    }
}

impl ModifierNode for GeometryObserverNode {
    fn on_attach(&mut self, context: &mut dyn ModifierNodeContext) {
        context.request_geometry_updates();
        log::trace!("geometry observer attached: {:?}", self.callbacks);
    }

    fn on_detach(&mut self) {
        self.reset_observation();
    }

    fn on_reset(&mut self) {
        self.reset_observation();
    }

    fn as_geometry_observer(&self) -> Option<&dyn GeometryObserver> {
        Some(self)
    }

    fn as_geometry_observer_mut(&mut self) -> Option<&mut dyn GeometryObserver> {
        Some(self)
    }
}

impl GeometryObserver for GeometryObserverNode {
    fn on_layout_pass(&mut self, snapshot: &LayoutSnapshot) {
        let size = snapshot.size();
        let insets = snapshot.safe_area_insets();

        match (self.last_size, self.last_insets) {
            (Some(previous_size), Some(previous_insets)) => {
                if size != previous_size {
                    self.last_size = Some(size);
                    self.callbacks.size_change().dispatch(previous_size, size);
                }
                if insets != previous_insets {
                    self.last_insets = Some(insets);
                    self.callbacks
                        .insets_change()
                        .dispatch(previous_insets, insets);
                }
            }
            _ => {
                // First pass for this attachment: the appear callback is the
                // sole notification, even though the values transitioned from
                // an undefined prior state.
                self.last_size = Some(size);
                self.last_insets = Some(insets);
                self.callbacks.dispatch_appear(snapshot);
            }
        }
    }
}

/// Element that creates and updates geometry observer nodes.
#[derive(Clone)]
pub struct ObserveGeometryElement {
    callbacks: GeometryCallbacks,
}

impl ObserveGeometryElement {
    pub fn new(callbacks: GeometryCallbacks) -> Self {
        Self { callbacks }
    }

    pub fn callbacks(&self) -> &GeometryCallbacks {
        &self.callbacks
    }
}

impl fmt::Debug for ObserveGeometryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserveGeometryElement")
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

impl PartialEq for ObserveGeometryElement {
    fn eq(&self, other: &Self) -> bool {
        self.callbacks.same_callbacks(&other.callbacks)
    }
}

impl Eq for ObserveGeometryElement {}

impl Hash for ObserveGeometryElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.callbacks.hash_identity(state);
    }
}

impl ModifierNodeElement for ObserveGeometryElement {
    type Node = GeometryObserverNode;

    fn create(&self) -> Self::Node {
        GeometryObserverNode::new(self.callbacks.clone())
    }

    fn update(&self, node: &mut Self::Node) {
        // Swap the handlers on the live node; the retained geometry stays,
        // so replacing a closure mid-lifetime does not replay the appear
        // callback.
        node.set_callbacks(self.callbacks.clone());
    }

    fn inspector_name(&self) -> &'static str {
        "observeGeometry"
    }

    fn inspector_properties(&self, inspector: &mut dyn FnMut(&'static str, String)) {
        let appear = if self.callbacks.has_on_appear() {
            "set"
        } else {
            "unset"
        };
        inspector("onAppear", appear.to_string());
        inspector(
            "onSizeChange",
            self.callbacks.size_change().arity_label().to_string(),
        );
        inspector(
            "onInsetsChange",
            self.callbacks.insets_change().arity_label().to_string(),
        );
    }
}
