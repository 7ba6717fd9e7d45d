use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Size};

use super::{inspector_metadata, InspectorMetadata, Modifier};
use crate::callbacks::GeometryCallbacks;
use crate::modifier_nodes::ObserveGeometryElement;

impl Modifier {
    /// Observe this view's measured geometry with the given callback set.
    ///
    /// This is the full-surface entry point; the `on_*` conveniences below
    /// cover the common single-callback cases.
    ///
    /// Example: `Modifier::empty().observe_geometry(GeometryCallbacks::new().on_appear(|s| { .. }))`
    pub fn observe_geometry(self, callbacks: GeometryCallbacks) -> Self {
        let metadata = observe_metadata(&callbacks);
        let modifier =
            Self::with_element(ObserveGeometryElement::new(callbacks)).with_inspector_metadata(metadata);
        self.then(modifier)
    }

    /// Run `on_appear` once with the view's first layout snapshot.
    ///
    /// Example: `Modifier::empty().on_appear(|snapshot| { .. })`
    pub fn on_appear(self, on_appear: impl Fn(&LayoutSnapshot) + 'static) -> Self {
        self.observe_geometry(GeometryCallbacks::new().on_appear(on_appear))
    }

    /// Run `on_change` whenever the view's measured size changes.
    ///
    /// Example: `Modifier::empty().on_size_changed(|| { .. })`
    pub fn on_size_changed(self, on_change: impl Fn() + 'static) -> Self {
        self.observe_geometry(GeometryCallbacks::new().on_size_change(on_change))
    }

    /// Run `on_change` with the old and new size whenever it changes.
    ///
    /// Example: `Modifier::empty().on_size_changed_values(|old, new| { .. })`
    pub fn on_size_changed_values(self, on_change: impl Fn(Size, Size) + 'static) -> Self {
        self.observe_geometry(GeometryCallbacks::new().on_size_change_values(on_change))
    }

    /// Run `on_change` whenever the view's safe-area insets change.
    ///
    /// Example: `Modifier::empty().on_insets_changed(|| { .. })`
    pub fn on_insets_changed(self, on_change: impl Fn() + 'static) -> Self {
        self.observe_geometry(GeometryCallbacks::new().on_insets_change(on_change))
    }

    /// Run `on_change` with the old and new insets whenever they change.
    ///
    /// Example: `Modifier::empty().on_insets_changed_values(|old, new| { .. })`
    pub fn on_insets_changed_values(
        self,
        on_change: impl Fn(EdgeInsets, EdgeInsets) + 'static,
    ) -> Self {
        self.observe_geometry(GeometryCallbacks::new().on_insets_change_values(on_change))
    }
}

fn observe_metadata(callbacks: &GeometryCallbacks) -> InspectorMetadata {
    let appear = if callbacks.has_on_appear() { "set" } else { "unset" };
    let size = callbacks.size_change().arity_label();
    let insets = callbacks.insets_change().arity_label();
    inspector_metadata("observeGeometry", move |info| {
        info.add_property("onAppear", appear);
        info.add_property("onSizeChange", size);
        info.add_property("onInsetsChange", insets);
    })
}
