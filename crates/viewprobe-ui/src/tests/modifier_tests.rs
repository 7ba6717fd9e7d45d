use std::any::TypeId;
use std::cell::RefCell;
use std::rc::Rc;

use viewprobe_foundation::AnyModifierElement;
use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Size};

use crate::callbacks::GeometryCallbacks;
use crate::chain::ModifierChainHandle;
use crate::modifier::Modifier;
use crate::modifier_nodes::GeometryObserverNode;

#[test]
fn observe_geometry_appends_one_element() {
    let modifier = Modifier::empty().observe_geometry(GeometryCallbacks::new());

    assert_eq!(modifier.elements().len(), 1);
    assert!(modifier.any(|element| element.node_type() == TypeId::of::<GeometryObserverNode>()));
}

#[test]
fn then_concatenates_in_insertion_order() {
    let modifier = Modifier::empty()
        .on_size_changed(|| {})
        .then(Modifier::empty().on_insets_changed(|| {}));

    let names = modifier.fold_in(Vec::new(), |mut acc, element| {
        acc.push(element.inspector_name());
        acc
    });
    assert_eq!(names, vec!["observeGeometry", "observeGeometry"]);
    assert_eq!(modifier.elements().len(), 2);
}

#[test]
fn empty_modifier_has_no_elements() {
    let modifier = Modifier::empty();
    assert!(modifier.is_empty());
    assert!(!modifier.any(|_| true));
}

#[test]
fn inspector_reports_slot_arities() {
    let modifier = Modifier::empty().observe_geometry(
        GeometryCallbacks::new()
            .on_appear(|_| {})
            .on_size_change(|| {}),
    );

    let description = modifier.inspector_info().describe();
    assert!(description.contains("onAppear=set"), "{description}");
    assert!(description.contains("onSizeChange=zero-arg"), "{description}");
    assert!(description.contains("onInsetsChange=unset"), "{description}");
}

#[test]
fn convenience_methods_set_single_slots() {
    let modifier = Modifier::empty().on_size_changed_values(|_, _| {});

    let mut handle = ModifierChainHandle::new();
    handle.update(&modifier);

    let mut visited = 0;
    handle.chain_mut().for_each_node(|node| {
        let node = node
            .as_any()
            .downcast_ref::<GeometryObserverNode>()
            .expect("geometry observer node");
        assert!(!node.callbacks().has_on_appear());
        assert_eq!(node.callbacks().size_change().arity_label(), "two-arg");
        assert_eq!(node.callbacks().insets_change().arity_label(), "unset");
        visited += 1;
    });
    assert_eq!(visited, 1);
}

#[test]
fn update_with_same_callbacks_reuses_the_node() {
    let appears = Rc::new(RefCell::new(0u32));
    let sink = appears.clone();
    let modifier = Modifier::empty().on_appear(move |_| *sink.borrow_mut() += 1);

    let mut handle = ModifierChainHandle::new();
    handle.update(&modifier);

    let first = LayoutSnapshot::new(Size::new(100.0, 100.0), EdgeInsets::ZERO);
    handle.dispatch_layout_pass(&first);

    // Recomposing with an identical modifier must not recreate the node or
    // replay the appear callback.
    handle.update(&modifier.clone());
    handle.dispatch_layout_pass(&first);

    assert_eq!(*appears.borrow(), 1);
}

#[test]
fn update_with_new_closures_keeps_observation_state() {
    let appears = Rc::new(RefCell::new(0u32));
    let sink = appears.clone();
    let first_modifier = Modifier::empty().on_appear(move |_| *sink.borrow_mut() += 1);

    let mut handle = ModifierChainHandle::new();
    handle.update(&first_modifier);
    handle.dispatch_layout_pass(&LayoutSnapshot::new(Size::new(100.0, 100.0), EdgeInsets::ZERO));

    let pairs = Rc::new(RefCell::new(Vec::new()));
    let pair_sink = pairs.clone();
    let second_modifier = Modifier::empty().on_size_changed_values(move |old, new| {
        pair_sink.borrow_mut().push((old, new));
    });
    handle.update(&second_modifier);
    handle.dispatch_layout_pass(&LayoutSnapshot::new(Size::new(100.0, 300.0), EdgeInsets::ZERO));

    // Same element type: the node was updated in place, so the old size
    // observed under the first configuration seeds the first change pair.
    assert_eq!(*appears.borrow(), 1);
    assert_eq!(
        pairs.borrow().as_slice(),
        &[(Size::new(100.0, 100.0), Size::new(100.0, 300.0))]
    );
}

#[test]
fn geometry_updates_requested_tracks_attachment() {
    let mut handle = ModifierChainHandle::new();
    handle.update(&Modifier::empty());
    assert!(!handle.geometry_updates_requested());

    handle.update(&Modifier::empty().on_size_changed(|| {}));
    assert!(handle.geometry_updates_requested());
}

#[test]
fn removing_the_observer_stops_dispatch() {
    let count = Rc::new(RefCell::new(0u32));
    let sink = count.clone();
    let modifier = Modifier::empty().on_size_changed(move || *sink.borrow_mut() += 1);

    let mut handle = ModifierChainHandle::new();
    handle.update(&modifier);
    handle.dispatch_layout_pass(&LayoutSnapshot::new(Size::new(10.0, 10.0), EdgeInsets::ZERO));
    handle.dispatch_layout_pass(&LayoutSnapshot::new(Size::new(20.0, 10.0), EdgeInsets::ZERO));
    assert_eq!(*count.borrow(), 1);

    handle.update(&Modifier::empty());
    handle.dispatch_layout_pass(&LayoutSnapshot::new(Size::new(30.0, 10.0), EdgeInsets::ZERO));
    assert_eq!(*count.borrow(), 1, "detached observer must not fire");
}
