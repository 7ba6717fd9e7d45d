use crate::element::DynModifierElement;
use crate::node::{GeometryObserver, ModifierNode, ModifierNodeContext};

struct ChainEntry {
    element: DynModifierElement,
    node: Box<dyn ModifierNode>,
}

/// Container that keeps live modifier nodes in sync with an element list.
///
/// Reconciliation is positional: an element at index `i` reuses the node at
/// index `i` from the previous update when the element types match. Reused
/// nodes keep their internal state, which is what lets a geometry observer
/// survive recomposition without replaying its appear callback.
#[derive(Default)]
pub struct ModifierNodeChain {
    entries: Vec<ChainEntry>,
}

impl ModifierNodeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles the chain against `elements`.
    ///
    /// New nodes are created and attached through `context`; nodes whose
    /// elements disappeared are detached. An element equal to its
    /// predecessor leaves the node untouched unless the element insists on
    /// `always_update`.
    pub fn update_from_slice(
        &mut self,
        elements: &[DynModifierElement],
        context: &mut dyn ModifierNodeContext,
    ) {
        let mut previous = std::mem::take(&mut self.entries).into_iter();

        for element in elements {
            match previous.next() {
                Some(mut entry) if entry.element.element_type() == element.element_type() => {
                    let unchanged = element.equals_element(entry.element.as_ref());
                    if !unchanged || element.requires_update() {
                        element.update_node(entry.node.as_mut());
                    }
                    entry.element = element.clone();
                    self.entries.push(entry);
                }
                replaced => {
                    if let Some(mut entry) = replaced {
                        entry.node.on_detach();
                    }
                    let mut node = element.create_node();
                    node.on_attach(context);
                    log::trace!("attached modifier node: {}", element.inspector_name());
                    self.entries.push(ChainEntry {
                        element: element.clone(),
                        node,
                    });
                }
            }
        }

        for mut entry in previous {
            log::trace!("detached modifier node: {}", entry.element.inspector_name());
            entry.node.on_detach();
        }
    }

    /// Detaches every node and empties the chain.
    pub fn clear(&mut self) {
        for mut entry in self.entries.drain(..) {
            entry.node.on_detach();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visits every node in chain order.
    pub fn for_each_node(&mut self, mut visitor: impl FnMut(&mut dyn ModifierNode)) {
        for entry in &mut self.entries {
            visitor(entry.node.as_mut());
        }
    }

    /// Visits every node that consumes layout snapshots.
    pub fn for_each_geometry_observer(&mut self, mut visitor: impl FnMut(&mut dyn GeometryObserver)) {
        for entry in &mut self.entries {
            if let Some(observer) = entry.node.as_geometry_observer_mut() {
                visitor(observer);
            }
        }
    }
}
