use viewprobe_foundation::{BasicModifierNodeContext, ModifierNodeChain};
use viewprobe_geometry::LayoutSnapshot;

use crate::modifier::Modifier;

/// Runtime helper that keeps a [`ModifierNodeChain`] in sync with a [`Modifier`].
///
/// A host framework keeps one handle per layout node, feeds it the latest
/// `Modifier` on every recomposition, and forwards each layout pass's
/// snapshot through [`dispatch_layout_pass`](Self::dispatch_layout_pass).
#[derive(Default)]
pub struct ModifierChainHandle {
    chain: ModifierNodeChain,
    context: BasicModifierNodeContext,
}

impl ModifierChainHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles the underlying chain with the elements stored in `modifier`.
    pub fn update(&mut self, modifier: &Modifier) {
        self.chain
            .update_from_slice(modifier.elements(), &mut self.context);
    }

    /// Returns the modifier node chain for read-only traversal.
    pub fn chain(&self) -> &ModifierNodeChain {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut ModifierNodeChain {
        &mut self.chain
    }

    /// Whether any attached node asked the measurement source for snapshots.
    pub fn geometry_updates_requested(&self) -> bool {
        self.context.geometry_updates_requested()
    }

    /// Delivers one layout pass's snapshot to every geometry observer.
    pub fn dispatch_layout_pass(&mut self, snapshot: &LayoutSnapshot) {
        log::trace!(
            "layout pass: size={:?} insets={:?}",
            snapshot.size(),
            snapshot.safe_area_insets()
        );
        self.chain
            .for_each_geometry_observer(|observer| observer.on_layout_pass(snapshot));
    }
}
