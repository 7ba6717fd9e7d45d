//! Modifier node scaffolding for Viewprobe
//!
//! This crate defines the seam between a host UI framework and Viewprobe's
//! geometry observers: the node lifecycle trait, the context through which a
//! node asks the host's measurement source for snapshots, the strongly typed
//! modifier elements that create and update nodes, and a chain container that
//! reconciles nodes across modifier updates.

mod element;
mod node;
mod node_chain;

pub use element::{modifier_element, AnyModifierElement, DynModifierElement, ModifierNodeElement};
pub use node::{
    BasicModifierNodeContext, GeometryObserver, ModifierNode, ModifierNodeContext,
};
pub use node_chain::ModifierNodeChain;
