//! Geometry observation modifiers for Viewprobe
//!
//! This crate is the public surface of Viewprobe: a [`Modifier`] builder for
//! attaching geometry observers to a view, the [`GeometryCallbacks`]
//! configuration those observers carry, and the [`ModifierChainHandle`] a
//! host framework drives once per layout pass.
//!
//! A caller picks only the callbacks relevant to its use case; unset slots
//! default to no-ops. Change callbacks come in a zero-argument form and a
//! two-argument old/new form, chosen per slot:
//!
//! ```rust
//! use viewprobe_ui::{GeometryCallbacks, Modifier};
//!
//! let modifier = Modifier::empty().observe_geometry(
//!     GeometryCallbacks::new()
//!         .on_appear(|snapshot| println!("first layout: {:?}", snapshot.size()))
//!         .on_size_change_values(|old, new| println!("resized {old:?} -> {new:?}")),
//! );
//! # assert_eq!(modifier.elements().len(), 1);
//! ```

mod callbacks;
mod chain;
mod modifier;
mod modifier_nodes;

#[cfg(test)]
mod tests;

pub use callbacks::{AppearCallback, ChangeCallback, GeometryCallbacks};
pub use chain::ModifierChainHandle;
pub use modifier::{InspectorInfo, InspectorProperty, Modifier};
pub use modifier_nodes::{GeometryObserverNode, ObserveGeometryElement};
pub use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Point, Rect, Size};
