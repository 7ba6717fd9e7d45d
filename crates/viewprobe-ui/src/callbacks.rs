//! Callback configuration for geometry observation.
//!
//! A [`GeometryCallbacks`] holds up to three slots: an appear callback that
//! receives the first layout snapshot, and one change callback per tracked
//! channel (size, safe-area insets). Every slot is optional at the builder
//! level; unset slots resolve to no-ops so the observer node never
//! null-checks at dispatch time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Size};

/// Callback invoked with the first layout snapshot after attach.
pub type AppearCallback = Rc<dyn Fn(&LayoutSnapshot)>;

/// Arity choice for a change callback slot.
///
/// `Notify` fires with no arguments; the old/new pair is never materialized
/// for it. `WithValues` receives the exact prior and current values for the
/// layout pass, untransformed.
pub enum ChangeCallback<T> {
    /// Slot not set; dispatch does nothing.
    Ignore,
    /// Zero-argument form.
    Notify(Rc<dyn Fn()>),
    /// Two-argument old/new form.
    WithValues(Rc<dyn Fn(T, T)>),
}

impl<T: Copy> ChangeCallback<T> {
    /// Invokes the callback for a transition from `old` to `new`.
    pub fn dispatch(&self, old: T, new: T) {
        match self {
            ChangeCallback::Ignore => {}
            ChangeCallback::Notify(callback) => callback(),
            ChangeCallback::WithValues(callback) => callback(old, new),
        }
    }

    /// Returns whether the slot holds a callback.
    pub fn is_set(&self) -> bool {
        !matches!(self, ChangeCallback::Ignore)
    }

    /// Stable label for inspector tooling and assertions.
    pub fn arity_label(&self) -> &'static str {
        match self {
            ChangeCallback::Ignore => "unset",
            ChangeCallback::Notify(_) => "zero-arg",
            ChangeCallback::WithValues(_) => "two-arg",
        }
    }

    fn identity(&self) -> (u8, usize) {
        match self {
            ChangeCallback::Ignore => (0, 0),
            ChangeCallback::Notify(callback) => (1, Rc::as_ptr(callback) as *const () as usize),
            ChangeCallback::WithValues(callback) => {
                (2, Rc::as_ptr(callback) as *const () as usize)
            }
        }
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }

    pub(crate) fn hash_identity<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl<T> Clone for ChangeCallback<T> {
    fn clone(&self) -> Self {
        match self {
            ChangeCallback::Ignore => ChangeCallback::Ignore,
            ChangeCallback::Notify(callback) => ChangeCallback::Notify(callback.clone()),
            ChangeCallback::WithValues(callback) => ChangeCallback::WithValues(callback.clone()),
        }
    }
}

impl<T> Default for ChangeCallback<T> {
    fn default() -> Self {
        ChangeCallback::Ignore
    }
}

impl<T> fmt::Debug for ChangeCallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeCallback::Ignore => f.write_str("ChangeCallback::Ignore"),
            ChangeCallback::Notify(_) => f.write_str("ChangeCallback::Notify"),
            ChangeCallback::WithValues(_) => f.write_str("ChangeCallback::WithValues"),
        }
    }
}

/// The callback set bound to one geometry observer attachment.
///
/// Built once by the caller, cloned into the observer node at attach, and
/// never mutated by the node afterwards.
#[derive(Clone)]
pub struct GeometryCallbacks {
    on_appear: AppearCallback,
    appear_set: bool,
    on_size_change: ChangeCallback<Size>,
    on_insets_change: ChangeCallback<EdgeInsets>,
}

impl GeometryCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the appear callback, receiving the full first snapshot.
    pub fn on_appear(mut self, on_appear: impl Fn(&LayoutSnapshot) + 'static) -> Self {
        self.on_appear = Rc::new(on_appear);
        self.appear_set = true;
        self
    }

    /// Sets the appear callback as a projection to the measured size.
    pub fn on_appear_size(self, on_appear: impl Fn(Size) + 'static) -> Self {
        self.on_appear(move |snapshot: &LayoutSnapshot| on_appear(snapshot.size()))
    }

    /// Sets the appear callback as a projection to the safe-area insets.
    pub fn on_appear_insets(self, on_appear: impl Fn(EdgeInsets) + 'static) -> Self {
        self.on_appear(move |snapshot: &LayoutSnapshot| on_appear(snapshot.safe_area_insets()))
    }

    /// Sets the zero-argument size-change callback.
    pub fn on_size_change(mut self, on_change: impl Fn() + 'static) -> Self {
        self.on_size_change = ChangeCallback::Notify(Rc::new(on_change));
        self
    }

    /// Sets the two-argument size-change callback, receiving `(old, new)`.
    pub fn on_size_change_values(mut self, on_change: impl Fn(Size, Size) + 'static) -> Self {
        self.on_size_change = ChangeCallback::WithValues(Rc::new(on_change));
        self
    }

    /// Sets the zero-argument insets-change callback.
    pub fn on_insets_change(mut self, on_change: impl Fn() + 'static) -> Self {
        self.on_insets_change = ChangeCallback::Notify(Rc::new(on_change));
        self
    }

    /// Sets the two-argument insets-change callback, receiving `(old, new)`.
    pub fn on_insets_change_values(
        mut self,
        on_change: impl Fn(EdgeInsets, EdgeInsets) + 'static,
    ) -> Self {
        self.on_insets_change = ChangeCallback::WithValues(Rc::new(on_change));
        self
    }

    /// Invokes the appear callback with the first snapshot.
    pub fn dispatch_appear(&self, snapshot: &LayoutSnapshot) {
        (self.on_appear)(snapshot);
    }

    /// Returns whether an appear callback was explicitly supplied.
    pub fn has_on_appear(&self) -> bool {
        self.appear_set
    }

    pub fn size_change(&self) -> &ChangeCallback<Size> {
        &self.on_size_change
    }

    pub fn insets_change(&self) -> &ChangeCallback<EdgeInsets> {
        &self.on_insets_change
    }

    pub(crate) fn same_callbacks(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.on_appear, &other.on_appear)
            && self.on_size_change.ptr_eq(&other.on_size_change)
            && self.on_insets_change.ptr_eq(&other.on_insets_change)
    }

    pub(crate) fn hash_identity<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.on_appear) as *const () as usize).hash(state);
        self.on_size_change.hash_identity(state);
        self.on_insets_change.hash_identity(state);
    }
}

impl Default for GeometryCallbacks {
    fn default() -> Self {
        Self {
            on_appear: Rc::new(|_: &LayoutSnapshot| {}),
            appear_set: false,
            on_size_change: ChangeCallback::Ignore,
            on_insets_change: ChangeCallback::Ignore,
        }
    }
}

impl fmt::Debug for GeometryCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryCallbacks")
            .field("on_appear", &self.appear_set)
            .field("on_size_change", &self.on_size_change.arity_label())
            .field("on_insets_change", &self.on_insets_change.arity_label())
            .finish()
    }
}
