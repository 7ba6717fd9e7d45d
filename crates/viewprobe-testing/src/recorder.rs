//! Event recorder with callback factories and assertion helpers.

use std::cell::RefCell;
use std::rc::Rc;

use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Size};
use viewprobe_ui::GeometryCallbacks;

/// One observable callback invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryEvent {
    Appeared { size: Size, insets: EdgeInsets },
    SizeChanged { old: Size, new: Size },
    SizeChangeNotified,
    InsetsChanged { old: EdgeInsets, new: EdgeInsets },
    InsetsChangeNotified,
}

/// Shared event log the factory-produced callbacks append to.
///
/// Clones share the same log, so a recorder can be handed to several
/// callbacks (or several observers) and asserted on once.
#[derive(Clone, Default)]
pub struct GeometryRecorder {
    events: Rc<RefCell<Vec<GeometryEvent>>>,
}

impl GeometryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GeometryEvent> {
        self.events.borrow().clone()
    }

    pub fn take_events(&self) -> Vec<GeometryEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Appear callback recording [`GeometryEvent::Appeared`].
    pub fn record_appear(&self) -> impl Fn(&LayoutSnapshot) + 'static {
        let events = self.events.clone();
        move |snapshot| {
            events.borrow_mut().push(GeometryEvent::Appeared {
                size: snapshot.size(),
                insets: snapshot.safe_area_insets(),
            })
        }
    }

    /// Zero-argument size-change callback recording [`GeometryEvent::SizeChangeNotified`].
    pub fn record_size_change(&self) -> impl Fn() + 'static {
        let events = self.events.clone();
        move || events.borrow_mut().push(GeometryEvent::SizeChangeNotified)
    }

    /// Two-argument size-change callback recording [`GeometryEvent::SizeChanged`].
    pub fn record_size_change_values(&self) -> impl Fn(Size, Size) + 'static {
        let events = self.events.clone();
        move |old, new| {
            events
                .borrow_mut()
                .push(GeometryEvent::SizeChanged { old, new })
        }
    }

    /// Zero-argument insets-change callback recording [`GeometryEvent::InsetsChangeNotified`].
    pub fn record_insets_change(&self) -> impl Fn() + 'static {
        let events = self.events.clone();
        move || events.borrow_mut().push(GeometryEvent::InsetsChangeNotified)
    }

    /// Two-argument insets-change callback recording [`GeometryEvent::InsetsChanged`].
    pub fn record_insets_change_values(&self) -> impl Fn(EdgeInsets, EdgeInsets) + 'static {
        let events = self.events.clone();
        move |old, new| {
            events
                .borrow_mut()
                .push(GeometryEvent::InsetsChanged { old, new })
        }
    }

    /// Callback set with every slot recording, using the two-argument forms.
    pub fn all_callbacks(&self) -> GeometryCallbacks {
        GeometryCallbacks::new()
            .on_appear(self.record_appear())
            .on_size_change_values(self.record_size_change_values())
            .on_insets_change_values(self.record_insets_change_values())
    }

    /// Asserts the recorded event sequence matches `expected` exactly.
    pub fn assert_events(&self, expected: &[GeometryEvent]) {
        let actual = self.events();
        assert_eq!(
            actual.as_slice(),
            expected,
            "recorded geometry events diverge"
        );
    }
}
