//! Modifier system for Viewprobe
//!
//! [`Modifier`] is a thin builder around modifier elements: it stores the
//! element chain the node system reconciles, together with inspector
//! metadata recorded by each factory method for tooling.

use std::fmt;
use std::rc::Rc;

mod observe;

use viewprobe_foundation::{
    modifier_element, AnyModifierElement, DynModifierElement, ModifierNodeElement,
};

/// Minimal inspector metadata storage.
#[derive(Clone, Debug, Default)]
pub struct InspectorInfo {
    properties: Vec<InspectorProperty>,
}

impl InspectorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_property<V: Into<String>>(&mut self, name: &'static str, value: V) {
        self.properties.push(InspectorProperty {
            name,
            value: value.into(),
        });
    }

    pub fn properties(&self) -> &[InspectorProperty] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn describe(&self) -> String {
        self.properties
            .iter()
            .map(|property| format!("{}={}", property.name, property.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Single inspector entry recording a property exposed by a modifier.
#[derive(Clone, Debug)]
pub struct InspectorProperty {
    pub name: &'static str,
    pub value: String,
}

/// Helper describing the metadata contributed by a modifier factory.
#[derive(Clone, Debug)]
pub(crate) struct InspectorMetadata {
    name: &'static str,
    info: InspectorInfo,
}

impl InspectorMetadata {
    fn new<F>(name: &'static str, recorder: F) -> Self
    where
        F: FnOnce(&mut InspectorInfo),
    {
        let mut info = InspectorInfo::new();
        recorder(&mut info);
        Self { name, info }
    }

    fn append_to(&self, target: &mut InspectorInfo) {
        if self.info.is_empty() {
            target.add_property(self.name, "applied");
        } else {
            for property in self.info.properties() {
                target.add_property(property.name, property.value.clone());
            }
        }
    }
}

pub(crate) fn inspector_metadata<F>(name: &'static str, recorder: F) -> InspectorMetadata
where
    F: FnOnce(&mut InspectorInfo),
{
    InspectorMetadata::new(name, recorder)
}

/// Chainable, immutable modifier value.
///
/// Modifiers compose left to right with [`Modifier::then`]; the element
/// order determines the node order in the reconciled chain.
#[derive(Clone, Default)]
pub struct Modifier {
    elements: Rc<Vec<DynModifierElement>>,
    inspector: Rc<Vec<InspectorMetadata>>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_element<E: ModifierNodeElement>(element: E) -> Self {
        Self {
            elements: Rc::new(vec![modifier_element(element)]),
            inspector: Rc::new(Vec::new()),
        }
    }

    pub(crate) fn with_inspector_metadata(mut self, metadata: InspectorMetadata) -> Self {
        Rc::make_mut(&mut self.inspector).push(metadata);
        self
    }

    /// Concatenates `other` after this modifier.
    pub fn then(mut self, other: Modifier) -> Self {
        if other.elements.is_empty() && other.inspector.is_empty() {
            return self;
        }
        Rc::make_mut(&mut self.elements).extend(other.elements.iter().cloned());
        Rc::make_mut(&mut self.inspector).extend(other.inspector.iter().cloned());
        self
    }

    pub fn elements(&self) -> &[DynModifierElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Accumulates a value by visiting modifier elements in insertion order.
    pub fn fold_in<R, F>(&self, initial: R, mut operation: F) -> R
    where
        F: FnMut(R, &dyn AnyModifierElement) -> R,
    {
        self.elements
            .iter()
            .fold(initial, |acc, element| operation(acc, element.as_ref()))
    }

    /// Returns true when any element satisfies the predicate.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&dyn AnyModifierElement) -> bool,
    {
        self.elements.iter().any(|element| predicate(element.as_ref()))
    }

    /// Collects the inspector metadata recorded by every factory method.
    pub fn inspector_info(&self) -> InspectorInfo {
        let mut info = InspectorInfo::new();
        for metadata in self.inspector.iter() {
            metadata.append_to(&mut info);
        }
        info
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("elements", &self.elements.len())
            .field("inspector", &self.inspector_info().describe())
            .finish()
    }
}
