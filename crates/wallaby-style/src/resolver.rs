//! Computed style resolution.
//!
//! [CSS Cascading Level 4 § 4.5](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! "The computed value is the result of resolving the specified value as
//! defined in the 'Computed value' line of the property definition table."
//!
//! Legacy engines expose the resolved style directly on the element as a
//! live snapshot; everywhere else the query goes through the document's
//! window-level view.

use wallaby_common::name::{camel_case, hyphenate};
use wallaby_dom::{Document, NodeId};

use crate::engine::StyleEngine;

impl StyleEngine {
    /// The effective (cascade-resolved) value of `property` on an element.
    ///
    /// The element's current-style snapshot, when present, is indexed by the
    /// camelCase property name. Otherwise the document's view is queried
    /// with the hyphenated name, substituting `float` for the engine's
    /// float alias first. `None` when the element has neither a snapshot
    /// nor a view, or when the value is unknown.
    pub fn get_computed_style(&self, doc: &Document, id: NodeId, property: &str) -> Option<String> {
        let element = doc.tree.as_element(id)?;
        if let Some(current) = &element.current_style {
            return current.values.get(&camel_case(property)).cloned();
        }
        let view = doc.default_view()?;
        let name = if property == self.profile().float_alias.to_string() {
            "float".to_string()
        } else {
            hyphenate(property)
        };
        view.computed_value(id, &name)
    }
}
