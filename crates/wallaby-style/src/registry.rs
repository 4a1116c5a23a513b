//! Per-property style handlers and the registry that resolves them by name.
//!
//! [CSS Cascading Level 4 § 1.1](https://www.w3.org/TR/css-cascade-4/#value-stages)
//!
//! A handler describes, for one semantic property, how caller-facing
//! structured values map onto native style storage: the canonical native
//! slot, whether the property is simple or decomposes into constituent
//! sub-properties, and the parse/serialize pair the dispatch orchestrator
//! invokes. The registry is an explicit dependency injected into the engine,
//! never a process-wide singleton, so tests can supply their own handler
//! sets.

use std::collections::HashMap;

use thiserror::Error;
use wallaby_common::name::camel_case;

use crate::value::StyleValue;

/// Parse function: native structured value to caller-facing structured value.
/// `None` means the value could not be resolved and displays as empty.
pub type ParseFn = fn(StyleValue) -> Option<StyleValue>;

/// Serialize function: caller-facing structured value to native form,
/// or an explicit veto.
pub type SerializeFn = fn(StyleValue) -> Serialized;

/// Result of serializing a structured value for assignment.
///
/// A handler may veto assignment for a value that does not apply; the veto
/// is an explicit variant rather than an in-band sentinel, so the dispatch
/// path cannot confuse it with a real value.
#[derive(Debug, Clone, PartialEq)]
pub enum Serialized {
    /// Assign the produced native value.
    Apply(NativeValue),
    /// Leave the native style untouched.
    Skip,
}

/// A serialized native value, ready for assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// One value for the handler's canonical native slot.
    Single(String),
    /// Per-sub-property expansion: ordered `(native slot, value)` pairs,
    /// each assigned individually (shorthand properties).
    Expanded(Vec<(String, String)>),
}

/// Whether a property stores one native value or expands into several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// One semantic property, one native slot.
    Simple,
    /// A shorthand whose value spreads across several native slots.
    Composite,
}

/// Per-property descriptor consumed read-only by the dispatch orchestrator.
///
/// Invariant (enforced at registration): a [`HandlerKind::Simple`] handler
/// declares no constituent sub-properties. A composite handler declares them
/// only when reads must be re-derived by reading each constituent in order;
/// composites resolvable through the cascade may leave the list empty.
#[derive(Debug, Clone)]
pub struct StyleHandler {
    /// Canonical native (camelCase) property name for storage.
    pub property: String,
    /// Simple or composite classification.
    pub kind: HandlerKind,
    /// Ordered constituent property names (semantic, hyphenated form) used
    /// to re-derive a composite read when the native slot is empty.
    pub sub_properties: Vec<String>,
    /// Native structured value to caller-facing structured value.
    pub parse: ParseFn,
    /// Caller-facing structured value to native form.
    pub serialize: SerializeFn,
}

impl StyleHandler {
    /// A simple pass-through handler storing under `property`.
    pub fn simple(property: &str) -> Self {
        Self {
            property: property.to_string(),
            kind: HandlerKind::Simple,
            sub_properties: Vec::new(),
            parse: passthrough_parse,
            serialize: single_serialize,
        }
    }

    /// A composite handler with ordered constituents and a custom serializer.
    pub fn composite(property: &str, sub_properties: &[&str], serialize: SerializeFn) -> Self {
        Self {
            property: property.to_string(),
            kind: HandlerKind::Composite,
            sub_properties: sub_properties.iter().map(|sub| (*sub).to_string()).collect(),
            parse: passthrough_parse,
            serialize,
        }
    }
}

/// Default parse: the native structure already is the caller-facing one.
fn passthrough_parse(value: StyleValue) -> Option<StyleValue> {
    Some(value)
}

/// Default serialize for simple handlers: flatten to one native value.
fn single_serialize(value: StyleValue) -> Serialized {
    Serialized::Apply(NativeValue::Single(value.to_display_string()))
}

/// Errors raised while building a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A handler is already registered under this semantic name.
    #[error("a handler for '{0}' is already registered")]
    Duplicate(String),
    /// Simple handlers must not declare constituent sub-properties.
    #[error("simple handler '{0}' must not declare constituent sub-properties")]
    SimpleWithSubProperties(String),
}

/// Registry of style handlers, keyed by semantic (hyphenated) property name.
///
/// Consulted by the dispatch orchestrator on every set/get; properties
/// without a handler fall through to direct native assignment/read.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    handlers: HashMap<String, StyleHandler>,
}

impl StyleRegistry {
    /// An empty registry: every property falls through to the native bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under the semantic `name`.
    ///
    /// # Errors
    /// [`RegistryError::Duplicate`] if `name` is taken, or
    /// [`RegistryError::SimpleWithSubProperties`] if a simple handler
    /// declares constituents.
    pub fn try_register(&mut self, name: &str, handler: StyleHandler) -> Result<(), RegistryError> {
        if handler.kind == HandlerKind::Simple && !handler.sub_properties.is_empty() {
            return Err(RegistryError::SimpleWithSubProperties(name.to_string()));
        }
        if self.handlers.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        let _ = self.handlers.insert(name.to_string(), handler);
        Ok(())
    }

    /// The handler registered for semantic property `name`, if any.
    pub fn handler(&self, name: &str) -> Option<&StyleHandler> {
        self.handlers.get(name)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The stock handler set: box shorthands (`margin`, `padding`,
    /// `border-width`) and simple handlers for the properties the dispatch
    /// and quirk paths care about (`width`, `height`, `z-index`,
    /// `background-color`, `visibility`).
    ///
    /// # Panics
    /// Panics if the built-in set registers the same name twice (a bug in
    /// this crate, not in caller input).
    pub fn common() -> Self {
        let mut registry = Self::new();
        for name in ["width", "height", "visibility", "background-color", "z-index"] {
            registry
                .try_register(name, StyleHandler::simple(&camel_case(name)))
                .expect("built-in handler names are distinct");
        }
        registry
            .try_register(
                "margin",
                StyleHandler::composite(
                    "margin",
                    &["margin-top", "margin-right", "margin-bottom", "margin-left"],
                    margin_serialize,
                ),
            )
            .expect("built-in handler names are distinct");
        registry
            .try_register(
                "padding",
                StyleHandler::composite(
                    "padding",
                    &["padding-top", "padding-right", "padding-bottom", "padding-left"],
                    padding_serialize,
                ),
            )
            .expect("built-in handler names are distinct");
        registry
            .try_register(
                "border-width",
                StyleHandler::composite(
                    "borderWidth",
                    &[
                        "border-top-width",
                        "border-right-width",
                        "border-bottom-width",
                        "border-left-width",
                    ],
                    border_width_serialize,
                ),
            )
            .expect("built-in handler names are distinct");
        registry
    }
}

/// `margin` shorthand serializer.
fn margin_serialize(value: StyleValue) -> Serialized {
    expand_box_shorthand("margin", "", value)
}

/// `padding` shorthand serializer.
fn padding_serialize(value: StyleValue) -> Serialized {
    expand_box_shorthand("padding", "", value)
}

/// `border-width` shorthand serializer (`borderTopWidth` etc.).
fn border_width_serialize(value: StyleValue) -> Serialized {
    expand_box_shorthand("border", "Width", value)
}

/// [CSS Box Model Level 3 § 6](https://www.w3.org/TR/css-box-3/#margins)
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom... are set to the first value and the
/// left and right... are set to the second. If there are three values..."
///
/// Expand a 1..=4 edge shorthand into top/right/bottom/left native slots.
/// Anything outside that arity does not apply and vetoes the assignment.
fn expand_box_shorthand(prefix: &str, suffix: &str, value: StyleValue) -> Serialized {
    let items = match value {
        StyleValue::Sequence(items) => items,
        scalar => vec![scalar],
    };
    let edges: Vec<String> = items.iter().map(StyleValue::to_display_string).collect();
    let [top, right, bottom, left] = match edges.as_slice() {
        [all] => [all, all, all, all],
        [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        [top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
        [top, right, bottom, left] => [top, right, bottom, left],
        _ => return Serialized::Skip,
    };
    Serialized::Apply(NativeValue::Expanded(vec![
        (format!("{prefix}Top{suffix}"), top.clone()),
        (format!("{prefix}Right{suffix}"), right.clone()),
        (format!("{prefix}Bottom{suffix}"), bottom.clone()),
        (format!("{prefix}Left{suffix}"), left.clone()),
    ]))
}
