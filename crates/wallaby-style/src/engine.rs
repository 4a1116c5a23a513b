//! Style dispatch orchestration.
//!
//! [CSSOM § 6.4](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
//!
//! The engine is the single entry point for reading and writing an element's
//! style by semantic property name. A write resolves aliases, routes the
//! value through the registry handler's serializer, and lands in the native
//! inline bag; a read walks the same path in reverse, falling back to the
//! cascade-resolved view and finishing with flattening and quirk
//! correction. Properties without a handler fall through to best-effort
//! direct assignment/read.

use std::collections::HashMap;

use wallaby_common::name::camel_case;
use wallaby_common::warning::warn_once;
use wallaby_dom::{Document, ElementData, NodeId, NodeType};

use crate::profile::EngineProfile;
use crate::registry::{HandlerKind, NativeValue, Serialized, StyleRegistry};
use crate::value::{StyleValue, parse_leading_float, translate};

/// A caller-supplied style value, before translation.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput {
    /// Raw style text, run through the value translator before the handler.
    Text(String),
    /// A bare number (opacity, z-index, unitless line-height).
    Number(f64),
    /// An already-structured value, passed to the handler as-is.
    Value(StyleValue),
}

impl From<&str> for StyleInput {
    fn from(text: &str) -> Self {
        StyleInput::Text(text.to_string())
    }
}

impl From<String> for StyleInput {
    fn from(text: String) -> Self {
        StyleInput::Text(text)
    }
}

impl From<f64> for StyleInput {
    fn from(number: f64) -> Self {
        StyleInput::Number(number)
    }
}

impl From<i32> for StyleInput {
    fn from(number: i32) -> Self {
        StyleInput::Number(f64::from(number))
    }
}

impl From<StyleValue> for StyleInput {
    fn from(value: StyleValue) -> Self {
        StyleInput::Value(value)
    }
}

/// The set/get style dispatch orchestrator.
///
/// Holds the engine capability profile and the handler registry, both
/// injected at construction so tests can supply their own. All operations
/// are synchronous and element-scoped; the engine itself carries no mutable
/// state.
#[derive(Debug)]
pub struct StyleEngine {
    profile: EngineProfile,
    registry: StyleRegistry,
}

impl StyleEngine {
    /// An engine with an explicit profile and handler registry.
    pub fn new(profile: EngineProfile, registry: StyleRegistry) -> Self {
        Self { profile, registry }
    }

    /// A standards-profile engine with the stock handler set.
    pub fn standard() -> Self {
        Self::new(EngineProfile::standard(), StyleRegistry::common())
    }

    /// The engine capability profile.
    pub fn profile(&self) -> &EngineProfile {
        &self.profile
    }

    /// The injected handler registry.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Rewrite `float` to the engine's native alias; other names pass through.
    fn resolve_alias(&self, property: &str) -> String {
        if property == "float" {
            self.profile.float_alias.to_string()
        } else {
            property.to_string()
        }
    }

    /// Set one semantic style property on an element.
    ///
    /// `opacity` coerces to a number and routes to [`Self::set_opacity`];
    /// `float` rewrites to the engine alias. With a registered handler the
    /// value is translated, serialized, and stored under the handler's
    /// canonical slot (or expanded across sub-slots); a handler may veto the
    /// write entirely. Unmanaged properties are assigned raw.
    pub fn set_style(
        &self,
        doc: &mut Document,
        id: NodeId,
        property: &str,
        value: impl Into<StyleInput>,
    ) {
        let value = value.into();
        if property == "opacity" {
            let numeric = match &value {
                StyleInput::Number(number) => Some(*number),
                StyleInput::Text(text) => parse_leading_float(text),
                StyleInput::Value(StyleValue::Number(number)) => Some(*number),
                StyleInput::Value(other) => parse_leading_float(&other.to_display_string()),
            };
            match numeric {
                Some(opacity) => self.set_opacity(doc, id, opacity),
                None => warn_once("Style", "opacity value is not numeric, ignoring"),
            }
            return;
        }
        let property = self.resolve_alias(property);

        let Some(handler) = self.registry.handler(&property) else {
            // Best-effort raw assignment for unmanaged properties.
            let raw = match value {
                StyleInput::Text(text) => text,
                StyleInput::Number(number) => number.to_string(),
                StyleInput::Value(structured) => structured.to_display_string(),
            };
            let Some(element) = doc.tree.as_element_mut(id) else {
                return;
            };
            element.style.set_value(&camel_case(&property), raw);
            return;
        };

        let structured = match value {
            StyleInput::Text(text) => translate(&text),
            StyleInput::Number(number) => StyleValue::Number(number),
            StyleInput::Value(structured) => structured,
        };
        match (handler.serialize)(structured) {
            Serialized::Skip => {}
            Serialized::Apply(native) => {
                match (&native, handler.kind) {
                    (NativeValue::Single(_), HandlerKind::Composite)
                    | (NativeValue::Expanded(_), HandlerKind::Simple) => warn_once(
                        "Style",
                        &format!("handler for '{property}' serialized a value inconsistent with its kind"),
                    ),
                    _ => {}
                }
                let canonical = handler.property.clone();
                let Some(element) = doc.tree.as_element_mut(id) else {
                    return;
                };
                match native {
                    NativeValue::Single(serialized) => {
                        element.style.set_value(&canonical, serialized);
                    }
                    NativeValue::Expanded(entries) => {
                        for (slot, serialized) in entries {
                            element.style.set_value(&slot, serialized);
                        }
                    }
                }
            }
        }
    }

    /// Read one semantic style property as a display string.
    ///
    /// `opacity` routes to [`Self::get_opacity`]; `float` rewrites to the
    /// engine alias. With a handler, an empty native slot (and `zIndex`
    /// always) re-derives through the handler's constituent sub-properties
    /// or the computed-style resolver; the result is translated, parsed by
    /// the handler, flattened, and finally quirk-corrected. An unresolvable
    /// value reads as the empty string.
    pub fn get_style(&self, doc: &Document, id: NodeId, property: &str) -> String {
        if property == "opacity" {
            return self.get_opacity(doc, id).to_string();
        }
        let property = self.resolve_alias(property);

        let (native, display) = if let Some(handler) = self.registry.handler(&property) {
            let native = handler.property.clone();
            let inline = doc
                .tree
                .as_element(id)
                .and_then(|element| element.style.value(&native).map(str::to_string));
            // An inline z-index can legitimately read as zero but must still
            // resolve through the cascade, so that slot always re-derives.
            let rederive = native == "zIndex" || inline.as_deref().is_none_or(str::is_empty);
            let structured = if rederive {
                if handler.sub_properties.is_empty() {
                    self.get_computed_style(doc, id, &native)
                        .map(|resolved| translate(&resolved))
                } else {
                    Some(StyleValue::Sequence(
                        handler
                            .sub_properties
                            .iter()
                            .map(|sub| StyleValue::Text(self.get_style(doc, id, sub)))
                            .collect(),
                    ))
                }
            } else {
                inline.map(|raw| translate(&raw))
            };
            let display = structured
                .and_then(|value| (handler.parse)(value))
                .map(|value| value.to_display_string())
                .unwrap_or_default();
            (native, display)
        } else {
            // Best-effort read: inline first, then the resolved view.
            let native = camel_case(&property);
            let inline = doc
                .tree
                .as_element(id)
                .and_then(|element| element.style.value(&native).map(str::to_string));
            let display = match inline {
                Some(raw) if !raw.is_empty() => raw,
                _ => self.get_computed_style(doc, id, &native).unwrap_or_default(),
            };
            (native, display)
        };

        match self.profile.box_quirk.correct(self, doc, id, &native, &display) {
            Some(corrected) => corrected,
            None => display,
        }
    }

    /// Apply several style properties in order; later entries may overwrite
    /// earlier ones targeting the same native slot.
    pub fn set_styles<'a, I>(&self, doc: &mut Document, id: NodeId, styles: I)
    where
        I: IntoIterator<Item = (&'a str, StyleInput)>,
    {
        for (property, value) in styles {
            self.set_style(doc, id, property, value);
        }
    }

    /// Read several style properties; the result maps each requested name
    /// (exactly those) to its [`Self::get_style`] value.
    pub fn get_styles(&self, doc: &Document, id: NodeId, properties: &[&str]) -> HashMap<String, String> {
        let mut result = HashMap::new();
        for property in properties {
            let _ = result.insert((*property).to_string(), self.get_style(doc, id, property));
        }
        result
    }

    /// Allocate an element under `parent` with declarative initial styles,
    /// forwarded to [`Self::set_styles`].
    pub fn create_element<'a, I>(
        &self,
        doc: &mut Document,
        parent: NodeId,
        tag: &str,
        styles: I,
    ) -> NodeId
    where
        I: IntoIterator<Item = (&'a str, StyleInput)>,
    {
        let id = doc.tree.alloc(NodeType::Element(ElementData::new(tag)));
        doc.tree.append_child(parent, id);
        self.set_styles(doc, id, styles);
        id
    }
}
