//! Integration tests for computed style resolution.

use std::collections::HashMap;

use wallaby_dom::{CurrentStyle, DefaultView, Document, ElementData, NodeId, NodeType};
use wallaby_style::{EngineProfile, StyleEngine, StyleRegistry};

/// A stand-in window view resolving every element from one fixed map,
/// keyed by hyphenated property name.
struct FixedView {
    values: HashMap<String, String>,
}

impl FixedView {
    fn with(pairs: &[(&str, &str)]) -> Box<Self> {
        let mut values = HashMap::new();
        for (property, value) in pairs {
            let _ = values.insert((*property).to_string(), (*value).to_string());
        }
        Box::new(Self { values })
    }
}

impl DefaultView for FixedView {
    fn computed_value(&self, _element: NodeId, property: &str) -> Option<String> {
        self.values.get(property).cloned()
    }
}

fn element_in(doc: &mut Document) -> NodeId {
    let id = doc.tree.alloc(NodeType::Element(ElementData::new("div")));
    doc.tree.append_child(NodeId::ROOT, id);
    id
}

// ========== resolution sources ==========

#[test]
fn test_snapshot_takes_priority_over_the_view() {
    let engine = StyleEngine::standard();
    let mut doc = Document::with_view(FixedView::with(&[("background-color", "red")]));
    let id = element_in(&mut doc);
    let mut values = HashMap::new();
    let _ = values.insert("backgroundColor".to_string(), "rgb(1, 2, 3)".to_string());
    doc.tree.as_element_mut(id).unwrap().current_style = Some(CurrentStyle {
        values,
        has_layout: false,
    });
    assert_eq!(
        engine.get_computed_style(&doc, id, "background-color"),
        Some("rgb(1, 2, 3)".to_string())
    );
}

#[test]
fn test_view_is_queried_with_the_hyphenated_name() {
    let engine = StyleEngine::standard();
    let mut doc = Document::with_view(FixedView::with(&[("background-color", "red")]));
    let id = element_in(&mut doc);
    assert_eq!(
        engine.get_computed_style(&doc, id, "backgroundColor"),
        Some("red".to_string())
    );
}

#[test]
fn test_detached_document_resolves_nothing() {
    let engine = StyleEngine::standard();
    let mut doc = Document::new();
    let id = element_in(&mut doc);
    assert_eq!(engine.get_computed_style(&doc, id, "width"), None);
}

// ========== float aliasing ==========

#[test]
fn test_float_alias_is_rewritten_for_the_view() {
    let mut doc = Document::with_view(FixedView::with(&[("float", "left")]));
    let id = element_in(&mut doc);

    let standard = StyleEngine::standard();
    assert_eq!(
        standard.get_computed_style(&doc, id, "cssFloat"),
        Some("left".to_string())
    );

    let legacy = StyleEngine::new(EngineProfile::legacy_explorer(), StyleRegistry::common());
    assert_eq!(
        legacy.get_computed_style(&doc, id, "styleFloat"),
        Some("left".to_string())
    );
}

#[test]
fn test_foreign_float_alias_is_not_rewritten() {
    let engine = StyleEngine::standard();
    let mut doc = Document::with_view(FixedView::with(&[("float", "left")]));
    let id = element_in(&mut doc);
    // styleFloat is not this engine's alias, so it resolves as style-float.
    assert_eq!(engine.get_computed_style(&doc, id, "styleFloat"), None);
}
