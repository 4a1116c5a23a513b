//! Integration tests for box-model quirk correction.

use wallaby_dom::{Document, ElementData, NodeId, NodeType};
use wallaby_style::{EngineProfile, StyleEngine, StyleRegistry};

fn doc_with_element() -> (Document, NodeId) {
    let mut doc = Document::new();
    let id = doc.tree.alloc(NodeType::Element(ElementData::new("div")));
    doc.tree.append_child(NodeId::ROOT, id);
    (doc, id)
}

fn legacy_engine() -> StyleEngine {
    StyleEngine::new(EngineProfile::legacy_explorer(), StyleRegistry::common())
}

fn presto_engine() -> StyleEngine {
    StyleEngine::new(EngineProfile::presto(), StyleRegistry::common())
}

// ========== standards profile ==========

#[test]
fn test_standard_profile_reads_pass_through() {
    let engine = StyleEngine::standard();
    let (mut doc, id) = doc_with_element();
    doc.tree.as_element_mut(id).unwrap().offset_width = 100.0;
    assert_eq!(engine.get_style(&doc, id, "width"), "");
    engine.set_style(&mut doc, id, "margin-top", "auto");
    assert_eq!(engine.get_style(&doc, id, "margin-top"), "auto");
}

// ========== dimension recomputation ==========

#[test]
fn test_unresolvable_width_is_recomputed_from_the_offset_box() {
    let engine = legacy_engine();
    let (mut doc, id) = doc_with_element();
    doc.tree.as_element_mut(id).unwrap().offset_width = 100.0;
    engine.set_style(&mut doc, id, "border-left-width", "2px");
    engine.set_style(&mut doc, id, "border-right-width", "3px");
    engine.set_style(&mut doc, id, "padding-left", "5px");
    // 100 - (2 + 5) - (3 + 0): the unset right padding reads as 0px.
    assert_eq!(engine.get_style(&doc, id, "width"), "90px");
}

#[test]
fn test_unresolvable_height_is_recomputed_from_the_offset_box() {
    let engine = legacy_engine();
    let (mut doc, id) = doc_with_element();
    doc.tree.as_element_mut(id).unwrap().offset_height = 80.0;
    engine.set_style(&mut doc, id, "padding-top", "10px");
    assert_eq!(engine.get_style(&doc, id, "height"), "70px");
}

#[test]
fn test_numeric_width_stands_on_the_non_numeric_quirk() {
    let engine = legacy_engine();
    let (mut doc, id) = doc_with_element();
    doc.tree.as_element_mut(id).unwrap().offset_width = 100.0;
    engine.set_style(&mut doc, id, "width", "42px");
    assert_eq!(engine.get_style(&doc, id, "width"), "42px");
}

#[test]
fn test_used_value_reporting_always_recomputes_dimensions() {
    let engine = presto_engine();
    let (mut doc, id) = doc_with_element();
    doc.tree.as_element_mut(id).unwrap().offset_width = 50.0;
    engine.set_style(&mut doc, id, "width", "42px");
    assert_eq!(engine.get_style(&doc, id, "width"), "50px");
}

// ========== box-edge fallbacks ==========

#[test]
fn test_unset_border_width_reads_as_zero_pixels() {
    let engine = legacy_engine();
    let (doc, id) = doc_with_element();
    assert_eq!(engine.get_style(&doc, id, "border-top-width"), "0px");
}

#[test]
fn test_keyword_margin_reads_as_zero_pixels() {
    let engine = legacy_engine();
    let (mut doc, id) = doc_with_element();
    engine.set_style(&mut doc, id, "margin-top", "auto");
    assert_eq!(engine.get_style(&doc, id, "margin-top"), "0px");
}

#[test]
fn test_pixel_box_edges_stand_on_the_used_value_quirk() {
    let engine = presto_engine();
    let (mut doc, id) = doc_with_element();
    engine.set_style(&mut doc, id, "margin-top", "7px");
    assert_eq!(engine.get_style(&doc, id, "margin-top"), "7px");
}

#[test]
fn test_non_pixel_box_edges_fall_to_zero_on_the_used_value_quirk() {
    let engine = presto_engine();
    let (mut doc, id) = doc_with_element();
    engine.set_style(&mut doc, id, "margin-top", "medium");
    assert_eq!(engine.get_style(&doc, id, "margin-top"), "0px");
}

#[test]
fn test_non_box_properties_are_never_pinned() {
    let engine = legacy_engine();
    let (mut doc, id) = doc_with_element();
    engine.set_style(&mut doc, id, "visibility", "hidden");
    assert_eq!(engine.get_style(&doc, id, "visibility"), "hidden");
}
