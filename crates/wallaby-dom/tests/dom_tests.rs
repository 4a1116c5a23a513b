//! Tests for DOM tree construction and element style storage.

use wallaby_dom::{CurrentStyle, DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

// ========== tree construction ==========

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.root(), NodeId::ROOT);
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
}

#[test]
fn test_append_child_sets_relationships() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "span");
    let b = alloc_element(&mut tree, "span");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(b), None);
}

#[test]
fn test_as_element_filters_non_elements() {
    let mut tree = DomTree::new();
    let text = tree.alloc(NodeType::Text("hello".to_string()));
    let div = alloc_element(&mut tree, "div");

    assert!(tree.as_element(text).is_none());
    assert_eq!(tree.as_element(div).map(|e| e.tag_name.as_str()), Some("div"));
    assert!(tree.as_element(NodeId::ROOT).is_none());
}

// ========== inline style storage ==========

#[test]
fn test_inline_style_set_and_get() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");

    let element = tree.as_element_mut(div).unwrap();
    assert!(element.style.is_empty());

    element.style.set_value("backgroundColor", "red");
    element.style.set_value("backgroundColor", "blue");
    element.style.set_value("zIndex", "3");

    assert_eq!(element.style.len(), 2);
    assert_eq!(element.style.value("backgroundColor"), Some("blue"));
    assert_eq!(element.style.value("zIndex"), Some("3"));
    assert_eq!(element.style.value("color"), None);
}

#[test]
fn test_inline_style_remove() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");

    let element = tree.as_element_mut(div).unwrap();
    element.style.set_value("filter", "blur(5px)");
    assert_eq!(element.style.remove_value("filter"), Some("blur(5px)".to_string()));
    assert_eq!(element.style.remove_value("filter"), None);
    assert!(element.style.is_empty());
}

// ========== current style snapshot ==========

#[test]
fn test_current_style_snapshot() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");

    let element = tree.as_element_mut(div).unwrap();
    assert!(element.current_style.is_none());

    let mut snapshot = CurrentStyle::default();
    let _ = snapshot.values.insert("color".to_string(), "rgb(0, 0, 0)".to_string());
    snapshot.has_layout = true;
    element.current_style = Some(snapshot);

    let element = tree.as_element(div).unwrap();
    let current = element.current_style.as_ref().unwrap();
    assert!(current.has_layout);
    assert_eq!(current.values.get("color").map(String::as_str), Some("rgb(0, 0, 0)"));
}

// ========== offset dimensions ==========

#[test]
fn test_offset_dimensions_default_zero() {
    let data = ElementData::new("div");
    assert_eq!(data.offset_width, 0.0);
    assert_eq!(data.offset_height, 0.0);
}
