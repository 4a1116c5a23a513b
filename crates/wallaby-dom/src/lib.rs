//! DOM tree and element style storage for the Wallaby style layer.
//!
//! This crate provides an arena-based DOM tree following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/), extended with the
//! per-element style storage the style layer operates on:
//!
//! - the **inline style bag** ([CSSOM § 6.4](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)),
//!   the element's own direct declarations, read and written by the layer;
//! - an optional **current style snapshot**, the live cascade-resolved view
//!   legacy engines expose directly on the element;
//! - an optional window-level [`DefaultView`] on the [`Document`], the
//!   standard cascade-resolved query
//!   ([CSSOM § 8](https://drafts.csswg.org/cssom/#extensions-to-the-window-interface)).
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow
//! checker issues.

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the DOM tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
///
/// NodeId provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
///
/// This node stores indices for parent/child/sibling relationships,
/// enabling O(1) traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-next-sibling)
    /// "An object A's next sibling is the object immediately following A
    /// in the children of A's parent."
    pub next_sibling: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-previous-sibling)
    /// "An object A's previous sibling is the object immediately preceding A
    /// in the children of A's parent."
    pub prev_sibling: Option<NodeId>,
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// The element's own direct/inline style declarations.
///
/// [CSSOM § 6.4](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
///
/// "The CSSStyleDeclaration interface represents a CSS declaration block."
///
/// Keys use the camelCase IDL attribute form (`borderLeftWidth`), matching
/// the native `element.style` property bag this type stands in for. Callers
/// are responsible for the conversion; this bag stores what it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: HashMap<String, String>,
}

impl InlineStyle {
    /// Create an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// The declared value for `property`, if any.
    pub fn value(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    /// Declare `property: value`, replacing any previous declaration.
    pub fn set_value(&mut self, property: &str, value: impl Into<String>) {
        let _ = self
            .declarations
            .insert(property.to_string(), value.into());
    }

    /// Remove the declaration for `property`, returning its previous value.
    pub fn remove_value(&mut self, property: &str) -> Option<String> {
        self.declarations.remove(property)
    }

    /// Number of declarations in the block.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the block holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Live cascade-resolved style snapshot exposed directly on the element by
/// legacy engines (the `currentStyle` object).
///
/// Keys use the camelCase IDL attribute form. Engines exposing this snapshot
/// also track whether the element "has layout", which gates their filter
/// effects; the opacity emulation forces layout before applying a filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentStyle {
    /// Resolved property values, keyed by camelCase name.
    pub values: HashMap<String, String>,
    /// Whether the element currently has layout.
    pub has_layout: bool,
}

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element):
/// - "Elements have an associated namespace, namespace prefix, local name..."
/// - "When an element is created, its local name is always given."
///
/// Beyond the local name and attribute list, this carries the style storage
/// the style layer translates to and from: the inline declaration bag, the
/// optional legacy current-style snapshot, and the measured offset
/// dimensions that the box-model quirk correction reads.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
    /// The element's inline style declarations (`element.style`).
    pub style: InlineStyle,
    /// Legacy cascade-resolved snapshot (`element.currentStyle`), if the
    /// host engine exposes one.
    pub current_style: Option<CurrentStyle>,
    /// [CSSOM View § 10](https://drafts.csswg.org/cssom-view/#dom-htmlelement-offsetwidth)
    /// "...the border edge width of the box", in px. Written by layout.
    pub offset_width: f64,
    /// [CSSOM View § 10](https://drafts.csswg.org/cssom-view/#dom-htmlelement-offsetheight)
    /// "...the border edge height of the box", in px. Written by layout.
    pub offset_height: f64,
}

impl ElementData {
    /// Create element data for `tag_name` with empty attributes and style.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
            style: InlineStyle::new(),
            current_style: None,
            offset_width: 0.0,
            offset_height: 0.0,
        }
    }
}

/// Arena-based DOM tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree."
///
/// All nodes live in a contiguous vector, using indices for all
/// relationships. This provides O(1) access by [`NodeId`], O(1)
/// parent/sibling traversal, and no borrowing issues.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by NodeId.
    /// The Document node is always at index 0 (NodeId::ROOT).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    pub fn new() -> Self {
        let document = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        DomTree {
            nodes: vec![document],
        }
    }

    /// Get the root document node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    ///
    /// Appends `child` as the last child of `parent`, updating all relationships.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        // Get the current last child of parent (if any) to set up sibling links
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the next sibling of a node.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Get element data if this node is an element.
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Window-level cascade-resolved style query.
///
/// [CSSOM § 8](https://drafts.csswg.org/cssom/#extensions-to-the-window-interface)
///
/// "The getComputedStyle(elt, pseudoElt) method must... return a live CSS
/// declaration block with the resolved values."
///
/// The cascade itself is owned by the host environment; the style layer only
/// consumes this read-only view. Property names are the hyphenated CSS form.
pub trait DefaultView {
    /// The cascade-resolved value of `property` on `element`, if known.
    fn computed_value(&self, element: NodeId, property: &str) -> Option<String>;
}

/// A document: the DOM tree plus the optional window-level view used for
/// cascade-resolved style queries.
///
/// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
#[derive(Default)]
pub struct Document {
    /// The document's node tree.
    pub tree: DomTree,
    view: Option<Box<dyn DefaultView>>,
}

impl Document {
    /// Create a document with no default view (detached documents have none).
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
            view: None,
        }
    }

    /// Create a document with a window-level view for resolved-style queries.
    pub fn with_view(view: Box<dyn DefaultView>) -> Self {
        Self {
            tree: DomTree::new(),
            view: Some(view),
        }
    }

    /// The document's window-level view, if it has one.
    pub fn default_view(&self) -> Option<&dyn DefaultView> {
        self.view.as_deref()
    }
}
