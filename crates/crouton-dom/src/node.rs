#![forbid(unsafe_code)]

//! Retained element tree.
//!
//! A [`Document`] is an arena of element nodes addressed by [`NodeId`].
//! Nodes carry a tag name, a class list, attributes, inline styles, and
//! either plain text or a raw markup blob as content. The tree is rooted at
//! a `body` node that always exists and cannot be removed.
//!
//! Handles are plain indices: operations on a stale [`NodeId`] (one whose
//! node was removed) are no-ops for mutations and `None`/`false` for
//! queries, the same tolerance a render buffer shows for out-of-bounds
//! cells.

use slab::Slab;
use std::collections::BTreeMap;

/// Unique identifier for a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: Option<String>,
    markup: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory element tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Slab<Node>,
    body: NodeId,
    scroll_top: f64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only the `body` node.
    pub fn new() -> Self {
        let mut nodes = Slab::new();
        let body = NodeId(nodes.insert(Node {
            tag: "body".to_string(),
            ..Node::default()
        }));
        Self {
            nodes,
            body,
            scroll_top: 0.0,
        }
    }

    /// The root `body` node.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Current vertical scroll offset of the page.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Sets the vertical scroll offset of the page.
    pub fn set_scroll_top(&mut self, offset: f64) {
        self.scroll_top = offset;
    }

    /// Creates a detached element with the given tag name.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        NodeId(self.nodes.insert(Node {
            tag: tag.to_string(),
            ..Node::default()
        }))
    }

    /// Returns whether the node is still allocated.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    /// Returns whether the node is reachable from `body`.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut cur = id;
        loop {
            if cur == self.body {
                return true;
            }
            match self.nodes.get(cur.0).and_then(|n| n.parent) {
                Some(parent) => cur = parent,
                None => return false,
            }
        }
    }

    /// Number of allocated nodes, including `body`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the document holds only the `body` node.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Tag name of a node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|n| n.tag.as_str())
    }

    /// Parent of a node, if attached to one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Children of a node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_child(parent, child, InsertAt::End);
    }

    /// Prepends `child` as the first child of `parent`, detaching it from
    /// any previous parent first.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_child(parent, child, InsertAt::Start);
    }

    fn insert_child(&mut self, parent: NodeId, child: NodeId, at: InsertAt) {
        if parent == child || !self.nodes.contains(parent.0) || !self.nodes.contains(child.0) {
            return;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(parent.0) {
            match at {
                InsertAt::Start => node.children.insert(0, child),
                InsertAt::End => node.children.push(child),
            }
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.nodes.get(id.0).and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(node) = self.nodes.get_mut(parent.0) {
                node.children.retain(|c| *c != id);
            }
        }
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.parent = None;
        }
    }

    /// Removes a node and frees its whole subtree. Removing `body` or a
    /// stale id is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.body || !self.nodes.contains(id.0) {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id.0, "remove subtree");
        self.detach(id);
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.nodes.try_remove(cur.0) {
                stack.extend(node.children);
            }
        }
    }

    /// Sets the plain-text content of a node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.text = Some(text.to_string());
        }
    }

    /// Plain-text content of a node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).and_then(|n| n.text.as_deref())
    }

    /// Sets raw markup content on a node.
    ///
    /// The blob is stored verbatim and never parsed or escaped; callers are
    /// trusted the way the page trusts its own templates.
    pub fn set_markup(&mut self, id: NodeId, markup: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.markup = Some(markup.to_string());
        }
    }

    /// Raw markup content of a node.
    pub fn markup(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).and_then(|n| n.markup.as_deref())
    }

    /// Sets an attribute.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attrs.insert(name.to_string(), value.to_string());
        }
    }

    /// Reads an attribute.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(id.0).and_then(|n| n.attrs.get(name)).map(String::as_str)
    }

    /// Adds a class if not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    /// Removes a class if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Returns whether the node carries the class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes
            .get(id.0)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    /// Class list of a node, in insertion order.
    pub fn classes(&self, id: NodeId) -> &[String] {
        self.nodes.get(id.0).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    /// Sets an inline style property.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }

    /// Reads an inline style property.
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    /// Removes an inline style property.
    pub fn remove_style(&mut self, id: NodeId, property: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.styles.remove(property);
        }
    }

    /// Finds the first direct child of `parent` carrying every class in
    /// `classes`.
    pub fn find_child_with_classes(&self, parent: NodeId, classes: &[&str]) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| classes.iter().all(|c| self.has_class(child, c)))
    }
}

#[derive(Clone, Copy)]
enum InsertAt {
    Start,
    End,
}
