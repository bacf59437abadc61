//! Node tree the views render into.
//!
//! DESIGN
//! ======
//! `Document` is a cheap, clonable handle to a single-threaded tree of
//! rendered views. Each node holds the markup produced by one
//! [`View::template`] call plus its children; serializing a node splices the
//! children in before the node's closing tag. Presenters keep the `NodeId` of
//! every view they render and are responsible for removing it again; nothing
//! is reclaimed implicitly.
//!
//! Borrows of the inner tree never outlive a single method call, so any number
//! of presenters may hold the same handle.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a rendered node is placed relative to its container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPosition {
    /// Before the first child.
    AfterBegin,
    /// After the last child.
    #[default]
    BeforeEnd,
}

/// Error returned by [`Document`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node was never rendered or has already been removed.
    #[error("node {0} is not in the document")]
    NodeNotFound(NodeId),
    /// The node has no parent to be replaced or removed from.
    #[error("node {0} is detached")]
    Detached(NodeId),
    /// A component was asked to act before it rendered anything.
    #[error("component has not been rendered")]
    NotRendered,
}

/// Anything that can produce markup for a node.
pub trait View {
    /// Markup for this view. Children are inserted before the last closing tag.
    fn template(&self) -> String;
}

struct Node {
    html: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Tree {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
    root: NodeId,
}

impl Tree {
    fn alloc(&mut self, html: String, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node { html, parent, children: Vec::new() });
        id
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children);
            }
        }
    }

    fn serialize(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        if node.children.is_empty() {
            out.push_str(&node.html);
            return;
        }
        let split = node.html.rfind("</").unwrap_or(node.html.len());
        out.push_str(&node.html[..split]);
        for child in &node.children {
            self.serialize(*child, out);
        }
        out.push_str(&node.html[split..]);
    }
}

/// Shared handle to a rendered node tree.
#[derive(Clone)]
pub struct Document {
    inner: Rc<RefCell<Tree>>,
}

impl Document {
    /// Create a document whose root node is rendered from `root`.
    #[must_use]
    pub fn new(root: &impl View) -> Self {
        let mut tree = Tree { nodes: HashMap::new(), next_id: 0, root: NodeId(0) };
        tree.root = tree.alloc(root.template(), None);
        Self { inner: Rc::new(RefCell::new(tree)) }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.inner.borrow().root
    }

    /// Render `view` into `container` and return the new node.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NodeNotFound`] if `container` is not in the document.
    pub fn render(&self, view: &impl View, container: NodeId, position: RenderPosition) -> Result<NodeId, DomError> {
        let html = view.template();
        let mut tree = self.inner.borrow_mut();
        if !tree.nodes.contains_key(&container) {
            return Err(DomError::NodeNotFound(container));
        }
        let id = tree.alloc(html, Some(container));
        if let Some(parent) = tree.nodes.get_mut(&container) {
            match position {
                RenderPosition::AfterBegin => parent.children.insert(0, id),
                RenderPosition::BeforeEnd => parent.children.push(id),
            }
        }
        Ok(id)
    }

    /// Render `view` in place of `old`, which is removed together with its
    /// children. Returns the new node.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NodeNotFound`] if `old` is not in the document and
    /// [`DomError::Detached`] if it has no parent (the root).
    pub fn replace(&self, view: &impl View, old: NodeId) -> Result<NodeId, DomError> {
        let html = view.template();
        let mut tree = self.inner.borrow_mut();
        let parent = tree.nodes.get(&old).ok_or(DomError::NodeNotFound(old))?.parent.ok_or(DomError::Detached(old))?;
        let id = tree.alloc(html, Some(parent));
        if let Some(parent_node) = tree.nodes.get_mut(&parent) {
            if let Some(slot) = parent_node.children.iter_mut().find(|child| **child == old) {
                *slot = id;
            }
        }
        tree.drop_subtree(old);
        Ok(id)
    }

    /// Remove `node` and all of its children.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NodeNotFound`] if `node` is not in the document and
    /// [`DomError::Detached`] for the root.
    pub fn remove(&self, node: NodeId) -> Result<(), DomError> {
        let mut tree = self.inner.borrow_mut();
        let parent = tree.nodes.get(&node).ok_or(DomError::NodeNotFound(node))?.parent.ok_or(DomError::Detached(node))?;
        if let Some(parent_node) = tree.nodes.get_mut(&parent) {
            parent_node.children.retain(|child| *child != node);
        }
        tree.drop_subtree(node);
        Ok(())
    }

    /// Whether `node` is currently in the document.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.inner.borrow().nodes.contains_key(&node)
    }

    /// Children of `node`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NodeNotFound`] if `node` is not in the document.
    pub fn children(&self, node: NodeId) -> Result<Vec<NodeId>, DomError> {
        let tree = self.inner.borrow();
        tree.nodes.get(&node).map(|n| n.children.clone()).ok_or(DomError::NodeNotFound(node))
    }

    /// Serialized markup of `node` and its subtree.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NodeNotFound`] if `node` is not in the document.
    pub fn html(&self, node: NodeId) -> Result<String, DomError> {
        let tree = self.inner.borrow();
        if !tree.nodes.contains_key(&node) {
            return Err(DomError::NodeNotFound(node));
        }
        let mut out = String::new();
        tree.serialize(node, &mut out);
        Ok(out)
    }

    /// Serialized markup of the whole document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let tree = self.inner.borrow();
        let mut out = String::new();
        tree.serialize(tree.root, &mut out);
        out
    }

    /// Number of live nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.borrow().nodes.len()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document").field("nodes", &self.node_count()).finish()
    }
}
