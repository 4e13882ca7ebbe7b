//! Labeled tree of extracted facts
//!
//! One root node per resolved entity; one child per extracted attribute
//! value. Ownership runs strictly parent-to-children; the parent link is a
//! non-owning back-reference so no cycle ever forms. Children are kept in
//! insertion order, and two children with the same label but different
//! values stay distinct entries — there is no content-based dedup.

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// A node in the extracted-fact tree.
///
/// `name` and `code` are fixed at construction. `value` is set only for
/// attribute children; the root carries the entity code and no value.
#[derive(Debug)]
pub struct Node {
    name: String,
    code: String,
    value: Option<String>,
    parent: Weak<Node>,
    children: Mutex<Vec<Arc<Node>>>,
}

impl Node {
    /// Create a root node for a resolved entity.
    pub fn root(name: impl Into<String>, code: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            code: code.into(),
            value: None,
            parent: Weak::new(),
            children: Mutex::new(Vec::new()),
        })
    }

    /// Create a child carrying one extracted value, back-linked to `parent`.
    ///
    /// The child is not attached; callers pass it to [`Node::add_child`] on
    /// the same parent it was built against.
    pub fn child(
        parent: &Arc<Node>,
        name: impl Into<String>,
        code: impl Into<String>,
        value: impl Into<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            code: code.into(),
            value: Some(value.into()),
            parent: Arc::downgrade(parent),
            children: Mutex::new(Vec::new()),
        })
    }

    /// Attach a child. Sets only the membership on this side; the child's
    /// back-reference was fixed at construction.
    pub fn add_child(&self, child: Arc<Node>) {
        self.children.lock().unwrap_or_else(|e| e.into_inner()).push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Upgrade the back-reference. `None` for a root (or a detached child
    /// whose parent was dropped).
    pub fn parent(&self) -> Option<Arc<Node>> {
        self.parent.upgrade()
    }

    /// Snapshot of the children in insertion order.
    pub fn children(&self) -> Vec<Arc<Node>> {
        self.children
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Render the node and its direct children as a one-line summary.
    pub fn details(&self) -> String {
        let children = self.children.lock().unwrap_or_else(|e| e.into_inner());
        let entries: Vec<String> = children
            .iter()
            .map(|c| match c.value() {
                Some(v) => format!("'{}': '{}'", c.name, v),
                None => format!("'{}': None", c.name),
            })
            .collect();
        format!(
            "{} has the following properties: {{{}}}",
            self.name,
            entries.join(", ")
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_link_is_non_owning() {
        let root = Node::root("Apple", "Q312");
        let child = Node::child(&root, "industry", "P452", "tech");
        root.add_child(child.clone());

        assert_eq!(child.parent().unwrap().code(), "Q312");
        drop(root);
        // Child only held a weak reference; root is gone now.
        assert!(child.parent().is_none());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let root = Node::root("Apple", "Q312");
        for v in ["tech", "retail", "hardware"] {
            let child = Node::child(&root, "industry", "P452", v);
            root.add_child(child);
        }
        let values: Vec<String> = root
            .children()
            .iter()
            .map(|c| c.value().unwrap().to_string())
            .collect();
        assert_eq!(values, ["tech", "retail", "hardware"]);
    }

    #[test]
    fn test_details_preserves_same_label_children() {
        let root = Node::root("Apple", "Q312");
        root.add_child(Node::child(&root, "industry", "P452", "tech"));
        root.add_child(Node::child(&root, "industry", "P452", "retail"));

        let details = root.details();
        assert!(details.contains("Apple has the following properties:"));
        assert!(details.contains("'industry': 'tech'"));
        assert!(details.contains("'industry': 'retail'"));
    }

    #[test]
    fn test_display_is_the_name() {
        let root = Node::root("Seattle", "Q5083");
        assert_eq!(root.to_string(), "Seattle");
    }
}
