use std::collections::BTreeMap;

use derive_more::IsVariant;

/// Stable identifier of a node in the tree arena.
///
/// Never invalidated: the tree supports no deletion, so an id handed out once
/// stays valid for the tree's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

/// A single entry in the filesystem tree.
///
/// The parent link is a plain index back into the arena, present on
/// everything but the root. It exists purely for `..` navigation and is set
/// once at construction; nodes are never moved or reparented.
#[derive(Debug)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

/// Discriminates the two node kinds.
///
/// Directories carry their child index inline: a `BTreeMap` keyed by child
/// name, so uniqueness and lexicographic enumeration both fall out of the
/// index itself.
#[derive(Debug, IsVariant)]
pub enum NodeKind {
    File,
    Directory { children: BTreeMap<String, NodeId> },
}

impl Node {
    pub(super) fn directory(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Node {
            name: name.into(),
            parent,
            kind: NodeKind::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    pub(super) fn file(name: impl Into<String>, parent: NodeId) -> Self {
        Node {
            name: name.into(),
            parent: Some(parent),
            kind: NodeKind::File,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// The child index, or `None` for a file.
    pub(super) fn children(&self) -> Option<&BTreeMap<String, NodeId>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File => None,
        }
    }

    pub(super) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, NodeId>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File => None,
        }
    }
}
