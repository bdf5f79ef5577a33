use snafu::prelude::*;
use tracing::debug;

use super::error::{AlreadyExistsSnafu, FilesystemError, InvalidPathSnafu, NotADirectorySnafu, NotFoundSnafu};
use super::node::{Node, NodeId, NodeKind};
use super::path::{self, CURRENT_SEGMENT, NormalizedPath, PARENT_SEGMENT, SEPARATOR};

/// The root's id; the root is always the first node in the arena.
const ROOT: NodeId = NodeId(0);

/// Arena-owned filesystem tree plus the path-walking engine.
///
/// All nodes live in one flat arena indexed by `NodeId`. A directory owns its
/// children through the child index; the parent link is a plain index back
/// into the arena, so no node is ever owned through two references.
#[derive(Debug)]
pub struct FileTree {
    nodes: Vec<Node>,
}

/// Where a creation operation will insert, and the name it will insert under.
///
/// Whether the leaf already exists is deliberately left unchecked here; the
/// caller decides create-vs-collide atomically at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParent {
    pub parent: NodeId,
    pub leaf_name: String,
}

impl FileTree {
    pub fn new() -> Self {
        FileTree {
            nodes: vec![Node::directory(SEPARATOR.to_string(), None)],
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Resolves a path to the node it names.
    ///
    /// Starts at the root for absolute paths, at `cwd` otherwise. Zero
    /// segments resolve to the start node itself, which is how `/`, `.` and
    /// `./.` resolve. `..` at the root stays at the root.
    pub fn resolve(&self, raw: &str, cwd: NodeId) -> Result<NodeId, FilesystemError> {
        let normalized = NormalizedPath::parse(raw)?;
        let mut current = if normalized.is_absolute { ROOT } else { cwd };
        let mut resolved = current;

        let last = normalized.segments.len().saturating_sub(1);
        for (index, segment) in normalized.segments.iter().enumerate() {
            if segment.as_str() == PARENT_SEGMENT {
                current = self.node(current).parent().unwrap_or(current);
                resolved = current;
                continue;
            }

            let child = self.lookup_child(current, segment)?;
            resolved = child;

            if index < last {
                // Traversal continues through this segment.
                ensure!(
                    self.node(child).is_directory(),
                    NotADirectorySnafu {
                        name: segment.as_str(),
                    }
                );
                current = child;
            } else if normalized.has_trailing_separator {
                // `a/b/` promises that `b` is a directory.
                ensure!(
                    self.node(child).is_directory(),
                    NotADirectorySnafu {
                        name: segment.as_str(),
                    }
                );
            }
        }

        Ok(resolved)
    }

    /// Resolves a path that must name a directory.
    pub fn resolve_dir(&self, raw: &str, cwd: NodeId) -> Result<NodeId, FilesystemError> {
        let id = self.resolve(raw, cwd)?;
        ensure!(
            self.node(id).is_directory(),
            NotADirectorySnafu {
                name: self.node(id).name(),
            }
        );
        Ok(id)
    }

    /// Resolves everything but the leaf of a creation path.
    ///
    /// Each non-leaf segment must already exist and be a directory; parents
    /// are never auto-created.
    pub fn resolve_parent(&self, raw: &str, cwd: NodeId) -> Result<ResolvedParent, FilesystemError> {
        let normalized = NormalizedPath::parse(raw)?;
        ensure!(
            !normalized.has_trailing_separator,
            InvalidPathSnafu {
                reason: format!("path cannot have trailing '{SEPARATOR}'"),
            }
        );

        let (leaf_name, walk) = normalized.segments.split_last().context(InvalidPathSnafu {
            reason: "path must include a leaf name",
        })?;
        ensure!(
            leaf_name.as_str() != PARENT_SEGMENT,
            InvalidPathSnafu {
                reason: format!("leaf name cannot be '{PARENT_SEGMENT}'"),
            }
        );

        let mut current = if normalized.is_absolute { ROOT } else { cwd };
        for segment in walk {
            if segment.as_str() == PARENT_SEGMENT {
                current = self.node(current).parent().unwrap_or(current);
                continue;
            }

            let child = self.lookup_child(current, segment)?;
            ensure!(
                self.node(child).is_directory(),
                NotADirectorySnafu {
                    name: segment.as_str(),
                }
            );
            current = child;
        }

        Ok(ResolvedParent {
            parent: current,
            leaf_name: leaf_name.clone(),
        })
    }

    /// Creates a directory at the given path.
    pub fn mkdir(&mut self, raw: &str, cwd: NodeId) -> Result<NodeId, FilesystemError> {
        // The target itself is being created, not expected to pre-exist as a
        // directory, so trailing separators are tolerated for mkdir only.
        let trimmed = path::strip_trailing_separators(raw);

        let resolved = self.resolve_parent(trimmed, cwd)?;
        let node = Node::directory(resolved.leaf_name, Some(resolved.parent));
        let id = self.insert_child(resolved.parent, node)?;
        debug!("Created directory '{trimmed}'");
        Ok(id)
    }

    /// Creates a file named `name` directly under `cwd`.
    ///
    /// Takes a bare name, never a path.
    pub fn touch(&mut self, name: &str, cwd: NodeId) -> Result<NodeId, FilesystemError> {
        ensure!(
            !name.trim().is_empty(),
            InvalidPathSnafu {
                reason: "file name cannot be blank",
            }
        );
        ensure!(
            !name.contains(SEPARATOR),
            InvalidPathSnafu {
                reason: format!("touch only accepts a file name, not a path: {name}"),
            }
        );
        ensure!(
            name != CURRENT_SEGMENT && name != PARENT_SEGMENT,
            InvalidPathSnafu {
                reason: format!("invalid file name: {name}"),
            }
        );

        let node = Node::file(name, cwd);
        let id = self.insert_child(cwd, node)?;
        debug!("Created file '{name}'");
        Ok(id)
    }

    /// Lists a directory's child names in lexicographic order, directory
    /// names suffixed with the separator so the consumer can tell the two
    /// kinds apart.
    pub fn ls(&self, raw: Option<&str>, cwd: NodeId) -> Result<Vec<String>, FilesystemError> {
        let dir = match raw {
            Some(p) => self.resolve_dir(p, cwd)?,
            None => cwd,
        };
        Ok(self.entries(dir))
    }

    /// Resolves a path for a directory change; the caller owns the actual
    /// current-directory reassignment.
    pub fn cd(&self, raw: &str, cwd: NodeId) -> Result<NodeId, FilesystemError> {
        self.resolve_dir(raw, cwd)
    }

    fn entries(&self, dir: NodeId) -> Vec<String> {
        let Some(children) = self.node(dir).children() else {
            return Vec::new();
        };
        children
            .iter()
            .map(|(name, id)| match self.node(*id).kind() {
                NodeKind::Directory { .. } => format!("{name}{SEPARATOR}"),
                NodeKind::File => name.clone(),
            })
            .collect()
    }

    fn lookup_child(&self, dir: NodeId, name: &str) -> Result<NodeId, FilesystemError> {
        let children = self.node(dir).children().context(NotADirectorySnafu {
            name: self.node(dir).name(),
        })?;
        children.get(name).copied().context(NotFoundSnafu { name })
    }

    fn insert_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId, FilesystemError> {
        let id = NodeId(self.nodes.len());
        let parent_name = self.node(parent).name().to_string();
        let name = node.name().to_string();

        let children = self.nodes[parent.0]
            .children_mut()
            .context(NotADirectorySnafu { name: parent_name })?;
        ensure!(
            !children.contains_key(&name),
            AlreadyExistsSnafu { name: name.clone() }
        );
        children.insert(name, id);
        self.nodes.push(node);

        Ok(id)
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::new()
    }
}
