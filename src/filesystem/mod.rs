//! In-memory filesystem tree and the operations over it.
//!
//! Nodes are either directories (holding an ordered child index) or files,
//! owned by a flat arena and addressed by stable ids. Path resolution,
//! creation and listing all live here; the command layer on top is thin glue.

mod error;
mod node;
mod path;
mod session;
mod tree;

pub use error::FilesystemError;
pub use node::{Node, NodeId, NodeKind};
pub use path::{NormalizedPath, SEPARATOR};
pub use session::Session;
pub use tree::{FileTree, ResolvedParent};
