use tracing::debug;

use super::error::FilesystemError;
use super::node::NodeId;
use super::tree::FileTree;

/// One user's view of a tree: the tree itself plus a current directory.
///
/// The current directory starts at the root and is reassigned only by a
/// successful `cd`; no other operation touches session state.
#[derive(Debug)]
pub struct Session {
    tree: FileTree,
    cwd: NodeId,
}

impl Session {
    pub fn new() -> Self {
        let tree = FileTree::new();
        let cwd = tree.root();
        Session { tree, cwd }
    }

    pub fn mkdir(&mut self, path: &str) -> Result<(), FilesystemError> {
        self.tree.mkdir(path, self.cwd)?;
        Ok(())
    }

    pub fn cd(&mut self, path: &str) -> Result<(), FilesystemError> {
        self.cwd = self.tree.cd(path, self.cwd)?;
        debug!(
            "Changed current directory to '{}'",
            self.tree.node(self.cwd).name()
        );
        Ok(())
    }

    pub fn ls(&self, path: Option<&str>) -> Result<Vec<String>, FilesystemError> {
        self.tree.ls(path, self.cwd)
    }

    pub fn touch(&mut self, name: &str) -> Result<(), FilesystemError> {
        self.tree.touch(name, self.cwd)?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
