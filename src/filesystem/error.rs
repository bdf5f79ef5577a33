use snafu::Snafu;

/// Failure kinds shared by the path, tree and session layers.
///
/// Every variant stands for a rejected operation: when one of these surfaces,
/// the tree and the current directory are exactly as they were before the
/// call.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FilesystemError {
    #[snafu(display("invalid path: {reason}"))]
    InvalidPath { reason: String },
    #[snafu(display("not found: {name}"))]
    NotFound { name: String },
    #[snafu(display("not a directory: {name}"))]
    NotADirectory { name: String },
    #[snafu(display("name already exists: {name}"))]
    AlreadyExists { name: String },
}
