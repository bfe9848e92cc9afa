use thiserror::Error;

/// Rejected mutations. The tree is left untouched whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvlError {
    #[error("key already exists in the tree")]
    DuplicateKey,
    #[error("key not found in the tree")]
    KeyNotFound,
}
