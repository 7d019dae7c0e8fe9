//! Error types for word-friends.
//!
//! The predicate and the traversal are total, so every error originates at
//! the boundary: reading the dictionary or parsing the invocation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The error type for dictionary loading and invocation handling.
#[derive(Error, Debug)]
pub enum FriendsError {
    /// The dictionary source could not be opened or read
    #[error("cannot read dictionary '{}': {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The invocation is missing required values or is malformed
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Result type alias for operations that may fail with FriendsError.
pub type Result<T> = std::result::Result<T, FriendsError>;

impl FriendsError {
    /// Create a new source-unreadable error for `path`.
    pub fn source_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        FriendsError::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid-arguments error.
    pub fn invalid_arguments<S: Into<String>>(msg: S) -> Self {
        FriendsError::InvalidArguments(msg.into())
    }

    /// Process exit status the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FriendsError::SourceUnreadable { .. } => 1,
            FriendsError::InvalidArguments(_) => 2,
        }
    }
}
