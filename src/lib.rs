//! # scoped-tempfile
//!
//! Provides the [`TempDir`] and [`TempFile`] handles for uniquely named temporary directories
//! and files, along with the [`ScopedTempDir`] and [`ScopedTempFile`] wrappers that create
//! their entry immediately and delete it again when they go out of scope.
//!
//! ```
//! use scoped_tempfile::ScopedTempDir;
//!
//! let dir = ScopedTempDir::new();
//! assert!(dir.good());
//!
//! // Everything written below the directory goes away with it.
//! let nested = dir.path().join("nested.txt");
//! std::fs::write(&nested, b"scratch").unwrap();
//!
//! drop(dir);
//! assert!(!nested.exists());
//! ```
//!
//! Names are the prefix (`"tmp"` unless configured) followed by eight random characters from
//! `[a-z0-9_]`. The base directory is the first of `$TEMP`, `$TMP`, `$TMPDIR`, the platform's
//! well-known temporary directories and finally the working directory that accepts a new entry.
//! Creation and removal of all handles in a process are serialized by a shared
//! [`NamespaceLock`].
//!
//! ## Features
//!
//! * `tokio` - Adds [`TempFile::open_rw_async`] and [`TempFile::open_ro_async`], which open
//!             the temporary file as a [`tokio::fs::File`].

// Document crate features on docs.rs.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod builder;
mod candidates;
mod entry;
mod errors;
mod filesystem;
mod lock;
mod platform;
mod random_name;
mod tempdir;
mod tempfile;

pub use builder::Builder;
pub use candidates::{candidate_paths, Environment, SystemEnvironment};
pub use errors::Error;
pub use filesystem::{Filesystem, StdFilesystem};
pub use lock::NamespaceLock;
pub use platform::{DerivedRoot, PlatformProfile};
pub use tempdir::{ScopedTempDir, TempDir};
pub use tempfile::{ScopedTempFile, TempFile};

/// The prefix used unless another one is given.
pub const DEFAULT_PREFIX: &str = "tmp";
