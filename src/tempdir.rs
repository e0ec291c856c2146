use crate::builder::Settings;
use crate::entry::{Entry, EntryKind};
use crate::{Error, DEFAULT_PREFIX};
use std::fmt::{Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A handle to a uniquely named temporary directory.
///
/// The handle starts out empty; [`TempDir::create`] picks a base directory
/// and creates the directory. When the handle is dropped while it still owns
/// a directory, the directory and everything in it is deleted.
pub struct TempDir {
    entry: Entry,
}

impl TempDir {
    /// Creates an empty handle using the default `"tmp"` prefix.
    ///
    /// ## Example
    ///
    /// ```
    /// # use scoped_tempfile::{TempDir, Error};
    /// let mut dir = TempDir::new();
    /// assert!(!dir.good());
    ///
    /// dir.create()?;
    /// let dir_path = dir.path().to_path_buf();
    /// assert!(dir_path.is_dir());
    ///
    /// // Deletes the directory.
    /// drop(dir);
    /// assert!(!dir_path.exists());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Creates an empty handle whose directory name will start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::from_settings(Settings::with_prefix(prefix))
    }

    pub(crate) fn from_settings(settings: Settings) -> Self {
        Self {
            entry: Entry::new(EntryKind::Directory, settings),
        }
    }

    /// Creates the directory.
    ///
    /// Each candidate base directory gets up to 100 freshly generated names;
    /// the first one that can be created wins.
    ///
    /// ## Errors
    /// * [`Error::AlreadyValid`] if the handle already owns a directory
    /// * [`Error::PathTooLong`] if no generated path fit the platform limits
    /// * [`Error::NameSpaceExhausted`] if no base directory accepted a new directory
    pub fn create(&mut self) -> Result<(), Error> {
        self.entry.create()
    }

    /// Deletes the directory together with its contents.
    ///
    /// ## Returns
    /// * `Ok(())` if the directory was deleted; the handle is then empty
    /// * `Err(Error::NothingToRemove)` if the handle owns nothing or the directory is gone
    /// * `Err(Error::Removal { .. })` if deletion failed; the handle still owns the directory
    pub fn remove(&mut self) -> Result<(), Error> {
        self.entry.remove()
    }

    /// Returns the path of the directory, or an empty path if there is none.
    pub fn path(&self) -> &Path {
        self.entry.path().unwrap_or_else(|| Path::new(""))
    }

    /// Whether the handle currently owns a directory.
    pub fn good(&self) -> bool {
        self.entry.good()
    }

    pub fn prefix(&self) -> &str {
        self.entry.prefix()
    }

    /// Gives up ownership; the directory is left on disk.
    pub fn keep(mut self) -> Option<PathBuf> {
        self.entry.disown()
    }
}

impl Default for TempDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.entry.path())
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

/// A temporary directory that is created on construction and removed when
/// it goes out of scope.
///
/// Construction never fails outright; check [`TempDir::good`] before use.
///
/// ## Example
///
/// ```
/// # use scoped_tempfile::ScopedTempDir;
/// let dir_path = {
///     let dir = ScopedTempDir::new();
///     assert!(dir.good());
///     std::fs::write(dir.path().join("data.txt"), b"hello").unwrap();
///     dir.path().to_path_buf()
/// };
///
/// // The directory and its contents are gone.
/// assert!(!dir_path.exists());
/// ```
pub struct ScopedTempDir {
    inner: TempDir,
}

impl ScopedTempDir {
    pub fn new() -> Self {
        Self::from_handle(TempDir::new())
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::from_handle(TempDir::with_prefix(prefix))
    }

    pub(crate) fn from_handle(mut inner: TempDir) -> Self {
        if let Err(e) = inner.create() {
            warn!(prefix = inner.prefix(), error = %e, "failed to create scoped temporary directory");
        }
        Self { inner }
    }

    /// Removes the directory now instead of at the end of the scope.
    pub fn close(mut self) -> Result<(), Error> {
        self.inner.remove()
    }
}

impl Default for ScopedTempDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedTempDir {
    fn drop(&mut self) {
        if self.inner.good() {
            if let Err(e) = self.inner.remove() {
                warn!(error = %e, "failed to remove scoped temporary directory");
            }
        }
    }
}

impl Deref for ScopedTempDir {
    type Target = TempDir;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ScopedTempDir {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Debug for ScopedTempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl AsRef<Path> for ScopedTempDir {
    fn as_ref(&self) -> &Path {
        self.inner.path()
    }
}
