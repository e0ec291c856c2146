use crate::builder::Settings;
use crate::entry::{Entry, EntryKind};
use crate::{Error, DEFAULT_PREFIX};
use std::fmt::{Debug, Formatter};
use std::fs::{File, OpenOptions};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A handle to a uniquely named, initially empty temporary file.
///
/// Files follow the same creation protocol as [`TempDir`](crate::TempDir):
/// the handle starts out empty and [`TempFile::create`] makes the file.
/// Dropping a handle that owns a file deletes it.
pub struct TempFile {
    entry: Entry,
}

impl TempFile {
    /// Creates an empty handle using the default `"tmp"` prefix.
    ///
    /// ## Example
    ///
    /// ```
    /// # use scoped_tempfile::{TempFile, Error};
    /// # use std::io::Write;
    /// let mut file = TempFile::new();
    /// file.create()?;
    ///
    /// // The file exists.
    /// let file_path = file.path().to_path_buf();
    /// file.open_rw()?.write_all(b"scratch")?;
    /// assert_eq!(std::fs::read(&file_path)?, b"scratch");
    ///
    /// // Deletes the file.
    /// drop(file);
    /// assert!(!file_path.exists());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Creates an empty handle whose file name will start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::from_settings(Settings::with_prefix(prefix))
    }

    pub(crate) fn from_settings(settings: Settings) -> Self {
        Self {
            entry: Entry::new(EntryKind::File, settings),
        }
    }

    /// Creates the file.
    ///
    /// ## Errors
    /// * [`Error::AlreadyValid`] if the handle already owns a file
    /// * [`Error::PathTooLong`] if no generated path fit the platform limits
    /// * [`Error::NameSpaceExhausted`] if no base directory accepted a new file
    pub fn create(&mut self) -> Result<(), Error> {
        self.entry.create()
    }

    /// Deletes the file. See [`TempDir::remove`](crate::TempDir::remove).
    pub fn remove(&mut self) -> Result<(), Error> {
        self.entry.remove()
    }

    /// Returns the path of the file, or an empty path if there is none.
    pub fn path(&self) -> &Path {
        self.entry.path().unwrap_or_else(|| Path::new(""))
    }

    /// Whether the handle currently owns a file.
    pub fn good(&self) -> bool {
        self.entry.good()
    }

    pub fn prefix(&self) -> &str {
        self.entry.prefix()
    }

    /// Gives up ownership; the file is left on disk.
    pub fn keep(mut self) -> Option<PathBuf> {
        self.entry.disown()
    }

    /// Opens the file in read-write mode.
    pub fn open_rw(&self) -> Result<File, Error> {
        let path = self.entry.path().ok_or(Error::NotCreated)?;
        Ok(OpenOptions::new().read(true).write(true).open(path)?)
    }

    /// Opens the file in read-only mode.
    pub fn open_ro(&self) -> Result<File, Error> {
        let path = self.entry.path().ok_or(Error::NotCreated)?;
        Ok(OpenOptions::new().read(true).open(path)?)
    }

    /// Opens the file in read-write mode for use with `tokio`.
    ///
    /// ```
    /// # use scoped_tempfile::{ScopedTempFile, Error};
    /// # use tokio::io::AsyncWriteExt;
    /// # tokio_test::block_on(async {
    /// let file = ScopedTempFile::new();
    /// let mut handle = file.open_rw_async().await?;
    /// handle.write_all(b"async").await?;
    /// handle.flush().await?;
    /// assert_eq!(tokio::fs::read(file.path()).await?, b"async");
    /// # Ok::<(), Error>(())
    /// # }).unwrap();
    /// ```
    #[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
    #[cfg(feature = "tokio")]
    pub async fn open_rw_async(&self) -> Result<tokio::fs::File, Error> {
        let path = self.entry.path().ok_or(Error::NotCreated)?;
        Ok(tokio::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .await?)
    }

    /// Opens the file in read-only mode for use with `tokio`.
    #[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
    #[cfg(feature = "tokio")]
    pub async fn open_ro_async(&self) -> Result<tokio::fs::File, Error> {
        let path = self.entry.path().ok_or(Error::NotCreated)?;
        Ok(tokio::fs::OpenOptions::new().read(true).open(path).await?)
    }
}

impl Default for TempFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TempFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.entry.path())
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

/// A temporary file that is created on construction and removed when it
/// goes out of scope.
///
/// Construction never fails outright; check [`TempFile::good`] before use.
pub struct ScopedTempFile {
    inner: TempFile,
}

impl ScopedTempFile {
    pub fn new() -> Self {
        Self::from_handle(TempFile::new())
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::from_handle(TempFile::with_prefix(prefix))
    }

    pub(crate) fn from_handle(mut inner: TempFile) -> Self {
        if let Err(e) = inner.create() {
            warn!(prefix = inner.prefix(), error = %e, "failed to create scoped temporary file");
        }
        Self { inner }
    }

    /// Removes the file now instead of at the end of the scope.
    pub fn close(mut self) -> Result<(), Error> {
        self.inner.remove()
    }
}

impl Default for ScopedTempFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedTempFile {
    fn drop(&mut self) {
        if self.inner.good() {
            if let Err(e) = self.inner.remove() {
                warn!(error = %e, "failed to remove scoped temporary file");
            }
        }
    }
}

impl Deref for ScopedTempFile {
    type Target = TempFile;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ScopedTempFile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Debug for ScopedTempFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl AsRef<Path> for ScopedTempFile {
    fn as_ref(&self) -> &Path {
        self.inner.path()
    }
}
