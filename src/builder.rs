use crate::candidates::{candidate_paths, Environment, SystemEnvironment};
use crate::filesystem::{Filesystem, StdFilesystem};
use crate::lock::NamespaceLock;
use crate::platform::PlatformProfile;
use crate::{ScopedTempDir, ScopedTempFile, TempDir, TempFile, DEFAULT_PREFIX};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a handle needs to create and remove its entry.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub prefix: String,
    pub base_dirs: Option<Vec<PathBuf>>,
    pub filesystem: Arc<dyn Filesystem>,
    pub environment: Arc<dyn Environment>,
    pub lock: NamespaceLock,
    pub profile: PlatformProfile,
}

impl Settings {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            base_dirs: None,
            filesystem: Arc::new(StdFilesystem),
            environment: Arc::new(SystemEnvironment),
            lock: NamespaceLock::global(),
            profile: PlatformProfile::current(),
        }
    }

    /// The explicit base directories, or else the candidates found in the
    /// current environment.
    pub fn base_dirs(&self) -> Vec<PathBuf> {
        match &self.base_dirs {
            Some(dirs) => dirs.clone(),
            None => candidate_paths(self.environment.as_ref(), &self.profile),
        }
    }
}

/// Configures temporary directories and files before they are created.
///
/// ## Example
///
/// ```
/// # use scoped_tempfile::Builder;
/// let dir = Builder::new()
///     .prefix("build_")
///     .base_dir(std::env::temp_dir())
///     .scoped_tempdir();
/// assert!(dir.good());
/// assert!(dir.path().starts_with(std::env::temp_dir()));
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    settings: Settings,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            settings: Settings::with_prefix(DEFAULT_PREFIX),
        }
    }
}

impl Builder {
    #[must_use = "Creates a builder with the default prefix and capabilities"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the prefix of generated names"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.settings.prefix = prefix.into();
        self
    }

    /// Adds a base directory to try. Once any is added, the environment is
    /// no longer consulted; directories are tried in the order added.
    #[must_use = "Adds a base directory to create entries in"]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings
            .base_dirs
            .get_or_insert_with(Vec::new)
            .push(dir.into());
        self
    }

    #[must_use = "Replaces the filesystem used to create and remove entries"]
    pub fn filesystem(mut self, filesystem: Arc<dyn Filesystem>) -> Self {
        self.settings.filesystem = filesystem;
        self
    }

    #[must_use = "Replaces the environment used to find base directories"]
    pub fn environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.settings.environment = environment;
        self
    }

    #[must_use = "Replaces the lock serializing creation and removal"]
    pub fn lock(mut self, lock: NamespaceLock) -> Self {
        self.settings.lock = lock;
        self
    }

    #[must_use = "Replaces the platform constants"]
    pub fn profile(mut self, profile: PlatformProfile) -> Self {
        self.settings.profile = profile;
        self
    }

    /// A directory handle that has not been created yet.
    pub fn tempdir(self) -> TempDir {
        TempDir::from_settings(self.settings)
    }

    /// A file handle that has not been created yet.
    pub fn tempfile(self) -> TempFile {
        TempFile::from_settings(self.settings)
    }

    /// A directory that is created right away and removed when dropped.
    pub fn scoped_tempdir(self) -> ScopedTempDir {
        ScopedTempDir::from_handle(self.tempdir())
    }

    /// A file that is created right away and removed when dropped.
    pub fn scoped_tempfile(self) -> ScopedTempFile {
        ScopedTempFile::from_handle(self.tempfile())
    }
}
