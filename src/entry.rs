use crate::builder::Settings;
use crate::random_name::RandomName;
use crate::Error;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// How many names are tried under each base directory before moving on.
pub(crate) const ATTEMPTS_PER_BASE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Directory,
    File,
}

/// The state shared by directory and file handles.
///
/// `path` is `Some` exactly while the handle owns an entry it created.
#[derive(Debug)]
pub(crate) struct Entry {
    kind: EntryKind,
    settings: Settings,
    path: Option<PathBuf>,
}

impl Entry {
    pub fn new(kind: EntryKind, settings: Settings) -> Self {
        Self {
            kind,
            settings,
            path: None,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.settings.prefix
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn good(&self) -> bool {
        self.path.is_some()
    }

    /// Releases ownership without removing anything.
    pub fn disown(&mut self) -> Option<PathBuf> {
        self.path.take()
    }

    /// Creates a new, uniquely named entry in the first base directory that
    /// allows it.
    pub fn create(&mut self) -> Result<(), Error> {
        let _guard = self.settings.lock.acquire();

        if let Some(path) = &self.path {
            return Err(Error::AlreadyValid(path.clone()));
        }

        let bases = self.settings.base_dirs();
        let mut only_too_long = !bases.is_empty();

        for base in &bases {
            let base_len = base.as_os_str().len();
            for _ in 0..ATTEMPTS_PER_BASE {
                let name = RandomName::new(&self.settings.prefix);
                if !self.settings.profile.fits(base_len, name.len()) {
                    trace!(base = %base.display(), "generated path too long, skipping");
                    continue;
                }
                only_too_long = false;

                let candidate = self.candidate(base, &name);
                if self.settings.filesystem.exists(&candidate) {
                    trace!(path = %candidate.display(), "name taken, retrying");
                    continue;
                }

                match self.make(&candidate) {
                    Ok(()) => {
                        debug!(path = %candidate.display(), kind = ?self.kind, "created temporary entry");
                        self.path = Some(candidate);
                        return Ok(());
                    }
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                        trace!(path = %candidate.display(), "lost creation race, retrying");
                    }
                    Err(e) => {
                        warn!(base = %base.display(), error = %e, "cannot create entries here, trying next base");
                        break;
                    }
                }
            }
        }

        if only_too_long {
            Err(Error::PathTooLong)
        } else {
            Err(Error::NameSpaceExhausted {
                candidates: bases.len(),
            })
        }
    }

    /// `base + separator + prefix + suffix`. Unlike `Path::join`, a prefix
    /// holding separators or a root still stays below `base`.
    fn candidate(&self, base: &Path, name: &RandomName) -> PathBuf {
        let mut path = OsString::with_capacity(
            base.as_os_str().len() + self.settings.profile.separator.len() + name.len(),
        );
        path.push(base);
        path.push(self.settings.profile.separator);
        path.push(name.as_ref());
        PathBuf::from(path)
    }

    fn make(&self, path: &Path) -> io::Result<()> {
        let fs = &self.settings.filesystem;
        match self.kind {
            EntryKind::Directory => fs.create_directory(path),
            EntryKind::File => fs.create_file(path),
        }
    }

    /// Deletes the owned entry. The handle no longer owns anything afterwards,
    /// unless the filesystem refused the removal.
    pub fn remove(&mut self) -> Result<(), Error> {
        let _guard = self.settings.lock.acquire();

        let Some(path) = self.path.take() else {
            return Err(Error::NothingToRemove);
        };

        let fs = &self.settings.filesystem;
        let result = match self.kind {
            EntryKind::Directory => {
                if !fs.is_directory(&path) {
                    return Err(Error::NothingToRemove);
                }
                match fs.list_regular_files(&path) {
                    Ok(files) => {
                        for file in files {
                            if let Err(e) = fs.remove_file(&file) {
                                trace!(path = %file.display(), error = %e, "left for recursive removal");
                            }
                        }
                    }
                    Err(e) => trace!(path = %path.display(), error = %e, "cannot list directory"),
                }
                fs.remove_directory_recursive(&path)
            }
            EntryKind::File => {
                if !fs.exists(&path) {
                    return Err(Error::NothingToRemove);
                }
                fs.remove_file(&path)
            }
        };

        match result {
            Ok(()) => {
                debug!(path = %path.display(), kind = ?self.kind, "removed temporary entry");
                Ok(())
            }
            Err(source) => {
                self.path = Some(path.clone());
                Err(Error::Removal { path, source })
            }
        }
    }
}

impl Drop for Entry {
    fn drop(&mut self) {
        if !self.good() {
            return;
        }
        if let Err(e) = self.remove() {
            warn!(error = %e, "failed to clean up temporary entry");
        }
    }
}
