use parking_lot::{Mutex, MutexGuard};
use std::sync::{Arc, OnceLock};

/// Serializes the check-then-create and check-then-remove sequences of all
/// handles sharing it.
///
/// Clones share the same lock. Handles use [`NamespaceLock::global`] unless
/// a [`Builder`](crate::Builder) was given another one. Other processes are
/// not covered; atomic creation on the filesystem settles those races.
#[derive(Debug, Clone, Default)]
pub struct NamespaceLock {
    inner: Arc<Mutex<()>>,
}

static GLOBAL: OnceLock<NamespaceLock> = OnceLock::new();

impl NamespaceLock {
    /// Creates a lock not shared with any existing handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide lock.
    pub fn global() -> Self {
        GLOBAL.get_or_init(Self::new).clone()
    }

    /// Blocks until the lock is held; it is released when the guard drops.
    pub fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock()
    }

    /// Whether both values refer to the same lock.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
