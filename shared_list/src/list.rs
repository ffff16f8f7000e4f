//! The `SharedList` handle and its construction

use crate::config::{DEFAULT_LIST_NAME, ListConfig};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::sync::Arc;

/// Thread-safe ordered list of equatable values with a round-robin cursor.
///
/// `SharedList` is a handle: cloning it shares the same storage, cursor and
/// lock, so mutations through any clone serialize against each other.
///
/// Methods come in two families:
///
/// - **Locked mutators** (`insert`, `remove*`, `replace*`, `set`, `add`,
///   `push`, `clear`, `next`, `reset_cursor`) hold the write side of the
///   list's single lock for their full duration and are linearized.
/// - **Readers** (`get`, `len`, `unpack`, `contains`, `index_of`, `to_vec`,
///   `cursor`) only take the shared read side and never wait behind a queued
///   mutator. They see the list either before or after any single mutation,
///   but consecutive reader calls are not a consistent snapshot: the length
///   may change between `len()` and `get(i)`.
///
/// # Bounds
///
/// Index arguments are **not** validated. An out-of-range index panics, the
/// same way slice indexing does. Callers check bounds themselves, or use the
/// `try_*` variants which return [`ListError`](crate::ListError) instead.
pub struct SharedList<T> {
    pub(crate) inner: Arc<Inner<T>>,
}

pub(crate) struct Inner<T> {
    /// The only lock: write side for mutators and the cursor advance.
    pub(crate) state: RwLock<State<T>>,
    pub(crate) name: String,
}

pub(crate) struct State<T> {
    pub(crate) data: Vec<T>,
    /// Round-robin position, only written under the write lock.
    pub(crate) cursor: usize,
}

impl<T> SharedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), DEFAULT_LIST_NAME.to_string())
    }

    /// Create an empty list with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(Vec::with_capacity(capacity), DEFAULT_LIST_NAME.to_string())
    }

    /// Create an empty list from a validated [`ListConfig`]
    pub fn with_config(config: &ListConfig) -> Self {
        Self::from_parts(
            Vec::with_capacity(config.initial_capacity),
            config.name.clone(),
        )
    }

    fn from_parts(data: Vec<T>, name: String) -> Self {
        tracing::trace!(list = %name, len = data.len(), "created list");
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(State { data, cursor: 0 }),
                name,
            }),
        }
    }

    /// Name used in tracing output
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether two handles refer to the same underlying list
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Exclusive access for mutators and the cursor advance.
    pub(crate) fn lock(&self) -> RwLockWriteGuard<'_, State<T>> {
        self.inner.state.write()
    }

    /// Shared access for readers; recursive so a thread holding an
    /// `unpack()` view can keep reading while a writer is queued.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, State<T>> {
        self.inner.state.read_recursive()
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> From<Vec<T>> for SharedList<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_parts(data, DEFAULT_LIST_NAME.to_string())
    }
}

impl<T> FromIterator<T> for SharedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("SharedList")
            .field("name", &self.inner.name)
            .field("cursor", &state.cursor)
            .field("data", &state.data)
            .finish()
    }
}

static_assertions::assert_impl_all!(SharedList<u64>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(SharedList<String>: Send, Sync);
