//! Reader family
//!
//! Readers only take the shared read side of the list's lock, recursively,
//! so they never queue behind a waiting mutator. A reader sees the list
//! before or after a mutation, never halfway through.
//! Nothing ties two reader calls together: check-then-act sequences such as
//! `len()` followed by `get(i)` can race with mutators on other threads.

use crate::list::SharedList;
use parking_lot::{MappedRwLockReadGuard, RwLockReadGuard};

impl<T: PartialEq> SharedList<T> {
    /// Clone of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.read().data[index].clone()
    }

    /// Current number of elements
    pub fn len(&self) -> usize {
        self.read().data.len()
    }

    /// Whether the list has no elements
    pub fn is_empty(&self) -> bool {
        self.read().data.is_empty()
    }

    /// Live view of the underlying storage.
    ///
    /// This is a direct reference to the list's storage, not a defensive
    /// copy. While the view is alive, mutators on other threads block until
    /// it is dropped. Other readers, including [`cursor`](Self::cursor), keep
    /// working on any thread. Calling a mutator or [`next`](Self::next) on the
    /// thread holding the view always deadlocks.
    ///
    /// Use [`to_vec`](Self::to_vec) for an owned snapshot.
    pub fn unpack(&self) -> MappedRwLockReadGuard<'_, [T]> {
        RwLockReadGuard::map(self.read(), |state| state.data.as_slice())
    }

    /// Owned copy of the current contents
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.read().data.clone()
    }

    /// Whether any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Lowest index holding an element equal to `value`, or `None`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.read().data.iter().position(|el| el == value)
    }
}
