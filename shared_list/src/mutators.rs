//! Locked mutator family
//!
//! Every method here holds the write side of the list's lock for its full
//! duration, so mutations are linearized across all handles to the same list.
//! Index arguments are not validated; out-of-range indices panic.

use crate::list::SharedList;

impl<T: PartialEq> SharedList<T> {
    /// Splice `values` in at position `at`, shifting later elements right.
    ///
    /// The inserted values stay contiguous and keep their order. `values` is
    /// collected before the lock is taken, so it may read this list.
    ///
    /// # Panics
    ///
    /// Panics if `at > len()`.
    pub fn insert<I>(&self, at: usize, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut guard = self.lock();
        let before = guard.data.len();
        guard.data.splice(at..at, values);
        tracing::trace!(
            list = %self.name(),
            at,
            count = guard.data.len() - before,
            "insert"
        );
    }

    /// Remove the first element equal to `value`.
    ///
    /// Returns `false` and leaves the list unchanged if there is no match.
    pub fn remove(&self, value: &T) -> bool {
        let mut guard = self.lock();
        let found = guard.data.iter().position(|el| el == value);
        match found {
            Some(index) => {
                guard.data.remove(index);
                tracing::trace!(list = %self.name(), index, "remove");
                true
            }
            None => {
                tracing::debug!(list = %self.name(), "remove: value not present");
                false
            }
        }
    }

    /// Replace the first element equal to `old` with `new`.
    ///
    /// Returns `false` and leaves the list unchanged if there is no match.
    pub fn replace(&self, old: &T, new: T) -> bool {
        let mut guard = self.lock();
        match guard.data.iter_mut().find(|el| **el == *old) {
            Some(slot) => {
                *slot = new;
                tracing::trace!(list = %self.name(), "replace");
                true
            }
            None => {
                tracing::debug!(list = %self.name(), "replace: value not present");
                false
            }
        }
    }

    /// Remove every element equal to `value`, keeping survivors in order.
    ///
    /// Returns the number of elements removed.
    pub fn remove_all(&self, value: &T) -> usize {
        let mut guard = self.lock();
        let before = guard.data.len();
        guard.data.retain(|el| el != value);
        let removed = before - guard.data.len();
        tracing::trace!(list = %self.name(), removed, "remove_all");
        removed
    }

    /// Replace every element equal to `value` with a clone of `new`, in place.
    ///
    /// Returns the number of elements replaced.
    pub fn replace_all(&self, value: &T, new: T) -> usize
    where
        T: Clone,
    {
        let mut guard = self.lock();
        let mut replaced = 0;
        for el in guard.data.iter_mut().filter(|el| **el == *value) {
            *el = new.clone();
            replaced += 1;
        }
        tracing::trace!(list = %self.name(), replaced, "replace_all");
        replaced
    }

    /// Remove and return the element at `index`, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&self, index: usize) -> T {
        let mut guard = self.lock();
        let value = guard.data.remove(index);
        tracing::trace!(list = %self.name(), index, "remove_at");
        value
    }

    /// Overwrite the element at `index`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&self, index: usize, value: T) -> T {
        let mut guard = self.lock();
        let old = std::mem::replace(&mut guard.data[index], value);
        tracing::trace!(list = %self.name(), index, "set");
        old
    }

    /// Append `values` to the end of the list, in order.
    ///
    /// `values` is collected before the lock is taken, so it may read this list.
    pub fn add<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut guard = self.lock();
        let before = guard.data.len();
        guard.data.extend(values);
        tracing::trace!(
            list = %self.name(),
            count = guard.data.len() - before,
            "add"
        );
    }

    /// Append a single value.
    pub fn push(&self, value: T) {
        let mut guard = self.lock();
        guard.data.push(value);
        tracing::trace!(list = %self.name(), len = guard.data.len(), "push");
    }

    /// Remove all elements. The cursor is left where it was and wraps to 0
    /// on the next [`next`](Self::next) once the list is refilled.
    pub fn clear(&self) {
        let mut guard = self.lock();
        let dropped = guard.data.len();
        guard.data.clear();
        tracing::debug!(list = %self.name(), dropped, cursor = guard.cursor, "clear");
    }
}
