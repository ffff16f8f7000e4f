//! Bounds-checked variants
//!
//! Same locking discipline as the unchecked methods, but out-of-range
//! indices and missing values come back as [`ListError`] instead of a panic
//! or a silent no-op.

use crate::error::{ListError, ListResult};
use crate::list::SharedList;

impl<T: PartialEq> SharedList<T> {
    /// Checked [`get`](Self::get)
    pub fn try_get(&self, index: usize) -> ListResult<T>
    where
        T: Clone,
    {
        let state = self.read();
        let data = &state.data;
        data.get(index).cloned().ok_or_else(|| {
            tracing::warn!(list = %self.name(), index, len = data.len(), "get out of bounds");
            ListError::IndexOutOfBounds {
                index,
                len: data.len(),
            }
        })
    }

    /// Checked [`set`](Self::set)
    pub fn try_set(&self, index: usize, value: T) -> ListResult<T> {
        let mut guard = self.lock();
        let len = guard.data.len();
        match guard.data.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => {
                tracing::warn!(list = %self.name(), index, len, "set out of bounds");
                Err(ListError::IndexOutOfBounds { index, len })
            }
        }
    }

    /// Checked [`insert`](Self::insert). Nothing is inserted on error.
    pub fn try_insert<I>(&self, at: usize, values: I) -> ListResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut guard = self.lock();
        let len = guard.data.len();
        if at > len {
            tracing::warn!(list = %self.name(), at, len, "insert out of bounds");
            return Err(ListError::IndexOutOfBounds { index: at, len });
        }
        guard.data.splice(at..at, values);
        Ok(())
    }

    /// Checked [`remove_at`](Self::remove_at)
    pub fn try_remove_at(&self, index: usize) -> ListResult<T> {
        let mut guard = self.lock();
        let len = guard.data.len();
        if index >= len {
            tracing::warn!(list = %self.name(), index, len, "remove_at out of bounds");
            return Err(ListError::IndexOutOfBounds { index, len });
        }
        Ok(guard.data.remove(index))
    }

    /// Remove the first element equal to `value`, returning its former index.
    pub fn try_remove(&self, value: &T) -> ListResult<usize> {
        let mut guard = self.lock();
        let index = guard
            .data
            .iter()
            .position(|el| el == value)
            .ok_or(ListError::NotFound)?;
        guard.data.remove(index);
        Ok(index)
    }

    /// Replace the first element equal to `old`, returning its index.
    pub fn try_replace(&self, old: &T, new: T) -> ListResult<usize> {
        let mut guard = self.lock();
        let index = guard
            .data
            .iter()
            .position(|el| el == old)
            .ok_or(ListError::NotFound)?;
        guard.data[index] = new;
        Ok(index)
    }
}
