//! Round-robin cursor
//!
//! The cursor starts at 0. Each `next` returns the element under the cursor
//! and then advances it, wrapping to 0 after the last index: on `[a, b, c]`
//! four calls yield `a, b, c, a`. A cursor left past the end by a shrinking
//! mutation (`clear`, `remove_at`, ...) wraps to 0 on the following call.
//!
//! Advancing takes the write lock like any mutator; reading the position
//! only takes the read side.

use crate::error::{ListError, ListResult};
use crate::list::SharedList;

/// Index to read now, advancing `cursor` for the following call.
///
/// Returns `None` for an empty list and leaves the cursor untouched.
fn advance(cursor: &mut usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if *cursor >= len {
        *cursor = 0;
    }
    let current = *cursor;
    *cursor = (current + 1) % len;
    Some(current)
}

impl<T: PartialEq + Clone> SharedList<T> {
    /// Next element in round-robin order.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. See [`try_next`](Self::try_next).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> T {
        let mut state = self.lock();
        let len = state.data.len();
        match advance(&mut state.cursor, len) {
            Some(index) => state.data[index].clone(),
            None => panic!("next() called on empty SharedList '{}'", self.name()),
        }
    }

    /// Next element in round-robin order, or `ListError::Empty`.
    pub fn try_next(&self) -> ListResult<T> {
        let mut state = self.lock();
        let len = state.data.len();
        let index = advance(&mut state.cursor, len).ok_or(ListError::Empty)?;
        Ok(state.data[index].clone())
    }
}

impl<T> SharedList<T> {
    /// Position the next call to `next` will read from, before wrapping
    pub fn cursor(&self) -> usize {
        self.read().cursor
    }

    /// Move the cursor back to the first element
    pub fn reset_cursor(&self) {
        self.lock().cursor = 0;
        tracing::trace!(list = %self.name(), "reset_cursor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut cursor = 0;
        let visited: Vec<_> = (0..4).filter_map(|_| advance(&mut cursor, 3)).collect();
        assert_eq!(visited, vec![0, 1, 2, 0]);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_advance_empty() {
        let mut cursor = 2;
        assert_eq!(advance(&mut cursor, 0), None);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_advance_stale_cursor() {
        let mut cursor = 5;
        assert_eq!(advance(&mut cursor, 2), Some(0));
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_next_cycles() {
        let list = SharedList::from(vec!['a', 'b', 'c']);
        let seen: Vec<char> = (0..4).map(|_| list.next()).collect();
        assert_eq!(seen, vec!['a', 'b', 'c', 'a']);
    }

    #[test]
    fn test_single_element_repeats() {
        let list = SharedList::from(vec![42]);
        assert_eq!(list.next(), 42);
        assert_eq!(list.next(), 42);
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_try_next_empty() {
        let list: SharedList<i32> = SharedList::new();
        assert_eq!(list.try_next(), Err(ListError::Empty));
    }

    #[test]
    #[should_panic(expected = "empty SharedList")]
    fn test_next_empty_panics() {
        let list: SharedList<i32> = SharedList::new();
        list.next();
    }

    #[test]
    fn test_reset_cursor() {
        let list = SharedList::from(vec![1, 2, 3]);
        list.next();
        list.next();
        list.reset_cursor();
        assert_eq!(list.next(), 1);
    }
}
