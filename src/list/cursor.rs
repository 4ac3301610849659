use crate::list::{List, GHOST};
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// where the last one is the ghost node of the list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use string_queue::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #]
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#]
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #]
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Moving forward from the ghost node is refused.
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// // Move cursor forward, cyclically: [|A B C D #]
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: usize,
    pub(crate) list: &'a List<T>,
}

/// A cursor over a `List` with editing operations.
///
/// Elements borrowed from a `CursorMut` are tied to the cursor itself, so the
/// borrow has to end before the cursor edits the list again.
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: usize,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == GHOST
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == GHOST
            }
            pub(crate) fn next_node(&self) -> usize {
                self.list.next_of(self.current)
            }
            pub(crate) fn prev_node(&self) -> usize {
                self.list.prev_of(self.current)
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, or return an error
            /// when passing through the ghost node is happened.
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_ghost_node() {
                    self.move_next_cyclic();
                    return Ok(());
                }
                Err("`move_next` across ghost boundary")
            }

            /// Move the cursor to the previous position, or return an error
            /// when passing through the ghost node is happened.
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_front_node() {
                    self.move_prev_cyclic();
                    return Ok(());
                }
                Err("`move_prev` across ghost boundary")
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: usize) -> Self {
        Self { current, list }
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the ghost node.
    pub fn current(&self) -> Option<&'a T> {
        if self.is_ghost_node() {
            return None;
        }
        Some(self.list.element(self.current))
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        Some(self.list.element(self.prev_node()))
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: usize) -> Self {
        Self { current, list }
    }

    pub fn current(&self) -> Option<&T> {
        if self.is_ghost_node() {
            return None;
        }
        Some(self.list.element(self.current))
    }

    pub fn previous(&self) -> Option<&T> {
        if self.is_front_node() {
            return None;
        }
        Some(self.list.element(self.prev_node()))
    }

    /// Return the element after the cursor, or `None` if the next
    /// node is the ghost node.
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.next_node();
        if next == GHOST {
            return None;
        }
        Some(self.list.element(next))
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element before the cursor position. The cursor stays put.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// assert!(cursor.move_next().is_ok());
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.previous(), Some(&4));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let prev = self.prev_node();
        self.list.attach_node(prev, self.current, item);
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node unless no removing is happened.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..4);
    /// let mut cursor = list.cursor_start_mut();
    /// assert!(cursor.move_next().is_ok());
    ///
    /// assert_eq!(cursor.remove(), Some(1)); // becomes [0, 2, 3]
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// let mut cursor = list.cursor_end_mut();
    /// assert_eq!(cursor.remove(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 2, 3]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        let element = self.list.detach_node(self.current);
        self.current = next;
        Some(element)
    }

    /// Remove the element before the cursor and return it, or return `None` if
    /// the cursor is at the first node. After removal, the cursor is not moved.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..4);
    /// let mut cursor = list.cursor_back_mut();
    ///
    /// assert_eq!(cursor.backspace(), Some(2)); // becomes [0, 1, 3]
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.backspace(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 3]);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_walks_both_ways() {
        let list = List::from_iter(0..3);
        let mut cursor = list.cursor_start();
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor.previous(), None);
        for expected in 0..3 {
            assert_eq!(cursor.current(), Some(&expected));
            assert!(cursor.move_next().is_ok());
        }
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), Some(&2));
        assert!(cursor.move_next().is_err());

        cursor.move_next_cyclic();
        assert_eq!(cursor.current(), Some(&0));
        cursor.move_prev_cyclic();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_on_empty_list() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_start_mut();
        assert!(cursor.is_empty());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), None);
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.backspace(), None);

        cursor.insert(7);
        assert_eq!(cursor.view().front(), Some(&7));
        assert_eq!(cursor.previous(), Some(&7));
    }

    #[test]
    fn cursor_edits() {
        let mut list = List::from_iter(0..5);
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.peek_next(), Some(&1));
        assert_eq!(cursor.remove(), Some(0));
        assert_eq!(cursor.current(), Some(&1));
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.backspace(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        cursor.insert(9);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![9, 2, 3, 4]);

        let mut cursor = list.cursor_back_mut();
        assert_eq!(cursor.current(), Some(&4));
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.remove(), Some(4));
        assert_eq!(cursor.current(), None);
        assert_eq!(list.back(), Some(&3));
    }
}
