use tracing::trace;

use crate::queue::Queue;

impl Queue {
    /// Delete the middle element: index *n* / 2 for a queue of *n*
    /// elements, so the second of the two middles when *n* is even.
    ///
    /// Returns `false` if the queue is empty.
    pub fn delete_middle(&mut self) -> bool {
        match self.list.remove_middle() {
            Some(element) => {
                trace!(value = element.value(), "deleted middle element");
                true
            }
            None => false,
        }
    }

    /// Delete every element whose value occurs more than once in a row,
    /// keeping none of the copies. The queue is expected to be sorted.
    ///
    /// Returns `false` if the queue is empty, `true` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "1", "2", "3", "3"]);
    /// assert!(queue.delete_adjacent_duplicates());
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["2"]);
    /// ```
    pub fn delete_adjacent_duplicates(&mut self) -> bool {
        if self.list.is_empty() {
            return false;
        }
        let mut cursor = self.list.cursor_start_mut();
        let (mut in_run, mut deleted) = (false, 0_usize);
        while let Some(current) = cursor.current() {
            let duplicated = cursor
                .peek_next()
                .map_or(false, |next| next.value() == current.value());
            if duplicated || in_run {
                cursor.remove();
                deleted += 1;
                in_run = duplicated;
            } else if cursor.move_next().is_err() {
                break;
            }
        }
        trace!(deleted, "deleted adjacent duplicates");
        true
    }

    /// Reverse the queue in place.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Reverse each consecutive run of `k` elements; a shorter trailing run
    /// keeps its order. Nothing happens for `k <= 1`.
    pub fn reverse_in_groups(&mut self, k: usize) {
        trace!(k, "reversing in groups");
        self.list.reverse_in_groups(k);
    }

    /// Swap every two adjacent elements.
    pub fn swap_pairs(&mut self) {
        self.reverse_in_groups(2);
    }
}
