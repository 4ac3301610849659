use std::cmp::Ordering;

use tracing::trace;

use crate::element::Element;
use crate::queue::Queue;

/// Order of two elements for the requested direction.
fn direction(descending: bool) -> impl Fn(&Element, &Element) -> Ordering {
    move |a: &Element, b: &Element| {
        if descending {
            b.cmp(a)
        } else {
            a.cmp(b)
        }
    }
}

impl Queue {
    /// Sort the queue by value, byte-wise, in ascending order or in
    /// descending order if `descending` is set.
    ///
    /// A recursive top-down merge sort: the queue is cut at its middle,
    /// both halves are sorted and then merged back by relinking.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["c", "a", "b"]);
    /// queue.sort(true);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["c", "b", "a"]);
    /// ```
    pub fn sort(&mut self, descending: bool) {
        if self.list.is_empty() || self.list.is_singular() {
            return;
        }
        trace!(descending, "sorting queue");
        self.list.sort_by(direction(descending));
    }

    /// Merge `other` into `self`. Both must already be sorted in the
    /// requested direction.
    ///
    /// Fronts are compared one pair at a time; the front of `other` only
    /// moves first when it is strictly ordered before the front of `self`,
    /// so on equal values the element of `self` comes first. Afterwards all
    /// elements are in `self` and `other` is empty.
    ///
    /// The elements of `other` are moved into the node storage of `self`
    /// before merging, which costs one slot each; see [`List::merge_by`].
    ///
    /// Returns the number of elements in the merged queue.
    ///
    /// [`List::merge_by`]: crate::List::merge_by
    pub fn merge_two_sorted(&mut self, other: &mut Queue, descending: bool) -> usize {
        let merged = self.list.merge_by(&mut other.list, direction(descending));
        trace!(merged, descending, "merged two queues");
        merged
    }

    /// Merge all `queues` into the first one. Every queue must already be
    /// sorted in the requested direction.
    ///
    /// Queues are merged pairwise, neighbours first, so on equal values an
    /// element from a lower-indexed queue comes before one from a
    /// higher-indexed queue. All but the first queue are left empty.
    ///
    /// Returns the number of elements in the merged queue, or 0 if there
    /// are no queues.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queues = vec![
    ///     Queue::from_iter(["a", "d"]),
    ///     Queue::from_iter(["b", "e"]),
    ///     Queue::from_iter(["c"]),
    /// ];
    /// assert_eq!(Queue::merge_all(&mut queues, false), 5);
    /// assert_eq!(queues[0].iter().collect::<Vec<_>>(), ["a", "b", "c", "d", "e"]);
    /// assert!(queues[1].is_empty() && queues[2].is_empty());
    /// ```
    pub fn merge_all(queues: &mut [Queue], descending: bool) -> usize {
        let mut width = 1;
        while width < queues.len() {
            let mut start = 0;
            while start + width < queues.len() {
                let (left, right) = queues.split_at_mut(start + width);
                left[start].merge_two_sorted(&mut right[0], descending);
                start += 2 * width;
            }
            width *= 2;
        }
        let merged = queues.first().map_or(0, Queue::size);
        trace!(queues = queues.len(), merged, "merged all queues");
        merged
    }

    /// Delete every element that has a strictly smaller value anywhere to
    /// its right, leaving a non-decreasing queue.
    ///
    /// Returns the number of elements left.
    pub fn filter_ascend(&mut self) -> usize {
        self.retain_monotonic(|kept, candidate| kept < candidate)
    }

    /// Delete every element that has a strictly greater value anywhere to
    /// its right, leaving a non-increasing queue.
    ///
    /// Returns the number of elements left.
    pub fn filter_descend(&mut self) -> usize {
        self.retain_monotonic(|kept, candidate| kept > candidate)
    }

    /// Walk from the tail towards the head, deleting each element for which
    /// `violates(kept, element)` holds against the closest kept element on
    /// its right.
    fn retain_monotonic<F>(&mut self, violates: F) -> usize
    where
        F: Fn(&str, &str) -> bool,
    {
        if self.list.is_empty() {
            return 0;
        }
        let mut cursor = self.list.cursor_back_mut();
        let (mut kept, mut deleted) = (1_usize, 0_usize);
        loop {
            let delete = match (cursor.current(), cursor.previous()) {
                (Some(current), Some(previous)) => violates(current.value(), previous.value()),
                _ => break,
            };
            if delete {
                cursor.backspace();
                deleted += 1;
            } else if cursor.move_prev().is_ok() {
                kept += 1;
            } else {
                break;
            }
        }
        trace!(kept, deleted, "filtered queue");
        kept
    }
}
