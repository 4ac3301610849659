//! Nullable-handle flavour of the queue API.
//!
//! Every function takes the queue as an `Option`. A missing queue is never
//! an error: the call changes nothing and reports `false`, `0` or `None`.
//! Counts are `usize` and `k` is signed, so callers holding C-style values
//! can pass them through unchanged.
//!
//! ```
//! use string_queue::compat::*;
//!
//! let mut queue = q_new();
//! assert!(q_insert_tail(queue.as_mut(), "kiwi"));
//! assert!(!q_insert_tail(None, "kiwi"));
//! assert_eq!(q_size(queue.as_ref()), 1);
//! assert_eq!(q_size(None), 0);
//! q_free(queue);
//! ```

use std::convert::TryFrom;

use crate::element::Element;
use crate::queue::Queue;

pub fn q_new() -> Option<Queue> {
    Some(Queue::new())
}

/// Release the queue and every element still in it.
pub fn q_free(queue: Option<Queue>) {
    drop(queue);
}

pub fn q_release_element(element: Element) {
    drop(element);
}

pub fn q_insert_head(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.map_or(false, |queue| queue.insert_head(value).is_ok())
}

pub fn q_insert_tail(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.map_or(false, |queue| queue.insert_tail(value).is_ok())
}

/// Remove the head element, copying its value into `buf` when one is given.
pub fn q_remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    let element = queue?.remove_head()?;
    if let Some(buf) = buf {
        element.copy_to(buf);
    }
    Some(element)
}

/// Remove the tail element, copying its value into `buf` when one is given.
pub fn q_remove_tail(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    let element = queue?.remove_tail()?;
    if let Some(buf) = buf {
        element.copy_to(buf);
    }
    Some(element)
}

pub fn q_size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

pub fn q_delete_mid(queue: Option<&mut Queue>) -> bool {
    queue.map_or(false, Queue::delete_middle)
}

pub fn q_delete_dup(queue: Option<&mut Queue>) -> bool {
    queue.map_or(false, Queue::delete_adjacent_duplicates)
}

pub fn q_swap(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.swap_pairs();
    }
}

pub fn q_reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Reverse groups of `k`; a non-positive `k` does nothing.
pub fn q_reverse_k(queue: Option<&mut Queue>, k: i32) {
    if let (Some(queue), Ok(k)) = (queue, usize::try_from(k)) {
        queue.reverse_in_groups(k);
    }
}

pub fn q_sort(queue: Option<&mut Queue>, descend: bool) {
    if let Some(queue) = queue {
        queue.sort(descend);
    }
}

pub fn q_ascend(queue: Option<&mut Queue>) -> usize {
    queue.map_or(0, Queue::filter_ascend)
}

pub fn q_descend(queue: Option<&mut Queue>) -> usize {
    queue.map_or(0, Queue::filter_descend)
}

/// Merge `other` into `queue`; both must be present, otherwise nothing
/// happens and 0 is returned.
pub fn q_merge_two(queue: Option<&mut Queue>, other: Option<&mut Queue>, descend: bool) -> usize {
    match (queue, other) {
        (Some(queue), Some(other)) => queue.merge_two_sorted(other, descend),
        _ => 0,
    }
}

pub fn q_merge(queues: Option<&mut [Queue]>, descend: bool) -> usize {
    queues.map_or(0, |queues| Queue::merge_all(queues, descend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::{init_tracing, values};
    use std::iter::FromIterator;

    #[test]
    fn absent_queue_is_a_no_op() {
        assert!(!q_insert_head(None, "a"));
        assert!(!q_insert_tail(None, "a"));
        let mut buf = [0xff_u8; 4];
        assert!(q_remove_head(None, Some(&mut buf[..])).is_none());
        assert!(q_remove_tail(None, Some(&mut buf[..])).is_none());
        assert_eq!(buf, [0xff; 4]);
        assert_eq!(q_size(None), 0);
        assert!(!q_delete_mid(None));
        assert!(!q_delete_dup(None));
        q_swap(None);
        q_reverse(None);
        q_reverse_k(None, 3);
        q_sort(None, false);
        assert_eq!(q_ascend(None), 0);
        assert_eq!(q_descend(None), 0);
        assert_eq!(q_merge(None, false), 0);
        q_free(None);

        let mut queue = Queue::from_iter(["a"]);
        assert_eq!(q_merge_two(Some(&mut queue), None, false), 0);
        assert_eq!(q_merge_two(None, Some(&mut queue), false), 0);
        assert_eq!(values(&queue), ["a"]);
    }

    #[test]
    fn empty_queue_results() {
        let mut queue = q_new();
        assert!(q_remove_head(queue.as_mut(), None).is_none());
        assert!(q_remove_tail(queue.as_mut(), None).is_none());
        assert!(!q_delete_mid(queue.as_mut()));
        assert!(!q_delete_dup(queue.as_mut()));
        assert_eq!(q_ascend(queue.as_mut()), 0);
        assert_eq!(q_descend(queue.as_mut()), 0);
        assert_eq!(q_size(queue.as_ref()), 0);
    }

    #[test]
    fn classic_session() {
        init_tracing();
        let mut queue = q_new();
        for value in ["dolphin", "bear", "gerbil", "bear", "meerkat"] {
            assert!(q_insert_tail(queue.as_mut(), value));
        }
        assert!(q_insert_head(queue.as_mut(), "zebra"));
        assert_eq!(q_size(queue.as_ref()), 6);

        q_sort(queue.as_mut(), false);
        assert!(q_delete_dup(queue.as_mut()));
        q_reverse_k(queue.as_mut(), 2);
        q_reverse_k(queue.as_mut(), -1);
        q_reverse_k(queue.as_mut(), 0);

        let mut buf = [0_u8; 4];
        let element = q_remove_head(queue.as_mut(), Some(&mut buf[..])).unwrap();
        assert_eq!(element.value(), "gerbil");
        assert_eq!(&buf, b"ger\0");
        q_release_element(element);

        q_swap(queue.as_mut());
        q_reverse(queue.as_mut());
        assert_eq!(values(queue.as_ref().unwrap()), ["meerkat", "dolphin", "zebra"]);
        assert!(q_delete_mid(queue.as_mut()));
        let tail = q_remove_tail(queue.as_mut(), None).unwrap();
        assert_eq!(tail.value(), "zebra");
        assert_eq!(values(queue.as_ref().unwrap()), ["meerkat"]);
        q_free(queue);
    }

    #[test]
    fn merges() {
        let mut first = Queue::from_iter(["b", "d"]);
        let mut second = Queue::from_iter(["a", "c"]);
        assert_eq!(q_merge_two(Some(&mut first), Some(&mut second), false), 4);
        assert_eq!(values(&first), ["a", "b", "c", "d"]);

        let mut queues = vec![first, Queue::from_iter(["e"])];
        assert_eq!(q_merge(Some(&mut queues[..]), false), 5);
        assert_eq!(q_ascend(Some(&mut queues[0])), 5);
        assert_eq!(q_descend(Some(&mut queues[0])), 1);
    }
}
