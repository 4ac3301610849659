use std::fmt;
use std::iter::FromIterator;

use tracing::debug;

use crate::element::Element;
use crate::error::Result;
use crate::list::List;

mod order;
mod transform;

/// A queue of owned strings.
///
/// The queue is the ghost node of a cyclic doubly-linked list plus the
/// elements reachable from it, in insertion order. It owns every element;
/// removed elements are handed over to the caller, and dropping the queue
/// releases whatever is still inside.
///
/// A queue is a plain single-threaded value: callers sharing one across
/// threads have to lock around the whole queue.
///
/// # Examples
///
/// ```
/// use string_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b").unwrap();
/// queue.insert_tail("c").unwrap();
/// queue.insert_head("a").unwrap();
/// assert_eq!(queue.size(), 3);
///
/// let mut buf = [0u8; 8];
/// let head = queue.remove_head_into(&mut buf).unwrap();
/// assert_eq!(head.value(), "a");
/// assert_eq!(&buf[..2], b"a\0");
/// assert_eq!(queue.remove_tail().unwrap().value(), "c");
/// ```
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Queue {
    list: List<Element>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a copy of `value` at the head of the queue.
    ///
    /// Only the copy of `value` can fail to allocate; on that error the
    /// queue is left untouched. Node storage follows the global allocator
    /// and aborts when memory runs out.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let element = Self::new_element(value)?;
        self.list.push_front(element);
        Ok(())
    }

    /// Insert a copy of `value` at the tail of the queue.
    ///
    /// Only the copy of `value` can fail to allocate; on that error the
    /// queue is left untouched. Node storage follows the global allocator
    /// and aborts when memory runs out.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let element = Self::new_element(value)?;
        self.list.push_back(element);
        Ok(())
    }

    fn new_element(value: &str) -> Result<Element> {
        Element::try_new(value).map_err(|error| {
            debug!(%error, len = value.len(), "queue insertion failed");
            error
        })
    }

    /// Detach the head element and hand it to the caller.
    pub fn remove_head(&mut self) -> Option<Element> {
        self.list.pop_front()
    }

    /// Detach the tail element and hand it to the caller.
    pub fn remove_tail(&mut self) -> Option<Element> {
        self.list.pop_back()
    }

    /// Like [`Queue::remove_head`], also copying the value into `buf` as a
    /// NUL-terminated string (see [`Element::copy_to`]).
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove_head()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Like [`Queue::remove_tail`], also copying the value into `buf` as a
    /// NUL-terminated string (see [`Element::copy_to`]).
    pub fn remove_tail_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove_tail()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Number of elements, counted by walking the queue.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn head(&self) -> Option<&str> {
        self.list.front().map(Element::value)
    }

    pub fn tail(&self) -> Option<&str> {
        self.list.back().map(Element::value)
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.list.iter().map(Element::value)
    }

    /// The elements of the queue, head to tail.
    pub fn elements(&self) -> &List<Element> {
        &self.list
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(Element::from).collect()
    }
}

impl FromIterator<String> for Queue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        iter.into_iter().map(Element::from).collect()
    }
}

impl FromIterator<Element> for Queue {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            list: List::from_iter(iter),
        }
    }
}

impl IntoIterator for Queue {
    type Item = Element;
    type IntoIter = crate::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

#[cfg(test)]
pub(crate) fn values(queue: &Queue) -> Vec<&str> {
    queue.iter().collect()
}

/// Print the queue's trace events when running tests with `RUST_LOG` set.
#[cfg(test)]
pub(crate) fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "string_queue=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
