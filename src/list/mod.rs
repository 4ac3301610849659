use std::fmt::{Debug, Formatter};

use slab::Slab;

use crate::list::cursor::{Cursor, CursorMut};
use crate::list::iterator::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// Key of the ghost node.
///
/// The ghost node is never stored in the arena, so this key can not collide
/// with a slot handed out by the slab.
pub(crate) const GHOST: usize = usize::MAX;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic list.
/// It allows inserting, removing elements at any given position in constant time.
/// In compromise, accessing or mutating elements at any position take *O*(*n*) time.
///
/// Nodes are kept in a per-list arena and refer to each other by their arena
/// keys, so relinking never touches a raw pointer.
///
/// The `List` contains:
/// - the links of the ghost node, which closes the list into a cycle and holds
///   no payload;
/// - the arena of element nodes.
///
/// The list keeps no length counter: [`List::len`] walks the list.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: Links,
    nodes: Slab<Node<T>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

pub(crate) struct Node<T> {
    pub(crate) links: Links,
    pub(crate) element: T,
}

/// Nodes fragment detached from a list, used in list splitting or
/// splicing.
///
/// The nodes still live in the arena of the list they were cut from.
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DetachedNodes {
    pub(crate) front: usize,
    pub(crate) back: usize,
}

// private methods
impl<T> List<T> {
    fn links(&self, key: usize) -> &Links {
        if key == GHOST {
            &self.ghost
        } else {
            &self.nodes[key].links
        }
    }

    fn links_mut(&mut self, key: usize) -> &mut Links {
        if key == GHOST {
            &mut self.ghost
        } else {
            &mut self.nodes[key].links
        }
    }

    pub(crate) fn next_of(&self, key: usize) -> usize {
        self.links(key).next
    }

    pub(crate) fn prev_of(&self, key: usize) -> usize {
        self.links(key).prev
    }

    pub(crate) fn front_node(&self) -> usize {
        self.ghost.next
    }

    pub(crate) fn back_node(&self) -> usize {
        self.ghost.prev
    }

    /// Returns the element of a non-ghost node.
    pub(crate) fn element(&self, key: usize) -> &T {
        debug_assert_ne!(key, GHOST, "the ghost node holds no element");
        &self.nodes[key].element
    }

    pub(crate) fn connect(&mut self, prev: usize, next: usize) {
        self.links_mut(prev).next = next;
        self.links_mut(next).prev = prev;
    }

    pub(crate) fn attach_node(&mut self, prev: usize, next: usize, element: T) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.insert(Node::new_detached(element));
        self.connect(prev, node);
        self.connect(node, next);
        node
    }

    pub(crate) fn detach_node(&mut self, node: usize) -> T {
        debug_assert_ne!(node, GHOST, "cannot detach the ghost node");
        let Links { next, prev } = *self.links(node);
        self.connect(prev, next);
        self.nodes.remove(node).element
    }

    pub(crate) fn detach_nodes(&mut self, front: usize, back: usize) -> DetachedNodes {
        self.connect(self.prev_of(front), self.next_of(back));
        DetachedNodes::new(front, back)
    }

    pub(crate) fn attach_nodes(&mut self, prev: usize, next: usize, detached: DetachedNodes) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, detached.front);
        self.connect(detached.back, next);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, detached.front);
            self.assert_adjacent(detached.back, next);
        }
    }

    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_nodes(self.front_node(), self.back_node()))
    }

    /// Move every element of `other` into the arena of `self`, linked as a
    /// detached chain in their original order. `other` becomes empty.
    ///
    /// Arenas are per list, so this takes one slot per element: *O*(*m*)
    /// for *m* elements of `other`. The slots are reserved before any
    /// element is moved.
    pub(crate) fn adopt(&mut self, other: &mut List<T>) -> Option<DetachedNodes> {
        self.nodes.reserve(other.len());
        let mut chain: Option<DetachedNodes> = None;
        while let Some(element) = other.pop_front() {
            let node = self.nodes.insert(Node::new_detached(element));
            chain = Some(match chain {
                None => DetachedNodes::new(node, node),
                Some(chain) => {
                    self.connect(chain.back, node);
                    DetachedNodes::new(chain.front, node)
                }
            });
        }
        chain
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.next_of(prev), next);
        assert_eq!(self.prev_of(next), prev);
    }
}

impl<T> List<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: Links::ghost(),
            nodes: Slab::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == GHOST
    }

    /// Returns `true` if the list holds exactly one element.
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Counts the elements by walking the list.
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn len(&self) -> usize {
        let len = self.iter().count();
        debug_assert_eq!(len, self.nodes.len(), "unreachable nodes in the arena");
        len
    }

    /// Removes every element, front to back.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, GHOST)
    }

    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.front_node();
        CursorMut::new(self, current)
    }

    /// Creates a mutable cursor at the last element, or at the ghost node
    /// if the list is empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.back_node();
        CursorMut::new(self, current)
    }

    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, GHOST)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Links {
    fn ghost() -> Self {
        Links {
            next: GHOST,
            prev: GHOST,
        }
    }
}

impl<T> Node<T> {
    /// Creates a node whose links are not yet meaningful; they are set when
    /// the node is connected.
    pub(crate) fn new_detached(element: T) -> Self {
        Node {
            links: Links::ghost(),
            element,
        }
    }
}

impl DetachedNodes {
    pub(crate) fn new(front: usize, back: usize) -> Self {
        Self { front, back }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
