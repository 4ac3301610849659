//! A queue of owned strings, built on a cyclic doubly-linked list.
//!
//! The [`Queue`] supports insertion and removal at both ends in constant
//! time, plus the usual linked-list exercises on top: deleting the middle
//! element, dropping runs of duplicates, reversal (whole or in groups of
//! *k*), a stable merge sort, merging sorted queues and filtering to a
//! monotonic sequence.
//!
//! ```
//! use string_queue::Queue;
//!
//! let mut queue = Queue::new();
//! for value in ["dolphin", "bear", "gerbil", "bear"] {
//!     queue.insert_tail(value)?;
//! }
//! queue.sort(false);
//! assert!(queue.delete_adjacent_duplicates());
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["dolphin", "gerbil"]);
//!
//! let head = queue.remove_head().unwrap();
//! assert_eq!(head.value(), "dolphin");
//! # Ok::<(), string_queue::QueueError>(())
//! ```
//!
//! Callers that model an absent queue (a null handle) use the functions in
//! [`compat`], which accept `Option`s and turn a missing queue into a no-op.
//!
//! # Memory Layout
//!
//! The queue sits on the generic [`List`]. Its nodes live in a slab arena
//! owned by the list and refer to each other by arena key:
//! ```text
//!          ┌────────────────────────────────────────────────────────┐
//!          ↓                                                        │
//!    ╔═══════════╗           ╔═══════════╗                    ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────→ ║   next    ║ ─┐
//!    ╟───────────╢           ╟───────────╢                    ╟───────────╢  │
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──── ║   prev    ║  │
//! │  ╟───────────╢           ╟───────────╢                    ╟───────────╢  │
//! │  ║ element T ║           ║ element T ║                    ║ element T ║  │
//! │  ╚═══════════╝           ╚═══════════╝                    ╚═══════════╝  │
//! │    slot a                  slot b                           slot z       │
//! │                                                                          │
//! │  ╔═══════════╗  ghost.next = a                                           │
//! └→ ║   ghost   ║  ghost.prev = z  ←────────────────────────────────────────┘
//!    ╟───────────╢
//!    ║   nodes   ║  Slab<Node<T>>
//!    ╚═══════════╝
//!        List
//! ```
//! The ghost node carries no element and is addressed by a reserved key that
//! the slab never hands out. In an empty list both ghost links point back at
//! the ghost itself. Removing an element frees its slot for the next
//! insertion, and structural operations only rewrite `next`/`prev` keys.
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] walk the list in both directions. In a list
//! with length *n* there are *n* + 1 cursor positions, the ghost node being
//! the extra one. [`CursorMut`] can [`insert`] before the cursor and
//! [`remove`] or [`backspace`] around it.
//!
//! ```
//! use string_queue::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//! let mut cursor = list.cursor_start_mut();
//! cursor.insert(0);
//! assert_eq!(cursor.current(), Some(&1));
//! assert!(cursor.move_next().is_ok());
//! assert_eq!(cursor.remove(), Some(2));
//! assert_eq!(cursor.backspace(), Some(1));
//! assert_eq!(Vec::from_iter(list), vec![0, 3, 4]);
//! ```
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace

pub mod compat;
pub mod list;

mod element;
mod error;
mod queue;

pub use element::Element;
pub use error::{QueueError, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;
pub use queue::Queue;
