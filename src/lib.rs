//! Red-black tree ordered collections for Rust.
//!
//! This crate provides [`RbMap`] and [`RbSet`], ordered collections built on a single red-black
//! tree engine. Besides the familiar key-based API they expose the tree's *cursors*: stable,
//! copyable positions that can be stepped in either direction and used to erase elements.
//!
//! - [`find`](RbMap::find), [`begin`](RbMap::begin) and [`end`](RbMap::end) produce a [`Cursor`]
//! - [`successor`](RbMap::successor) / [`predecessor`](RbMap::predecessor) step it
//! - [`erase`](RbMap::erase) removes the element under it and returns a cursor to the element
//!   *before* it, so erase-and-continue loops never skip an element
//!
//! # Example
//!
//! ```
//! use redblack_index::RbMap;
//!
//! let mut scores = RbMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Inserting an existing key replaces the value, it never duplicates the key.
//! assert_eq!(scores.insert("Bob", 88), Some(85));
//! assert_eq!(scores.len(), 3);
//!
//! // Cursor-based erase returns the position before the erased element.
//! let carol = scores.find(&"Carol");
//! let before = scores.erase(carol)?;
//! assert_eq!(scores.get_at(before)?, (&"Bob", &88));
//!
//! // Stale cursors are reported, not followed.
//! assert_eq!(scores.get_at(carol), Err(redblack_index::Error::StaleCursor));
//! # Ok::<(), redblack_index::Error>(())
//! ```
//!
//! # Ordering
//!
//! Keys are arranged by a [`Compare`] strict weak ordering fixed when the collection is built.
//! [`Natural`] (the key's [`Ord`]) is the default; [`Reverse`] and plain closures work too.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Arena storage** - Nodes live in a slot arena addressed by handles; parent links are plain
//!   back-references, so there is no reference counting and no unsafe pointer graph
//! - **Guaranteed balance** - Height stays within `2 * log2(n + 1)` for any insertion order
//!
//! # Implementation
//!
//! Every element is a node colored red or black. Insertions link a red leaf and repair any
//! red-red edge by recoloring and at most two rotations; removals splice out a node with at most
//! one child (the element's successor when it has two) and repair a missing black by recoloring
//! and at most three rotations. The first and last nodes are cached so that both ends of the
//! collection are reachable in O(1).

#![cfg_attr(not(test), no_std)]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: Mutable iteration hands out disjoint borrows of arena slots, which needs a little unsafe.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod cursor;
mod error;
mod raw;

pub mod rb_map;
pub mod rb_set;

pub use compare::{Compare, Natural, Reverse};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use rb_map::RbMap;
pub use rb_set::RbSet;
