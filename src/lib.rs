//! A general-purpose utility library: small, independent helpers for collections, I/O and
//! strings, in the spirit of the various "commons" libraries.
//!
//! # Purpose
//! Most projects end up re-writing the same handful of helpers: an ordered map here, a buffered
//! copy loop there, a `.properties` parser for some legacy config, a case-insensitive lookup for
//! header-ish data. This crate collects those pieces in one place so they can be written once,
//! tested properly and reused. Every module stands alone; nothing here is a framework.
//!
//! # Method
//! The data structures ([`ArrayMap`](collections::ArrayMap), [`RingList`](collections::RingList),
//! [`LruMap`](collections::LruMap)) are written from scratch rather than wrapping `std`
//! equivalents, because each provides a guarantee `std` doesn't: positional access on a hash map,
//! a sentinel ring with no boundary cases, and access-ordered eviction. The I/O helpers take the
//! opposite approach and stay as thin as possible over [`std::io`] and [`std::fs`].
//!
//! # Error Handling
//! Fallible operations return strongly typed errors: small dedicated structs or enums
//! implementing [`Error`](std::error::Error), using static dispatch rather than boxed trait
//! objects. Panics are reserved for programmer error (indexing out of bounds), and every
//! panicking accessor has a `try_` sibling returning [`Option`].
//!
//! # Features
//! Each collection and the `io`/`lang` packages sit behind a feature so dependants can take only
//! what they use. Zip archive traversal is additionally gated behind `archive`, which pulls in
//! the `zip` crate; everything else builds with no heavyweight dependencies.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "io")]
pub mod io;
#[cfg(feature = "lang")]
pub mod lang;

pub(crate) mod util;
