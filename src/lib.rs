//! Provides a simple character Trie for storing words, supporting
//! insertion, prefix queries, exact membership queries and lossless
//! structural serialization.
//!
//! Each node holds a single `char` label, a terminal flag marking the
//! end of a stored word, and its children keyed by character in
//! insertion order. Queries walk one character at a time from a root
//! node representing the empty prefix.
//!
//! The whole trie converts to and from a plain nested representation,
//! [`crate::repr::TrieRepr`], which round-trips structure and child
//! order exactly. Enable the `serde` feature to encode that
//! representation with any serde format.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * representation : [`crate::repr`]
//! * iteration : [`crate::iterator`]
//!
//! Typical usages for this data structure:
//!  - Prefix matching words
//!  - Autocomplete dictionaries
//!  - Exchanging a word set as a plain nested structure
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod iterator;

pub mod repr;

pub mod trie;
