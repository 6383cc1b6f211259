//! Provides the plain nested representation of a trie.
//!
//! The representation is the crate's only boundary artifact: a tree of
//! keyed maps suitable for encoding with any structured text format.
//! Child order is part of the contract, so children live in an
//! [`indexmap::IndexMap`] which iterates in insertion order and
//! restores that order on the way back in.
//!
//! With the `serde` feature enabled the types here derive `Serialize`
//! and `Deserialize`; the terminal flag is spelled `isTerminal` on the
//! wire.
//!
//! Example:
//! ```
//! use chartrie::repr::TrieRepr;
//! use chartrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("hi");
//!
//! let encoded = serde_json::to_string(&trie.to_repr()).expect("serializing");
//! let decoded: TrieRepr = serde_json::from_str(&encoded).expect("deserializing");
//! let copy = Trie::from_repr(decoded).expect("well formed");
//! assert!(copy.search("hi"));
//! ```

use indexmap::IndexMap;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// One node of the representation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct NodeRepr {
    /// The node's character, as a string. Empty only for the root.
    pub label: String,
    /// Child representations keyed by character, in insertion order.
    pub children: IndexMap<char, NodeRepr>,
    /// Whether a word ends exactly at this node.
    pub is_terminal: bool,
}

/// Whole-trie representation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct TrieRepr {
    /// Representation of the root node.
    pub root: NodeRepr,
}

/// Failures rebuilding a trie from a representation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReprError {
    /// A non-root node's label held zero or several characters.
    #[error("node label {label:?} is not a single character")]
    LabelNotChar { label: String },
    /// A child's stored label disagreed with its map key.
    #[error("child stored under key {key:?} carries label {label:?}")]
    LabelMismatch { key: char, label: String },
    /// The root node carried a non-empty label.
    #[error("root label must be empty, found {label:?}")]
    RootLabel { label: String },
}
