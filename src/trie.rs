//! Provides a Trie keyed by individual characters. Words are stored one
//! `char` per node; prefix and membership queries walk the same path of
//! nodes from the root.
//!
//! The whole structure converts losslessly to and from a plain nested
//! representation (see [`crate::repr`]), so a trie can be exchanged
//! through any structured text format and rebuilt with child order
//! intact.
//!
//! Example 1
//! ```
//! use chartrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("cart");
//!
//! assert!(trie.search("cart"));
//! assert!(trie.starts_with("car"));
//! // "car" is a prefix of a stored word, not a stored word itself
//! assert!(!trie.search("car"));
//! ```
//!
//! Example 2
//! ```
//! use chartrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("cat");
//! trie.add("car");
//!
//! let repr = trie.to_repr();
//! let copy = Trie::from_repr(repr).expect("repr is well formed");
//! assert!(copy.search("cat"));
//! assert!(copy.search("car"));
//! assert_eq!(trie, copy);
//! ```
//!
//! Typical usages for this data structure:
//!  - Prefix matching words
//!  - Autocomplete dictionaries
//!  - Shipping a word set as a plain nested structure
//!  - ...

use indexmap::IndexMap;

use crate::repr::{NodeRepr, ReprError, TrieRepr};

/// Stores one character's worth of trie state and its subtree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub(crate) label: Option<char>,
    pub(crate) is_terminal: bool,
    pub(crate) children: IndexMap<char, Node>,
}

impl Node {
    /// Create a new node with no children. The root is the only node
    /// with a label of `None`.
    pub fn new(label: Option<char>, is_terminal: bool) -> Self {
        Self {
            label,
            is_terminal,
            ..Default::default()
        }
    }

    /// The character this node is stored under, `None` for the root.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Does a word end exactly at this node?
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Get a reference to the child stored under `ch`.
    pub fn child(&self, ch: char) -> Option<&Node> {
        self.children.get(&ch)
    }

    /// Store `child` under `ch`. Any subtree already stored there is
    /// replaced and dropped, so callers inserting new children should
    /// check [`Node::child`] first.
    pub fn set_child(&mut self, ch: char, child: Node) {
        self.children.insert(ch, child);
    }

    /// Convert this node and its whole subtree into the plain nested
    /// representation, children in insertion order.
    pub fn to_repr(&self) -> NodeRepr {
        NodeRepr {
            label: self.label.map(String::from).unwrap_or_default(),
            children: self
                .children
                .iter()
                .map(|(&ch, child)| (ch, child.to_repr()))
                .collect(),
            is_terminal: self.is_terminal,
        }
    }

    /// Rebuild a node and its whole subtree from a representation,
    /// restoring children in the order the representation yields them.
    ///
    /// Fails if any label is more than one character long, or if a
    /// child's stored label disagrees with the key it is stored under.
    pub fn from_repr(repr: NodeRepr) -> Result<Self, ReprError> {
        let label = {
            let mut chars = repr.label.chars();
            match (chars.next(), chars.next()) {
                (None, _) => None,
                (Some(ch), None) => Some(ch),
                _ => {
                    return Err(ReprError::LabelNotChar {
                        label: repr.label.clone(),
                    })
                }
            }
        };
        let mut node = Node::new(label, repr.is_terminal);
        for (ch, child_repr) in repr.children {
            let child = Node::from_repr(child_repr)?;
            if child.label != Some(ch) {
                return Err(ReprError::LabelMismatch {
                    key: ch,
                    label: child.label.map(String::from).unwrap_or_default(),
                });
            }
            node.set_child(ch, child);
        }
        Ok(node)
    }
}

/// Stores words as paths of single-character nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: Node,
}

impl Trie {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self {
            root: Node::new(None, false),
        }
    }

    /// Insert a word into the Trie, creating nodes lazily along its
    /// path. Inserting the empty string is a no-op; re-inserting a word
    /// changes nothing.
    ///
    /// Any `char` is accepted, there is no case or Unicode
    /// normalization.
    pub fn add(&mut self, word: &str) {
        let mut node = &mut self.root;
        let mut chars = word.chars().peekable();
        while let Some(ch) = chars.next() {
            let last = chars.peek().is_none();
            let child = node
                .children
                .entry(ch)
                .or_insert_with(|| Node::new(Some(ch), last));
            if last {
                // Never cleared: a shorter word stays searchable when a
                // longer word sharing its prefix is added later.
                child.is_terminal = true;
            }
            node = child;
        }
    }

    /// Does any stored word start with the supplied prefix?
    ///
    /// The empty prefix always matches, even on an empty Trie.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Was the supplied word itself stored?
    ///
    /// The empty string is never stored, so `search("")` is always
    /// false.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).map_or(false, |node| node.is_terminal)
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.root = Node::new(None, false);
    }

    /// Convert the whole Trie into the plain nested representation.
    pub fn to_repr(&self) -> TrieRepr {
        TrieRepr {
            root: self.root.to_repr(),
        }
    }

    /// Rebuild a Trie from a representation. The representation's root
    /// must carry an empty label; node shape is validated as in
    /// [`Node::from_repr`].
    pub fn from_repr(repr: TrieRepr) -> Result<Self, ReprError> {
        if !repr.root.label.is_empty() {
            return Err(ReprError::RootLabel {
                label: repr.root.label,
            });
        }
        Ok(Self {
            root: Node::from_repr(repr.root)?,
        })
    }

    fn walk(&self, word: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
