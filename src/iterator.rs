//! Provides Trie iterators.
//!
use crate::trie::{Node, Trie};

/// Iterator over the words stored in a Trie.
///
/// Words are produced depth first, visiting children in insertion
/// order, so the sequence is stable across repr round trips.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<(&'a Node, String)>,
}

impl Trie {
    /// Create an iterator over every stored word.
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![(&self.root, String::new())],
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, word)) = self.stack.pop() {
            // Reversed push so the first-inserted child pops first
            for (&ch, child) in node.children.iter().rev() {
                let mut next = word.clone();
                next.push(ch);
                self.stack.push((child, next));
            }
            if node.is_terminal {
                return Some(word);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_iterates_over_empty_trie() {
        let trie = Trie::new();
        assert_eq!(trie.words().count(), 0);
    }

    #[test]
    fn it_yields_words_in_insertion_order() {
        let mut trie = Trie::new();
        for word in ["zebra", "ant", "zeal", "antler"] {
            trie.add(word);
        }
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["zebra", "zeal", "ant", "antler"]);
    }

    #[test]
    fn it_yields_prefix_words_before_longer_words() {
        let mut trie = Trie::new();
        trie.add("inn");
        trie.add("in");
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["in", "inn"]);
    }

    #[test]
    fn it_finds_every_added_word() {
        let mut trie = Trie::new();
        let input = ["code", "coder", "coding", "codec", "a", "abz"];
        for word in input {
            trie.add(word);
        }
        let mut words: Vec<String> = trie.words().collect();
        words.sort();
        let mut expected: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(words, expected);
    }
}
