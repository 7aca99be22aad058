//! Compound dictionary index for longest-match lookup
//!
//! This module implements a compact trie over glyph sequences.
//! Nodes live in contiguous storage and are addressed by index, so a
//! lookup allocates nothing and touches O(match length) nodes.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{IndexError, Result};
use crate::GlyphId;

/// Trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: glyph id -> node index
    children: HashMap<GlyphId, u32>,
    /// Whether this node marks the end of a registered compound
    is_end: bool,
}

/// Immutable index over a dictionary of compound glyph sequences
///
/// Built once from the dictionary, then shared read-only across any
/// number of segmentation calls (the structure is `Send + Sync` and is
/// never mutated after [`build`](CompoundIndex::build) returns).
#[derive(Debug, Clone)]
pub struct CompoundIndex {
    /// All nodes in contiguous storage; index 0 is the root
    nodes: Vec<TrieNode>,
    /// Number of distinct compounds registered
    compounds: usize,
    /// Glyph count of the longest registered compound
    longest: usize,
}

impl CompoundIndex {
    /// Build an index from a dictionary of compound sequences.
    ///
    /// Duplicate sequences collapse to a single entry, and the iteration
    /// order of the dictionary has no effect on which matches the index
    /// reports. Fails with [`IndexError::EmptyCompound`] if any sequence
    /// is empty; in that case no index is produced at all.
    pub fn build<I>(compounds: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[GlyphId]>,
    {
        let mut index = Self {
            nodes: vec![TrieNode::default()],
            compounds: 0,
            longest: 0,
        };

        for compound in compounds {
            index.insert(compound.as_ref())?;
        }

        debug!(
            compounds = index.compounds,
            nodes = index.nodes.len(),
            longest = index.longest,
            "compound index built"
        );

        Ok(index)
    }

    /// Insert a single compound, extending the node array as needed
    fn insert(&mut self, compound: &[GlyphId]) -> Result<()> {
        if compound.is_empty() {
            return Err(IndexError::EmptyCompound);
        }

        let mut current = 0usize;
        for &glyph in compound {
            current = match self.nodes[current].children.get(&glyph) {
                Some(&next) => next as usize,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(glyph, next as u32);
                    next
                }
            };
        }

        if !self.nodes[current].is_end {
            self.nodes[current].is_end = true;
            self.compounds += 1;
            self.longest = self.longest.max(compound.len());
        }

        Ok(())
    }

    /// Number of distinct compounds in the index
    pub fn len(&self) -> usize {
        self.compounds
    }

    /// Whether the index contains no compounds
    pub fn is_empty(&self) -> bool {
        self.compounds == 0
    }

    /// Glyph count of the longest registered compound (0 when empty).
    ///
    /// Bounds the work of a single [`longest_match_at`](Self::longest_match_at)
    /// call.
    pub fn longest_len(&self) -> usize {
        self.longest
    }

    /// Find the longest compound starting at `position` in `glyphs`.
    ///
    /// Returns the matched glyphs as a subslice of the input, or `None`
    /// when no compound starts there (including when `position` is past
    /// the end of the input). When several registered compounds of
    /// different lengths match, the longest wins.
    pub fn longest_match_at<'g>(
        &self,
        glyphs: &'g [GlyphId],
        position: usize,
    ) -> Option<&'g [GlyphId]> {
        if position >= glyphs.len() {
            return None;
        }

        let mut current = 0usize;
        let mut best_len = None;

        for (depth, glyph) in glyphs[position..].iter().enumerate() {
            match self.nodes[current].children.get(glyph) {
                Some(&next) => {
                    current = next as usize;
                    if self.nodes[current].is_end {
                        best_len = Some(depth + 1);
                    }
                }
                None => break,
            }
        }

        best_len.map(|len| &glyphs[position..position + len])
    }
}
