//! Greedy segmentation of glyph sequences into runs
//!
//! A single left-to-right pass over the input: at each position the
//! longest compound starting there is taken as one run, otherwise the
//! glyph at that position becomes a singleton run. No backtracking, so
//! a compound consumed at one position is never re-examined from inside.

use smallvec::SmallVec;
use tracing::trace;

use crate::index::CompoundIndex;
use crate::GlyphId;

/// Backing storage for run glyphs; inline up to typical ligature length
pub type GlyphVec = SmallVec<[GlyphId; 4]>;

/// How a run was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunKind {
    /// The run is a dictionary compound matched as a whole
    Compound,
    /// The run is a single glyph no compound started at
    Single,
}

/// One contiguous piece of a segmentation
///
/// Runs are non-empty and are emitted in input order; concatenating the
/// glyphs of all runs reproduces the segmented input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    glyphs: GlyphVec,
    kind: RunKind,
}

impl Run {
    /// Run covering a matched compound
    pub fn compound(glyphs: &[GlyphId]) -> Self {
        debug_assert!(!glyphs.is_empty());
        Self {
            glyphs: GlyphVec::from_slice(glyphs),
            kind: RunKind::Compound,
        }
    }

    /// Run covering a single unmatched glyph
    pub fn single(glyph: GlyphId) -> Self {
        Self {
            glyphs: smallvec::smallvec![glyph],
            kind: RunKind::Single,
        }
    }

    /// The glyphs this run covers
    pub fn glyphs(&self) -> &[GlyphId] {
        &self.glyphs
    }

    /// Number of glyphs in the run (always at least 1)
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Runs are never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// How this run was produced
    pub fn kind(&self) -> RunKind {
        self.kind
    }

    /// Whether the run came from the compound dictionary
    pub fn is_match(&self) -> bool {
        self.kind == RunKind::Compound
    }
}

/// Segment `glyphs` into compound and singleton runs.
///
/// Greedy longest-match-first: at every position the longest dictionary
/// compound starting there wins, even when a shorter compound is a
/// prefix of it. An empty input yields an empty segmentation. The same
/// input and index always produce the same runs, and the index may be
/// shared across threads segmenting different inputs concurrently.
pub fn segment(glyphs: &[GlyphId], index: &CompoundIndex) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut position = 0;

    while position < glyphs.len() {
        match index.longest_match_at(glyphs, position) {
            Some(compound) => {
                position += compound.len();
                runs.push(Run::compound(compound));
            }
            None => {
                runs.push(Run::single(glyphs[position]));
                position += 1;
            }
        }
    }

    trace!(glyphs = glyphs.len(), runs = runs.len(), "segmented glyph sequence");

    runs
}
