//! Compound glyph sequence segmentation for glyph substitution pipelines
//!
//! A shaping pipeline that applies glyph substitution needs to know, for
//! an input sequence of glyph ids, which contiguous groups form compounds
//! the substitution tables know about. This crate does exactly that one
//! job: it partitions a glyph sequence into consecutive, non-overlapping
//! runs, where each run is either a dictionary compound matched at that
//! position or a single glyph no compound starts at. The runs cover the
//! input exactly once, in order, with nothing dropped or duplicated.
//!
//! Matching is greedy longest-match-first over a trie built once from
//! the compound dictionary. The index is immutable after construction
//! and can be shared across threads; building the dictionary itself
//! (e.g. from font tables) and applying substitutions to the resulting
//! runs are the caller's business.
//!
//! # Example
//!
//! ```rust
//! use glyphseg::{segment, CompoundIndex};
//!
//! // Dictionary of compound glyph sequences, built once
//! let index = CompoundIndex::build([vec![12, 13], vec![12, 13, 14]]).unwrap();
//!
//! // Segment any number of inputs against the shared index
//! let runs = segment(&[12, 13, 14, 20], &index);
//!
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].glyphs(), &[12, 13, 14]); // longest match wins
//! assert_eq!(runs[1].glyphs(), &[20]);
//! assert!(runs[0].is_match() && !runs[1].is_match());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod segmenter;

/// Glyph identifier as used by font tables; opaque to this crate
pub type GlyphId = u32;

pub use error::{IndexError, Result};
pub use index::CompoundIndex;
pub use segmenter::{segment, GlyphVec, Run, RunKind};
