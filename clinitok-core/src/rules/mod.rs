//! Boundary detectors and shape recognizers used by the scanner
//!
//! Every rule takes the cursor position (a character index) and returns
//! either a consumed length or an end index. "No match" is `None` and never
//! an error; the scanner falls through to the next rule.

pub mod contraction;
pub mod hyphen;
pub mod shapes;

use crate::types::{Shape, TokenKind};
use smallvec::SmallVec;

/// One token to emit, as a length from the current cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Length in characters
    pub len: usize,
    /// Token kind
    pub kind: TokenKind,
    /// Recognizer that produced the segment
    pub shape: Option<Shape>,
}

impl Segment {
    /// Segment without a shape
    #[inline]
    pub fn new(len: usize, kind: TokenKind) -> Self {
        Self {
            len,
            kind,
            shape: None,
        }
    }

    /// Segment produced by a recognizer
    #[inline]
    pub fn shaped(len: usize, kind: TokenKind, shape: Shape) -> Self {
        Self {
            len,
            kind,
            shape: Some(shape),
        }
    }
}

/// Output of one scanner step: one to three consecutive segments
pub type Segments = SmallVec<[Segment; 3]>;
