//! Source positions for AST nodes.
//!
//! A [`PositionInfo`] is an immutable span attached to every AST node. Offsets
//! are byte offsets into the UTF-8 source text (start inclusive, end
//! exclusive). Lines and columns are 1-indexed to match editor conventions.
//!
//! [`LineIndex`] converts byte offsets into line/column pairs and is what an
//! external parser (or a test) uses to stamp positions onto nodes.

use serde::{Deserialize, Serialize};

// ============================================================================
// PositionInfo
// ============================================================================

/// Immutable source span of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PositionInfo {
    /// Line of the first character (1-indexed).
    pub start_line: u32,
    /// Column of the first character (1-indexed, UTF-8 bytes).
    pub start_column: u32,
    /// Line of the last character (1-indexed).
    pub end_line: u32,
    /// Column just past the last character (1-indexed, UTF-8 bytes).
    pub end_column: u32,
    /// Byte offset of the first character (inclusive).
    pub start_offset: usize,
    /// Byte offset just past the last character (exclusive).
    pub end_offset: usize,
}

impl PositionInfo {
    /// Create a new position.
    ///
    /// # Panics
    /// Panics if `start_offset > end_offset`.
    pub fn new(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        assert!(
            start_offset <= end_offset,
            "position start ({}) must be <= end ({})",
            start_offset,
            end_offset
        );
        PositionInfo {
            start_line,
            start_column,
            end_line,
            end_column,
            start_offset,
            end_offset,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    /// Check if this span contains another span entirely.
    pub fn contains(&self, other: &PositionInfo) -> bool {
        self.start_offset <= other.start_offset && other.end_offset <= self.end_offset
    }

    /// Empty span at this span's start.
    pub fn collapse_to_start(&self) -> PositionInfo {
        PositionInfo {
            end_line: self.start_line,
            end_column: self.start_column,
            end_offset: self.start_offset,
            ..*self
        }
    }

    /// Empty span at this span's end.
    pub fn collapse_to_end(&self) -> PositionInfo {
        PositionInfo {
            start_line: self.end_line,
            start_column: self.end_column,
            start_offset: self.end_offset,
            ..*self
        }
    }

    /// The source text covered by this span, if it lies on char boundaries
    /// inside `text`.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.start_offset..self.end_offset)
    }
}

// ============================================================================
// LineIndex
// ============================================================================

/// Precomputed index of line start offsets for fast byte-to-line-col conversion.
///
/// Build once per file with O(n), then each lookup is O(log n) via binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// line_starts[0] = 0 (line 1), line_starts[1] = first newline + 1 (line 2), etc.
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Build a line index from file content.
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(offset + 1);
            }
        }
        LineIndex {
            line_starts,
            len: content.len(),
        }
    }

    /// Convert a byte offset to (line, col), both 1-indexed.
    ///
    /// Offsets past the end of the content are clamped to the end.
    pub fn line_col(&self, byte_offset: usize) -> (u32, u32) {
        let byte_offset = byte_offset.min(self.len);
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let col = byte_offset - line_start + 1;
        ((line_idx + 1) as u32, col as u32)
    }

    /// Build a [`PositionInfo`] for the byte range `start..end`.
    pub fn position(&self, start: usize, end: usize) -> PositionInfo {
        let (start_line, start_column) = self.line_col(start);
        let (end_line, end_column) = self.line_col(end);
        PositionInfo::new(
            start_line,
            start_column,
            end_line,
            end_column,
            start.min(self.len),
            end.min(self.len),
        )
    }

    /// Number of lines in the indexed content.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
