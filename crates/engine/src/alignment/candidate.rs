use std::fmt;

use crate::base::{Residue, Sequence};

/// One full multiple alignment under evaluation (a "bacterium").
///
/// Rows are index-aligned to the original input order. Rows may have
/// different lengths between gap insertion and padding; after
/// [`Candidate::pad`] every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    rows: Vec<Sequence>,
}

impl Candidate {
    /// Create a candidate from its rows.
    pub fn new(rows: Vec<Sequence>) -> Self {
        Self { rows }
    }

    /// Number of rows (input sequences).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return true if the candidate has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Sequence] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Sequence] {
        &mut self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.rows.get(index)
    }

    /// Length of the longest row.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Sequence::len).max().unwrap_or(0)
    }

    /// Column count. Only meaningful once the candidate is padded.
    pub fn columns(&self) -> usize {
        self.max_row_len()
    }

    /// Return true if every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.max_row_len();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Right-pad every shorter row with gaps up to the longest row.
    pub fn pad(&mut self) {
        let width = self.max_row_len();
        for row in &mut self.rows {
            row.pad_to(width);
        }
    }

    /// Symbols at `column`, one per row. Rows too short to reach the column
    /// contribute a gap.
    pub fn column(&self, column: usize) -> Vec<Residue> {
        self.rows
            .iter()
            .map(|row| row.get(column).unwrap_or(Residue::GAP))
            .collect()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
