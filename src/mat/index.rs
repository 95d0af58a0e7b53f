use crate::error::{MatError, OutOfBoundsError};

/// Index into matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatIndex {
	pub row: usize,
	pub col: usize,
}

impl MatIndex {
	pub const fn new(row: usize, col: usize) -> Self {
		Self { row, col }
	}
}

impl From<(usize, usize)> for MatIndex {
	fn from(value: (usize, usize)) -> Self {
		let (row, col) = value;
		Self {
			row,
			col,
		}
	}
}

/// Shape of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatDims {
	/// Number of rows in matrix
	pub rows: usize,
	/// Number of columns in matrix
	pub cols: usize,
}

impl MatDims {
	/// Create dimensions, rejecting empty shapes
	pub const fn new(rows: usize, cols: usize) -> Result<Self, MatError> {
		if rows == 0 || cols == 0 {
			Err(MatError::InvalidShape { rows, cols })
		} else {
			Ok(Self { rows, cols })
		}
	}

	/// Square dimensions
	pub const fn square(n: usize) -> Result<Self, MatError> {
		Self::new(n, n)
	}

	/// Dimensions with rows and columns swapped
	#[inline]
	pub const fn transposed(&self) -> Self {
		Self {
			rows: self.cols,
			cols: self.rows,
		}
	}

	/// Dimensions of a minor (one row and one column removed)
	#[inline]
	pub const fn minor(&self) -> Result<Self, MatError> {
		Self::new(self.rows.saturating_sub(1), self.cols.saturating_sub(1))
	}

	/// Check if the element at `index` is contained within these dimensions
	#[inline]
	pub const fn contains(&self, index: &MatIndex) -> bool {
		index.row < self.rows && index.col < self.cols
	}

	/// Helper to return an error if index is not [contained](Self::contains) within these dimensions
	#[inline]
	pub(crate) fn assert_contains(&self, index: &MatIndex) -> Result<(), OutOfBoundsError> {
		if self.contains(index) {
			Ok(())
		} else {
			Err(OutOfBoundsError {
				dims: *self,
				index: *index,
			})
		}
	}

	#[inline(always)]
	pub const fn compute_offset_unchecked(&self, index: MatIndex) -> usize {
		self.cols * index.row + index.col
	}

	#[inline]
	pub fn compute_offset(&self, index: MatIndex) -> Result<usize, OutOfBoundsError> {
		self.assert_contains(&index)?;
		Ok(self.compute_offset_unchecked(index))
	}

	#[inline]
	pub const fn index_for_offset_unchecked(&self, offset: usize) -> MatIndex {
		MatIndex {
			row: offset / self.cols,
			col: offset % self.cols,
		}
	}

	/// Get number of elements in a matrix with these dimensions
	#[inline]
	pub const fn len(&self) -> usize {
		self.rows * self.cols
	}

	/// Check if this represents a square matrix
	#[inline]
	pub const fn is_square(&self) -> bool {
		self.rows == self.cols
	}
}
