use crate::{error::MatError, scalar::Scalar};

use super::{Mat, MatIndex};

impl<T: Scalar> Mat<T> {
	/// Write the minor of `self` with `row` and `col` removed to `dst`.
	///
	/// `dst` must be `(rows - 1) x (cols - 1)`.
	pub fn minor_into(&self, row: usize, col: usize, dst: &mut Self) -> Result<(), MatError> {
		self.dims.assert_contains(&MatIndex { row, col })?;
		dst.check_dst(self.dims.minor()?)?;

		let src = self.data()?;
		let res = dst.data_mut()?;
		let mut i = 0;
		for (offset, &value) in src.iter().enumerate() {
			let idx = self.dims.index_for_offset_unchecked(offset);
			if idx.row == row || idx.col == col {
				continue;
			}
			res[i] = value;
			i += 1;
		}
		debug_assert_eq!(i, res.len());
		Ok(())
	}

	/// Allocate and compute the minor of `self` with `row` and `col` removed
	pub(crate) fn minor(&self, row: usize, col: usize) -> Result<Self, MatError> {
		let dims = self.dims.minor()?;
		let mut res = Self::empty(dims.rows, dims.cols)?;
		self.minor_into(row, col, &mut res)?;
		Ok(res)
	}
}
