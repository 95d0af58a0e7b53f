//! Determinant, cofactors and adjugate-based inversion.
//!
//! Determinants are computed by Laplace expansion along the first row, which
//! costs `O(n!)`. This is intentional: results for ill-conditioned inputs must
//! match cofactor expansion exactly, not Gaussian elimination.
use crate::{error::MatError, scalar::{int_pow, Scalar}};

use super::{Mat, MatIndex};

/// `(-1)^exp`
#[inline]
fn sign<T: Scalar>(exp: usize) -> T {
	T::from_real(int_pow(-1, exp as u32) as f64)
}

impl<T: Scalar> Mat<T> {
	fn assert_square(&self) -> Result<(), MatError> {
		if self.is_square() {
			Ok(())
		} else {
			Err(MatError::NotSquare(self.dims))
		}
	}

	/// Compute matrix determinant
	pub fn det(&self) -> Result<T, MatError> {
		let data = self.data()?;
		self.assert_square()?;

		match self.rows() {
			1 => Ok(data[0]),
			2 => Ok(data[0] * data[3] - data[1] * data[2]),
			n => {
				log::trace!("Laplace expansion of {n}x{n} matrix");
				let mut det = T::zero();
				for c in 0..n {
					let minor = self.minor(0, c)?;
					det += data[c] * sign::<T>(c) * minor.det()?;
				}
				Ok(det)
			}
		}
	}

	/// Signed determinant of the minor at `(row, col)`
	pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatError> {
		self.data()?;
		self.assert_square()?;
		self.dims.assert_contains(&MatIndex { row, col })?;

		if self.rows() == 1 {
			// Empty minor
			return Ok(T::one());
		}
		let minor = self.minor(row, col)?;
		Ok(sign::<T>(row + col) * minor.det()?)
	}

	/// Write the cofactor matrix to `dst`
	pub fn comatrix_into(&self, dst: &mut Self) -> Result<(), MatError> {
		self.assert_square()?;
		dst.check_dst(self.dims)?;

		let n = self.rows();
		for i in 0..n {
			for j in 0..n {
				let co = self.cofactor(i, j)?;
				dst.data_mut()?[i * n + j] = co;
			}
		}
		Ok(())
	}

	/// Write the adjugate (transposed cofactor matrix) to `dst`
	pub fn adjugate_into(&self, dst: &mut Self) -> Result<(), MatError> {
		self.assert_square()?;
		dst.check_dst(self.dims)?;

		let n = self.rows();
		for i in 0..n {
			for j in 0..n {
				let co = self.cofactor(i, j)?;
				dst.data_mut()?[j * n + i] = co;
			}
		}
		Ok(())
	}

	/// Write the inverse to `dst`, as `adj(self) / det(self)`.
	///
	/// Fails with [MatError::SingularMatrix] if the determinant is exactly zero,
	/// in which case `dst` is left untouched. Badly conditioned matrices are the
	/// caller's problem.
	pub fn inverse_into(&self, dst: &mut Self) -> Result<(), MatError> {
		self.assert_square()?;
		dst.check_dst(self.dims)?;

		let det = self.det()?;
		if det == T::zero() {
			log::debug!("Refusing to invert singular {}x{} matrix", self.rows(), self.cols());
			return Err(MatError::SingularMatrix);
		}

		self.adjugate_into(dst)?;
		let inv_det = T::one() / det;
		for v in dst.data_mut()?.iter_mut() {
			*v = inv_det * *v;
		}
		Ok(())
	}

	/// Sum of diagonal elements
	pub fn trace(&self) -> Result<T, MatError> {
		let data = self.data()?;
		self.assert_square()?;

		let n = self.cols();
		let mut trace = T::zero();
		for i in 0..n {
			trace += data[i * n + i];
		}
		Ok(trace)
	}
}
