use std::ops::{Index, IndexMut};

use float_cmp::ApproxEq;
use num_complex::Complex64;

use crate::{error::MatError, scalar::Scalar};

use super::{MatDims, MatIndex};

/// Dense row-major matrix.
///
/// Element `(r, c)` lives at offset `r * cols + c`. Every operation that produces
/// a matrix writes into a caller-provided destination, which must already have
/// the shape of the result.
#[derive(Clone, Debug, PartialEq)]
pub struct Mat<T = Complex64> {
	pub(super) dims: MatDims,
	/// `None` once [destroyed](Mat::destroy)
	pub(super) data: Option<Box<[T]>>,
}

impl<T: Scalar> Mat<T> {
	/// Tolerance used when comparing matrices for approximate equality
	pub const EPS: f64 = 1e-9;

	fn alloc(dims: MatDims) -> Box<[T]> {
		vec![T::zero(); dims.len()].into_boxed_slice()
	}

	/// Create matrix full of zeroes
	pub fn zeroes(rows: usize, cols: usize) -> Result<Self, MatError> {
		let dims = MatDims::new(rows, cols)?;
		Ok(Self {
			dims,
			data: Some(Self::alloc(dims)),
		})
	}

	/// Allocate a matrix with storage for `rows * cols` elements.
	///
	/// The contents are unspecified; write every element before reading it.
	pub fn empty(rows: usize, cols: usize) -> Result<Self, MatError> {
		Self::zeroes(rows, cols)
	}

	/// Create matrix from row-major data
	pub fn create(rows: usize, cols: usize, raw: &[T]) -> Result<Self, MatError> {
		let dims = MatDims::new(rows, cols)?;
		if raw.len() != dims.len() {
			return Err(MatError::DataLength {
				expected: dims.len(),
				actual: raw.len(),
			});
		}
		Ok(Self {
			dims,
			data: Some(raw.into()),
		})
	}

	/// Create matrix, copying `values` if present or zero-filling otherwise
	pub fn init(rows: usize, cols: usize, values: Option<&[T]>) -> Result<Self, MatError> {
		match values {
			Some(raw) => Self::create(rows, cols, raw),
			None => Self::zeroes(rows, cols),
		}
	}

	/// Create matrix from real row-major data
	pub fn from_reals(rows: usize, cols: usize, raw: &[f64]) -> Result<Self, MatError> {
		let values = raw.iter()
			.map(|&v| T::from_real(v))
			.collect::<Vec<_>>();
		Self::create(rows, cols, &values)
	}

	/// Create identity matrix of dimension
	pub fn identity(dim: usize) -> Result<Self, MatError> {
		let mut res = Self::zeroes(dim, dim)?;
		res.set_identity(dim)?;
		Ok(res)
	}

	/// Replace storage with fresh storage for a `rows` x `cols` matrix.
	///
	/// Previous contents are discarded, and new contents are unspecified.
	pub fn realloc(&mut self, rows: usize, cols: usize) -> Result<(), MatError> {
		self.data()?;
		let dims = MatDims::new(rows, cols)?;
		log::trace!("realloc {}x{} -> {}x{}", self.dims.rows, self.dims.cols, rows, cols);
		self.data = Some(Self::alloc(dims));
		self.dims = dims;
		Ok(())
	}

	/// Release storage. Every later operation on this matrix fails with
	/// [MatError::UseAfterDestroy].
	pub fn destroy(&mut self) -> Result<(), MatError> {
		match self.data.take() {
			Some(_) => Ok(()),
			None => Err(MatError::UseAfterDestroy),
		}
	}

	/// Check if [destroy](Self::destroy) has been called
	#[inline]
	pub fn is_destroyed(&self) -> bool {
		self.data.is_none()
	}

	#[inline]
	pub fn rows(&self) -> usize {
		self.dims.rows
	}

	#[inline]
	pub fn cols(&self) -> usize {
		self.dims.cols
	}

	#[inline]
	pub fn dims(&self) -> MatDims {
		self.dims
	}

	#[inline]
	pub fn is_square(&self) -> bool {
		self.dims.is_square()
	}

	/// Row-major elements
	#[inline]
	pub fn data(&self) -> Result<&[T], MatError> {
		self.data.as_deref().ok_or(MatError::UseAfterDestroy)
	}

	#[inline]
	pub fn data_mut(&mut self) -> Result<&mut [T], MatError> {
		self.data.as_deref_mut().ok_or(MatError::UseAfterDestroy)
	}

	pub fn get(&self, idx: impl Into<MatIndex>) -> Result<&T, MatError> {
		let offset = self.dims.compute_offset(idx.into())?;
		Ok(&self.data()?[offset])
	}

	pub fn get_mut(&mut self, idx: impl Into<MatIndex>) -> Result<&mut T, MatError> {
		let offset = self.dims.compute_offset(idx.into())?;
		Ok(&mut self.data_mut()?[offset])
	}

	/// Check that `self` is live and can hold a result of shape `expected`
	pub(super) fn check_dst(&self, expected: MatDims) -> Result<(), MatError> {
		self.data()?;
		MatError::check_dims(expected, self.dims)
	}

	/// Fill a pre-shaped `n` x `n` matrix with the identity
	pub fn set_identity(&mut self, n: usize) -> Result<(), MatError> {
		self.check_dst(MatDims::square(n)?)?;
		let data = self.data_mut()?;
		data.fill(T::zero());
		for i in 0..n {
			data[i * n + i] = T::one();
		}
		Ok(())
	}

	/// Elementwise sum `self + rhs`, written to `dst`
	pub fn add_into(&self, rhs: &Self, dst: &mut Self) -> Result<(), MatError> {
		MatError::check_dims(self.dims, rhs.dims)?;
		dst.check_dst(self.dims)?;

		let lhs = self.data()?;
		let rhs = rhs.data()?;
		for ((dst, &a), &b) in dst.data_mut()?.iter_mut().zip(lhs).zip(rhs) {
			*dst = a + b;
		}
		Ok(())
	}

	/// Scalar product `scalar * self`, written to `dst`
	pub fn scale_into(&self, scalar: T, dst: &mut Self) -> Result<(), MatError> {
		dst.check_dst(self.dims)?;

		let src = self.data()?;
		for (dst, &v) in dst.data_mut()?.iter_mut().zip(src) {
			*dst = scalar * v;
		}
		Ok(())
	}

	/// Matrix transpose, written to `dst`
	pub fn transpose_into(&self, dst: &mut Self) -> Result<(), MatError> {
		dst.check_dst(self.dims.transposed())?;

		let MatDims { rows, cols } = self.dims;
		let src = self.data()?;
		let res = dst.data_mut()?;
		for r in 0..rows {
			for c in 0..cols {
				res[c * rows + r] = src[r * cols + c];
			}
		}
		Ok(())
	}

	/// Matrix product `self * rhs`, written to `dst`
	pub fn matmul_into(&self, rhs: &Self, dst: &mut Self) -> Result<(), MatError> {
		if self.cols() != rhs.rows() {
			return Err(MatError::ShapeMismatch {
				expected: MatDims { rows: self.cols(), cols: rhs.cols() },
				actual: rhs.dims,
			});
		}
		dst.check_dst(MatDims { rows: self.rows(), cols: rhs.cols() })?;

		let (n, m) = (self.cols(), rhs.cols());
		let lhs = self.data()?;
		let rhs = rhs.data()?;
		let res = dst.data_mut()?;
		for i in 0..self.rows() {
			for j in 0..m {
				let mut acc = T::zero();
				for k in 0..n {
					acc += lhs[i * n + k] * rhs[k * m + j];
				}
				res[i * m + j] = acc;
			}
		}
		Ok(())
	}
}

impl<T: Scalar> Index<(usize, usize)> for Mat<T> {
	type Output = T;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		match self.get(index) {
			Ok(value) => value,
			Err(e) => panic!("{e}"),
		}
	}
}

impl<T: Scalar> IndexMut<(usize, usize)> for Mat<T> {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		match self.get_mut(index) {
			Ok(value) => value,
			Err(e) => panic!("{e}"),
		}
	}
}

impl<T: Scalar> ApproxEq for &Mat<T> {
	type Margin = float_cmp::F64Margin;

	fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
		let margin = margin.into();
		let (Ok(lhs), Ok(rhs)) = (self.data(), other.data()) else {
			return false;
		};
		self.dims == other.dims && lhs.iter().zip(rhs).all(|(a, b)| {
			a.re().approx_eq(b.re(), margin) && a.im().approx_eq(b.im(), margin)
		})
	}
}
