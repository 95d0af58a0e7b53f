use num_complex::Complex64;

use crate::{error::MatError, scalar::{complex_sqrt, Scalar}};

use super::{Mat, MatDims};

impl<T: Scalar> Mat<T> {
	/// Eigenvalues of a 2x2 matrix.
	///
	/// Roots of `λ² - tr·λ + det`, i.e. `(tr ± sqrt(tr² - 4·det)) / 2`, with the `+`
	/// root first. Always complex, since a real matrix may have a conjugate pair.
	pub fn eigenvalues(&self) -> Result<[Complex64; 2], MatError> {
		self.data()?;
		if self.dims != (MatDims { rows: 2, cols: 2 }) {
			return Err(MatError::UnsupportedShape(self.dims));
		}

		let tr = self.trace()?.to_complex();
		let det = self.det()?.to_complex();
		let discriminant = tr * tr - det * 4.;
		let root = complex_sqrt(discriminant);
		Ok([
			(tr + root) / 2.,
			(tr - root) / 2.,
		])
	}
}

#[cfg(test)]
mod test {
	use num_complex::Complex64;

	use crate::{Mat, MatDims, MatError};

	macro_rules! assert_close {
		($a: expr, $b: expr) => {
			{
				let (a, b): (Complex64, Complex64) = ($a, $b);
				const EPS: f64 = 1e-6;
				if (a - b).norm() >= EPS {
					assert_eq!(a, b);
				}
			}
		};
	}

	#[test]
	fn real_distinct() {
		let a = Mat::<f64>::from_reals(2, 2, &[4., 1., 2., 3.]).unwrap();
		let [l1, l2] = a.eigenvalues().unwrap();
		assert_close!(l1, Complex64::new(5., 0.));
		assert_close!(l2, Complex64::new(2., 0.));
	}

	#[test]
	fn repeated() {
		let a = Mat::<f64>::identity(2).unwrap();
		assert_eq!(a.eigenvalues(), Ok([Complex64::new(1., 0.); 2]));
	}

	#[test]
	fn conjugate_pair() {
		// trace 0, det 9
		let a = Mat::<f64>::from_reals(2, 2, &[2., 13., -1., -2.]).unwrap();
		assert_eq!(a.trace(), Ok(0.));
		assert_eq!(a.det(), Ok(9.));
		let [l1, l2] = a.eigenvalues().unwrap();
		assert_close!(l1, Complex64::new(0., 3.));
		assert_close!(l2, Complex64::new(0., -3.));
		assert_eq!(l1, l2.conj());
	}

	#[test]
	fn complex_entries() {
		let a = Mat::create(2, 2, &[
			Complex64::new(1., 1.), Complex64::new(0., 0.),
			Complex64::new(0., 0.), Complex64::new(2., 0.),
		]).unwrap();
		let [l1, l2] = a.eigenvalues().unwrap();
		assert_close!(l1, Complex64::new(2., 0.));
		assert_close!(l2, Complex64::new(1., 1.));
	}

	#[test]
	fn unsupported_shape() {
		let a = Mat::<f64>::identity(3).unwrap();
		assert_eq!(a.eigenvalues(), Err(MatError::UnsupportedShape(MatDims { rows: 3, cols: 3 })));
		let b = Mat::<f64>::zeroes(2, 1).unwrap();
		assert!(matches!(b.eigenvalues(), Err(MatError::UnsupportedShape(_))));
	}

	#[test]
	fn destroyed() {
		let mut a = Mat::<f64>::identity(2).unwrap();
		a.destroy().unwrap();
		assert_eq!(a.eigenvalues(), Err(MatError::UseAfterDestroy));
	}
}
