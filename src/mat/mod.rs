mod index;
mod mat;
mod minor;
mod det;
mod eigen;
mod display;

pub use index::{MatDims, MatIndex};
pub use mat::Mat;

#[cfg(test)]
pub(crate) mod testing {
	use rand::{rngs::StdRng, Rng};

	use super::Mat;

	/// Matrix with small integer entries, so that determinants are exact
	pub(crate) fn random_mat(rng: &mut StdRng, rows: usize, cols: usize) -> Mat<f64> {
		let values = (0..rows * cols)
			.map(|_| rng.gen_range(-10..=10) as f64)
			.collect::<Vec<_>>();
		Mat::create(rows, cols, &values).unwrap()
	}
}
