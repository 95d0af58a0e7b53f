//! Dense matrix algebra over real or complex scalars.
//!
//! Determinants use Laplace expansion and inverses use the adjugate, so both are
//! exponential in the matrix size. Fine for the small matrices this is meant for.

pub mod error;
mod mat;
pub mod scalar;

pub use num_complex::Complex64;

pub use error::{MatError, OutOfBoundsError};
pub use mat::{Mat, MatDims, MatIndex};
pub use scalar::Scalar;
