use std::fmt::{self, Display};

use crate::scalar::{approx_eq, Scalar};

use super::Mat;

/// Significant digits printed per element
const PRECISION: usize = 3;

fn strip_trailing_zeros(s: &str) -> &str {
	if s.contains('.') {
		s.trim_end_matches('0').trim_end_matches('.')
	} else {
		s
	}
}

/// Format `value` like printf's `%.{precision}g`
pub(crate) fn format_g(value: f64, precision: usize) -> String {
	if value == 0. {
		return "0".into();
	}
	if !value.is_finite() {
		return value.to_string();
	}

	let precision = precision.max(1);
	let sci = format!("{:.*e}", precision - 1, value);
	let Some((mantissa, exp)) = sci.split_once('e') else {
		return value.to_string();
	};
	let exp = exp.parse::<i32>().unwrap_or(0);

	if exp < -4 || exp >= precision as i32 {
		let sign = if exp < 0 { '-' } else { '+' };
		format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exp.abs())
	} else {
		let decimals = (precision as i32 - 1 - exp) as usize;
		strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_owned()
	}
}

/// Render one element: `re`, `j<im>`, or `re ±j<im>`
pub(crate) fn format_scalar<T: Scalar>(value: &T) -> String {
	let (re, im) = (value.re(), value.im());
	if approx_eq(im, 0.) {
		return format_g(re, PRECISION);
	}

	let im_str = format_g(im.abs(), PRECISION);
	if approx_eq(re, 0.) {
		let sign = if im < 0. { "-" } else { "" };
		format!("{sign}j{im_str}")
	} else {
		let sign = if im < 0. { '-' } else { '+' };
		format!("{} {sign}j{im_str}", format_g(re, PRECISION))
	}
}

/// Tab-separated rows, followed by a blank line
impl<T: Scalar> Display for Mat<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Ok(data) = self.data() else {
			return writeln!(f, "<destroyed {}x{} matrix>", self.rows(), self.cols());
		};

		for row in data.chunks(self.cols()) {
			for value in row {
				write!(f, "{}\t", format_scalar(value))?;
			}
			writeln!(f)?;
		}
		writeln!(f)
	}
}

#[cfg(test)]
mod test {
	use num_complex::Complex64;

	use super::{format_g, format_scalar};
	use crate::Mat;

	#[test]
	fn g_format() {
		assert_eq!(format_g(0., 3), "0");
		assert_eq!(format_g(12., 3), "12");
		assert_eq!(format_g(100., 3), "100");
		assert_eq!(format_g(-2.5, 3), "-2.5");
		assert_eq!(format_g(0.4, 3), "0.4");
		assert_eq!(format_g(1.0 / 3.0, 3), "0.333");
		assert_eq!(format_g(1234.5, 3), "1.23e+03");
		assert_eq!(format_g(0.0001234, 3), "0.000123");
		assert_eq!(format_g(1e-5, 3), "1e-05");
		assert_eq!(format_g(-4.0 / 3.0, 3), "-1.33");
	}

	#[test]
	fn scalar_cells() {
		assert_eq!(format_scalar(&2.5f64), "2.5");
		assert_eq!(format_scalar(&Complex64::new(2., 1e-16)), "2");
		assert_eq!(format_scalar(&Complex64::new(0., 3.)), "j3");
		assert_eq!(format_scalar(&Complex64::new(0., -3.)), "-j3");
		assert_eq!(format_scalar(&Complex64::new(1.5, -2.)), "1.5 -j2");
		assert_eq!(format_scalar(&Complex64::new(-1., 0.25)), "-1 +j0.25");
	}

	#[test]
	fn render_matrix() {
		let m = Mat::<f64>::from_reals(3, 3, &[1., 4., 7., 3., 0., 5., -1., 9., 11.]).unwrap();
		assert_eq!(m.to_string(), "1\t4\t7\t\n3\t0\t5\t\n-1\t9\t11\t\n\n");
	}

	#[test]
	fn render_destroyed() {
		let mut m = Mat::<f64>::identity(2).unwrap();
		m.destroy().unwrap();
		assert_eq!(m.to_string(), "<destroyed 2x2 matrix>\n");
	}
}
