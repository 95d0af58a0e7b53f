use anyhow::Result;
use clap::Parser;
use matrices_rs::{Complex64, Mat};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
    /// Scalar to multiply the matrix by
    #[arg(short, long, default_value_t=2.5)]
    scalar: f64,
    /// Row-major entries of the 3x3 matrix to work with
    #[arg(num_args=9, allow_negative_numbers=true, default_values_t=[1., 4., 7., 3., 0., 5., -1., 9., 11.])]
    values: Vec<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
        .try_init()?;

    let m: Mat = Mat::from_reals(3, 3, &args.values)?;
    let mut n: Mat = Mat::empty(3, 3)?;

    println!("The matrix we're working with is:");
    print!("{m}");

    println!("\nThe matrix added to itself is:");
    m.add_into(&m, &mut n)?;
    print!("{n}");

    println!("\nThe matrix multiplied by itself is:");
    m.matmul_into(&m, &mut n)?;
    print!("{n}");

    println!("\nThe matrix multiplied by {} is:", args.scalar);
    m.scale_into(Complex64::new(args.scalar, 0.), &mut n)?;
    print!("{n}");

    println!("\nThe transposition of the matrix is:");
    m.transpose_into(&mut n)?;
    print!("{n}");

    println!("\nThe sub-matrix with the middle row/column removed is:");
    n.realloc(2, 2)?;
    m.minor_into(1, 1, &mut n)?;
    print!("{n}");

    println!("\nThe corresponding identity matrix is:");
    n.realloc(3, 3)?;
    n.set_identity(3)?;
    print!("{n}");

    println!("\nThe comatrix is:");
    m.comatrix_into(&mut n)?;
    print!("{n}");

    println!("\nThe inverse matrix is:");
    match m.inverse_into(&mut n) {
        Ok(()) => print!("{n}"),
        Err(e) => println!("Error: {e}\n"),
    }

    println!("The trace is: {:.3}", m.trace()?.re);
    println!("The determinant is: {:.3}", m.det()?.re);

    let corner = Mat::create(2, 2, &[m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]])?;
    let [l1, l2] = corner.eigenvalues()?;
    println!("\nThe eigenvalues of the top-left 2x2 block are: {l1:.3}, {l2:.3}");

    Ok(())
}
