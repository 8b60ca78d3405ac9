use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use utmatrix::data::linear_algebra::matrix::Matrix;

/// Demonstration of upper triangular matrices.
#[derive(Parser)]
#[command(name = "utmatrix", version, about)]
struct Opts {
    /// Number of rows and columns of the matrices
    #[arg(short, long, default_value = "10")]
    size: usize,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    if let Err(error) = run(opts.size) {
        error!("{:#}", error);
        exit(1);
    }
}

fn run(size: usize) -> Result<()> {
    info!("Creating matrices of size {}...", size);
    let mut a = Matrix::<i64>::new(size).context("Couldn't create the first matrix")?;
    let mut b = Matrix::<i64>::new(size).context("Couldn't create the second matrix")?;

    info!("Filling the upper triangles...");
    for i in 0..size {
        for j in i..size {
            let value = (i * 10 + j) as i64;
            a.set(i, j, value)?;
            b.set(i, j, value * 100)?;
        }
    }

    info!("Adding...");
    let sum = a.add(&b)?;

    println!("Matrix a =\n{}", a);
    println!("Matrix b =\n{}", b);
    println!("Matrix c = a + b =\n{}", sum);

    Ok(())
}
