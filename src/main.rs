//! Demo runner: multiplies the fixture matrices and times the threaded path.

use std::error::Error;
use std::time::Instant;

use clap::Parser;
use rowmul::{Matrix, multiply, multiply_naive};
use tracing::info;

/// Row-partitioned matrix multiplication demo
#[derive(Parser, Debug)]
#[command(name = "rowmul", version, about = "Multiply fixture matrices across worker threads")]
struct Cli {
    /// Number of worker threads (clamped to the row count)
    #[arg(short, long, default_value_t = 10)]
    workers: usize,

    /// Rows of the generated left matrix
    #[arg(long, default_value_t = 19)]
    rows: usize,

    /// Columns of the left matrix and rows of the right matrix
    #[arg(long, default_value_t = 30)]
    inner: usize,

    /// Columns of the generated right matrix
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Column width used when printing the small result
    #[arg(long, default_value_t = 4)]
    width: usize,
}

/// `rows × cols` matrix holding 1, 2, 3, ... in row-major order.
fn counting_matrix(rows: usize, cols: usize) -> Result<Matrix<i32>, Box<dyn Error>> {
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| format!("{}x{} matrix is too large", rows, cols))?;
    let last = i32::try_from(len)?;
    Ok(Matrix::from_vec(rows, cols, (1..=last).collect())?)
}

/// `rows × cols` matrix whose rows count up from 1, except that rows 2 and
/// 3 repeat rows 0 and 1 before the count carries on from row 2's slot.
fn staggered_matrix(rows: usize, cols: usize) -> Result<Matrix<i32>, Box<dyn Error>> {
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| format!("{}x{} matrix is too large", rows, cols))?;
    let mut data = Vec::with_capacity(len);
    for r in 0..rows {
        let base = if r < 2 { r } else { r - 2 };
        for c in 0..cols {
            data.push(i32::try_from(base * cols + c + 1)?);
        }
    }
    Ok(Matrix::from_vec(rows, cols, data)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    println!("=== Row-partitioned Matrix Multiplication ===\n");

    // Small fixture: 4x3 * 3x5
    let a = counting_matrix(4, 3)?;
    let b = counting_matrix(3, 5)?;

    println!("matrix 1: {} x {}", a.rows(), a.cols());
    println!("matrix 2: {} x {}\n", b.rows(), b.cols());

    let start = Instant::now();
    let c = multiply(&a, &b, cli.workers)?;
    let elapsed = start.elapsed();

    println!("Result matrix (example):");
    print!("{}", c.display(cli.width));
    println!(
        "Execution time: {:.4} milliseconds.\n",
        elapsed.as_secs_f64() * 1000.0
    );

    let (m, k, n) = (cli.rows, cli.inner, cli.cols);
    let a = counting_matrix(m, k)?;
    let b = staggered_matrix(k, n)?;

    let start = Instant::now();
    let c = multiply(&a, &b, cli.workers)?;
    let elapsed = start.elapsed();

    let passed = c == multiply_naive(&a, &b)?;
    info!(
        rows = m,
        inner = k,
        cols = n,
        workers = cli.workers,
        passed,
        "compared against sequential baseline"
    );

    println!("matrix 1: {} x {}", m, k);
    println!("matrix 2: {} x {}", k, n);
    println!("Number of threads: {}", cli.workers);
    println!(
        "Execution time: {:.4} milliseconds.",
        elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "Verification: {}",
        if passed { "PASSED" } else { "FAILED" }
    );

    Ok(())
}
