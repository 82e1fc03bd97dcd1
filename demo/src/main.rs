// lints
#![warn(clippy::pedantic)]

use num_complex::Complex64;
use sparse::{Factor, Population, SparseMatrix, SparseVector};
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), sparse::Error> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let diagonal = SparseMatrix::from_entries(4, [((0, 0), 1_i64), ((1, 1), 2), ((3, 3), 3)])?;
    let squared = diagonal.mul(Factor::Matrix(&diagonal))?;
    info!(population = squared.population(), "diagonal squared");
    println!("{squared}");

    let a = SparseVector::from_entries(4, [(0, 1_i64), (2, 3)])?;
    let b = SparseVector::from_entries(4, [(1, 5_i64), (2, 7)])?;
    let dot = a.dot(&b)?;
    info!(dot, "real dot product");

    let i = Complex64::new(0.0, 1.0);
    let u = SparseVector::from_entries(1 << 20, [(0, i), ((1 << 20) - 1, Complex64::new(2.0, 0.0))])?;
    let norm = u.dot(&u)?;
    info!(%norm, "squared norm");

    let mut difference = squared.sub(&squared.scale(1))?;
    info!(before = difference.population(), "cancelled");
    difference.prune();
    info!(after = difference.population(), "pruned");
    Ok(())
}
