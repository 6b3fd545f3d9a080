//! Classifies one shape of each kind from unordered corners and prints it.
//!
//! Usage:
//! ```text
//! cargo run --example shapes
//! RUST_LOG=quadrilis=debug cargo run --example shapes   # show classification trace
//! ```

use quadrilis::{quadrilateral, QuadrilisError};

fn main() -> Result<(), QuadrilisError> {
    // Default: WARN for everything, INFO for quadrilis.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("quadrilis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let shapes: [(&str, [(f64, f64); 4]); 4] = [
        ("Trapezoid", [(0.0, 0.0), (4.0, 0.0), (1.0, 3.0), (3.0, 3.0)]),
        ("Parallelogram", [(0.0, 0.0), (4.0, 0.0), (1.0, 3.0), (5.0, 3.0)]),
        ("Rectangle", [(0.0, 0.0), (4.0, 0.0), (0.0, 3.0), (4.0, 3.0)]),
        ("Square", [(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (2.0, 2.0)]),
    ];

    for (label, [a, b, c, d]) in shapes {
        let quad = quadrilateral(a, b, c, d)?;
        println!("{label}: {quad}Area: {:.2}\n", quad.area()?);
    }
    Ok(())
}
