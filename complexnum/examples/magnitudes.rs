//! Read complex numbers from stdin and print each with its magnitude
//!
//! ```text
//! printf '3 4\n1 1\n' | RUST_LOG=trace cargo run --example magnitudes
//! ```

use complexnum::{write_complex, ComplexReader};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut reader = ComplexReader::new(io::stdin().lock());
    let mut out = BufWriter::new(io::stdout().lock());

    for value in &mut reader {
        let value = value?;
        write_complex(&mut out, &value)?;
        writeln!(out, "\t|z| = {}", value.to_scalar())?;
    }
    out.flush()?;

    eprintln!("Read {} values", reader.values_read());
    Ok(())
}
