use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;

/// Writes each item's display form on its own line, in order.
pub fn print_lines<W, T>(out: &mut W, items: &[T]) -> Result<()>
where
    W: Write,
    T: Display,
{
    for item in items {
        writeln!(out, "{item}").context("failed to write output")?;
    }
    out.flush().context("failed to flush output")
}
