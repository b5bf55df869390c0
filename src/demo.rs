use std::io::Write;

use crate::rng::{SeededRng, RAND_MAX};
use crate::Result;

/// How many sample numbers each block prints.
pub const REPETITIONS: usize = 10;

/// Example interval for the range-mapped block.
pub const EXAMPLE_LOW: i32 = 200;
pub const EXAMPLE_HIGH: i32 = 300;

/// Runs the full demo against `out`: a block of unranged draws followed by
/// a block of draws mapped into the example interval, each under a header
/// line. Values are written as they are drawn.
pub fn run<W: Write>(out: &mut W, rng: &mut SeededRng) -> Result<()> {
    writeln!(
        out,
        "Displaying {} random numbers between 0 and {}",
        REPETITIONS, RAND_MAX
    )?;
    for _ in 0..REPETITIONS {
        writeln!(out, "{}", rng.next_i32())?;
    }

    writeln!(
        out,
        "Displaying {} random numbers between {} and {}",
        REPETITIONS, EXAMPLE_LOW, EXAMPLE_HIGH
    )?;
    for _ in 0..REPETITIONS {
        writeln!(out, "{}", rng.next_in_range(EXAMPLE_LOW, EXAMPLE_HIGH)?)?;
    }

    Ok(())
}
