//! The before/after demo run by the binary.

use std::io::{self, Write};

use crate::stable::rust_mergesort;

/// The fixed input the demo sorts.
pub const SAMPLE: [i32; 7] = [38, 27, 43, 3, 9, 82, 10];

/// Writes `SAMPLE` to `out`, sorts it, and writes it again.
///
/// The labels are padded to the same width so both arrays line up.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut arr = SAMPLE;

    writeln!(out, "Before: {arr:?}")?;
    rust_mergesort::sort(&mut arr);
    writeln!(out, "After:  {arr:?}")?;

    Ok(())
}
