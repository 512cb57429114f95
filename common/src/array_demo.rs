//! Walkthrough of nesting sequences by value.
//!
//! Builds `vector1` and `vector2`, copies both into a sequence of sequences,
//! then overwrites `vector1[0]` and reads `vector_2d[0][0]` again. The second
//! read still shows the old value because the outer sequence holds copies.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::sequence::{Sequence, SequenceError, SequenceOfSequences};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error("failed to write demo output")]
    Io(#[from] io::Error),
}

/// Values observed while the demo ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub vector1: Sequence<i32>,
    pub vector2: Sequence<i32>,
    pub nested_before: i32,
    pub nested_after: i32,
}

pub fn run<W: Write>(mut output: W) -> Result<DemoReport, DemoError> {
    let mut vector1: Sequence<i32> = Sequence::new();
    vector1.push(10);
    vector1.push(20);
    writeln!(
        output,
        "vector1: {} {} (size {})",
        vector1.at(0)?,
        vector1.at(1)?,
        vector1.len()
    )?;

    let mut vector2: Sequence<i32> = Sequence::new();
    vector2.push(100);
    vector2.push(200);
    writeln!(
        output,
        "vector2: {} {} (size {})",
        vector2.at(0)?,
        vector2.at(1)?,
        vector2.len()
    )?;

    let mut vector_2d: SequenceOfSequences = Sequence::new();
    vector_2d.push(vector1.clone());
    vector_2d.push(vector2.clone());
    debug!(outer_len = vector_2d.len(), "nested vector1 and vector2");

    let nested_before: i32 = *vector_2d.at(0)?.at(0)?;
    writeln!(output, "vector_2d[0][0]: {nested_before}")?;

    vector1.set(0, 1000)?;
    debug!(vector1 = %vector1, "overwrote vector1[0]");

    let nested_after: i32 = *vector_2d.at(0)?.at(0)?;
    writeln!(output, "vector_2d[0][0]: {nested_after}")?;
    output.flush()?;

    Ok(DemoReport {
        vector1,
        vector2,
        nested_before,
        nested_after,
    })
}
