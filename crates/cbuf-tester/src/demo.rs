use std::error::Error;
use std::io::Write;

use cbuf_common::{CreateError, RingBuffer};

use crate::command::{Command, execute};

use Command::{Dump, Get, Put};

/// Walks a buffer through filling up, overflowing, wrapping both cursors
/// around and draining past empty, dumping its state in between.
#[rustfmt::skip]
pub const SCRIPT: &[Command] = &[
    Dump,
    Put(1), Put(2), Put(3), Dump,
    Put(4), Put(5), Dump,
    Put(6), Dump,
    Get, Dump,
    Put(7), Dump,
    Put(8), Dump,
    Get, Dump,
    Get, Get, Dump,
    Get, Get, Dump,
    Get, Dump,
    Put(9), Put(10), Dump,
    Get, Dump,
];

/// Runs [`SCRIPT`] against a new buffer of the given capacity, after first
/// showing that a zero capacity buffer is refused.
pub fn run<W: Write>(capacity: i64, out: &mut W) -> Result<(), Box<dyn Error>> {
    match RingBuffer::new(0) {
        Err(e @ CreateError::InvalidArgument) => writeln!(out, "new(0): {}", e)?,
        Err(e) => return Err(e.into()),
        Ok(_) => writeln!(out, "new(0): unexpectedly accepted")?,
    }

    let mut rb = RingBuffer::new(capacity)?;
    writeln!(out, "new({})", capacity)?;
    for &cmd in SCRIPT {
        execute(&mut rb, cmd, out)?;
    }
    rb.destroy();

    Ok(())
}
