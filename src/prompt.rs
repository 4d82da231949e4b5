use std::io::{BufRead, Write};

use crate::error::IoFailure;

/// Show `prompt` (no newline) and block for one line of input.
///
/// Only the terminating `\n` is removed; a preceding `\r` and any surrounding
/// whitespace are returned as typed. A final line without a terminator is
/// accepted. End-of-input before any byte is an error.
pub fn ask<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<String, IoFailure>
where
    R: BufRead,
    W: Write,
{
    output
        .write_all(prompt.as_bytes())
        .and_then(|_| output.flush())
        .map_err(IoFailure::Prompt)?;

    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(IoFailure::Read)?;
    if n == 0 {
        return Err(IoFailure::InputClosed);
    }

    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// Print a message followed by a newline.
pub fn say<W: Write>(message: &str, output: &mut W) -> Result<(), IoFailure> {
    writeln!(output, "{message}")
        .and_then(|_| output.flush())
        .map_err(IoFailure::Prompt)
}
