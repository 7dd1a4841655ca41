//! Line-oriented driver for an editing session

use crate::application::{EditSession, Reply, SessionCommand};
use crate::cli::output::format_reply;
use crate::error::{Result, TagsmithError};
use std::io::{BufRead, Write};
use tracing::warn;

/// Run commands from `input` until end of input or `quit`.
///
/// A failing command is reported on `err` and the session continues. The
/// final export string is written to `out` as `export: <string>`.
pub fn run_session<R, W, E>(
    session: &mut EditSession,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut buf = Vec::new();
    let mut number = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        // Invalid UTF-8 is replaced, not fatal.
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\n', '\r']);
        if line.contains(char::REPLACEMENT_CHARACTER) {
            warn!(line = number, "replaced invalid UTF-8 in session input");
        }

        let command = match SessionCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Reply::Quit) => break,
            Ok(reply) => {
                if let Some(text) = format_reply(&reply) {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => {
                if matches!(
                    e,
                    TagsmithError::NoTagAtPosition(_) | TagsmithError::TagNotFound(_)
                ) {
                    warn!(line = number, error = %e, "ignored stale tag reference");
                }
                writeln!(err, "Error: {}", e)?;
            }
        }
    }

    writeln!(out, "export: {}", session.export())?;
    Ok(())
}
