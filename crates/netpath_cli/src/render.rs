//! Output rendering for ranked paths.

use std::io::{self, Write};

use netpath_config::OutputFormat;
use netpath_rank::PathTuple;

/// Writes `paths` to `out` in the requested format.
///
/// Text output is one `<source> -> <destination> : <delay>` line per path
/// and nothing at all for an empty set. JSON output is always a
/// well-formed array.
pub fn write_paths<W: Write>(
    out: &mut W,
    paths: &[PathTuple],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for path in paths {
                writeln!(out, "{path}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, paths)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
