//! The ranking run: resolve options, load the report, print the slowest paths.
//!
//! 1. Load `--config` defaults (if given) and merge command-line flags
//! 2. Load the timing report from a file or standard input
//! 3. Extract and rank matching paths
//! 4. Write paths to stdout, summary to stderr

use std::io::{self, Write};
use std::path::Path;

use netpath_config::{load_config, resolve_options, CliOverrides, ToolConfig};
use netpath_rank::top_paths;
use netpath_report::{load_report, load_report_from_reader};

use crate::render::write_paths;
use crate::Cli;

/// Runs a ranking pass for the parsed command line.
///
/// Returns exit code 0 on success, including when nothing matches. Read,
/// parse, structure, and configuration failures are returned as errors.
pub fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = match cli.config {
        Some(ref path) => load_config(path)?,
        None => ToolConfig::default(),
    };

    let options = resolve_options(
        &config,
        CliOverrides {
            report_path: cli.file,
            source_filter: cli.src,
            destination_filter: cli.dst,
            result_limit: cli.results,
            format: cli.format.map(Into::into),
        },
    )?;
    tracing::debug!(?options, "resolved options");

    let document = if options.reads_stdin() {
        load_report_from_reader(io::stdin().lock(), Path::new("<stdin>"))?
    } else {
        load_report(&options.report_path)?
    };

    let ranked = top_paths(&document, &options.query());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_paths(&mut out, &ranked.paths, options.format)?;
    out.flush()?;

    if !cli.quiet {
        eprintln!(
            "   Ranked {} of {} matching path(s) across {} net(s)",
            ranked.paths.len(),
            ranked.matched,
            document.nets().len()
        );
    }

    Ok(0)
}
