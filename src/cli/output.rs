//! Output formatting for CLI results.

use std::io::{self, Write};

use crate::cli::args::{OutputFormat, TypoCheckerArgs};
use crate::error::Result;
use crate::spelling::checker::{LineTypo, format_report};

/// Print typos to stdout in the format selected by `args`.
pub fn output_typos(typos: &[LineTypo], args: &TypoCheckerArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_typos(&mut out, typos, &args.output_format, args.pretty)?;
    out.flush()?;
    Ok(())
}

/// Write typos in the given format.
pub fn write_typos<W: Write>(
    out: &mut W,
    typos: &[LineTypo],
    format: &OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => write!(out, "{}", format_report(typos))?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, typos)?;
            } else {
                serde_json::to_writer(&mut *out, typos)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
