use crate::core::{
    config::{Format, ParseOptions},
    diagnostics::LogSink,
    error::Result,
};
use crate::decode::{decode, AnyStatus};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Decodes porcelain output from `input` (stdin when `None`) and prints it as JSON.
pub fn execute_convert(format: Format, input: Option<&Path>, compact: bool) -> Result<()> {
    let status = match input {
        Some(path) => {
            log::debug!("reading {}", path.display());
            read_status(File::open(path)?, format)?
        }
        None => read_status(io::stdin().lock(), format)?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_json(&mut out, &status, compact)?;
    out.flush()?;
    Ok(())
}

fn read_status<R: Read>(reader: R, format: Format) -> Result<AnyStatus> {
    let options = ParseOptions::with_sink(&LogSink);
    decode(reader, format, &options)
}

/// Writes `status` followed by a newline.
pub fn write_json<W: Write>(out: &mut W, status: &AnyStatus, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, status)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, status)?;
    }
    out.write_all(b"\n")?;
    Ok(())
}
