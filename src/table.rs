use anyhow::{Context, Result};
use assert_hash::{Fingerprint, HashWidth, LineNumber};
use serde::Serialize;
use std::io::Write;

/// One row of the lookup table: a fingerprint and the site it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub hash: Fingerprint,
    pub file: String,
    pub line: LineNumber,
}

impl Entry {
    /// `file` must already be truncated to `directories`. Bytes that are not
    /// UTF-8 are hashed as is and printed as U+FFFD.
    pub fn new(file: &[u8], line: LineNumber, directories: u32, width: HashWidth) -> Self {
        Self {
            hash: assert_hash::fingerprint_bytes(file, line, directories, width),
            file: String::from_utf8_lossy(file).into_owned(),
            line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// `#0x<hash> <file>:<line>`, one entry per line
    #[default]
    Text,
    /// JSON array of `{hash, file, line}` objects
    Json,
}

pub fn write_table<W: Write>(out: &mut W, entries: &[Entry], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for entry in entries {
                writeln!(out, "#{} {}:{}", entry.hash, entry.file, entry.line)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)
                .context("Failed to serialize hash table")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
