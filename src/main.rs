mod scan;
mod table;
mod util;

use anyhow::Result;
use assert_hash::{file_base_bytes, HashWidth};
use clap::Parser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::table::{Entry, Format};

#[derive(Parser)]
#[command(
    name = "assert-hashes",
    version,
    about = "Print the fingerprint of every assertion call site in a source file",
    after_help = "examples:\n    assert-hashes -f /lala/foo/bar.cpp -a assert -a ASSERT -d 1 -s 4"
)]
struct Cli {
    /// Input file to scan (repeat for several files)
    #[arg(long = "file", short = 'f', value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
    /// Name of an assert function to look for (repeatable)
    #[arg(long = "assert", short = 'a', value_name = "NAME", default_value = "assert")]
    asserts: Vec<String>,
    /// Max. number of directories to be included in the file name (0 = all)
    #[arg(long, short = 'd', default_value_t = 0)]
    directories: u32,
    /// Size of the hash value in bytes (1, 2, 4 or 8)
    #[arg(long = "hash-size", short = 's', alias = "hash_size", value_name = "BYTES", default_value_t = 4)]
    hash_size: u32,
    /// Output format of the hash table
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins when set; otherwise WARN. --verbose adds DEBUG on top of either.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Scan one file and build its table rows.
fn file_entries(path: &Path, markers: &[String], directories: u32, width: HashWidth) -> Result<Vec<Entry>> {
    let path_bytes = util::path_bytes(path);
    let file_name = file_base_bytes(&path_bytes, directories);
    let lines = scan::scan_file(path, markers)?;
    Ok(lines
        .into_iter()
        .map(|line| Entry::new(file_name, line, directories, width))
        .collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let width = HashWidth::from_bytes(cli.hash_size)?;
    debug!(?width, directories = cli.directories, markers = ?cli.asserts, "configuration");

    // Scan files in parallel; collect keeps argument order.
    let per_file = cli
        .files
        .par_iter()
        .map(|path| file_entries(path, &cli.asserts, cli.directories, width))
        .collect::<Result<Vec<_>>>()?;
    let entries: Vec<Entry> = per_file.into_iter().flatten().collect();

    info!(files = cli.files.len(), entries = entries.len(), "hash table built");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    table::write_table(&mut out, &entries, cli.format)?;

    Ok(())
}
