//! kmzsplit - split a KMZ file into 100 bucket KML files
//!
//! Reads a KMZ archive, partitions the placemarks of its KML document
//! into buckets `S01`..`S100` by name substring, and writes one ZIP
//! archive with one KML document per bucket. Processing happens entirely
//! in memory; the output file is only written once the whole run has
//! succeeded.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kmzsplit_pipeline::{archive_file_name, split_kmz_with_progress, BUCKET_COUNT};
use log::warn;
use std::fs;
use std::path::PathBuf;

/// Format bytes as human-readable size (e.g., "1.5 MB")
#[allow(clippy::cast_precision_loss)] // display only
fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} bytes")
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "kmzsplit",
    about = "Split a KMZ file into multiple smaller KML files",
    long_about = "Split a KMZ file into multiple smaller KML files.\n\
                  \n\
                  The KML document inside the archive is partitioned into 100\n\
                  buckets named S01 through S100; a placemark lands in every\n\
                  bucket whose token appears in its <name>. The output is a\n\
                  single ZIP archive with one KML document per bucket.",
    version
)]
struct Args {
    /// Input KMZ file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output ZIP path (default: kmzsplitter_<YYYY-MM-DD>.zip in the current directory)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    force: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show detailed processing information
    #[arg(short, long)]
    verbose: bool,
}

fn create_progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(u64::from(BUCKET_COUNT));
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("template is compile-time constant")
            .progress_chars("█▓▒░  "),
    );
    bar
}

fn main() -> Result<()> {
    // Initialize logger (respects RUST_LOG environment variable)
    env_logger::init();

    let args = Args::parse();

    // The .kmz extension is advisory; anything that decompresses as a
    // ZIP with a .kml entry inside is accepted.
    if args.input.extension().and_then(|e| e.to_str()) != Some("kmz") {
        warn!(
            "input '{}' does not have a .kmz extension, reading it as a ZIP archive anyway",
            args.input.display()
        );
    }

    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read input file '{}'", args.input.display()))?;
    let input_size = bytes.len();

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(archive_file_name(Local::now().date_naive())));
    if output_path.exists() && !args.force {
        bail!(
            "output file '{}' already exists (use --force to overwrite)",
            output_path.display()
        );
    }

    let progress = create_progress_bar(args.quiet);
    let archive = split_kmz_with_progress(bytes, |_, token| {
        progress.set_message(token.to_string());
        progress.inc(1);
    })
    .with_context(|| format!("failed to split '{}'", args.input.display()))?;
    progress.finish_and_clear();

    fs::write(&output_path, &archive)
        .with_context(|| format!("failed to write output file '{}'", output_path.display()))?;

    if !args.quiet {
        println!(
            "{} {} ({} entries, {})",
            "Wrote".green().bold(),
            output_path.display(),
            BUCKET_COUNT,
            format_bytes(archive.len())
        );
        if args.verbose {
            println!(
                "  input: {} ({})",
                args.input.display(),
                format_bytes(input_size)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 bytes");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["kmzsplit", "sites.kmz", "-o", "out.zip", "--force"]);
        assert_eq!(args.input, PathBuf::from("sites.kmz"));
        assert_eq!(args.output, Some(PathBuf::from("out.zip")));
        assert!(args.force);
        assert!(!args.quiet);
    }
}
