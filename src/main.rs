//! Main entry point for the ruzip CLI application.
//!
//! This binary provides a command-line interface for packing local files
//! and remote HTTP payloads into a ZIP archive.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use ruzip::{Cli, HttpSource, LocalFileSource, PayloadSource, ZipWriter, cli};

/// Application entry point.
///
/// Parses command-line arguments, materializes every input payload
/// (local file or HTTP URL), then assembles and writes the archive.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut writer = ZipWriter::new();
    let mut transferred = 0u64;

    // Every payload is fully materialized before assembly starts; the
    // writer buffers the whole archive in memory.
    for input in &cli.inputs {
        if cli::is_http_url(input) {
            let source = HttpSource::new(input.clone())
                .await
                .with_context(|| format!("failed to open {input}"))?;
            add_source(&mut writer, &source, entry_name_for_url(input), &cli).await?;
            transferred += source.transferred_bytes();
        } else {
            let source = LocalFileSource::new(Path::new(input))
                .with_context(|| format!("failed to open {input}"))?;
            add_source(
                &mut writer,
                &source,
                entry_name_for_path(input, cli.junk_paths),
                &cli,
            )
            .await?;
        }
    }

    let entry_count = writer.len();
    let archive = writer.assemble()?;

    if cli.is_stdout() {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(&archive).await?;
        stdout.flush().await?;
    } else {
        let output = Path::new(&cli.output);
        if output.exists() && !cli.overwrite {
            bail!("{} already exists (use -o to overwrite)", cli.output);
        }
        tokio::fs::write(output, &archive).await?;

        // Display a summary unless silenced
        if !cli.is_very_quiet() {
            let network = if transferred > 0 {
                format!(", {} transferred", format_size(transferred))
            } else {
                String::new()
            };
            eprintln!(
                "{}: {} entries, {}{}",
                cli.output,
                entry_count,
                format_size(archive.len() as u64),
                network
            );
        }
    }

    Ok(())
}

/// Materialize one payload source and append it to the archive.
///
/// # Arguments
///
/// * `writer` - The archive under construction
/// * `source` - A payload source implementing the `PayloadSource` trait
/// * `name` - The entry name to record in the archive
/// * `cli` - Parsed command-line arguments
async fn add_source<S: PayloadSource>(
    writer: &mut ZipWriter,
    source: &S,
    name: String,
    cli: &Cli,
) -> Result<()> {
    let payload = source.read_all().await?;

    if !cli.is_quiet() {
        println!("  adding: {} ({})", name, format_size(source.size()));
    }

    writer.add_entry(name, payload)?;
    Ok(())
}

/// Archive entry name for a local input path.
///
/// With junk paths enabled only the base name is kept. Otherwise the path
/// is stored as given, minus any leading `./` or root slashes, so entry
/// names stay relative.
fn entry_name_for_path(input: &str, junk_paths: bool) -> String {
    if junk_paths {
        Path::new(input)
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| input.to_string())
    } else {
        input
            .trim_start_matches("./")
            .trim_start_matches('/')
            .to_string()
    }
}

/// Archive entry name for a URL: the last path segment, query and
/// fragment stripped.
fn entry_name_for_url(url: &str) -> String {
    let without_query = match url.find(['?', '#']) {
        Some(i) => &url[..i],
        None => url,
    };
    without_query
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("download")
        .to_string()
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
