//! Rota CLI - look up staff shifts in a rota sheet

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rota::prelude::*;
use rota::{layout_to_json, load_layout, CsvWriteOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rota")]
#[command(author, version, about = "Look up staff shifts in a rota sheet")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every shift for a staff code
    #[command(alias = "s")]
    Search {
        /// Rota sheet: CSV file path or http(s) URL of a CSV export
        source: String,

        /// Nine-digit staff code
        code: String,

        /// Layout JSON file (default: standard sheet layout)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Search for any text instead of a nine-digit code
        #[arg(long)]
        any: bool,
    },

    /// Show the line a match at a given cell would produce
    Inspect {
        /// Rota sheet: CSV file path or http(s) URL of a CSV export
        source: String,

        /// Cell in A1 notation, e.g. B7
        cell: String,

        /// Layout JSON file (default: standard sheet layout)
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },

    /// Show sheet dimensions, title and period
    Info {
        /// Rota sheet: CSV file path or http(s) URL of a CSV export
        source: String,
    },

    /// Print the standard layout as JSON, a starting point for --layout
    Layout,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Numbered schedule lines
    Text,
    /// JSON array of match records
    Json,
    /// CSV, one row per match
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search {
            source,
            code,
            layout,
            format,
            any,
        } => search_code(&source, &code, layout.as_deref(), format, any),
        Commands::Inspect {
            source,
            cell,
            layout,
        } => inspect_cell(&source, &cell, layout.as_deref()),
        Commands::Info { source } => show_info(&source),
        Commands::Layout => print_layout(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn open_snapshot(source: &str, layout: Option<&Path>) -> Result<Snapshot> {
    let grid_source = GridSource::parse(source);
    let mut snapshot = Snapshot::open(grid_source)
        .with_context(|| format!("Failed to load sheet '{}'", source))?;

    if let Some(path) = layout {
        let layout = load_layout(path)
            .with_context(|| format!("Failed to read layout '{}'", path.display()))?;
        snapshot = snapshot.with_layout(layout);
    }

    Ok(snapshot)
}

fn search_code(
    source: &str,
    code: &str,
    layout: Option<&Path>,
    format: Format,
    any: bool,
) -> Result<()> {
    let token = if any {
        code.trim()
    } else {
        match validate_code(code)? {
            Some(code) => code,
            None => bail!("No code given"),
        }
    };
    if token.is_empty() {
        bail!("No search text given");
    }

    let snapshot = open_snapshot(source, layout)?;
    let results = snapshot.search(token)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        Format::Text => {
            if results.is_empty() {
                writeln!(out, "No results found for \"{}\"", token)?;
            }
            for (i, record) in results.iter().enumerate() {
                writeln!(out, "Shift {}: {}", i + 1, record.formatted)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &results)
                .context("Failed to write JSON")?;
            writeln!(out)?;
        }
        Format::Csv => {
            CsvWriter::write_matches(&mut out, &results, &CsvWriteOptions::default())
                .context("Failed to write CSV")?;
        }
    }

    Ok(())
}

fn inspect_cell(source: &str, cell: &str, layout: Option<&Path>) -> Result<()> {
    let addr = CellAddress::parse(cell)?;
    let snapshot = open_snapshot(source, layout)?;
    let grid = snapshot.grid().context("Sheet not loaded")?;

    let record = Searcher::new(grid)
        .with_layout(snapshot.layout().clone())
        .record_at(addr)
        .with_context(|| format!("Cell {} is outside the sheet", addr))?;

    println!("Cell: {}", record.coordinates);
    for (field, value) in record.components.iter() {
        println!("  {} ({}): {}", field, field.description(), value);
    }
    println!();
    println!("{}", record.formatted);

    Ok(())
}

fn show_info(source: &str) -> Result<()> {
    let snapshot = open_snapshot(source, None)?;
    let grid = snapshot.grid().context("Sheet not loaded")?;
    let globals = Searcher::new(grid).globals();

    println!("Source: {}", snapshot.source());
    println!("Rows: {}", grid.row_count());
    println!("Widest row: {} cells", grid.max_row_len());
    println!("Cells: {}", grid.cell_count());
    println!("Title: {}", globals.title);
    println!("Period: {}", globals.period);

    Ok(())
}

fn print_layout() -> Result<()> {
    println!("{}", layout_to_json(&SheetLayout::default())?);
    Ok(())
}
