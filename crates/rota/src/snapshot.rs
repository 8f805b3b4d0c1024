//! Sheet snapshots
//!
//! A [`Snapshot`] owns the last grid loaded from a [`GridSource`]. Loading
//! replaces the grid wholesale, so a search always sees one complete sheet.

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};
use rota_core::{Grid, MatchRecord, Searcher, SheetLayout};
use rota_csv::{CsvReadOptions, CsvReader};

/// Where a sheet is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    /// Local CSV file
    File(PathBuf),
    /// CSV served over HTTP(S), e.g. a published sheet export
    Url(String),
}

impl GridSource {
    /// Interpret a command-line style source: URLs by scheme, anything else as a path
    pub fn parse(source: &str) -> Self {
        let lower = source.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            GridSource::Url(source.trim().to_string())
        } else {
            GridSource::File(PathBuf::from(source))
        }
    }

    /// Read the source into a fresh grid
    pub fn load(&self, options: &CsvReadOptions) -> Result<Grid> {
        match self {
            GridSource::File(path) => Ok(CsvReader::read_file(path, options)?),
            #[cfg(feature = "remote")]
            GridSource::Url(url) => Ok(rota_csv::remote::fetch_grid(url, options)?),
            #[cfg(not(feature = "remote"))]
            GridSource::Url(url) => Err(Error::UnsupportedSource(format!(
                "{url} (built without the `remote` feature)"
            ))),
        }
    }
}

impl fmt::Display for GridSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSource::File(path) => write!(f, "{}", path.display()),
            GridSource::Url(url) => f.write_str(url),
        }
    }
}

/// The current grid of one source
#[derive(Debug)]
pub struct Snapshot {
    source: GridSource,
    options: CsvReadOptions,
    layout: SheetLayout,
    grid: Option<Grid>,
}

impl Snapshot {
    /// A snapshot with nothing loaded yet
    pub fn new(source: GridSource) -> Self {
        Self {
            source,
            options: CsvReadOptions::default(),
            layout: SheetLayout::default(),
            grid: None,
        }
    }

    /// Load a source immediately
    pub fn open(source: GridSource) -> Result<Self> {
        let mut snapshot = Self::new(source);
        snapshot.refresh()?;
        Ok(snapshot)
    }

    pub fn with_options(mut self, options: CsvReadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn source(&self) -> &GridSource {
        &self.source
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// The loaded grid, if any
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.grid.is_some()
    }

    /// Re-read the source, replacing the current grid
    ///
    /// On failure the snapshot is left empty rather than holding stale data.
    pub fn refresh(&mut self) -> Result<&Grid> {
        self.grid = None;
        let grid = self.source.load(&self.options)?;
        tracing::debug!("Loaded {} rows from {}", grid.rows().len(), self.source);
        Ok(self.grid.insert(grid))
    }

    /// Install a grid obtained elsewhere
    pub fn replace(&mut self, grid: Grid) {
        self.grid = Some(grid);
    }

    /// Drop the current grid
    pub fn invalidate(&mut self) {
        self.grid = None;
    }

    /// Search the current grid
    pub fn search(&self, token: &str) -> Result<Vec<MatchRecord>> {
        let grid = self.grid.as_ref().ok_or(Error::NotLoaded)?;
        Ok(Searcher::new(grid)
            .with_layout(self.layout.clone())
            .search(token))
    }
}
