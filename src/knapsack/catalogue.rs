//! Loading an item catalogue from a delimited text file.
//!
//! The expected layout is a header row followed by one row per item with
//! four comma-separated columns: name, value, weight, volume. Fields are
//! whitespace-trimmed and the three numeric columns are parsed as
//! integers. Blank lines are skipped.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

use super::Item;

/// Failure to read or parse a catalogue file.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file")]
    Io(#[from] io::Error),

    /// The file does not even have a header row.
    #[error("catalogue is empty, expected a header row")]
    Empty,

    #[error("line {line}: expected 4 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {column} column is not an integer")]
    Field {
        line: usize,
        column: &'static str,
        #[source]
        source: ParseIntError,
    },
}

/// Reads a catalogue file from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Item>, CatalogueError> {
    parse(&fs::read_to_string(path)?)
}

/// Parses catalogue text: a header row, then `name,value,weight,volume`
/// rows. Item order in the returned catalogue is row order, which is the
/// order solution bits refer to.
pub fn parse(text: &str) -> Result<Vec<Item>, CatalogueError> {
    let mut lines = text.lines().enumerate();
    lines.next().ok_or(CatalogueError::Empty)?;

    let mut items = Vec::new();
    for (idx, raw) in lines {
        let line = idx + 1; // 1-based, matching editors
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(CatalogueError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        items.push(Item {
            name: fields[0].to_string(),
            value: parse_column(fields[1], line, "value")?,
            weight: parse_column(fields[2], line, "weight")?,
            volume: parse_column(fields[3], line, "volume")?,
        });
    }
    Ok(items)
}

fn parse_column(field: &str, line: usize, column: &'static str) -> Result<i64, CatalogueError> {
    field
        .parse()
        .map_err(|source| CatalogueError::Field {
            line,
            column,
            source,
        })
}
