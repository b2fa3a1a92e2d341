use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::{Error, NodeId};

/// Row-level failure to read a via-node list
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViaParseError {
    #[error("Invalid node id '{token}' in via list '{input}'")]
    InvalidNode { input: String, token: String },
}

pub(crate) fn deserialize_csv_file<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    deserialize_csv_reader(file, &path.display().to_string())
}

/// Reads all well-formed rows, skipping and counting the rest
pub(super) fn deserialize_csv_reader<T, R>(reader: R, source: &str) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    // Fail on a missing or unreadable header instead of skipping every row
    reader.headers()?;

    let mut skipped = 0usize;
    let rows = reader
        .deserialize()
        .filter_map(|row| match row {
            Ok(row) => Some(row),
            Err(e) => {
                debug!("Skipping row in {source}: {e}");
                skipped += 1;
                None
            }
        })
        .collect::<Vec<T>>();

    if skipped > 0 {
        warn!("Skipped {skipped} malformed rows in {source}");
    }
    Ok(rows)
}

/// Parses a comma separated list of node ids, e.g. `"123, 456"`.
/// A blank string is an empty list.
pub fn parse_via_nodes(input: &str) -> Result<Vec<NodeId>, ViaParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<NodeId>().map_err(|_| ViaParseError::InvalidNode {
                input: input.to_string(),
                token: token.to_string(),
            })
        })
        .collect()
}
