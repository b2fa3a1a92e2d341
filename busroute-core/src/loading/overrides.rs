use std::io::Read;
use std::path::Path;

use log::{info, warn};

use super::{
    parser::{deserialize_csv_file, deserialize_csv_reader, parse_via_nodes},
    raw_types::OverrideRow,
};
use crate::{Error, model::ViaOverride};

/// Loads manual via-node corrections (`from_stop_name`, `to_stop_name`, `via`).
///
/// Rows whose via list cannot be parsed are rejected here with a warning and
/// never reach routing.
pub fn load_overrides(path: &Path) -> Result<Vec<ViaOverride>, Error> {
    let rows: Vec<OverrideRow> = deserialize_csv_file(path)?;
    let overrides = convert_rows(rows);
    info!(
        "Loaded {} route overrides from {}",
        overrides.len(),
        path.display()
    );
    Ok(overrides)
}

/// Same as [`load_overrides`] for an in-memory source
pub fn parse_overrides<R: Read>(reader: R) -> Result<Vec<ViaOverride>, Error> {
    let rows: Vec<OverrideRow> = deserialize_csv_reader(reader, "overrides")?;
    Ok(convert_rows(rows))
}

fn convert_rows(rows: Vec<OverrideRow>) -> Vec<ViaOverride> {
    rows.into_iter()
        .filter_map(|row| match parse_via_nodes(&row.via) {
            Ok(via) => Some(ViaOverride {
                from_stop_name: row.from_stop_name,
                to_stop_name: row.to_stop_name,
                via,
            }),
            Err(e) => {
                warn!(
                    "Rejecting override {} -> {}: {e}",
                    row.from_stop_name, row.to_stop_name
                );
                None
            }
        })
        .collect()
}
