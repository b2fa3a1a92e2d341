use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Edge references unknown node {0}")]
    UnknownNode(NodeId),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
