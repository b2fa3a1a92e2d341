//! Data model for bus route reconciliation
//!
//! Contains the street network graph and the tabular records flowing through
//! the routing pipeline.

pub mod path;
pub mod records;
pub mod streets;

pub use path::Path;
pub use records::{NetworkKind, OdRecord, RouteFeature, RoutedRecord, ViaOverride};
pub use streets::{RoadNetwork, StreetEdge, StreetGraph, StreetNode, Weight};
