//! Bus route geometry builder.
//!
//! Joins bus stop segments with an OpenStreetMap-derived street network,
//! computes shortest paths between stop pairs (optionally forced through
//! manually curated via-nodes) and exports the resulting routes as map layers.

pub mod error;
pub mod export;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// OSM identifier of a street network node
pub type NodeId = i64;

/// Callback invoked once for every finished row of a bulk computation
pub type Progress<'a> = &'a (dyn Fn() + Sync);
