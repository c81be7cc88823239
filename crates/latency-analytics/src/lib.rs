//! Per-region latency and uptime analytics over a static telemetry dataset.
//!
//! Each request names a set of regions and a latency threshold; the dataset is
//! read from disk, records are matched to regions case-insensitively and the
//! average latency, interpolated p95 latency, average uptime percentage and
//! threshold breach count are returned per region.

mod error;
pub mod ingestor;
pub mod instrumentation;
pub mod processor;
pub mod server;
pub mod settings;

pub use error::{Error, Result};
