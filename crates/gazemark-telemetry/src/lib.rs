//! Telemetry ingestion for gaze overlay sessions.
//!
//! Parses per-frame head and eye orientation records from tabular text,
//! either a headered CSV or the legacy whitespace-separated layout, into
//! validated [`TelemetryRecord`] sequences.

pub mod error;
pub mod parse;
pub mod record;

pub use error::ParseError;
pub use parse::{COLUMNS, parse_telemetry_file, parse_telemetry_str};
pub use record::{Fov, TelemetryRecord, TelemetrySequence};
