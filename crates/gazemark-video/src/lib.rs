//! Video stream plumbing over external ffmpeg processes.
//!
//! Decoding and encoding are delegated to `ffmpeg` children speaking raw
//! RGB24 over pipes; container metadata comes from `ffprobe`. Nothing in
//! this crate touches compressed bitstreams. Both binaries are located via
//! `PATH` at call time, and a missing binary surfaces as the corresponding
//! stage error rather than a panic.

pub mod error;
pub mod merge;
pub mod probe;
pub mod reader;
pub mod transcode;
pub mod writer;

pub use error::VideoError;
pub use merge::combine_side_by_side;
pub use probe::{StreamInfo, probe};
pub use reader::VideoReader;
pub use transcode::transcode_for_streaming;
pub use writer::VideoWriter;
