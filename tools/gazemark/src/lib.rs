//! Command-line stereo gaze overlay tool.
//!
//! The `gazemark` binary runs the full pipeline: parse session telemetry,
//! annotate the left and right eye videos with the projected gaze marker,
//! and merge the annotated pair side by side. The `gazemark-merge` binary
//! runs only the merge step over two existing videos.

pub mod args;
pub mod pipeline;
