use std::path::PathBuf;

use clap::Parser;

/// Overlay gaze markers onto a stereo session recording and merge the
/// annotated eyes side by side.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Telemetry file with per-frame head and gaze orientations
    #[arg(long)]
    pub csv: PathBuf,

    /// Left eye session video
    #[arg(long)]
    pub left: PathBuf,

    /// Right eye session video
    #[arg(long)]
    pub right: PathBuf,

    /// Prefix for all produced files
    #[arg(short, long, default_value = "eye_gaze")]
    pub output: String,

    /// Marker opacity, 0.0 (invisible) to 1.0 (solid)
    #[arg(long, default_value_t = 0.8)]
    pub alpha: f64,

    /// Marker ring radius in pixels
    #[arg(long, default_value_t = 200.0)]
    pub radius: f64,
}

/// Merge two existing videos side by side and run the streaming transcode.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct MergeArgs {
    /// Left video
    #[arg(long)]
    pub left: PathBuf,

    /// Right video
    #[arg(long)]
    pub right: PathBuf,

    /// Final merged output path
    #[arg(short, long)]
    pub output: PathBuf,
}
