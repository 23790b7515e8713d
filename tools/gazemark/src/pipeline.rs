//! End-to-end stereo overlay pipeline.
//!
//! Splits telemetry by eye, annotates each eye's video frame by frame in
//! lockstep with its records, then merges the two annotated outputs side
//! by side.

use std::fmt;
use std::path::{Path, PathBuf};

use gazemark_projector::{ProjectError, project};
use gazemark_render::{MarkerStyle, annotate};
use gazemark_telemetry::{ParseError, TelemetryRecord, parse_telemetry_file};
use gazemark_video::{VideoError, VideoReader, VideoWriter, combine_side_by_side};

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub csv: PathBuf,
    pub left: PathBuf,
    pub right: PathBuf,
    pub output_prefix: String,
    pub alpha: f64,
    pub style: MarkerStyle,
}

impl PipelineConfig {
    pub fn left_output(&self) -> PathBuf {
        PathBuf::from(format!("{}_left_eye_overlay.mp4", self.output_prefix))
    }

    pub fn right_output(&self) -> PathBuf {
        PathBuf::from(format!("{}_right_eye_overlay.mp4", self.output_prefix))
    }

    pub fn merged_output(&self) -> PathBuf {
        PathBuf::from(format!("{}_merged.mp4", self.output_prefix))
    }
}

#[derive(Debug)]
pub enum PipelineError {
    Parse(ParseError),
    Project(ProjectError),
    Video(VideoError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Parse(err) => write!(f, "telemetry error: {err}"),
            PipelineError::Project(err) => write!(f, "projection error: {err}"),
            PipelineError::Video(err) => write!(f, "video error: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ParseError> for PipelineError {
    fn from(err: ParseError) -> Self {
        PipelineError::Parse(err)
    }
}

impl From<ProjectError> for PipelineError {
    fn from(err: ProjectError) -> Self {
        PipelineError::Project(err)
    }
}

impl From<VideoError> for PipelineError {
    fn from(err: VideoError) -> Self {
        PipelineError::Video(err)
    }
}

/// Run the full pipeline: parse, annotate both eyes, merge.
pub fn run(config: &PipelineConfig) -> Result<(), PipelineError> {
    let sequence = parse_telemetry_file(&config.csv)?;
    log::info!(
        "parsed {} telemetry records from {}",
        sequence.len(),
        config.csv.display()
    );

    let (left_records, right_records) = sequence.split_eyes();
    let ignored = sequence.len() - left_records.len() - right_records.len();
    if ignored > 0 {
        log::info!("ignoring {ignored} records with view index outside 0/1");
    }
    log::info!(
        "{} left eye and {} right eye records",
        left_records.len(),
        right_records.len()
    );

    process_eye(
        &config.left,
        &config.left_output(),
        &left_records,
        "LEFT",
        config,
    )?;
    process_eye(
        &config.right,
        &config.right_output(),
        &right_records,
        "RIGHT",
        config,
    )?;

    let merged = config.merged_output();
    combine_side_by_side(&config.left_output(), &config.right_output(), &merged)?;
    log::info!("final merged video at {}", merged.display());
    Ok(())
}

/// Annotate one eye's video with its record sequence.
///
/// Frames and records advance in lockstep; the pass ends at whichever runs
/// out first. A decode failure mid-stream ends the pass early but keeps
/// the frames already written. Projection and encode failures abort the
/// run. Returns the number of frames written.
pub fn process_eye(
    input: &Path,
    output: &Path,
    records: &[TelemetryRecord],
    role: &str,
    config: &PipelineConfig,
) -> Result<u64, PipelineError> {
    let mut reader = VideoReader::open(input)?;
    let info = *reader.info();
    let fps = if info.fps > 0.0 { info.fps } else { 30.0 };
    let mut writer = VideoWriter::create(output, info.width, info.height, fps)?;

    let planned = match info.frames {
        Some(frames) => (frames as usize).min(records.len()),
        None => records.len(),
    };
    log::info!(
        "{role}: annotating up to {planned} frames of {} ({}x{} at {fps} fps)",
        input.display(),
        info.width,
        info.height
    );

    let mut written = 0u64;
    for (i, record) in records.iter().take(planned).enumerate() {
        let frame = match reader.read_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                log::info!("{role}: stream ended after {written} frames");
                break;
            }
            Err(err) => {
                log::warn!("{role}: read failed after {written} frames: {err}");
                break;
            }
        };
        let point = project(record, info.width, info.height)?;
        let label = format!("{role} EYE - FRAME: {i}");
        let annotated = annotate(
            &frame,
            info.width as usize,
            info.height as usize,
            point,
            &label,
            config.alpha,
            &config.style,
        );
        writer.write_frame(&annotated)?;
        written += 1;
        if written % 100 == 0 {
            log::info!("{role}: {written} frames done");
        }
    }
    writer.finish()?;
    log::info!("{role}: wrote {written} frames to {}", output.display());
    Ok(written)
}
