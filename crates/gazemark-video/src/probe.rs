use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use crate::VideoError;

/// Metadata of a container's first video stream, as reported by ffprobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
    /// Frames per second; 0.0 when the container does not report a rate.
    pub fps: f64,
    /// Total frame count, when the container reports one.
    pub frames: Option<u64>,
}

impl StreamInfo {
    /// Size in bytes of one RGB24 frame at this geometry.
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    width: Option<u32>,
    height: Option<u32>,
    avg_frame_rate: Option<String>,
    nb_frames: Option<String>,
}

/// Query the first video stream of `path` with ffprobe.
pub fn probe(path: &Path) -> Result<StreamInfo, VideoError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height,avg_frame_rate,nb_frames",
            "-print_format",
            "json",
        ])
        .arg(path)
        .output()
        .map_err(|e| VideoError::Probe(format!("failed to run ffprobe: {e}")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VideoError::Probe(format!(
            "ffprobe failed for {}: {}",
            path.display(),
            stderr.trim()
        )));
    }
    parse_probe_json(&String::from_utf8_lossy(&output.stdout))
}

/// Parse ffprobe `-print_format json` output into a `StreamInfo`.
pub fn parse_probe_json(json: &str) -> Result<StreamInfo, VideoError> {
    let parsed: ProbeOutput = serde_json::from_str(json)?;
    let stream = parsed
        .streams
        .into_iter()
        .next()
        .ok_or_else(|| VideoError::Probe("no video stream found".to_string()))?;
    let width = stream.width.unwrap_or(0);
    let height = stream.height.unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(VideoError::Probe(format!(
            "invalid stream geometry {width}x{height}"
        )));
    }
    let fps = stream.avg_frame_rate.as_deref().map_or(0.0, parse_rational);
    let frames = stream.nb_frames.and_then(|s| s.parse().ok());
    Ok(StreamInfo {
        width,
        height,
        fps,
        frames,
    })
}

// ffprobe reports rates as "num/den" ("0/0" when unknown). Malformed or
// zero-denominator fields collapse to 0.0 so callers can apply a default.
fn parse_rational(s: &str) -> f64 {
    let mut parts = s.splitn(2, '/');
    let num: f64 = match parts.next().and_then(|p| p.trim().parse().ok()) {
        Some(n) => n,
        None => return 0.0,
    };
    match parts.next() {
        Some(d) => match d.trim().parse::<f64>() {
            Ok(den) if den != 0.0 => num / den,
            _ => 0.0,
        },
        None => num,
    }
}
