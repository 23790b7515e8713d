use std::path::Path;
use std::process::Command;

use crate::VideoError;

/// Re-encode `input` into a widely playable streaming layout.
///
/// One blocking ffmpeg pass: H.264, yuv420p, the moov atom moved up front,
/// resampled to 30 fps. mpeg4 intermediates from [`crate::VideoWriter`] pass
/// through here to become their final artifacts.
pub fn transcode_for_streaming(input: &Path, output: &Path) -> Result<(), VideoError> {
    log::info!("transcoding {} -> {}", input.display(), output.display());
    let result = Command::new("ffmpeg")
        .args(["-v", "error", "-y", "-i"])
        .arg(input)
        .args([
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
            "-r",
            "30",
        ])
        .arg(output)
        .output()
        .map_err(|e| VideoError::Transcode(format!("failed to run ffmpeg: {e}")))?;
    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(VideoError::Transcode(format!(
            "ffmpeg exited with {}: {}",
            result.status,
            stderr.trim()
        )));
    }
    Ok(())
}
