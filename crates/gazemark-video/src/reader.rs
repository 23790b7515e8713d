use std::io::Read;
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::VideoError;
use crate::probe::{StreamInfo, probe};

/// Decoding half of the ffmpeg pipe pair.
///
/// Probes the container, then spawns an ffmpeg child that decodes the first
/// video stream to raw RGB24 on stdout. Frames are pulled one at a time
/// with [`read_frame`](VideoReader::read_frame). Dropping the reader kills
/// the child if it is still running so no pipe outlives the handle.
#[derive(Debug)]
pub struct VideoReader {
    child: Child,
    stdout: ChildStdout,
    info: StreamInfo,
    finished: bool,
}

impl VideoReader {
    /// Open `path` for decoding.
    pub fn open(path: &Path) -> Result<Self, VideoError> {
        if !path.exists() {
            return Err(VideoError::Open(format!(
                "no such file: {}",
                path.display()
            )));
        }
        let info = probe(path)?;
        let mut child = Command::new("ffmpeg")
            .args(["-v", "error", "-i"])
            .arg(path)
            .args(["-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| VideoError::Open(format!("failed to spawn ffmpeg: {e}")))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| VideoError::Open("ffmpeg stdout unavailable".to_string()))?;
        Ok(Self {
            child,
            stdout,
            info,
            finished: false,
        })
    }

    /// Stream metadata captured by the probe.
    pub fn info(&self) -> &StreamInfo {
        &self.info
    }

    /// Read the next frame.
    ///
    /// `Ok(None)` is clean end of stream; a frame cut short mid-way is an
    /// error. After end of stream the child is reaped and further calls
    /// keep returning `Ok(None)`.
    pub fn read_frame(&mut self) -> Result<Option<Vec<u8>>, VideoError> {
        if self.finished {
            return Ok(None);
        }
        let mut frame = vec![0u8; self.info.frame_len()];
        let mut filled = 0;
        while filled < frame.len() {
            let n = match self.stdout.read(&mut frame[filled..]) {
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(VideoError::Read(e.to_string())),
            };
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == 0 {
            self.finish();
            return Ok(None);
        }
        if filled < frame.len() {
            return Err(VideoError::Read(format!(
                "short frame: got {filled} of {} bytes",
                frame.len()
            )));
        }
        Ok(Some(frame))
    }

    // Reap the child after the pipe drained.
    fn finish(&mut self) {
        self.finished = true;
        match self.child.wait() {
            Ok(status) if !status.success() => {
                log::warn!("ffmpeg decoder exited with {status}");
            }
            Ok(_) => {}
            Err(e) => log::warn!("failed to wait for ffmpeg decoder: {e}"),
        }
    }
}

impl Drop for VideoReader {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
