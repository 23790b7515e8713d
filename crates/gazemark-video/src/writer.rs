use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::VideoError;

/// Encoding half of the ffmpeg pipe pair.
///
/// Spawns an ffmpeg child that consumes raw RGB24 frames on stdin and
/// encodes an mpeg4 container at `path`. Call
/// [`finish`](VideoWriter::finish) to close the pipe and check the encoder
/// exit status; dropping without it still closes the pipe and waits so a
/// partial file is flushed.
pub struct VideoWriter {
    child: Child,
    stdin: Option<ChildStdin>,
    frame_len: usize,
    finished: bool,
}

impl VideoWriter {
    /// Spawn an encoder writing to `path` at the given geometry and rate.
    pub fn create(path: &Path, width: u32, height: u32, fps: f64) -> Result<Self, VideoError> {
        let size = format!("{width}x{height}");
        let rate = format!("{fps}");
        let mut child = Command::new("ffmpeg")
            .args(["-v", "error", "-y", "-f", "rawvideo", "-pix_fmt", "rgb24"])
            .args(["-s", &size, "-r", &rate, "-i", "pipe:0"])
            .args(["-c:v", "mpeg4", "-q:v", "2"])
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| VideoError::Open(format!("failed to spawn ffmpeg: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| VideoError::Open("ffmpeg stdin unavailable".to_string()))?;
        Ok(Self {
            child,
            stdin: Some(stdin),
            frame_len: width as usize * height as usize * 3,
            finished: false,
        })
    }

    /// Push one RGB24 frame down the pipe.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<(), VideoError> {
        if frame.len() != self.frame_len {
            return Err(VideoError::Write(format!(
                "frame is {} bytes, expected {}",
                frame.len(),
                self.frame_len
            )));
        }
        match self.stdin.as_mut() {
            Some(stdin) => stdin
                .write_all(frame)
                .map_err(|e| VideoError::Write(e.to_string())),
            None => Err(VideoError::Write("encoder already finished".to_string())),
        }
    }

    /// Close the pipe and wait for the encoder to flush the container.
    pub fn finish(mut self) -> Result<(), VideoError> {
        self.finished = true;
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| VideoError::Write(e.to_string()))?;
        if !status.success() {
            return Err(VideoError::Write(format!(
                "ffmpeg encoder exited with {status}"
            )));
        }
        Ok(())
    }
}

impl Drop for VideoWriter {
    fn drop(&mut self) {
        if !self.finished {
            drop(self.stdin.take());
            let _ = self.child.wait();
        }
    }
}
