use std::path::{Path, PathBuf};

use crate::VideoError;
use crate::reader::VideoReader;
use crate::transcode::transcode_for_streaming;
use crate::writer::VideoWriter;

/// Path of the raw side-by-side intermediate for a final output path.
///
/// `out/merged.mp4` becomes `out/merged_raw.mp4`. The intermediate stays on
/// disk after the transcode pass.
pub fn raw_merge_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("merged");
    output.with_file_name(format!("{stem}_raw.mp4"))
}

/// Join two RGB24 frames of equal height side by side.
pub fn hconcat(
    left: &[u8],
    right: &[u8],
    left_width: usize,
    right_width: usize,
    height: usize,
) -> Vec<u8> {
    let left_row = left_width * 3;
    let right_row = right_width * 3;
    let mut out = Vec::with_capacity((left_row + right_row) * height);
    for y in 0..height {
        out.extend_from_slice(&left[y * left_row..(y + 1) * left_row]);
        out.extend_from_slice(&right[y * right_row..(y + 1) * right_row]);
    }
    out
}

/// Merge two videos into one side-by-side file at `output`.
///
/// Decodes both inputs in lockstep, concatenates frame pairs horizontally,
/// encodes the result to the raw intermediate next to `output`, then runs
/// the streaming transcode over it. The loop stops at the shorter stream.
/// The inputs must share a height; widths may differ. Output rate follows
/// the left input, defaulting to 30 when the container does not report one.
pub fn combine_side_by_side(left: &Path, right: &Path, output: &Path) -> Result<(), VideoError> {
    let mut left_reader = VideoReader::open(left)?;
    let mut right_reader = VideoReader::open(right)?;

    let left_info = *left_reader.info();
    let right_info = *right_reader.info();
    if left_info.height != right_info.height {
        return Err(VideoError::Merge(format!(
            "height mismatch: left {} vs right {}",
            left_info.height, right_info.height
        )));
    }

    let fps = if left_info.fps > 0.0 {
        left_info.fps
    } else {
        30.0
    };
    let raw_path = raw_merge_path(output);
    let out_width = left_info.width + right_info.width;
    let mut writer = VideoWriter::create(&raw_path, out_width, left_info.height, fps)?;

    log::info!(
        "merging {} + {} -> {} ({}x{})",
        left.display(),
        right.display(),
        raw_path.display(),
        out_width,
        left_info.height,
    );

    let height = left_info.height as usize;
    let mut merged = 0u64;
    loop {
        let (Some(frame_l), Some(frame_r)) =
            (left_reader.read_frame()?, right_reader.read_frame()?)
        else {
            break;
        };
        let combined = hconcat(
            &frame_l,
            &frame_r,
            left_info.width as usize,
            right_info.width as usize,
            height,
        );
        writer.write_frame(&combined)?;
        merged += 1;
        if merged % 100 == 0 {
            log::info!("merged {merged} frames");
        }
    }
    writer.finish()?;
    log::info!("merged {merged} frames into {}", raw_path.display());

    transcode_for_streaming(&raw_path, output)
}
