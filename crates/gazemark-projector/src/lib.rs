//! Gaze-to-screen projection.
//!
//! Converts a per-frame head/eye orientation record into pixel coordinates
//! on the matching eye's display, honoring asymmetric field-of-view bounds.

pub mod error;
pub mod types;

pub use error::ProjectError;
pub use types::ScreenPoint;

use gazemark_base::Vec3;
use gazemark_telemetry::TelemetryRecord;

/// Project a recorded gaze direction onto one eye's screen.
///
/// The gaze orientation is taken relative to the camera orientation and
/// applied to the view-space forward direction (0, 0, -1). A resulting
/// direction pointing away from or parallel to the screen plane maps to
/// the screen center. On-screen directions are normalized against the
/// tangents of the four FOV boundary angles, flipped vertically for the
/// top-left pixel origin, scaled by the screen dimensions, and clamped
/// to `[0, width] x [0, height]`.
///
/// # Errors
/// Returns `ProjectError::DegenerateFov` when the tangents of an FOV
/// boundary pair coincide and the normalization would divide by zero.
pub fn project(
    record: &TelemetryRecord,
    screen_width: u32,
    screen_height: u32,
) -> Result<ScreenPoint, ProjectError> {
    let relative = record.camera_orientation.inverse() * record.gaze_orientation;
    let gaze_dir = relative.rotate(Vec3::new(0.0, 0.0, -1.0));

    // Gaze pointing away from or parallel to the screen plane
    if gaze_dir.z >= 0.0 {
        return Ok(ScreenPoint::center(screen_width, screen_height));
    }

    let tan_left = record.fov.left.tan();
    let tan_right = record.fov.right.tan();
    let tan_down = record.fov.down.tan();
    let tan_up = record.fov.up.tan();

    let span_x = tan_right - tan_left;
    let span_y = tan_up - tan_down;
    if span_x == 0.0 {
        return Err(ProjectError::DegenerateFov { axis: "horizontal" });
    }
    if span_y == 0.0 {
        return Err(ProjectError::DegenerateFov { axis: "vertical" });
    }

    let h_ratio = gaze_dir.x / -gaze_dir.z;
    let v_ratio = gaze_dir.y / -gaze_dir.z;

    let x_norm = (h_ratio - tan_left) / span_x;
    let y_norm = 1.0 - (v_ratio - tan_down) / span_y;

    let width = screen_width as f64;
    let height = screen_height as f64;
    Ok(ScreenPoint {
        x: (x_norm * width).clamp(0.0, width),
        y: (y_norm * height).clamp(0.0, height),
    })
}
