use gazemark_base::{Quat, Vec3};
use gazemark_projector::{ProjectError, ScreenPoint, project};
use gazemark_telemetry::{Fov, TelemetryRecord};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

const WIDTH: u32 = 2160;
const HEIGHT: u32 = 2224;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn symmetric_fov(half: f64) -> Fov {
    Fov {
        left: -half,
        right: half,
        down: -half,
        up: half,
    }
}

fn record(camera: Quat, gaze: Quat, fov: Fov) -> TelemetryRecord {
    TelemetryRecord {
        view_index: 0,
        fov,
        position: Vec3::zero(),
        camera_orientation: camera,
        gaze_orientation: gaze,
        gaze_position: Vec3::zero(),
    }
}

fn yaw(angle: f64) -> Quat {
    Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), angle)
}

fn pitch(angle: f64) -> Quat {
    Quat::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), angle)
}

// --- Center fallbacks ---

#[test]
fn test_forward_gaze_symmetric_fov_is_exact_center() {
    let r = record(Quat::identity(), Quat::identity(), symmetric_fov(FRAC_PI_4));
    let p = project(&r, WIDTH, HEIGHT).unwrap();
    assert_eq!(p, ScreenPoint::center(WIDTH, HEIGHT));
}

#[test]
fn test_identical_camera_and_gaze_centers() {
    // Relative rotation collapses to identity for any shared orientation
    let q = yaw(0.4);
    let r = record(q, q, symmetric_fov(FRAC_PI_4));
    let p = project(&r, WIDTH, HEIGHT).unwrap();
    let center = ScreenPoint::center(WIDTH, HEIGHT);
    assert!(approx_eq(p.x, center.x));
    assert!(approx_eq(p.y, center.y));
}

#[test]
fn test_gaze_behind_screen_maps_to_center() {
    let r = record(Quat::identity(), yaw(PI), symmetric_fov(FRAC_PI_4));
    let p = project(&r, WIDTH, HEIGHT).unwrap();
    assert_eq!(p, ScreenPoint::center(WIDTH, HEIGHT));
}

#[test]
fn test_gaze_well_past_parallel_maps_to_center() {
    // 135 degrees of yaw leaves a clearly positive z component
    let r = record(Quat::identity(), yaw(3.0 * FRAC_PI_4), symmetric_fov(FRAC_PI_4));
    let p = project(&r, WIDTH, HEIGHT).unwrap();
    assert_eq!(p, ScreenPoint::center(WIDTH, HEIGHT));
}

// --- Known values ---

#[test]
fn test_yaw_moves_marker_left() {
    let angle = 0.2;
    let r = record(Quat::identity(), yaw(angle), symmetric_fov(FRAC_PI_4));
    let p = project(&r, WIDTH, HEIGHT).unwrap();

    // Positive yaw swings the forward direction toward -X
    let expected_x = (1.0 - angle.tan() / FRAC_PI_4.tan()) / 2.0 * WIDTH as f64;
    assert!(approx_eq(p.x, expected_x), "x = {}, expected {expected_x}", p.x);
    assert!(p.x < WIDTH as f64 / 2.0);
    assert!(approx_eq(p.y, HEIGHT as f64 / 2.0));
}

#[test]
fn test_pitch_moves_marker_up() {
    let angle = 0.3;
    let r = record(Quat::identity(), pitch(angle), symmetric_fov(FRAC_PI_4));
    let p = project(&r, WIDTH, HEIGHT).unwrap();

    // Positive pitch looks up; with a top-left origin that means smaller y
    let expected_y = (1.0 - angle.tan() / FRAC_PI_4.tan()) / 2.0 * HEIGHT as f64;
    assert!(approx_eq(p.y, expected_y), "y = {}, expected {expected_y}", p.y);
    assert!(p.y < HEIGHT as f64 / 2.0);
    assert!(approx_eq(p.x, WIDTH as f64 / 2.0));
}

#[test]
fn test_asymmetric_fov_shifts_forward_gaze() {
    // Frustum reaching 30 degrees left and 60 degrees right puts the
    // forward direction a quarter of the way across the screen
    let fov = Fov {
        left: -FRAC_PI_6,
        right: FRAC_PI_3,
        down: -FRAC_PI_4,
        up: FRAC_PI_4,
    };
    let r = record(Quat::identity(), Quat::identity(), fov);
    let p = project(&r, WIDTH, HEIGHT).unwrap();
    assert!(approx_eq(p.x, WIDTH as f64 / 4.0), "x = {}", p.x);
    assert!(approx_eq(p.y, HEIGHT as f64 / 2.0));
}

// --- Clamping ---

#[test]
fn test_gaze_outside_narrow_fov_clamps_to_edges() {
    let fov = symmetric_fov(0.1745);
    let left = project(&record(Quat::identity(), yaw(FRAC_PI_4), fov), WIDTH, HEIGHT).unwrap();
    assert_eq!(left.x, 0.0);
    let right = project(&record(Quat::identity(), yaw(-FRAC_PI_4), fov), WIDTH, HEIGHT).unwrap();
    assert_eq!(right.x, WIDTH as f64);
}

#[test]
fn test_projection_stays_in_bounds() {
    let fov = symmetric_fov(FRAC_PI_6);
    let mut angle = -1.2;
    while angle <= 1.2 {
        let mut tilt = -1.2;
        while tilt <= 1.2 {
            let gaze = yaw(angle) * pitch(tilt);
            let p = project(&record(Quat::identity(), gaze, fov), WIDTH, HEIGHT).unwrap();
            assert!(p.x >= 0.0 && p.x <= WIDTH as f64, "x = {} out of bounds", p.x);
            assert!(p.y >= 0.0 && p.y <= HEIGHT as f64, "y = {} out of bounds", p.y);
            tilt += 0.3;
        }
        angle += 0.3;
    }
}

// --- Degenerate FOV ---

#[test]
fn test_degenerate_horizontal_fov() {
    let fov = Fov {
        left: 0.5,
        right: 0.5,
        down: -FRAC_PI_4,
        up: FRAC_PI_4,
    };
    let err = project(&record(Quat::identity(), Quat::identity(), fov), WIDTH, HEIGHT)
        .unwrap_err();
    assert_eq!(err, ProjectError::DegenerateFov { axis: "horizontal" });
    assert_eq!(
        format!("{err}"),
        "degenerate field of view: zero horizontal tangent span"
    );
}

#[test]
fn test_degenerate_vertical_fov() {
    let fov = Fov {
        left: -FRAC_PI_4,
        right: FRAC_PI_4,
        down: -0.25,
        up: -0.25,
    };
    let err = project(&record(Quat::identity(), Quat::identity(), fov), WIDTH, HEIGHT)
        .unwrap_err();
    assert_eq!(err, ProjectError::DegenerateFov { axis: "vertical" });
}

// --- ScreenPoint ---

#[test]
fn test_center_constructor() {
    let c = ScreenPoint::center(2160, 2224);
    assert_eq!(c, ScreenPoint::new(1080.0, 1112.0));
}
