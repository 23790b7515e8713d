/// Pixel coordinates on one eye's display.
///
/// Produced fresh for every frame; both coordinates stay within
/// `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Geometric center of a screen, the fallback for off-screen gazes.
    pub fn center(width: u32, height: u32) -> Self {
        Self {
            x: width as f64 / 2.0,
            y: height as f64 / 2.0,
        }
    }
}
