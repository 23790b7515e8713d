use crate::font;
use gazemark_projector::ScreenPoint;

/// Visual constants for the gaze marker overlay.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// Ring radius in pixels.
    pub radius: f64,
    /// Thickness of the solid ring band.
    pub ring_thickness: f64,
    /// Ring fill color (RGB).
    pub ring_color: [u8; 3],
    /// Width of the soft shadow band outside the ring.
    pub shadow_width: f64,
    /// Darkening at the ring edge, fading to zero at the shadow's outer
    /// edge. 0..1.
    pub shadow_strength: f64,
    /// Top-left corner of the frame label in pixels.
    pub label_origin: (usize, usize),
    /// Integer scale factor for the built-in font.
    pub label_scale: usize,
    /// Label color (RGB).
    pub label_color: [u8; 3],
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 200.0,
            ring_thickness: 24.0,
            ring_color: [153, 84, 255],
            shadow_width: 20.0,
            shadow_strength: 0.7,
            label_origin: (50, 50),
            label_scale: 3,
            label_color: [0, 0, 0],
        }
    }
}

/// Composite the gaze marker and frame label onto a copy of `frame`.
///
/// `frame` is an RGB24 buffer of `width * height * 3` bytes and is left
/// untouched. The marker is a solid ring over a radial shadow whose
/// darkening fades linearly across `shadow_width`; both blend with the
/// caller-supplied global transparency `alpha` in 0..1 and clip at the
/// frame edges. The label is drawn last at full opacity.
pub fn annotate(
    frame: &[u8],
    width: usize,
    height: usize,
    point: ScreenPoint,
    label: &str,
    alpha: f64,
    style: &MarkerStyle,
) -> Vec<u8> {
    debug_assert_eq!(frame.len(), width * height * 3);
    let mut out = frame.to_vec();

    let ring_outer = style.radius + style.ring_thickness / 2.0;
    let reach = ring_outer + style.shadow_width;

    let x_min = (point.x - reach).floor().max(0.0) as usize;
    let y_min = (point.y - reach).floor().max(0.0) as usize;
    let x_max = (point.x + reach).ceil().min(width as f64 - 1.0).max(0.0) as usize;
    let y_max = (point.y + reach).ceil().min(height as f64 - 1.0).max(0.0) as usize;

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f64 - point.x;
            let dy = y as f64 - point.y;
            let dist = (dx * dx + dy * dy).sqrt();

            let idx = (y * width + x) * 3;
            if (dist - style.radius).abs() <= style.ring_thickness / 2.0 {
                blend_pixel(&mut out[idx..idx + 3], style.ring_color, alpha);
            } else if dist > ring_outer && dist <= reach {
                let falloff = 1.0 - (dist - ring_outer) / style.shadow_width;
                darken_pixel(&mut out[idx..idx + 3], alpha * style.shadow_strength * falloff);
            }
        }
    }

    font::draw_text(
        &mut out,
        width,
        height,
        style.label_origin.0,
        style.label_origin.1,
        label,
        style.label_color,
        style.label_scale,
    );
    out
}

fn blend_pixel(px: &mut [u8], color: [u8; 3], alpha: f64) {
    for (channel, target) in px.iter_mut().zip(color) {
        let blended = f64::from(*channel) * (1.0 - alpha) + f64::from(target) * alpha;
        *channel = blended.round() as u8;
    }
}

fn darken_pixel(px: &mut [u8], amount: f64) {
    for channel in px.iter_mut() {
        *channel = (f64::from(*channel) * (1.0 - amount)).round() as u8;
    }
}
