//! Frame annotation for gaze overlays.
//!
//! Draws the layered gaze marker (a soft radial shadow under a solid ring)
//! and a per-frame text label onto raw RGB24 frames.

pub mod font;
pub mod marker;

pub use marker::{MarkerStyle, annotate};
