//! # inkcast
//!
//! The touch-point prediction pipeline of a stylus note app: raw pen samples
//! flow through an optional vendor extrapolation engine, and the predicted
//! (or raw) points are rendered as pressure-weighted stroke segments.
//!
//! The GUI shell and the extrapolation algorithm itself are deliberately
//! outside this crate - hosts deliver [`stylus::PenEvent`]s to a
//! [`canvas::CanvasController`] and hand a [`render::Surface`] to
//! [`render::render`] on each frame.

pub mod canvas;
pub mod device;
pub mod predictor;
pub mod prefs;
pub mod render;
pub mod stylus;
