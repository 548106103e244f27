//! Core types and utilities for BGA footprint extraction.
//!
//! This crate is intentionally small. It does *not* depend on any concrete
//! image codec; images are borrowed row-major 8-bit buffers.

mod coords;
mod image;
mod logger;

pub use coords::{bin_bounds, point_to_bin, BinBounds};
pub use image::{invert_gray, GrayImage, GrayImageView};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
