//! High-level facade crate for the `bgakit-*` workspace.
//!
//! Turns a photograph of a BGA package into a PCB footprint: pad positions,
//! silkscreen outline, courtyard and orientation marker, rendered as an
//! EAGLE script, an XML footprint library or a TSV pad table.
//!
//! This crate provides:
//! - stable re-exports of the underlying crates
//! - (feature `image`, default on) end-to-end helpers that decode an image,
//!   extract the ball occupancy grid and render the footprint.
//!
//! ## Quickstart
//!
//! ```no_run
//! use bgakit::pipeline::{self, FootprintParams, OutputFormat};
//! use bgakit::plot::PinCorner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = pipeline::load_gray("bga_photo.png")?;
//! let params = FootprintParams {
//!     nx: 12,
//!     ny: 12,
//!     pitch: 0.8,
//!     pad_diameter: 0.4,
//!     package_width: 11.0,
//!     package_height: 11.0,
//!     pin_a1_corner: PinCorner::Nw,
//!     bottom_view: false,
//! };
//!
//! let grid = pipeline::extract_grid(&img, &params)?;
//! let script = pipeline::render_footprint(&grid, &params, OutputFormat::EagleScript)?;
//! println!("{script}");
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`]: image views, bin coordinate mapping, logging.
//! - [`grid`]: occupancy grid extraction from grayscale images.
//! - [`plot`]: footprint geometry generation and output backends.
//! - [`pipeline`] (feature `image`): end-to-end helpers from file paths and
//!   `image::GrayImage` buffers, plus the diagnostic overlay.

pub use bgakit_core as core;
pub use bgakit_grid as grid;
pub use bgakit_plot as plot;

pub use bgakit_grid::{GridExtractor, OccupancyGrid};
pub use bgakit_plot::{plot_footprint, Ball, FootprintSink, PackageGeometry, PinCorner};

#[cfg(feature = "image")]
pub mod pipeline;
