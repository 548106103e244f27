//! Ball occupancy grid extraction from BGA photographs.
//!
//! The extractor partitions an inverted grayscale image into an `nx` x `ny`
//! bin lattice, measures per-bin fill and spread, rejects gridline and
//! alignment-cross artifacts, and binarizes the bin contents with an
//! adaptively chosen global threshold.
//!
//! ## Quickstart
//!
//! ```
//! use bgakit_core::GrayImageView;
//! use bgakit_grid::GridExtractor;
//!
//! let pixels = vec![255u8; 64 * 64]; // white background, no balls
//! let img = GrayImageView { width: 64, height: 64, data: &pixels };
//!
//! let grid = GridExtractor::new(8, 8).unwrap().extract(&img).unwrap();
//! assert_eq!((grid.nx(), grid.ny()), (8, 8));
//! ```
//!
//! Pipeline, per bin in row-major order:
//! 1. Crop the bin's pixel rectangle from the inverted image.
//! 2. Blank out near-fully-lit rows/columns (alignment crosses, rulings).
//! 3. Measure fill ratio and horizontal/vertical spread.
//! 4. Reject line-only bins (spread below 0.2 on either axis).
//!
//! The resulting contents matrix is thresholded with Otsu's method for
//! coarse images (<= 10 px per bin) or iterative global thresholding
//! otherwise.

mod block;
mod extract;
mod occupancy;
mod suppress;
mod threshold;

pub use block::{analyze_bin, BinBlock, BinMetrics, LIT_CUTOFF};
pub use extract::{ExtractError, GridExtractor};
pub use occupancy::OccupancyGrid;
pub use suppress::suppress_cross;
pub use threshold::{iterative_threshold, otsu_threshold, select_threshold};
