use bgakit_core::{bin_bounds, invert_gray, GrayImageView};
use log::{debug, info};

use crate::block::{analyze_bin, BinBlock};
use crate::occupancy::OccupancyGrid;
use crate::suppress::suppress_cross;
use crate::threshold::select_threshold;

/// Bins with x or y spread below this fraction hold only a line segment,
/// not a round pad, and are rejected outright.
const MIN_SPREAD: f32 = 0.2;

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("bin counts must be at least 1 (got {nx} x {ny})")]
    EmptyLattice { nx: usize, ny: usize },

    #[error("image of {width} x {height} px is smaller than the {nx} x {ny} bin lattice")]
    ImageTooSmall {
        width: usize,
        height: usize,
        nx: usize,
        ny: usize,
    },
}

/// Turns a grayscale photograph into a boolean ball occupancy grid.
///
/// The bin lattice dimensions are fixed at construction; every extraction
/// from this instance produces a grid of exactly `(ny, nx)` cells.
#[derive(Clone, Copy, Debug)]
pub struct GridExtractor {
    nx: usize,
    ny: usize,
}

impl GridExtractor {
    pub fn new(nx: usize, ny: usize) -> Result<Self, ExtractError> {
        if nx == 0 || ny == 0 {
            return Err(ExtractError::EmptyLattice { nx, ny });
        }
        Ok(Self { nx, ny })
    }

    /// Extract the occupancy grid from `img`.
    ///
    /// The image is inverted first, so the dark-pads-on-light-background
    /// convention of datasheet photographs turns pads into lit pixels.
    /// Bins are visited in row-major order; each is cross-suppressed and
    /// measured, line-only bins are zeroed, and the contents matrix is
    /// binarized with `contents >= threshold`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "info", skip(self, img), fields(width = img.width, height = img.height))
    )]
    pub fn extract(&self, img: &GrayImageView<'_>) -> Result<OccupancyGrid, ExtractError> {
        if img.width < self.nx || img.height < self.ny {
            return Err(ExtractError::ImageTooSmall {
                width: img.width,
                height: img.height,
                nx: self.nx,
                ny: self.ny,
            });
        }

        let inverted = invert_gray(img);
        let view = inverted.as_view();

        let mut contents = vec![0f32; self.nx * self.ny];
        for y_idx in 0..self.ny {
            for x_idx in 0..self.nx {
                let bounds = bin_bounds(img.width, img.height, self.nx, self.ny, x_idx, y_idx);
                let block = BinBlock::crop(&view, bounds);
                let cleaned = suppress_cross(&block);
                let metrics = analyze_bin(&cleaned);

                // A thin line has spread on one axis only; a ball has both.
                let value = if metrics.x_spread < MIN_SPREAD || metrics.y_spread < MIN_SPREAD {
                    0.0
                } else {
                    metrics.contents
                };
                contents[y_idx * self.nx + x_idx] = value;
            }
        }

        let threshold = select_threshold(
            &contents,
            img.width as f32 / self.nx as f32,
            img.height as f32 / self.ny as f32,
        );
        debug!("bin contents threshold: {threshold:.4}");

        let mut grid = OccupancyGrid::new(self.nx, self.ny);
        for y in 0..self.ny {
            for x in 0..self.nx {
                grid.set(x, y, contents[y * self.nx + x] >= threshold);
            }
        }
        info!(
            "extracted {} balls from a {} x {} lattice",
            grid.ball_count(),
            self.nx,
            self.ny
        );
        Ok(grid)
    }
}
