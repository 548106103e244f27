//! Stateless mapping between pixel coordinates and ball-grid bin indices.
//!
//! Bins partition the image by even floor division, so bins near the high
//! edge may be one pixel larger or smaller than nominal. Bins never overlap
//! and always cover the whole image.

/// Inclusive pixel bounds of one bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinBounds {
    pub x_min: usize,
    pub y_min: usize,
    pub x_max: usize,
    pub y_max: usize,
}

impl BinBounds {
    #[inline]
    pub fn width(&self) -> usize {
        self.x_max - self.x_min + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y_max - self.y_min + 1
    }
}

/// Inclusive pixel rectangle covering bin `(x_idx, y_idx)` of an
/// `nx` x `ny` lattice over a `width` x `height` image.
///
/// The last bin is clamped to the image's last pixel.
pub fn bin_bounds(
    width: usize,
    height: usize,
    nx: usize,
    ny: usize,
    x_idx: usize,
    y_idx: usize,
) -> BinBounds {
    let x_min = (x_idx * width) / nx;
    let x_max = (((x_idx + 1) * width) / nx).saturating_sub(1).min(width - 1);

    let y_min = (y_idx * height) / ny;
    let y_max = (((y_idx + 1) * height) / ny)
        .saturating_sub(1)
        .min(height - 1);

    BinBounds {
        x_min,
        y_min,
        x_max,
        y_max,
    }
}

/// Bin index `(x_idx, y_idx)` containing pixel `(px, py)`.
pub fn point_to_bin(
    width: usize,
    height: usize,
    nx: usize,
    ny: usize,
    px: usize,
    py: usize,
) -> (usize, usize) {
    let x_idx = ((px * nx) / width).min(nx - 1);
    let y_idx = ((py * ny) / height).min(ny - 1);
    (x_idx, y_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_image_without_overlap() {
        let (w, h, nx, ny) = (103, 47, 10, 7);
        let mut covered = vec![0u8; w * h];
        for yi in 0..ny {
            for xi in 0..nx {
                let b = bin_bounds(w, h, nx, ny, xi, yi);
                for y in b.y_min..=b.y_max {
                    for x in b.x_min..=b.x_max {
                        covered[y * w + x] += 1;
                    }
                }
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
    }

    #[test]
    fn last_bin_clamped_to_image_edge() {
        let b = bin_bounds(101, 101, 10, 10, 9, 9);
        assert_eq!(b.x_max, 100);
        assert_eq!(b.y_max, 100);
    }

    #[test]
    fn point_maps_back_to_its_bin() {
        let (w, h, nx, ny) = (64, 64, 8, 8);
        for yi in 0..ny {
            for xi in 0..nx {
                let b = bin_bounds(w, h, nx, ny, xi, yi);
                assert_eq!(point_to_bin(w, h, nx, ny, b.x_min, b.y_min), (xi, yi));
                assert_eq!(point_to_bin(w, h, nx, ny, b.x_max, b.y_max), (xi, yi));
            }
        }
    }
}
