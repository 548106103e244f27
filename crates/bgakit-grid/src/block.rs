use bgakit_core::{BinBounds, GrayImageView};

/// Binary cutoff for a "lit" pixel, applied after inversion.
pub const LIT_CUTOFF: u8 = 127;

/// Owned pixel block cropped from one bin of the source image.
#[derive(Clone, Debug)]
pub struct BinBlock {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl BinBlock {
    /// Crop the inclusive rectangle `bounds` out of `src`.
    pub fn crop(src: &GrayImageView<'_>, bounds: BinBounds) -> Self {
        let width = bounds.width();
        let height = bounds.height();
        let mut data = Vec::with_capacity(width * height);
        for y in bounds.y_min..=bounds.y_max {
            let row = &src.data[y * src.width + bounds.x_min..=y * src.width + bounds.x_max];
            data.extend_from_slice(row);
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub(crate) fn lit(&self, x: usize, y: usize) -> bool {
        self.get(x, y) > LIT_CUTOFF
    }
}

/// Per-bin signal metrics, all normalized fractions in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinMetrics {
    /// Fraction of columns containing lit pixels in more than one row.
    pub x_spread: f32,
    /// Fraction of rows containing lit pixels in more than one column.
    pub y_spread: f32,
    /// Lit-pixel fraction of the whole bin.
    pub contents: f32,
}

/// Compute fill and spread metrics for one bin block.
///
/// A column counts toward `x_spread` only when more than one of its rows is
/// lit, so a single stray pixel does not register as spread; rows are the
/// analog for `y_spread`.
pub fn analyze_bin(block: &BinBlock) -> BinMetrics {
    let (width, height) = (block.width, block.height);
    let n_pixels = width * height;

    let mut col_counts = vec![0usize; width];
    let mut row_counts = vec![0usize; height];
    let mut lit_total = 0usize;

    for y in 0..height {
        for x in 0..width {
            if block.lit(x, y) {
                col_counts[x] += 1;
                row_counts[y] += 1;
                lit_total += 1;
            }
        }
    }

    let x_spread = col_counts.iter().filter(|&&c| c > 1).count() as f32 / width as f32;
    let y_spread = row_counts.iter().filter(|&&c| c > 1).count() as f32 / height as f32;
    let contents = lit_total as f32 / n_pixels as f32;

    BinMetrics {
        x_spread,
        y_spread,
        contents,
    }
}

#[cfg(test)]
pub(crate) fn block_from_rows(rows: &[&[u8]]) -> BinBlock {
    let height = rows.len();
    let width = rows[0].len();
    let mut data = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width);
        data.extend_from_slice(row);
    }
    BinBlock {
        width,
        height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn full_block_has_unit_metrics() {
        let block = BinBlock {
            width: 4,
            height: 4,
            data: vec![255; 16],
        };
        let m = analyze_bin(&block);
        assert_relative_eq!(m.x_spread, 1.0);
        assert_relative_eq!(m.y_spread, 1.0);
        assert_relative_eq!(m.contents, 1.0);
    }

    #[test]
    fn single_stray_pixel_is_not_spread() {
        let block = block_from_rows(&[
            &[0, 0, 0, 0],
            &[0, 255, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        let m = analyze_bin(&block);
        assert_relative_eq!(m.x_spread, 0.0);
        assert_relative_eq!(m.y_spread, 0.0);
        assert_relative_eq!(m.contents, 1.0 / 16.0);
    }

    #[test]
    fn metrics_invariant_to_uniform_scaling() {
        // A centered 2x2 blob in a 4x4 block, then the same pattern with
        // every pixel replicated 3x in each axis.
        let small = block_from_rows(&[
            &[0, 0, 0, 0],
            &[0, 255, 255, 0],
            &[0, 255, 255, 0],
            &[0, 0, 0, 0],
        ]);
        let mut big = BinBlock {
            width: 12,
            height: 12,
            data: vec![0; 144],
        };
        for y in 0..12 {
            for x in 0..12 {
                big.data[y * 12 + x] = small.get(x / 3, y / 3);
            }
        }

        let ms = analyze_bin(&small);
        let mb = analyze_bin(&big);
        assert_relative_eq!(ms.x_spread, mb.x_spread);
        assert_relative_eq!(ms.y_spread, mb.y_spread);
        assert_relative_eq!(ms.contents, mb.contents);
    }

    #[test]
    fn cutoff_is_strictly_greater_than_127() {
        let block = block_from_rows(&[&[127, 128]]);
        let m = analyze_bin(&block);
        assert_relative_eq!(m.contents, 0.5);
    }
}
