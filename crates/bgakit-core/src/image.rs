#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

#[derive(Clone, Debug)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn as_view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }
}

/// Invert intensities so that dark ink on a light background becomes
/// high-valued "lit" pixels.
pub fn invert_gray(src: &GrayImageView<'_>) -> GrayImage {
    GrayImage {
        width: src.width,
        height: src.height,
        data: src.data.iter().map(|&v| 255 - v).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_flips_extremes() {
        let img = GrayImage {
            width: 2,
            height: 1,
            data: vec![0, 255],
        };
        let inv = invert_gray(&img.as_view());
        assert_eq!(inv.data, vec![255, 0]);
    }
}
