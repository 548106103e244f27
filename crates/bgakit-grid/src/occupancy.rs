use serde::{Deserialize, Serialize};

/// Boolean ball-presence matrix, `ny` rows by `nx` columns.
///
/// Shape is fixed at construction. Cells are mutable only through explicit
/// [`OccupancyGrid::set`]/[`OccupancyGrid::toggle`] calls, which back the
/// manual correction step between extraction and footprint generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    nx: usize,
    ny: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            ny,
            cells: vec![false; nx * ny],
        }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.nx + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, occupied: bool) {
        self.cells[y * self.nx + x] = occupied;
    }

    /// Flip one cell; used for user corrections of misdetected balls.
    pub fn toggle(&mut self, x: usize, y: usize) {
        self.cells[y * self.nx + x] = !self.cells[y * self.nx + x];
    }

    /// Number of occupied cells.
    pub fn ball_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Mirror along the vertical axis, swapping columns left-to-right.
    ///
    /// Photographs of the ball side taken from below show the array
    /// mirrored; flipping restores the top-view convention the plotter
    /// expects.
    pub fn flip_horizontal(&self) -> Self {
        let mut out = Self::new(self.nx, self.ny);
        for y in 0..self.ny {
            for x in 0..self.nx {
                out.set(self.nx - 1 - x, y, self.get(x, y));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_restores() {
        let mut g = OccupancyGrid::new(3, 2);
        g.toggle(2, 1);
        assert!(g.get(2, 1));
        g.toggle(2, 1);
        assert!(!g.get(2, 1));
    }

    #[test]
    fn flip_horizontal_mirrors_columns() {
        let mut g = OccupancyGrid::new(3, 1);
        g.set(0, 0, true);
        let f = g.flip_horizontal();
        assert!(!f.get(0, 0) && !f.get(1, 0) && f.get(2, 0));
        assert_eq!(f.flip_horizontal(), g);
    }

    #[test]
    fn json_round_trip() {
        let mut g = OccupancyGrid::new(4, 3);
        g.set(1, 0, true);
        g.set(3, 2, true);
        let json = serde_json::to_string(&g).unwrap();
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.ball_count(), 2);
    }
}
