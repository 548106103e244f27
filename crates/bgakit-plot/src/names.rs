//! BGA pad name grid.
//!
//! Rows are lettered with the JEDEC-style alphabet that omits the easily
//! confused letters (I, O, Q, S, X, Z); columns are numbered from 1. The
//! direction of progression mirrors according to the package corner that
//! carries pin A1, so `A1` always lands on that corner.

use crate::types::PinCorner;

const LETTERS: &[u8; 20] = b"ABCDEFGHJKLMNPRTUVWY";

/// Pad labels for a `width` x `height` ball lattice, indexed `[x][y]`.
#[derive(Clone, Debug)]
pub struct PadNames {
    grid: Vec<Vec<String>>,
}

impl PadNames {
    pub fn generate(width: usize, height: usize, corner: PinCorner) -> Self {
        let mut grid: Vec<Vec<String>> = (0..width)
            .map(|x| (0..height).map(|y| format!("{}{}", row_name(y), x + 1)).collect())
            .collect();

        let (v_up, h_left) = match corner {
            PinCorner::Nw => (false, false),
            PinCorner::Ne => (false, true),
            PinCorner::Se => (true, true),
            PinCorner::Sw => (true, false),
        };

        if h_left {
            grid.reverse();
        }
        if v_up {
            for column in grid.iter_mut() {
                column.reverse();
            }
        }

        Self { grid }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &str {
        &self.grid[x][y]
    }

    pub fn width(&self) -> usize {
        self.grid.len()
    }

    pub fn height(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Grid position of the pad with the given label, if present.
    pub fn position_of(&self, name: &str) -> Option<(usize, usize)> {
        for (x, column) in self.grid.iter().enumerate() {
            for (y, label) in column.iter().enumerate() {
                if label == name {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

/// Letter label of row `y`: single letters for the first 20 rows, then
/// two-letter combinations (`AA`, `AB`, ...).
fn row_name(y: usize) -> String {
    let n = LETTERS.len();
    if y < n {
        (LETTERS[y] as char).to_string()
    } else {
        format!(
            "{}{}",
            LETTERS[y / n - 1] as char,
            LETTERS[y % n] as char
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nw_progresses_right_and_down() {
        let names = PadNames::generate(4, 3, PinCorner::Nw);
        assert_eq!(names.get(0, 0), "A1");
        assert_eq!(names.get(3, 0), "A4");
        assert_eq!(names.get(0, 2), "C1");
        assert_eq!(names.get(3, 2), "C4");
    }

    #[test]
    fn a1_lands_on_the_requested_corner() {
        let cases = [
            (PinCorner::Nw, (0, 0)),
            (PinCorner::Ne, (3, 0)),
            (PinCorner::Se, (3, 2)),
            (PinCorner::Sw, (0, 2)),
        ];
        for (corner, at) in cases {
            let names = PadNames::generate(4, 3, corner);
            assert_eq!(names.get(at.0, at.1), "A1", "corner {corner}");
            assert_eq!(names.position_of("A1"), Some(at));
        }
    }

    #[test]
    fn confusable_letters_are_skipped() {
        let names = PadNames::generate(1, 20, PinCorner::Nw);
        assert_eq!(names.get(0, 7), "H1");
        assert_eq!(names.get(0, 8), "J1"); // no I
        assert_eq!(names.get(0, 13), "P1"); // no O
        assert_eq!(names.get(0, 14), "R1"); // no Q
        assert_eq!(names.get(0, 19), "Y1");
    }

    #[test]
    fn rows_beyond_twenty_get_two_letters() {
        let names = PadNames::generate(1, 42, PinCorner::Nw);
        assert_eq!(names.get(0, 20), "AA1");
        assert_eq!(names.get(0, 21), "AB1");
        assert_eq!(names.get(0, 40), "BA1");
        assert_eq!(names.get(0, 41), "BB1");
    }
}
