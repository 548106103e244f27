use nalgebra::Point2;

use crate::sink::{FootprintSink, PlotError};

/// Tab-separated pad table backend.
///
/// Lists pad name, position and diameter only; silkscreen and courtyard
/// primitives are accepted and dropped. Suited for pasting into a
/// spreadsheet.
#[derive(Default)]
pub struct TsvPlotter {
    rows: Vec<String>,
}

impl TsvPlotter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FootprintSink for TsvPlotter {
    fn init_plotter(&mut self) {
        self.rows
            .push("Pad name\tX position (mm)\tY position (mm)\tPad diameter (mm)".to_string());
    }

    fn finish_plotter(&mut self) -> String {
        self.rows.join("\n")
    }

    fn draw_pad(
        &mut self,
        name: &str,
        center: Point2<f64>,
        diameter: f64,
    ) -> Result<(), PlotError> {
        self.rows
            .push(format!("{name}\t{:.3}\t{:.3}\t{diameter:.3}", center.x, center.y));
        Ok(())
    }

    fn draw_line(
        &mut self,
        _name: &str,
        _start: Point2<f64>,
        _end: Point2<f64>,
        _line_width: f64,
        _layer: &str,
    ) -> Result<(), PlotError> {
        Ok(())
    }

    fn draw_circle(
        &mut self,
        _name: &str,
        _center: Point2<f64>,
        _diameter: f64,
        _line_width: f64,
        _layer: &str,
    ) -> Result<(), PlotError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pads_are_listed() {
        let mut p = TsvPlotter::new();
        p.init_plotter();
        p.draw_line("o", Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0.2, "silkscreen")
            .unwrap();
        p.draw_pad("B3", Point2::new(1.0, -0.5), 0.35).unwrap();
        let out = p.finish_plotter();
        assert_eq!(
            out,
            "Pad name\tX position (mm)\tY position (mm)\tPad diameter (mm)\nB3\t1.000\t-0.500\t0.350"
        );
    }
}
