use nalgebra::Point2;

use crate::sink::{FootprintSink, PlotError};

const BACKEND: &str = "EAGLE";

/// EAGLE script backend.
///
/// Emits `SMD`/`WIRE`/`CIRCLE` commands with `CHANGE layer` and
/// `CHANGE width` state switches only when the state actually changes,
/// keeping the script short and diffable.
pub struct EagleScriptPlotter {
    lines: Vec<String>,
    current_layer_id: u32,
    current_line_width: f64,
}

impl EagleScriptPlotter {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            current_layer_id: 1,
            current_line_width: 0.2,
        }
    }

    fn layer_id(layer: &str) -> Result<u32, PlotError> {
        match layer {
            "top" => Ok(1),
            "silkscreen" => Ok(21),
            "courtyard" => Ok(39),
            other => Err(PlotError::InvalidLayer {
                layer: other.to_string(),
                backend: BACKEND,
            }),
        }
    }

    fn change_layer(&mut self, layer: &str) -> Result<(), PlotError> {
        let id = Self::layer_id(layer)?;
        if id != self.current_layer_id {
            self.lines.push(format!("CHANGE layer {id};"));
            self.current_layer_id = id;
        }
        Ok(())
    }

    fn change_line_width(&mut self, line_width: f64) {
        if line_width != self.current_line_width {
            self.lines.push(format!("CHANGE width {line_width:.3};"));
            self.current_line_width = line_width;
        }
    }
}

impl Default for EagleScriptPlotter {
    fn default() -> Self {
        Self::new()
    }
}

impl FootprintSink for EagleScriptPlotter {
    fn init_plotter(&mut self) {
        self.lines.push("CHANGE style continuous;".to_string());
        self.lines.push("GRID mm;".to_string());
        self.lines.push("SET wire_bend 2;".to_string());
        self.lines
            .push(format!("CHANGE layer {};", self.current_layer_id));
        self.lines
            .push(format!("CHANGE width {:.3};", self.current_line_width));
    }

    fn finish_plotter(&mut self) -> String {
        self.lines.push("GRID last;".to_string());
        self.lines.join("\n")
    }

    fn draw_pad(
        &mut self,
        name: &str,
        center: Point2<f64>,
        diameter: f64,
    ) -> Result<(), PlotError> {
        self.change_layer("top")?;
        self.lines.push(format!(
            "SMD {diameter:.3} {diameter:.3} -100 '{name}' ({:.3} {:.3});",
            center.x, center.y
        ));
        Ok(())
    }

    fn draw_line(
        &mut self,
        name: &str,
        start: Point2<f64>,
        end: Point2<f64>,
        line_width: f64,
        layer: &str,
    ) -> Result<(), PlotError> {
        self.change_layer(layer)?;
        self.change_line_width(line_width);
        self.lines.push(format!(
            "WIRE '{name}' ({:.3} {:.3}) ({:.3} {:.3});",
            start.x, start.y, end.x, end.y
        ));
        Ok(())
    }

    fn draw_circle(
        &mut self,
        _name: &str,
        center: Point2<f64>,
        diameter: f64,
        line_width: f64,
        layer: &str,
    ) -> Result<(), PlotError> {
        self.change_layer(layer)?;
        self.change_line_width(line_width);
        let radius = diameter / 2.0;
        self.lines.push(format!(
            "CIRCLE ({:.3} {:.3}) ({:.3} {:.3});",
            center.x,
            center.y,
            center.x + radius,
            center.y
        ));
        Ok(())
    }
}
