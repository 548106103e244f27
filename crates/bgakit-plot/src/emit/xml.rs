use chrono::Utc;
use nalgebra::Point2;

use crate::sink::{FootprintSink, PlotError};

const BACKEND: &str = "XML";

/// Package description carried into the XML header.
#[derive(Clone, Debug)]
pub struct XmlMetadata {
    /// Generator version string placed in the root element.
    pub version: String,
    /// Ball lattice dimensions.
    pub width_balls: usize,
    pub height_balls: usize,
    /// Ball pitch, mm.
    pub pitch: f64,
    /// Package body size, mm.
    pub package_width: f64,
    pub package_height: f64,
}

/// XML footprint-library backend.
///
/// Produces a single-footprint `footprintLibrary` document with
/// `padElement`, `lineElement` and `circleElement` geometry entries.
pub struct XmlPlotter {
    meta: XmlMetadata,
    elements: Vec<String>,
}

impl XmlPlotter {
    pub fn new(meta: XmlMetadata) -> Self {
        Self {
            meta,
            elements: Vec::new(),
        }
    }

    fn layer_name(layer: &str) -> Result<&'static str, PlotError> {
        match layer {
            "top" => Ok("topLayer"),
            "silkscreen" => Ok("topSilkScreen"),
            "courtyard" => Ok("topCourtyard"),
            other => Err(PlotError::InvalidLayer {
                layer: other.to_string(),
                backend: BACKEND,
            }),
        }
    }
}

impl FootprintSink for XmlPlotter {
    fn init_plotter(&mut self) {
        let date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        self.elements.push(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<footprintLibrary xmlns="http://www.tentech.ca/schemas/FootprintLibrary"
 xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" generator="bgakit"
 version="{}" exportDate="{date}">
    <description>Single footprint generated from a BGA photograph</description>
    <footprints>
        <footprint name="bga_{}_{}">
            <description>BGA {} x {} balls, {:.3} mm pitch, {:.3} mm(width) x {:.3} mm(height) body size</description>
            <geometry>"#,
            self.meta.version,
            self.meta.width_balls,
            self.meta.height_balls,
            self.meta.width_balls,
            self.meta.height_balls,
            self.meta.pitch,
            self.meta.package_width,
            self.meta.package_height,
        ));
    }

    fn finish_plotter(&mut self) -> String {
        self.elements.push(
            "            </geometry>\n        </footprint>\n    </footprints>\n</footprintLibrary>"
                .to_string(),
        );
        self.elements.join("\n")
    }

    fn draw_pad(
        &mut self,
        name: &str,
        center: Point2<f64>,
        diameter: f64,
    ) -> Result<(), PlotError> {
        self.elements.push(format!(
            r#"<padElement name="{name}" layer="topLayer" thickness="0" xPos="{:.3}" yPos="{:.3}" width="{diameter:.3}" height="{diameter:.3}" angle="0" padShape="circle" maxTextHeight="{:.3}"/>"#,
            center.x,
            center.y,
            0.8 * diameter
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
        let layer = Self::layer_name(layer)?;
        self.elements.push(format!(
            r#"<lineElement name="{name}" layer="{layer}" thickness="{line_width:.3}" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}"/>"#,
            start.x, start.y, end.x, end.y
        ));
        Ok(())
    }

    fn draw_circle(
        &mut self,
        name: &str,
        center: Point2<f64>,
        diameter: f64,
        line_width: f64,
        layer: &str,
    ) -> Result<(), PlotError> {
        let layer = Self::layer_name(layer)?;
        self.elements.push(format!(
            r#"<circleElement name="{name}" layer="{layer}" thickness="{line_width:.3}" xPos="{:.3}" yPos="{:.3}" diameter="{diameter:.3}"/>"#,
            center.x, center.y
        ));
        Ok(())
    }
}
