use nalgebra::Point2;

/// Copper layer for ball pads.
pub const LAYER_TOP: &str = "top";
/// Package outline, orientation dot and corner indicator.
pub const LAYER_SILKSCREEN: &str = "silkscreen";
/// Placement clearance rectangle.
pub const LAYER_COURTYARD: &str = "courtyard";

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("layer '{layer}' not valid for {backend}")]
    InvalidLayer {
        layer: String,
        backend: &'static str,
    },
}

/// Rendering backend consumed by [`crate::plot_footprint`].
///
/// Implementations translate the primitive calls into one concrete output
/// format. Layer names passed in are exactly [`LAYER_TOP`],
/// [`LAYER_SILKSCREEN`] or [`LAYER_COURTYARD`]; a backend must reject any
/// other value with [`PlotError::InvalidLayer`].
pub trait FootprintSink {
    /// Called once before any drawing primitive.
    fn init_plotter(&mut self);

    /// Called once after all primitives; returns the formatted output.
    fn finish_plotter(&mut self) -> String;

    fn draw_pad(&mut self, name: &str, center: Point2<f64>, diameter: f64)
        -> Result<(), PlotError>;

    fn draw_line(
        &mut self,
        name: &str,
        start: Point2<f64>,
        end: Point2<f64>,
        line_width: f64,
        layer: &str,
    ) -> Result<(), PlotError>;

    fn draw_circle(
        &mut self,
        name: &str,
        center: Point2<f64>,
        diameter: f64,
        line_width: f64,
        layer: &str,
    ) -> Result<(), PlotError>;
}
