//! Footprint geometry generation for BGA packages.
//!
//! [`plot_footprint`] converts a ball list plus the physical package
//! envelope into an ordered stream of draw-primitive calls against a
//! [`FootprintSink`]. Concrete sinks render the stream as an EAGLE script,
//! an XML footprint library, or a TSV pad table; the generation algorithm
//! never knows which.
//!
//! Geometry is canonicalized first: whichever corner the user declared as
//! pin A1, balls and package dimensions are rotated so A1 ends up NW. All
//! drawing logic downstream assumes that orientation.
//!
//! ## Quickstart
//!
//! ```
//! use bgakit_plot::{plot_footprint, Ball, PackageGeometry, PinCorner, TsvPlotter};
//! use nalgebra::Point2;
//!
//! let balls = vec![Ball::new("A1", -0.5, 0.5, 0.3), Ball::new("B2", 0.5, -0.5, 0.3)];
//! let geom = PackageGeometry {
//!     width: 5.0,
//!     height: 5.0,
//!     ball_diameter: 0.3,
//!     pin_a1_corner: PinCorner::Nw,
//!     pin_a1_point: Point2::new(-0.5, 0.5),
//! };
//!
//! let mut sink = TsvPlotter::new();
//! let tsv = plot_footprint(&balls, &geom, &mut sink).unwrap();
//! assert!(tsv.lines().count() == 3); // header + two pads
//! ```

mod emit;
mod names;
mod normalize;
mod plotter;
mod sink;
mod types;

pub use emit::{EagleScriptPlotter, TsvPlotter, XmlMetadata, XmlPlotter};
pub use names::PadNames;
pub use normalize::normalize;
pub use plotter::{plot_footprint, LINE_WIDTH};
pub use sink::{FootprintSink, PlotError, LAYER_COURTYARD, LAYER_SILKSCREEN, LAYER_TOP};
pub use types::{Ball, PackageGeometry, PinCorner};
