use std::str::FromStr;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One physical pad: externally assigned name, position and diameter in mm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

impl Ball {
    pub fn new(name: impl Into<String>, x: f64, y: f64, diameter: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            diameter,
        }
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

/// Which package corner carries pin A1 in the source data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PinCorner {
    Nw,
    Ne,
    Se,
    Sw,
}

impl PinCorner {
    /// Rotation bringing this corner to NW, assuming a centered origin.
    /// Standard part orientation per IEC 61188-7 Level A.
    pub fn rotation_angle(self) -> f64 {
        match self {
            PinCorner::Nw => 0.0,
            PinCorner::Ne => std::f64::consts::FRAC_PI_2,
            PinCorner::Se => std::f64::consts::PI,
            PinCorner::Sw => 3.0 * std::f64::consts::FRAC_PI_2,
        }
    }

    /// Odd multiples of 90 degrees swap the package width and height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, PinCorner::Ne | PinCorner::Sw)
    }
}

impl FromStr for PinCorner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NW" => Ok(PinCorner::Nw),
            "NE" => Ok(PinCorner::Ne),
            "SE" => Ok(PinCorner::Se),
            "SW" => Ok(PinCorner::Sw),
            other => Err(format!("unknown corner designator: '{other}'")),
        }
    }
}

impl std::fmt::Display for PinCorner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PinCorner::Nw => "NW",
            PinCorner::Ne => "NE",
            PinCorner::Se => "SE",
            PinCorner::Sw => "SW",
        };
        f.write_str(s)
    }
}

/// Physical envelope and reference point of the package, mm units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageGeometry {
    pub width: f64,
    pub height: f64,
    pub ball_diameter: f64,
    pub pin_a1_corner: PinCorner,
    /// Position of the pin A1 pad, in the same frame as the ball list.
    pub pin_a1_point: Point2<f64>,
}
