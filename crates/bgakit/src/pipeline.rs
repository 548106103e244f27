//! End-to-end helpers: decode an image, extract the occupancy grid, build
//! the named ball list and render the footprint in the requested format.

use std::path::Path;
use std::str::FromStr;

use image::ImageReader;
use log::info;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use bgakit_core::GrayImageView;
use bgakit_grid::{ExtractError, GridExtractor, OccupancyGrid};
use bgakit_plot::{
    plot_footprint, Ball, EagleScriptPlotter, PackageGeometry, PadNames, PinCorner, PlotError,
    TsvPlotter, XmlMetadata, XmlPlotter,
};

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    /// The source image could not be read or decoded; no partial grid is
    /// produced.
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Physical and orientation parameters of the footprint run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FootprintParams {
    /// Ball lattice dimensions.
    pub nx: usize,
    pub ny: usize,
    /// Ball pitch, mm.
    pub pitch: f64,
    /// Pad diameter, mm.
    pub pad_diameter: f64,
    /// Package body size, mm.
    pub package_width: f64,
    pub package_height: f64,
    /// Corner carrying pin A1, as seen in the photograph.
    pub pin_a1_corner: PinCorner,
    /// True when the photograph shows the ball side from below; the grid is
    /// then mirrored back to the top-view convention.
    pub bottom_view: bool,
}

/// Output backend selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    EagleScript,
    Xml,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eagle" | "scr" => Ok(OutputFormat::EagleScript),
            "xml" => Ok(OutputFormat::Xml),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(format!("unknown output format: '{other}'")),
        }
    }
}

/// Decode any supported raster file into an 8-bit grayscale buffer.
pub fn load_gray(path: impl AsRef<Path>) -> Result<image::GrayImage, RunError> {
    let path = path.as_ref();
    let img = ImageReader::open(path)?.decode()?.to_luma8();
    info!(
        "loaded {} ({} x {} px)",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Borrow an `image::GrayImage` as the lightweight core view type.
pub fn gray_view(img: &image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Extract the ball occupancy grid from a decoded grayscale image.
pub fn extract_grid(
    img: &image::GrayImage,
    params: &FootprintParams,
) -> Result<OccupancyGrid, RunError> {
    let extractor = GridExtractor::new(params.nx, params.ny)?;
    Ok(extractor.extract(&gray_view(img))?)
}

/// Millimeter position of lattice index `i` on an axis of `n` balls.
///
/// Positions are centered on the package origin; even ball counts land on
/// half-pitch offsets.
fn axis_offset(i: usize, n: usize, pitch: f64) -> f64 {
    let min = if n % 2 == 0 {
        -((n as f64 / 2.0 - 1.0) + 0.5) * pitch
    } else {
        -((n as f64 - 1.0) / 2.0) * pitch
    };
    min + i as f64 * pitch
}

/// Build the named, positioned ball list and package geometry for `grid`.
///
/// Bottom-view photographs are mirrored horizontally first. The pin A1
/// reference point is the computed position of the pad labeled `A1`,
/// whether or not that ball was detected.
pub fn build_ball_list(
    grid: &OccupancyGrid,
    params: &FootprintParams,
) -> (Vec<Ball>, PackageGeometry) {
    let grid = if params.bottom_view {
        grid.flip_horizontal()
    } else {
        grid.clone()
    };
    let (nx, ny) = (grid.nx(), grid.ny());
    let names = PadNames::generate(nx, ny, params.pin_a1_corner);

    let position = |x: usize, y: usize| {
        Point2::new(
            axis_offset(x, nx, params.pitch),
            -axis_offset(y, ny, params.pitch), // y grows downward in the grid
        )
    };

    let mut balls = Vec::with_capacity(grid.ball_count());
    for y in 0..ny {
        for x in 0..nx {
            if grid.get(x, y) {
                let p = position(x, y);
                balls.push(Ball::new(names.get(x, y), p.x, p.y, params.pad_diameter));
            }
        }
    }

    let pin_a1_point = names
        .position_of("A1")
        .map(|(x, y)| position(x, y))
        .unwrap_or_else(|| position(0, 0));

    let geometry = PackageGeometry {
        width: params.package_width,
        height: params.package_height,
        ball_diameter: params.pad_diameter,
        pin_a1_corner: params.pin_a1_corner,
        pin_a1_point,
    };

    (balls, geometry)
}

/// Render the footprint for `grid` in the chosen output format.
pub fn render_footprint(
    grid: &OccupancyGrid,
    params: &FootprintParams,
    format: OutputFormat,
) -> Result<String, RunError> {
    let (balls, geometry) = build_ball_list(grid, params);
    info!("rendering {} pads as {format:?}", balls.len());

    let out = match format {
        OutputFormat::EagleScript => {
            let mut sink = EagleScriptPlotter::new();
            plot_footprint(&balls, &geometry, &mut sink)?
        }
        OutputFormat::Xml => {
            let mut sink = XmlPlotter::new(XmlMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                width_balls: params.nx,
                height_balls: params.ny,
                pitch: params.pitch,
                package_width: params.package_width,
                package_height: params.package_height,
            });
            plot_footprint(&balls, &geometry, &mut sink)?
        }
        OutputFormat::Tsv => {
            let mut sink = TsvPlotter::new();
            plot_footprint(&balls, &geometry, &mut sink)?
        }
    };
    Ok(out)
}

/// Render the verification overlay: the source photograph with bin
/// boundaries in blue and a red dot in every detected ball bin.
///
/// Purely a downstream consumer of the grid; extraction never depends on
/// it.
pub fn draw_overlay(img: &image::GrayImage, grid: &OccupancyGrid) -> image::RgbImage {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let (nx, ny) = (grid.nx(), grid.ny());

    let mut out = image::RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let v = img.get_pixel(x, y)[0];
        image::Rgb([v, v, v])
    });

    let blue = image::Rgb([0u8, 0, 255]);
    let red = image::Rgb([255u8, 0, 0]);

    for y_idx in 0..ny {
        for x_idx in 0..nx {
            let b = bgakit_core::bin_bounds(w, h, nx, ny, x_idx, y_idx);

            // Bin boundary lines across the full image.
            for x in 0..w {
                out.put_pixel(x as u32, b.y_max as u32, blue);
            }
            for y in 0..h {
                out.put_pixel(b.x_max as u32, y as u32, blue);
            }

            if grid.get(x_idx, y_idx) {
                // Filled dot spanning the middle 40-60% of the bin.
                let cx = (b.x_min + b.x_max) as f64 / 2.0;
                let cy = (b.y_min + b.y_max) as f64 / 2.0;
                let r = (b.width().min(b.height()) as f64 * 0.1).max(1.0);
                for y in b.y_min..=b.y_max {
                    for x in b.x_min..=b.x_max {
                        let (dx, dy) = (x as f64 - cx, y as f64 - cy);
                        if (dx * dx + dy * dy).sqrt() <= r {
                            out.put_pixel(x as u32, y as u32, red);
                        }
                    }
                }
            }
        }
    }

    out
}
