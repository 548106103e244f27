use log::{debug, info};
use nalgebra::Point2;

use crate::normalize::normalize;
use crate::sink::{FootprintSink, PlotError, LAYER_COURTYARD, LAYER_SILKSCREEN};
use crate::types::{Ball, PackageGeometry};

/// Silkscreen and courtyard line width, mm (8 mil).
pub const LINE_WIDTH: f64 = 0.2;

/// Draw the complete footprint into `sink` and return its formatted output.
///
/// The command sequence is part of the contract; consumers rely on it for
/// grouping and readability:
/// 1. silkscreen outline rectangle (segments `_1`..`_4`),
/// 2. pin A1 orientation dot,
/// 3. courtyard rectangle,
/// 4. one pad per ball,
/// 5. diagonal corner indicator near A1, when it fits.
///
/// Geometry is normalized to the pin-A1-NW convention before drawing.
pub fn plot_footprint(
    balls: &[Ball],
    geometry: &PackageGeometry,
    sink: &mut dyn FootprintSink,
) -> Result<String, PlotError> {
    let (balls, geometry) = normalize(balls, geometry);
    let half_w = geometry.width / 2.0;
    let half_h = geometry.height / 2.0;
    let a1 = geometry.pin_a1_point;

    sink.init_plotter();

    // Step 1: outline rectangle on silkscreen.
    let outline_ul = Point2::new(-half_w, half_h);
    let outline_lr = Point2::new(half_w, -half_h);
    draw_rectangle_outline(sink, "silkOutline", outline_ul, outline_lr, LAYER_SILKSCREEN)?;

    // Step 2: pin A1 dot, offset outside the NW edge at A1's row.
    let dot_center = Point2::new(-(half_w + 1.5 * LINE_WIDTH), a1.y);
    sink.draw_circle("a1cornerDot", dot_center, LINE_WIDTH, LINE_WIDTH, LAYER_SILKSCREEN)?;

    // Step 3: courtyard. Placement clearance by ball size per IPC-7351
    // grid-array convention: above 0.5 mm -> 2 mm, below 0.25 mm -> 0.5 mm,
    // 1 mm in between.
    let clearance = if geometry.ball_diameter > 0.5 {
        2.0
    } else if geometry.ball_diameter < 0.25 {
        0.5
    } else {
        1.0
    };
    debug!(
        "courtyard clearance {clearance} mm for {} mm balls",
        geometry.ball_diameter
    );

    // Pull the drawn centerline in by half a line width so the visual edge
    // of the courtyard lands exactly at the clearance distance.
    let courtyard_ul = Point2::new(
        outline_ul.x - clearance + LINE_WIDTH / 2.0,
        outline_ul.y + clearance - LINE_WIDTH / 2.0,
    );
    let courtyard_lr = Point2::new(
        outline_lr.x + clearance - LINE_WIDTH / 2.0,
        outline_lr.y - clearance + LINE_WIDTH / 2.0,
    );
    draw_rectangle_outline(sink, "courtyard", courtyard_ul, courtyard_lr, LAYER_COURTYARD)?;

    // Step 4: ball pads.
    for ball in &balls {
        sink.draw_pad(&ball.name, ball.center(), ball.diameter)?;
    }

    // Step 5: diagonal "missing corner" indicator near pin A1.
    if let Some(intercept) = corner_intercept(&geometry, a1) {
        // Unit-slope line y = x + intercept between the left and top edges.
        let left_edge = Point2::new(-half_w, -half_w + intercept);
        let top_edge = Point2::new(half_h - intercept, half_h);
        sink.draw_line("corner", left_edge, top_edge, LINE_WIDTH, LAYER_SILKSCREEN)?;
    } else {
        debug!("corner indicator does not fit, skipping");
    }

    info!("plotted footprint with {} pads", balls.len());
    Ok(sink.finish_plotter())
}

/// Intercept of the corner indicator line, or `None` when the minimum
/// distance from pin A1 already falls outside the package.
fn corner_intercept(geometry: &PackageGeometry, a1: Point2<f64>) -> Option<f64> {
    let half_w = geometry.width / 2.0;
    let half_h = geometry.height / 2.0;
    let d = geometry.ball_diameter;

    // Limit line: closest the indicator may come to the A1 ball.
    let min_dist_from_a1 = d / 2.0 + LINE_WIDTH;
    let (s, c) = (3.0 * std::f64::consts::FRAC_PI_4).sin_cos();
    let limit_x = a1.x + min_dist_from_a1 * c;
    let limit_y = a1.y + min_dist_from_a1 * s;
    if limit_x <= -half_w || limit_y >= half_h {
        return None;
    }
    let limit_intercept = limit_y - limit_x;

    // Corner line: half the clearance between the ball and the edges.
    let min_dist_from_side = ((half_h - (a1.y + d / 2.0)).min((a1.x - d / 2.0) + half_w)) / 2.0;
    let min_corner_dist = std::f64::consts::SQRT_2 * min_dist_from_side;
    let (s, c) = (-std::f64::consts::FRAC_PI_4).sin_cos();
    let corner_x = -half_w + min_corner_dist * c;
    let corner_y = half_h + min_corner_dist * s;
    let corner_intercept = corner_y - corner_x;

    // The larger intercept wins so the line never overlaps the ball array.
    Some(corner_intercept.max(limit_intercept))
}

fn draw_rectangle_outline(
    sink: &mut dyn FootprintSink,
    name: &str,
    upper_left: Point2<f64>,
    lower_right: Point2<f64>,
    layer: &str,
) -> Result<(), PlotError> {
    let width = lower_right.x - upper_left.x;
    let height = upper_left.y - lower_right.y;
    let (ulx, uly) = (upper_left.x, upper_left.y);

    // Top, left, bottom, right.
    sink.draw_line(
        &format!("{name}_1"),
        Point2::new(ulx, uly),
        Point2::new(ulx + width, uly),
        LINE_WIDTH,
        layer,
    )?;
    sink.draw_line(
        &format!("{name}_2"),
        Point2::new(ulx, uly),
        Point2::new(ulx, uly - height),
        LINE_WIDTH,
        layer,
    )?;
    sink.draw_line(
        &format!("{name}_3"),
        Point2::new(ulx, uly - height),
        Point2::new(ulx + width, uly - height),
        LINE_WIDTH,
        layer,
    )?;
    sink.draw_line(
        &format!("{name}_4"),
        Point2::new(ulx + width, uly),
        Point2::new(ulx + width, uly - height),
        LINE_WIDTH,
        layer,
    )?;
    Ok(())
}
