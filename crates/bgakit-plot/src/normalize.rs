use nalgebra::Rotation2;

use crate::types::{Ball, PackageGeometry, PinCorner};

/// Rotate balls and package geometry so that pin A1 sits in the NW corner.
///
/// Pure transformation: inputs are untouched, new values are returned. The
/// returned geometry has `pin_a1_corner` set to NW so a second application
/// is the identity, and downstream drawing code never branches on the four
/// user-facing orientations.
pub fn normalize(balls: &[Ball], geometry: &PackageGeometry) -> (Vec<Ball>, PackageGeometry) {
    let theta = geometry.pin_a1_corner.rotation_angle();
    let rot = Rotation2::new(theta);

    let rotated: Vec<Ball> = balls
        .iter()
        .map(|b| {
            let p = rot * b.center();
            Ball::new(b.name.clone(), p.x, p.y, b.diameter)
        })
        .collect();

    let (width, height) = if geometry.pin_a1_corner.swaps_dimensions() {
        (geometry.height, geometry.width)
    } else {
        (geometry.width, geometry.height)
    };

    let geometry = PackageGeometry {
        width,
        height,
        ball_diameter: geometry.ball_diameter,
        pin_a1_corner: PinCorner::Nw,
        pin_a1_point: rot * geometry.pin_a1_point,
    };

    (rotated, geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn geom(corner: PinCorner) -> PackageGeometry {
        PackageGeometry {
            width: 10.0,
            height: 6.0,
            ball_diameter: 0.3,
            pin_a1_corner: corner,
            pin_a1_point: Point2::new(4.0, 2.0),
        }
    }

    #[test]
    fn nw_is_identity() {
        let balls = vec![Ball::new("A1", -4.0, 2.0, 0.3), Ball::new("C3", 1.0, -1.0, 0.3)];
        let (out, g) = normalize(&balls, &geom(PinCorner::Nw));
        assert_eq!(out, balls);
        assert_relative_eq!(g.width, 10.0);
        assert_relative_eq!(g.height, 6.0);
        assert_relative_eq!(g.pin_a1_point.x, 4.0);
        assert_relative_eq!(g.pin_a1_point.y, 2.0);
    }

    #[test]
    fn ne_rotates_a_quarter_turn_and_swaps_dimensions() {
        let balls = vec![Ball::new("A1", 4.0, 2.0, 0.3)];
        let (out, g) = normalize(&balls, &geom(PinCorner::Ne));
        // 90 deg CCW: (x, y) -> (-y, x)
        assert_relative_eq!(out[0].x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(g.width, 6.0);
        assert_relative_eq!(g.height, 10.0);
        assert_eq!(g.pin_a1_corner, PinCorner::Nw);
    }

    #[test]
    fn se_rotation_negates_coordinates() {
        let balls = vec![Ball::new("A1", 4.0, -2.0, 0.3)];
        let (out, g) = normalize(&balls, &geom(PinCorner::Se));
        assert_relative_eq!(out[0].x, -4.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(g.width, 10.0);
        assert_relative_eq!(g.height, 6.0);
    }

    #[test]
    fn double_swap_recovers_original_dimensions() {
        // NE then SW applies two quarter turns' worth of dimension swaps.
        let (_, once) = normalize(&[], &geom(PinCorner::Ne));
        let mut again = once.clone();
        again.pin_a1_corner = PinCorner::Sw;
        let (_, twice) = normalize(&[], &again);
        assert_relative_eq!(twice.width, 10.0);
        assert_relative_eq!(twice.height, 6.0);
    }

    #[test]
    fn sw_rotation_inverts_ne() {
        // Rotating by SW's angle undoes NE's quarter turn on positions.
        let balls = vec![Ball::new("A1", 1.5, -2.5, 0.3)];
        let (ne, _) = normalize(&balls, &geom(PinCorner::Ne));
        let mut g = geom(PinCorner::Sw);
        g.pin_a1_point = Point2::new(0.0, 0.0);
        let (back, _) = normalize(&ne, &g);
        assert_relative_eq!(back[0].x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(back[0].y, -2.5, epsilon = 1e-12);
    }
}
