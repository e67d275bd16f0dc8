//! Pixel ↔ sky mapping for postage-stamp images.
//!
//! A stamp is a square gnomonic image of the sky centered on the queried
//! galactic position. The image spans `±radius` along both axes of the
//! tangent plane. Galactic longitude grows to the left of the image and
//! latitude grows upward, so both pixel axes run opposite to the plane axes.

use argonaut_angle::{degrees_to_radians, radians_to_degrees};

use crate::error::FrameError;
use crate::galactic::{EquatorialCoord, GalacticCoord, galactic_to_equatorial_j2000};
use crate::gnomonic::{
    PlanePoint, TangentPoint, cos_center_distance, project_gnomonic, project_gnomonic_inverse,
};

/// Geometry of one displayed postage stamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampView {
    center_l_deg: f64,
    center_b_deg: f64,
    radius_deg: f64,
    width_px: f64,
    height_px: f64,
    tangent: TangentPoint,
    /// Plane coordinate of the image edge, `tan(radius)`.
    x_max: f64,
}

impl StampView {
    /// Describe a stamp centered on galactic `(l, b)` covering `radius_deg`
    /// from center to edge, displayed at `width_px × height_px`.
    pub fn new(
        l_deg: f64,
        b_deg: f64,
        radius_deg: f64,
        width_px: f64,
        height_px: f64,
    ) -> Result<Self, FrameError> {
        if !l_deg.is_finite() || !b_deg.is_finite() {
            return Err(FrameError::InvalidStamp("center must be finite"));
        }
        if !(-90.0..=90.0).contains(&b_deg) {
            return Err(FrameError::InvalidStamp("center latitude must be in [-90, 90]"));
        }
        if !(radius_deg > 0.0 && radius_deg < 90.0) {
            return Err(FrameError::InvalidStamp("radius must be in (0, 90) degrees"));
        }
        let positive = |v: f64| v > 0.0 && v.is_finite();
        if !positive(width_px) || !positive(height_px) {
            return Err(FrameError::InvalidStamp("image size must be positive"));
        }

        let tangent = TangentPoint::new(degrees_to_radians(l_deg), degrees_to_radians(b_deg));
        let origin = TangentPoint::new(0.0, 0.0);
        let x_max = project_gnomonic(degrees_to_radians(radius_deg), 0.0, &origin).x;

        log::trace!(
            "stamp at ({:.3}, {:.3}) r={} {}x{}px, x_max={:.6}",
            l_deg,
            b_deg,
            radius_deg,
            width_px,
            height_px,
            x_max
        );

        Ok(Self {
            center_l_deg: l_deg,
            center_b_deg: b_deg,
            radius_deg,
            width_px,
            height_px,
            tangent,
            x_max,
        })
    }

    pub fn center(&self) -> GalacticCoord {
        GalacticCoord {
            l_deg: self.center_l_deg,
            b_deg: self.center_b_deg,
        }
    }

    pub fn radius_deg(&self) -> f64 {
        self.radius_deg
    }

    /// Plane half-extent of the image.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Display pixel (origin top-left) to tangent-plane coordinates.
    pub fn pixel_to_plane(&self, px: f64, py: f64) -> PlanePoint {
        PlanePoint {
            x: -2.0 * (px / self.width_px - 0.5) * self.x_max,
            y: -2.0 * (py / self.height_px - 0.5) * self.x_max,
        }
    }

    /// Tangent-plane coordinates to display pixel.
    pub fn plane_to_pixel(&self, p: PlanePoint) -> (f64, f64) {
        (
            (0.5 - p.x / (2.0 * self.x_max)) * self.width_px,
            (0.5 - p.y / (2.0 * self.x_max)) * self.height_px,
        )
    }

    /// Galactic position under a display pixel.
    pub fn pixel_to_galactic(&self, px: f64, py: f64) -> GalacticCoord {
        let p = self.pixel_to_plane(px, py);
        let s = project_gnomonic_inverse(p.x, p.y, &self.tangent);
        GalacticCoord {
            l_deg: radians_to_degrees(s.lon_rad),
            b_deg: radians_to_degrees(s.lat_rad),
        }
    }

    /// J2000 equatorial position under a display pixel.
    pub fn pixel_to_equatorial(&self, px: f64, py: f64) -> EquatorialCoord {
        let g = self.pixel_to_galactic(px, py);
        galactic_to_equatorial_j2000(g.l_deg, g.b_deg)
    }

    /// Display pixel of a galactic position, `None` when the position is on
    /// or behind the tangent plane's horizon.
    pub fn galactic_to_pixel(&self, l_deg: f64, b_deg: f64) -> Option<(f64, f64)> {
        let lon = degrees_to_radians(l_deg);
        let lat = degrees_to_radians(b_deg);
        if cos_center_distance(lon, lat, &self.tangent) <= 0.0 {
            return None;
        }
        Some(self.plane_to_pixel(project_gnomonic(lon, lat, &self.tangent)))
    }

    /// Whether a display pixel lies inside the image.
    pub fn contains_pixel(&self, px: f64, py: f64) -> bool {
        (0.0..=self.width_px).contains(&px) && (0.0..=self.height_px).contains(&py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galactic::longitude_separation_deg;

    const EPS: f64 = 1e-9;

    fn view() -> StampView {
        StampView::new(45.0, 10.0, 5.0, 400.0, 300.0).expect("valid stamp")
    }

    #[test]
    fn x_max_is_tan_radius() {
        assert!((view().x_max() - 5.0_f64.to_radians().tan()).abs() < 1e-15);
    }

    #[test]
    fn image_center_is_stamp_center() {
        let v = view();
        let g = v.pixel_to_galactic(200.0, 150.0);
        assert!(longitude_separation_deg(g.l_deg, 45.0) < EPS);
        assert!((g.b_deg - 10.0).abs() < EPS);
    }

    #[test]
    fn left_edge_is_higher_longitude() {
        let v = view();
        let left = v.pixel_to_galactic(0.0, 150.0);
        let right = v.pixel_to_galactic(400.0, 150.0);
        assert!(left.l_deg > 45.0 && right.l_deg < 45.0);
    }

    #[test]
    fn top_edge_is_higher_latitude() {
        let v = view();
        let top = v.pixel_to_galactic(200.0, 0.0);
        let bottom = v.pixel_to_galactic(200.0, 300.0);
        assert!((top.b_deg - 15.0).abs() < 1e-9, "top b = {}", top.b_deg);
        assert!((bottom.b_deg - 5.0).abs() < 1e-9, "bottom b = {}", bottom.b_deg);
    }

    #[test]
    fn pixel_roundtrip() {
        let v = view();
        for &(px, py) in &[(0.0, 0.0), (123.4, 56.7), (400.0, 300.0), (200.0, 150.0)] {
            let g = v.pixel_to_galactic(px, py);
            let (bx, by) = v.galactic_to_pixel(g.l_deg, g.b_deg).expect("in front");
            assert!((bx - px).abs() < 1e-6, "px {px} -> {bx}");
            assert!((by - py).abs() < 1e-6, "py {py} -> {by}");
        }
    }

    #[test]
    fn antipode_has_no_pixel() {
        assert_eq!(view().galactic_to_pixel(225.0, -10.0), None);
    }

    #[test]
    fn rejects_bad_geometry() {
        assert!(StampView::new(0.0, 0.0, 0.0, 100.0, 100.0).is_err());
        assert!(StampView::new(0.0, 0.0, 90.0, 100.0, 100.0).is_err());
        assert!(StampView::new(0.0, 95.0, 5.0, 100.0, 100.0).is_err());
        assert!(StampView::new(0.0, 0.0, 5.0, 0.0, 100.0).is_err());
        assert!(StampView::new(f64::NAN, 0.0, 5.0, 100.0, 100.0).is_err());
        assert_eq!(
            StampView::new(0.0, 0.0, 5.0, 100.0, -1.0),
            Err(FrameError::InvalidStamp("image size must be positive"))
        );
    }

    #[test]
    fn contains_pixel_bounds() {
        let v = view();
        assert!(v.contains_pixel(0.0, 300.0));
        assert!(!v.contains_pixel(-1.0, 10.0));
        assert!(!v.contains_pixel(10.0, 301.0));
    }
}
