//! Degree/radian and sexagesimal conversions.

use std::f64::consts::PI;

/// Hour-minute-second representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    /// Whole hours (0..23).
    pub hours: u8,
    /// Whole minutes of time (0..59).
    pub minutes: u8,
    /// Seconds of time (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

pub fn degrees_to_radians(theta: f64) -> f64 {
    PI / 180.0 * theta
}

pub fn radians_to_degrees(theta: f64) -> f64 {
    180.0 / PI * theta
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

fn component(v: Option<f64>) -> f64 {
    v.filter(|x| x.is_finite()).unwrap_or(0.0)
}

/// Convert an hour-minute-second triple to degrees.
///
/// Absent or non-finite components contribute zero.
pub fn hms_to_degrees(hours: Option<f64>, minutes: Option<f64>, seconds: Option<f64>) -> f64 {
    component(hours) * 15.0 + component(minutes) / 4.0 + component(seconds) / 240.0
}

/// Convert a degree-minute-second triple to decimal degrees.
///
/// Absent or non-finite components contribute zero.
pub fn dms_to_degrees(degrees: Option<f64>, arcmin: Option<f64>, arcsec: Option<f64>) -> f64 {
    component(degrees) + component(arcmin) / 60.0 + component(arcsec) / 3600.0
}

/// Convert decimal degrees to hours, minutes and seconds of time.
///
/// The input is first brought into [0, 360): negative angles gain
/// `ceil(-theta / 360)` full turns, angles of a full turn or more lose
/// `floor(theta / 360)` turns.
pub fn degrees_to_hms(theta: f64) -> Hms {
    let mut theta = theta;
    if theta < 0.0 {
        theta += 360.0 * (-theta / 360.0).ceil();
    }
    if theta >= 360.0 {
        theta -= 360.0 * (theta / 360.0).floor();
    }
    // Rounding in the subtraction above can land exactly on 360.0.
    if theta >= 360.0 {
        theta = 0.0;
    }

    let hours = (theta / 15.0).floor();
    theta -= 15.0 * hours;
    let minutes = (theta * 4.0).floor();
    theta -= minutes / 4.0;
    let seconds = theta * 240.0;

    Hms {
        hours: hours as u8,
        minutes: minutes as u8,
        seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn radians_roundtrip() {
        for deg in [-720.0, -45.0, 0.0, 12.345, 180.0, 359.999] {
            let back = radians_to_degrees(degrees_to_radians(deg));
            assert!((back - deg).abs() < EPS, "{deg} -> {back}");
        }
    }

    #[test]
    fn half_turn_is_pi() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-15);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn hms_known() {
        let deg = hms_to_degrees(Some(10.0), Some(5.0), Some(3.45));
        assert!((deg - 151.264375).abs() < EPS);
    }

    #[test]
    fn hms_absent_components_are_zero() {
        assert!((hms_to_degrees(Some(2.0), None, None) - 30.0).abs() < EPS);
        assert!((hms_to_degrees(None, Some(4.0), None) - 1.0).abs() < EPS);
        assert!((hms_to_degrees(None, None, Some(240.0)) - 1.0).abs() < EPS);
        assert_eq!(hms_to_degrees(None, None, None), 0.0);
    }

    #[test]
    fn non_finite_components_are_zero() {
        assert!((hms_to_degrees(Some(1.0), Some(f64::NAN), None) - 15.0).abs() < EPS);
        assert!((dms_to_degrees(Some(f64::INFINITY), Some(30.0), None) - 0.5).abs() < EPS);
    }

    #[test]
    fn dms_known() {
        let deg = dms_to_degrees(Some(15.0), Some(43.0), Some(15.8));
        assert!((deg - 15.721_055_555_555_555).abs() < EPS);
    }

    #[test]
    fn hms_of_zero() {
        let h = degrees_to_hms(0.0);
        assert_eq!(h.hours, 0);
        assert_eq!(h.minutes, 0);
        assert!(h.seconds.abs() < EPS);
    }

    #[test]
    fn hms_known_split() {
        // 151.264375 deg = 10h 05m 03.45s
        let h = degrees_to_hms(151.264375);
        assert_eq!(h.hours, 10);
        assert_eq!(h.minutes, 5);
        assert!((h.seconds - 3.45).abs() < 1e-6, "seconds = {}", h.seconds);
    }

    #[test]
    fn hms_above_full_turn_wraps() {
        let h = degrees_to_hms(360.01);
        assert_eq!(h.hours, 0);
        assert_eq!(h.minutes, 0);
        assert!((h.seconds - 2.4).abs() < 1e-6, "seconds = {}", h.seconds);
    }

    #[test]
    fn hms_negative_uses_ceiling() {
        // -15 deg + 1 turn = 345 deg = 23h 00m 00s
        let h = degrees_to_hms(-15.0);
        assert_eq!(h.hours, 23);
        assert_eq!(h.minutes, 0);
        assert!(h.seconds.abs() < 1e-6);

        // -370 deg + 2 turns = 350 deg = 23h 20m
        let h = degrees_to_hms(-370.0);
        assert_eq!(h.hours, 23);
        assert_eq!(h.minutes, 20);
        assert!(h.seconds.abs() < 1e-6);
    }

    #[test]
    fn hms_exact_negative_turn() {
        let h = degrees_to_hms(-360.0);
        assert_eq!(h.hours, 0);
        assert_eq!(h.minutes, 0);
        assert!(h.seconds.abs() < EPS);
    }

    #[test]
    fn hms_fields_in_range() {
        let mut deg = -1000.0;
        while deg < 1000.0 {
            let h = degrees_to_hms(deg);
            assert!(h.hours < 24, "{deg}: hours {}", h.hours);
            assert!(h.minutes < 60, "{deg}: minutes {}", h.minutes);
            assert!((-1e-9..60.0 + 1e-9).contains(&h.seconds), "{deg}: seconds {}", h.seconds);
            deg += 7.77;
        }
    }

    #[test]
    fn normalize_wraps_both_ways() {
        assert!((normalize_360(-10.0) - 350.0).abs() < EPS);
        assert!((normalize_360(730.0) - 10.0).abs() < EPS);
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-1e-17), 0.0);
    }
}
