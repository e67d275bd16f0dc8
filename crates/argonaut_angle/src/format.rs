//! Readout labels for coordinate overlays.

use std::fmt::{Display, Formatter};

use crate::convert::{Hms, degrees_to_hms};

impl Display for Hms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h{:02}m{:05.2}s", self.hours, self.minutes, self.seconds)
    }
}

/// Right ascension label with whole seconds, e.g. `17h45m37s`.
///
/// Seconds are rounded and carried into minutes and hours; 24h wraps to 0h.
pub fn ra_label(ra_deg: f64) -> String {
    let hms = degrees_to_hms(ra_deg);
    let mut seconds = hms.seconds.round() as u32;
    let mut minutes = hms.minutes as u32;
    let mut hours = hms.hours as u32;
    if seconds >= 60 {
        seconds -= 60;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        hours += 1;
    }
    hours %= 24;
    format!("{hours}h{minutes:02}m{seconds:02}s")
}

/// Fixed-point degree label, e.g. `12.3°`.
pub fn lonlat_label(value_deg: f64, decimals: usize) -> String {
    format!("{value_deg:.decimals$}\u{00B0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_display() {
        let h = Hms {
            hours: 10,
            minutes: 5,
            seconds: 3.45,
        };
        assert_eq!(h.to_string(), "10h05m03.45s");
    }

    #[test]
    fn ra_label_known() {
        assert_eq!(ra_label(151.264375), "10h05m03s");
        assert_eq!(ra_label(0.0), "0h00m00s");
    }

    #[test]
    fn ra_label_carries_rounded_seconds() {
        // 59.6 s of time rounds up into the next minute
        let deg = 10.0 * 15.0 + 59.0 / 4.0 + 59.6 / 240.0;
        assert_eq!(ra_label(deg), "11h00m00s");
    }

    #[test]
    fn ra_label_wraps_at_24h() {
        assert_eq!(ra_label(359.9999), "0h00m00s");
    }

    #[test]
    fn ra_label_negative_input() {
        // -15 deg = 345 deg = 23h
        assert_eq!(ra_label(-15.0), "23h00m00s");
    }

    #[test]
    fn lonlat_label_precision() {
        assert_eq!(lonlat_label(12.345, 1), "12.3\u{00B0}");
        assert_eq!(lonlat_label(-0.5, 3), "-0.500\u{00B0}");
    }
}
