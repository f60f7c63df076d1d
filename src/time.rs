//! # Time base
//!
//! Conversion of a UTC instant ([`hifitime::Epoch`]) into the two time arguments used by the
//! low-precision formulas of this crate:
//!
//! - **days since J2000.0** (2000-01-01 12:00:00 UTC), fractional and possibly negative;
//! - **Julian centuries since J2000.0**, i.e. days / 36525.
//!
//! Both are counted on the UTC civil day (leap seconds do not lengthen a day), which is what the
//! element table and sidereal-time formulas expect.
use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{Centuries, Days, DAYS_PER_CENTURY, HOURS_PER_DAY, T2000};
use crate::skydome_errors::SkydomeError;

/// The J2000.0 reference instant, 2000-01-01T12:00:00 UTC.
pub fn j2000_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0)
}

/// Fractional days elapsed between J2000.0 and `epoch`.
///
/// Negative for instants before the reference epoch.
pub fn days_since_j2000(epoch: &Epoch) -> Days {
    epoch.to_mjd_utc_days() - T2000
}

/// Julian centuries elapsed between J2000.0 and `epoch`.
pub fn centuries_since_j2000(epoch: &Epoch) -> Centuries {
    days_since_j2000(epoch) / DAYS_PER_CENTURY
}

/// UTC time of day of `epoch`, in decimal hours within [0, 24).
pub fn utc_hours_of_day(epoch: &Epoch) -> f64 {
    epoch.to_mjd_utc_days().rem_euclid(1.0) * HOURS_PER_DAY
}

/// Parse an ISO-8601 date (e.g. `2024-03-20T03:06:00`) as a UTC instant.
///
/// Arguments
/// ---------
/// * `date`: the date string; a missing time scale is read as UTC.
///
/// Return
/// ------
/// * the parsed [`Epoch`], or [`SkydomeError::InvalidDate`] if the string cannot be parsed.
pub fn epoch_from_iso(date: &str) -> Result<Epoch, SkydomeError> {
    Epoch::from_str(date.trim()).map_err(|e| SkydomeError::InvalidDate(format!("{date}: {e}")))
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_days_at_j2000() {
        let epoch = j2000_epoch();
        assert_abs_diff_eq!(days_since_j2000(&epoch), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(centuries_since_j2000(&epoch), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_days_since_j2000() {
        let epoch = epoch_from_iso("2021-01-01T00:00:00").unwrap();
        assert_abs_diff_eq!(days_since_j2000(&epoch), 7670.5, epsilon = 1e-8);
        assert_abs_diff_eq!(
            centuries_since_j2000(&epoch),
            7670.5 / 36525.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_days_before_epoch_are_negative() {
        let epoch = Epoch::from_gregorian_utc_hms(1999, 12, 31, 12, 0, 0);
        assert_abs_diff_eq!(days_since_j2000(&epoch), -1.0, epsilon = 1e-9);

        let epoch = Epoch::from_gregorian_utc_hms(1900, 1, 1, 0, 0, 0);
        assert!(centuries_since_j2000(&epoch) < -0.99);
    }

    #[test]
    fn test_utc_hours_of_day() {
        let epoch = Epoch::from_gregorian_utc_hms(2021, 6, 15, 18, 30, 0);
        assert_abs_diff_eq!(utc_hours_of_day(&epoch), 18.5, epsilon = 1e-6);

        let epoch = Epoch::from_gregorian_utc_hms(1995, 2, 3, 6, 0, 0);
        assert_abs_diff_eq!(utc_hours_of_day(&epoch), 6.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_date() {
        let err = epoch_from_iso("not a date").unwrap_err();
        assert!(matches!(err, SkydomeError::InvalidDate(_)));
    }
}
