//! Degree-based trigonometry and range reduction.

use std::f64::consts::PI;

/* degree sin */
pub(crate) fn dsin(d: f64) -> f64 {
    deg2rad(d).sin()
}

/* degree cos */
pub(crate) fn dcos(d: f64) -> f64 {
    deg2rad(d).cos()
}

/* degree tan */
pub(crate) fn dtan(d: f64) -> f64 {
    deg2rad(d).tan()
}

/* degree arcsin */
pub(crate) fn darcsin(x: f64) -> f64 {
    rad2deg(x.asin())
}

/* degree arccos */
pub(crate) fn darccos(x: f64) -> f64 {
    rad2deg(x.acos())
}

/* degree arctan2 */
pub(crate) fn darctan2(y: f64, x: f64) -> f64 {
    rad2deg(y.atan2(x))
}

/* degree arccot */
pub(crate) fn darccot(x: f64) -> f64 {
    rad2deg((1.0 / x).atan())
}

fn deg2rad(d: f64) -> f64 {
    d * PI / 180.0
}

fn rad2deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/// Range reduce an angle in degrees into `[0, 360)`.
pub(crate) fn fix_angle(a: f64) -> f64 {
    fix(a, 360.0)
}

/// Range reduce hours into `[0, 24)`.
pub(crate) fn fix_hour(a: f64) -> f64 {
    fix(a, 24.0)
}

fn fix(mut a: f64, b: f64) -> f64 {
    a -= b * (a / b).floor();
    if a < 0.0 {
        a + b
    } else {
        a
    }
}

/* compute the difference between two times */
pub(crate) fn time_diff(time1: f64, time2: f64) -> f64 {
    fix_hour(time2 - time1)
}
