// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains functions for deriving the canonical
//! `(semi-major axis, eccentricity squared)` shape of an ellipsoid from
//! the other, mutually derivable, shape parameters found in PROJ
//! definition strings: semi-axes, flattening, reciprocal flattening and
//! the authalic sphere correction.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

/// The first coefficient of the authalic radius series: 1/6.
pub const SIXTH: f64 = 0.166_666_666_666_666_666_7;

/// The second coefficient of the authalic radius series: 17/360.
pub const RA4: f64 = 0.047_222_222_222_222_222_22;

/// The third coefficient of the authalic radius series: 67/3024.
pub const RA6: f64 = 0.022_156_084_656_084_656_08;

/// Calculate the square of the eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use proj4_datum::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 eccentricity squared.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the eccentricity of an ellipsoid from its
/// semi-axes: `1 - b²/a²`.
/// * `a` - the semi-major axis of the ellipsoid.
/// * `b` - the semi-minor axis of the ellipsoid.
/// # Examples
/// ```
/// use proj4_datum::ellipsoid::calculate_sq_eccentricity_from_axes;
///
/// let es = calculate_sq_eccentricity_from_axes(6_378_137.0, 6_356_752.314_245);
/// assert!((es - 0.0066943800229).abs() < 1e-10);
/// ```
#[must_use]
pub fn calculate_sq_eccentricity_from_axes(a: f64, b: f64) -> f64 {
    1.0 - (b * b) / (a * a)
}

/// Calculate the radius of the authalic sphere: the sphere with the same
/// surface area as the ellipsoid.
///
/// The radius is approximated by a truncated power series in the square
/// of the eccentricity, avoiding an elliptic integral evaluation; the
/// approximation is adequate for all physically plausible eccentricities
/// (`es < 1`). The coefficients are the published PROJ.4 reference
/// expansion and must not be substituted by an alternate approximation.
/// * `a` - the semi-major axis of the ellipsoid.
/// * `es` - the square of the eccentricity of the ellipsoid.
/// # Examples
/// ```
/// use proj4_datum::ellipsoid::calculate_authalic_radius;
///
/// // A sphere is its own authalic sphere.
/// assert_eq!(6_371_000.0, calculate_authalic_radius(6_371_000.0, 0.0));
/// ```
#[must_use]
pub fn calculate_authalic_radius(a: f64, es: f64) -> f64 {
    a * (1.0 - es * (SIXTH + es * (RA4 + es * RA6)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_sq_eccentricity() {
        assert_eq!(wgs84::ES, calculate_sq_eccentricity(wgs84::F));
        assert_eq!(0.0, calculate_sq_eccentricity(0.0));

        // the International 1924 ellipsoid
        let es = calculate_sq_eccentricity(1.0 / 297.0);
        assert!((es - 0.006_722_670_022_333_2).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_sq_eccentricity_from_axes() {
        // a sphere has zero eccentricity
        assert_eq!(
            0.0,
            calculate_sq_eccentricity_from_axes(6_371_000.0, 6_371_000.0)
        );

        let es = calculate_sq_eccentricity_from_axes(6_378_137.0, 6_356_752.314_245);
        assert!((es - wgs84::ES).abs() < 1e-10);

        // an unset semi-major axis propagates NaN
        assert!(calculate_sq_eccentricity_from_axes(f64::NAN, 6_356_752.314_245).is_nan());
    }

    #[test]
    fn test_calculate_authalic_radius() {
        // exact identity at zero eccentricity
        assert_eq!(wgs84::A, calculate_authalic_radius(wgs84::A, 0.0));

        // the WGS 84 authalic radius, 6371007.181 m
        let r = calculate_authalic_radius(wgs84::A, wgs84::ES);
        assert!((r - 6_371_007.181_082_429).abs() < 1e-6);
        assert!(r < wgs84::A);
    }
}
