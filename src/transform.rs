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

//! The transform module contains functions for working with Bursa-Wolf
//! datum transform parameters: the 3-parameter (translation) or
//! 7-parameter (translation, rotation and scale) similarity transform
//! between a geodetic datum and WGS 84, as given by a `towgs84`
//! parameter.

/// Test whether a 3- or 7-parameter Bursa-Wolf transform produces no
/// shift: zero offsets, zero rotations and a unit scale.
/// * `transform` - the transform parameters.
/// # Examples
/// ```
/// use proj4_datum::transform::is_identity;
///
/// assert!(is_identity(&[0.0, 0.0, 0.0]));
/// assert!(is_identity(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]));
/// assert!(!is_identity(&[-87.0, -98.0, -121.0]));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_identity(transform: &[f64]) -> bool {
    for (i, param) in transform.iter().enumerate() {
        // the scale factor of a 7-parameter transform may be given as
        // unity, or left at zero meaning unset
        if i == 6 {
            if *param != 0.0 && *param != 1.0 {
                return false;
            }
        } else if *param != 0.0 {
            return false;
        }
    }

    true
}
