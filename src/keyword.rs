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

//! The keyword module validates the parameter keys of a PROJ-style CRS
//! definition against the fixed vocabulary of recognised keywords.
//!
//! The vocabulary is case-sensitive and built exactly once per process,
//! on first access; concurrent first accesses observe a single, fully
//! built, thereafter immutable set.
//!
//! Keys outside the vocabulary fail with [`UnsupportedParameterError`];
//! keys inside it are not necessarily consumed by this library: the
//! projection parameters (`proj`, `lat_0`, `k_0`, ...) are validated
//! here but interpreted by the projection subsystem.

use lazy_static::lazy_static;
use std::collections::BTreeSet;
use thiserror::Error;

/// The error raised when a parameter key is not in the vocabulary of
/// recognised keywords.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{key} parameter is not supported")]
pub struct UnsupportedParameterError {
    /// The offending parameter key.
    pub key: String,
}

lazy_static! {
    static ref SUPPORTED_PARAMETERS: BTreeSet<&'static str> = BTreeSet::from([
        // ellipsoid and datum parameters
        "a",
        "b",
        "f",
        "rf",
        "es",
        "R",
        "R_A",
        "R_a",
        "R_V", // TODO: implement the R_V volumetric radius derivation
        "R_g",
        "R_h",
        "R_lat_a",
        "R_lat_g",
        "ellps",
        "datum",
        "towgs84",
        "nadgrids",
        // projection parameters
        "proj",
        "alpha",
        "azi",
        "gamma",
        "k",
        "k_0",
        "lat_ts",
        "lat_0",
        "lat_1",
        "lat_2",
        "lon_0",
        "lonc",
        "pm",
        "axis",
        "south",
        "zone",
        "x_0",
        "y_0",
        "to_meter",
        "units",
        // recognised no-ops, kept for definition-string compatibility
        "title",
        "no_defs",
        "wktext",
        "no_uoff",
    ]);
}

/// The vocabulary of supported parameter keys.
///
/// The set is built on first access and every subsequent call returns
/// the same, immutable set.
#[must_use]
pub fn supported_parameters() -> &'static BTreeSet<&'static str> {
    &SUPPORTED_PARAMETERS
}

/// Whether `key` is in the vocabulary of supported parameter keys.
/// * `key` - the parameter key, case-sensitive.
/// # Examples
/// ```
/// use proj4_datum::keyword::is_supported;
///
/// assert!(is_supported("towgs84"));
/// assert!(!is_supported("TOWGS84"));
/// ```
#[must_use]
pub fn is_supported(key: &str) -> bool {
    SUPPORTED_PARAMETERS.contains(key)
}

/// Check a parameter key against the vocabulary.
/// * `key` - the parameter key, case-sensitive.
///
/// # Errors
///
/// `UnsupportedParameterError` when `key` is not in the vocabulary.
pub fn check_supported(key: &str) -> Result<(), UnsupportedParameterError> {
    if is_supported(key) {
        Ok(())
    } else {
        Err(UnsupportedParameterError {
            key: key.to_string(),
        })
    }
}

/// Check every parameter key in `keys`, in order, against the
/// vocabulary.
/// * `keys` - the parameter keys, case-sensitive.
///
/// # Errors
///
/// `UnsupportedParameterError` for the first key encountered that is not
/// in the vocabulary; the remaining keys are not examined.
pub fn check_supported_all<'a, I>(keys: I) -> Result<(), UnsupportedParameterError>
where
    I: IntoIterator<Item = &'a str>,
{
    for key in keys {
        check_supported(key)?;
    }

    Ok(())
}
