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

//! The wgs84 module contains the WGS 84 defining parameters from
//! NIMA TR8350.2, the World Geodetic System 1984 technical report,
//! Section 3.2.

/// The WGS 84 semi-major axis in metres.
/// This is the radius at the equator.
pub const A: f64 = 6_378_137.0;

/// The WGS 84 reciprocal flattening, `1/f`.
pub const RF: f64 = 298.257_223_563;

/// The WGS 84 flattening, a ratio.
/// This is the flattening of the ellipsoid at the poles.
pub const F: f64 = 1.0 / RF;

/// The square of the WGS 84 eccentricity: `f * (2 - f)`.
pub const ES: f64 = F * (2.0 - F);
