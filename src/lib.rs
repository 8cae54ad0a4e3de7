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

//! proj4-datum
//!
//! A library for resolving a coherent geodetic datum and ellipsoid
//! definition from the named parameters of a PROJ-style coordinate
//! reference system (CRS) definition.
//!
//! A PROJ definition may express the shape of its reference ellipsoid in
//! several mutually derivable forms: semi-axes (`a`, `b`), flattening
//! (`f`), reciprocal flattening (`rf`), eccentricity squared (`es`) or an
//! authalic sphere correction (`R_A`); alongside an explicit named
//! ellipsoid (`ellps`), an explicit datum (`datum`), a Bursa-Wolf
//! transform (`towgs84`) and grid-based corrections (`nadgrids`).
//! The parameters may be redundant or conflicting, so resolving them
//! requires a precedence policy as well as the shape-parameter
//! interconversions.
//!
//! The library provides:
//!
//! - the [`keyword`] module, to validate parameter keys against the fixed
//!   vocabulary of recognised keywords;
//! - the [`DatumResolver`], to accumulate parameter values and resolve
//!   them into a coherent [`Ellipsoid`] and [`Datum`] pair.
//!
//! Splitting a definition string into `(key, value)` pairs, the library
//! of map projection transforms, grid-shift file loading and the
//! coordinate transformation pipeline itself are all outside the scope of
//! this library: it only consumes already split pairs and produces the
//! datum and ellipsoid for the CRS.
//!
//! The `DatumResolver` applies the same precedence policy as the PROJ.4
//! family of parsers:
//!
//! 1. an explicit datum overrides everything else;
//! 2. an entirely unspecified CRS defaults to the WGS 84 datum;
//! 3. a definition equivalent to WGS 84 collapses to the shared
//!    [`WGS84_DATUM`] singleton;
//! 4. anything else resolves to a custom, user-defined datum.
//!
//! The library depends upon the following crates:
//!
//! - [lazy_static](https://crates.io/crates/lazy_static) and
//!   [once_cell](https://crates.io/crates/once_cell) - to build the
//!   keyword vocabulary and the WGS 84 singletons once, on first use;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the
//!   [`UnsupportedParameterError`] type.
//!
//! # Examples
//! ```
//! use proj4_datum::{keyword, DatumResolver};
//!
//! # fn main() -> Result<(), proj4_datum::UnsupportedParameterError> {
//! // "+proj=tmerc +a=6378388 +rf=297 +towgs84=-87,-98,-121"
//! // split into (key, value) pairs by an external parser.
//! keyword::check_supported_all(["proj", "a", "rf", "towgs84"])?;
//!
//! let mut resolver = DatumResolver::new();
//! resolver.set_a(6_378_388.0);
//! resolver.set_rf(1.0 / 297.0); // the International 1924 flattening
//! resolver.set_datum_transform(vec![-87.0, -98.0, -121.0]);
//!
//! let datum = resolver.datum();
//! assert_eq!("User", datum.name());
//! assert_eq!(6_378_388.0, datum.ellipsoid().a());
//! # Ok(())
//! # }
//! ```

pub mod ellipsoid;
pub mod keyword;
pub mod transform;

pub use keyword::UnsupportedParameterError;

use once_cell::sync::Lazy;

/// A semantic reference ellipsoid: an ellipse of revolution modelling the
/// shape of the Earth, defined by its semi-major axis and the square of
/// its eccentricity.
///
/// An `Ellipsoid` is immutable once constructed. Shape parameters that
/// were never supplied are carried as `NaN` rather than rejected, see
/// [`is_valid`](Ellipsoid::is_valid).
#[derive(Clone, Debug)]
pub struct Ellipsoid {
    /// The short PROJ-style name of the ellipsoid, e.g. "WGS84".
    name: String,
    /// The semi-major axis of the ellipsoid.
    a: f64,
    /// The square of the eccentricity of the ellipsoid.
    es: f64,
    /// A human readable description of the ellipsoid.
    description: String,
}

impl Ellipsoid {
    /// Constructor.
    /// * `name` - the short PROJ-style name of the `Ellipsoid`.
    /// * `a` - the semi-major axis of the `Ellipsoid`.
    /// * `es` - the square of the eccentricity of the `Ellipsoid`.
    /// * `description` - a human readable description.
    #[must_use]
    pub fn new(name: &str, a: f64, es: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            a,
            es,
            description: description.to_string(),
        }
    }

    /// Construct an `Ellipsoid` from its semi-major axis and reciprocal
    /// flattening, the form used by most published ellipsoid tables.
    /// * `name` - the short PROJ-style name of the `Ellipsoid`.
    /// * `a` - the semi-major axis of the `Ellipsoid`.
    /// * `rf` - the reciprocal flattening of the `Ellipsoid`, `1/f`.
    /// * `description` - a human readable description.
    #[must_use]
    pub fn from_rf(name: &str, a: f64, rf: f64, description: &str) -> Self {
        Self::new(
            name,
            a,
            ellipsoid::calculate_sq_eccentricity(1.0 / rf),
            description,
        )
    }

    /// Construct an `Ellipsoid` with the WGS 84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new("WGS84", ellipsoid::wgs84::A, ellipsoid::wgs84::ES, "WGS84")
    }

    /// The short PROJ-style name of the ellipsoid.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The semi-major axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The square of the eccentricity of the ellipsoid.
    #[must_use]
    pub const fn es(&self) -> f64 {
        self.es
    }

    /// A human readable description of the ellipsoid.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Test whether both shape parameters of the ellipsoid are set,
    /// i.e. neither is the `NaN` unset sentinel.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !(self.a.is_nan() || self.es.is_nan())
    }
}

impl PartialEq for Ellipsoid {
    /// Two ellipsoids are equal iff their semi-major axes and squared
    /// eccentricities are (exactly) equal; names are not compared.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.es == other.es
    }
}

/// An external, file backed, grid-based datum correction surface,
/// e.g. an NTv2 grid named by the `nadgrids` parameter.
///
/// Loading and evaluating grids is outside the scope of this library;
/// a `Grid` is an opaque named handle passed through to the [`Datum`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// The name of the grid file.
    name: String,
}

impl Grid {
    /// Constructor.
    /// * `name` - the name of the grid file.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The name of the grid file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A geodetic datum: a reference [`Ellipsoid`] together with its
/// anchoring to the Earth, optionally a Bursa-Wolf transform and/or
/// grid-based correction surfaces.
///
/// A `Datum` is immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// The short PROJ-style name of the datum, e.g. "WGS84".
    name: String,
    /// The 3- or 7-parameter Bursa-Wolf transform to WGS 84, if any.
    transform: Option<Vec<f64>>,
    /// The grid-based correction surfaces of the datum, if any.
    grids: Option<Vec<Grid>>,
    /// The reference ellipsoid of the datum.
    ellipsoid: Ellipsoid,
    /// A human readable description of the datum.
    description: String,
}

impl Datum {
    /// Constructor.
    /// * `name` - the short PROJ-style name of the `Datum`.
    /// * `transform` - the Bursa-Wolf transform to WGS 84, if any.
    /// * `grids` - the grid-based correction surfaces, if any.
    /// * `ellipsoid` - the reference `Ellipsoid` of the `Datum`.
    /// * `description` - a human readable description.
    #[must_use]
    pub fn new(
        name: &str,
        transform: Option<Vec<f64>>,
        grids: Option<Vec<Grid>>,
        ellipsoid: Ellipsoid,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            transform,
            grids,
            ellipsoid,
            description: description.to_string(),
        }
    }

    /// Construct a `Datum` with the WGS 84 parameters: the WGS 84
    /// ellipsoid, no transform and no grids.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new("WGS84", None, None, Ellipsoid::wgs84(), "WGS84")
    }

    /// The short PROJ-style name of the datum.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The 3- or 7-parameter Bursa-Wolf transform to WGS 84, if any.
    #[must_use]
    pub fn transform(&self) -> Option<&[f64]> {
        self.transform.as_deref()
    }

    /// The grid-based correction surfaces of the datum, if any.
    #[must_use]
    pub fn grids(&self) -> Option<&[Grid]> {
        self.grids.as_deref()
    }

    /// The reference ellipsoid of the datum.
    #[must_use]
    pub const fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// A human readable description of the datum.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A static instance of the WGS 84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// A static instance of the WGS 84 `Datum`.
pub static WGS84_DATUM: Lazy<Datum> = Lazy::new(Datum::wgs84);

/// Accumulates the ellipsoid and datum parameters of a CRS definition
/// and resolves them into a coherent [`Ellipsoid`] and [`Datum`] pair.
///
/// A `DatumResolver` is created once per CRS definition being parsed,
/// mutated incrementally as the external parser routes each `(key,
/// value)` pair to the matching setter, then queried for the resolved
/// [`ellipsoid`](DatumResolver::ellipsoid) and
/// [`datum`](DatumResolver::datum) once all the pairs have been consumed.
///
/// Shape parameters that have not been supplied yet are carried as `NaN`;
/// the setters never fail, insufficient input propagates `NaN` into the
/// resolved ellipsoid for downstream validation to catch.
#[derive(Clone, Debug)]
pub struct DatumResolver {
    /// An explicitly supplied datum, overrides everything else.
    datum: Option<Datum>,
    /// The 3- or 7-parameter Bursa-Wolf transform to WGS 84, if any.
    datum_transform: Option<Vec<f64>>,
    /// The grid-based correction surfaces, if any.
    grids: Option<Vec<Grid>>,
    /// An explicitly supplied ellipsoid.
    ellipsoid: Option<Ellipsoid>,
    /// The semi-major axis, `NaN` while unset.
    a: f64,
    /// The square of the eccentricity, `NaN` while unset.
    es: f64,
}

impl Default for DatumResolver {
    fn default() -> Self {
        Self {
            datum: None,
            datum_transform: None,
            grids: None,
            ellipsoid: None,
            a: f64::NAN,
            es: f64::NAN,
        }
    }
}

impl DatumResolver {
    /// Construct a `DatumResolver` with nothing set: both shape
    /// parameters are the `NaN` unset sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The semi-major axis accumulated so far, `NaN` while unset.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The square of the eccentricity accumulated so far, `NaN` while
    /// unset.
    #[must_use]
    pub const fn es(&self) -> f64 {
        self.es
    }

    /// Set an explicit (named) ellipsoid, e.g. from an `ellps` parameter,
    /// adopting its shape parameters.
    pub fn set_ellipsoid(&mut self, ellipsoid: Ellipsoid) {
        self.a = ellipsoid.a();
        self.es = ellipsoid.es();
        self.ellipsoid = Some(ellipsoid);
    }

    /// Set the semi-major axis from an `a` parameter.
    pub fn set_a(&mut self, a: f64) {
        // a raw shape parameter always describes a user-defined ellipsoid
        self.ellipsoid = None;
        self.a = a;
    }

    /// Set the eccentricity squared from a `b` (semi-minor axis)
    /// parameter: `es = 1 - b²/a²`.
    ///
    /// Requires the semi-major axis to have been set; if it is still
    /// unset the result is `NaN`, not an error.
    pub fn set_b(&mut self, b: f64) {
        self.ellipsoid = None;
        self.es = ellipsoid::calculate_sq_eccentricity_from_axes(self.a, b);
    }

    /// Set the eccentricity squared directly from an `es` parameter.
    pub fn set_es(&mut self, es: f64) {
        self.ellipsoid = None;
        self.es = es;
    }

    /// Set the eccentricity squared from the flattening ratio, the
    /// reciprocal of the `rf` parameter value: `es = rf * (2 - rf)`.
    pub fn set_rf(&mut self, rf: f64) {
        self.ellipsoid = None;
        self.es = ellipsoid::calculate_sq_eccentricity(rf);
    }

    /// Set the eccentricity squared from the reciprocal of an `f`
    /// parameter value: `es = (1/f) * (2 - 1/f)`.
    pub fn set_f(&mut self, f: f64) {
        self.ellipsoid = None;
        let rf = 1.0 / f;
        self.es = ellipsoid::calculate_sq_eccentricity(rf);
    }

    /// Replace the semi-major axis by the radius of the authalic sphere,
    /// the sphere with the same surface area as the ellipsoid, for an
    /// `R_A` parameter.
    ///
    /// Requires the eccentricity squared to have been set; when it is
    /// zero the semi-major axis is (exactly) unchanged.
    pub fn set_r_a(&mut self) {
        self.ellipsoid = None;
        self.a = ellipsoid::calculate_authalic_radius(self.a, self.es);
    }

    /// Set an explicit datum, e.g. from a `datum` parameter.
    pub fn set_datum(&mut self, datum: Datum) {
        self.datum = Some(datum);
    }

    /// Set the Bursa-Wolf transform to WGS 84 from a `towgs84` parameter.
    pub fn set_datum_transform(&mut self, transform: Vec<f64>) {
        self.datum_transform = Some(transform);
        // a previously set datum is stale, rebuild it from current state
        self.datum = None;
    }

    /// Set the grid-based correction surfaces from a `nadgrids`
    /// parameter.
    pub fn set_grids(&mut self, grids: Vec<Grid>) {
        self.grids = Some(grids);
    }

    /// Resolve the accumulated shape parameters into an [`Ellipsoid`].
    ///
    /// An explicitly set ellipsoid is returned unchanged; otherwise a
    /// user-defined ellipsoid is constructed from the current shape
    /// parameters, carrying `NaN` for any that were never supplied.
    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
            .clone()
            .unwrap_or_else(|| Ellipsoid::new("user", self.a, self.es, "User-defined"))
    }

    /// Resolve the accumulated shape parameters into an [`Ellipsoid`],
    /// or `None` while either shape parameter is still unset.
    #[must_use]
    pub fn checked_ellipsoid(&self) -> Option<Ellipsoid> {
        let ellipsoid = self.ellipsoid();
        ellipsoid.is_valid().then_some(ellipsoid)
    }

    /// Whether both raw shape parameters have been supplied.
    const fn is_defined_explicitly(&self) -> bool {
        !(self.a.is_nan() || self.es.is_nan())
    }

    /// Resolve the accumulated parameters into a [`Datum`], applying the
    /// precedence policy:
    ///
    /// 1. an explicitly set datum is returned unconditionally;
    /// 2. with no ellipsoid and no complete `(a, es)` pair, the CRS is
    ///    entirely unspecified and defaults to the WGS 84 datum;
    /// 3. a WGS 84 ellipsoid with no grids and no (or an identity)
    ///    transform collapses to the shared [`WGS84_DATUM`] singleton;
    /// 4. otherwise a user-defined datum is constructed, carrying the
    ///    transform, the grids and the resolved ellipsoid.
    #[must_use]
    pub fn datum(&self) -> Datum {
        if let Some(datum) = &self.datum {
            return datum.clone();
        }
        // if no ellipsoid was specified, return WGS 84 as the default
        if self.ellipsoid.is_none() && !self.is_defined_explicitly() {
            return WGS84_DATUM.clone();
        }
        // check for WGS 84 datum parameters
        let no_shift = self
            .datum_transform
            .as_ref()
            .map_or(true, |t| transform::is_identity(t));
        if self.ellipsoid() == *WGS84_ELLIPSOID && self.grids.is_none() && no_shift {
            return WGS84_DATUM.clone();
        }

        Datum::new(
            "User",
            self.datum_transform.clone(),
            self.grids.clone(),
            self.ellipsoid(),
            "User-defined",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::wgs84;

    #[test]
    fn test_wgs84_singletons() {
        assert_eq!(wgs84::A, WGS84_ELLIPSOID.a());
        assert_eq!(wgs84::ES, WGS84_ELLIPSOID.es());
        assert_eq!("WGS84", WGS84_ELLIPSOID.name());
        assert!(WGS84_ELLIPSOID.is_valid());

        assert_eq!("WGS84", WGS84_DATUM.name());
        assert!(WGS84_DATUM.transform().is_none());
        assert!(WGS84_DATUM.grids().is_none());
        assert_eq!(*WGS84_ELLIPSOID, *WGS84_DATUM.ellipsoid());
    }

    #[test]
    fn test_ellipsoid_equality() {
        // names and descriptions are not compared
        let user = Ellipsoid::new("user", wgs84::A, wgs84::ES, "User-defined");
        assert_eq!(*WGS84_ELLIPSOID, user);

        let grs80 = Ellipsoid::from_rf("GRS80", 6_378_137.0, 298.257_222_101, "GRS 1980");
        assert_ne!(*WGS84_ELLIPSOID, grs80);

        let unset = Ellipsoid::new("user", f64::NAN, f64::NAN, "User-defined");
        assert!(!unset.is_valid());
    }

    #[test]
    fn test_default_resolver_is_wgs84() {
        let resolver = DatumResolver::new();

        assert!(resolver.a().is_nan());
        assert!(resolver.es().is_nan());
        assert!(resolver.checked_ellipsoid().is_none());
        assert_eq!(*WGS84_DATUM, resolver.datum());
    }

    #[test]
    fn test_wgs84_collapse() {
        let mut resolver = DatumResolver::new();
        resolver.set_ellipsoid(Ellipsoid::wgs84());
        assert_eq!(*WGS84_DATUM, resolver.datum());

        // an identity transform does not prevent the collapse
        resolver.set_datum_transform(vec![0.0, 0.0, 0.0]);
        assert_eq!(*WGS84_DATUM, resolver.datum());

        resolver.set_datum_transform(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(*WGS84_DATUM, resolver.datum());
    }

    #[test]
    fn test_transform_breaks_wgs84_collapse() {
        let mut resolver = DatumResolver::new();
        resolver.set_ellipsoid(Ellipsoid::wgs84());
        resolver.set_datum_transform(vec![-87.0, -98.0, -121.0]);

        let datum = resolver.datum();
        assert_eq!("User", datum.name());
        assert_eq!("User-defined", datum.description());
        assert_eq!(Some([-87.0, -98.0, -121.0].as_slice()), datum.transform());
        assert_eq!(*WGS84_ELLIPSOID, *datum.ellipsoid());
    }

    #[test]
    fn test_grids_break_wgs84_collapse() {
        let mut resolver = DatumResolver::new();
        resolver.set_ellipsoid(Ellipsoid::wgs84());
        resolver.set_grids(vec![Grid::new("conus")]);

        let datum = resolver.datum();
        assert_eq!("User", datum.name());
        assert_eq!(Some([Grid::new("conus")].as_slice()), datum.grids());
    }

    #[test]
    fn test_raw_parameters_override_ellipsoid() {
        let mut resolver = DatumResolver::new();
        resolver.set_ellipsoid(Ellipsoid::wgs84());
        resolver.set_a(6_378_388.0);

        // the named ellipsoid has been replaced by a user-defined one
        let ellipsoid = resolver.ellipsoid();
        assert_eq!("user", ellipsoid.name());
        assert_eq!("User-defined", ellipsoid.description());
        assert_eq!(6_378_388.0, ellipsoid.a());
        // es was adopted from the named ellipsoid before it was cleared
        assert_eq!(wgs84::ES, ellipsoid.es());
    }

    #[test]
    fn test_es_from_semi_minor_axis() {
        let mut resolver = DatumResolver::new();
        resolver.set_a(6_378_137.0);
        resolver.set_b(6_356_752.314_245);

        let ellipsoid = resolver.ellipsoid();
        assert_eq!(6_378_137.0, ellipsoid.a());
        assert!((ellipsoid.es() - 0.006_694_380_022_9).abs() < 1e-10);
    }

    #[test]
    fn test_b_before_a_propagates_nan() {
        let mut resolver = DatumResolver::new();
        resolver.set_b(6_356_752.314_245);

        assert!(resolver.es().is_nan());
        assert!(resolver.ellipsoid().es().is_nan());
        assert!(resolver.checked_ellipsoid().is_none());
    }

    #[test]
    fn test_es_from_flattening() {
        let mut resolver = DatumResolver::new();
        resolver.set_a(wgs84::A);
        resolver.set_rf(wgs84::F);
        assert!((resolver.es() - wgs84::ES).abs() < 1e-12);

        let mut resolver = DatumResolver::new();
        resolver.set_a(wgs84::A);
        resolver.set_f(wgs84::RF);
        assert!((resolver.es() - wgs84::ES).abs() < 1e-12);
    }

    #[test]
    fn test_authalic_radius_identity_for_sphere() {
        let mut resolver = DatumResolver::new();
        resolver.set_a(6_371_000.0);
        resolver.set_es(0.0);
        resolver.set_r_a();

        assert_eq!(6_371_000.0, resolver.a());
    }

    #[test]
    fn test_authalic_radius_of_wgs84() {
        let mut resolver = DatumResolver::new();
        resolver.set_ellipsoid(Ellipsoid::wgs84());
        resolver.set_r_a();

        assert!((resolver.a() - 6_371_007.181_082_429).abs() < 1e-6);
    }

    #[test]
    fn test_transform_clears_explicit_datum() {
        let nad27 = Datum::new(
            "NAD27",
            None,
            Some(vec![Grid::new("conus")]),
            Ellipsoid::from_rf("clrk66", 6_378_206.4, 294.978_698_2, "Clarke 1866"),
            "North American Datum 1927",
        );

        let mut resolver = DatumResolver::new();
        resolver.set_ellipsoid(Ellipsoid::wgs84());
        resolver.set_datum(nad27.clone());
        assert_eq!(nad27, resolver.datum());

        // a new transform invalidates the explicit datum; the datum is
        // re-derived from the ellipsoid and transform state
        resolver.set_datum_transform(vec![1.0, 2.0, 3.0]);
        let datum = resolver.datum();
        assert_ne!(nad27, datum);
        assert_eq!("User", datum.name());
        assert_eq!(Some([1.0, 2.0, 3.0].as_slice()), datum.transform());
        assert_eq!(*WGS84_ELLIPSOID, *datum.ellipsoid());

        // but an explicit datum set afterwards wins unconditionally
        resolver.set_datum(nad27.clone());
        assert_eq!(nad27, resolver.datum());
    }

    #[test]
    fn test_transform_alone_still_defaults_to_wgs84() {
        // with no ellipsoid and no complete (a, es) pair the CRS is
        // entirely unspecified, a bare transform does not change that
        let mut resolver = DatumResolver::new();
        resolver.set_datum_transform(vec![1.0, 2.0, 3.0]);
        assert_eq!(*WGS84_DATUM, resolver.datum());
    }
}
