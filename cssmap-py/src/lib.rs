//! Python bindings for the cssmap curvature scale space library.
//!
//! Contours cross the boundary as `(N, 2)` float64 numpy arrays of `(x, y)`
//! rows; images as 2D uint8 arrays.

use numpy::ndarray::Array2;
use numpy::{
    IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2, PyUntypedArrayMethods,
};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use cssmap::{
    BoundaryConfig, Contour, CssBuilder, CssConfig as RustCssConfig, CssError,
    CssMap as RustCssMap, DemoShape, ImageView, OwnedImage, Point, ZeroCrossingMode,
};

/// Convert a CssError to a Python exception.
fn to_py_err(err: CssError) -> PyErr {
    match err {
        CssError::ImageIo { .. } => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn parse_mode(mode: &str) -> PyResult<ZeroCrossingMode> {
    match mode.to_lowercase().as_str() {
        "strict" => Ok(ZeroCrossingMode::Strict),
        "inclusive" => Ok(ZeroCrossingMode::Inclusive),
        _ => Err(PyValueError::new_err(
            "zero_crossing must be 'strict' or 'inclusive'",
        )),
    }
}

fn mode_name(mode: ZeroCrossingMode) -> &'static str {
    match mode {
        ZeroCrossingMode::Strict => "strict",
        ZeroCrossingMode::Inclusive => "inclusive",
    }
}

/// Reads an (N, 2) array into a contour.
fn contour_from_array(points: &PyReadonlyArray2<'_, f64>) -> PyResult<Contour> {
    let shape = points.shape();
    if shape[1] != 2 {
        return Err(PyValueError::new_err("points must have shape (N, 2)"));
    }
    let data = points.as_slice()?;
    let pts = data
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect();
    Contour::try_new(pts).map_err(to_py_err)
}

/// Writes a contour as an (N, 2) array.
fn contour_to_array<'py>(
    py: Python<'py>,
    contour: &Contour,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let flat: Vec<f64> = contour.points().iter().flat_map(|p| [p.x, p.y]).collect();
    let array = Array2::from_shape_vec((contour.len(), 2), flat)
        .map_err(|err| PyRuntimeError::new_err(err.to_string()))?;
    Ok(array.into_pyarray(py))
}

/// Configuration for building CSS maps.
#[pyclass]
#[derive(Clone)]
pub struct CssConfig {
    inner: RustCssConfig,
}

#[pymethods]
impl CssConfig {
    /// Create a new CssConfig.
    ///
    /// Args:
    ///     max_sigma: Exclusive upper bound of the scale sweep (default: 100.0)
    ///     num_scales: Number of swept scales (default: 50)
    ///     curvature_eps: Curvature denominator threshold (default: 1e-6)
    ///     zero_crossing: "strict" or "inclusive" (default: "strict")
    ///     parallel: Sweep scales in parallel (default: False)
    #[new]
    #[pyo3(signature = (
        max_sigma = 100.0,
        num_scales = 50,
        curvature_eps = 1e-6,
        zero_crossing = "strict",
        parallel = false
    ))]
    fn new(
        max_sigma: f64,
        num_scales: usize,
        curvature_eps: f64,
        zero_crossing: &str,
        parallel: bool,
    ) -> PyResult<Self> {
        let inner = RustCssConfig {
            max_sigma,
            num_scales,
            curvature_eps,
            zero_crossing: parse_mode(zero_crossing)?,
            parallel,
        };
        inner.validate().map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Validate the configuration.
    fn validate(&self) -> PyResult<()> {
        self.inner.validate().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "CssConfig(max_sigma={}, num_scales={}, zero_crossing='{}', parallel={})",
            self.inner.max_sigma,
            self.inner.num_scales,
            mode_name(self.inner.zero_crossing),
            self.inner.parallel
        )
    }
}

/// Curvature scale space map of one contour.
#[pyclass]
pub struct CssMap {
    inner: RustCssMap,
}

#[pymethods]
impl CssMap {
    /// Exclusive upper bound of the sweep.
    #[getter]
    fn max_sigma(&self) -> f64 {
        self.inner.max_sigma()
    }

    /// Number of swept scales.
    #[getter]
    fn num_scales(&self) -> usize {
        self.inner.num_scales()
    }

    /// All entries as (scale_idx, sigma, position) tuples.
    fn entries(&self) -> Vec<(usize, f64, f64)> {
        self.inner
            .iter()
            .map(|e| (e.scale_idx, e.sigma, e.position))
            .collect()
    }

    /// Scale of every entry.
    fn sigmas<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_vec(py, self.inner.iter().map(|e| e.sigma).collect())
    }

    /// Contour position of every entry.
    fn positions<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_vec(py, self.inner.iter().map(|e| e.position).collect())
    }

    /// Positions found at one scale row.
    fn entries_at(&self, scale_idx: usize) -> Vec<f64> {
        self.inner
            .entries_at(scale_idx)
            .iter()
            .map(|e| e.position)
            .collect()
    }

    /// Number of crossings per scale row.
    fn counts_per_scale(&self) -> Vec<usize> {
        self.inner.counts_per_scale()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "CssMap(entries={}, max_sigma={}, num_scales={})",
            self.inner.len(),
            self.inner.max_sigma(),
            self.inner.num_scales()
        )
    }
}

/// Smooth a contour with a Gaussian of scale `sigma`.
///
/// Args:
///     points: (N, 2) float64 array
///     sigma: Non-negative scale
///
/// Returns:
///     (N, 2) float64 array
#[pyfunction]
fn smooth<'py>(
    py: Python<'py>,
    points: PyReadonlyArray2<'py, f64>,
    sigma: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let contour = contour_from_array(&points)?;
    let smoothed = cssmap::smooth(&contour, sigma).map_err(to_py_err)?;
    contour_to_array(py, &smoothed)
}

/// Per-point curvature of a closed contour.
///
/// Args:
///     points: (N, 2) float64 array
///     eps: Denominator threshold below which curvature is zero (default: 1e-6)
#[pyfunction]
#[pyo3(signature = (points, eps = 1e-6))]
fn curvature<'py>(
    py: Python<'py>,
    points: PyReadonlyArray2<'py, f64>,
    eps: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let contour = contour_from_array(&points)?;
    let values = cssmap::CurvatureEstimator::new(eps).estimate(&contour);
    Ok(PyArray1::from_vec(py, values.into_vec()))
}

/// Fractional positions of sign changes in a circular sequence.
///
/// Args:
///     values: 1D float64 array
///     mode: "strict" or "inclusive" (default: "strict")
#[pyfunction]
#[pyo3(signature = (values, mode = "strict"))]
fn zero_crossings(values: PyReadonlyArray1<'_, f64>, mode: &str) -> PyResult<Vec<f64>> {
    let set = cssmap::detect_zero_crossings(values.as_slice()?, parse_mode(mode)?);
    Ok(set.positions().collect())
}

/// Build the CSS map of a contour.
///
/// Args:
///     points: (N, 2) float64 array
///     config: CssConfig (default: CssConfig())
#[pyfunction]
#[pyo3(signature = (points, config = None))]
fn build_css(points: PyReadonlyArray2<'_, f64>, config: Option<CssConfig>) -> PyResult<CssMap> {
    let contour = contour_from_array(&points)?;
    let cfg = config.map(|c| c.inner).unwrap_or_default();
    let inner = CssBuilder::new()
        .with_config(cfg)
        .build(&contour)
        .map_err(to_py_err)?;
    Ok(CssMap { inner })
}

/// Generate a demo contour: "circle", "rectangle", "star" or "heart".
#[pyfunction]
fn demo_shape<'py>(py: Python<'py>, name: &str) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let shape = DemoShape::from_name(name).ok_or_else(|| {
        PyValueError::new_err("name must be 'circle', 'rectangle', 'star' or 'heart'")
    })?;
    contour_to_array(py, &shape.contour())
}

/// Extract a boundary contour from an image file.
///
/// Args:
///     path: Path to an image file
///     threshold: Gray level separating foreground (default: 128)
///     target_points: Approximate number of points (default: 150)
#[pyfunction]
#[pyo3(signature = (path, threshold = 128, target_points = 150))]
fn contour_from_image<'py>(
    py: Python<'py>,
    path: &str,
    threshold: u8,
    target_points: usize,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let cfg = BoundaryConfig {
        threshold,
        target_points,
        ..BoundaryConfig::default()
    };
    let contour = cssmap::io::load_contour(path, &cfg).map_err(to_py_err)?;
    contour_to_array(py, &contour)
}

/// Extract a boundary contour from a 2D uint8 array (height x width).
///
/// Non-contiguous arrays (slices, transposes) are copied first.
#[pyfunction]
#[pyo3(signature = (pixels, threshold = 128, target_points = 150))]
fn contour_from_pixels<'py>(
    py: Python<'py>,
    pixels: PyReadonlyArray2<'py, u8>,
    threshold: u8,
    target_points: usize,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let shape = pixels.shape();
    let height = shape[0];
    let width = shape[1];
    let owned;
    let view = match pixels.as_slice() {
        Ok(data) => ImageView::from_slice(data, width, height),
        Err(_) => {
            let data = pixels.as_array().iter().copied().collect();
            owned = OwnedImage::new(data, width, height).map_err(to_py_err)?;
            Ok(owned.view())
        }
    }
    .map_err(to_py_err)?;
    let cfg = BoundaryConfig {
        threshold,
        target_points,
        ..BoundaryConfig::default()
    };
    let contour = cssmap::extract_boundary(&view, &cfg).map_err(to_py_err)?;
    contour_to_array(py, &contour)
}

/// Python module for curvature scale space descriptors.
#[pymodule]
fn _cssmap(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<CssConfig>()?;
    m.add_class::<CssMap>()?;
    m.add_function(wrap_pyfunction!(smooth, m)?)?;
    m.add_function(wrap_pyfunction!(curvature, m)?)?;
    m.add_function(wrap_pyfunction!(zero_crossings, m)?)?;
    m.add_function(wrap_pyfunction!(build_css, m)?)?;
    m.add_function(wrap_pyfunction!(demo_shape, m)?)?;
    m.add_function(wrap_pyfunction!(contour_from_image, m)?)?;
    m.add_function(wrap_pyfunction!(contour_from_pixels, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
