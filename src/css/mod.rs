//! Curvature scale space construction.
//!
//! [`CssBuilder`] sweeps a fixed grid of Gaussian scales. At every scale it
//! smooths the original contour, estimates curvature and records one
//! [`CssEntry`] per zero crossing. The accumulated [`CssMap`] is the shape
//! descriptor: crossings that survive to large scales mark the dominant
//! concavities of the contour.
//!
//! The builder holds only configuration; the map is rebuilt wholesale from a
//! contour and never patched incrementally.

mod scales;
mod sweep;

pub use scales::ScaleGrid;

use crate::contour::Contour;
use crate::curvature::{
    CurvatureEstimator, CurvatureSequence, ZeroCrossingMode, ZeroCrossingSet,
    DEFAULT_CURVATURE_EPS,
};
use crate::util::{CssError, CssResult};

/// Configuration for building a CSS map.
#[derive(Clone, Debug, PartialEq)]
pub struct CssConfig {
    /// Exclusive upper bound of the scale sweep.
    pub max_sigma: f64,
    /// Number of scales in the sweep.
    pub num_scales: usize,
    /// Curvature denominator threshold below which curvature is zero.
    pub curvature_eps: f64,
    /// Rule for detecting sign changes.
    pub zero_crossing: ZeroCrossingMode,
    /// Sweep scales in parallel when the `rayon` feature is enabled.
    pub parallel: bool,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            max_sigma: 100.0,
            num_scales: 50,
            curvature_eps: DEFAULT_CURVATURE_EPS,
            zero_crossing: ZeroCrossingMode::Strict,
            parallel: false,
        }
    }
}

impl CssConfig {
    /// Checks parameter ranges.
    pub fn validate(&self) -> CssResult<()> {
        ScaleGrid::new(self.max_sigma, self.num_scales)?;
        if !self.curvature_eps.is_finite() || self.curvature_eps < 0.0 {
            return Err(CssError::InvalidConfig {
                reason: "curvature_eps must be finite and >= 0",
            });
        }
        Ok(())
    }

    /// Returns the scale grid described by this configuration.
    pub fn grid(&self) -> CssResult<ScaleGrid> {
        ScaleGrid::new(self.max_sigma, self.num_scales)
    }
}

/// One point of the scale-space map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssEntry {
    /// Row of the scale grid.
    pub scale_idx: usize,
    /// Scale at which the crossing was found.
    pub sigma: f64,
    /// Fractional position along the contour, in [0, 1).
    pub position: f64,
}

/// Zero crossings accumulated over the scale sweep.
///
/// Entries are ordered by ascending scale, then ascending position.
#[derive(Clone, Debug, PartialEq)]
pub struct CssMap {
    entries: Vec<CssEntry>,
    grid: ScaleGrid,
}

impl CssMap {
    fn empty(grid: ScaleGrid) -> Self {
        Self {
            entries: Vec::new(),
            grid,
        }
    }

    /// Returns all entries.
    pub fn entries(&self) -> &[CssEntry] {
        &self.entries
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CssEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no crossing was found at any scale.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sweep's upper bound.
    pub fn max_sigma(&self) -> f64 {
        self.grid.max_sigma()
    }

    /// Returns the number of swept scales.
    pub fn num_scales(&self) -> usize {
        self.grid.len()
    }

    /// Returns the scale grid the map was built on.
    pub fn grid(&self) -> ScaleGrid {
        self.grid
    }

    /// Returns the entries found at one scale row.
    pub fn entries_at(&self, scale_idx: usize) -> &[CssEntry] {
        let start = self.entries.partition_point(|e| e.scale_idx < scale_idx);
        let end = self.entries.partition_point(|e| e.scale_idx <= scale_idx);
        &self.entries[start..end]
    }

    /// Returns the number of crossings per scale row.
    pub fn counts_per_scale(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.grid.len()];
        for entry in &self.entries {
            if let Some(count) = counts.get_mut(entry.scale_idx) {
                *count += 1;
            }
        }
        counts
    }
}

impl<'a> IntoIterator for &'a CssMap {
    type Item = &'a CssEntry;
    type IntoIter = std::slice::Iter<'a, CssEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Everything computed for a contour at a single scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalePreview {
    /// Scale the preview was computed at.
    pub sigma: f64,
    /// Smoothed contour.
    pub smoothed: Contour,
    /// Curvature of the smoothed contour.
    pub curvature: CurvatureSequence,
    /// Sign changes of the curvature.
    pub zero_crossings: ZeroCrossingSet,
}

/// Builds curvature scale space maps.
#[derive(Clone, Debug, Default)]
pub struct CssBuilder {
    cfg: CssConfig,
}

impl CssBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: CssConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CssConfig {
        &self.cfg
    }

    fn estimator(&self) -> CurvatureEstimator {
        CurvatureEstimator::new(self.cfg.curvature_eps)
    }

    /// Builds the CSS map of `contour`.
    ///
    /// An empty contour yields an empty map; only an invalid configuration
    /// is an error.
    pub fn build(&self, contour: &Contour) -> CssResult<CssMap> {
        self.cfg.validate()?;
        let grid = self.cfg.grid()?;
        if contour.is_empty() {
            return Ok(CssMap::empty(grid));
        }

        let estimator = self.estimator();
        let mode = self.cfg.zero_crossing;
        #[cfg(feature = "rayon")]
        let entries = if self.cfg.parallel {
            sweep::sweep_parallel(contour, &grid, &estimator, mode)?
        } else {
            sweep::sweep_sequential(contour, &grid, &estimator, mode)?
        };
        #[cfg(not(feature = "rayon"))]
        let entries = sweep::sweep_sequential(contour, &grid, &estimator, mode)?;

        Ok(CssMap { entries, grid })
    }

    /// Computes the smoothed contour, curvature and crossings at one scale.
    ///
    /// `sigma` need not lie on the sweep grid.
    pub fn preview(&self, contour: &Contour, sigma: f64) -> CssResult<ScalePreview> {
        self.cfg.validate()?;
        sweep::analyze_scale(contour, sigma, &self.estimator(), self.cfg.zero_crossing)
    }

    /// Computes previews at `i * max_sigma / num_scales` for
    /// `i = 0..=num_scales`, ending exactly at `max_sigma`.
    pub fn progression(&self, contour: &Contour) -> CssResult<Vec<ScalePreview>> {
        self.cfg.validate()?;
        let grid = self.cfg.grid()?;
        let estimator = self.estimator();
        (0..=grid.len())
            .map(|idx| {
                sweep::analyze_scale(
                    contour,
                    grid.sigma_at(idx),
                    &estimator,
                    self.cfg.zero_crossing,
                )
            })
            .collect()
    }
}

/// Builds a CSS map with the default configuration.
pub fn build_css(contour: &Contour) -> CssResult<CssMap> {
    CssBuilder::new().build(contour)
}

#[cfg(test)]
mod tests {
    use super::{build_css, CssBuilder, CssConfig, ScaleGrid};
    use crate::contour::shapes::DemoShape;
    use crate::contour::Contour;
    use crate::curvature::ZeroCrossingMode;
    use crate::util::CssError;

    #[test]
    fn default_config_is_valid() {
        let cfg = CssConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_sigma, 100.0);
        assert_eq!(cfg.num_scales, 50);
        assert_eq!(cfg.zero_crossing, ZeroCrossingMode::Strict);
    }

    #[test]
    fn invalid_config_is_rejected_before_work() {
        let builder = CssBuilder::new().with_config(CssConfig {
            num_scales: 0,
            ..CssConfig::default()
        });
        assert!(matches!(
            builder.build(&Contour::empty()),
            Err(CssError::InvalidConfig { .. })
        ));
        let builder = CssBuilder::new().with_config(CssConfig {
            curvature_eps: -1.0,
            ..CssConfig::default()
        });
        assert!(builder.preview(&DemoShape::Star.contour(), 1.0).is_err());
    }

    #[test]
    fn empty_contour_yields_empty_map() {
        let map = build_css(&Contour::empty()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.num_scales(), 50);
        assert_eq!(map.counts_per_scale(), vec![0; 50]);
    }

    #[test]
    fn star_tips_fill_the_unsmoothed_row() {
        let map = build_css(&DemoShape::Star.contour()).unwrap();
        let row = map.entries_at(0);
        assert_eq!(row.len(), 20);
        for (i, entry) in row.iter().enumerate() {
            assert_eq!(entry.sigma, 0.0);
            assert_eq!(entry.position, i as f64 / 20.0);
        }
        assert_eq!(map.counts_per_scale()[0], 20);
    }

    #[test]
    fn entries_are_ordered_by_scale_then_position() {
        let map = build_css(&DemoShape::Heart.contour()).unwrap();
        assert!(!map.is_empty());
        for pair in map.entries().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.scale_idx < b.scale_idx
                    || (a.scale_idx == b.scale_idx && a.position < b.position)
            );
        }
        let total: usize = map.counts_per_scale().iter().sum();
        assert_eq!(total, map.len());
        assert_eq!(map.grid(), ScaleGrid::new(100.0, 50).unwrap());
    }

    #[test]
    fn preview_matches_the_map_row() {
        let contour = DemoShape::Heart.contour();
        let builder = CssBuilder::new();
        let map = builder.build(&contour).unwrap();
        let preview = builder.preview(&contour, 0.0).unwrap();
        assert_eq!(preview.smoothed, contour);
        assert_eq!(preview.curvature.len(), contour.len());
        let positions: Vec<f64> = preview.zero_crossings.positions().collect();
        let row: Vec<f64> = map.entries_at(0).iter().map(|e| e.position).collect();
        assert_eq!(positions, row);
    }

    #[test]
    fn progression_ends_at_max_sigma() {
        let builder = CssBuilder::new().with_config(CssConfig {
            max_sigma: 10.0,
            num_scales: 5,
            ..CssConfig::default()
        });
        let frames = builder.progression(&DemoShape::Star.contour()).unwrap();
        let sigmas: Vec<f64> = frames.iter().map(|f| f.sigma).collect();
        assert_eq!(sigmas, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(frames[0].zero_crossings.len(), 20);
    }
}
