//! Interactive-style session state.
//!
//! The map is cached per contour: changing the selected scale never rebuilds
//! it, loading a new contour always does.

use cssmap::{Contour, CssBuilder, CssMap, CssResult, ScalePreview};

pub struct Session {
    builder: CssBuilder,
    contour: Contour,
    selected_sigma: f64,
    map: Option<CssMap>,
}

impl Session {
    pub fn new(builder: CssBuilder) -> Self {
        Self {
            builder,
            contour: Contour::empty(),
            selected_sigma: 0.0,
            map: None,
        }
    }

    /// Replaces the contour and drops the cached map.
    pub fn load_contour(&mut self, contour: Contour) {
        self.contour = contour;
        self.map = None;
    }

    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    pub fn select_sigma(&mut self, sigma: f64) {
        self.selected_sigma = sigma;
    }

    /// Returns the map for the current contour, building it on first use.
    pub fn map(&mut self) -> CssResult<&CssMap> {
        let map = match self.map.take() {
            Some(map) => map,
            None => self.builder.build(&self.contour)?,
        };
        Ok(self.map.insert(map))
    }

    pub fn preview(&self) -> CssResult<ScalePreview> {
        self.builder.preview(&self.contour, self.selected_sigma)
    }
}
