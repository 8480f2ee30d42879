use clap::Parser;
use cssmap::io::load_contour;
use cssmap::{
    BoundaryConfig, Contour, CssBuilder, CssConfig, CssEntry, DemoShape, Point, ScalePreview,
    ZeroCrossingMode,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod session;

use session::Session;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Curvature scale space CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
enum ZeroCrossingConfig {
    #[default]
    Strict,
    Inclusive,
}

impl From<ZeroCrossingConfig> for ZeroCrossingMode {
    fn from(value: ZeroCrossingConfig) -> Self {
        match value {
            ZeroCrossingConfig::Strict => ZeroCrossingMode::Strict,
            ZeroCrossingConfig::Inclusive => ZeroCrossingMode::Inclusive,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct CssConfigJson {
    max_sigma: f64,
    num_scales: usize,
    curvature_eps: f64,
    zero_crossing: ZeroCrossingConfig,
    parallel: bool,
}

impl Default for CssConfigJson {
    fn default() -> Self {
        let cfg = CssConfig::default();
        Self {
            max_sigma: cfg.max_sigma,
            num_scales: cfg.num_scales,
            curvature_eps: cfg.curvature_eps,
            zero_crossing: ZeroCrossingConfig::Strict,
            parallel: cfg.parallel,
        }
    }
}

impl From<CssConfigJson> for CssConfig {
    fn from(value: CssConfigJson) -> Self {
        Self {
            max_sigma: value.max_sigma,
            num_scales: value.num_scales,
            curvature_eps: value.curvature_eps,
            zero_crossing: value.zero_crossing.into(),
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct BoundaryConfigJson {
    threshold: u8,
    target_points: usize,
    fallback_margin: f64,
    points_per_side: usize,
    max_dimension: u32,
}

impl Default for BoundaryConfigJson {
    fn default() -> Self {
        let cfg = BoundaryConfig::default();
        Self {
            threshold: cfg.threshold,
            target_points: cfg.target_points,
            fallback_margin: cfg.fallback_margin,
            points_per_side: cfg.points_per_side,
            max_dimension: cfg.max_dimension,
        }
    }
}

impl From<BoundaryConfigJson> for BoundaryConfig {
    fn from(value: BoundaryConfigJson) -> Self {
        Self {
            threshold: value.threshold,
            target_points: value.target_points,
            fallback_margin: value.fallback_margin,
            points_per_side: value.points_per_side,
            max_dimension: value.max_dimension,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum SourceConfig {
    /// Built-in demo contour.
    Shape { name: String },
    /// JSON file holding an array of `[x, y]` pairs.
    Points { path: String },
    /// Image file traced with the threshold heuristic.
    Image {
        path: String,
        #[serde(default)]
        boundary: BoundaryConfigJson,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Shape {
            name: DemoShape::Heart.name().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Config {
    source: SourceConfig,
    css: CssConfigJson,
    preview_sigma: Option<f64>,
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct EntryRecord {
    scale_idx: usize,
    sigma: f64,
    position: f64,
}

impl From<&CssEntry> for EntryRecord {
    fn from(value: &CssEntry) -> Self {
        Self {
            scale_idx: value.scale_idx,
            sigma: value.sigma,
            position: value.position,
        }
    }
}

#[derive(Debug, Serialize)]
struct PreviewRecord {
    sigma: f64,
    nearest_scale_idx: usize,
    smoothed: Vec<[f64; 2]>,
    curvature: Vec<f64>,
    zero_crossings: Vec<f64>,
}

impl PreviewRecord {
    fn new(preview: ScalePreview, nearest_scale_idx: usize) -> Self {
        Self {
            sigma: preview.sigma,
            nearest_scale_idx,
            smoothed: preview.smoothed.points().iter().map(|p| [p.x, p.y]).collect(),
            zero_crossings: preview.zero_crossings.positions().collect(),
            curvature: preview.curvature.into_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    points: usize,
    max_sigma: f64,
    num_scales: usize,
    entries: Vec<EntryRecord>,
    counts_per_scale: Vec<usize>,
    preview: Option<PreviewRecord>,
}

fn load_source(source: SourceConfig) -> Result<Contour, Box<dyn std::error::Error>> {
    match source {
        SourceConfig::Shape { name } => DemoShape::from_name(&name)
            .map(DemoShape::contour)
            .ok_or_else(|| format!("unknown shape '{name}'").into()),
        SourceConfig::Points { path } => {
            let text = fs::read_to_string(&path)?;
            let pairs: Vec<[f64; 2]> = serde_json::from_str(&text)?;
            let points = pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect();
            Ok(Contour::try_new(points)?)
        }
        SourceConfig::Image { path, boundary } => Ok(load_contour(&path, &boundary.into())?),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("cssmap=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;

    let css_cfg: CssConfig = config.css.into();
    css_cfg.validate()?;
    if let Some(sigma) = config.preview_sigma {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err("preview_sigma must be finite and >= 0".into());
        }
    }

    let contour = load_source(config.source)?;
    if contour.is_empty() {
        tracing::warn!("source produced an empty contour");
    }

    let mut session = Session::new(CssBuilder::new().with_config(css_cfg));
    session.load_contour(contour);

    let map = session.map()?;
    let max_sigma = map.max_sigma();
    let num_scales = map.num_scales();
    let entries = map.iter().map(EntryRecord::from).collect();
    let counts_per_scale = map.counts_per_scale();
    let grid = map.grid();

    let preview = match config.preview_sigma {
        Some(sigma) => {
            session.select_sigma(sigma);
            Some(PreviewRecord::new(
                session.preview()?,
                grid.nearest_index(sigma),
            ))
        }
        None => None,
    };

    let output = Output {
        points: session.contour().len(),
        max_sigma,
        num_scales,
        entries,
        counts_per_scale,
        preview,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
