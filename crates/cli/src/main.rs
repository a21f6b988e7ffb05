use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use convexo::{GeomCfg, Poly2, Vec2};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod scene;

use scene::{find, Named, Scene};

#[derive(Parser)]
#[command(name = "convexo")]
#[command(about = "Convexity, containment and convex intersection for polygon scenes")]
struct Cmd {
    /// Scene JSON file; stdin when omitted
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Tolerance for near-parallel edges and segment bounds
    #[arg(long, global = true, default_value_t = convexo::geom2::DEFAULT_TOL)]
    tol: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report whether each polygon is convex
    Convex,
    /// Report whether each polygon contains a point
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Intersect two convex polygons by name
    Intersect {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        /// Style label attached to the result
        #[arg(long)]
        style: Option<String>,
    },
    /// Intersect the built-in demo shapes with the demo square
    Demo,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    ensure!(cmd.tol.is_finite() && cmd.tol >= 0.0, "--tol must be finite and non-negative");
    let cfg = GeomCfg::with_tol(cmd.tol);
    let input = cmd.input.as_deref();
    let out = match cmd.action {
        Action::Convex => convex(&load(input, cfg)?),
        Action::Contains { x, y } => contains(&load(input, cfg)?, Vec2::new(x, y)),
        Action::Intersect { a, b, style } => intersect(&load(input, cfg)?, &a, &b, style, cfg)?,
        Action::Demo => demo(cfg)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn load(input: Option<&Path>, cfg: GeomCfg) -> Result<Vec<Named>> {
    let polys = Scene::load(input)?.polygons()?;
    tracing::info!(polygons = polys.len(), tol = cfg.tol, "scene loaded");
    Ok(polys)
}

fn convex(polys: &[Named]) -> Value {
    let rows: Vec<Value> = polys
        .iter()
        .map(|(name, p)| json!({ "name": name, "convex": p.is_convex() }))
        .collect();
    Value::Array(rows)
}

fn contains(polys: &[Named], pt: Vec2<f64>) -> Value {
    tracing::debug!(x = pt.x, y = pt.y, "contains");
    let rows: Vec<Value> = polys
        .iter()
        .map(|(name, p)| json!({ "name": name, "contains": p.contains(pt) }))
        .collect();
    Value::Array(rows)
}

fn intersect(
    polys: &[Named],
    a: &str,
    b: &str,
    style: Option<String>,
    cfg: GeomCfg,
) -> Result<Value> {
    let pa = find(polys, a)?;
    let pb = find(polys, b)?;
    for (name, p) in [(a, pa), (b, pb)] {
        if !p.is_convex() {
            tracing::warn!(name, "input is not convex; result is unspecified");
        }
    }
    let result = pa.intersect_convex(pb, cfg.tol, style);
    tracing::info!(a, b, found = result.is_some(), "intersect");
    Ok(result_json(result.as_ref()))
}

fn demo(cfg: GeomCfg) -> Result<Value> {
    let polys = Scene::demo().polygons()?;
    let square = find(&polys, "square")?;
    let mut rows = Vec::new();
    for name in ["pentagon", "hexagon", "polygon36"] {
        let p = find(&polys, name)?;
        let result = p.intersect_convex(square, cfg.tol, Some("#ff0000".to_string()));
        tracing::info!(name, found = result.is_some(), "demo intersect");
        rows.push(json!({ "a": name, "b": "square", "result": result_json(result.as_ref()) }));
    }
    Ok(Value::Array(rows))
}

fn result_json(result: Option<&Poly2<Option<String>>>) -> Value {
    match result {
        Some(r) => json!({
            "vertices": r.vs.iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
            "area": r.area(),
            "convex": r.is_convex(),
            "style": r.style,
        }),
        None => Value::Null,
    }
}
