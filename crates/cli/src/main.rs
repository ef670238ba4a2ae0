use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod shape_doc;

use provenance::Payload;
use shape_doc::ShapeDoc;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Closest-point and containment queries over 2D shapes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Query a shape against every (x, y) row of a CSV or Parquet file
    Query {
        /// Shape document (JSON, tagged by `kind`)
        #[arg(long)]
        shape: PathBuf,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print area, perimeter, and derived points of a shape
    Describe {
        #[arg(long)]
        shape: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Query { shape, input, out } => query(&shape, &input, &out),
        Action::Describe { shape } => {
            let doc = load_shape(&shape)?;
            println!("{}", serde_json::to_string_pretty(&describe(&doc)?)?);
            Ok(())
        }
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&provenance::summary())?);
            Ok(())
        }
    }
}

fn load_shape(path: &Path) -> Result<ShapeDoc> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: ShapeDoc = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing shape document {}", path.display()))?;
    tracing::debug!(kind = doc.kind(), "shape_loaded");
    Ok(doc)
}

/// Read the `x` and `y` columns as f64. Nulls are rejected.
fn read_points(input: &Path) -> Result<Vec<[f64; 2]>> {
    let lf = match input.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(input, ScanArgsParquet::default())?,
        Some("csv") => LazyCsvReader::new(input)
            .with_infer_schema_length(Some(100))
            .finish()?,
        _ => bail!("unsupported input format: {}", input.display()),
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", input.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_points");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => bail!("row {row}: missing x or y"),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct QueryRow {
    point: [f64; 2],
    closest: [f64; 2],
    contains: bool,
    distance: f64,
}

#[derive(Debug, Serialize)]
struct QueryOutput<'a> {
    shape: &'a ShapeDoc,
    rows: Vec<QueryRow>,
}

fn query(shape_path: &Path, input: &Path, out: &Path) -> Result<()> {
    let doc = load_shape(shape_path)?;
    let resolved = doc
        .resolve()
        .with_context(|| format!("building {} from {}", doc.kind(), shape_path.display()))?;
    let points = read_points(input)?;

    let rows: Vec<QueryRow> = points
        .iter()
        .map(|&p| {
            let v = planar::Vec2::from(p);
            let q = resolved.shape.closest_point_to(v);
            QueryRow {
                point: p,
                closest: [q.x, q.y],
                contains: resolved.shape.contains(v),
                distance: (q - v).norm(),
            }
        })
        .collect();
    let inside = rows.iter().filter(|r| r.contains).count();
    tracing::info!(kind = doc.kind(), points = rows.len(), inside, "query");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let body = QueryOutput { shape: &doc, rows };
    std::fs::write(out, serde_json::to_vec_pretty(&body)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(serde_json::to_value(&doc)?)
        .with_input(shape_path)
        .with_input(input);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

fn describe(doc: &ShapeDoc) -> Result<serde_json::Value> {
    let resolved = doc
        .resolve()
        .with_context(|| format!("building {}", doc.kind()))?;
    let points: Vec<[f64; 2]> = resolved.points.iter().map(|p| [p.x, p.y]).collect();
    Ok(serde_json::json!({
        "kind": doc.kind(),
        "area": resolved.area,
        "perimeter": resolved.perimeter,
        "points": points,
    }))
}
