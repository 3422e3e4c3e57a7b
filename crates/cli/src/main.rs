use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use netgeom::prelude::*;
use polars::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Segment-network preprocessing front end")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify all segment pairs from a CSV and write a JSON report
    Intersect {
        /// CSV with one segment per row, numeric columns x1,y1,x2,y2
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Relative classifier tolerance
        #[arg(long, default_value_t = netgeom::DEFAULT_TOL)]
        tol: f64,
    },
    /// Generate a 1D mesh and write its nodes as JSON
    Mesh {
        #[arg(long)]
        left: f64,
        #[arg(long)]
        right: f64,
        /// Element count for a uniform mesh
        #[arg(long, conflicts_with_all = ["h_left", "h_right"])]
        elements: Option<usize>,
        /// Target spacing at the left end (graded mesh)
        #[arg(long, requires = "h_right")]
        h_left: Option<f64>,
        /// Target spacing at the right end (graded mesh)
        #[arg(long, requires = "h_left")]
        h_right: Option<f64>,
        /// Element cap for the graded mesh
        #[arg(long, default_value_t = 10_000)]
        max_elements: usize,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Intersect { input, out, tol } => intersect(&input, &out, tol),
        Action::Mesh {
            left,
            right,
            elements,
            h_left,
            h_right,
            max_elements,
            out,
        } => mesh(left, right, elements, h_left, h_right, max_elements, &out),
    }
}

#[derive(Serialize)]
struct PairReport {
    i: usize,
    j: usize,
    count: usize,
    points: Vec<[f64; 2]>,
    parallel: bool,
    collinear: bool,
    identical: bool,
    end_hit: [[bool; 2]; 2],
    joined_with: [[Option<usize>; 2]; 2],
}

impl PairReport {
    fn from_record(i: usize, j: usize, rec: &Intersection) -> Self {
        Self {
            i,
            j,
            count: rec.count,
            points: rec.points().iter().map(|p| [p.x, p.y]).collect(),
            parallel: rec.parallel,
            collinear: rec.collinear,
            identical: rec.identical,
            end_hit: rec.end_hit,
            joined_with: rec.joined_with,
        }
    }
}

#[derive(Serialize)]
struct IntersectReport {
    segments: usize,
    pairs_checked: usize,
    degenerate_pairs: usize,
    tol: f64,
    intersecting: Vec<PairReport>,
}

fn intersect(input: &Path, out: &Path, tol: f64) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tol, "intersect");
    let edges = read_edges_csv(input)?;
    let mut report = IntersectReport {
        segments: edges.len(),
        pairs_checked: 0,
        degenerate_pairs: 0,
        tol,
        intersecting: Vec::new(),
    };
    for (i, j, rec) in pairwise_intersections(&edges, tol) {
        report.pairs_checked += 1;
        if !rec.valid {
            report.degenerate_pairs += 1;
            tracing::warn!(i, j, "degenerate pair skipped");
            continue;
        }
        if rec.intersects {
            report.intersecting.push(PairReport::from_record(i, j, &rec));
        }
    }
    tracing::info!(
        pairs = report.pairs_checked,
        intersecting = report.intersecting.len(),
        degenerate = report.degenerate_pairs,
        "classified"
    );
    write_json(out, &report)?;
    provenance::write_sidecar(
        out,
        serde_json::json!({
            "cmd": "intersect",
            "input": input.to_string_lossy(),
            "tol": tol,
            "segments": report.segments,
            "intersecting": report.intersecting.len()
        }),
    )?;
    Ok(())
}

/// Load one segment per CSV row. Integer columns are fine; everything is
/// cast to f64 before extraction.
fn read_edges_csv(path: &Path) -> Result<Vec<Edge2>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", path.display()))?;
    let df = lf
        .select([
            col("x1").cast(DataType::Float64),
            col("y1").cast(DataType::Float64),
            col("x2").cast(DataType::Float64),
            col("y2").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("{}: needs numeric columns x1,y1,x2,y2", path.display()))?;
    let x1 = df.column("x1")?.f64()?;
    let y1 = df.column("y1")?.f64()?;
    let x2 = df.column("x2")?.f64()?;
    let y2 = df.column("y2")?.f64()?;
    let mut edges = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let (Some(ax), Some(ay), Some(bx), Some(by)) =
            (x1.get(idx), y1.get(idx), x2.get(idx), y2.get(idx))
        else {
            anyhow::bail!("{}: row {idx} has a missing coordinate", path.display());
        };
        edges.push(Edge2::new((ax, ay), (bx, by)));
    }
    Ok(edges)
}

#[derive(Serialize)]
struct MeshReport {
    left: f64,
    right: f64,
    elements: usize,
    max_spacing: f64,
    nodes: Vec<f64>,
}

fn mesh(
    left: f64,
    right: f64,
    elements: Option<usize>,
    h_left: Option<f64>,
    h_right: Option<f64>,
    max_elements: usize,
    out: &Path,
) -> Result<()> {
    tracing::info!(left, right, out = %out.display(), "mesh");
    anyhow::ensure!(right > left, "domain is empty: right must exceed left");
    let domain = Domain1::new(left, right);
    let built = match (elements, h_left, h_right) {
        (Some(n), None, None) => Mesh1::uniform(domain, n)?,
        (None, Some(h0), Some(h1)) => {
            anyhow::ensure!(h0 > 0.0 && h1 > 0.0, "spacings must be positive");
            let span = domain.length();
            let grading = move |x: f64| h0 + (h1 - h0) * (x - left) / span;
            Mesh1::with_spacing(domain, max_elements, grading)?
        }
        _ => anyhow::bail!("pass either --elements or both --h-left and --h-right"),
    };
    let doc = MeshReport {
        left,
        right,
        elements: built.nodes().len() - 1,
        max_spacing: built.max_spacing(),
        nodes: built.nodes().to_vec(),
    };
    tracing::info!(elements = doc.elements, max_spacing = doc.max_spacing, "generated");
    write_json(out, &doc)?;
    provenance::write_sidecar(
        out,
        serde_json::json!({
            "cmd": "mesh",
            "left": left,
            "right": right,
            "elements": doc.elements,
            "max_elements": max_elements
        }),
    )?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, doc: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn intersect_reports_crossing_pairs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("segments.csv");
        fs::write(
            &input,
            "x1,y1,x2,y2\n0.0,0.0,1.0,1.0\n0.0,1.0,1.0,0.0\n5.0,5.0,6.0,5.0\n",
        )
        .unwrap();
        let out = dir.path().join("report.json");
        intersect(&input, &out, netgeom::DEFAULT_TOL).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(report["segments"], 3);
        assert_eq!(report["pairs_checked"], 3);
        let hits = report["intersecting"].as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["i"], 0);
        assert_eq!(hits[0]["j"], 1);
        assert_eq!(hits[0]["count"], 1);
        assert!(dir.path().join("report.provenance.json").exists());
    }

    #[test]
    fn intersect_handles_integer_columns() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("segments.csv");
        fs::write(&input, "x1,y1,x2,y2\n0,0,2,0\n1,0,3,0\n").unwrap();
        let out = dir.path().join("report.json");
        intersect(&input, &out, netgeom::DEFAULT_TOL).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        // Collinear overlap: two boundary points.
        assert_eq!(report["intersecting"][0]["count"], 2);
        assert_eq!(report["intersecting"][0]["collinear"], true);
    }

    #[test]
    fn intersect_counts_degenerate_rows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("segments.csv");
        fs::write(&input, "x1,y1,x2,y2\n0.5,0.5,0.5,0.5\n0.5,0.5,0.5,0.5\n").unwrap();
        let out = dir.path().join("report.json");
        intersect(&input, &out, netgeom::DEFAULT_TOL).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(report["degenerate_pairs"], 1);
        assert_eq!(report["intersecting"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn mesh_uniform_writes_nodes() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nodes.json");
        mesh(0.0, 2.0, Some(4), None, None, 10_000, &out).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let nodes = doc["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 5);
        assert_eq!(doc["elements"], 4);
        assert_eq!(nodes[0], 0.0);
        assert_eq!(nodes[4], 2.0);
        assert!(dir.path().join("nodes.provenance.json").exists());
    }

    #[test]
    fn mesh_graded_respects_bounds() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("graded.json");
        mesh(0.0, 1.0, None, Some(0.02), Some(0.1), 10_000, &out).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let nodes = doc["nodes"].as_array().unwrap();
        assert!(nodes.len() >= 3);
        assert_eq!(*nodes.first().unwrap(), 0.0);
        assert_eq!(*nodes.last().unwrap(), 1.0);
    }

    #[test]
    fn mesh_requires_a_mode() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("x.json");
        assert!(mesh(0.0, 1.0, None, None, None, 100, &out).is_err());
    }
}
