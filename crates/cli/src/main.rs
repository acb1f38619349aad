use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use hullsort::prelude::*;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod step;

#[derive(Parser)]
#[command(name = "hullsort")]
#[command(about = "Gift-wrapping convex hull and in-place heap sort")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point set (counterclockwise, from the leftmost point)
    Hull(HullArgs),
    /// Sort real values ascending
    Sort(SortArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["points", "input", "random"])))]
struct HullArgs {
    /// Inline points, e.g. "-6,3 3,1 2,0"
    #[arg(long, allow_hyphen_values = true)]
    points: Option<String>,
    /// Point file: .csv with columns x,y or .json array of {"x","y"}
    #[arg(long)]
    input: Option<PathBuf>,
    /// Draw N uniform points inside --bounds
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// XMIN,YMIN,XMAX,YMAX for --random
    #[arg(
        long,
        value_parser = input::parse_bounds,
        default_value = "-10,-10,10,10",
        allow_hyphen_values = true
    )]
    bounds: Bounds2,
    /// Tie-break between collinear candidates
    #[arg(long, value_enum, default_value_t = Collinear::Farthest)]
    collinear: Collinear,
    /// Advance one hull vertex per Enter key
    #[arg(long)]
    step: bool,
    /// Write {points, hull, degenerate} as JSON plus a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["values", "input", "random", "countdown"])
))]
struct SortArgs {
    /// Inline values, e.g. "2 5.5 -3"
    #[arg(long, allow_hyphen_values = true)]
    values: Option<String>,
    /// Value file: .csv (see --column) or .json array of numbers
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value = "value")]
    column: String,
    /// Draw N uniform values in [-1e6, 1e6)
    #[arg(long)]
    random: Option<usize>,
    /// Sort N, N-1, ..., 1
    #[arg(long)]
    countdown: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Print values in exponent notation (e.g. 1.7976931348623157e308)
    #[arg(long)]
    exponent: bool,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Collinear {
    Farthest,
    ScanOrder,
}

impl From<Collinear> for CollinearPolicy {
    fn from(c: Collinear) -> Self {
        match c {
            Collinear::Farthest => CollinearPolicy::Farthest,
            Collinear::ScanOrder => CollinearPolicy::ScanOrder,
        }
    }
}

#[derive(Serialize)]
struct HullOutput<'a> {
    points: &'a [Point],
    hull: &'a [Point],
    degenerate: bool,
}

#[derive(Serialize)]
struct SortOutput<'a> {
    input: &'a [f64],
    sorted: &'a [f64],
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(args),
        Action::Sort(args) => sort(args),
        Action::Report => report(),
    }
}

fn load_points(args: &HullArgs) -> Result<Vec<Point>> {
    if let Some(list) = &args.points {
        return input::parse_points(list);
    }
    if let Some(path) = &args.input {
        return input::read_points(path);
    }
    let n = args.random.unwrap_or_default();
    Ok(draw_points(n, args.bounds, ReplayToken::new(args.seed)))
}

fn hull(args: HullArgs) -> Result<()> {
    let points = load_points(&args)?;
    let cfg = HullCfg {
        collinear: args.collinear.into(),
    };
    tracing::info!(n = points.len(), collinear = ?args.collinear, step = args.step, "hull");

    let hull = if args.step {
        step::step_hull(&points, cfg, io::stdin().lock(), io::stdout().lock())?
    } else {
        compute_hull_with(&points, &cfg)?
    };
    if hull.is_degenerate() {
        tracing::warn!(vertices = hull.len(), "degenerate point set, trivial hull");
    }
    tracing::info!(vertices = hull.len(), doubled_area = %hull.doubled_area(), "hull_done");

    let line: String = hull.vertices().iter().map(|p| p.to_string()).collect();
    println!("{}", line.trim_end());

    if let Some(out) = &args.out {
        let doc = HullOutput {
            points: &points,
            hull: hull.vertices(),
            degenerate: hull.is_degenerate(),
        };
        write_json(out, &doc)?;
        let params = serde_json::json!({
            "n": points.len(),
            "collinear": format!("{:?}", args.collinear),
            "seed": args.random.map(|_| args.seed),
            "input": args.input,
        });
        provenance::write_sidecar(out, provenance::Payload::new("hull", params))?;
    }
    Ok(())
}

fn load_values(args: &SortArgs) -> Result<Vec<f64>> {
    if let Some(list) = &args.values {
        return input::parse_values(list);
    }
    if let Some(path) = &args.input {
        return input::read_values(path, &args.column);
    }
    if let Some(n) = args.countdown {
        return Ok((0..n).map(|i| (n - i) as f64).collect());
    }
    let n = args.random.unwrap_or_default();
    Ok(draw_values(n, -1e6, 1e6, ReplayToken::new(args.seed)))
}

fn format_values(values: &[f64], exponent: bool) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| if exponent { format!("{v:e}") } else { v.to_string() })
        .collect();
    format!("[ {}]", items.join(", "))
}

fn sort(args: SortArgs) -> Result<()> {
    let input = load_values(&args)?;
    tracing::info!(n = input.len(), "sort");
    let mut sorted = input.clone();
    sort_ascending(&mut sorted);
    debug_assert!(is_sorted_ascending(&sorted));
    println!("{}", format_values(&sorted, args.exponent));

    if let Some(out) = &args.out {
        write_json(
            out,
            &SortOutput {
                input: &input,
                sorted: &sorted,
            },
        )?;
        let params = serde_json::json!({
            "n": input.len(),
            "seed": args.random.map(|_| args.seed),
            "input": args.input,
        });
        provenance::write_sidecar(out, provenance::Payload::new("sort", params))?;
    }
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document("report", serde_json::json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
