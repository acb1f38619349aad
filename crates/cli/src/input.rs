//! Point and value sources: inline lists, CSV (polars) and JSON files.

use anyhow::{bail, Context, Result};
use hullsort::prelude::{Bounds2, Point};
use polars::prelude::*;
use std::fs;
use std::path::Path;

fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
}

/// Parse `"x,y x,y ..."` (whitespace or `;` between points).
pub fn parse_points(list: &str) -> Result<Vec<Point>> {
    tokens(list)
        .map(|tok| {
            let (x, y) = tok
                .split_once(',')
                .with_context(|| format!("point `{tok}` is not `x,y`"))?;
            let x = x.trim().parse().with_context(|| format!("bad x in `{tok}`"))?;
            let y = y.trim().parse().with_context(|| format!("bad y in `{tok}`"))?;
            Ok(Point::new(x, y))
        })
        .collect()
}

/// Parse `"v v v"` or `"v,v,v"`.
pub fn parse_values(list: &str) -> Result<Vec<f64>> {
    tokens(list)
        .flat_map(|t| t.split(','))
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("`{t}` is not a number"))
        })
        .collect()
}

/// clap value parser for `XMIN,YMIN,XMAX,YMAX`.
pub fn parse_bounds(s: &str) -> Result<Bounds2, String> {
    let parts = s
        .split(',')
        .map(|t| t.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bounds `{s}`: {e}"))?;
    match parts.as_slice() {
        &[x_min, y_min, x_max, y_max] => Bounds2::new(x_min, y_min, x_max, y_max)
            .ok_or_else(|| format!("bounds `{s}`: minimum exceeds maximum")),
        _ => Err(format!("bounds `{s}`: expected XMIN,YMIN,XMAX,YMAX")),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    Ok(df)
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<i32>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Int64)?;
    col.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            let v = v.with_context(|| format!("row {row}: empty `{name}`"))?;
            i32::try_from(v).with_context(|| format!("row {row}: `{name}` = {v} out of range"))
        })
        .collect()
}

/// Points from a `.csv` (columns `x`, `y`) or `.json` (`[{"x":..,"y":..}]`) file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match extension(path).as_str() {
        "csv" => {
            let df = read_csv(path)?;
            let xs = int_column(&df, "x")?;
            let ys = int_column(&df, "y")?;
            Ok(xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect())
        }
        "json" => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing points from {}", path.display()))
        }
        other => bail!("unsupported point file extension `{other}` (use .csv or .json)"),
    }
}

/// Values from a `.csv` column or a `.json` array of numbers.
pub fn read_values(path: &Path, column: &str) -> Result<Vec<f64>> {
    match extension(path).as_str() {
        "csv" => {
            let df = read_csv(path)?;
            let col = df
                .column(column)
                .with_context(|| format!("missing column `{column}`"))?
                .cast(&DataType::Float64)?;
            col.f64()?
                .into_iter()
                .enumerate()
                .map(|(row, v)| v.with_context(|| format!("row {row}: empty `{column}`")))
                .collect()
        }
        "json" => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing values from {}", path.display()))
        }
        other => bail!("unsupported value file extension `{other}` (use .csv or .json)"),
    }
}
