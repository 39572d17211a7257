// read points from INPUT (default: points.txt)
// compute the convex hull
// write the hull to OUTPUT (default: convex_hull.txt), one "x y" line per vertex
//
// Usage: graham-hull [INPUT] [OUTPUT]
// Log verbosity is controlled with RUST_LOG.

use anyhow::{Context, Result};
use log::info;
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use graham_hull::algorithms::convex_hull;
use graham_hull::io::{read_points, write_points};

const DEFAULT_INPUT: &str = "points.txt";
const DEFAULT_OUTPUT: &str = "convex_hull.txt";

fn main() -> Result<()> {
  env_logger::init();

  let mut args = env::args().skip(1);
  let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
  let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

  let file = File::open(&input).with_context(|| format!("failed to open {}", input))?;
  let points =
    read_points(BufReader::new(file)).with_context(|| format!("failed to read {}", input))?;
  info!("read {} points from {}", points.len(), input);

  let hull = convex_hull(&points);

  let file = File::create(&output).with_context(|| format!("failed to create {}", output))?;
  write_points(BufWriter::new(file), &hull)
    .with_context(|| format!("failed to write {}", output))?;
  info!("wrote {} hull vertices to {}", hull.len(), output);
  Ok(())
}
