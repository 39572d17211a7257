//! Plain-text point lists.
//!
//! Points are written as whitespace-separated integer pairs. Any amount of
//! whitespace, including newlines, may separate the coordinates.
use log::{debug, warn};
use std::io::{self, BufRead, Write};

use crate::data::Point;

/// Parse integer pairs until the text is exhausted or a token fails to parse
/// as an `i32`.
///
/// Every pair read before the malformed token is kept. A trailing coordinate
/// without a partner is dropped.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::data::Point;
/// # use graham_hull::io::parse_points;
/// assert_eq!(
///   parse_points("0 0 4 0\n 4 4\nfoo 9 9"),
///   vec![Point::new(0, 0), Point::new(4, 0), Point::new(4, 4)]
/// );
/// ```
pub fn parse_points(text: &str) -> Vec<Point> {
  let mut reader = PairReader::default();
  reader.feed(text);
  reader.finish()
}

/// Read integer pairs from `reader` line by line.
///
/// Reading stops at the first malformed token, see [`parse_points`]. Bytes
/// that are not valid UTF-8 count as a malformed token.
///
/// # Errors
/// Propagates I/O errors from the underlying reader.
pub fn read_points<R: BufRead>(reader: R) -> io::Result<Vec<Point>> {
  let mut pairs = PairReader::default();
  for line in reader.split(b'\n') {
    if !pairs.feed(&String::from_utf8_lossy(&line?)) {
      break;
    }
  }
  Ok(pairs.finish())
}

/// Write one `x y` line per point.
pub fn write_points<W: Write>(mut writer: W, points: &[Point]) -> io::Result<()> {
  for pt in points {
    writeln!(writer, "{}", pt)?;
  }
  writer.flush()
}

#[derive(Debug, Default)]
struct PairReader {
  points: Vec<Point>,
  pending: Option<i32>,
  malformed: bool,
}

impl PairReader {
  // Returns false once a malformed token has been seen.
  fn feed(&mut self, text: &str) -> bool {
    if self.malformed {
      return false;
    }
    for token in text.split_whitespace() {
      let value = match token.parse::<i32>() {
        Ok(value) => value,
        Err(err) => {
          warn!("stopped reading points at {:?}: {}", token, err);
          self.malformed = true;
          return false;
        }
      };
      match self.pending.take() {
        Some(x) => self.points.push(Point::new(x, value)),
        None => self.pending = Some(value),
      }
    }
    true
  }

  fn finish(self) -> Vec<Point> {
    if let Some(x) = self.pending {
      debug!("dropping unpaired coordinate {}", x);
    }
    self.points
  }
}
