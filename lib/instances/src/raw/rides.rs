use std::fmt;
use itertools::Itertools;

/// One ride line, as it appears in the input file.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RawRide {
  pub start: (i64, i64),
  pub finish: (i64, i64),
  pub earliest_start: i64,
  pub latest_finish: i64,
}

/// A self-driving rides instance, as it appears in the input file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rides {
  pub rows: i64,
  pub cols: i64,
  pub num_vehicles: usize,
  pub num_rides: usize,
  pub bonus: i64,
  pub steps: i64,
  pub rides: Vec<RawRide>,
}

/// Ride ids per vehicle, in fleet order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Submission {
  pub routes: Vec<Vec<usize>>,
}

impl fmt::Display for Submission {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for route in &self.routes {
      if route.is_empty() {
        writeln!(f, "0")?;
      } else {
        writeln!(f, "{} {}", route.len(), route.iter().join(" "))?;
      }
    }
    Ok(())
  }
}
