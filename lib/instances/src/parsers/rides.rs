use std::path::Path;
use anyhow::Context;
use crate::Result;
use crate::raw::rides::*;
use super::{
  ParseInstance,
  common::*,
  nom_prelude::*,
};

#[derive(Debug, Copy, Clone)]
pub struct RidesFmt<P>(pub P);

/// Instance text held in memory.
#[derive(Debug, Copy, Clone)]
pub struct RidesStr<'a>(pub &'a str);

impl<P: AsRef<Path>> ParseInstance<RidesFmt<P>> for Rides {
  fn parse(path: RidesFmt<P>) -> Result<Rides> {
    let path = path.0.as_ref();
    let data = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read {:?}", path))?;
    Rides::parse(RidesStr(&data)).with_context(|| format!("failed to parse {:?}", path))
  }
}

impl<'a> ParseInstance<RidesStr<'a>> for Rides {
  fn parse(input: RidesStr<'a>) -> Result<Rides> {
    match parsers::rides(input.0).finish() {
      Ok((_, instance)) => Ok(instance),
      Err(e) => Err(describe_error(input.0, e)),
    }
  }
}


mod parsers {
  use super::*;

  fn header(input: &str) -> VResult<(i64, i64, usize, usize, i64, i64)> {
    tuple((ws_i64, ws_i64, ws_usize, ws_usize, ws_i64, ws_i64))(input)
  }

  // a b x y s f
  fn ride(input: &str) -> VResult<RawRide> {
    map(
      tuple((ws_i64, ws_i64, ws_i64, ws_i64, ws_i64, ws_i64)),
      |(a, b, x, y, s, f)| RawRide {
        start: (a, b),
        finish: (x, y),
        earliest_start: s,
        latest_finish: f,
      },
    )(input)
  }

  pub fn rides(input: &str) -> VResult<Rides> {
    let (input, (rows, cols, num_vehicles, num_rides, bonus, steps)) =
      error::context("header", header)(input)?;
    let (input, rides) = error::context("ride", count(ride, num_rides))(input)?;
    let (input, _) = finish_input(input)?;

    Ok((input, Rides {
      rows,
      cols,
      num_vehicles,
      num_rides,
      bonus,
      steps,
      rides,
    }))
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  const EXAMPLE: &str = "3 4 2 3 2 10
0 0 1 3 2 9
1 2 1 0 0 9
2 0 2 2 0 9
";

  #[test]
  fn example_instance() -> Result<()> {
    let raw = Rides::parse(RidesStr(EXAMPLE))?;
    assert_eq!((raw.rows, raw.cols, raw.num_vehicles, raw.num_rides, raw.bonus, raw.steps), (3, 4, 2, 3, 2, 10));
    assert_eq!(raw.rides.len(), 3);
    assert_eq!(raw.rides[0], RawRide { start: (0, 0), finish: (1, 3), earliest_start: 2, latest_finish: 9 });
    assert_eq!(raw.rides[2].finish, (2, 2));
    Ok(())
  }

  #[test]
  fn missing_final_newline() -> Result<()> {
    let raw = Rides::parse(RidesStr(EXAMPLE.trim_end()))?;
    assert_eq!(raw.rides.len(), 3);
    Ok(())
  }

  #[test]
  fn truncated_instance() {
    let truncated = "3 4 2 3 2 10\n0 0 1 3 2 9\n1 2 1 0 0 9\n";
    assert!(Rides::parse(RidesStr(truncated)).is_err());
  }

  #[test]
  fn extra_ride_line() {
    let extra = format!("{}0 0 0 1 0 5\n", EXAMPLE);
    assert!(Rides::parse(RidesStr(&extra)).is_err());
  }

  #[test]
  fn not_a_number() {
    assert!(Rides::parse(RidesStr("3 4 two 1 0 10\n0 0 1 1 0 5\n")).is_err());
  }

  #[test]
  fn coordinate_out_of_range() {
    assert!(Rides::parse(RidesStr("3 4 1 1 0 10\n0 0 9223372036854775808 1 0 5\n")).is_err());
    assert!(Rides::parse(RidesStr("3 4 1 1 0 9223372036854775808\n0 0 1 1 0 5\n")).is_err());
  }

  #[test]
  fn missing_file() {
    let err = Rides::parse(RidesFmt("does/not/exist.in")).unwrap_err();
    assert!(format!("{:#}", err).contains("exist.in"));
  }
}
