use std::fmt;
use std::str::FromStr;

use crate::city::City;
use crate::ride::Ride;
use crate::vehicle::VehicleState;
use crate::data::rides::{Coord, RideId, Score, Time};

/// How the construction phase ranks the rides a vehicle could take next.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum HeuristicPolicy {
  /// Points per unit of clock spent.  Suits dense instances where the drive to the next pickup
  /// is negligible.
  Ratio,
  /// Like `Ratio`, but long rides are only taken when they land close to both their own deadline
  /// and the end of the simulation.
  ThresholdOverride,
  /// Points minus time spent driving empty or waiting.
  WasteMinimizing,
}

impl Default for HeuristicPolicy {
  fn default() -> Self { HeuristicPolicy::WasteMinimizing }
}

pub const POLICY_STRINGS: [&str; 3] = ["ratio", "threshold", "waste"];

impl FromStr for HeuristicPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    return match s {
      "ratio" => Ok(Self::Ratio),
      "threshold" => Ok(Self::ThresholdOverride),
      "waste" => Ok(Self::WasteMinimizing),
      _ => Err(format!("invalid string: {}", s))
    };
  }
}

impl fmt::Display for HeuristicPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::Ratio => POLICY_STRINGS[0],
      Self::ThresholdOverride => POLICY_STRINGS[1],
      Self::WasteMinimizing => POLICY_STRINGS[2],
    };
    f.write_str(s)
  }
}

/// Picks a policy for a `rows` x `cols` grid.
pub type Classifier = fn(Coord, Coord) -> HeuristicPolicy;

/// Known grid areas and the policy that works best on them.
pub const SCALE_SIGNATURES: [(Coord, HeuristicPolicy); 4] = [
  (3 * 4, HeuristicPolicy::WasteMinimizing),
  (800 * 1000, HeuristicPolicy::WasteMinimizing),
  (3000 * 2000, HeuristicPolicy::Ratio),
  (10000 * 10000, HeuristicPolicy::ThresholdOverride),
];

/// Look the grid area up in [`SCALE_SIGNATURES`], falling back to `WasteMinimizing`.
pub fn classify_by_scale(rows: Coord, cols: Coord) -> HeuristicPolicy {
  let area = rows * cols;
  SCALE_SIGNATURES.iter()
    .find(|(a, _)| *a == area)
    .map(|&(_, p)| p)
    .unwrap_or_default()
}

/// A long ride is accepted outright when its landing time is this close to both its deadline and
/// the end of the simulation.
pub const OVERRIDE_WINDOW: Time = 10;

#[inline]
fn ratio(state: &VehicleState, ride: &Ride, bonus: Score) -> f64 {
  state.points(ride, bonus) as f64 / state.total_time_spent(ride) as f64
}

/// Highest scoring candidate, strictly greater than `floor`; the first one wins ties.
fn argmax<'a>(candidates: impl Iterator<Item=&'a Ride>, floor: f64, score: impl Fn(&Ride) -> f64) -> Option<RideId> {
  let mut best_score = floor;
  let mut best_ride = None;
  for ride in candidates {
    let s = score(ride);
    if s > best_score {
      best_score = s;
      best_ride = Some(ride.id);
    }
  }
  best_ride
}

impl HeuristicPolicy {
  /// Best untaken ride the vehicle can still complete, or `None` if there is nothing left for it.
  pub fn best_ride(self, city: &City, state: &VehicleState) -> Option<RideId> {
    let bonus = city.bonus;
    match self {
      Self::Ratio => argmax(city.candidates(state), -1.0, |r| ratio(state, r, bonus)),

      Self::WasteMinimizing => argmax(
        city.candidates(state),
        f64::NEG_INFINITY,
        |r| (state.points(r, bonus) - state.time_wasted(r)) as f64,
      ),

      Self::ThresholdOverride => {
        let long = city.rows / 2;
        let mut best_score = -1.0;
        let mut best_ride = None;
        for ride in city.candidates(state) {
          let mut s = ratio(state, ride, bonus);
          if ride.length > long {
            let landing = state.clock + state.total_time_spent(ride);
            if (landing - ride.finish_time).abs() <= OVERRIDE_WINDOW
              && (landing - city.max_time).abs() <= OVERRIDE_WINDOW {
              return Some(ride.id);
            }
            s = 0.0;
          }
          if s > best_score {
            best_score = s;
            best_ride = Some(ride.id);
          }
        }
        best_ride
      }
    }
  }
}
