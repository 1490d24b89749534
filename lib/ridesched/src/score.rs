use std::fmt;
use bit_vec::BitVec;
use tracing::*;

use crate::city::City;
use crate::vehicle::VehicleState;
use crate::data::rides::{RideId, Score};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValidationError {
  TooManyRoutes { given: usize, fleet: usize },
  UnknownRide(RideId),
  DuplicateRide(RideId),
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::TooManyRoutes { given, fleet } => write!(f, "{} routes given for a fleet of {}", given, fleet),
      Self::UnknownRide(r) => write!(f, "ride {} does not exist", r),
      Self::DuplicateRide(r) => write!(f, "ride {} is assigned more than once", r),
    }
  }
}

impl std::error::Error for ValidationError {}

/// Score a submitted assignment against `city`'s catalog.
///
/// Each route is replayed from the origin at time zero.  A ride which can no longer be completed
/// when the vehicle reaches it earns nothing, but the vehicle still drives it.
#[instrument(level="debug", skip(city, routes), fields(instance=%city.id))]
pub fn evaluate_routes(city: &City, routes: &[Vec<RideId>]) -> Result<Score, ValidationError> {
  let fleet = city.fleet_size;
  if routes.len() > fleet {
    return Err(ValidationError::TooManyRoutes { given: routes.len(), fleet });
  }

  let num_rides = city.rides().len();
  let mut seen = BitVec::from_elem(num_rides, false);
  for &r in routes.iter().flatten() {
    if r >= num_rides {
      return Err(ValidationError::UnknownRide(r));
    }
    if seen[r] {
      return Err(ValidationError::DuplicateRide(r));
    }
    seen.set(r, true);
  }

  let mut total = 0;
  let mut late = 0;
  for route in routes {
    let mut state = VehicleState::START;
    for &r in route {
      let ride = city.ride(r);
      if state.can_complete(ride) {
        total += state.points(ride, city.bonus);
      } else {
        late += 1;
      }
      state = state.advance(ride);
    }
  }
  debug!(score=total, late, "evaluated");
  return Ok(total);
}
