use crate::geometry::Point;
use crate::data::rides::{RideId, RideRequest, Time};

/// A ride request with its length precomputed.  Rides never change once the city is built.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Ride {
  pub id: RideId,
  pub start: Point,
  pub finish: Point,
  /// Latest arrival at `start` which still earns the bonus.
  pub start_time: Time,
  /// Latest time by which the ride must be over.
  pub finish_time: Time,
  pub length: Time,
}

impl Ride {
  pub fn new(id: RideId, start: Point, finish: Point, start_time: Time, finish_time: Time) -> Self {
    Ride {
      id,
      start,
      finish,
      start_time,
      finish_time,
      length: start.distance_to(&finish),
    }
  }
}

impl From<&RideRequest> for Ride {
  fn from(r: &RideRequest) -> Self {
    Ride::new(r.id, r.start.into(), r.finish.into(), r.start_time, r.finish_time)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::small_instance;
  use proptest::prelude::*;

  #[test]
  fn length_is_travel_distance() {
    let r = Ride::new(0, Point::new(1, 2), Point::new(4, 0), 0, 10);
    assert_eq!(r.length, 5);
  }

  proptest! {
    #[test]
    fn length_matches_endpoints(data in small_instance()) {
      for req in &data.rides {
        let r = Ride::from(req);
        prop_assert_eq!(r.id, req.id);
        prop_assert_eq!(r.length, r.start.distance_to(&r.finish));
      }
    }
  }
}
