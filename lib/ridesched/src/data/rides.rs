pub use instances::dataset::rides::{
  Time,
  Coord,
  Score,
  RideId,
  VehicleId,
  RideRequest,
};

use crate::ride::Ride;

pub type RidesInstance = instances::dataset::rides::RidesInstance;

pub trait RidesInstanceExt {
  /// Grid size, `rows * cols`.
  fn area(&self) -> Coord;
  /// Upper bound on the score: every ride on time.
  fn score_bound(&self) -> Score;
}

impl RidesInstanceExt for RidesInstance {
  #[inline]
  fn area(&self) -> Coord {
    return self.rows * self.cols;
  }

  fn score_bound(&self) -> Score {
    return self.rides.iter()
      .map(|r| Ride::from(r).length + self.bonus)
      .sum();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::instance;

  #[test]
  fn score_bound_counts_length_and_bonus() {
    let data = instance(10, 10, 1, 2, 20, &[
      ((0, 0), (0, 3), 0, 10),
      ((4, 1), (1, 2), 0, 10),
    ]);
    assert_eq!(data.score_bound(), (3 + 2) + (4 + 2));
    assert_eq!(data.area(), 100);
  }
}
