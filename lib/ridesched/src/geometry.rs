use std::fmt;
use crate::data::rides::{Coord, Time};

/// An intersection of the city grid.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Point {
  pub x: Coord,
  pub y: Coord,
}

impl Point {
  /// Every vehicle starts here.
  pub const ORIGIN: Point = Point { x: 0, y: 0 };

  #[inline]
  pub fn new(x: Coord, y: Coord) -> Self {
    Point { x, y }
  }

  /// Manhattan distance, which is also the travel time between the two points.
  #[inline]
  pub fn distance_to(&self, other: &Point) -> Time {
    (self.x - other.x).abs() + (self.y - other.y).abs()
  }
}

#[inline]
pub fn distance(a: Point, b: Point) -> Time {
  a.distance_to(&b)
}

impl From<(Coord, Coord)> for Point {
  fn from((x, y): (Coord, Coord)) -> Self {
    Point { x, y }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn point() -> impl Strategy<Value=Point> {
    (0..10_000 as Coord, 0..10_000 as Coord).prop_map(Point::from)
  }

  #[test]
  fn grid_distance() {
    assert_eq!(distance(Point::ORIGIN, Point::new(0, 3)), 3);
    assert_eq!(distance(Point::new(2, 7), Point::new(5, 1)), 9);
    assert_eq!(distance(Point::new(4, 4), Point::new(4, 4)), 0);
  }

  proptest! {
    #[test]
    fn metric_axioms(a in point(), b in point(), c in point()) {
      prop_assert!(distance(a, b) >= 0);
      prop_assert_eq!(distance(a, b), distance(b, a));
      prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c));
      prop_assert_eq!(distance(a, a), 0);
    }
  }
}
