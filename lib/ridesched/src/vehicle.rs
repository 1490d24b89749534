use std::cmp::max;
use std::fmt;
use itertools::Itertools;

use crate::geometry::Point;
use crate::ride::Ride;
use crate::data::rides::{RideId, Score, Time, VehicleId};

/// Where a vehicle is and how far its clock has run.  All the scoring and feasibility rules are
/// functions of this state and the ride in question, evaluated *before* the ride is taken.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct VehicleState {
  pub pos: Point,
  pub clock: Time,
}

impl VehicleState {
  pub const START: VehicleState = VehicleState { pos: Point::ORIGIN, clock: 0 };

  /// Time at which the vehicle would reach the pickup if it left now.
  #[inline]
  pub fn arrival(&self, ride: &Ride) -> Time {
    self.clock + self.pos.distance_to(&ride.start)
  }

  /// Whether the ride can still be finished by its deadline.
  #[inline]
  pub fn can_complete(&self, ride: &Ride) -> bool {
    self.arrival(ride) + ride.length <= ride.finish_time
  }

  /// Idle time at the pickup; negative if the vehicle arrives after `start_time`.
  #[inline]
  pub fn time_to_wait(&self, ride: &Ride) -> Time {
    ride.start_time - self.arrival(ride)
  }

  /// Time spent driving to the pickup and waiting there, earning nothing.
  #[inline]
  pub fn time_wasted(&self, ride: &Ride) -> Time {
    self.pos.distance_to(&ride.start) + max(0, self.time_to_wait(ride))
  }

  /// How far the clock advances if this ride is taken.
  #[inline]
  pub fn total_time_spent(&self, ride: &Ride) -> Time {
    self.time_wasted(ride) + ride.length
  }

  /// Points for taking the ride next: its length, plus `bonus` when the pickup is reached on time.
  #[inline]
  pub fn points(&self, ride: &Ride, bonus: Score) -> Score {
    if self.arrival(ride) <= ride.start_time {
      ride.length + bonus
    } else {
      ride.length
    }
  }

  /// The state after taking `ride`.  Feasibility is not checked.
  #[inline]
  pub fn advance(&self, ride: &Ride) -> VehicleState {
    VehicleState {
      pos: ride.finish,
      clock: self.clock + self.total_time_spent(ride),
    }
  }
}

/// Outcome of replaying a ride sequence from the start state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Simulation {
  pub state: VehicleState,
  pub score: Score,
  /// Every ride could be completed when it was reached.
  pub feasible: bool,
}

/// Replay `rides` in order from the origin at time zero without touching any vehicle.
pub fn simulate<'a>(rides: impl IntoIterator<Item=&'a Ride>, bonus: Score) -> Simulation {
  rides.into_iter().fold(
    Simulation { state: VehicleState::START, score: 0, feasible: true },
    |sim, ride| Simulation {
      state: sim.state.advance(ride),
      score: sim.score + sim.state.points(ride, bonus),
      feasible: sim.feasible && sim.state.can_complete(ride),
    },
  )
}


#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vehicle {
  pub id: VehicleId,
  state: VehicleState,
  rides: Vec<RideId>,
}

impl Vehicle {
  pub fn new(id: VehicleId) -> Self {
    Vehicle { id, state: VehicleState::START, rides: Vec::new() }
  }

  /// A vehicle which has taken `rides` in order, starting from scratch.
  pub fn replay<'a>(id: VehicleId, rides: impl IntoIterator<Item=&'a Ride>) -> Self {
    let mut vehicle = Vehicle::new(id);
    for ride in rides {
      vehicle.take_ride(ride);
    }
    vehicle
  }

  #[inline]
  pub fn state(&self) -> &VehicleState { &self.state }

  #[inline]
  pub fn clock(&self) -> Time { self.state.clock }

  #[inline]
  pub fn pos(&self) -> Point { self.state.pos }

  /// Assigned rides, in the order they were taken.
  #[inline]
  pub fn rides(&self) -> &[RideId] { &self.rides }

  #[inline]
  pub fn can_complete(&self, ride: &Ride) -> bool { self.state.can_complete(ride) }

  #[inline]
  pub fn points(&self, ride: &Ride, bonus: Score) -> Score { self.state.points(ride, bonus) }

  /// Append `ride` and move the vehicle to its drop-off.  The caller is responsible for checking
  /// `can_complete` first.
  pub fn take_ride(&mut self, ride: &Ride) {
    self.rides.push(ride.id);
    self.state = self.state.advance(ride);
  }

  /// Retire the vehicle from construction by running its clock to `max_time`.
  pub fn kill(&mut self, max_time: Time) {
    self.state.clock = max_time;
  }

  #[inline]
  pub fn is_exhausted(&self, max_time: Time) -> bool {
    self.state.clock >= max_time
  }

  /// Score of the ride sequence, recomputed from scratch.  `catalog` is indexed by ride id.
  pub fn total_score(&self, catalog: &[Ride], bonus: Score) -> Score {
    simulate(self.rides.iter().map(|&r| &catalog[r]), bonus).score
  }
}

impl fmt::Display for Vehicle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.rides.is_empty() {
      write!(f, "0")
    } else {
      write!(f, "{} {}", self.rides.len(), self.rides.iter().join(" "))
    }
  }
}

pub fn new_fleet(size: usize) -> Vec<Vehicle> {
  (0..size).map(Vehicle::new).collect()
}

/// Index of the vehicle with the smallest clock, lowest index on ties.  `None` for an empty fleet.
pub fn first_free(fleet: &[Vehicle]) -> Option<VehicleId> {
  fleet.iter()
    .enumerate()
    .min_by_key(|(_, v)| v.clock())
    .map(|(k, _)| k)
}
