use bit_vec::BitVec;
use tracing::*;

use crate::data::rides::*;
use crate::ride::Ride;
use crate::vehicle::VehicleState;
use crate::sched::heuristic::{HeuristicPolicy, Classifier, classify_by_scale};

/// The ride catalog of an instance together with the record of which rides are currently
/// assigned to some vehicle.  The catalog never changes; `taken` is updated by the construction
/// and refinement phases.
#[derive(Debug, Clone)]
pub struct City {
  pub id: String,
  pub rows: Coord,
  pub cols: Coord,
  pub fleet_size: usize,
  pub bonus: Score,
  pub max_time: Time,
  rides: Vec<Ride>,
  taken: BitVec,
  policy: HeuristicPolicy,
}

impl City {
  /// Build the city, choosing the construction policy from the grid size.
  pub fn new(data: &RidesInstance) -> Self {
    Self::with_classifier(data, classify_by_scale)
  }

  pub fn with_classifier(data: &RidesInstance, classifier: Classifier) -> Self {
    Self::with_policy(data, classifier(data.rows, data.cols))
  }

  #[instrument(level="debug", skip(data), fields(instance=%data.id))]
  pub fn with_policy(data: &RidesInstance, policy: HeuristicPolicy) -> Self {
    let rides: Vec<Ride> = data.rides.iter().map(Ride::from).collect();
    debug_assert!(rides.iter().enumerate().all(|(k, r)| r.id == k), "ride ids must be positions");
    debug!(rides=rides.len(), ?policy);
    City {
      id: data.id.clone(),
      rows: data.rows,
      cols: data.cols,
      fleet_size: data.fleet_size,
      bonus: data.bonus,
      max_time: data.max_time,
      taken: BitVec::from_elem(rides.len(), false),
      rides,
      policy,
    }
  }

  #[inline]
  pub fn rides(&self) -> &[Ride] { &self.rides }

  #[inline]
  pub fn ride(&self, id: RideId) -> &Ride { &self.rides[id] }

  #[inline]
  pub fn policy(&self) -> HeuristicPolicy { self.policy }

  #[inline]
  pub fn is_taken(&self, id: RideId) -> bool { self.taken[id] }

  #[inline]
  pub fn claim(&mut self, id: RideId) {
    debug_assert!(!self.taken[id], "ride {} claimed twice", id);
    self.taken.set(id, true);
  }

  #[inline]
  pub fn release(&mut self, id: RideId) {
    self.taken.set(id, false);
  }

  pub fn num_taken(&self) -> usize {
    self.taken.iter().filter(|&t| t).count()
  }

  /// Snapshot of the rides no vehicle holds, in id order.
  pub fn remaining(&self) -> Vec<RideId> {
    self.taken.iter()
      .enumerate()
      .filter_map(|(id, t)| if t { None } else { Some(id) })
      .collect()
  }

  /// Untaken rides a vehicle in `state` can still complete, in id order.
  pub fn candidates<'a>(&'a self, state: &'a VehicleState) -> impl Iterator<Item=&'a Ride> + 'a {
    self.rides.iter()
      .filter(move |r| !self.taken[r.id] && state.can_complete(r))
  }

  /// The next ride for a vehicle in `state` under this city's policy, if any is admissible.
  #[inline]
  pub fn best_ride(&self, state: &VehicleState) -> Option<RideId> {
    self.policy.best_ride(self, state)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::instance;
  use crate::geometry::Point;

  #[test]
  fn claim_and_release() {
    let data = instance(3, 4, 1, 0, 10, &[
      ((0, 0), (0, 3), 0, 10),
      ((1, 0), (1, 3), 0, 10),
      ((2, 0), (2, 3), 0, 10),
    ]);
    let mut city = City::new(&data);
    assert_eq!(city.remaining(), vec![0, 1, 2]);
    city.claim(1);
    assert!(city.is_taken(1));
    assert_eq!(city.remaining(), vec![0, 2]);
    assert_eq!(city.num_taken(), 1);
    city.release(1);
    assert_eq!(city.num_taken(), 0);
    assert_eq!(city.ride(2).start, Point::new(2, 0));
  }

  #[test]
  fn candidates_skip_taken_and_infeasible() {
    let data = instance(10, 10, 1, 0, 10, &[
      ((0, 0), (0, 3), 0, 10),
      ((5, 5), (5, 9), 0, 10),
      ((1, 0), (1, 3), 0, 10),
    ]);
    let mut city = City::new(&data);
    city.claim(0);
    let ids: Vec<_> = city.candidates(&VehicleState::START).map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);
  }

  #[test]
  fn policy_from_grid_size() {
    let mut data = instance(3000, 2000, 1, 0, 10, &[]);
    assert_eq!(City::new(&data).policy(), HeuristicPolicy::Ratio);
    data.rows = 7;
    assert_eq!(City::new(&data).policy(), HeuristicPolicy::WasteMinimizing);
    assert_eq!(City::with_classifier(&data, |_, _| HeuristicPolicy::ThresholdOverride).policy(),
               HeuristicPolicy::ThresholdOverride);
  }
}
