use tracing::*;

use crate::city::City;
use crate::ride::Ride;
use crate::vehicle::{Vehicle, VehicleState};
use crate::data::rides::Score;

/// Try to fit `candidate` into the vehicle's sequence.
///
/// Two ghosts replay the sequence from scratch, the high one a ride ahead of the low one.  Both
/// advance for as long as the high ghost could still complete the candidate; the candidate is then
/// inserted after the low ghost's rides.  The remaining original rides follow for as long as each
/// still fits, and the first one which doesn't ends the new sequence.
///
/// Returns the new vehicle (same id) if it scores strictly more than the old one.
pub fn splice(vehicle: &Vehicle, city: &City, candidate: &Ride) -> Option<Vehicle> {
  if !VehicleState::START.can_complete(candidate) {
    return None;
  }
  let rides = vehicle.rides();

  let mut lo = VehicleState::START;
  let mut insert_at = 0;
  if let Some(&first) = rides.first() {
    let mut hi = lo.advance(city.ride(first));
    while insert_at + 1 < rides.len() && hi.can_complete(candidate) {
      lo = lo.advance(city.ride(rides[insert_at]));
      hi = hi.advance(city.ride(rides[insert_at + 1]));
      insert_at += 1;
    }
  }
  debug_assert!(lo.can_complete(candidate));

  let mut sequence: Vec<&Ride> = Vec::with_capacity(rides.len() + 1);
  sequence.extend(rides[..insert_at].iter().map(|&r| city.ride(r)));
  sequence.push(candidate);
  lo = lo.advance(candidate);
  for &r in &rides[insert_at..] {
    let ride = city.ride(r);
    if !lo.can_complete(ride) {
      break;
    }
    lo = lo.advance(ride);
    sequence.push(ride);
  }

  let ghost = Vehicle::replay(vehicle.id, sequence);
  if ghost.total_score(city.rides(), city.bonus) > vehicle.total_score(city.rides(), city.bonus) {
    Some(ghost)
  } else {
    None
  }
}

/// Hand `old`'s rides back to the city and claim `new`'s.
fn commit(city: &mut City, old: &Vehicle, new: &Vehicle) {
  for &r in old.rides() {
    city.release(r);
  }
  for &r in new.rides() {
    city.claim(r);
  }
}

/// Run [`splice`] for every ride that was unassigned when the call started, keeping each
/// improvement as it is found.  Returns the number of accepted splices.
pub fn optimize(vehicle: &mut Vehicle, city: &mut City) -> usize {
  let mut accepted = 0;
  for r in city.remaining() {
    debug_assert!(!city.is_taken(r));
    if let Some(better) = splice(vehicle, city, city.ride(r)) {
      trace!(vehicle=vehicle.id, ride=r, old=?vehicle.rides(), new=?better.rides(), "splice accepted");
      commit(city, vehicle, &better);
      *vehicle = better;
      accepted += 1;
    }
  }
  return accepted;
}

pub fn fleet_score(fleet: &[Vehicle], city: &City) -> Score {
  fleet.iter().map(|v| v.total_score(city.rides(), city.bonus)).sum()
}

/// `threshold` passes of [`optimize`] over the whole fleet.  Returns the number of accepted
/// splices.
#[instrument(level="info", skip(fleet, city), fields(instance=%city.id))]
pub fn refine(fleet: &mut [Vehicle], city: &mut City, threshold: usize) -> usize {
  let mut accepted = 0;
  for pass in 0..threshold {
    let mut pass_accepted = 0;
    for vehicle in fleet.iter_mut() {
      pass_accepted += optimize(vehicle, city);
    }
    debug!(pass, accepted=pass_accepted, score=fleet_score(fleet, city), "refinement pass");
    accepted += pass_accepted;
  }
  info!(accepted, "refinement finished");
  return accepted;
}
