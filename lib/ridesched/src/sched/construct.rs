use tracing::*;

use crate::city::City;
use crate::vehicle::{Vehicle, first_free};

/// Greedy construction.  The least advanced vehicle always moves next: it takes the best ride the
/// city's policy offers, or retires if there is none.  Stops once every vehicle has reached the
/// end of the simulation.  Returns the number of rides assigned.
#[instrument(level="info", skip(fleet, city), fields(instance=%city.id, policy=%city.policy()))]
pub fn construct(fleet: &mut [Vehicle], city: &mut City) -> usize {
  let mut assigned = 0;
  while let Some(k) = first_free(fleet) {
    let vehicle = &mut fleet[k];
    if vehicle.is_exhausted(city.max_time) {
      break;
    }
    match city.best_ride(vehicle.state()) {
      Some(r) => {
        trace!(vehicle=k, ride=r, clock=vehicle.clock(), "assign");
        vehicle.take_ride(city.ride(r));
        city.claim(r);
        assigned += 1;
      }
      None => {
        trace!(vehicle=k, clock=vehicle.clock(), "retire");
        vehicle.kill(city.max_time);
      }
    }
  }
  info!(assigned, unassigned=city.rides().len() - city.num_taken(), "construction finished");
  return assigned;
}
