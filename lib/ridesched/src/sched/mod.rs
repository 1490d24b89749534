use std::fmt;
use std::io;
use tracing::*;

use crate::city::City;
use crate::vehicle::{Vehicle, new_fleet};
use crate::data::rides::{RidesInstance, RidesInstanceExt, Score};

pub mod heuristic;
pub mod construct;
pub mod refine;

pub use heuristic::{HeuristicPolicy, Classifier, classify_by_scale, POLICY_STRINGS};
pub use construct::construct;
pub use refine::{refine, optimize, splice, fleet_score};

pub const DEFAULT_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SolverConfig {
  /// Number of refinement passes over the fleet.
  pub threshold: usize,
  /// Construction policy; chosen from the grid size when `None`.
  pub policy: Option<HeuristicPolicy>,
}

impl Default for SolverConfig {
  fn default() -> Self {
    SolverConfig { threshold: DEFAULT_THRESHOLD, policy: None }
  }
}

#[derive(Debug, Clone)]
pub struct Solution {
  pub config: SolverConfig,
  pub city: City,
  pub fleet: Vec<Vehicle>,
  pub construction_score: Score,
  pub score: Score,
  /// Splices accepted during refinement.
  pub accepted: usize,
}

impl Solution {
  pub fn num_assigned(&self) -> usize {
    self.fleet.iter().map(|v| v.rides().len()).sum()
  }

  /// One line per vehicle, in fleet order: ride count, then ride ids.
  pub fn write_assignment(&self, mut buf: impl io::Write) -> io::Result<()> {
    write!(buf, "{}", self)?;
    buf.flush()
  }
}

impl fmt::Display for Solution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for v in &self.fleet {
      writeln!(f, "{}", v)?;
    }
    Ok(())
  }
}

/// Greedy construction followed by `config.threshold` refinement passes.
#[instrument(level="info", skip(data, config), fields(instance=%data.id, threshold=config.threshold))]
pub fn solve(data: &RidesInstance, config: &SolverConfig) -> Solution {
  let mut city = match config.policy {
    Some(policy) => City::with_policy(data, policy),
    None => City::new(data),
  };
  let mut fleet = new_fleet(data.fleet_size);

  construct(&mut fleet, &mut city);
  let construction_score = fleet_score(&fleet, &city);
  info!(score=construction_score, bound=data.score_bound(), "constructed");

  let accepted = refine(&mut fleet, &mut city, config.threshold);
  let score = fleet_score(&fleet, &city);
  info!(score, improvement=score - construction_score, accepted, "solved");

  Solution { config: *config, city, fleet, construction_score, score, accepted }
}
