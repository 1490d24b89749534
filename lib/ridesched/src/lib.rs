use std::path::Path;

pub mod geometry;
pub mod ride;
pub mod city;
pub mod vehicle;
pub mod score;
pub mod sched;
pub mod data;

pub use geometry::{Point, distance};
pub use ride::Ride;
pub use city::City;
pub use vehicle::{Vehicle, VehicleState, Simulation, simulate, first_free, new_fleet};
pub use sched::{solve, SolverConfig, Solution, HeuristicPolicy};


mod logging_setup {
    use super::*;
    use anyhow::Context;
    use tracing_subscriber::{EnvFilter, fmt, registry, prelude::*};
    use tracing_appender::{non_blocking, non_blocking::WorkerGuard};
    use std::fs::OpenOptions;

    fn build_and_set_global_subscriber<P>(logfile: Option<P>, is_test : bool) -> anyhow::Result<Option<WorkerGuard>> where
        P : AsRef<Path>
    {
        let stderr_log = fmt::layer().with_writer(std::io::stderr);
        let env_filter = EnvFilter::from_default_env();
        let r = registry().with(stderr_log).with(env_filter);

        let flush_guard = match logfile {
            Some(p) => {
                let p = p.as_ref();
                let logfile = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(p)
                    .with_context(|| format!("failed to open log file {:?}", p))?;
                let (writer, _guard) = non_blocking::NonBlockingBuilder::default()
                    .lossy(false)
                    .finish(logfile);
                let json = fmt::layer()
                    .json()
                    .with_span_list(true)
                    .with_current_span(false)
                    .with_writer(writer);

                let r = r.with(json);
                if is_test { r.try_init().ok(); }
                else { r.try_init()?; }
                Some(_guard)
            },
            None => {
                if is_test { r.try_init().ok(); }
                else { r.try_init()?; }
                None
            }
        };
        return Ok(flush_guard)
    }

    /// Install the global subscriber: stderr output filtered by `RUST_LOG`, plus an ndjson copy
    /// of every event in `logfile` if given.  Keep the returned guard alive until exit.
    pub fn init_logging(logfile: Option<impl AsRef<Path>>) -> anyhow::Result<Option<WorkerGuard>> {
        return build_and_set_global_subscriber(logfile, false);
    }

    #[allow(dead_code)]
    pub(crate) fn init_test_logging(logfile: Option<impl AsRef<Path>>) -> Option<WorkerGuard> {
        return build_and_set_global_subscriber(logfile, true).ok().flatten();
    }
}
pub use logging_setup::*;

#[cfg(test)]
pub(crate) mod test_utils {
    use instances::dataset::rides::{RidesInstance, RideRequest, Coord, Time};
    use proptest::prelude::*;

    pub const LOGFILE : Option<&str> = None;

    /// Shorthand for building instances in tests: `(start, finish, start_time, finish_time)`.
    pub fn instance(rows: Coord, cols: Coord, fleet_size: usize, bonus: i64, max_time: Time,
                    rides: &[((Coord, Coord), (Coord, Coord), Time, Time)]) -> RidesInstance {
        RidesInstance {
            id: "test".to_string(),
            rows,
            cols,
            fleet_size,
            bonus,
            max_time,
            rides: rides.iter()
                .enumerate()
                .map(|(id, &(start, finish, start_time, finish_time))| RideRequest { id, start, finish, start_time, finish_time })
                .collect(),
        }
    }

    prop_compose! {
        fn ride_request(size: Coord, max_time: Time)
            (start in (0..size, 0..size), finish in (0..size, 0..size), t0 in 0..max_time, slack in 0..max_time)
            -> ((Coord, Coord), (Coord, Coord), Time, Time)
        {
            let length = (start.0 - finish.0).abs() + (start.1 - finish.1).abs();
            (start, finish, t0, t0 + length + slack)
        }
    }

    prop_compose! {
        /// Small random instances: a handful of vehicles on a grid of up to 20x20.
        pub fn small_instance()
            (size in 2..20 as Coord, max_time in 10..80 as Time, fleet_size in 1..5usize, bonus in 0..10i64)
            (rides in prop::collection::vec(ride_request(size, max_time), 0..40), size in Just(size),
             max_time in Just(max_time), fleet_size in Just(fleet_size), bonus in Just(bonus))
            -> RidesInstance
        {
            instance(size, size, fleet_size, bonus, max_time, &rides)
        }
    }
}
