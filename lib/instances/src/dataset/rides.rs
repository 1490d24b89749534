use super::*;
use crate::parsers::{ParseInstance, RidesFmt, RidesStr};
use crate::raw::{FromRaw, rides::Rides};

pub type Time = i64;
pub type Coord = i64;
pub type Score = i64;
pub type RideId = usize;
pub type VehicleId = usize;

pub const INSTANCE_PATTERN: &str = "*.in";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RideRequest {
  pub id: RideId,
  pub start: (Coord, Coord),
  pub finish: (Coord, Coord),
  pub start_time: Time,
  pub finish_time: Time,
}

#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct RidesInstance {
  pub id: String,
  pub rows: Coord,
  pub cols: Coord,
  pub fleet_size: usize,
  pub bonus: Score,
  pub max_time: Time,
  pub rides: Vec<RideRequest>,
}

impl FromRaw<Rides> for RidesInstance {
  fn from_raw(raw: Rides, id: Cow<str>) -> RidesInstance {
    let rides = raw.rides.into_iter()
      .enumerate()
      .map(|(id, r)| RideRequest {
        id,
        start: r.start,
        finish: r.finish,
        start_time: r.earliest_start,
        finish_time: r.latest_finish,
      })
      .collect();

    RidesInstance {
      id: id.into_owned(),
      rows: raw.rows,
      cols: raw.cols,
      fleet_size: raw.num_vehicles,
      bonus: raw.bonus,
      max_time: raw.steps,
      rides,
    }
  }
}

impl RidesInstance {
  /// Load an instance file; the instance is named after the file stem.
  pub fn load(path: impl AsRef<Path>) -> Result<RidesInstance> {
    let path = path.as_ref();
    let raw = Rides::parse(RidesFmt(path))?;
    let id = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or(Cow::Borrowed("unnamed"));
    Ok(RidesInstance::from_raw(raw, id))
  }

  pub fn parse_str(id: &str, data: &str) -> Result<RidesInstance> {
    let raw = Rides::parse(RidesStr(data))?;
    Ok(RidesInstance::from_raw(raw, Cow::Borrowed(id)))
  }
}

pub enum HashCodeRides {}

pub type RidesDataset = DynLayout<HashCodeRides>;

impl Dataset for DynLayout<HashCodeRides> {
  type Instance = RidesInstance;

  fn load_instance(&self, idx: usize) -> Result<Self::Instance> {
    let path = self.path(idx)?;
    let raw = Rides::parse(RidesFmt(path)).context(format!("failed to load {:?}", path))?;
    Ok(RidesInstance::from_raw(raw, self.index_to_name(idx)?))
  }
}

/// Open a directory of `.in` instance files.
pub fn open_dataset(dir: impl AsRef<Path>) -> Result<RidesDataset> {
  DynLayout::new(dir, INSTANCE_PATTERN)
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::tests::scratch_dir;

  const EXAMPLE: &str = "3 4 2 3 2 10
0 0 1 3 2 9
1 2 1 0 0 9
2 0 2 2 0 9
";

  #[test]
  fn typed_instance() -> Result<()> {
    let data = RidesInstance::parse_str("a_example", EXAMPLE)?;
    assert_eq!(data.id, "a_example");
    assert_eq!((data.rows, data.cols, data.fleet_size, data.bonus, data.max_time), (3, 4, 2, 2, 10));
    let ids: Vec<_> = data.rides.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(data.rides[1], RideRequest { id: 1, start: (1, 2), finish: (1, 0), start_time: 0, finish_time: 9 });
    Ok(())
  }

  #[test]
  fn load_from_dataset() -> Result<()> {
    let dir = scratch_dir("rides");
    std::fs::write(dir.join("a_example.in"), EXAMPLE)?;
    std::fs::write(dir.join("z_broken.in"), "3 4 2")?;

    let dset = open_dataset(&dir)?;
    let data = dset.load_instance_by_name("a_example")?;
    assert_eq!(data.id, "a_example");
    assert_eq!(data.rides.len(), 3);
    assert_eq!(data, RidesInstance::load(dir.join("a_example.in"))?);
    assert!(dset.load_instance_by_name("z_broken").is_err());
    assert!(dset.load_instance_by_name("b_missing").is_err());
    Ok(())
  }
}
