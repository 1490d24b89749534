use std::path::Path;
use anyhow::{Context, Result};
use instances::dataset::{rides as dset, Dataset};
use tracing::*;

pub mod rides;

pub fn get_instance_by_name(dir: impl AsRef<Path>, name: &str) -> Result<rides::RidesInstance> {
  dset::open_dataset(dir)?.load_instance_by_name(name)
}

pub fn get_instance_by_index(dir: impl AsRef<Path>, idx: usize) -> Result<rides::RidesInstance> {
  dset::open_dataset(dir)?.load_instance(idx)
}

/// Resolve a command-line instance argument: an existing file is loaded directly, anything else
/// is looked up by name in `data_dir`.
#[instrument(level="debug", skip(data_dir))]
pub fn resolve_instance(input: &str, data_dir: Option<&Path>) -> Result<rides::RidesInstance> {
  let path = Path::new(input);
  if path.is_file() {
    return rides::RidesInstance::load(path);
  }
  match data_dir {
    Some(dir) => get_instance_by_name(dir, input)
      .with_context(|| format!("no instance file or dataset entry named {:?}", input)),
    None => Err(anyhow::anyhow!("no such instance file: {:?}", input)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("ridesched-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn resolve_by_path_and_name() -> Result<()> {
    let dir = scratch_dir("resolve");
    let file = dir.join("b_tiny.in");
    std::fs::write(&file, "3 4 1 1 0 10\n0 0 0 3 0 10\n")?;

    let by_path = resolve_instance(file.to_str().unwrap(), None)?;
    let by_name = resolve_instance("b_tiny", Some(&dir))?;
    assert_eq!(by_path, by_name);
    assert_eq!(get_instance_by_index(&dir, 0)?, by_name);
    assert!(resolve_instance("b_tiny", None).is_err());
    assert!(resolve_instance("c_unknown", Some(&dir)).is_err());
    Ok(())
  }
}
