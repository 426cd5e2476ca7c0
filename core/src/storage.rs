use std::path::Path;

use log::info;

use crate::error::WorkoutError;
use crate::package::Package;

/// Leser inn sensorpakker fra disk (JSON-liste).
/// Feil i innholdet rapporteres med sti, f.eks. `[1].data[2]`.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>, WorkoutError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let de = &mut serde_json::Deserializer::from_str(&contents);
    let packages: Vec<Package> = serde_path_to_error::deserialize(de)?;
    info!("📂 {} pakker lastet fra {}", packages.len(), path.display());
    Ok(packages)
}

/// Lagrer sensorpakker til disk som JSON (pretty-print).
pub fn save_packages(packages: &[Package], path: impl AsRef<Path>) -> Result<(), WorkoutError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(packages).map_err(std::io::Error::from)?;
    std::fs::write(path, json)?;
    info!("✅ {} pakker lagret til {}", packages.len(), path.display());
    Ok(())
}
