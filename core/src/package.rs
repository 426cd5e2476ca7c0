use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;
use crate::models::{RunningParams, SwimmingParams, Training, WalkingParams};

/// Kode fra sensorpakken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Run,
    Wlk,
    Swm,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [WorkoutCode::Run, WorkoutCode::Wlk, WorkoutCode::Swm];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
            WorkoutCode::Swm => "SWM",
        }
    }

    /// Posisjonell rekkefølge på argumentene.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Run => &RunningParams::FIELDS,
            WorkoutCode::Wlk => &WalkingParams::FIELDS,
            WorkoutCode::Swm => &SwimmingParams::FIELDS,
        }
    }

    pub fn expected_args(&self) -> usize {
        self.field_names().len()
    }

    /// Bygger riktig variant; aritet sjekkes av konstruktøren.
    pub fn build(&self, data: &[f64]) -> Result<Training, WorkoutError> {
        Ok(match self {
            WorkoutCode::Run => RunningParams::from_args(data)?.into(),
            WorkoutCode::Wlk => WalkingParams::from_args(data)?.into(),
            WorkoutCode::Swm => SwimmingParams::from_args(data)?.into(),
        })
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            "SWM" => Ok(WorkoutCode::Swm),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leser data fra sensorene og returnerer riktig treningstype.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let code: WorkoutCode = workout_type.parse()?;
    let training = code.build(data)?;
    debug!("{} → {:?}", code, training);
    Ok(training)
}

// ──────────────────────────────────────────────────────────────────────────────
// Pakke (kode + argumentliste). Godtar objekt eller tuppel i JSON.
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PackageIn")]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object {
        #[serde(alias = "type", alias = "code")]
        workout_type: String,
        data: Vec<f64>,
    },
    Tuple(String, Vec<f64>),
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Object { workout_type, data } | PackageIn::Tuple(workout_type, data) => {
                Package { workout_type, data }
            }
        }
    }
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> Result<Training, WorkoutError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Standard testdata fra sensorene (SWM, RUN, WLK).
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
