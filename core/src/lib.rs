pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod package;
pub mod physics;
pub mod storage;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use error::WorkoutError;
pub use models::{RunningParams, SwimmingParams, Training, WalkingParams};
pub use package::{default_packages, read_package, Package, WorkoutCode};
pub use storage::{load_packages, save_packages};
pub use types::InfoMessage;
