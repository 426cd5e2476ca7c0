use thiserror::Error;

/// Feil fra fabrikken og pakke-innlesingen.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Ukjent treningskode (alt annet enn RUN/WLK/SWM).
    #[error("Некорректное название тренировки.")]
    UnknownWorkoutType(String),

    #[error("{workout}: forventet {expected} argumenter, fikk {got}")]
    ArityMismatch {
        workout: &'static str,
        expected: usize,
        got: usize,
    },

    /// Heltallsfelt (action, lengde/antall bassenglengder) som ikke er et ikke-negativt heltall.
    #[error("{workout}: ugyldig verdi for {field}: {value}")]
    InvalidArgument {
        workout: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("kunne ikke lese pakkefil: {0}")]
    Io(#[from] std::io::Error),

    #[error("ugyldig pakkefil: {0}")]
    Parse(#[from] serde_path_to_error::Error<serde_json::Error>),
}

impl WorkoutError {
    /// Kort etikett for metrikk-labels.
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType(_) => "unknown_workout_type",
            WorkoutError::ArityMismatch { .. } => "arity_mismatch",
            WorkoutError::InvalidArgument { .. } => "invalid_argument",
            WorkoutError::Io(_) => "io",
            WorkoutError::Parse(_) => "parse",
        }
    }
}
