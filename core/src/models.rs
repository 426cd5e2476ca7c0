use crate::error::WorkoutError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningParams {
    pub action: u32,      // antall steg
    pub duration_h: f64,  // timer
    pub weight_kg: f64,   // kg
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingParams {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,   // cm
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingParams {
    pub action: u32,        // antall tak
    pub duration_h: f64,
    pub weight_kg: f64,
    pub length_pool_m: u32, // meter
    pub count_pool: u32,    // antall bassenglengder
}

/// En treningsøkt. Lukket sett av varianter; formlene ligger i `physics`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(RunningParams),
    SportsWalking(WalkingParams),
    Swimming(SwimmingParams),
}

impl Training {
    /// Typenavnet som vises i meldingen.
    pub fn type_name(&self) -> &'static str {
        match self {
            Training::Running(_) => "Running",
            Training::SportsWalking(_) => "SportsWalking",
            Training::Swimming(_) => "Swimming",
        }
    }

    pub fn duration_h(&self) -> f64 {
        match self {
            Training::Running(p) => p.duration_h,
            Training::SportsWalking(p) => p.duration_h,
            Training::Swimming(p) => p.duration_h,
        }
    }
}

impl From<RunningParams> for Training {
    fn from(p: RunningParams) -> Self {
        Training::Running(p)
    }
}

impl From<WalkingParams> for Training {
    fn from(p: WalkingParams) -> Self {
        Training::SportsWalking(p)
    }
}

impl From<SwimmingParams> for Training {
    fn from(p: SwimmingParams) -> Self {
        Training::Swimming(p)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Posisjonelle argumenter fra sensorpakken → navngitte felt
// ──────────────────────────────────────────────────────────────────────────────

fn check_arity(workout: &'static str, args: &[f64], expected: usize) -> Result<(), WorkoutError> {
    if args.len() != expected {
        return Err(WorkoutError::ArityMismatch {
            workout,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Heltallsfelt: endelig, ikke-negativ og uten desimaldel.
fn whole(workout: &'static str, field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidArgument { workout, field, value })
    }
}

impl RunningParams {
    pub const FIELDS: [&'static str; 3] = ["action", "duration_h", "weight_kg"];

    /// `[action, duration_h, weight_kg]`
    pub fn from_args(args: &[f64]) -> Result<Self, WorkoutError> {
        const W: &str = "Running";
        check_arity(W, args, Self::FIELDS.len())?;
        Ok(Self {
            action: whole(W, "action", args[0])?,
            duration_h: args[1],
            weight_kg: args[2],
        })
    }
}

impl WalkingParams {
    pub const FIELDS: [&'static str; 4] = ["action", "duration_h", "weight_kg", "height_cm"];

    /// `[action, duration_h, weight_kg, height_cm]`
    pub fn from_args(args: &[f64]) -> Result<Self, WorkoutError> {
        const W: &str = "SportsWalking";
        check_arity(W, args, Self::FIELDS.len())?;
        Ok(Self {
            action: whole(W, "action", args[0])?,
            duration_h: args[1],
            weight_kg: args[2],
            height_cm: args[3],
        })
    }
}

impl SwimmingParams {
    pub const FIELDS: [&'static str; 5] =
        ["action", "duration_h", "weight_kg", "length_pool_m", "count_pool"];

    /// `[action, duration_h, weight_kg, length_pool_m, count_pool]`
    pub fn from_args(args: &[f64]) -> Result<Self, WorkoutError> {
        const W: &str = "Swimming";
        check_arity(W, args, Self::FIELDS.len())?;
        Ok(Self {
            action: whole(W, "action", args[0])?,
            duration_h: args[1],
            weight_kg: args[2],
            length_pool_m: whole(W, "length_pool_m", args[3])?,
            count_pool: whole(W, "count_pool", args[4])?,
        })
    }
}
