// core/src/physics.rs
use crate::models::Training;
use crate::types::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;  // meter per km
pub const MIN_IN_H: f64 = 60.0;   // minutter per time
pub const LEN_STEP: f64 = 0.65;   // m per steg (løp/gange)
pub const LEN_STROKE: f64 = 1.38; // m per svømmetak

pub const RUN_CALORIES_MULTIPLIER: f64 = 18.0;
pub const RUN_CALORIES_SHIFT: f64 = 20.0;

pub const WALK_CALORIES_WEIGHT: f64 = 0.035;
pub const WALK_CALORIES_WEIGHT_MULT: f64 = 0.029;

pub const SWIM_CALORIES_SHIFT: f64 = 1.1;
pub const SWIM_CALORIES_MULTIPLIER: f64 = 2.0;

/// Distanse (km) fra antall handlinger og lengde per handling.
#[inline]
pub fn distance_km(action: u32, step_len: f64) -> f64 {
    action as f64 * step_len / M_IN_KM
}

/// Snittfart (km/t) i svømmebasseng: lengde × antall lengder.
#[inline]
pub fn pool_speed_kmh(length_pool_m: u32, count_pool: u32, duration_h: f64) -> f64 {
    let pool_m = length_pool_m as f64 * count_pool as f64;
    pool_m / M_IN_KM / duration_h
}

/// ----- Kalori-formler -----

#[inline]
pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_CALORIES_MULTIPLIER * speed_kmh - RUN_CALORIES_SHIFT) * weight_kg / M_IN_KM
        * (duration_h * MIN_IN_H)
}

/// Gulvdivisjon for flyttall via fmod, slik at `1.0 // 0.1 == 9.0`
/// (ikke `(1.0 / 0.1).floor() == 10.0`).
pub fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let f = div.floor();
    if div - f > 0.5 { f + 1.0 } else { f }
}

/// Gulvdivisjonen (v² // høyde) er en del av formelen og skal ikke fjernes.
#[inline]
pub fn walking_calories(speed_kmh: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    let floored = floor_div(speed_kmh.powi(2), height_cm);
    (WALK_CALORIES_WEIGHT * weight_kg + floored * WALK_CALORIES_WEIGHT_MULT * weight_kg)
        * (duration_h * MIN_IN_H)
}

#[inline]
pub fn swimming_calories(speed_kmh: f64, weight_kg: f64) -> f64 {
    (speed_kmh + SWIM_CALORIES_SHIFT) * SWIM_CALORIES_MULTIPLIER * weight_kg
}

impl Training {
    /// Distanse i km. Ingenting caches; beregnes på nytt ved hvert kall.
    pub fn distance(&self) -> f64 {
        match self {
            Training::Swimming(p) => distance_km(p.action, LEN_STROKE),
            Training::Running(p) => distance_km(p.action, LEN_STEP),
            Training::SportsWalking(p) => distance_km(p.action, LEN_STEP),
        }
    }

    /// Snittfart i km/t. Svømming bruker bassengmål, ikke `distance()`.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Swimming(p) => pool_speed_kmh(p.length_pool_m, p.count_pool, p.duration_h),
            _ => self.distance() / self.duration_h(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        let v = self.mean_speed();
        match self {
            Training::Running(p) => running_calories(v, p.weight_kg, p.duration_h),
            Training::SportsWalking(p) => {
                walking_calories(v, p.weight_kg, p.height_cm, p.duration_h)
            }
            Training::Swimming(p) => swimming_calories(v, p.weight_kg),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.type_name().to_string(),
            duration: self.duration_h(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
