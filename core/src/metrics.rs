use log::warn;
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static TRAININGS_PROCESSED: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("trainings_processed_total", "Antall behandlede treningsøkter"),
        &["workout_type"],
    )
    .expect("gyldig metrikk-definisjon");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("metrikk registreres én gang");
    c
});

static TRAININGS_REJECTED: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("training_rejected_total", "Antall avviste sensorpakker"),
        &["reason"],
    )
    .expect("gyldig metrikk-definisjon");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("metrikk registreres én gang");
    c
});

pub fn inc_processed(type_name: &str) {
    TRAININGS_PROCESSED.with_label_values(&[type_name]).inc();
}

pub fn inc_rejected(reason: &str) {
    TRAININGS_REJECTED.with_label_values(&[reason]).inc();
}

pub fn processed_count(type_name: &str) -> u64 {
    TRAININGS_PROCESSED.with_label_values(&[type_name]).get()
}

pub fn rejected_count(reason: &str) -> u64 {
    TRAININGS_REJECTED.with_label_values(&[reason]).get()
}

/// Prometheus tekstformat for alle tellere.
pub fn gather_text() -> String {
    // Sørg for at begge tellere er registrert før gather
    Lazy::force(&TRAININGS_PROCESSED);
    Lazy::force(&TRAININGS_REJECTED);

    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buf) {
        warn!("kunne ikke kode metrikker: {e}");
        return String::new();
    }
    match String::from_utf8(buf) {
        Ok(text) => text,
        Err(e) => {
            warn!("metrikk-utskrift er ikke gyldig UTF-8: {e}");
            String::new()
        }
    }
}
