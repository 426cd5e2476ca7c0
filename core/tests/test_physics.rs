// core/tests/test_physics.rs
use workout_core::{read_package, RunningParams, SwimmingParams, Training};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn swimming_sample_package() {
    let t = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(t.type_name(), "Swimming");
    assert!(close(t.distance(), 0.9936), "distance {}", t.distance());
    assert!(close(t.mean_speed(), 1.0));
    assert!(close(t.spent_calories(), 336.0));
}

#[test]
fn running_sample_package() {
    let t = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(t.type_name(), "Running");
    assert!(close(t.distance(), 9.75));
    assert!(close(t.mean_speed(), 9.75));
    // (18 * 9.75 - 20) * 75 / 1000 * 60
    assert!(close(t.spent_calories(), 699.75), "kcal {}", t.spent_calories());
}

#[test]
fn walking_sample_package() {
    let t = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(t.type_name(), "SportsWalking");
    assert!(close(t.distance(), 5.85));
    assert!(close(t.mean_speed(), 5.85));
    // 5.85² // 180 = 0 → kun vektleddet teller
    assert!(close(t.spent_calories(), 157.5), "kcal {}", t.spent_calories());
}

#[test]
fn running_doubling_duration_halves_speed() {
    let one = Training::Running(RunningParams { action: 12000, duration_h: 1.0, weight_kg: 70.0 });
    let two = Training::Running(RunningParams { action: 12000, duration_h: 2.0, weight_kg: 70.0 });

    assert!(close(one.distance(), two.distance()));
    assert!(close(two.mean_speed() * 2.0, one.mean_speed()));
}

#[test]
fn swimming_distance_ignores_pool_and_speed_ignores_strokes() {
    let base = SwimmingParams {
        action: 720,
        duration_h: 1.5,
        weight_kg: 80.0,
        length_pool_m: 25,
        count_pool: 40,
    };
    let other_pool = Training::Swimming(SwimmingParams { length_pool_m: 50, count_pool: 7, ..base });
    let other_strokes = Training::Swimming(SwimmingParams { action: 3, ..base });
    let base = Training::Swimming(base);

    assert!(close(base.distance(), other_pool.distance()));
    assert!(close(base.mean_speed(), other_strokes.mean_speed()));
    assert!(!close(base.mean_speed(), other_pool.mean_speed()));
}

#[test]
fn non_negative_inputs_give_non_negative_distance_and_speed() {
    let packages: [(&str, &[f64]); 6] = [
        ("RUN", &[0.0, 0.5, 60.0][..]),
        ("RUN", &[20000.0, 2.0, 90.0][..]),
        ("WLK", &[0.0, 1.0, 70.0, 170.0][..]),
        ("WLK", &[15000.0, 3.0, 70.0, 170.0][..]),
        ("SWM", &[0.0, 1.0, 70.0, 0.0, 0.0][..]),
        ("SWM", &[1000.0, 0.75, 70.0, 50.0, 30.0][..]),
    ];
    for (code, data) in packages {
        let t = read_package(code, data).unwrap();
        assert!(t.distance() >= 0.0, "{code}: {}", t.distance());
        assert!(t.mean_speed() >= 0.0, "{code}: {}", t.mean_speed());
    }
}

#[test]
fn derived_values_are_recomputed_identically() {
    let t = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(t.show_training_info(), t.show_training_info());
}

#[test]
fn walking_floor_term_follows_remainder_floor_division() {
    // v = 1.0, høyde 0.1: 1.0 // 0.1 = 9 (ikke 10)
    let t = read_package("WLK", &[1000.0, 0.65, 75.0, 0.1]).unwrap();
    assert!((t.mean_speed() - 1.0).abs() < 1e-12);
    assert!(
        t.show_training_info().get_message().ends_with("Потрачено ккал: 865.800."),
        "{}",
        t.show_training_info().get_message()
    );
}
