// core/tests/test_storage.rs
use std::fs;

use workout_core::{default_packages, load_packages, save_packages, WorkoutError};

#[test]
fn test_save_and_load_packages() {
    let path = "tests/tmp_packages.json";
    let _ = fs::remove_file(path);

    let packages = default_packages();
    save_packages(&packages, path).expect("kunne ikke lagre pakker");

    let loaded = load_packages(path).expect("kunne ikke laste pakker");
    assert_eq!(loaded, packages);

    fs::remove_file(path).ok();
}

#[test]
fn test_load_tuple_form() {
    let path = "tests/tmp_packages_tuple.json";
    fs::write(path, r#"[["SWM", [720, 1, 80, 25, 40]], {"type": "RUN", "data": [15000, 1, 75]}]"#)
        .unwrap();

    let loaded = load_packages(path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].workout_type, "SWM");
    assert_eq!(loaded[1].data, vec![15000.0, 1.0, 75.0]);

    fs::remove_file(path).ok();
}

#[test]
fn test_load_reports_path_of_bad_entry() {
    let path = "tests/tmp_packages_bad.json";
    fs::write(path, r#"[{"workout_type": "RUN", "data": [15000, 1, 75]}, {"workout_type": "RUN"}]"#)
        .unwrap();

    let err = load_packages(path).unwrap_err();
    match err {
        WorkoutError::Parse(e) => assert!(e.path().to_string().starts_with("[1]"), "sti: {}", e.path()),
        other => panic!("uventet feil: {other:?}"),
    }

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_packages("tests/finnes_ikke.json").unwrap_err();
    assert!(matches!(err, WorkoutError::Io(_)));
}
