use workout_core::{read_package, Package, TrainingError, Workout, WorkoutCode};

#[test]
fn every_code_builds_its_workout() {
    let cases: [(&str, Vec<f64>, &str); 3] = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], "Swimming"),
        ("RUN", vec![15000.0, 1.0, 75.0], "Running"),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0], "SportsWalking"),
    ];
    for (code, data, name) in cases {
        let w = read_package(code, &data).unwrap();
        assert_eq!(w.name(), name);
    }

    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        Ok(Workout::SportsWalking(w)) if w.height() == 180.0
    ));
}

#[test]
fn unknown_code_fails() {
    for code in ["", "run", "BIKE", "SWM "] {
        assert_eq!(
            read_package(code, &[1.0, 1.0, 1.0]),
            Err(TrainingError::UnknownWorkoutCode(code.to_string()))
        );
    }
}

#[test]
fn wrong_parameter_count_fails() {
    assert_eq!(
        read_package("RUN", &[15000.0, 1.0]),
        Err(TrainingError::ArityMismatch { code: "RUN", expected: 3, got: 2 })
    );
    assert_eq!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0]),
        Err(TrainingError::ArityMismatch { code: "SWM", expected: 5, got: 4 })
    );
    assert_eq!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]),
        Err(TrainingError::ArityMismatch { code: "WLK", expected: 4, got: 5 })
    );
}

#[test]
fn arity_is_checked_for_all_codes() {
    for code in WorkoutCode::ALL {
        let too_long = vec![1.0; code.arity() + 1];
        assert!(matches!(
            read_package(code.as_str(), &too_long),
            Err(TrainingError::ArityMismatch { .. })
        ));
    }
}

#[test]
fn non_positive_duration_fails() {
    assert_eq!(
        read_package("RUN", &[15000.0, 0.0, 75.0]),
        Err(TrainingError::InvalidDuration(0.0))
    );
    assert_eq!(
        read_package("SWM", &[720.0, -1.0, 80.0, 25.0, 40.0]),
        Err(TrainingError::InvalidDuration(-1.0))
    );
}

#[test]
fn fractional_counts_fail() {
    assert_eq!(
        read_package("RUN", &[150.5, 1.0, 75.0]),
        Err(TrainingError::InvalidCount { field: "action", value: 150.5 })
    );
    assert_eq!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -3.0]),
        Err(TrainingError::InvalidCount { field: "count_pool", value: -3.0 })
    );
}

#[test]
fn package_json_accepts_pair_and_object() {
    let pair: Package = serde_json::from_str(r#"["RUN", [15000, 1, 75]]"#).unwrap();
    let obj: Package =
        serde_json::from_str(r#"{"workout_type": "RUN", "data": [15000, 1, 75]}"#).unwrap();

    assert_eq!(pair.workout_type(), "RUN");
    assert_eq!(pair.data(), obj.data());
    assert_eq!(pair.read().unwrap(), obj.read().unwrap());
}
