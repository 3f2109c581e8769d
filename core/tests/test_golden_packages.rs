use serde::Deserialize;
use workout_core::read_package;

#[derive(Debug, Deserialize)]
struct Row {
    workout_type: String,
    data: String,
    expected: String,
}

fn rows() -> Vec<Row> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/packages.csv");
    let mut rdr = csv::Reader::from_path(path).expect("open packages.csv");
    rdr.deserialize()
        .collect::<Result<Vec<Row>, _>>()
        .expect("bad row in packages.csv")
}

#[test]
fn golden_lines_match() {
    let rows = rows();
    assert!(rows.len() >= 3);

    for row in rows {
        let data: Vec<f64> = row
            .data
            .split_whitespace()
            .map(|x| x.parse().unwrap())
            .collect();
        let workout = read_package(&row.workout_type, &data)
            .unwrap_or_else(|e| panic!("{} {:?}: {e}", row.workout_type, data));
        assert_eq!(workout.show_training_info().get_message(), row.expected);
    }
}
