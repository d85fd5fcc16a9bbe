use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/airports.dat");

fn flight_plan() -> Command {
    let mut cmd = Command::cargo_bin("flight_plan").unwrap();
    cmd.args(["--dataset", FIXTURE, "--date", "2024-01-01"]);
    cmd
}

#[test]
fn prints_one_line_per_landing() {
    flight_plan()
        .args(["SRC", "DST", "600", "800", "00:00:00"])
        .assert()
        .success()
        .stdout(
            "SRC Alpha Testland 0.0000 0.0000 00:00:00\n\
             MID Bravo Testland 5.0000 0.0000 00:41:37\n\
             DST Charlie Testland 10.0000 0.0000 01:23:15\n",
        );
}

#[test]
fn identifiers_are_case_insensitive() {
    flight_plan()
        .args(["src", "dst", "600", "800", "08:15:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MID Bravo Testland 5.0000 0.0000 08:56:37"));
}

#[test]
fn algorithm_three_reaches_for_the_destination() {
    flight_plan()
        .args(["SRC", "DST", "600", "800", "00:00:00", "3"])
        .assert()
        .success()
        .stdout(
            "SRC Alpha Testland 0.0000 0.0000 00:00:00\n\
             DST Charlie Testland 10.0000 0.0000 01:23:15\n",
        );
}

#[test]
fn unknown_algorithm_numbers_fall_back_to_greedy() {
    for selector in ["300", "-1", "0"] {
        flight_plan()
            .args(["SRC", "DST", "600", "800", "00:00:00", selector])
            .assert()
            .success()
            .stdout(
                "SRC Alpha Testland 0.0000 0.0000 00:00:00\n\
                 MID Bravo Testland 5.0000 0.0000 00:41:37\n\
                 DST Charlie Testland 10.0000 0.0000 01:23:15\n",
            );
    }
}

#[test]
fn json_output_names_the_algorithm() {
    flight_plan()
        .args(["SRC", "DST", "600", "800", "00:00:00", "2", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\": \"fixed-interval\""))
        .stdout(predicate::str::contains("\"step_km\": 10.0"));
}

#[test]
fn csv_output_is_written_to_the_given_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out/plan.csv");
    flight_plan()
        .args(["SRC", "DST", "600", "800", "23:30:00", "--format", "csv", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let csv = fs::read_to_string(&path).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("sequence,identifier,city,country"));
    assert!(csv.contains("2024-01-02T00:11:37"), "{csv}");
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn insufficient_range_is_reported_as_unsafe() {
    flight_plan()
        .args(["SRC", "DST", "300", "800", "00:00:00"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Flight path is not safe!"))
        .stderr(predicate::str::contains(
            "Emergency range must be increased for safe flight.",
        ));
}

#[test]
fn rejects_malformed_departure_time() {
    flight_plan()
        .args(["SRC", "DST", "600", "800", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'25:00' is not valid"));
}

#[test]
fn rejects_non_positive_range() {
    flight_plan()
        .args(["SRC", "DST", "-600", "800", "00:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("glide range must be a positive number"));
}

#[test]
fn unknown_airport_is_an_error() {
    flight_plan()
        .args(["SRC", "XYZ", "600", "800", "00:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("airport 'XYZ' not found"));
}

#[test]
fn airports_outside_the_region_are_not_loaded() {
    flight_plan()
        .args(["SRC", "OVR", "600", "800", "00:00:00"])
        .assert()
        .failure();

    flight_plan()
        .args(["--region", "A", "OVR", "OVR", "600", "800", "00:00:00"])
        .assert()
        .success()
        .stdout("OVR Echo Overseas 5.0000 0.5000 00:00:00\n");
}

#[test]
fn reports_the_library_version() {
    Command::cargo_bin("flight_plan")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(glide_planner::version()));
}
