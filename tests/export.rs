use chrono::NaiveDate;
use glide_planner::export::{self, records};
use glide_planner::route::{
    Airport, Algorithm, Catalog, FlightConfig, FlightParameters, FlightPlan, Point, plan_flight,
};
use tempfile::tempdir;

fn plan_departing_at(h: u32, m: u32) -> FlightPlan {
    let catalog: Catalog = [
        Airport::new("SRC", "Alpha", "Testland", Point::new(0.0, 0.0)),
        Airport::new("MID", "Bravo", "Testland", Point::new(0.0, 5.0)),
        Airport::new("DST", "Charlie", "Testland", Point::new(0.0, 10.0)),
    ]
    .into_iter()
    .collect();
    let departure = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap();
    let config = FlightConfig {
        start: catalog.get("SRC").unwrap().clone(),
        destination: catalog.get("DST").unwrap().clone(),
        parameters: FlightParameters::new(600.0, 800.0, departure).unwrap(),
        algorithm: Algorithm::GreedyNearest,
        step_km: None,
    };
    plan_flight(&config, &catalog).unwrap()
}

#[test]
fn text_lines_list_airport_and_passing_time() {
    let plan = plan_departing_at(0, 0);
    let mut buf: Vec<u8> = Vec::new();
    export::text::write_plan(&mut buf, &plan).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "SRC Alpha Testland 0.0000 0.0000 00:00:00\n\
         MID Bravo Testland 5.0000 0.0000 00:41:37\n\
         DST Charlie Testland 10.0000 0.0000 01:23:15\n"
    );
}

#[test]
fn text_lines_mark_passing_on_a_later_day() {
    let plan = plan_departing_at(23, 30);
    let departure = plan.parameters.departure();
    let lines: Vec<_> = plan
        .landings
        .iter()
        .map(|landing| export::text::format_line(landing, departure))
        .collect();
    assert_eq!(lines[0], "SRC Alpha Testland 0.0000 0.0000 23:30:00");
    assert_eq!(lines[1], "MID Bravo Testland 5.0000 0.0000 00:11:37 +1d");
    assert!(lines[2].ends_with("00:53:15 +1d"), "{}", lines[2]);
}

#[test]
fn csv_export_reads_back_into_records() {
    let plan = plan_departing_at(0, 0);
    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.csv");
    {
        let mut writer = export::writer_for_path(&path).unwrap();
        export::csv::write_plan(writer.as_mut(), &plan).unwrap();
    }

    let rows = export::csv::read_records(&path).unwrap();
    assert_eq!(rows, records(&plan));
    assert_eq!(rows[1].identifier, "MID");
    assert_eq!(rows[1].passing_at, "2024-03-01T00:41:37");
    assert_eq!(rows[1].along_route_km, 555.0);
    assert_eq!(rows[2].sequence, 2);
    assert!(rows.iter().all(|r| r.glide_range_km == 600.0));
}

#[test]
fn json_export_carries_route_metadata() {
    let plan = plan_departing_at(0, 0);
    let mut buf: Vec<u8> = Vec::new();
    export::json::write_plan(&mut buf, &plan).unwrap();
    let json = String::from_utf8(buf).unwrap();
    assert!(json.contains("\"start\": \"SRC\""), "{json}");
    assert!(json.contains("\"destination\": \"DST\""));
    assert!(json.contains("\"algorithm\": \"greedy-nearest\""));
    assert!(json.contains("\"departure\": \"2024-03-01T00:00:00\""));
    assert!(json.contains("\"passing_time\": \"00:41:37\""));
}
