use glide_planner::primitives::geometry::{
    Segment, closest_point_on_segment, distance, in_range, intervals_overlap,
};
use glide_planner::primitives::time::split_hours;
use glide_planner::primitives::units::{deg_to_km, km_to_deg};
use glide_planner::primitives::{Airport, Catalog, Point};

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn distance_is_symmetric_and_scaled() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(distance(a, b), distance(b, a));
    assert_eq!(distance(a, b), 555.0);
    assert_eq!(distance(b, b), 0.0);
    // One degree north is the scale factor itself
    assert_eq!(deg_to_km(1.0), distance(a, Point::new(0.0, 1.0)));
    assert!(approx(km_to_deg(555.0), 5.0, 1e-12));
}

#[test]
fn in_range_includes_the_boundary() {
    let center = Point::new(0.0, 0.0);
    let point = Point::new(3.0, 4.0);
    assert!(in_range(point, center, 555.0));
    assert!(!in_range(point, center, 554.999));
    assert!(in_range(center, center, 0.0));
}

#[test]
fn closest_point_clamps_to_segment_ends() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);

    assert_eq!(closest_point_on_segment(a, b, Point::new(-5.0, 3.0)), a);
    assert_eq!(closest_point_on_segment(a, b, Point::new(15.0, -2.0)), b);

    let interior = closest_point_on_segment(a, b, Point::new(4.0, 7.0));
    assert!(approx(interior.x, 4.0, 1e-12));
    assert!(approx(interior.y, 0.0, 1e-12));
}

#[test]
fn closest_point_on_degenerate_segment_is_its_start() {
    let a = Point::new(2.0, 2.0);
    let p = Point::new(7.0, -1.0);
    assert_eq!(closest_point_on_segment(a, a, p), a);
    assert_eq!(Segment::new(a, a).distance_to(a), 0.0);
}

#[test]
fn segment_coverage_matches_the_glide_circle() {
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

    let (t0, t1) = segment
        .coverage(Point::new(5.0, 0.0), 111.0)
        .expect("centre on the segment is covered");
    assert!(approx(t0, 0.4, 1e-9), "t0 = {t0}");
    assert!(approx(t1, 0.6, 1e-9), "t1 = {t1}");

    // Circle crossing the start is clamped to the segment
    let (t0, t1) = segment.coverage(Point::new(0.0, 0.0), 222.0).unwrap();
    assert_eq!(t0, 0.0);
    assert!(approx(t1, 0.2, 1e-9));

    assert!(segment.coverage(Point::new(5.0, 5.0), 111.0).is_none());
    assert!(segment.coverage(Point::new(-5.0, 0.0), 111.0).is_none());
}

#[test]
fn coverage_intervals_overlap_when_they_touch() {
    assert!(intervals_overlap((0.0, 0.5), (0.5, 1.0)));
    assert!(intervals_overlap((0.2, 0.8), (0.3, 0.4)));
    assert!(!intervals_overlap((0.0, 0.4), (0.41, 1.0)));
}

#[test]
fn touching_glide_circles_share_a_covered_point() {
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(1.2, 0.0));
    let touch = Point::new(0.3, 0.0);
    assert!(in_range(touch, Point::new(0.0, 0.0), 33.3));
    assert!(in_range(touch, Point::new(0.6, 0.0), 33.3));

    let first = segment.coverage(Point::new(0.0, 0.0), 33.3).unwrap();
    let second = segment.coverage(Point::new(0.6, 0.0), 33.3).unwrap();
    assert!(intervals_overlap(first, second), "{first:?} vs {second:?}");
}

#[test]
fn split_hours_floors_to_whole_seconds() {
    let hms = split_hours(0.69375);
    assert_eq!((hms.hours, hms.minutes, hms.seconds), (0, 41, 37));
    assert_eq!(hms.total_seconds(), Some(2497));

    let hms = split_hours(1110.0 / 800.0);
    assert_eq!((hms.hours, hms.minutes, hms.seconds), (1, 23, 15));

    let hms = split_hours(25.5);
    assert_eq!((hms.hours, hms.minutes, hms.seconds), (25, 30, 0));

    assert_eq!(split_hours(-1.0).total_seconds(), Some(0));
    assert_eq!(split_hours(f64::NAN).total_seconds(), Some(0));
}

#[test]
fn catalog_keys_airports_by_identifier() {
    let mut catalog = Catalog::new();
    assert!(catalog.insert(Airport::new("ZRH", "Zurich", "Switzerland", Point::new(8.55, 47.46))));
    assert!(catalog.insert(Airport::new("BSL", "Basel", "Switzerland", Point::new(7.53, 47.59))));
    // Same identifier, different data: rejected
    assert!(!catalog.insert(Airport::new("ZRH", "Elsewhere", "Nowhere", Point::new(0.0, 0.0))));

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("ZRH").map(|a| a.city.as_str()), Some("Zurich"));
    assert_eq!(catalog.find_ignore_case("bsl").map(|a| a.ident.as_str()), Some("BSL"));

    let order: Vec<_> = catalog.iter().map(|a| a.ident.as_str()).collect();
    assert_eq!(order, ["BSL", "ZRH"]);

    assert!(catalog.remove("BSL").is_some());
    assert!(!catalog.contains("BSL"));
}

#[test]
fn airport_display_lists_latitude_before_longitude() {
    let airport = Airport::new("GVA", "Geneva", "Switzerland", Point::new(6.109, 46.238));
    assert_eq!(airport.to_string(), "GVA Geneva Switzerland 46.2380 6.1090");
}
