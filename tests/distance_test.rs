use station_finder_service::libraries::distance::{distance_km, rank_by_distance};
use station_finder_service::models::{Coordinate, Station};

#[test]
fn distance_to_self_is_zero() {
    for p in [
        Coordinate::new(0.0, 0.0),
        Coordinate::new(37.376, -122.034),
        Coordinate::new(-90.0, 180.0),
        Coordinate::new(89.999, -179.999),
    ] {
        assert_eq!(distance_km(&p, &p), 0.0);
    }
}

#[test]
fn distance_is_symmetric() {
    let points = [
        Coordinate::new(37.376, -122.034),
        Coordinate::new(48.8580, 2.3514),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(0.0, 180.0),
    ];

    for p in &points {
        for q in &points {
            let forward = distance_km(p, q);
            let backward = distance_km(q, p);
            assert!(
                (forward - backward).abs() < 1e-9,
                "asymmetric distance between {:?} and {:?}",
                p,
                q
            );
        }
    }
}

#[test]
fn one_degree_of_latitude_is_about_111_km() {
    // Along a meridian the great-circle distance is R * delta_lat
    let d = distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 0.0));
    assert!((d - 111.19).abs() < 0.01, "got {}", d);
}

#[test]
fn short_hop_north_is_about_one_km() {
    // 0.01 degrees north of the default map center
    let origin = Coordinate::new(37.376, -122.034);
    let target = Coordinate::new(37.386, -122.034);
    let d = distance_km(&origin, &target);
    assert!((d - 1.11).abs() < 0.01, "got {}", d);
}

#[test]
fn antipodal_points_are_half_the_circumference_apart() {
    let d = distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
    assert!(d.is_finite());
    assert!((d - 20015.0).abs() < 1.0, "got {}", d);
}

#[test]
fn agrees_with_the_geo_crate() {
    use geo::{HaversineDistance, Point};

    // geo pins the 6371008.8 m mean radius, ours is 6371 km, so compare
    // with a relative tolerance rather than an absolute one.
    let pairs = [
        (
            Coordinate::new(37.7749, -122.4194),
            Coordinate::new(37.4419, -122.1430),
        ),
        (
            Coordinate::new(48.8580, 2.3514),
            Coordinate::new(51.5052, -0.1250),
        ),
        (
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(35.6762, 139.6503),
        ),
    ];

    for (p, q) in pairs {
        let ours_m = distance_km(&p, &q) * 1000.0;
        let theirs_m = Point::new(p.longitude, p.latitude)
            .haversine_distance(&Point::new(q.longitude, q.latitude));
        let relative = (ours_m - theirs_m).abs() / theirs_m;
        assert!(relative < 1e-5, "relative error {} for {:?}", relative, p);
    }
}

#[test]
fn ranking_an_empty_list_is_empty() {
    let origin = Coordinate::new(37.376, -122.034);
    assert!(rank_by_distance(&origin, Vec::new()).is_empty());
}

#[test]
fn ranking_annotates_without_reordering() {
    let origin = Coordinate::new(37.376, -122.034);

    // Relevance order from the search service, which is not distance order
    let stations = vec![
        Station::new("Chevron", "Sunnyvale", Coordinate::new(37.40, -122.034)),
        Station::new("Shell", "Cupertino", Coordinate::new(37.377, -122.034)),
        Station::new("Arco", "Mountain View", Coordinate::new(37.39, -122.034)),
    ];

    let ranked = rank_by_distance(&origin, stations);

    assert_eq!(ranked.len(), 3);
    let titles: Vec<&str> = ranked.iter().map(|r| r.station.title.as_str()).collect();
    assert_eq!(titles, vec!["Chevron", "Shell", "Arco"]);

    for entry in &ranked {
        assert_eq!(
            entry.distance_km,
            distance_km(&origin, &entry.station.position)
        );
        assert!(entry.distance_km >= 0.0);
    }

    // The nearest entry is in the middle and must stay there
    assert!(ranked[1].distance_km < ranked[0].distance_km);
    assert!(ranked[1].distance_km < ranked[2].distance_km);
}
