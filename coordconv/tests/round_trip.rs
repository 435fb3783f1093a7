use coordconv::{
    format_dd, format_dm, format_dms, parse_pair_to_dd, parse_to_degree_value, round_trip, Axis,
    ConvertOptions, DegreeValue, Notation, OutOfRange, ParseError, PrecisionSettings,
    Sexagesimal,
};
use pretty_assertions::assert_eq;

const SLACK: f64 = 1e-12;

/// Evenly spread samples over the whole globe, both bounds included
fn samples() -> impl Iterator<Item = (f64, f64)> {
    let n = 240;
    (0..=n).map(move |i| {
        let t = f64::from(i) / f64::from(n);
        let lat = -90.0 + 180.0 * t;
        // a different phase for the longitude to avoid the symmetric pairs
        let lon = -180.0 + 360.0 * ((t * 7.0).fract() + 0.000_173 * t).min(1.0);
        (lat, lon)
    })
}

fn values(lat: f64, lon: f64) -> [DegreeValue; 2] {
    let (lat, lon) = parse_pair_to_dd(lat, lon).unwrap();
    [lat, lon]
}

#[test]
fn exact_without_rounding() {
    for (lat, lon) in samples() {
        for value in values(lat, lon) {
            let dm = value.to_dm(ConvertOptions::full()).to_degree_value();
            let dms = value.to_dms(ConvertOptions::full()).to_degree_value();
            assert!(dm.drift(value) < 1e-9, "DM drift of {value:?}");
            assert!(dms.drift(value) < 1e-9, "DMS drift of {value:?}");
        }
    }
}

#[test]
fn drift_is_bounded_by_precision() {
    for p in 1..=8 {
        let settings = PrecisionSettings::new(p, p, p);
        let half_unit = 0.5 * 10_f64.powi(-i32::from(p));

        for (lat, lon) in samples() {
            let report = round_trip(lat, lon, &settings).unwrap();
            let limits = [
                (Notation::DecimalDegrees, half_unit),
                (Notation::DegreesMinutes, half_unit / 60.0),
                (Notation::DegreesMinutesSeconds, half_unit / 3600.0),
            ];

            for (notation, limit) in limits {
                let conversion = report.get(notation).as_ref().unwrap();
                let (lat_drift, lon_drift) = conversion.drift;
                assert!(
                    lat_drift <= limit + SLACK && lon_drift <= limit + SLACK,
                    "{notation} drift ({lat_drift}, {lon_drift}) of ({lat}, {lon}) at precision {p}"
                );
            }
        }
    }
}

#[test]
fn formatting_is_idempotent() {
    for p in 0..=8 {
        let options = ConvertOptions::with_decimals(p);

        for (lat, lon) in samples() {
            for value in values(lat, lon) {
                let axis = value.axis();

                let dd = format_dd(value, p).unwrap();
                let again = parse_to_degree_value(dd.as_str(), axis).unwrap();
                assert_eq!(format_dd(again, p).unwrap(), dd);

                let dm = format_dm(value.to_dm(options), p).unwrap();
                let again = parse_to_degree_value(dm.as_str(), axis).unwrap();
                assert_eq!(format_dm(again.to_dm(options), p).unwrap(), dm);

                let dms = format_dms(value.to_dms(options), p).unwrap();
                let again = parse_to_degree_value(dms.as_str(), axis).unwrap();
                assert_eq!(format_dms(again.to_dms(options), p).unwrap(), dms);
            }
        }
    }
}

#[test]
fn tiny_negative_prints_as_positive_zero() {
    let value = DegreeValue::latitude(-0.000_001).unwrap();
    let dd = format_dd(value, 2).unwrap();
    assert_eq!(dd, "0.00° N");

    let again = parse_to_degree_value(dd.as_str(), Axis::Latitude).unwrap();
    assert!(again.degrees().is_sign_positive());
    assert_eq!(format_dd(again, 2).unwrap(), dd);

    let southern = parse_to_degree_value("0.00° S", Axis::Latitude).unwrap();
    assert_eq!(format_dd(southern, 2).unwrap(), dd);
}

#[test]
fn negative_zero_sample() {
    let report = round_trip(-0.0, -0.0, &PrecisionSettings::default()).unwrap();
    assert_eq!(report.input_display(), "0.00000, 0.00000");
    assert_eq!(
        report.display(Notation::DecimalDegrees),
        "0.00000° N, 0.00000° E"
    );
    assert_eq!(
        report.display(Notation::DegreesMinutes),
        "0° 0.00000' N, 0° 0.00000' E"
    );
    assert_eq!(
        report.display(Notation::DegreesMinutesSeconds),
        "0° 0' 0.00000\" N, 0° 0' 0.00000\" E"
    );
}

#[test]
fn parser_rejections() {
    assert_eq!(
        parse_to_degree_value("10° 60' N", Axis::Latitude),
        Err(ParseError::Range(OutOfRange::ArcMinutes))
    );
    assert_eq!(
        parse_to_degree_value("10° 0' 61\" N", Axis::Latitude),
        Err(ParseError::Range(OutOfRange::ArcSeconds))
    );
    assert_eq!(
        parse_to_degree_value(91.0, Axis::Latitude),
        Err(ParseError::Range(OutOfRange::Latitude))
    );
    assert_eq!(
        parse_to_degree_value(-181.0, Axis::Longitude),
        Err(ParseError::Range(OutOfRange::Longitude))
    );
    assert_eq!(
        parse_to_degree_value(f64::INFINITY, Axis::Longitude),
        Err(ParseError::NotFinite)
    );
    assert_eq!(
        parse_to_degree_value(f64::NAN, Axis::Latitude),
        Err(ParseError::NotFinite)
    );
    assert!(matches!(
        parse_to_degree_value("10° -5'", Axis::Latitude),
        Err(ParseError::Notation(_))
    ));
}

#[test]
fn salt_spring_island() {
    let report = round_trip(48.816_662, -123.508_873, &PrecisionSettings::default()).unwrap();
    assert_eq!(report.input_display(), "48.81666, -123.50887");

    let dd = report.dd.as_ref().unwrap();
    assert_eq!(
        dd.display,
        ("48.81666° N".to_string(), "123.50887° W".to_string())
    );

    let dm = report.dm.as_ref().unwrap();
    assert_eq!(dm.display.0, "48° 48.99972' N");
    let (lat, lon) = dm.position();
    assert!((lat - 48.816_662).abs() < 1e-5);
    assert!((lon + 123.508_873).abs() < 1e-5);

    assert_eq!(
        report.display(Notation::DegreesMinutesSeconds),
        "48° 48' 59.98320\" N, 123° 30' 31.94280\" W"
    );
}

#[test]
fn out_of_bounds_sample() {
    let settings = PrecisionSettings::default();
    assert!(round_trip(-90.5, 0.0, &settings).is_err());
    assert!(round_trip(0.0, 180.000_1, &settings).is_err());
    assert!(round_trip(-90.0, 180.0, &settings).is_ok());
}

#[test]
fn precision_fields_from_user_input() {
    let settings = PrecisionSettings::from_fields("2", "-4", "x");
    let report = round_trip(-33.45, 70.666_667, &settings).unwrap();
    assert_eq!(report.display(Notation::DecimalDegrees), "33.45° S, 70.67° E");
    assert_eq!(
        report.display(Notation::DegreesMinutes),
        "33° 27.0' S, 70° 40.0' E"
    );
    assert_eq!(
        report.display(Notation::DegreesMinutesSeconds),
        "33° 27' 0.00000\" S, 70° 40' 0.00120\" E"
    );
}
