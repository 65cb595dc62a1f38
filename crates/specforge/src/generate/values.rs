//! Per-datatype leaf value synthesis.

use chrono::{Duration, Utc};

use crate::parse::normalize::base_data_type;

use super::record::SampleValue;

/// Synthesize a value for a leaf by datatype dispatch.
///
/// The base type is the datatype with any "(<digits>)" length suffix
/// stripped, lowercased. Unrecognized or absent types fall back to the
/// "sample_<name>" placeholder, so generation never fails on a strange
/// spelling.
pub fn value_for_type(
    rng: &mut fastrand::Rng,
    data_type: Option<&str>,
    name: &str,
) -> SampleValue {
    let Some(raw) = data_type else {
        return placeholder(name);
    };
    if raw.trim().is_empty() {
        return placeholder(name);
    }

    match base_data_type(raw).as_str() {
        "string" | "text" => placeholder(name),
        "integer" | "int" | "long" | "numeric" => SampleValue::Integer(rng.i64(1..1000)),
        "decimal" | "double" | "float" | "number" => {
            SampleValue::Float((rng.f64() * 1000.0 * 100.0).round() / 100.0)
        }
        "boolean" | "bool" => SampleValue::Boolean(rng.bool()),
        "date" => {
            let day = Utc::now() - Duration::days(rng.i64(0..365));
            SampleValue::String(day.format("%Y-%m-%d").to_string())
        }
        "datetime" => {
            let moment = Utc::now() - Duration::days(rng.i64(0..365));
            SampleValue::String(moment.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        }
        "time" => SampleValue::String(Utc::now().format("%H:%M:%S").to_string()),
        "guid" | "uuid" => SampleValue::String(random_uuid(rng)),
        _ => placeholder(name),
    }
}

fn placeholder(name: &str) -> SampleValue {
    SampleValue::String(format!("sample_{name}"))
}

/// A v4-layout UUID built from RNG-drawn bytes.
///
/// Drawing from the call-scoped generator keeps seeded runs byte-identical
/// while still yielding a unique identifier per draw.
fn random_uuid(rng: &mut fastrand::Rng) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(7)
    }

    #[test]
    fn test_string_placeholder() {
        let mut r = rng();
        assert_eq!(
            value_for_type(&mut r, Some("String (50)"), "city").as_str(),
            Some("sample_city")
        );
        assert_eq!(
            value_for_type(&mut r, Some("text"), "note").as_str(),
            Some("sample_note")
        );
    }

    #[test]
    fn test_unknown_and_missing_types_fall_back() {
        let mut r = rng();
        assert_eq!(
            value_for_type(&mut r, Some("Grouping"), "wrapper").as_str(),
            Some("sample_wrapper")
        );
        assert_eq!(value_for_type(&mut r, None, "x").as_str(), Some("sample_x"));
        assert_eq!(
            value_for_type(&mut r, Some("  "), "y").as_str(),
            Some("sample_y")
        );
    }

    #[test]
    fn test_integer_range() {
        let mut r = rng();
        for _ in 0..100 {
            match value_for_type(&mut r, Some("Long (15)"), "n") {
                SampleValue::Integer(v) => assert!((1..1000).contains(&v)),
                other => panic!("expected integer, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decimal_two_places() {
        let mut r = rng();
        for _ in 0..100 {
            match value_for_type(&mut r, Some("Decimal"), "amount") {
                SampleValue::Float(v) => {
                    assert!((0.0..1000.0).contains(&v));
                    let scaled = v * 100.0;
                    assert!((scaled - scaled.round()).abs() < 1e-9);
                }
                other => panic!("expected float, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_boolean() {
        let mut r = rng();
        assert!(matches!(
            value_for_type(&mut r, Some("bool"), "flag"),
            SampleValue::Boolean(_)
        ));
    }

    #[test]
    fn test_date_shape() {
        let mut r = rng();
        let value = value_for_type(&mut r, Some("Date"), "d");
        let text = value.as_str().unwrap();
        assert!(chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_datetime_shape() {
        let mut r = rng();
        let value = value_for_type(&mut r, Some("DateTime"), "ts");
        let text = value.as_str().unwrap();
        assert!(text.ends_with('Z'));
        assert!(chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%SZ").is_ok());
    }

    #[test]
    fn test_time_shape() {
        let mut r = rng();
        let value = value_for_type(&mut r, Some("Time"), "t");
        assert!(chrono::NaiveTime::parse_from_str(value.as_str().unwrap(), "%H:%M:%S").is_ok());
    }

    #[test]
    fn test_uuid_deterministic_per_seed() {
        let mut a = fastrand::Rng::with_seed(11);
        let mut b = fastrand::Rng::with_seed(11);
        let ua = value_for_type(&mut a, Some("uuid"), "id");
        let ub = value_for_type(&mut b, Some("uuid"), "id");
        assert_eq!(ua, ub);

        let next = value_for_type(&mut a, Some("uuid"), "id");
        assert_ne!(ua, next);
        assert!(uuid::Uuid::parse_str(ua.as_str().unwrap()).is_ok());
    }
}
