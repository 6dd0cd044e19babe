//! Schema-driven argument coercion.
//!
//! Model-emitted arguments are untrusted and frequently stringly-typed.
//! This pass converts the fields a tool declares into their expected
//! representation and leaves everything else alone. It never errors:
//! a value that cannot be coerced passes through unchanged, so the tool
//! operation gets to report a precise domain error instead of the round
//! aborting on a parse failure.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::schema::{ParamKind, ToolDeclaration};

/// Canonical datetime form used in argument maps and the record store.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Coerce an argument map against a tool's declaration.
pub fn coerce_arguments(decl: &ToolDeclaration, args: Map<String, Value>) -> Map<String, Value> {
    args.into_iter()
        .map(|(key, value)| {
            let value = match decl.kind_of(&key) {
                Some(ParamKind::DateTime) => coerce_datetime(value),
                Some(ParamKind::Integer) => coerce_integer(value),
                _ => value,
            };
            (key, value)
        })
        .collect()
}

/// Parse ISO-8601 datetime text, tolerating a trailing UTC "Z" marker and
/// a handful of common variants.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    let bare = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(bare, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(bare, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Render a datetime in the canonical form.
pub fn to_canonical(dt: NaiveDateTime) -> String {
    dt.format(CANONICAL_FORMAT).to_string()
}

/// The current UTC time in the canonical form.
pub fn now_canonical() -> String {
    to_canonical(Utc::now().naive_utc())
}

fn coerce_datetime(value: Value) -> Value {
    if let Value::String(text) = &value {
        if let Some(dt) = parse_datetime(text) {
            return Value::String(to_canonical(dt));
        }
    }
    value
}

fn coerce_integer(value: Value) -> Value {
    if let Value::String(text) = &value {
        if let Ok(n) = text.trim().parse::<i64>() {
            return Value::from(n);
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ParamSpec;
    use serde_json::json;

    static DECL: ToolDeclaration = ToolDeclaration {
        name: "t",
        description: "",
        params: &[
            ParamSpec {
                name: "date",
                kind: ParamKind::DateTime,
                required: true,
                description: "",
            },
            ParamSpec {
                name: "appointment_id",
                kind: ParamKind::Integer,
                required: true,
                description: "",
            },
            ParamSpec {
                name: "name",
                kind: ParamKind::String,
                required: false,
                description: "",
            },
        ],
    };

    fn coerce_one(key: &str, value: Value) -> Value {
        let mut args = Map::new();
        args.insert(key.to_string(), value);
        coerce_arguments(&DECL, args).remove(key).unwrap()
    }

    #[test]
    fn test_datetime_with_and_without_z_are_equivalent() {
        let with_z = coerce_one("date", json!("2025-12-07T14:00:00Z"));
        let without_z = coerce_one("date", json!("2025-12-07T14:00:00"));
        assert_eq!(with_z, json!("2025-12-07T14:00:00"));
        assert_eq!(with_z, without_z);
    }

    #[test]
    fn test_datetime_variants() {
        assert_eq!(
            coerce_one("date", json!("2025-12-07 14:30:00")),
            json!("2025-12-07T14:30:00")
        );
        assert_eq!(
            coerce_one("date", json!("2025-12-07")),
            json!("2025-12-07T00:00:00")
        );
        assert_eq!(
            coerce_one("date", json!("2025-12-07T14:00:00+02:00")),
            json!("2025-12-07T12:00:00")
        );
    }

    #[test]
    fn test_malformed_datetime_passes_through_unchanged() {
        assert_eq!(
            coerce_one("date", json!("mañana a las 3")),
            json!("mañana a las 3")
        );
    }

    #[test]
    fn test_integer_from_string() {
        assert_eq!(coerce_one("appointment_id", json!("42")), json!(42));
        assert_eq!(coerce_one("appointment_id", json!(7)), json!(7));
    }

    #[test]
    fn test_malformed_integer_passes_through_unchanged() {
        assert_eq!(
            coerce_one("appointment_id", json!("cuarenta")),
            json!("cuarenta")
        );
    }

    #[test]
    fn test_undeclared_field_untouched() {
        let mut args = Map::new();
        args.insert("extra".to_string(), json!("2025-12-07T14:00:00Z"));
        let coerced = coerce_arguments(&DECL, args);
        // Not declared, so no datetime normalization happens.
        assert_eq!(coerced.get("extra"), Some(&json!("2025-12-07T14:00:00Z")));
    }
}
