//! Field coercion for loosely-typed request bodies.
//!
//! Clients send JSON where numbers may arrive as strings ("42.50") and
//! optional fields may be null or absent. Required fields that cannot be
//! coerced are rejected with `InvalidArgument` instead of being stored as
//! numeric garbage.

use crate::error::ApiError;
use serde_json::Value;

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn require_f64(body: &Value, field: &str) -> Result<f64, ApiError> {
    body.get(field)
        .and_then(as_f64)
        .ok_or_else(|| ApiError::InvalidArgument(format!("Field '{field}' must be a number")))
}

pub fn require_i64(body: &Value, field: &str) -> Result<i64, ApiError> {
    body.get(field)
        .and_then(as_i64)
        .ok_or_else(|| ApiError::InvalidArgument(format!("Field '{field}' must be an integer")))
}

/// Null and absent both mean "not provided"; anything present must parse.
pub fn opt_f64(body: &Value, field: &str) -> Result<Option<f64>, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => as_f64(v)
            .map(Some)
            .ok_or_else(|| ApiError::InvalidArgument(format!("Field '{field}' must be a number"))),
    }
}

pub fn require_string(body: &Value, field: &str) -> Result<String, ApiError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        // a bare number is rendered, matching loose client serializers
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ApiError::InvalidArgument(format!(
            "Field '{field}' is required"
        ))),
    }
}

/// Optional text field, empty string when absent or null.
pub fn opt_string(body: &Value, field: &str) -> String {
    match body.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// A person-ish field ("person", "paidBy", "owner") falling back to the
/// caller's email, then to "Me".
pub fn string_or_caller(body: &Value, field: &str, email: Option<&str>) -> String {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => email.unwrap_or("Me").to_string(),
    }
}

/// Javascript-style truthiness, for the funds `enabled` flag.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// `Number(x) || 0` semantics: anything non-numeric becomes 0.
pub fn f64_or_zero(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Bool(true)) => 1.0,
        Some(v) => as_f64(v).unwrap_or(0.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_accept_numeric_strings() {
        let body = json!({"amount": "42.50", "year": 2024, "month": "3"});
        assert_eq!(require_f64(&body, "amount").unwrap(), 42.5);
        assert_eq!(require_i64(&body, "year").unwrap(), 2024);
        assert_eq!(require_i64(&body, "month").unwrap(), 3);
    }

    #[test]
    fn non_numeric_required_field_is_rejected() {
        let body = json!({"amount": "a lot"});
        assert!(matches!(
            require_f64(&body, "amount"),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            require_f64(&body, "missing"),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            require_f64(&json!({"amount": null}), "amount"),
            Err(ApiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn optional_number_distinguishes_absent_from_malformed() {
        assert_eq!(opt_f64(&json!({}), "returnPercent").unwrap(), None);
        assert_eq!(
            opt_f64(&json!({"returnPercent": null}), "returnPercent").unwrap(),
            None
        );
        assert_eq!(
            opt_f64(&json!({"returnPercent": "7.5"}), "returnPercent").unwrap(),
            Some(7.5)
        );
        assert!(opt_f64(&json!({"returnPercent": "high"}), "returnPercent").is_err());
    }

    #[test]
    fn strings_and_defaults() {
        let body = json!({"title": "Groceries", "notes": null});
        assert_eq!(require_string(&body, "title").unwrap(), "Groceries");
        assert_eq!(opt_string(&body, "notes"), "");
        assert_eq!(opt_string(&body, "absent"), "");
        assert!(require_string(&body, "category").is_err());
    }

    #[test]
    fn person_falls_back_to_email_then_me() {
        let body = json!({"person": "Bob"});
        assert_eq!(string_or_caller(&body, "person", Some("a@b.c")), "Bob");
        assert_eq!(string_or_caller(&json!({}), "person", Some("a@b.c")), "a@b.c");
        assert_eq!(string_or_caller(&json!({}), "person", None), "Me");
        assert_eq!(
            string_or_caller(&json!({"person": ""}), "person", None),
            "Me"
        );
    }

    #[test]
    fn fund_field_coercion() {
        assert!(truthy(Some(&json!(true))));
        assert!(truthy(Some(&json!(1))));
        assert!(truthy(Some(&json!("yes"))));
        assert!(!truthy(Some(&json!(""))));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(None));

        assert_eq!(f64_or_zero(Some(&json!("500"))), 500.0);
        assert_eq!(f64_or_zero(Some(&json!("not a number"))), 0.0);
        assert_eq!(f64_or_zero(None), 0.0);
        assert_eq!(f64_or_zero(Some(&json!(true))), 1.0);
    }
}
