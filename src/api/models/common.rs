use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status envelope used by the add-and-earn provider
#[derive(Debug, Serialize)]
pub struct StatusEnvelope<T> {
    pub status: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> StatusEnvelope<T> {
    pub fn ok(msg: &str, data: Option<T>) -> Self {
        Self {
            status: 1,
            msg: msg.to_string(),
            data,
        }
    }
}

/// Deserialize an optional echo field so that an explicit `null` stays
/// `Some(Value::Null)`. Pair with `#[serde(default)]` so a missing field
/// is `None`.
pub fn echo_field<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Render an echoed request field the way it is interpolated into URLs:
/// strings verbatim, other JSON values as JSON text, absent as `undefined`.
pub fn interpolate(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate(Some(&json!("ORD123"))), "ORD123");
        assert_eq!(interpolate(Some(&json!(42))), "42");
        assert_eq!(interpolate(Some(&json!(null))), "null");
        assert_eq!(interpolate(None), "undefined");
    }

    #[derive(Debug, Default, Deserialize)]
    struct Echo {
        #[serde(default, deserialize_with = "echo_field")]
        order_sn: Option<Value>,
    }

    #[test]
    fn test_echo_field_keeps_explicit_null() {
        let echo: Echo = serde_json::from_value(json!({ "order_sn": null })).unwrap();
        assert_eq!(echo.order_sn, Some(Value::Null));

        let echo: Echo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(echo.order_sn, None);
    }

    #[test]
    fn test_envelope_omits_missing_data() {
        let envelope: StatusEnvelope<()> = StatusEnvelope::ok("ok", None);
        assert_eq!(
            serde_json::to_value(envelope).unwrap(),
            json!({ "status": 1, "msg": "ok" })
        );
    }
}
