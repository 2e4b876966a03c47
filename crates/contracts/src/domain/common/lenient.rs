//! Lenient field decoders.
//!
//! The backend serializes decimals as strings ("50000.00") in some endpoints
//! and as numbers in others, and sends `null` for fields it has no value for.
//! These helpers accept all of those shapes so a single odd row never fails
//! the whole list.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

/// Number or numeric string; missing/null/garbage => 0.0
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).unwrap_or(0.0))
}

/// Number or numeric string; missing/null/garbage => None
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Integer or numeric string; missing/null/garbage => 0
pub fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64).unwrap_or(0))
}

/// Integer or numeric string; missing/null/garbage => None
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

/// String, number or bool rendered as text; null => None
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "f64_or_zero")]
        harga: f64,
        #[serde(default, deserialize_with = "opt_i64")]
        id_cabang: Option<i64>,
        #[serde(default, deserialize_with = "opt_string")]
        status: Option<String>,
    }

    #[test]
    fn accepts_strings_numbers_and_nulls() {
        let row: Row =
            serde_json::from_str(r#"{"harga":"15000.00","id_cabang":"3","status":1}"#).unwrap();
        assert_eq!(row.harga, 15000.0);
        assert_eq!(row.id_cabang, Some(3));
        assert_eq!(row.status.as_deref(), Some("1"));

        let row: Row = serde_json::from_str(r#"{"harga":null,"id_cabang":null}"#).unwrap();
        assert_eq!(row.harga, 0.0);
        assert_eq!(row.id_cabang, None);
        assert_eq!(row.status, None);

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.harga, 0.0);
    }
}
