//! Backend response envelope and the typed error every API call returns.
//!
//! Success responses look like `{ "status": "success", "data": ... }`.
//! Paginated responses carry `current_page`, `last_page`, `per_page` and
//! `total` either next to `data` or inside a nested Laravel paginator object.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

pub const STATUS_SUCCESS: &str = "success";

/// Raw envelope as sent by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Server-side pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPagination {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// One fetched page of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub pagination: Option<ServerPagination>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("request rejected: {message}")]
    Rejected { message: String },
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Localized text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "Sesi Anda telah berakhir, silakan masuk kembali".to_string(),
            ApiError::Network(_) => "Tidak dapat terhubung ke server".to_string(),
            ApiError::Http { status, message } if message.is_empty() => {
                format!("Server mengembalikan kesalahan ({})", status)
            }
            ApiError::Http { status, message } => format!("{} ({})", message, status),
            ApiError::Rejected { message } if message.is_empty() => {
                "Permintaan ditolak oleh server".to_string()
            }
            ApiError::Rejected { message } => message.clone(),
            ApiError::Validation { message, .. } if message.is_empty() => {
                "Data yang dikirim tidak valid".to_string()
            }
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::Decode(_) => "Respons server tidak dapat dibaca".to_string(),
        }
    }

    /// First server message for a form field, if the server rejected it.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::Validation { fields, .. } => fields
                .get(field)
                .and_then(|messages| messages.first())
                .map(String::as_str),
            _ => None,
        }
    }
}

fn message_of(value: &Value) -> String {
    value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn field_errors_of(value: &Value) -> BTreeMap<String, Vec<String>> {
    value
        .get("errors")
        .cloned()
        .and_then(|errors| serde_json::from_value(errors).ok())
        .unwrap_or_default()
}

/// Checks HTTP status and the `status` flag, returning the whole envelope.
pub fn checked_envelope(http_status: u16, body: &str) -> Result<Value, ApiError> {
    let parsed = serde_json::from_str::<Value>(body);
    let value = parsed.as_ref().ok();

    if http_status == 401 {
        return Err(ApiError::Unauthenticated);
    }
    if http_status == 422 {
        return Err(ApiError::Validation {
            message: value.map(message_of).unwrap_or_default(),
            fields: value.map(field_errors_of).unwrap_or_default(),
        });
    }
    if !(200..300).contains(&http_status) {
        return Err(ApiError::Http {
            status: http_status,
            message: value.map(message_of).unwrap_or_default(),
        });
    }

    let value = parsed.map_err(|e| ApiError::Decode(e.to_string()))?;
    let status = value.get("status").and_then(Value::as_str);
    if status != Some(STATUS_SUCCESS) {
        return Err(ApiError::Rejected {
            message: message_of(&value),
        });
    }
    Ok(value)
}

/// Decodes `data` out of a success envelope.
pub fn decode_envelope<T: DeserializeOwned>(http_status: u16, body: &str) -> Result<T, ApiError> {
    let mut envelope = checked_envelope(http_status, body)?;
    let data = envelope
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null);
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Accepts any success envelope, with or without `data`.
pub fn decode_ack(http_status: u16, body: &str) -> Result<(), ApiError> {
    checked_envelope(http_status, body).map(|_| ())
}

fn pagination_of(value: &Value) -> Option<ServerPagination> {
    value.get("current_page")?;
    serde_json::from_value(value.clone()).ok()
}

/// Decodes a collection response that may or may not be paginated.
pub fn decode_page<T: DeserializeOwned>(
    http_status: u16,
    body: &str,
) -> Result<PageResult<T>, ApiError> {
    let mut envelope = checked_envelope(http_status, body)?;
    let top_level_meta = pagination_of(&envelope);
    let data = envelope
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null);

    let (items, pagination) = match data {
        Value::Array(items) => (Value::Array(items), top_level_meta),
        Value::Object(mut nested) if nested.contains_key("data") => {
            let meta = pagination_of(&Value::Object(nested.clone()));
            let items = nested.remove("data").unwrap_or(Value::Null);
            (items, meta.or(top_level_meta))
        }
        Value::Null => (Value::Array(Vec::new()), top_level_meta),
        other => (other, top_level_meta),
    };

    let items: Vec<T> =
        serde_json::from_value(items).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(PageResult { items, pagination })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn success_envelope_yields_data() {
        let items: Vec<Item> =
            decode_envelope(200, r#"{"status":"success","data":[{"id":1},{"id":2}]}"#).unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn body_without_success_flag_is_rejected() {
        let err = decode_envelope::<Vec<Item>>(200, r#"{"status":"error","message":"Cabang tidak ditemukan"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: "Cabang tidak ditemukan".to_string()
            }
        );
        assert_eq!(err.user_message(), "Cabang tidak ditemukan");

        let err = decode_envelope::<Vec<Item>>(200, r#"{"data":[]}"#).unwrap_err();
        assert_eq!(err.user_message(), "Permintaan ditolak oleh server");
    }

    #[test]
    fn http_failures_map_to_typed_errors() {
        assert_eq!(
            decode_envelope::<Vec<Item>>(401, "").unwrap_err(),
            ApiError::Unauthenticated
        );
        let err = decode_envelope::<Vec<Item>>(500, "<html>oops</html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: String::new()
            }
        );
        assert_eq!(err.user_message(), "Server mengembalikan kesalahan (500)");
    }

    #[test]
    fn validation_errors_keep_field_messages() {
        let body = r#"{"message":"The email has already been taken.","errors":{"email":["Email sudah digunakan"]}}"#;
        let err = decode_ack(422, body).unwrap_err();
        assert_eq!(err.field_error("email"), Some("Email sudah digunakan"));
        assert_eq!(err.field_error("nama"), None);
        assert_eq!(err.user_message(), "The email has already been taken.");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        assert!(matches!(
            decode_envelope::<Vec<Item>>(200, "not json"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_envelope::<Vec<Item>>(200, r#"{"status":"success","data":{"id":"x"}}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn ack_accepts_null_data() {
        assert!(decode_ack(200, r#"{"status":"success","data":null}"#).is_ok());
        assert!(decode_ack(201, r#"{"status":"success","message":"Dibuat"}"#).is_ok());
    }

    #[test]
    fn page_with_top_level_meta() {
        let body = r#"{"status":"success","data":[{"id":1}],"current_page":2,"last_page":5,"per_page":10,"total":41}"#;
        let page: PageResult<Item> = decode_page(200, body).unwrap();
        assert_eq!(page.items, vec![Item { id: 1 }]);
        assert_eq!(
            page.pagination,
            Some(ServerPagination {
                current_page: 2,
                last_page: 5,
                per_page: 10,
                total: 41
            })
        );
    }

    #[test]
    fn page_with_nested_laravel_paginator() {
        let body = r#"{"status":"success","data":{"data":[{"id":7}],"current_page":1,"last_page":1,"per_page":15,"total":1,"links":[]}}"#;
        let page: PageResult<Item> = decode_page(200, body).unwrap();
        assert_eq!(page.items, vec![Item { id: 7 }]);
        assert_eq!(page.pagination.map(|p| p.per_page), Some(15));
    }

    #[test]
    fn plain_list_has_no_pagination() {
        let page: PageResult<Item> =
            decode_page(200, r#"{"status":"success","data":[]}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination, None);

        let page: PageResult<Item> =
            decode_page(200, r#"{"status":"success","data":null}"#).unwrap();
        assert!(page.items.is_empty());
    }
}
