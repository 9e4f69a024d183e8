//! Transport layer: wire-format details (form encoding, JSON envelopes).

mod account;
mod fax;
mod files;
mod number;
mod timestamp;

pub use account::decode_balance_json_response;
pub use fax::{
    decode_fax_cost_json_response, decode_fax_history_json_response,
    decode_fax_status_json_response, encode_send_fax_form,
};
pub use files::{decode_file_list_json_response, decode_upload_json_response};

use serde::{Deserialize, Deserializer};

/// Literal value of `status` in a successful fax.to envelope.
pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing required field `{field}`")]
    MissingField { field: &'static str },
}

/// A decoded `{status, ...}` envelope whose payload is only meaningful when
/// `status` is [`SUCCESS_STATUS`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEnvelope<T> {
    pub status: String,
    /// Wire name of the payload field, reported when it is missing.
    pub field: &'static str,
    pub payload: Option<T>,
}

impl<T> StatusEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    pub fn into_payload(self) -> Result<T, TransportError> {
        self.payload
            .ok_or(TransportError::MissingField { field: self.field })
    }
}

/// Decode a field whose `null` means the same as absent: both yield `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing key is covered too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
    }

    #[test]
    fn null_and_missing_fields_fall_back_to_default() {
        let sample: Sample = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(sample.name, "");
        assert_eq!(sample.count, 0);

        let sample: Sample = serde_json::from_str(r#"{"name":"a","count":3}"#).unwrap();
        assert_eq!(sample.name, "a");
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn envelope_success_is_exact_match() {
        let ok = StatusEnvelope {
            status: "success".to_owned(),
            field: "balance",
            payload: Some(1.0),
        };
        assert!(ok.is_success());

        let upper = StatusEnvelope::<f64> {
            status: "SUCCESS".to_owned(),
            field: "balance",
            payload: None,
        };
        assert!(!upper.is_success());
    }

    #[test]
    fn envelope_reports_missing_payload_field() {
        let empty = StatusEnvelope::<u64> {
            status: "success".to_owned(),
            field: "document_id",
            payload: None,
        };
        let err = empty.into_payload().unwrap_err();
        assert_eq!(
            err.to_string(),
            "response is missing required field `document_id`"
        );
    }
}
