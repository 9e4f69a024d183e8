use serde::Deserialize;

use super::number::TransportNumber;
use super::{StatusEnvelope, TransportError};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    status: String,
    #[serde(default)]
    balance: Option<TransportNumber>,
}

pub fn decode_balance_json_response(body: &[u8]) -> Result<StatusEnvelope<f64>, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_slice(body)?;
    Ok(StatusEnvelope {
        status: parsed.status,
        field: "balance",
        payload: parsed.balance.map(TransportNumber::into_f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_balance_maps_payload_and_ignores_extra_fields() {
        let json = br#"
        {
          "status": "success",
          "balance": 12.5,
          "sunbscription_credit_allowance": 0
        }
        "#;

        let parsed = decode_balance_json_response(json).unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.payload, Some(12.5));
    }

    #[test]
    fn decode_balance_tolerates_error_envelope_without_balance() {
        let parsed = decode_balance_json_response(br#"{"status":"error"}"#).unwrap();
        assert_eq!(parsed.status, "error");
        assert_eq!(parsed.payload, None);
    }

    #[test]
    fn decode_balance_accepts_string_amount() {
        let parsed =
            decode_balance_json_response(br#"{"status":"success","balance":"7.25"}"#).unwrap();
        assert_eq!(parsed.payload, Some(7.25));
    }

    #[test]
    fn decode_balance_requires_status() {
        let err = decode_balance_json_response(br#"{"balance":1}"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
