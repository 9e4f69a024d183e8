use serde::Deserialize;

use super::number::TransportNumber;
use super::timestamp::TransportTimestamp;
use super::{StatusEnvelope, TransportError, null_as_default};
use crate::domain::{DocumentId, FaxHistoryEntry, FaxNumber, HistoryTimestamp};

#[derive(Debug, Clone, Deserialize)]
struct FaxCostJsonResponse {
    cost: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct FaxStatusJsonResponse {
    status: String,
}

#[derive(Debug, Clone, Deserialize)]
struct FaxHistoryJsonResponse {
    status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    history: Vec<FaxHistoryJsonEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct FaxHistoryJsonEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    created: CreatedJson,
    #[serde(default, deserialize_with = "null_as_default")]
    document_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    document: String,
    #[serde(default, deserialize_with = "null_as_default")]
    recipient: String,
    #[serde(default, deserialize_with = "null_as_default")]
    status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CreatedJson {
    #[serde(default)]
    date: Option<TransportTimestamp>,
    #[serde(default, deserialize_with = "null_as_default")]
    datetime_zone: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    timezone: String,
}

pub fn encode_send_fax_form(number: &FaxNumber, document_id: DocumentId) -> Vec<(String, String)> {
    vec![
        (FaxNumber::FIELD.to_owned(), number.as_str().to_owned()),
        (DocumentId::FIELD.to_owned(), document_id.to_string()),
    ]
}

/// Decode `{status, cost}`. The envelope status is not inspected.
pub fn decode_fax_cost_json_response(body: &[u8]) -> Result<f64, TransportError> {
    let parsed: FaxCostJsonResponse = serde_json::from_slice(body)?;
    Ok(parsed.cost.into_f64())
}

/// Decode `{status, message, user_cash_balance}` and return `status` as-is.
pub fn decode_fax_status_json_response(body: &[u8]) -> Result<String, TransportError> {
    let parsed: FaxStatusJsonResponse = serde_json::from_slice(body)?;
    Ok(parsed.status)
}

pub fn decode_fax_history_json_response(
    body: &[u8],
) -> Result<StatusEnvelope<Vec<FaxHistoryEntry>>, TransportError> {
    let parsed: FaxHistoryJsonResponse = serde_json::from_slice(body)?;
    let history = parsed
        .history
        .into_iter()
        .map(|entry| FaxHistoryEntry {
            id: entry.id,
            created: HistoryTimestamp {
                date: entry.created.date.map(TransportTimestamp::into_inner),
                timezone_type: entry.created.datetime_zone,
                timezone: entry.created.timezone,
            },
            document_id: DocumentId::new(entry.document_id),
            document_name: entry.document,
            recipient: entry.recipient,
            status: entry.status,
        })
        .collect();

    Ok(StatusEnvelope {
        status: parsed.status,
        field: "history",
        payload: Some(history),
    })
}
