use serde::Deserialize;

use super::timestamp::TransportTimestamp;
use super::{StatusEnvelope, TransportError, null_as_default};
use crate::domain::{DocumentId, FileId, FileRecord};

#[derive(Debug, Clone, Deserialize)]
struct UploadJsonResponse {
    status: String,
    #[serde(default)]
    document_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct FileJsonRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pages: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    size: u64,
    #[serde(default)]
    uploaded: Option<TransportTimestamp>,
}

pub fn decode_upload_json_response(
    body: &[u8],
) -> Result<StatusEnvelope<DocumentId>, TransportError> {
    let parsed: UploadJsonResponse = serde_json::from_slice(body)?;
    Ok(StatusEnvelope {
        status: parsed.status,
        field: "document_id",
        payload: parsed.document_id.map(DocumentId::new),
    })
}

/// Decode the bare JSON array returned by `GET /files`, keeping server order.
/// A `null` body is an empty list.
pub fn decode_file_list_json_response(body: &[u8]) -> Result<Vec<FileRecord>, TransportError> {
    let parsed: Option<Vec<FileJsonRecord>> = serde_json::from_slice(body)?;
    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(|file| FileRecord {
            id: FileId::new(file.id),
            filename: file.filename,
            page_count: file.pages,
            size_bytes: file.size,
            uploaded_at: file.uploaded.map(TransportTimestamp::into_inner),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_upload_maps_document_id() {
        let json = br#"{"status":"success","document_id":314,"total_pages":2}"#;
        let parsed = decode_upload_json_response(json).unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.into_payload().unwrap(), DocumentId::new(314));
    }

    #[test]
    fn decode_upload_tolerates_failed_envelope() {
        let parsed =
            decode_upload_json_response(br#"{"status":"failed","message":"bad pdf"}"#).unwrap();
        assert_eq!(parsed.status, "failed");
        assert!(parsed.payload.is_none());
    }

    #[test]
    fn decode_file_list_keeps_order() {
        let json = br#"
        [
          {"id": 3, "filename": "c.pdf", "pages": 1, "size": 100, "uploaded": "2024-01-03T00:00:00Z"},
          {"id": 1, "filename": "a.pdf", "pages": 5, "size": 900, "uploaded": "2024-01-01 12:00:00"},
          {"id": 2, "filename": "b.pdf", "pages": 2, "size": 300, "uploaded": "2024-01-02T00:00:00+02:00"}
        ]
        "#;

        let files = decode_file_list_json_response(json).unwrap();
        let ids = files.iter().map(|f| f.id.get()).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(files[1].filename, "a.pdf");
        assert_eq!(files[1].page_count, 5);
        assert_eq!(files[1].size_bytes, 900);
        assert_eq!(
            files[1].uploaded_at.map(|d| d.to_rfc3339()).as_deref(),
            Some("2024-01-01T12:00:00+00:00")
        );
    }

    #[test]
    fn decode_file_list_keeps_incomplete_records() {
        let json = br#"
        [
          {"id": 4, "filename": null, "pages": 2, "size": 10, "uploaded": null},
          {"id": 5, "filename": "e.pdf"}
        ]
        "#;

        let files = decode_file_list_json_response(json).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "");
        assert_eq!(files[0].page_count, 2);
        assert_eq!(files[0].uploaded_at, None);
        assert_eq!(files[1].id, FileId::new(5));
        assert_eq!(files[1].page_count, 0);
        assert_eq!(files[1].size_bytes, 0);
    }

    #[test]
    fn decode_file_list_treats_null_as_empty() {
        assert!(decode_file_list_json_response(b"null").unwrap().is_empty());
    }

    #[test]
    fn decode_file_list_accepts_empty_array() {
        assert!(decode_file_list_json_response(b"[]").unwrap().is_empty());
    }

    #[test]
    fn decode_file_list_rejects_object_body() {
        let err = decode_file_list_json_response(br#"{"status":"success"}"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
