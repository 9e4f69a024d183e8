//! Domain layer: strong types for identifiers and records (no I/O).

mod response;
mod value;

pub use response::{FaxHistoryEntry, FileRecord, HistoryTimestamp};
pub use value::{ApiKey, DocumentId, FaxJobId, FaxNumber, FileId};

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[test]
    fn file_record_compares_by_value() {
        let uploaded_at = DateTime::parse_from_rfc3339("2024-03-01T10:00:00+00:00").unwrap();
        let a = FileRecord {
            id: FileId::new(1),
            filename: "invoice.pdf".to_owned(),
            page_count: 2,
            size_bytes: 2048,
            uploaded_at: Some(uploaded_at),
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.page_count = 3;
        assert_ne!(a, b);
    }

    #[test]
    fn history_entry_keeps_remote_status_text() {
        let entry = FaxHistoryEntry {
            id: 9,
            created: HistoryTimestamp {
                date: Some(DateTime::parse_from_rfc3339("2024-03-01T10:00:00+02:00").unwrap()),
                timezone_type: 3,
                timezone: "Europe/Kiev".to_owned(),
            },
            document_id: DocumentId::new(12),
            document_name: "contract.pdf".to_owned(),
            recipient: "+15550100000".to_owned(),
            status: "Sending in progress".to_owned(),
        };
        assert_eq!(entry.status, "Sending in progress");
        let date = entry.created.date.unwrap();
        assert_eq!(date.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn history_timestamp_defaults_to_empty() {
        let ts = HistoryTimestamp::default();
        assert_eq!(ts.date, None);
        assert_eq!(ts.timezone_type, 0);
        assert!(ts.timezone.is_empty());
    }
}
