use chrono::{DateTime, FixedOffset};

use crate::domain::value::{DocumentId, FileId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file stored on the fax.to side.
///
/// Never cached: every [`crate::FaxToClient::get_files`] call re-fetches the list.
/// Fields the server leaves out or sends as `null` hold their zero value.
pub struct FileRecord {
    pub id: FileId,
    pub filename: String,
    pub page_count: u32,
    pub size_bytes: u64,
    pub uploaded_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Creation time of a history entry with the timezone metadata fax.to sends along.
pub struct HistoryTimestamp {
    pub date: Option<DateTime<FixedOffset>>,
    /// Raw `datetime_zone` discriminator.
    pub timezone_type: u8,
    /// Timezone name, e.g. `UTC` or `Europe/London`.
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the fax history. Missing or `null` fields hold their zero value.
pub struct FaxHistoryEntry {
    pub id: u64,
    pub created: HistoryTimestamp,
    pub document_id: DocumentId,
    pub document_name: String,
    pub recipient: String,
    /// Free-form status reported by the remote.
    pub status: String,
}
