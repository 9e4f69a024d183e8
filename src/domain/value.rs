use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// fax.to API key, passed as the `api_key` query parameter on every call.
///
/// The value is used verbatim: no trimming and no format checks. The remote
/// service is the only authority on whether a key is valid.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by fax.to (`api_key`).
    pub const FIELD: &'static str = "api_key";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Recipient fax number (`fax_number`).
///
/// Sent exactly as given; formatting is up to the caller and the remote decides
/// whether the number is dialable.
pub struct FaxNumber(String);

impl FaxNumber {
    /// Form/query field name used by fax.to (`fax_number`).
    pub const FIELD: &'static str = "fax_number";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FaxNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FaxNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for FaxNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Remote identifier of an uploaded document (`document_id`).
///
/// Returned by [`crate::FaxToClient::upload_file`] and used to send or price a fax.
pub struct DocumentId(u64);

impl DocumentId {
    /// Form field name used by fax.to (`document_id`).
    pub const FIELD: &'static str = "document_id";

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for DocumentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Remote identifier of a submitted fax transmission.
///
/// Signed on purpose: the value is put into the request path as-is, including
/// zero or negative values.
pub struct FaxJobId(i64);

impl FaxJobId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for FaxJobId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for FaxJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Remote identifier of a stored file, as listed by [`crate::FaxToClient::get_files`].
pub struct FileId(u64);

impl FileId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
