use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Deserialize;
use serde::de::Error as DeError;

const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Timestamp string as sent by fax.to.
///
/// RFC 3339 values keep their offset. The bare `YYYY-MM-DD HH:MM:SS[.ffffff]`
/// form carries no offset and is read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportTimestamp(DateTime<FixedOffset>);

impl TransportTimestamp {
    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim())
            .map(Self)
            .ok_or_else(|| D::Error::custom(format!("unsupported timestamp: {raw:?}")))
    }
}

fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value);
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::TransportTimestamp;

    fn decode(json: &str) -> Result<TransportTimestamp, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn rfc3339_keeps_offset() {
        let ts = decode(r#""2024-05-01T08:30:00+03:00""#).unwrap().into_inner();
        assert_eq!(ts.offset().local_minus_utc(), 3 * 3600);
        assert_eq!(ts.to_rfc3339(), "2024-05-01T08:30:00+03:00");
    }

    #[test]
    fn naive_form_is_read_as_utc() {
        let ts = decode(r#""2016-01-14 09:54:11.000000""#).unwrap().into_inner();
        assert_eq!(ts.to_rfc3339(), "2016-01-14T09:54:11+00:00");

        let ts = decode(r#""2016-01-14 09:54:11""#).unwrap().into_inner();
        assert_eq!(ts.to_rfc3339(), "2016-01-14T09:54:11+00:00");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode(r#""yesterday""#).is_err());
        assert!(decode("1700000000").is_err());
    }
}
