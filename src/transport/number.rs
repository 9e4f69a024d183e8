use serde::Deserialize;
use serde::de::Error as DeError;

/// Decimal amount returned by fax.to as either JSON number or numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportNumber(f64);

impl TransportNumber {
    pub fn into_f64(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            String(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::String(value) => value
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected numeric value, got {value:?}"))),
        }
    }
}
