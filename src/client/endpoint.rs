use url::Url;

use crate::domain::ApiKey;

pub(crate) const DEFAULT_BASE_URL: &str = "https://fax.to/api/v2";

/// Builds per-action request URLs from a base URL and the account key.
///
/// `base` + `action` form the path; the query always starts with
/// `api_key=<key>` followed by any extra pairs in the given order.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    base: String,
    api_key: ApiKey,
}

impl Endpoint {
    pub(crate) fn new(base: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            base: base.into(),
            api_key,
        }
    }

    #[cfg(test)]
    pub(crate) fn base(&self) -> &str {
        &self.base
    }

    pub(crate) fn url(&self, action: &str, query: &[(&str, &str)]) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{}{}", self.base.trim_end_matches('/'), action))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(ApiKey::FIELD, self.api_key.as_str());
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}
