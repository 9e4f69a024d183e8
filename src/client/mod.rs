//! Client layer: builds requests, runs them through the HTTP transport and maps
//! transport ↔ domain.

mod endpoint;

use std::error::Error as StdError;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use self::endpoint::{DEFAULT_BASE_URL, Endpoint};
use crate::domain::{
    ApiKey, DocumentId, FaxHistoryEntry, FaxJobId, FaxNumber, FileId, FileRecord,
};
use crate::transport::{StatusEnvelope, TransportError};

/// Per-request timeout used unless the builder overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT_JSON: (&str, &str) = ("accept", "application/json");
const CONTENT_TYPE_JSON: (&str, &str) = ("content-type", "application/json");

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestBody {
    Empty,
    Form(Vec<(String, String)>),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    headers: Vec<(&'static str, &'static str)>,
    body: RequestBody,
}

impl HttpRequest {
    fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    fn header(mut self, header: (&'static str, &'static str)) -> Self {
        self.headers.push(header);
        self
    }

    fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self
                .client
                .request(method, request.url)
                .timeout(self.timeout);
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Form(params) => builder.form(&params),
                RequestBody::Bytes(bytes) => builder.body(bytes),
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`FaxToClient`].
///
/// Every failed call yields exactly one of these; nothing is retried.
pub enum FaxToError {
    /// HTTP client / transport failure (DNS, connection, timeouts, malformed URL).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with status >= 400. The body is kept as text and never decoded.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The envelope decoded but its `status` is not `"success"`.
    #[error("remote status: {status}")]
    RemoteStatus { status: String },

    /// Response body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// The file passed to [`FaxToClient::upload_file`] could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<TransportError> for FaxToError {
    fn from(err: TransportError) -> Self {
        Self::Decode(Box::new(err))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`FaxToClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct FaxToClientBuilder {
    api_key: ApiKey,
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl FaxToClientBuilder {
    /// Create a builder with the default endpoint and a 10 second timeout.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the API base URL (`https://fax.to/api/v2`). Action paths are appended to it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the timeout applied to each request as a whole.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`FaxToClient`].
    pub fn build(self) -> Result<FaxToClient, FaxToError> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| FaxToError::Transport(Box::new(err)))?;

        Ok(FaxToClient {
            endpoint: Endpoint::new(self.endpoint, self.api_key),
            http: Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level fax.to client.
///
/// Each method performs exactly one HTTP request and at most one JSON decode.
/// The client holds no mutable state; clones share the connection pool and can
/// be used from any number of tasks at once.
pub struct FaxToClient {
    endpoint: Endpoint,
    http: Arc<dyn HttpTransport>,
}

impl FaxToClient {
    /// Create a client for `https://fax.to/api/v2` with a 10 second request timeout.
    ///
    /// Performs no I/O and no validation of the key.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            endpoint: Endpoint::new(DEFAULT_BASE_URL, api_key.into()),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<ApiKey>) -> FaxToClientBuilder {
        FaxToClientBuilder::new(api_key)
    }

    /// Send a previously uploaded document to `number` (`POST /fax`).
    ///
    /// Any status below 400 counts as success; the body is ignored.
    pub async fn send_fax(
        &self,
        number: &FaxNumber,
        document_id: DocumentId,
    ) -> Result<(), FaxToError> {
        let request = HttpRequest::new(HttpMethod::Post, self.url("/fax", &[])?).body(
            RequestBody::Form(crate::transport::encode_send_fax_form(number, document_id)),
        );
        self.execute(request).await?;
        Ok(())
    }

    /// Current account balance (`GET /balance`).
    ///
    /// Errors:
    /// - [`FaxToError::RemoteStatus`] when the envelope status is not `success`.
    pub async fn get_balance(&self) -> Result<f64, FaxToError> {
        let request = HttpRequest::new(HttpMethod::Get, self.url("/balance", &[])?)
            .header(CONTENT_TYPE_JSON);
        let response = self.execute(request).await?;

        let envelope = crate::transport::decode_balance_json_response(&response.body)?;
        into_success_payload(envelope)
    }

    /// Price of faxing `document_id` to `number` (`GET /fax/{id}/costs`).
    ///
    /// The envelope status is not checked.
    pub async fn get_fax_cost(
        &self,
        number: &FaxNumber,
        document_id: DocumentId,
    ) -> Result<f64, FaxToError> {
        let action = format!("/fax/{document_id}/costs");
        let url = self.url(&action, &[(FaxNumber::FIELD, number.as_str())])?;
        let request = HttpRequest::new(HttpMethod::Get, url).header(ACCEPT_JSON);
        let response = self.execute(request).await?;

        Ok(crate::transport::decode_fax_cost_json_response(&response.body)?)
    }

    /// Remote status string of a fax job (`GET /fax/{id}/status`).
    pub async fn get_fax_status(&self, job_id: FaxJobId) -> Result<String, FaxToError> {
        let action = format!("/fax/{job_id}/status");
        let request =
            HttpRequest::new(HttpMethod::Get, self.url(&action, &[])?).header(ACCEPT_JSON);
        let response = self.execute(request).await?;

        Ok(crate::transport::decode_fax_status_json_response(&response.body)?)
    }

    /// Fax history in the order the server returns it (`GET /fax-history`).
    ///
    /// Errors:
    /// - [`FaxToError::RemoteStatus`] when the envelope status is not `success`.
    pub async fn get_fax_history(&self) -> Result<Vec<FaxHistoryEntry>, FaxToError> {
        let request =
            HttpRequest::new(HttpMethod::Get, self.url("/fax-history", &[])?).header(ACCEPT_JSON);
        let response = self.execute(request).await?;

        let envelope = crate::transport::decode_fax_history_json_response(&response.body)?;
        into_success_payload(envelope)
    }

    /// Upload a local file and return the new document id (`POST /files`).
    ///
    /// The whole file is read into memory and sent as the raw request body,
    /// without a content type. Empty files are sent as-is.
    ///
    /// Errors:
    /// - [`FaxToError::Io`] when the file cannot be read (nothing is sent),
    /// - [`FaxToError::RemoteStatus`] when the envelope status is not `success`.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<DocumentId, FaxToError> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await.map_err(|source| FaxToError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let request = HttpRequest::new(HttpMethod::Post, self.url("/files", &[])?)
            .body(RequestBody::Bytes(content));
        let response = self.execute(request).await?;

        let envelope = crate::transport::decode_upload_json_response(&response.body)?;
        into_success_payload(envelope)
    }

    /// Files stored on the account (`GET /files`), possibly empty.
    pub async fn get_files(&self) -> Result<Vec<FileRecord>, FaxToError> {
        let request =
            HttpRequest::new(HttpMethod::Get, self.url("/files", &[])?).header(ACCEPT_JSON);
        let response = self.execute(request).await?;

        Ok(crate::transport::decode_file_list_json_response(&response.body)?)
    }

    /// Delete a stored file (`DELETE /files/{id}`). The body is ignored.
    pub async fn delete_file(&self, file_id: FileId) -> Result<(), FaxToError> {
        let action = format!("/files/{file_id}");
        let request =
            HttpRequest::new(HttpMethod::Delete, self.url(&action, &[])?).header(ACCEPT_JSON);
        self.execute(request).await?;
        Ok(())
    }

    fn url(&self, action: &str, query: &[(&str, &str)]) -> Result<Url, FaxToError> {
        self.endpoint
            .url(action, query)
            .map_err(|err| FaxToError::Transport(Box::new(err)))
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, FaxToError> {
        let method = request.method;
        let path = request.url.path().to_owned();
        tracing::debug!(?method, %path, "sending fax.to request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(FaxToError::Transport)?;
        tracing::debug!(?method, %path, status = response.status, "fax.to response");

        if response.status >= 400 {
            let body = String::from_utf8_lossy(&response.body);
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body.into_owned())
            };
            return Err(FaxToError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }
}

fn into_success_payload<T>(envelope: StatusEnvelope<T>) -> Result<T, FaxToError> {
    if !envelope.is_success() {
        return Err(FaxToError::RemoteStatus {
            status: envelope.status,
        });
    }
    Ok(envelope.into_payload()?)
}
