//! Client layer: credentials, the HTTP dispatcher, and the public facades.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{
    ApiKey, ArchiveQuery, Envelope, LineNumber, MessageId, MessageReport, PackId, PackSummary,
    Pagination, ReceiveLiveQuery, ReceivedMessage, ScheduledDeletion, SendBulk, SendByUrl,
    SendLikeToLike, SendPack, SendVerifyCode, SentMessage, UnixTimestamp, ValidationError,
};
use crate::transport::{self, HttpMethod};

mod api;

pub use api::{ReportApi, SendApi, SettingsApi};

const DEFAULT_ENDPOINT: &str = "https://api.sms.ir";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    api_key: String,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
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
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(reqwest_method(request.method), &request.url)
                .header(ApiKey::HEADER, &request.api_key)
                .header("accept", "application/json");
            if let Some(body) = request.body {
                builder = builder.header("content-type", "application/json").body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Immutable credentials captured at client construction: the API key sent
/// in the `x-api-key` header and the default sender line number.
pub struct Credentials {
    api_key: ApiKey,
    line_number: LineNumber,
}

impl Credentials {
    /// Create validated credentials from raw parts.
    pub fn new(api_key: impl Into<String>, line_number: u64) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            line_number: LineNumber::new(line_number)?,
        })
    }

    /// Assemble credentials from already-validated values.
    pub fn from_parts(api_key: ApiKey, line_number: LineNumber) -> Self {
        Self {
            api_key,
            line_number,
        }
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsIr`].
///
/// This error preserves:
/// - transport failures (DNS, TLS, connection resets), propagated unchanged,
/// - non-2xx HTTP statuses, with the server-supplied message when the
///   failure body parses as the usual envelope,
/// - encoding/parse failures and domain validation failures.
pub enum SmsIrError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus {
        status: u16,
        message: Option<String>,
    },

    /// Response body could not be parsed as the expected envelope.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
pub(crate) struct Dispatcher {
    api_key: ApiKey,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl Dispatcher {
    fn url_for(&self, path: &str, query: &[(&'static str, String)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        url
    }

    pub(crate) fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Issue exactly one HTTP call and return the raw success body.
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<String, SmsIrError> {
        let url = self.url_for(path, query);
        tracing::debug!(method = %method, path, "dispatching SMS.IR request");

        let response = self
            .http
            .execute(HttpRequest {
                method,
                url: url.to_string(),
                api_key: self.api_key.as_str().to_owned(),
                body,
            })
            .await
            .map_err(SmsIrError::Transport)?;

        if !(200..=299).contains(&response.status) {
            tracing::warn!(
                status = response.status,
                path,
                "SMS.IR returned a non-success HTTP status"
            );
            return Err(SmsIrError::HttpStatus {
                status: response.status,
                message: transport::extract_error_message(&response.body),
            });
        }

        Ok(response.body)
    }

    pub(crate) async fn request_envelope<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<Envelope<T>, SmsIrError> {
        let body = self.dispatch(method, path, query, body).await?;
        transport::decode_envelope(&body).map_err(|err| SmsIrError::Parse(Box::new(err)))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsIr`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SmsIrBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsIrBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent
    /// override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (scheme and host; paths are set per call).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`SmsIr`] client.
    pub fn build(self) -> Result<SmsIr, SmsIrError> {
        let base_url = Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsIrError::Transport(Box::new(err)))?;

        Ok(SmsIr {
            line_number: self.credentials.line_number,
            dispatch: Dispatcher {
                api_key: self.credentials.api_key,
                base_url,
                http: Arc::new(ReqwestTransport { client }),
            },
        })
    }
}

#[derive(Clone)]
/// High-level SMS.IR client.
///
/// Every operation issues exactly one HTTP call against the v2 API at
/// `https://api.sms.ir`, authenticated via the `x-api-key` header, and
/// returns the provider's `{status, message, data}` envelope. Non-2xx
/// responses and transport failures surface as [`SmsIrError`].
///
/// Operations are available both as flat methods (`client.send_bulk(..)`)
/// and through the grouped handles returned by [`SmsIr::send`],
/// [`SmsIr::report`], and [`SmsIr::settings`]; the flat methods delegate to
/// the handles.
pub struct SmsIr {
    line_number: LineNumber,
    dispatch: Dispatcher,
}

impl std::fmt::Debug for SmsIr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsIr")
            .field("line_number", &self.line_number)
            .finish_non_exhaustive()
    }
}

impl SmsIr {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmsIr::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            line_number: credentials.line_number,
            dispatch: Dispatcher {
                api_key: credentials.api_key,
                base_url: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
                http: Arc::new(ReqwestTransport {
                    client: reqwest::Client::new(),
                }),
            },
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsIrBuilder {
        SmsIrBuilder::new(credentials)
    }

    /// Handle for the send operations.
    pub fn send(&self) -> SendApi<'_> {
        SendApi {
            dispatch: &self.dispatch,
            line_number: self.line_number,
        }
    }

    /// Handle for the delivery/receive report operations.
    pub fn report(&self) -> ReportApi<'_> {
        ReportApi {
            dispatch: &self.dispatch,
        }
    }

    /// Handle for the account settings operations.
    pub fn settings(&self) -> SettingsApi<'_> {
        SettingsApi {
            dispatch: &self.dispatch,
        }
    }

    /// Send one message to many recipients as a pack.
    pub async fn send_bulk(&self, request: SendBulk) -> Result<Envelope<SendPack>, SmsIrError> {
        self.send().bulk(request).await
    }

    /// Send paired messages: the first text to the first mobile, and so on.
    pub async fn send_like_to_like(
        &self,
        request: SendLikeToLike,
    ) -> Result<Envelope<SendPack>, SmsIrError> {
        self.send().like_to_like(request).await
    }

    /// Delete a scheduled pack before it is sent; the credit is refunded.
    pub async fn delete_scheduled(
        &self,
        pack_id: &PackId,
    ) -> Result<Envelope<ScheduledDeletion>, SmsIrError> {
        self.send().delete_scheduled(pack_id).await
    }

    /// Send a verification code through a panel template.
    pub async fn send_verify_code(
        &self,
        request: SendVerifyCode,
    ) -> Result<Envelope<SentMessage>, SmsIrError> {
        self.send().verify_code(request).await
    }

    /// Send a single message through the legacy query-string endpoint.
    pub async fn send_by_url(
        &self,
        request: SendByUrl,
    ) -> Result<Envelope<SentMessage>, SmsIrError> {
        self.send().by_url(request).await
    }

    /// Delivery report for one message.
    pub async fn report_message(
        &self,
        message_id: MessageId,
    ) -> Result<Envelope<MessageReport>, SmsIrError> {
        self.report().message(message_id).await
    }

    /// Messages sent today.
    pub async fn report_today_live(
        &self,
        pagination: Pagination,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        self.report().today_live(pagination).await
    }

    /// Sent messages within a date range.
    pub async fn report_archive(
        &self,
        query: ArchiveQuery,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        self.report().archive(query).await
    }

    /// Packs created today.
    pub async fn report_daily_pack(
        &self,
        pagination: Pagination,
    ) -> Result<Envelope<Vec<PackSummary>>, SmsIrError> {
        self.report().daily_pack(pagination).await
    }

    /// All messages of one pack.
    pub async fn report_pack_by_id(
        &self,
        pack_id: &PackId,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        self.report().pack_by_id(pack_id).await
    }

    /// Latest received messages.
    pub async fn report_latest_receive(
        &self,
        count: Option<u32>,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        self.report().latest_receive(count).await
    }

    /// Messages received today.
    pub async fn report_receive_live(
        &self,
        query: ReceiveLiveQuery,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        self.report().receive_live(query).await
    }

    /// Received messages within a date range.
    pub async fn report_receive_archive(
        &self,
        query: ArchiveQuery,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        self.report().receive_archive(query).await
    }

    /// Current account credit balance.
    pub async fn get_credit(&self) -> Result<Envelope<f64>, SmsIrError> {
        self.settings().credit().await
    }

    /// Line numbers enabled for the account.
    pub async fn get_line_numbers(&self) -> Result<Envelope<Vec<u64>>, SmsIrError> {
        self.settings().line_numbers().await
    }

    /// Legacy alias with the old `(pageSize, pageNumber)` argument order.
    #[deprecated(note = "use `report_today_live`")]
    pub async fn report_today(
        &self,
        page_size: u32,
        page_number: u32,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        self.report_today_live(Pagination::page(page_number, page_size))
            .await
    }

    /// Legacy alias for [`SmsIr::report_pack_by_id`].
    #[deprecated(note = "use `report_pack_by_id`")]
    pub async fn report_pack(
        &self,
        pack_id: &PackId,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        self.report_pack_by_id(pack_id).await
    }

    /// Legacy alias with the old `(pageSize, pageNumber)` argument order.
    #[deprecated(note = "use `report_archive`")]
    pub async fn report_archived(
        &self,
        from_date: Option<UnixTimestamp>,
        to_date: Option<UnixTimestamp>,
        page_size: u32,
        page_number: u32,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        self.report_archive(ArchiveQuery {
            from_date,
            to_date,
            pagination: Pagination::page(page_number, page_size),
        })
        .await
    }

    /// Legacy alias for [`SmsIr::report_latest_receive`].
    #[deprecated(note = "use `report_latest_receive`")]
    pub async fn report_latest_received(
        &self,
        count: u32,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        self.report_latest_receive(Some(count)).await
    }

    /// Legacy alias: today's received messages, newest first.
    #[deprecated(note = "use `report_receive_live`")]
    pub async fn report_today_received(
        &self,
        page_size: u32,
        page_number: u32,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        self.report_receive_live(ReceiveLiveQuery {
            pagination: Pagination::page(page_number, page_size),
            sort_by_newest: Some(true),
        })
        .await
    }

    /// Legacy alias with the old `(pageSize, pageNumber)` argument order.
    #[deprecated(note = "use `report_receive_archive`")]
    pub async fn report_archived_received(
        &self,
        from_date: Option<UnixTimestamp>,
        to_date: Option<UnixTimestamp>,
        page_size: u32,
        page_number: u32,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        self.report_receive_archive(ArchiveQuery {
            from_date,
            to_date,
            pagination: Pagination::page(page_number, page_size),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{ApiStatus, MessageText, Mobile, TemplateId, TemplateParameter, Username};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: u32,
        last_request: Option<HttpRequest>,
        response_status: u16,
        response_body: String,
        fail_transport: bool,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_request: None,
                    response_status,
                    response_body: response_body.into(),
                    fail_transport: false,
                })),
            }
        }

        fn failing() -> Self {
            let transport = Self::new(200, "");
            transport.state.lock().unwrap().fail_transport = true;
            transport
        }

        fn calls(&self) -> u32 {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> HttpRequest {
            self.state
                .lock()
                .unwrap()
                .last_request
                .clone()
                .expect("no request dispatched")
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body, fail) = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_request = Some(request);
                    (
                        state.response_status,
                        state.response_body.clone(),
                        state.fail_transport,
                    )
                };
                if fail {
                    return Err(Box::from("connection refused"));
                }
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn make_client(transport: FakeTransport) -> SmsIr {
        let credentials = Credentials::new("test-api-key", 30007732000000).unwrap();
        SmsIr {
            line_number: credentials.line_number(),
            dispatch: Dispatcher {
                api_key: credentials.api_key().clone(),
                base_url: Url::parse("https://example.invalid").unwrap(),
                http: Arc::new(transport),
            },
        }
    }

    fn bulk_request() -> SendBulk {
        SendBulk::new(
            MessageText::new("hello").unwrap(),
            vec![Mobile::new("09123456789").unwrap()],
        )
        .unwrap()
    }

    const PACK_ENVELOPE: &str = r#"
    {
      "status": 1,
      "message": "موفق",
      "data": {
        "packId": "2b99e72c-9bf8-4f2f-9bfe-3f1f2dc1bf6f",
        "messageIds": [1001],
        "cost": 20.0
      }
    }
    "#;

    #[tokio::test]
    async fn send_bulk_issues_one_post_with_api_key_and_default_line() {
        let transport = FakeTransport::new(200, PACK_ENVELOPE);
        let client = make_client(transport.clone());

        let envelope = client.send_bulk(bulk_request()).await.unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data.unwrap().message_ids, vec![1001]);

        assert_eq!(transport.calls(), 1);
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/v1/send/bulk");
        assert_eq!(request.api_key, "test-api-key");

        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["lineNumber"], 30007732000000u64);
        assert_eq!(body["MessageText"], "hello");
        assert!(body.get("SendDateTime").is_none());
    }

    #[tokio::test]
    async fn send_bulk_uses_call_site_line_override() {
        let transport = FakeTransport::new(200, PACK_ENVELOPE);
        let client = make_client(transport.clone());

        let request = bulk_request().from_line(LineNumber::new(30001234567890).unwrap());
        client.send_bulk(request).await.unwrap();

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["lineNumber"], 30001234567890u64);
    }

    #[tokio::test]
    async fn send_like_to_like_posts_to_its_path() {
        let transport = FakeTransport::new(200, PACK_ENVELOPE);
        let client = make_client(transport.clone());

        let request = SendLikeToLike::new(
            vec![MessageText::new("hi").unwrap()],
            vec![Mobile::new("09123456789").unwrap()],
        )
        .unwrap();
        client.send_like_to_like(request).await.unwrap();

        assert_eq!(transport.calls(), 1);
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/v1/send/liketolike");
    }

    #[tokio::test]
    async fn delete_scheduled_issues_delete_with_pack_id_in_path() {
        let json = r#"
        {
          "status": 1,
          "message": "موفق",
          "data": { "returnedCreditCount": 20.0, "smsCount": 2 }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let pack_id = PackId::new("2b99e72c-9bf8").unwrap();
        let envelope = client.delete_scheduled(&pack_id).await.unwrap();
        let deletion = envelope.data.unwrap();
        assert_eq!(deletion.returned_credit_count, 20.0);
        assert_eq!(deletion.sms_count, 2);

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.url,
            "https://example.invalid/v1/send/scheduled/2b99e72c-9bf8"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn send_verify_code_posts_template_parameters() {
        let json = r#"
        {
          "status": 1,
          "message": "موفق",
          "data": { "messageId": 876240022, "cost": 1.0 }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let request = SendVerifyCode::new(
            Mobile::new("09123456789").unwrap(),
            TemplateId::new(100000).unwrap(),
            vec![TemplateParameter::new("CODE", "123456").unwrap()],
        );
        let envelope = client.send_verify_code(request).await.unwrap();
        assert_eq!(envelope.data.unwrap().message_id, 876240022);

        let request = transport.last_request();
        assert_eq!(request.url, "https://example.invalid/v1/send/verify/");
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["parameters"][0]["name"], "CODE");
    }

    #[tokio::test]
    async fn send_by_url_encodes_query_with_api_key_as_password() {
        let json = r#"
        {
          "status": 1,
          "message": "موفق",
          "data": { "messageId": 876240022, "cost": 20.0 }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let request = SendByUrl::new(
            Username::new("panel_user").unwrap(),
            Mobile::new("09123456789").unwrap(),
            MessageText::new("hi").unwrap(),
        );
        client.send_by_url(request).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.url.starts_with("https://example.invalid/v1/send?"));
        assert!(request.url.contains("username=panel_user"));
        assert!(request.url.contains("password=test-api-key"));
        assert!(request.url.contains("line=30007732000000"));
        assert!(request.url.contains("mobile=09123456789"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn report_message_builds_path_from_id() {
        let json = r#"
        {
          "status": 1,
          "message": "موفق",
          "data": {
            "messageId": 876240022,
            "mobile": 9123456789,
            "messageText": "hello",
            "sendDateTime": 1700000000,
            "lineNumber": 30007732000000,
            "cost": 1.0,
            "deliveryState": 1,
            "deliveryDateTime": 1700000060
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let envelope = client
            .report_message(MessageId::new(876240022).unwrap())
            .await
            .unwrap();
        assert_eq!(envelope.data.unwrap().message_id, 876240022);

        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/send/876240022"
        );
    }

    #[tokio::test]
    async fn report_archive_omits_absent_query_parameters() {
        let json = r#"{"status": 1, "message": "موفق", "data": []}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        client.report_archive(ArchiveQuery::default()).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/send/archive"
        );

        client
            .report_archive(ArchiveQuery {
                from_date: Some(UnixTimestamp::new(1_690_000_000)),
                to_date: None,
                pagination: Pagination::page(2, 10),
            })
            .await
            .unwrap();
        let url = transport.last_request().url;
        assert!(url.contains("fromDate=1690000000"));
        assert!(!url.contains("toDate"));
        assert!(url.contains("pageNumber=2"));
        assert!(url.contains("pageSize=10"));
    }

    #[tokio::test]
    async fn receive_reports_hit_their_paths() {
        let json = r#"{"status": 1, "message": "موفق", "data": []}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        client.report_latest_receive(Some(100)).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/receive/latest?count=100"
        );

        client
            .report_receive_live(ReceiveLiveQuery {
                pagination: Pagination::page(1, 10),
                sort_by_newest: Some(true),
            })
            .await
            .unwrap();
        let url = transport.last_request().url;
        assert!(url.starts_with("https://example.invalid/v1/receive/live?"));
        assert!(url.contains("sortByNewest=true"));

        client
            .report_receive_archive(ArchiveQuery::default())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/receive/archive"
        );
    }

    #[tokio::test]
    async fn settings_endpoints_parse_scalar_and_list_data() {
        let transport =
            FakeTransport::new(200, r#"{"status": 1, "message": "موفق", "data": 1250.5}"#);
        let client = make_client(transport.clone());
        let envelope = client.get_credit().await.unwrap();
        assert_eq!(envelope.data, Some(1250.5));
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/credit"
        );

        let transport = FakeTransport::new(
            200,
            r#"{"status": 1, "message": "موفق", "data": [30007732000000, 30001234567890]}"#,
        );
        let client = make_client(transport.clone());
        let envelope = client.get_line_numbers().await.unwrap();
        assert_eq!(
            envelope.data,
            Some(vec![30007732000000u64, 30001234567890u64])
        );
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/line"
        );
    }

    #[tokio::test]
    async fn non_success_status_maps_to_http_status_with_server_message() {
        let transport = FakeTransport::new(
            401,
            r#"{"status": 0, "message": "invalid api key", "data": null}"#,
        );
        let client = make_client(transport.clone());

        let err = client.send_bulk(bulk_request()).await.unwrap_err();
        match err {
            SmsIrError::HttpStatus { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("invalid api key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn non_success_status_without_parseable_body_has_no_message() {
        let transport = FakeTransport::new(502, "<html>bad gateway</html>");
        let client = make_client(transport);

        let err = client.get_credit().await.unwrap_err();
        assert!(matches!(
            err,
            SmsIrError::HttpStatus {
                status: 502,
                message: None
            }
        ));
    }

    #[tokio::test]
    async fn transport_failure_propagates_unchanged() {
        let transport = FakeTransport::failing();
        let client = make_client(transport.clone());

        let err = client.send_bulk(bulk_request()).await.unwrap_err();
        match err {
            SmsIrError::Transport(source) => {
                assert_eq!(source.to_string(), "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_success_body_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client.get_credit().await.unwrap_err();
        assert!(matches!(err, SmsIrError::Parse(_)));
    }

    #[tokio::test]
    async fn grouped_handles_share_the_flat_facade_behavior() {
        let transport = FakeTransport::new(200, PACK_ENVELOPE);
        let client = make_client(transport.clone());

        client.send().bulk(bulk_request()).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/send/bulk"
        );

        let transport = FakeTransport::new(200, r#"{"status": 1, "message": "ok", "data": []}"#);
        let client = make_client(transport.clone());
        client.report().daily_pack(Pagination::default()).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1/send/pack"
        );
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn deprecated_aliases_keep_the_legacy_argument_order() {
        let json = r#"{"status": 1, "message": "موفق", "data": []}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        client.report_today(10, 2).await.unwrap();
        let url = transport.last_request().url;
        assert!(url.starts_with("https://example.invalid/v1/send/live?"));
        assert!(url.contains("pageNumber=2"));
        assert!(url.contains("pageSize=10"));

        client.report_today_received(25, 3).await.unwrap();
        let url = transport.last_request().url;
        assert!(url.starts_with("https://example.invalid/v1/receive/live?"));
        assert!(url.contains("pageNumber=3"));
        assert!(url.contains("pageSize=25"));
        assert!(url.contains("sortByNewest=true"));
    }

    #[test]
    fn credentials_constructors_validate_inputs() {
        assert!(Credentials::new("   ", 30007732000000).is_err());
        assert!(Credentials::new("key", 0).is_err());
        let credentials = Credentials::new(" key ", 30007732000000).unwrap();
        assert_eq!(credentials.api_key().as_str(), "key");
        assert_eq!(credentials.line_number().value(), 30007732000000);
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let credentials = Credentials::new("key", 30007732000000).unwrap();
        let client = SmsIr::builder(credentials.clone())
            .endpoint("https://example.invalid")
            .build()
            .unwrap();
        assert_eq!(
            client.dispatch.base_url.as_str(),
            "https://example.invalid/"
        );

        let err = SmsIr::builder(credentials)
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, SmsIrError::Endpoint(_)));
    }

    #[tokio::test]
    async fn envelope_level_failures_are_returned_not_raised() {
        let transport = FakeTransport::new(
            200,
            r#"{"status": 0, "message": "line not enabled", "data": null}"#,
        );
        let client = make_client(transport);

        let envelope = client.send_bulk(bulk_request()).await.unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.status, ApiStatus::new(0));
        assert_eq!(envelope.message, "line not enabled");
        assert!(envelope.data.is_none());
    }
}
