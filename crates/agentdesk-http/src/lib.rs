// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The authenticated request pipeline.
//!
//! [`Http`] is the single chokepoint every resource call flows through:
//! it attaches the bearer credential, sends the request, unwraps the
//! backend's response envelope, classifies failures, and runs the decided
//! side effects (notification, session wipe, redirect) exactly once before
//! rejecting the call. Classification itself is pure and lives in
//! `agentdesk-core`; this crate is the effect-executing shell.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use agentdesk_core::{classify, DeskError, Envelope, Location, Navigator, Notifier, LOGIN_PATH};
use agentdesk_session::SessionStore;

/// The request pipeline.
///
/// Owns the HTTP client, the backend base URL, and the collaborators the
/// failure reactions touch: session state, the notification sink, and the
/// navigator. Share it behind an `Arc`; one instance serves every client.
pub struct Http {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl Http {
    /// Builds a pipeline against `base_url` with the given request timeout.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, DeskError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| DeskError::RequestBuild {
                source: Box::new(e),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            notifier,
            navigator,
        })
    }

    /// GET with no query string.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DeskError> {
        self.execute(self.client.get(self.url(path))).await
    }

    /// GET with a serializable query string.
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, DeskError> {
        self.execute(self.client.get(self.url(path)).query(query))
            .await
    }

    /// POST with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DeskError> {
        self.execute(self.client.post(self.url(path)).json(body))
            .await
    }

    /// POST with no body (action endpoints like publish/enable).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, DeskError> {
        self.execute(self.client.post(self.url(path))).await
    }

    /// POST with a multipart form (document upload).
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, DeskError> {
        self.execute(self.client.post(self.url(path)).multipart(form))
            .await
    }

    /// PUT with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DeskError> {
        self.execute(self.client.put(self.url(path)).json(body))
            .await
    }

    /// DELETE.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, DeskError> {
        self.execute(self.client.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Runs one request through the full outbound -> transport -> inbound
    /// sequence.
    ///
    /// Outbound: the bearer credential is attached iff the session token is
    /// non-empty; nothing else on the request is touched. Inbound runs
    /// exactly once per completed transport attempt. There is no epoch
    /// check: a response that arrives after a concurrent logout is still
    /// handled by this self-contained path.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, DeskError> {
        let token = self.session.token();
        let builder = if token.is_empty() {
            builder
        } else {
            builder.bearer_auth(token)
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = if e.is_builder() {
                    DeskError::RequestBuild {
                        source: Box::new(e),
                    }
                } else {
                    DeskError::Network {
                        source: Box::new(e),
                    }
                };
                self.react(&err);
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            // A non-2xx body may still carry an envelope with a usable message.
            let message = response
                .json::<Envelope>()
                .await
                .ok()
                .map(|env| env.message)
                .filter(|m| !m.is_empty());
            let err = DeskError::Status {
                status: status.as_u16(),
                message,
            };
            self.react(&err);
            return Err(err);
        }

        debug!(status = %status, "response received");
        let envelope: Envelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                let err = DeskError::Decode {
                    source: Box::new(e),
                };
                self.react(&err);
                return Err(err);
            }
        };

        match envelope.into_data::<T>() {
            Ok(data) => Ok(data),
            Err(err) => {
                self.react(&err);
                Err(err)
            }
        }
    }

    /// Executes the side effects the classification decided, exactly once,
    /// before the rejection propagates.
    ///
    /// For a 401 the session wipe completes before the navigation is
    /// issued, so the guard evaluated during that navigation observes a
    /// logged-out state. The `redirect` query parameter carries the path of
    /// the page that triggered the call.
    fn react(&self, err: &DeskError) {
        let reaction = classify(err);
        warn!(error = %err, notice = %reaction.notice, "request failed");
        self.notifier.notify(reaction.level, &reaction.notice);

        if reaction.wipe_session
            && let Err(e) = self.session.logout()
        {
            // The in-memory session is already cleared; only the store
            // purge can fail here.
            error!(error = %e, "failed to purge persistent store on logout");
        }
        if reaction.redirect_to_login {
            let current = self.navigator.current();
            self.navigator
                .push(Location::with_query(LOGIN_PATH, "redirect", current.path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdesk_core::{NoticeLevel, Page, UserProfile};
    use agentdesk_store::MemoryStore;
    use agentdesk_test_utils::{RecordingNavigator, RecordingNotifier};
    use serde_json::json;
    use wiremock::matchers::{header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Fixture {
        http: Http,
        session: Arc<SessionStore>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    fn profile(token: &str) -> UserProfile {
        UserProfile {
            id: 1,
            username: "ada".into(),
            nickname: "Ada".into(),
            email: None,
            phone: None,
            avatar: None,
            token: Some(token.into()),
        }
    }

    fn fixture(base_url: &str) -> Fixture {
        let session = Arc::new(SessionStore::restore(Arc::new(MemoryStore::new())));
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::at("/console/knowledge"));
        let http = Http::new(
            base_url,
            Duration::from_secs(5),
            session.clone(),
            notifier.clone(),
            navigator.clone(),
        )
        .unwrap();
        Fixture {
            http,
            session,
            notifier,
            navigator,
        }
    }

    #[tokio::test]
    async fn success_resolves_with_unwrapped_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/agents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "message": "ok",
                "data": {"total": 2, "pageNo": 1, "pageSize": 10, "records": [
                    {"name": "alpha"}, {"name": "beta"}
                ]}
            })))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        fx.session.login(profile("tok-1")).unwrap();

        #[derive(Debug, serde::Deserialize)]
        struct Row {
            name: String,
        }
        let page: Page<Row> = fx.http.get("/api/agents").await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.records[0].name, "alpha");
        assert!(fx.notifier.notices().is_empty(), "success emits no notice");
    }

    #[tokio::test]
    async fn bearer_header_attached_when_logged_in() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/info"))
            .and(header("authorization", "Bearer tok-7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 0,
                "message": "",
                "data": null
            })))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        fx.session.login(profile("tok-7")).unwrap();
        fx.http.get::<()>("/api/user/info").await.unwrap();
    }

    #[tokio::test]
    async fn no_bearer_header_when_logged_out() {
        let server = MockServer::start().await;
        // Fails the test if an Authorization header shows up.
        Mock::given(method("GET"))
            .and(path("/api/user/info"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/user/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 0, "message": "", "data": null
            })))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        fx.http.get::<()>("/api/user/info").await.unwrap();
    }

    #[tokio::test]
    async fn business_error_notifies_once_with_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/agents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 7,
                "message": "m",
                "data": null
            })))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        let err = fx
            .http
            .post::<i64, _>("/api/agents", &json!({"name": "x"}))
            .await
            .unwrap_err();

        assert!(matches!(err, DeskError::Business { code: 7, .. }));
        let notices = fx.notifier.notices();
        assert_eq!(notices.len(), 1, "exactly one notification");
        assert!(notices[0].1.contains('m'));
        assert!(fx.navigator.pushes().is_empty());
    }

    #[tokio::test]
    async fn unauthorized_wipes_session_then_navigates_to_login() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/knowledge-bases/5"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        fx.session.login(profile("expired")).unwrap();

        let err = fx
            .http
            .get::<serde_json::Value>("/api/knowledge-bases/5")
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert!(!fx.session.is_logged_in());

        let pushes = fx.navigator.pushes();
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].path, LOGIN_PATH);
        assert_eq!(pushes[0].query_value("redirect"), Some("/console/knowledge"));

        let notices = fx.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn logout_completes_before_navigation() {
        // Navigator fake that records whether the session was already
        // cleared at the moment the push arrived.
        struct OrderProbe {
            session: Arc<SessionStore>,
            cleared_at_push: std::sync::Mutex<Option<bool>>,
        }
        impl Navigator for OrderProbe {
            fn push(&self, _to: Location) {
                let mut seen = self.cleared_at_push.lock().unwrap();
                *seen = Some(!self.session.is_logged_in());
            }
            fn current(&self) -> Location {
                Location::path("/console/agents")
            }
        }

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let session = Arc::new(SessionStore::restore(Arc::new(MemoryStore::new())));
        session.login(profile("expired")).unwrap();
        let probe = Arc::new(OrderProbe {
            session: session.clone(),
            cleared_at_push: std::sync::Mutex::new(None),
        });
        let http = Http::new(
            server.uri(),
            Duration::from_secs(5),
            session,
            Arc::new(RecordingNotifier::new()),
            probe.clone(),
        )
        .unwrap();

        http.get::<serde_json::Value>("/api/agents/1").await.unwrap_err();
        assert_eq!(
            *probe.cleared_at_push.lock().unwrap(),
            Some(true),
            "session must be cleared before navigation is issued"
        );
    }

    #[tokio::test]
    async fn forbidden_not_found_server_error_notify_only() {
        for (status, needle) in [
            (403u16, "permission denied"),
            (404, "does not exist"),
            (500, "server error"),
        ] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let fx = fixture(&server.uri());
            fx.session.login(profile("tok-1")).unwrap();

            fx.http.get::<()>("/api/agents/1").await.unwrap_err();
            assert!(
                fx.session.is_logged_in(),
                "{status} must not clear the session"
            );
            assert!(fx.navigator.pushes().is_empty());
            let notices = fx.notifier.notices();
            assert_eq!(notices.len(), 1);
            assert!(notices[0].1.contains(needle), "{status}: {}", notices[0].1);
        }
    }

    #[tokio::test]
    async fn other_status_uses_server_supplied_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "code": 409,
                "message": "name already taken",
                "data": null
            })))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        fx.http
            .post::<(), _>("/api/agents", &json!({"name": "dup"}))
            .await
            .unwrap_err();

        let notices = fx.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].1, "name already taken");
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Nothing listens on this port.
        let fx = fixture("http://127.0.0.1:9");
        let err = fx.http.get::<()>("/api/agents").await.unwrap_err();

        assert!(matches!(err, DeskError::Network { .. }));
        let notices = fx.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].1.contains("network error"));
        assert!(fx.navigator.pushes().is_empty());
    }

    #[tokio::test]
    async fn mismatched_payload_shape_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 0,
                "message": "",
                "data": "not a number"
            })))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        let err = fx.http.get::<i64>("/api/agents/1").await.unwrap_err();
        assert!(matches!(err, DeskError::Decode { .. }));
        assert_eq!(fx.notifier.notices().len(), 1);
    }

    #[tokio::test]
    async fn query_parameters_are_serialized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/agents"))
            .and(query_param("keyword", "alpha"))
            .and(query_param("pageNo", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 0, "message": "", "data": null
            })))
            .mount(&server)
            .await;

        let fx = fixture(&server.uri());
        fx.http
            .get_query::<(), _>("/api/agents", &[("keyword", "alpha"), ("pageNo", "2")])
            .await
            .unwrap();
    }
}
