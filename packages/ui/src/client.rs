//! # Authenticated requests with session-expiry handling
//!
//! [`AuthClient::fetch_with_auth`] is what page code calls instead of a raw
//! request. It attaches the stored bearer token, sends the request, and asks
//! [`api::classify_status`] what to do with the answer:
//!
//! - **pass-through** (anything but 401, including 403 and 5xx): the response
//!   is returned as-is, with no toast and no session change;
//! - **session expired** (401): an error toast is shown, the session is
//!   cleared, navigation to the login page is scheduled after a short delay,
//!   and the caller gets [`FetchError::Unauthorized`] instead of a response.
//!
//! Transport failures are returned untouched and trigger none of the above.
//! There is no retry, no token refresh and no queuing while the redirect is
//! pending.

use std::rc::Rc;

use api::{
    classify_status, with_bearer, AuthDecision, AuthSession, FetchError, HttpClient,
    RequestOptions, Response,
};
use store::{AuthConfig, KeyValueStore};

use crate::navigation::Navigator;
use crate::scheduler::Scheduler;
use crate::toast::{NotificationSink, Notifier};

/// Performs requests on behalf of the logged-in user.
pub struct AuthClient<C, S, K, T, N>
where
    S: KeyValueStore,
{
    http: C,
    session: AuthSession<S>,
    notifier: Notifier<K, T>,
    navigator: Rc<N>,
    config: AuthConfig,
}

impl<C, S, K, T, N> AuthClient<C, S, K, T, N>
where
    C: HttpClient,
    S: KeyValueStore,
    K: NotificationSink + 'static,
    T: Scheduler + 'static,
    N: Navigator + 'static,
{
    pub fn new(http: C, session: AuthSession<S>, notifier: Notifier<K, T>, navigator: N) -> Self {
        Self {
            http,
            session,
            notifier,
            navigator: Rc::new(navigator),
            config: AuthConfig::default(),
        }
    }

    /// Builder method to replace the session-expiry settings.
    pub fn with_config(mut self, config: AuthConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &AuthSession<S> {
        &self.session
    }

    pub fn notifier(&self) -> &Notifier<K, T> {
        &self.notifier
    }

    /// Send `options` to `url` with the stored bearer token attached.
    pub async fn fetch_with_auth(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, FetchError> {
        let token = self.session.token();
        let options = with_bearer(options, token.as_deref());

        let response = self.http.send(url, options).await?;

        match classify_status(response.status) {
            AuthDecision::PassThrough => Ok(response),
            AuthDecision::SessionExpired => {
                tracing::warn!("{} answered 401, session expired", url);
                self.expire_session();
                Err(FetchError::Unauthorized)
            }
        }
    }

    fn expire_session(&self) {
        self.notifier.error(&self.config.session_expired_message);
        self.session.clear();

        let navigator = Rc::clone(&self.navigator);
        let login_page = self.config.login_page.clone();
        self.notifier.scheduler().after(
            self.config.redirect_delay(),
            Box::new(move || navigator.navigate(&login_page)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::scheduler::ManualScheduler;
    use crate::toast::{MemorySink, Severity};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::time::Duration;
    use store::MemoryStore;

    /// HttpClient answering from a script and recording what it was sent.
    #[derive(Clone, Default)]
    struct ScriptedHttp {
        replies: Rc<RefCell<VecDeque<Result<Response, FetchError>>>>,
        sent: Rc<RefCell<Vec<(String, RequestOptions)>>>,
    }

    impl ScriptedHttp {
        fn replying(reply: Result<Response, FetchError>) -> Self {
            let http = Self::default();
            http.replies.borrow_mut().push_back(reply);
            http
        }

        fn sent(&self) -> Vec<(String, RequestOptions)> {
            self.sent.borrow().clone()
        }
    }

    impl HttpClient for ScriptedHttp {
        async fn send(&self, url: &str, options: RequestOptions) -> Result<Response, FetchError> {
            self.sent.borrow_mut().push((url.to_string(), options));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Response::new(200)))
        }
    }

    struct Harness {
        client: AuthClient<ScriptedHttp, MemoryStore, MemorySink, ManualScheduler, RecordingNavigator>,
        http: ScriptedHttp,
        store: MemoryStore,
        sink: MemorySink,
        scheduler: ManualScheduler,
        navigator: RecordingNavigator,
    }

    fn harness(reply: Result<Response, FetchError>) -> Harness {
        let http = ScriptedHttp::replying(reply);
        let store = MemoryStore::new();
        let sink = MemorySink::new();
        let scheduler = ManualScheduler::new();
        let navigator = RecordingNavigator::new();
        let client = AuthClient::new(
            http.clone(),
            AuthSession::new(store.clone()),
            Notifier::new(sink.clone(), scheduler.clone()),
            navigator.clone(),
        );
        Harness {
            client,
            http,
            store,
            sink,
            scheduler,
            navigator,
        }
    }

    fn logged_in(h: &Harness, token: &str) {
        h.store.set("auth_token", token);
        h.store.set("user_role", "Reporter");
        h.store.set("user_id", "reporter@example.com");
    }

    #[tokio::test]
    async fn test_attaches_bearer_token() {
        let h = harness(Ok(Response::new(200)));
        logged_in(&h, "abc");

        h.client
            .fetch_with_auth("/get_reports?role=Reporter", RequestOptions::get())
            .await
            .unwrap();

        let sent = h.http.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/get_reports?role=Reporter");
        assert_eq!(sent[0].1.header_value("Authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_no_token_leaves_options_untouched() {
        let h = harness(Ok(Response::new(200)));
        let options = RequestOptions::post()
            .header("Content-Type", "application/json")
            .body(r#"{"user_id":"a"}"#);

        h.client
            .fetch_with_auth("/register", options.clone())
            .await
            .unwrap();

        assert_eq!(h.http.sent()[0].1, options);
    }

    #[tokio::test]
    async fn test_ok_response_passes_through() {
        let reply = Response::new(200).with_body(r#"{"reports":[]}"#);
        let h = harness(Ok(reply.clone()));
        logged_in(&h, "abc");

        let response = h
            .client
            .fetch_with_auth("/get_reports", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(response, reply);
        assert!(h.sink.appended().is_empty());
        assert_eq!(h.client.session().token().as_deref(), Some("abc"));
        assert_eq!(h.store.len(), 3);

        h.scheduler.run_all();
        assert!(h.navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn test_other_error_statuses_pass_through() {
        for status in [403, 404, 500] {
            let h = harness(Ok(Response::new(status)));
            logged_in(&h, "abc");

            let response = h
                .client
                .fetch_with_auth("/update_report", RequestOptions::post())
                .await
                .unwrap();

            assert_eq!(response.status, status);
            assert!(h.sink.appended().is_empty());
            assert!(h.client.session().is_logged_in());
        }
    }

    #[tokio::test]
    async fn test_unauthorized_expires_session() {
        let h = harness(Ok(Response::new(401)));
        logged_in(&h, "abc");
        h.store.set("device_id", "device_abc123xyz_1700000000000");

        let result = h
            .client
            .fetch_with_auth("/get_reports", RequestOptions::get())
            .await;

        assert_eq!(result, Err(FetchError::Unauthorized));
        assert!(h.client.session().token().is_none());
        assert!(h.client.session().role().is_none());
        assert!(h.client.session().user_id().is_none());
        assert!(!h.client.session().is_logged_in());
        assert!(h.store.get("device_id").is_some());

        let toasts = h.sink.appended();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Error);
        assert_eq!(toasts[0].message, "Session expired. Please login again.");

        h.scheduler.advance(Duration::from_millis(1499));
        assert!(h.navigator.visits().is_empty());
        h.scheduler.advance(Duration::from_millis(1));
        assert_eq!(h.navigator.visits(), vec!["login.html".to_string()]);

        // The toast still runs its own course
        assert_eq!(h.sink.toasts().len(), 1);
        h.scheduler.run_all();
        assert!(h.sink.toasts().is_empty());
        assert_eq!(h.navigator.visits().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_propagates_without_side_effects() {
        let h = harness(Err(FetchError::Transport("connection refused".to_string())));
        logged_in(&h, "abc");

        let err = h
            .client
            .fetch_with_auth("/get_reports", RequestOptions::get())
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::Transport("connection refused".to_string()));
        assert!(!err.is_unauthorized());
        assert!(h.client.session().is_logged_in());
        assert!(h.sink.appended().is_empty());
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_configured_login_page() {
        let h = harness(Ok(Response::new(401)));
        let client = h.client.with_config(AuthConfig {
            login_page: "/portal/login".to_string(),
            redirect_delay_ms: 0,
            ..AuthConfig::default()
        });

        let result = client.fetch_with_auth("/me", RequestOptions::get()).await;
        assert!(result.unwrap_err().is_unauthorized());

        h.scheduler.advance(Duration::ZERO);
        assert_eq!(h.navigator.visits(), vec!["/portal/login".to_string()]);
    }
}
