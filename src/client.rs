//! The [`ApiClient`]: session ownership, store wiring, and the refresh flow.

// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	http::HttpClient,
	model::{RefreshResponse, UserProfile},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	request::{self, RequestMetrics},
	session::Session,
	store::{self, SessionStore},
};

const REFRESH_PATH: &str = "/api/token/refresh/";

/// Client for the Homestay backend, owning the session and its persistence collaborator.
///
/// The client hydrates its session from the injected [`SessionStore`] on construction and
/// writes every credential change back through it, so the refresh/retry logic stays
/// independent of any specific storage mechanism. Cloning is cheap; clones share the session,
/// the store, and the refresh guard.
#[derive(Clone)]
pub struct ApiClient {
	/// Root URL every endpoint path is joined against.
	pub base_url: Url,
	/// HTTP client wrapper used for every outbound request.
	pub http: HttpClient,
	/// Persistence collaborator for session credentials.
	pub store: Arc<dyn SessionStore>,
	/// Shared metrics recorder for executor activity.
	pub request_metrics: Arc<RequestMetrics>,
	session: Arc<RwLock<Session>>,
	refresh_guard: Arc<AsyncMutex<()>>,
}
impl ApiClient {
	/// Creates a client with the default HTTP transport, hydrating the session from `store`.
	pub async fn connect(base_url: Url, store: Arc<dyn SessionStore>) -> Result<Self> {
		Self::with_http_client(base_url, store, HttpClient::default()).await
	}

	/// Creates a client that reuses the caller-provided transport.
	pub async fn with_http_client(
		base_url: Url,
		store: Arc<dyn SessionStore>,
		http: HttpClient,
	) -> Result<Self> {
		if base_url.cannot_be_a_base() {
			return Err(ConfigError::InvalidBaseUrl { base: base_url.to_string() }.into());
		}

		let session = store::load_session(store.as_ref()).await?;

		Ok(Self {
			base_url,
			http,
			store,
			request_metrics: Default::default(),
			session: Arc::new(RwLock::new(session)),
			refresh_guard: Default::default(),
		})
	}

	/// Resolves an endpoint path (query string included) against the base URL.
	pub fn endpoint_url(&self, path: &str) -> Result<Url> {
		self.base_url
			.join(path)
			.map_err(|source| ConfigError::InvalidPath { path: path.to_string(), source }.into())
	}

	/// Returns a snapshot of the current session.
	pub fn session(&self) -> Session {
		self.session.read().clone()
	}

	/// Returns whether an access credential is currently held.
	pub fn is_authenticated(&self) -> bool {
		self.session.read().is_authenticated()
	}

	/// Returns the cached user record from the last login, if any.
	pub fn current_user(&self) -> Option<UserProfile> {
		self.session.read().user.clone()
	}

	pub(crate) fn access_token(&self) -> Option<String> {
		self.session.read().access_token.as_ref().map(|secret| secret.expose().to_string())
	}

	pub(crate) fn has_refresh_token(&self) -> bool {
		self.session.read().refresh_token.is_some()
	}

	/// Installs a fresh credential pair plus user record and persists the session.
	pub(crate) async fn install_session(
		&self,
		access: &str,
		refresh: &str,
		user: Option<UserProfile>,
	) -> Result<()> {
		let snapshot = {
			let mut guard = self.session.write();

			guard.install(access, refresh);
			guard.user = user;
			guard.clone()
		};

		store::persist_session(self.store.as_ref(), &snapshot).await?;

		Ok(())
	}

	/// Clears the in-memory session and every persisted key.
	pub(crate) async fn clear_session(&self) -> Result<()> {
		self.session.write().clear();
		self.store.clear().await?;

		Ok(())
	}

	/// Exchanges the refresh credential for a new access credential.
	///
	/// The exchange is serialized behind an async guard so overlapping 401s trigger a single
	/// upstream call: when `stale_access` no longer matches the session (another flight
	/// already rotated it), the held token is reused without contacting the backend. Any
	/// failure clears the session—logout semantics—before [`Error::RefreshFailed`] surfaces.
	///
	/// The refresh request goes straight to the transport rather than through
	/// [`execute`](ApiClient::execute), so a 401 from the refresh endpoint can never recurse
	/// into another refresh.
	pub async fn refresh_session(&self, stale_access: Option<&str>) -> Result<()> {
		const KIND: FlowKind = FlowKind::Refresh;

		let span = FlowSpan::new(KIND, "refresh_session");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.refresh_session_inner(stale_access)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	async fn refresh_session_inner(&self, stale_access: Option<&str>) -> Result<()> {
		let _singleflight = self.refresh_guard.lock().await;

		// Another flight may have rotated the credential while we waited on the guard.
		let already_rotated =
			stale_access.is_some_and(|stale| self.access_token().as_deref() != Some(stale));

		if already_rotated {
			return Ok(());
		}

		let Some(refresh) = self
			.session
			.read()
			.refresh_token
			.as_ref()
			.map(|secret| secret.expose().to_string())
		else {
			return Err(Error::RefreshFailed {
				reason: "No refresh credential is available".into(),
			});
		};

		match self.exchange_refresh_token(&refresh).await {
			Ok(access) => {
				let snapshot = {
					let mut guard = self.session.write();

					guard.replace_access(&access);
					guard.clone()
				};

				store::persist_session(self.store.as_ref(), &snapshot).await?;

				Ok(())
			},
			Err(reason) => {
				self.clear_session().await?;

				Err(Error::RefreshFailed { reason })
			},
		}
	}

	async fn exchange_refresh_token(&self, refresh: &str) -> Result<String, String> {
		let url = self.endpoint_url(REFRESH_PATH).map_err(|e| e.to_string())?;
		let response = self
			.http
			.post(url)
			.json(&serde_json::json!({ "refresh": refresh }))
			.send()
			.await
			.map_err(|e| TransportError::from(e).to_string())?;
		let status = response.status();
		let bytes = response.bytes().await.map_err(|e| TransportError::from(e).to_string())?;
		let body = request::parse_json_or_empty(&bytes);

		if !status.is_success() {
			return Err(request::error_message(&body));
		}

		let parsed: RefreshResponse = request::from_body(body).map_err(|e| e.to_string())?;

		parsed.access.ok_or_else(|| "Refresh response omitted the access token".to_string())
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.base_url.as_str())
			.field("authenticated", &self.is_authenticated())
			.finish()
	}
}
