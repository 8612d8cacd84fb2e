//! The authenticated request executor: bearer attachment, refresh-on-401, single retry.
//!
//! [`ApiClient::execute`] implements the per-request state machine
//! `Issued -> Success | Unauthorized -> Refreshing -> Retried -> Success | Failed`. A 401 with
//! a refresh credential on hand triggers exactly one refresh call and at most one retry; the
//! retried request carries the freshly issued access token. Every other non-2xx response
//! surfaces as [`Error::RequestFailed`] with the best server-supplied message.

mod metrics;

pub use metrics::RequestMetrics;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	client::ApiClient,
	error::{ConfigError, TransportError},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};

/// Generic fallback when the backend supplies no usable error field.
const GENERIC_FAILURE: &str = "Request failed";

/// Ephemeral description of one backend call.
///
/// Authorization is required by default, matching the original client; anonymous endpoints
/// opt out via [`RequestDescriptor::anonymous`].
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// Endpoint path relative to the base URL, query string included.
	pub path: String,
	/// HTTP method.
	pub method: Method,
	/// JSON body, if any.
	pub body: Option<Json>,
	/// Whether a bearer credential should be attached when one is held.
	pub requires_auth: bool,
}
impl RequestDescriptor {
	/// Creates a GET descriptor for the provided path.
	pub fn get(path: impl Into<String>) -> Self {
		Self { path: path.into(), method: Method::GET, body: None, requires_auth: true }
	}

	/// Creates a POST descriptor for the provided path.
	pub fn post(path: impl Into<String>) -> Self {
		Self { path: path.into(), method: Method::POST, body: None, requires_auth: true }
	}

	/// Attaches a JSON body.
	pub fn json(mut self, body: &impl Serialize) -> Result<Self> {
		self.body = Some(serde_json::to_value(body).map_err(ConfigError::BodySerialization)?);

		Ok(self)
	}

	/// Marks the request as not requiring authorization.
	pub fn anonymous(mut self) -> Self {
		self.requires_auth = false;

		self
	}
}

impl ApiClient {
	/// Executes the descriptor and returns the parsed response body.
	///
	/// See the [module docs](crate::request) for the refresh/retry contract. The session may
	/// be mutated as a side effect: a successful refresh replaces the access credential, a
	/// failed one clears the whole session.
	pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<Json> {
		const KIND: FlowKind = FlowKind::Request;

		let span = FlowSpan::new(KIND, "execute");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.execute_inner(descriptor)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	/// Executes the descriptor and deserializes the body into `T`.
	pub async fn execute_as<T>(&self, descriptor: RequestDescriptor) -> Result<T>
	where
		T: DeserializeOwned,
	{
		from_body(self.execute(descriptor).await?)
	}

	async fn execute_inner(&self, descriptor: RequestDescriptor) -> Result<Json> {
		self.request_metrics.record_attempt();

		let url = self.endpoint_url(&descriptor.path)?;
		let used_access = self.access_token();
		let (status, body) = self.dispatch(&url, &descriptor, used_access.as_deref()).await?;

		if status.is_success() {
			self.request_metrics.record_success();

			return Ok(body);
		}

		if status == StatusCode::UNAUTHORIZED && self.has_refresh_token() {
			self.request_metrics.record_refresh();

			// A failed refresh already cleared the session; the original response decides the
			// error either way.
			if self.refresh_session(used_access.as_deref()).await.is_ok() {
				self.request_metrics.record_retry();

				let fresh_access = self.access_token();
				let (retry_status, retry_body) =
					self.dispatch(&url, &descriptor, fresh_access.as_deref()).await?;

				if retry_status.is_success() {
					self.request_metrics.record_success();

					return Ok(retry_body);
				}
			}
		}

		self.request_metrics.record_failure();

		Err(Error::RequestFailed { status: status.as_u16(), message: error_message(&body) })
	}

	async fn dispatch(
		&self,
		url: &Url,
		descriptor: &RequestDescriptor,
		bearer: Option<&str>,
	) -> Result<(StatusCode, Json)> {
		let mut builder = self.http.request(descriptor.method.clone(), url.clone());

		if let (true, Some(token)) = (descriptor.requires_auth, bearer) {
			builder = builder.bearer_auth(token);
		}
		if let Some(body) = &descriptor.body {
			builder = builder.json(body);
		}

		let response = builder.send().await.map_err(TransportError::from)?;
		let status = response.status();
		let bytes = response.bytes().await.map_err(TransportError::from)?;

		Ok((status, parse_json_or_empty(&bytes)))
	}
}

/// Parses a response body as JSON, degrading malformed or empty payloads to `{}`.
pub(crate) fn parse_json_or_empty(bytes: &[u8]) -> Json {
	serde_json::from_slice(bytes).unwrap_or_else(|_| Json::Object(Default::default()))
}

/// Extracts the best available failure message from a response body.
pub(crate) fn error_message(body: &Json) -> String {
	["detail", "message", "error"]
		.iter()
		.find_map(|key| body.get(key).and_then(Json::as_str))
		.unwrap_or(GENERIC_FAILURE)
		.to_string()
}

/// Deserializes a response body into `T`, reporting the offending JSON path on mismatch.
pub(crate) fn from_body<T>(body: Json) -> Result<T>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(body)
		.map_err(|source| ConfigError::ResponseParse { source }.into())
}

/// Deserializes a list response, accepting both bare arrays and DRF-style paginated
/// envelopes (`{"count": .., "results": [..]}`).
pub(crate) fn list_from_body<T>(body: Json) -> Result<Vec<T>>
where
	T: DeserializeOwned,
{
	match body {
		Json::Object(mut map) if map.contains_key("results") =>
			from_body(map.remove("results").unwrap_or(Json::Array(Vec::new()))),
		other => from_body(other),
	}
}
