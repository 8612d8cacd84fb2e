//! Registration, login, logout, and profile endpoints.

// crates.io
use serde_json::json;
// self
use crate::{
	_prelude::*,
	client::ApiClient,
	model::{LoginResponse, RegisterRequest, RegisterResponse, UserProfile},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	request::{self, RequestDescriptor},
};

const REGISTER_PATH: &str = "/api/auth/register/";
const LOGIN_PATH: &str = "/api/auth/login/";
const ME_PATH: &str = "/api/auth/me/";

impl ApiClient {
	/// Registers a new user via `POST /api/auth/register/`.
	///
	/// Registration does not log the user in; call [`login`](ApiClient::login) afterwards.
	pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
		self.execute_as(RequestDescriptor::post(REGISTER_PATH).json(request)?.anonymous())
			.await
	}

	/// Logs in via `POST /api/auth/login/` and installs the returned session.
	///
	/// When the response carries both token halves, they are stored together with the bundled
	/// user record; otherwise the response is returned as-is (the backend reports bad
	/// credentials through the executor's failure path).
	pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
		const KIND: FlowKind = FlowKind::Auth;

		let span = FlowSpan::new(KIND, "login");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.login_inner(email, password)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	async fn login_inner(&self, email: &str, password: &str) -> Result<LoginResponse> {
		let body = self
			.execute(
				RequestDescriptor::post(LOGIN_PATH)
					.json(&json!({ "email": email, "password": password }))?
					.anonymous(),
			)
			.await?;
		let response: LoginResponse = request::from_body(body)?;

		if let (Some(access), Some(refresh)) = (&response.access, &response.refresh) {
			self.install_session(access, refresh, response.user.clone()).await?;
		}

		Ok(response)
	}

	/// Clears the session and every persisted credential.
	pub async fn logout(&self) -> Result<()> {
		self.clear_session().await
	}

	/// Fetches the authenticated user's profile via `GET /api/auth/me/`.
	pub async fn current_profile(&self) -> Result<UserProfile> {
		self.execute_as(RequestDescriptor::get(ME_PATH)).await
	}
}
