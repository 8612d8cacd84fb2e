//! In-memory session state: the credential pair plus the cached user record.

// self
use crate::{_prelude::*, model::UserProfile};

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Credential pair plus cached user identity for one authenticated principal.
///
/// Created on successful login or registration, the access secret is replaced on refresh, and
/// the whole session is cleared on logout or when a refresh attempt fails. Persistence is
/// delegated to a [`SessionStore`](crate::store::SessionStore); this type itself is plain state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
	/// Short-lived token authorizing requests, absent when logged out.
	pub access_token: Option<TokenSecret>,
	/// Longer-lived token exchanged for new access tokens, absent when logged out.
	pub refresh_token: Option<TokenSecret>,
	/// Cached user record returned by the login endpoint, if any.
	pub user: Option<UserProfile>,
}
impl Session {
	/// Returns whether an access credential is currently held.
	pub fn is_authenticated(&self) -> bool {
		self.access_token.is_some()
	}

	/// Installs a fresh credential pair, replacing any previous one.
	pub fn install(&mut self, access: impl Into<String>, refresh: impl Into<String>) {
		self.access_token = Some(TokenSecret::new(access));
		self.refresh_token = Some(TokenSecret::new(refresh));
	}

	/// Replaces only the access credential, keeping the refresh credential as issued.
	pub fn replace_access(&mut self, access: impl Into<String>) {
		self.access_token = Some(TokenSecret::new(access));
	}

	/// Clears every session field (logout semantics).
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}
