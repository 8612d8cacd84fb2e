//! Storage contracts and built-in store implementations for session credentials.
//!
//! The store is a deliberately small key-value surface (get/set/remove/clear over three
//! well-known keys) so the refresh/retry logic stays independent of any particular storage
//! mechanism. A browser shim would map it onto local storage; the built-ins cover in-process
//! and on-disk persistence.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, model::UserProfile, session::Session};

/// Boxed future returned by [`SessionStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Well-known keys a session occupies in a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKey {
	/// Access token slot.
	AccessToken,
	/// Refresh token slot.
	RefreshToken,
	/// Serialized user record slot.
	User,
}
impl SessionKey {
	/// All keys a session occupies, in persistence order.
	pub const ALL: [Self; 3] = [Self::AccessToken, Self::RefreshToken, Self::User];

	/// Returns the stable storage key string.
	pub const fn as_str(self) -> &'static str {
		match self {
			SessionKey::AccessToken => "auth_token",
			SessionKey::RefreshToken => "refresh_token",
			SessionKey::User => "user",
		}
	}
}
impl Display for SessionKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Persistence contract for session credentials.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Fetches the value stored under `key`, if present.
	fn get(&self, key: SessionKey) -> StoreFuture<'_, Option<String>>;

	/// Stores or replaces the value under `key`.
	fn set(&self, key: SessionKey, value: String) -> StoreFuture<'_, ()>;

	/// Removes the value under `key`, if present.
	fn remove(&self, key: SessionKey) -> StoreFuture<'_, ()>;

	/// Removes every session key.
	fn clear(&self) -> StoreFuture<'_, ()>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Hydrates a [`Session`] from the store's three well-known keys.
///
/// An unparseable user record is dropped rather than treated as fatal, mirroring how the
/// original client handled a corrupt cached record.
pub async fn load_session(store: &dyn SessionStore) -> Result<Session, StoreError> {
	let access = store.get(SessionKey::AccessToken).await?;
	let refresh = store.get(SessionKey::RefreshToken).await?;
	let user = match store.get(SessionKey::User).await? {
		Some(raw) => serde_json::from_str::<UserProfile>(&raw).ok(),
		None => None,
	};

	Ok(Session {
		access_token: access.map(crate::session::TokenSecret::new),
		refresh_token: refresh.map(crate::session::TokenSecret::new),
		user,
	})
}

/// Writes every present session field to the store and removes the absent ones.
pub async fn persist_session(
	store: &dyn SessionStore,
	session: &Session,
) -> Result<(), StoreError> {
	match &session.access_token {
		Some(secret) => store.set(SessionKey::AccessToken, secret.expose().to_string()).await?,
		None => store.remove(SessionKey::AccessToken).await?,
	}
	match &session.refresh_token {
		Some(secret) => store.set(SessionKey::RefreshToken, secret.expose().to_string()).await?,
		None => store.remove(SessionKey::RefreshToken).await?,
	}
	match &session.user {
		Some(user) => {
			let raw = serde_json::to_string(user).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize user record: {e}"),
			})?;

			store.set(SessionKey::User, raw).await?;
		},
		None => store.remove(SessionKey::User).await?,
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn session_keys_use_stable_storage_strings() {
		assert_eq!(SessionKey::AccessToken.as_str(), "auth_token");
		assert_eq!(SessionKey::RefreshToken.as_str(), "refresh_token");
		assert_eq!(SessionKey::User.as_str(), "user");
		assert_eq!(SessionKey::ALL.len(), 3);
	}

	#[tokio::test]
	async fn load_session_drops_corrupt_user_records() {
		let store = MemoryStore::default();

		store
			.set(SessionKey::AccessToken, "t1".into())
			.await
			.expect("Seeding the access token should succeed.");
		store
			.set(SessionKey::User, "{not json".into())
			.await
			.expect("Seeding the corrupt user record should succeed.");

		let session =
			load_session(&store).await.expect("Loading the seeded session should succeed.");

		assert!(session.is_authenticated());
		assert!(session.user.is_none());
	}

	#[tokio::test]
	async fn persist_session_removes_absent_fields() {
		let store = MemoryStore::default();

		store
			.set(SessionKey::RefreshToken, "stale".into())
			.await
			.expect("Seeding the stale refresh token should succeed.");

		let mut session = Session::default();

		session.replace_access("fresh");
		persist_session(&store, &session)
			.await
			.expect("Persisting the partial session should succeed.");

		assert_eq!(
			store
				.get(SessionKey::AccessToken)
				.await
				.expect("Reading the access token should succeed."),
			Some("fresh".to_string()),
		);
		assert_eq!(
			store
				.get(SessionKey::RefreshToken)
				.await
				.expect("Reading the refresh token should succeed."),
			None,
		);
	}
}
