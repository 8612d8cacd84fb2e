//! Async client for the Homestay rental platform API—bearer sessions, refresh-on-401 retries,
//! and pluggable session stores in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod request;
pub mod session;
pub mod store;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::ApiClient,
		http::HttpClient,
		store::{MemoryStore, SessionKey, SessionStore},
	};

	/// Constructs an [`ApiClient`] backed by an in-memory store, pointed at the provided base
	/// URL (typically an `httpmock` server).
	pub async fn build_test_client(base_url: Url) -> (ApiClient, Arc<MemoryStore>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn SessionStore> = store_backend.clone();
		let client = ApiClient::with_http_client(base_url, store, HttpClient::default())
			.await
			.expect("Failed to build test client.");

		(client, store_backend)
	}

	/// Constructs a test client whose store is pre-seeded with the provided credentials, then
	/// hydrated, so the session starts authenticated.
	pub async fn seeded_test_client(
		base_url: Url,
		access: &str,
		refresh: &str,
	) -> (ApiClient, Arc<MemoryStore>) {
		let store_backend = Arc::new(MemoryStore::default());

		store_backend
			.set(SessionKey::AccessToken, access.to_string())
			.await
			.expect("Failed to seed access token into the store.");
		store_backend
			.set(SessionKey::RefreshToken, refresh.to_string())
			.await
			.expect("Failed to seed refresh token into the store.");

		let store: Arc<dyn SessionStore> = store_backend.clone();
		let client = ApiClient::with_http_client(base_url, store, HttpClient::default())
			.await
			.expect("Failed to build seeded test client.");

		(client, store_backend)
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, Method, StatusCode};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as Json;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
