// self
use homestay_client::{
	session::Session,
	store::{self, FileStore, MemoryStore, SessionKey, SessionStore},
};
// std
use std::{env, fs, path::PathBuf, process, sync::Arc};

fn scratch_path(name: &str) -> PathBuf {
	env::temp_dir().join(format!("homestay-client-{}-{name}.json", process::id()))
}

#[tokio::test]
async fn memory_store_honors_the_key_value_contract() {
	let store = MemoryStore::default();

	assert_eq!(
		store.get(SessionKey::AccessToken).await.expect("Empty get should succeed."),
		None,
	);

	store
		.set(SessionKey::AccessToken, "t1".into())
		.await
		.expect("Set should succeed.");
	store
		.set(SessionKey::RefreshToken, "r1".into())
		.await
		.expect("Set should succeed.");

	assert_eq!(
		store.get(SessionKey::AccessToken).await.expect("Get should succeed."),
		Some("t1".to_string()),
	);

	store.remove(SessionKey::AccessToken).await.expect("Remove should succeed.");

	assert_eq!(
		store.get(SessionKey::AccessToken).await.expect("Get should succeed."),
		None,
	);
	assert_eq!(
		store.get(SessionKey::RefreshToken).await.expect("Get should succeed."),
		Some("r1".to_string()),
	);

	store.clear().await.expect("Clear should succeed.");

	for key in SessionKey::ALL {
		assert_eq!(store.get(key).await.expect("Get should succeed."), None);
	}
}

#[tokio::test]
async fn file_store_survives_a_reopen() {
	let path = scratch_path("reopen");

	let _ = fs::remove_file(&path);

	{
		let store = FileStore::open(&path).expect("Opening a fresh file store should succeed.");

		store
			.set(SessionKey::AccessToken, "persisted-access".into())
			.await
			.expect("Set should succeed.");
		store
			.set(SessionKey::User, r#"{"user_id":"u-1"}"#.into())
			.await
			.expect("Set should succeed.");
	}

	let reopened = FileStore::open(&path).expect("Reopening the file store should succeed.");

	assert_eq!(
		reopened.get(SessionKey::AccessToken).await.expect("Get should succeed."),
		Some("persisted-access".to_string()),
	);
	assert_eq!(
		reopened.get(SessionKey::User).await.expect("Get should succeed."),
		Some(r#"{"user_id":"u-1"}"#.to_string()),
	);

	reopened.clear().await.expect("Clear should succeed.");

	let reopened_again =
		FileStore::open(&path).expect("Reopening the cleared store should succeed.");

	assert_eq!(
		reopened_again.get(SessionKey::AccessToken).await.expect("Get should succeed."),
		None,
	);

	let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn session_round_trips_through_any_store() {
	let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::default());
	let mut session = Session::default();

	session.install("t1", "r1");
	store::persist_session(store.as_ref(), &session)
		.await
		.expect("Persisting the session should succeed.");

	let loaded =
		store::load_session(store.as_ref()).await.expect("Loading the session should succeed.");

	assert_eq!(loaded, session);
	assert!(loaded.is_authenticated());

	session.clear();
	store::persist_session(store.as_ref(), &session)
		.await
		.expect("Persisting the cleared session should succeed.");

	let reloaded =
		store::load_session(store.as_ref()).await.expect("Reloading should succeed.");

	assert!(!reloaded.is_authenticated());
	assert_eq!(reloaded, Session::default());
}
