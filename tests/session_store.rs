// self
use backoffice_api::{
	_preludet::*,
	session::{AccessToken, Session},
	store::MemoryStore,
};

fn build_session(token: &str) -> Session {
	Session::new(AccessToken::new(token), None)
}

#[tokio::test]
async fn save_and_load_round_trip() {
	let store = MemoryStore::default();

	assert!(
		store.load().await.expect("Loading an empty store should succeed.").is_none(),
		"A fresh store must report no session.",
	);

	store
		.save(build_session("access-1"))
		.await
		.expect("Saving session fixture into memory store should succeed.");

	let fetched = store
		.load()
		.await
		.expect("Loading session from memory store should succeed.")
		.expect("Stored session should remain present.");

	assert_eq!(fetched.access_token.expose(), "access-1");
}

#[tokio::test]
async fn save_replaces_the_previous_session() {
	let store = MemoryStore::default();

	store
		.save(build_session("access-old"))
		.await
		.expect("Saving the initial session should succeed.");
	store
		.save(build_session("access-new"))
		.await
		.expect("Replacing the session should succeed.");

	let fetched = store
		.load()
		.await
		.expect("Loading the replaced session should succeed.")
		.expect("Replaced session should remain present.");

	assert_eq!(fetched.access_token.expose(), "access-new");
}

#[tokio::test]
async fn clear_returns_the_previous_session_exactly_once() {
	let store = MemoryStore::default();

	store.save(build_session("access-1")).await.expect("Saving the session should succeed.");

	let previous = store
		.clear()
		.await
		.expect("Clearing the session should succeed.")
		.expect("Clearing should return the destroyed session.");

	assert_eq!(previous.access_token.expose(), "access-1");
	assert!(store.clear().await.expect("A second clear should succeed.").is_none());
	assert!(store.load().await.expect("Loading after clear should succeed.").is_none());
}

#[tokio::test]
async fn clones_share_the_same_slot() {
	let store = MemoryStore::default();
	let clone = store.clone();

	store.save(build_session("shared")).await.expect("Saving through one handle should succeed.");

	let fetched = clone
		.load()
		.await
		.expect("Loading through the cloned handle should succeed.")
		.expect("The cloned handle must observe the saved session.");

	assert_eq!(fetched.access_token.expose(), "shared");
}
