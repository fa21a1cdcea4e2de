// crates.io
use httpmock::prelude::*;
// self
use backoffice_api::{_preludet::*, config::ClientConfig, error::Error};

#[tokio::test]
async fn concurrent_401s_share_one_refresh_and_replay_with_the_new_token() {
	let server = MockServer::start_async().await;
	let (client, store, _navigator) = build_test_client(&server.base_url());

	seed_session(&store, "t-1").await;

	let stale = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos").header("authorization", "Bearer t-1");
			then.status(401);
		})
		.await;
	let fresh = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos").header("authorization", "Bearer t-2");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"accessToken\":\"t-2\"}");
		})
		.await;
	let (first, second, third) =
		tokio::join!(client.videos(), client.videos(), client.videos());

	assert!(first.expect("First request should settle on the refresh outcome.").is_empty());
	assert!(second.expect("Second request should settle on the refresh outcome.").is_empty());
	assert!(third.expect("Third request should settle on the refresh outcome.").is_empty());

	refresh.assert_calls_async(1).await;
	stale.assert_calls_async(3).await;
	fresh.assert_calls_async(3).await;

	assert_eq!(client.refresh_metrics.attempts(), 1);
	assert_eq!(client.refresh_metrics.successes(), 1);

	// The rotated token is the one persisted and attached to fresh requests.
	let session = store
		.load()
		.await
		.expect("Session load should succeed after refresh.")
		.expect("Session should survive a successful refresh.");

	assert_eq!(session.access_token.expose(), "t-2");

	client.videos().await.expect("A fresh request should use the rotated token.");

	fresh.assert_calls_async(4).await;
	refresh.assert_calls_async(1).await;
}

#[tokio::test]
async fn retried_request_surfaces_the_second_401_without_a_new_episode() {
	let server = MockServer::start_async().await;
	let (client, store, _navigator) = build_test_client(&server.base_url());

	seed_session(&store, "t-1").await;

	let protected = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"accessToken\":\"t-2\"}");
		})
		.await;
	let err = client
		.videos()
		.await
		.expect_err("A 401 on the replay must surface instead of looping.");

	assert!(matches!(err, Error::Unauthorized));

	// Original dispatch plus exactly one replay, one refresh in between.
	protected.assert_calls_async(2).await;
	refresh.assert_calls_async(1).await;
}

#[tokio::test]
async fn failed_refresh_clears_the_session_and_forces_login() {
	let server = MockServer::start_async().await;
	let (client, store, navigator) = build_test_client(&server.base_url());

	seed_session(&store, "t-1").await;

	let _protected = server
		.mock_async(|when, then| {
			when.method(GET).path("/verses");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(403);
		})
		.await;
	let err = client.verses().await.expect_err("A rejected refresh is terminal.");

	assert!(matches!(err, Error::RefreshFailed { status: Some(403), .. }));

	refresh.assert_calls_async(1).await;

	assert!(
		store.load().await.expect("Session load should succeed.").is_none(),
		"Session data must be removed after a failed refresh.",
	);
	assert_eq!(navigator.forced_logins(), 1);
	assert_eq!(client.refresh_metrics.failures(), 1);
}

#[tokio::test]
async fn failed_refresh_rejects_every_parked_request() {
	let server = MockServer::start_async().await;
	let (client, store, navigator) = build_test_client(&server.base_url());

	seed_session(&store, "t-1").await;

	let _protected = server
		.mock_async(|when, then| {
			when.method(GET).path("/verses");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(403);
		})
		.await;
	let (first, second, third) =
		tokio::join!(client.verses(), client.verses(), client.verses());

	for result in [first, second, third] {
		let err = result.expect_err("Every parked request must observe the refresh failure.");

		assert!(err.is_refresh_failure(), "Expected a terminal refresh failure, got: {err}.");
	}

	refresh.assert_calls_async(1).await;

	assert!(store.load().await.expect("Session load should succeed.").is_none());
	assert_eq!(navigator.forced_logins(), 1);
}

#[tokio::test]
async fn non_authorization_errors_bypass_the_refresh_protocol() {
	let server = MockServer::start_async().await;
	let (client, store, navigator) = build_test_client(&server.base_url());

	seed_session(&store, "t-1").await;

	let _protected = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos");
			then.status(500)
				.header("content-type", "application/json")
				.body("{\"success\":false,\"message\":\"database unreachable\"}");
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"accessToken\":\"t-2\"}");
		})
		.await;
	let err = client.videos().await.expect_err("A 500 must propagate unchanged.");

	match err {
		Error::Api { status, message, .. } => {
			assert_eq!(status, 500);
			assert_eq!(message.as_deref(), Some("database unreachable"));
		},
		other => panic!("Expected an API error, got: {other}."),
	}

	refresh.assert_calls_async(0).await;

	let session = store
		.load()
		.await
		.expect("Session load should succeed.")
		.expect("Session must survive non-authorization failures.");

	assert_eq!(session.access_token.expose(), "t-1");
	assert_eq!(navigator.forced_logins(), 0);
	assert_eq!(client.refresh_metrics.attempts(), 0);
}

#[tokio::test]
async fn stalled_refresh_hits_the_deadline_and_is_terminal() {
	let server = MockServer::start_async().await;
	let (mut client, store, navigator) = build_test_client(&server.base_url());

	client.config = ClientConfig::builder(server.base_url())
		.refresh_timeout(Duration::milliseconds(150))
		.build()
		.expect("Test configuration should build successfully.");

	seed_session(&store, "t-1").await;

	let _protected = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos");
			then.status(401);
		})
		.await;
	let _refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"accessToken\":\"t-2\"}")
				.delay(std::time::Duration::from_secs(2));
		})
		.await;
	let err = client.videos().await.expect_err("A stalled refresh must not hang the caller.");

	assert!(err.is_refresh_failure(), "Expected a terminal refresh failure, got: {err}.");
	assert!(store.load().await.expect("Session load should succeed.").is_none());
	assert_eq!(navigator.forced_logins(), 1);
}

#[tokio::test]
async fn episodes_after_settlement_start_a_new_refresh_cycle() {
	let server = MockServer::start_async().await;
	let (client, store, _navigator) = build_test_client(&server.base_url());

	seed_session(&store, "t-1").await;

	let _stale_1 = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos").header("authorization", "Bearer t-1");
			then.status(401);
		})
		.await;
	let mut t2_ok = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos").header("authorization", "Bearer t-2");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let mut refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"accessToken\":\"t-2\"}");
		})
		.await;

	client.videos().await.expect("First episode should recover.");

	t2_ok.assert_calls_async(1).await;
	refresh.assert_calls_async(1).await;

	// The backend invalidates t-2 as well; the next failure is a fresh episode.
	t2_ok.delete_async().await;

	let _stale_2 = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos").header("authorization", "Bearer t-2");
			then.status(401);
		})
		.await;
	let t3_ok = server
		.mock_async(|when, then| {
			when.method(GET).path("/videos").header("authorization", "Bearer t-3");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;

	refresh.delete_async().await;

	let refresh_2 = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"accessToken\":\"t-3\"}");
		})
		.await;

	client.videos().await.expect("Second episode should recover independently.");

	refresh_2.assert_calls_async(1).await;
	t3_ok.assert_calls_async(1).await;

	assert_eq!(client.refresh_metrics.attempts(), 2);
}
