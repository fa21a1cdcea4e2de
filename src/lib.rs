//! Typed REST client for the media back office—bearer decoration, single-flight token
//! refresh, and session persistence in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod nav;
pub mod obs;
pub mod session;
pub mod store;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	pub use crate::store::SessionStore;
	use crate::{
		client::ApiClient,
		config::ClientConfig,
		http::ApiHttpClient,
		nav::Navigator,
		session::{AccessToken, Session},
		store::MemoryStore,
	};

	/// Navigator test double that counts forced-login signals.
	#[derive(Debug, Default)]
	pub struct RecordingNavigator(AtomicUsize);
	impl RecordingNavigator {
		/// Returns how many times the client forced login navigation.
		pub fn forced_logins(&self) -> usize {
			self.0.load(Ordering::SeqCst)
		}
	}
	impl Navigator for RecordingNavigator {
		fn force_login(&self) {
			self.0.fetch_add(1, Ordering::SeqCst);
		}
	}

	/// Builds the plain reqwest transport used across integration tests.
	pub fn test_http_client() -> ApiHttpClient {
		let client = ReqwestClient::builder()
			.cookie_store(true)
			.build()
			.expect("Failed to build Reqwest client for tests.");

		ApiHttpClient::with_client(client)
	}

	/// Constructs an [`ApiClient`] backed by an in-memory store and a recording navigator,
	/// pointed at the provided mock-server base address.
	pub fn build_test_client(
		base_address: &str,
	) -> (ApiClient, Arc<MemoryStore>, Arc<RecordingNavigator>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn SessionStore> = store_backend.clone();
		let navigator = Arc::new(RecordingNavigator::default());
		let config = ClientConfig::builder(base_address)
			.build()
			.expect("Failed to build test client configuration.");
		let mut client = ApiClient::with_http_client(config, store, test_http_client());

		client.navigator = navigator.clone();

		(client, store_backend, navigator)
	}

	/// Seeds the store with a session carrying the provided access token.
	pub async fn seed_session(store: &MemoryStore, token: &str) {
		store
			.save(Session::new(AccessToken::new(token), None))
			.await
			.expect("Failed to seed session into the store.");
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeSet,
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
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
