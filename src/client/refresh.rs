//! Single-flight session refresh with parked-request recovery.
//!
//! The client exposes [`ApiClient::recover`] so the request path can trade a rejected
//! access token for a fresh one without over-calling the refresh endpoint. Concurrent 401s
//! park on a shared flight guard; exactly one of them performs the
//! `POST /auth/refresh-token` call per episode, and every parked request observes that
//! single outcome. A failed refresh clears the session, rejects the parked requests, and
//! signals forced login navigation.

// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::{
	_prelude::*,
	client::ApiClient,
	obs::{self, OpKind, OpOutcome, OpSpan},
	session::{AccessToken, Session},
};

/// Path of the cookie-authenticated refresh endpoint.
pub const REFRESH_PATH: &str = "/auth/refresh-token";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
	access_token: String,
}

/// Owned refresh state for one client instance.
///
/// The flight mutex is the IDLE/REFRESHING flag: locked means a refresh episode is
/// underway and late arrivals park in the mutex's waiter queue. The epoch counts settled
/// episodes; a request compares the epoch it observed when reading its token against the
/// epoch after acquiring the guard, which tells "parked during this episode" apart from
/// "failed after it settled".
#[derive(Debug, Default)]
pub(crate) struct RefreshGate {
	flight: AsyncMutex<()>,
	epoch: AtomicU64,
}
impl RefreshGate {
	pub(crate) fn epoch(&self) -> u64 {
		self.epoch.load(Ordering::SeqCst)
	}

	fn settle(&self) {
		self.epoch.fetch_add(1, Ordering::SeqCst);
	}
}

impl ApiClient {
	/// Trades a rejected access token for a fresh one, refreshing at most once per episode.
	///
	/// `observed_epoch` is the gate epoch read together with the token that just got
	/// rejected. Exactly one caller per episode performs the refresh call; the rest reuse
	/// its outcome. Returns the token to replay with, or the terminal refresh error.
	pub(crate) async fn recover(&self, observed_epoch: u64) -> Result<AccessToken> {
		const KIND: OpKind = OpKind::Refresh;

		let span = OpSpan::new(KIND, "recover");

		obs::record_op_outcome(KIND, OpOutcome::Attempt);

		let result = span
			.instrument(async move {
				let _flight = self.gate.flight.lock().await;

				if self.gate.epoch() != observed_epoch {
					// Parked while another recovery settled; reuse its outcome.
					return match self.session().await? {
						Some(session) => Ok(session.access_token),
						None => Err(Error::refresh_failed(
							"session was cleared by a failed refresh",
							None,
						)),
					};
				}

				self.refresh_metrics.record_attempt();

				let outcome = self.call_refresh_endpoint().await;

				// Settle before any waiter runs: a 401 from here on starts a new episode.
				self.gate.settle();

				match outcome {
					Ok(token) => {
						let session = match self.session().await? {
							Some(existing) => existing.rotated(token.clone()),
							None => Session::new(token.clone(), None),
						};

						self.store.save(session).await.map_err(Error::from)?;
						self.refresh_metrics.record_success();

						Ok(token)
					},
					Err(err) => {
						let _ = self.store.clear().await;

						self.refresh_metrics.record_failure();
						self.navigator.force_login();

						Err(err)
					},
				}
			})
			.await;

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	/// Calls the refresh endpoint: no bearer header, cookie-authenticated, deadline-bound.
	async fn call_refresh_endpoint(&self) -> Result<AccessToken> {
		let url = self.config.endpoint(REFRESH_PATH)?;
		let deadline = self.config.refresh_timeout.unsigned_abs();
		let response = self.http.post(url).timeout(deadline).send().await.map_err(|e| {
			if e.is_timeout() {
				Error::refresh_failed("refresh call exceeded its deadline", None)
			} else {
				Error::refresh_failed(format!("refresh transport failed: {e}"), None)
			}
		})?;
		let status = response.status();

		if !status.is_success() {
			return Err(Error::refresh_failed(
				format!("refresh endpoint returned HTTP {}", status.as_u16()),
				Some(status.as_u16()),
			));
		}

		let bytes = response.bytes().await.map_err(|e| {
			Error::refresh_failed(
				format!("refresh response could not be read: {e}"),
				Some(status.as_u16()),
			)
		})?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
		let payload: RefreshResponse = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|e| {
				Error::refresh_failed(
					format!("refresh response did not match the contract: {e}"),
					Some(status.as_u16()),
				)
			})?;

		Ok(AccessToken::new(payload.access_token))
	}
}

/// Thread-safe counters for refresh attempts.
#[derive(Debug, Default)]
pub struct RefreshMetrics {
	attempts: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
}
impl RefreshMetrics {
	/// Returns the number of refresh calls issued.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of successful refresh calls.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns the number of failed refresh calls.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_success(&self) {
		self.success.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failure.fetch_add(1, Ordering::Relaxed);
	}
}
