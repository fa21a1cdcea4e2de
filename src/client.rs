//! The authenticated API client: bearer decoration, dispatch, and response classification.
//!
//! Every typed endpoint funnels through [`ApiClient::execute`], which attaches the current
//! access token, dispatches the request, and recovers once from a 401 by delegating to the
//! refresh gate in [`refresh`]. All other error classes surface to the caller untouched.

pub mod refresh;

pub use refresh::RefreshMetrics;

// crates.io
use reqwest::{
	Response,
	header::AUTHORIZATION,
	multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	error::TransportError,
	http::{ApiHttpClient, parse_retry_after},
	nav::{Navigator, NoopNavigator},
	obs::{self, OpKind, OpOutcome, OpSpan},
	session::{AccessToken, Session},
	store::SessionStore,
};

/// Authenticated client for the back-office REST API.
///
/// The client owns the HTTP transport (cookie jar included), the session store, the
/// navigator, and the refresh gate, so endpoint implementations can focus on paths and
/// payloads. Cloning is cheap and clones share the same gate; a process normally holds one
/// client per backend.
#[derive(Clone)]
pub struct ApiClient {
	/// HTTP transport used for every outbound request.
	pub http: ApiHttpClient,
	/// Validated configuration.
	pub config: ClientConfig,
	/// Persisted-session backend; all session mutation funnels through the client.
	pub store: Arc<dyn SessionStore>,
	/// Application hook for forced login navigation.
	pub navigator: Arc<dyn Navigator>,
	/// Shared counters for refresh outcomes.
	pub refresh_metrics: Arc<RefreshMetrics>,
	pub(crate) gate: Arc<refresh::RefreshGate>,
}
impl ApiClient {
	/// Creates a client with the default transport (cookie jar enabled).
	pub fn new(
		config: ClientConfig,
		store: Arc<dyn SessionStore>,
	) -> Result<Self, crate::error::ConfigError> {
		Ok(Self::with_http_client(config, store, ApiHttpClient::new()?))
	}

	/// Creates a client that reuses a caller-provided transport.
	pub fn with_http_client(
		config: ClientConfig,
		store: Arc<dyn SessionStore>,
		http: ApiHttpClient,
	) -> Self {
		Self {
			http,
			config,
			store,
			navigator: Arc::new(NoopNavigator),
			refresh_metrics: Default::default(),
			gate: Default::default(),
		}
	}

	/// Sets or replaces the navigator invoked on forced login navigation.
	pub fn with_navigator(mut self, navigator: impl 'static + Navigator) -> Self {
		self.navigator = Arc::new(navigator);

		self
	}

	/// Fetches the current session, if one is established.
	pub async fn session(&self) -> Result<Option<Session>> {
		Ok(self.store.load().await?)
	}

	/// Snapshots the token to attach plus the refresh-gate epoch observed at read time.
	///
	/// The epoch must be read before dispatching; a 401 is then attributed to the episode
	/// the token belongs to, not to whichever refresh happens to be current at failure time.
	async fn bearer_state(&self) -> Result<(Option<AccessToken>, u64)> {
		let token = self.session().await?.map(|session| session.access_token);

		Ok((token, self.gate.epoch()))
	}

	/// Executes a request with bearer decoration and single-retry refresh recovery.
	pub(crate) async fn execute(&self, spec: RequestSpec) -> Result<Response> {
		const KIND: OpKind = OpKind::Request;

		let span = OpSpan::new(KIND, "execute");

		obs::record_op_outcome(KIND, OpOutcome::Attempt);

		let result = span
			.instrument(async move {
				let (token, epoch) = self.bearer_state().await?;
				let response = self.dispatch(&spec, token.as_ref()).await?;

				if response.status() != StatusCode::UNAUTHORIZED {
					return Self::classify(response).await;
				}

				// One recovery per request: park on (or lead) the episode's refresh, then
				// replay with the minted token. A second 401 surfaces as-is.
				let fresh = self.recover(epoch).await?;
				let replay_span = OpSpan::new(OpKind::Replay, "execute");
				let response =
					replay_span.instrument(self.dispatch(&spec, Some(&fresh))).await?;

				if response.status() == StatusCode::UNAUTHORIZED {
					return Err(Error::Unauthorized);
				}

				Self::classify(response).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	/// Executes a request and decodes the JSON body.
	pub(crate) async fn request_json<T>(&self, spec: RequestSpec) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = self.execute(spec).await?;

		Self::decode(response).await
	}

	/// Executes a request, discarding the response body.
	pub(crate) async fn request_unit(&self, spec: RequestSpec) -> Result<()> {
		self.execute(spec).await.map(|_| ())
	}

	/// Executes a request and returns the raw response bytes.
	pub(crate) async fn request_bytes(&self, spec: RequestSpec) -> Result<Vec<u8>> {
		let response = self.execute(spec).await?;

		Ok(response.bytes().await.map_err(TransportError::from)?.to_vec())
	}

	async fn dispatch(&self, spec: &RequestSpec, token: Option<&AccessToken>) -> Result<Response> {
		let url = self.config.endpoint(&spec.path)?;
		let mut request = self.http.request(spec.method.clone(), url);

		if let Some(token) = token {
			request = request.header(AUTHORIZATION, token.bearer());
		}

		match &spec.payload {
			Payload::Empty => (),
			Payload::Json(body) => request = request.json(body),
			Payload::Multipart(upload) => request = request.multipart(upload.to_form()),
		}

		Ok(request.send().await.map_err(TransportError::from)?)
	}

	/// Maps non-success statuses (other than the handled 401) onto [`Error::Api`].
	async fn classify(response: Response) -> Result<Response> {
		let status = response.status();

		if status.is_success() {
			return Ok(response);
		}

		let retry_after = parse_retry_after(response.headers());
		let message = response
			.bytes()
			.await
			.ok()
			.and_then(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).ok())
			.and_then(|value| {
				value.get("message").and_then(|m| m.as_str()).map(|m| m.to_owned())
			});

		Err(Error::Api { status: status.as_u16(), message, retry_after })
	}

	async fn decode<T>(response: Response) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let status = response.status().as_u16();
		let bytes = response.bytes().await.map_err(TransportError::from)?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|e| Error::Decode { source: e, status })
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_address", &self.config.base_address.as_str())
			.field("refresh_timeout", &self.config.refresh_timeout)
			.finish()
	}
}

/// Replayable description of an outbound request.
///
/// Streaming bodies cannot be replayed after a refresh, so the payload is kept as owned
/// data and rebuilt on every dispatch.
#[derive(Clone, Debug)]
pub(crate) struct RequestSpec {
	method: Method,
	path: String,
	payload: Payload,
}
impl RequestSpec {
	pub(crate) fn get(path: impl Into<String>) -> Self {
		Self { method: Method::GET, path: path.into(), payload: Payload::Empty }
	}

	pub(crate) fn post(path: impl Into<String>) -> Self {
		Self { method: Method::POST, path: path.into(), payload: Payload::Empty }
	}

	pub(crate) fn post_json(path: impl Into<String>, body: &impl Serialize) -> Result<Self> {
		Ok(Self { method: Method::POST, path: path.into(), payload: Payload::json(body)? })
	}

	pub(crate) fn patch(path: impl Into<String>) -> Self {
		Self { method: Method::PATCH, path: path.into(), payload: Payload::Empty }
	}

	pub(crate) fn patch_json(path: impl Into<String>, body: &impl Serialize) -> Result<Self> {
		Ok(Self { method: Method::PATCH, path: path.into(), payload: Payload::json(body)? })
	}

	pub(crate) fn delete(path: impl Into<String>) -> Self {
		Self { method: Method::DELETE, path: path.into(), payload: Payload::Empty }
	}

	pub(crate) fn multipart(path: impl Into<String>, upload: MultipartPayload) -> Self {
		Self { method: Method::POST, path: path.into(), payload: Payload::Multipart(upload) }
	}
}

#[derive(Clone, Debug)]
enum Payload {
	Empty,
	Json(serde_json::Value),
	Multipart(MultipartPayload),
}
impl Payload {
	fn json(body: &impl Serialize) -> Result<Self> {
		Ok(Self::Json(serde_json::to_value(body).map_err(|e| Error::Encode { source: e })?))
	}
}

/// Owned multipart payload rebuilt into a [`Form`] on every dispatch attempt.
#[derive(Clone, Debug)]
pub(crate) struct MultipartPayload {
	pub file_field: &'static str,
	pub filename: String,
	pub bytes: Vec<u8>,
	pub fields: Vec<(&'static str, String)>,
}
impl MultipartPayload {
	fn to_form(&self) -> Form {
		let mut form = Form::new()
			.part(self.file_field, Part::bytes(self.bytes.clone()).file_name(self.filename.clone()));

		for (name, value) in &self.fields {
			form = form.text(*name, value.clone());
		}

		form
	}
}
