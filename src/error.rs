//! Client-level error types shared across the request path, session store, and config layer.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Session-storage failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The access token was rejected and the single allowed retry is already spent.
	#[error("Access token was rejected by the backend (HTTP 401).")]
	Unauthorized,
	/// The refresh endpoint rejected the session or never settled; terminal for the session.
	#[error("Session refresh failed: {reason}.")]
	RefreshFailed {
		/// Human-readable summary of the refresh failure.
		reason: String,
		/// HTTP status returned by the refresh endpoint, when available.
		status: Option<u16>,
	},
	/// Any other HTTP error status, surfaced to the caller untouched.
	#[error("Backend returned HTTP {status}.")]
	Api {
		/// HTTP status code returned by the backend.
		status: u16,
		/// Error message extracted from the response envelope, if any.
		message: Option<String>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	Encode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Response body did not match the endpoint contract.
	#[error("Backend returned a response body that does not match the contract.")]
	Decode {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the offending response.
		status: u16,
	},
}
impl Error {
	/// Builds the terminal refresh failure carried to the originating caller and every parked
	/// request.
	pub(crate) fn refresh_failed(reason: impl Into<String>, status: Option<u16>) -> Self {
		Self::RefreshFailed { reason: reason.into(), status }
	}

	/// Returns `true` for the terminal refresh failure class.
	pub fn is_refresh_failure(&self) -> bool {
		matches!(self, Self::RefreshFailed { .. })
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base address environment variable is not set.
	#[error("Environment variable `{var}` is not set.")]
	MissingBaseAddress {
		/// Name of the consulted environment variable.
		var: &'static str,
	},
	/// Base address cannot be parsed as a URL.
	#[error("Base address is not a valid URL.")]
	InvalidBaseAddress {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base address uses a scheme other than http/https.
	#[error("Base address must use http or https: {url}.")]
	UnsupportedScheme {
		/// Offending base address.
		url: String,
	},
	/// Base address cannot serve as a base for endpoint paths.
	#[error("Base address cannot be joined with endpoint paths: {url}.")]
	CannotBeABase {
		/// Offending base address.
		url: String,
	},
	/// Refresh timeout must be positive.
	#[error("Refresh timeout must be positive.")]
	NonPositiveRefreshTimeout,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the backend.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
