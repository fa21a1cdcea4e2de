//! Client configuration: backend base address and refresh-call tuning.

// std
use std::env;
// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const BASE_ADDRESS_VAR: &str = "BACKOFFICE_API_ADDRESS";

/// Validated configuration for an API client instance.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Base address every endpoint path is joined onto.
	pub base_address: Url,
	/// Upper bound on the refresh call; expiry is treated as a terminal refresh failure.
	pub refresh_timeout: Duration,
}
impl ClientConfig {
	/// Default upper bound on the refresh call.
	///
	/// A stalled refresh would otherwise park every concurrent request indefinitely, so the
	/// call always carries a deadline.
	pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::seconds(10);

	/// Returns a builder seeded with the provided base address string.
	pub fn builder(base_address: impl Into<String>) -> ClientConfigBuilder {
		ClientConfigBuilder::new(base_address)
	}

	/// Builds a configuration from the externally managed `BACKOFFICE_API_ADDRESS` variable.
	pub fn from_env() -> Result<Self, ConfigError> {
		let raw = env::var(BASE_ADDRESS_VAR)
			.map_err(|_| ConfigError::MissingBaseAddress { var: BASE_ADDRESS_VAR })?;

		Self::builder(raw).build()
	}

	/// Joins an endpoint path onto the base address.
	pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		self.base_address
			.join(path.trim_start_matches('/'))
			.map_err(|e| ConfigError::InvalidBaseAddress { source: e })
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Clone, Debug)]
pub struct ClientConfigBuilder {
	base_address: String,
	refresh_timeout: Duration,
}
impl ClientConfigBuilder {
	fn new(base_address: impl Into<String>) -> Self {
		Self {
			base_address: base_address.into(),
			refresh_timeout: ClientConfig::DEFAULT_REFRESH_TIMEOUT,
		}
	}

	/// Overrides the refresh-call deadline.
	pub fn refresh_timeout(mut self, timeout: Duration) -> Self {
		self.refresh_timeout = timeout;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let mut base_address = Url::parse(&self.base_address)
			.map_err(|e| ConfigError::InvalidBaseAddress { source: e })?;

		if !matches!(base_address.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { url: base_address.to_string() });
		}
		if base_address.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase { url: base_address.to_string() });
		}
		if !self.refresh_timeout.is_positive() {
			return Err(ConfigError::NonPositiveRefreshTimeout);
		}
		// Url::join drops the last path segment without this.
		if !base_address.path().ends_with('/') {
			let path = format!("{}/", base_address.path());

			base_address.set_path(&path);
		}

		Ok(ClientConfig { base_address, refresh_timeout: self.refresh_timeout })
	}
}
