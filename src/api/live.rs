//! Live-recording file operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
};

impl ApiClient {
	/// Lists recorded live-stream file names.
	pub async fn live_recordings(&self) -> Result<Vec<String>> {
		self.request_json(RequestSpec::get("/live/list")).await
	}

	/// Deletes a recording by file name.
	pub async fn delete_recording(&self, filename: &str) -> Result<()> {
		self.request_unit(RequestSpec::delete(format!("/live/delete/{filename}"))).await
	}

	/// Downloads a recording's raw bytes; the caller decides where they land.
	pub async fn download_recording(&self, filename: &str) -> Result<Vec<u8>> {
		self.request_bytes(RequestSpec::get(format!("/live/download/{filename}"))).await
	}
}
