//! Video catalogue operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::{Video, VideoCategory},
};

/// Payload for creating a video entry.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideo {
	/// Display title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Stored file name.
	pub filename: String,
	/// Storage path served by the backend.
	pub path: String,
	/// Free-form description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Thumbnail path.
	pub thumbnail: String,
	/// Editorial category.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<VideoCategory>,
}

/// Partial video update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideo {
	/// New display title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// New description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// New thumbnail path.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<String>,
	/// New editorial category.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<VideoCategory>,
}

impl ApiClient {
	/// Lists every video.
	pub async fn videos(&self) -> Result<Vec<Video>> {
		self.request_json(RequestSpec::get("/videos")).await
	}

	/// Fetches one video by identifier.
	pub async fn video(&self, id: &str) -> Result<Video> {
		self.request_json(RequestSpec::get(format!("/videos/{id}"))).await
	}

	/// Creates a video entry.
	pub async fn create_video(&self, video: &CreateVideo) -> Result<Video> {
		self.request_json(RequestSpec::post_json("/videos", video)?).await
	}

	/// Applies a partial update to a video.
	pub async fn update_video(&self, id: &str, update: &UpdateVideo) -> Result<Video> {
		self.request_json(RequestSpec::patch_json(format!("/videos/{id}"), update)?).await
	}

	/// Deletes a video.
	pub async fn delete_video(&self, id: &str) -> Result<()> {
		self.request_unit(RequestSpec::delete(format!("/videos/{id}"))).await
	}
}
