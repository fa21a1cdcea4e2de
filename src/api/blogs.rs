//! Blog post operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::Blog,
};

/// Payload for creating a blog post.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
	/// Post title.
	pub title: String,
	/// URL slug.
	pub slug: String,
	/// Rich-text body.
	pub content: String,
	/// Owning category identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_id: Option<String>,
}

/// Partial blog update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlog {
	/// New title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// New slug.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub slug: Option<String>,
	/// New body.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
	/// New owning category identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_id: Option<String>,
}

impl ApiClient {
	/// Lists every blog post.
	pub async fn blogs(&self) -> Result<Vec<Blog>> {
		self.request_json(RequestSpec::get("/blogs")).await
	}

	/// Fetches one blog post by identifier.
	pub async fn blog(&self, id: &str) -> Result<Blog> {
		self.request_json(RequestSpec::get(format!("/blogs/{id}"))).await
	}

	/// Creates a blog post.
	pub async fn create_blog(&self, blog: &CreateBlog) -> Result<Blog> {
		self.request_json(RequestSpec::post_json("/blogs", blog)?).await
	}

	/// Applies a partial update to a blog post.
	pub async fn update_blog(&self, id: &str, update: &UpdateBlog) -> Result<Blog> {
		self.request_json(RequestSpec::patch_json(format!("/blogs/{id}"), update)?).await
	}

	/// Deletes a blog post.
	pub async fn delete_blog(&self, id: &str) -> Result<()> {
		self.request_unit(RequestSpec::delete(format!("/blogs/{id}"))).await
	}
}
