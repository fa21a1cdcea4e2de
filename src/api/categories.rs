//! Blog category operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::Category,
};

#[derive(Clone, Debug, Serialize)]
struct CategoryName {
	name: String,
}

impl ApiClient {
	/// Lists every category.
	pub async fn categories(&self) -> Result<Vec<Category>> {
		self.request_json(RequestSpec::get("/categories")).await
	}

	/// Creates a category.
	pub async fn create_category(&self, name: impl Into<String>) -> Result<Category> {
		self.request_json(RequestSpec::post_json(
			"/categories",
			&CategoryName { name: name.into() },
		)?)
		.await
	}

	/// Renames a category.
	pub async fn rename_category(&self, id: &str, name: impl Into<String>) -> Result<Category> {
		self.request_json(RequestSpec::patch_json(
			format!("/categories/{id}"),
			&CategoryName { name: name.into() },
		)?)
		.await
	}

	/// Deletes a category; posts filed under it fall back to uncategorized.
	pub async fn delete_category(&self, id: &str) -> Result<()> {
		self.request_unit(RequestSpec::delete(format!("/categories/{id}"))).await
	}
}
