//! Scheduled scripture verse operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::Verse,
};

/// Payload for scheduling a verse.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerse {
	/// Verse text.
	pub text: String,
	/// Scripture reference, e.g. `Jean 3:16`.
	pub reference: String,
	/// Day the verse is scheduled for.
	#[serde(with = "time::serde::rfc3339")]
	pub scheduled_date: OffsetDateTime,
	/// Whether the verse is visible on the public site.
	pub published: bool,
}

/// Partial verse update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVerse {
	/// New verse text.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	/// New scripture reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reference: Option<String>,
	/// New scheduled day.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub scheduled_date: Option<OffsetDateTime>,
	/// New visibility flag.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub published: Option<bool>,
}

impl ApiClient {
	/// Lists every scheduled verse.
	pub async fn verses(&self) -> Result<Vec<Verse>> {
		self.request_json(RequestSpec::get("/verses")).await
	}

	/// Schedules a verse.
	pub async fn create_verse(&self, verse: &CreateVerse) -> Result<Verse> {
		self.request_json(RequestSpec::post_json("/verses", verse)?).await
	}

	/// Applies a partial update to a verse.
	pub async fn update_verse(&self, id: &str, update: &UpdateVerse) -> Result<Verse> {
		self.request_json(RequestSpec::patch_json(format!("/verses/{id}"), update)?).await
	}

	/// Deletes a verse.
	pub async fn delete_verse(&self, id: &str) -> Result<()> {
		self.request_unit(RequestSpec::delete(format!("/verses/{id}"))).await
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn create_payload_formats_the_scheduled_day() {
		let verse = CreateVerse {
			text: "Car Dieu a tant aimé le monde...".into(),
			reference: "Jean 3:16".into(),
			scheduled_date: macros::datetime!(2025-04-06 00:00 UTC),
			published: true,
		};
		let payload = serde_json::to_value(&verse).expect("Verse fixture should serialize.");

		assert_eq!(payload["scheduledDate"], "2025-04-06T00:00:00Z");
		assert_eq!(payload["published"], true);
	}
}
