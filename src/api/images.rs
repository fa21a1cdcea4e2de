//! Image asset operations and slider/blog attachment reconciliation.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, MultipartPayload, RequestSpec},
	domain::Image,
};

/// Owned upload payload for a single image.
///
/// Kept as owned bytes so the multipart form can be rebuilt if the request is replayed
/// after a token refresh.
#[derive(Clone, Debug)]
pub struct ImageUpload {
	/// File name reported to the backend.
	pub filename: String,
	/// Raw image bytes.
	pub bytes: Vec<u8>,
	/// Display title.
	pub title: Option<String>,
	/// Alternative text.
	pub alt: Option<String>,
}
impl ImageUpload {
	fn into_payload(self) -> MultipartPayload {
		let mut fields = Vec::new();

		if let Some(title) = self.title {
			fields.push(("title", title));
		}
		if let Some(alt) = self.alt {
			fields.push(("alt", alt));
		}

		MultipartPayload { file_field: "file", filename: self.filename, bytes: self.bytes, fields }
	}
}

/// Add/remove batches produced by diffing an image selection against its initial state.
///
/// Attachment is many-to-many from the editor's point of view: the staff member toggles a
/// selection set in the UI and the client reconciles it against what the backend already
/// has, issuing one add call and one remove call instead of per-image churn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionDiff {
	/// Identifiers selected now but absent from the initial set.
	pub to_add: Vec<String>,
	/// Identifiers present in the initial set but no longer selected.
	pub to_remove: Vec<String>,
}
impl SelectionDiff {
	/// Diffs a selection against the initially attached set.
	pub fn between<'a, I, S>(initial: I, selected: S) -> Self
	where
		I: IntoIterator<Item = &'a str>,
		S: IntoIterator<Item = &'a str>,
	{
		let initial: BTreeSet<&str> = initial.into_iter().collect();
		let selected: BTreeSet<&str> = selected.into_iter().collect();
		let to_add = selected.difference(&initial).map(|id| (*id).to_owned()).collect();
		let to_remove = initial.difference(&selected).map(|id| (*id).to_owned()).collect();

		Self { to_add, to_remove }
	}

	/// Returns `true` when the selection matches the initial set.
	pub fn is_empty(&self) -> bool {
		self.to_add.is_empty() && self.to_remove.is_empty()
	}
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AttachToSlider {
	slider_id: String,
	images_ids: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AttachToBlog {
	blog_id: String,
	images_ids: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetachImages {
	images_ids: Vec<String>,
}

impl ApiClient {
	/// Lists every image asset.
	pub async fn images(&self) -> Result<Vec<Image>> {
		self.request_json(RequestSpec::get("/images/all")).await
	}

	/// Lists images not attached to any slider.
	pub async fn images_not_in_slider(&self) -> Result<Vec<Image>> {
		self.request_json(RequestSpec::get("/images/not-in-slider")).await
	}

	/// Uploads one image.
	pub async fn upload_image(&self, upload: ImageUpload) -> Result<Image> {
		self.request_json(RequestSpec::multipart("/images/add", upload.into_payload())).await
	}

	/// Deletes an image; the backend detaches it from sliders and posts first.
	pub async fn delete_image(&self, id: &str) -> Result<()> {
		self.request_unit(RequestSpec::delete(format!("/images/delete/{id}"))).await
	}

	/// Attaches images to a slider.
	pub async fn add_images_to_slider(&self, slider_id: &str, images_ids: Vec<String>) -> Result<()> {
		self.request_unit(RequestSpec::post_json(
			"/images/add-to-slider",
			&AttachToSlider { slider_id: slider_id.into(), images_ids },
		)?)
		.await
	}

	/// Detaches images from whichever slider holds them.
	pub async fn remove_images_from_slider(&self, images_ids: Vec<String>) -> Result<()> {
		self.request_unit(RequestSpec::post_json(
			"/images/remove-from-slider",
			&DetachImages { images_ids },
		)?)
		.await
	}

	/// Attaches images to a blog post.
	pub async fn add_images_to_blog(&self, blog_id: &str, images_ids: Vec<String>) -> Result<()> {
		self.request_unit(RequestSpec::post_json(
			"/images/add-to-blog",
			&AttachToBlog { blog_id: blog_id.into(), images_ids },
		)?)
		.await
	}

	/// Detaches images from whichever blog post holds them.
	pub async fn remove_images_from_blog(&self, images_ids: Vec<String>) -> Result<()> {
		self.request_unit(RequestSpec::post_json(
			"/images/remove-from-blog",
			&DetachImages { images_ids },
		)?)
		.await
	}

	/// Applies a selection diff to a blog post's image set.
	pub async fn reconcile_blog_images(&self, blog_id: &str, diff: SelectionDiff) -> Result<()> {
		if !diff.to_add.is_empty() {
			self.add_images_to_blog(blog_id, diff.to_add).await?;
		}
		if !diff.to_remove.is_empty() {
			self.remove_images_from_blog(diff.to_remove).await?;
		}

		Ok(())
	}

	/// Applies a selection diff to a slider's image set.
	pub async fn reconcile_slider_images(
		&self,
		slider_id: &str,
		diff: SelectionDiff,
	) -> Result<()> {
		if !diff.to_add.is_empty() {
			self.add_images_to_slider(slider_id, diff.to_add).await?;
		}
		if !diff.to_remove.is_empty() {
			self.remove_images_from_slider(diff.to_remove).await?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn diff_splits_additions_and_removals() {
		let diff =
			SelectionDiff::between(["a", "b", "c"], ["b", "c", "d", "e"]);

		assert_eq!(diff.to_add, vec!["d".to_owned(), "e".to_owned()]);
		assert_eq!(diff.to_remove, vec!["a".to_owned()]);
		assert!(!diff.is_empty());
	}

	#[test]
	fn identical_sets_produce_an_empty_diff() {
		let diff = SelectionDiff::between(["a", "b"], ["b", "a"]);

		assert!(diff.is_empty());
	}

	#[test]
	fn attachment_payloads_use_wire_names() {
		let payload = serde_json::to_value(AttachToSlider {
			slider_id: "s-1".into(),
			images_ids: vec!["i-1".into()],
		})
		.expect("Attachment fixture should serialize.");

		assert_eq!(payload, serde_json::json!({ "sliderId": "s-1", "imagesIds": ["i-1"] }));
	}
}
