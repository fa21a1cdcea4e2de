//! Homepage slider operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::Slider,
};

/// Image descriptor embedded in a slider creation payload.
#[derive(Clone, Debug, Serialize)]
pub struct NewSliderImage {
	/// Storage path of an already-uploaded image.
	pub path: String,
	/// Display title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Alternative text.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alt: Option<String>,
}

/// Payload for creating a slider with its initial image set.
#[derive(Clone, Debug, Serialize)]
pub struct CreateSlider {
	/// Slider title.
	pub title: String,
	/// Initial image set, created alongside the slider.
	pub images: Vec<NewSliderImage>,
}

#[derive(Clone, Debug, Serialize)]
struct SliderTitle {
	title: String,
}

impl ApiClient {
	/// Lists every slider with its images expanded.
	pub async fn sliders(&self) -> Result<Vec<Slider>> {
		self.request_json(RequestSpec::get("/sliders/all?includeImages=true")).await
	}

	/// Fetches one slider, images expanded.
	pub async fn slider(&self, id: &str) -> Result<Slider> {
		self.request_json(RequestSpec::get(format!("/sliders/{id}?includeImages=true"))).await
	}

	/// Creates a slider together with its initial images.
	pub async fn create_slider(&self, slider: &CreateSlider) -> Result<Slider> {
		self.request_json(RequestSpec::post_json("/sliders/add", slider)?).await
	}

	/// Renames a slider.
	pub async fn rename_slider(&self, id: &str, title: impl Into<String>) -> Result<Slider> {
		self.request_json(RequestSpec::patch_json(
			format!("/sliders/update/{id}"),
			&SliderTitle { title: title.into() },
		)?)
		.await
	}

	/// Deletes a slider; its images survive as unattached assets.
	pub async fn delete_slider(&self, id: &str) -> Result<()> {
		self.request_unit(RequestSpec::delete(format!("/sliders/delete/{id}"))).await
	}

	/// Activates a slider; the backend deactivates the previously active one.
	pub async fn activate_slider(&self, id: &str) -> Result<Slider> {
		self.request_json(RequestSpec::post(format!("/sliders/activate/{id}"))).await
	}
}
