//! Authentication and staff account operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::StaffProfile,
	session::{AccessToken, Session},
};

/// Login form payload.
#[derive(Clone, Debug, Serialize)]
pub struct LoginCredentials {
	/// Login email address.
	pub email: String,
	/// Plaintext password; sent over the transport only.
	pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterForm {
	/// Login email address.
	pub email: String,
	/// Given name.
	pub name: String,
	/// Family name.
	pub surname: String,
	/// Plaintext password; sent over the transport only.
	pub password: String,
}

/// Response returned by the registration endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
	/// Backend-supplied confirmation message.
	pub message: String,
}

/// Staff profile update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
	/// New email address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// New given name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// New family name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub surname: Option<String>,
}

/// Password change payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
	/// Current password, verified by the backend.
	pub current_password: String,
	/// Replacement password.
	pub new_password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
	access_token: String,
	user: StaffProfile,
}

impl ApiClient {
	/// Logs in and persists the returned session (access token + cached profile).
	pub async fn login(&self, credentials: &LoginCredentials) -> Result<StaffProfile> {
		let payload: LoginResponse =
			self.request_json(RequestSpec::post_json("/auth/login", credentials)?).await?;
		let profile = payload.user.clone();

		self.store
			.save(Session::new(AccessToken::new(payload.access_token), Some(payload.user)))
			.await?;

		Ok(profile)
	}

	/// Registers a new staff account; the account logs in separately afterwards.
	pub async fn register(&self, form: &RegisterForm) -> Result<RegisterResponse> {
		self.request_json(RequestSpec::post_json("/auth/register", form)?).await
	}

	/// Logs out: asks the backend to destroy the refresh cookie, then clears the local
	/// session and forces login navigation.
	///
	/// Local cleanup runs whether or not the backend call succeeds, so a dead backend
	/// cannot strand a client in a half-authenticated state.
	pub async fn logout(&self) -> Result<()> {
		let result = self.request_unit(RequestSpec::post("/auth/logout")).await;

		let _ = self.store.clear().await;

		self.navigator.force_login();

		result
	}

	/// Fetches the staff profile.
	pub async fn profile(&self) -> Result<StaffProfile> {
		self.request_json(RequestSpec::get("/admin/profile")).await
	}

	/// Updates the staff profile and refreshes the copy cached in the session.
	pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<StaffProfile> {
		let profile: StaffProfile =
			self.request_json(RequestSpec::patch_json("/admin/profile", update)?).await?;

		if let Some(mut session) = self.session().await? {
			session.profile = Some(profile.clone());
			self.store.save(session).await?;
		}

		Ok(profile)
	}

	/// Changes the account password.
	pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
		self.request_unit(RequestSpec::post_json("/admin/password", change)?).await
	}
}
