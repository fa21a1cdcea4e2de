//! Staff session record and lifecycle helpers.

// self
use crate::{_prelude::*, domain::StaffProfile, session::token::AccessToken};

/// Persisted session for an authenticated staff member.
///
/// Created on a successful login, the access token is replaced on every successful refresh
/// (the cached profile survives rotation), and the whole record is destroyed on logout or on
/// an unrecoverable refresh failure.
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
	/// Bearer token attached to every API call; callers must avoid logging it.
	pub access_token: AccessToken,
	/// Cached staff profile returned by the login endpoint, if any.
	pub profile: Option<StaffProfile>,
	/// Instant the session was established or last rotated.
	#[serde(with = "time::serde::rfc3339")]
	pub established_at: OffsetDateTime,
}
impl Session {
	/// Creates a session established at the current instant.
	pub fn new(access_token: AccessToken, profile: Option<StaffProfile>) -> Self {
		Self { access_token, profile, established_at: OffsetDateTime::now_utc() }
	}

	/// Returns a copy carrying a freshly minted access token; the cached profile survives.
	pub fn rotated(&self, access_token: AccessToken) -> Self {
		Self {
			access_token,
			profile: self.profile.clone(),
			established_at: OffsetDateTime::now_utc(),
		}
	}
}
impl Debug for Session {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("access_token", &"<redacted>")
			.field("profile", &self.profile)
			.field("established_at", &self.established_at)
			.finish()
	}
}
