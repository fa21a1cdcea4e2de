//! Wire data model for the back-office REST contract.
//!
//! Field names mirror the backend's JSON (camelCase except where noted); instants are
//! RFC 3339 strings.

// self
use crate::_prelude::*;

/// Editorial category a video is published under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoCategory {
	/// Short-format shows.
	MiniEmissions,
	/// Testimony recordings.
	Temoignages,
	/// Interview recordings.
	Interviews,
	/// Live broadcast captures.
	EnDirect,
}

/// Staff member profile cached alongside the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
	/// Backend identifier.
	pub id: String,
	/// Login email address.
	pub email: String,
	/// Given name.
	pub name: String,
	/// Family name.
	pub surname: String,
	/// Creation instant, when the endpoint includes it.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
	/// Last-update instant, when the endpoint includes it.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub updated_at: Option<OffsetDateTime>,
}

/// Managed video entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
	/// Backend identifier.
	pub id: String,
	/// Display title.
	#[serde(default)]
	pub title: Option<String>,
	/// Stored file name.
	pub filename: String,
	/// Storage path served by the backend.
	pub path: String,
	/// Free-form description.
	#[serde(default)]
	pub description: Option<String>,
	/// Thumbnail path.
	pub thumbnail: String,
	/// Editorial category, if assigned.
	#[serde(default)]
	pub category: Option<VideoCategory>,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last-update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Blog post with its attached images.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
	/// Backend identifier.
	pub id: String,
	/// Post title.
	pub title: String,
	/// URL slug.
	pub slug: String,
	/// Rich-text body.
	pub content: String,
	/// Owning category identifier, if assigned.
	#[serde(default)]
	pub category_id: Option<String>,
	/// Expanded category, when the endpoint includes it.
	#[serde(default)]
	pub category: Option<Category>,
	/// Images attached to the post.
	#[serde(default)]
	pub images: Vec<Image>,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last-update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Blog category.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	/// Backend identifier.
	pub id: String,
	/// Category name.
	pub name: String,
	/// Posts filed under the category, when the endpoint expands them.
	#[serde(default)]
	pub blogs: Vec<Blog>,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last-update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Uploaded image asset; may be attached to a blog post, a slider, or neither.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
	/// Backend identifier.
	pub id: String,
	/// Display title.
	#[serde(default)]
	pub title: Option<String>,
	/// Alternative text.
	#[serde(default)]
	pub alt: Option<String>,
	/// Storage path served by the backend.
	pub path: String,
	/// Owning blog post, if attached.
	#[serde(default)]
	pub blog_id: Option<String>,
	/// Owning slider, if attached.
	#[serde(default)]
	pub slider_id: Option<String>,
	/// Creation instant, when the endpoint includes it.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
	/// Last-update instant, when the endpoint includes it.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub updated_at: Option<OffsetDateTime>,
}

/// Homepage slider with its image set.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
	/// Backend identifier.
	pub id: String,
	/// Slider title.
	pub title: String,
	/// Whether this slider is the one currently displayed.
	pub is_active: bool,
	/// Images in display order.
	#[serde(default)]
	pub images: Vec<Image>,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last-update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Scheduled scripture verse.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
	/// Backend identifier.
	pub id: String,
	/// Verse text.
	pub text: String,
	/// Scripture reference, e.g. `Jean 3:16`.
	pub reference: String,
	/// Day the verse is scheduled for.
	#[serde(with = "time::serde::rfc3339")]
	pub scheduled_date: OffsetDateTime,
	/// Whether the verse is visible on the public site.
	pub published: bool,
	/// Creation instant, when the endpoint includes it.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
	/// Last-update instant, when the endpoint includes it.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub updated_at: Option<OffsetDateTime>,
}

/// Severity class of a staff notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
	/// Informational notice.
	Info,
	/// Completed operation.
	Success,
	/// Degraded or unusual condition.
	Warning,
	/// Failed operation.
	Error,
}

/// Staff notification entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
	/// Backend identifier.
	pub id: String,
	/// Severity class.
	#[serde(rename = "type")]
	pub kind: NotificationKind,
	/// Short headline.
	pub title: String,
	/// Longer body, if any.
	#[serde(default)]
	pub message: Option<String>,
	/// Whether the staff member has read the entry.
	pub is_read: bool,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

/// Notification listing plus its unread count.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationFeed {
	/// Notifications, newest first.
	pub items: Vec<Notification>,
	/// Number of unread entries.
	pub unread: u64,
}

/// Per-category video tally for the dashboard chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
	/// Category label.
	pub name: String,
	/// Number of videos in the category.
	pub value: u64,
}

/// Dashboard statistics.
///
/// This endpoint predates the camelCase convention and keeps snake_case field names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardStats {
	/// Total number of videos.
	pub total_videos: u64,
	/// Number of short-format shows.
	pub mini_emissions: u64,
	/// Total number of blog posts.
	pub total_blogs: u64,
	/// Total number of scheduled verses.
	pub total_verses: u64,
	/// Per-category tallies for the chart.
	#[serde(default)]
	pub videos_by_category: Vec<CategoryCount>,
}

/// Human-readable resource usage breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageBreakdown {
	/// Total capacity.
	pub total: String,
	/// Free capacity.
	pub free: String,
	/// Used capacity.
	pub used: String,
	/// Used percentage, preformatted.
	pub percentage: String,
}

/// Disk usage, which the backend cannot always sample.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiskUsage {
	/// Disk statistics were available.
	Available(UsageBreakdown),
	/// Disk statistics could not be sampled.
	Unavailable {
		/// Backend-supplied reason.
		error: String,
	},
}

/// Host statistics for the system status panel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemStats {
	/// Operating system label.
	pub os: String,
	/// Preformatted uptime.
	pub uptime: String,
	/// Memory usage breakdown.
	pub memory: UsageBreakdown,
	/// Disk usage breakdown, when available.
	pub disk: DiskUsage,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn video_decodes_wire_names() {
		let payload = r#"{
			"id": "vid-1",
			"filename": "episode-01.mp4",
			"path": "/media/episode-01.mp4",
			"thumbnail": "/media/episode-01.jpg",
			"category": "MINI_EMISSIONS",
			"createdAt": "2025-03-01T10:00:00Z",
			"updatedAt": "2025-03-02T10:00:00Z"
		}"#;
		let video: Video =
			serde_json::from_str(payload).expect("Video fixture should deserialize.");

		assert_eq!(video.category, Some(VideoCategory::MiniEmissions));
		assert!(video.title.is_none());
		assert_eq!(video.created_at.to_calendar_date().2, 1);
	}

	#[test]
	fn disk_usage_accepts_both_shapes() {
		let available = r#"{"total":"100G","free":"40G","used":"60G","percentage":"60%"}"#;
		let unavailable = r#"{"error":"statfs unsupported"}"#;

		assert!(matches!(
			serde_json::from_str::<DiskUsage>(available)
				.expect("Available disk fixture should deserialize."),
			DiskUsage::Available(_),
		));
		assert!(matches!(
			serde_json::from_str::<DiskUsage>(unavailable)
				.expect("Unavailable disk fixture should deserialize."),
			DiskUsage::Unavailable { .. },
		));
	}

	#[test]
	fn notification_kind_uses_wire_casing() {
		let feed = r#"{
			"items": [{
				"id": "n-1",
				"type": "WARNING",
				"title": "Disk almost full",
				"isRead": false,
				"createdAt": "2025-03-01T10:00:00Z"
			}],
			"unread": 1
		}"#;
		let feed: NotificationFeed =
			serde_json::from_str(feed).expect("Notification feed fixture should deserialize.");

		assert_eq!(feed.items[0].kind, NotificationKind::Warning);
		assert_eq!(feed.unread, 1);
	}
}
