//! Staff notification operations.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::NotificationFeed,
};

impl ApiClient {
	/// Fetches the notification feed with its unread count.
	pub async fn notifications(&self) -> Result<NotificationFeed> {
		self.request_json(RequestSpec::get("/notifications")).await
	}

	/// Marks one notification as read.
	pub async fn mark_notification_read(&self, id: &str) -> Result<()> {
		self.request_unit(RequestSpec::patch(format!("/notifications/read/{id}"))).await
	}

	/// Marks every notification as read.
	pub async fn mark_all_notifications_read(&self) -> Result<()> {
		self.request_unit(RequestSpec::patch("/notifications/read-all")).await
	}
}
