//! Dashboard and host statistics.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, RequestSpec},
	domain::{DashboardStats, SystemStats},
};

impl ApiClient {
	/// Fetches content tallies for the dashboard.
	pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
		self.request_json(RequestSpec::get("/dashboard/stats")).await
	}

	/// Fetches host resource usage for the system status panel.
	pub async fn system_stats(&self) -> Result<SystemStats> {
		self.request_json(RequestSpec::get("/system/usage")).await
	}
}
