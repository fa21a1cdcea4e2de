//! Simple file-backed [`SessionStore`] for CLI tooling that keeps a session across runs.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	session::Session,
	store::{SessionStore, StoreError, StoreFuture},
};

/// Persists the session to a JSON file after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<Option<Session>>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading an existing session.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let snapshot = if path.exists() { Self::load_snapshot(&path)? } else { None };

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	fn load_snapshot(path: &Path) -> Result<Option<Session>, StoreError> {
		let metadata = path.metadata().map_err(|e| StoreError::Backend {
			message: format!("Failed to inspect {}: {e}", path.display()),
		})?;

		if metadata.len() == 0 {
			return Ok(None);
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;
		let session: Session =
			serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		Ok(Some(session))
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}
		Ok(())
	}

	fn persist_locked(&self, contents: &Option<Session>) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		match contents {
			Some(session) => {
				let serialized =
					serde_json::to_vec_pretty(session).map_err(|e| StoreError::Serialization {
						message: format!("Failed to serialize session snapshot: {e}"),
					})?;
				let mut tmp_path = self.path.clone();

				tmp_path.set_extension("tmp");

				{
					let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
						message: format!("Failed to create {}: {e}", tmp_path.display()),
					})?;

					file.write_all(&serialized).map_err(|e| StoreError::Backend {
						message: format!("Failed to write {}: {e}", tmp_path.display()),
					})?;
					file.sync_all().map_err(|e| StoreError::Backend {
						message: format!("Failed to sync {}: {e}", tmp_path.display()),
					})?;
				}

				fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
					message: format!("Failed to replace {}: {e}", self.path.display()),
				})
			},
			None =>
				if self.path.exists() {
					fs::remove_file(&self.path).map_err(|e| StoreError::Backend {
						message: format!("Failed to remove {}: {e}", self.path.display()),
					})
				} else {
					Ok(())
				},
		}
	}
}
impl SessionStore for FileStore {
	fn load(&self) -> StoreFuture<'_, Option<Session>> {
		Box::pin(async move { Ok(self.inner.read().clone()) })
	}

	fn save(&self, session: Session) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			*guard = Some(session);
			self.persist_locked(&guard)?;

			Ok(())
		})
	}

	fn clear(&self) -> StoreFuture<'_, Option<Session>> {
		Box::pin(async move {
			let mut guard = self.inner.write();
			let previous = guard.take();

			self.persist_locked(&guard)?;

			Ok(previous)
		})
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{env, process};
	// crates.io
	use tokio::runtime::Runtime;
	// self
	use super::*;
	use crate::session::AccessToken;

	fn temp_path() -> PathBuf {
		let unique = format!(
			"backoffice_api_file_store_{}_{}.json",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);

		env::temp_dir().join(unique)
	}

	#[test]
	fn save_and_reload_round_trip() {
		let path = temp_path();
		let store = FileStore::open(&path).expect("Failed to open file store snapshot.");
		let session = Session::new(AccessToken::new("persisted-token"), None);
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		rt.block_on(store.save(session.clone()))
			.expect("Failed to save fixture session to file store.");
		drop(store);

		let reopened = FileStore::open(&path).expect("Failed to reopen file store snapshot.");
		let fetched = rt
			.block_on(reopened.load())
			.expect("Failed to load fixture session from file store.")
			.expect("File store lost session after reopen.");

		assert_eq!(fetched.access_token.expose(), session.access_token.expose());

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary file store snapshot {}: {e}", path.display())
		});
	}

	#[test]
	fn clear_removes_the_snapshot_file() {
		let path = temp_path();
		let store = FileStore::open(&path).expect("Failed to open file store snapshot.");
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		rt.block_on(store.save(Session::new(AccessToken::new("short-lived"), None)))
			.expect("Failed to save fixture session before clearing.");

		assert!(path.exists());

		let previous =
			rt.block_on(store.clear()).expect("Failed to clear session from file store.");

		assert!(previous.is_some());
		assert!(!path.exists());
		assert!(
			rt.block_on(store.load())
				.expect("Failed to load after clearing the file store.")
				.is_none()
		);
	}
}
